// src/app.rs
use eframe::egui;
use rfd::FileDialog;
use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use crate::config::Settings;
use crate::file::SessionExporter;
use crate::state::AppState;
use crate::ui::{dashboard, upload};

pub const APP_TITLE: &str = "AI Image Visor";
const STORAGE_KEY: &str = "visor_settings";
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "png", "jpeg"];

#[derive(Default, Serialize, Deserialize)]
struct PersistedSettings {
    last_open_dir: Option<PathBuf>,
}

pub struct VisorApp {
    state: AppState,
}

impl VisorApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let persisted: PersistedSettings = cc.storage
            .and_then(|s| eframe::get_value(s, STORAGE_KEY))
            .unwrap_or_default();

        let mut state = AppState::new(settings);
        state.last_open_dir = persisted.last_open_dir;

        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Upload image...").clicked() {
                    self.upload_image();
                    ui.close_menu();
                }
                let can_export = !self.state.session.is_empty();
                if ui.add_enabled(can_export, egui::Button::new("Export session as CSV...")).clicked() {
                    self.export_session();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });
    }

    fn upload_image(&mut self) {
        let mut file_dialog = FileDialog::new()
            .add_filter("Images", &IMAGE_EXTENSIONS)
            .set_title("Upload image");
        if let Some(dir) = &self.state.last_open_dir {
            file_dialog = file_dialog.set_directory(dir);
        }

        if let Some(path) = file_dialog.pick_file() {
            if let Some(parent) = path.parent() {
                self.state.last_open_dir = Some(parent.to_path_buf());
            }
            if let Err(e) = self.state.analyze_upload(&path) {
                log::warn!("Upload failed: {}", e);
                self.state.error_message = Some(format!("Error analyzing image: {}", e));
            }
        }
    }

    fn export_session(&mut self) {
        let mut file_dialog = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name(SessionExporter::default_file_name())
            .set_title("Export session");
        if let Some(dir) = &self.state.last_open_dir {
            file_dialog = file_dialog.set_directory(dir);
        }

        if let Some(path) = file_dialog.save_file() {
            match self.state.export_session(&path) {
                Ok(()) => self.state.error_message = None,
                Err(e) => {
                    log::warn!("Export failed: {:#}", e);
                    self.state.error_message = Some(format!("Error exporting session: {:#}", e));
                }
            }
        }
    }
}

fn show_run_notes(ui: &mut egui::Ui, settings: &Settings) {
    let mut notes = Vec::new();
    if let Some(seed) = settings.seed {
        notes.push(format!("Seeded run ({})", seed));
    }
    if !settings.override_rules_enabled {
        notes.push("Demo overrides off".to_string());
    }
    if !notes.is_empty() {
        ui.label(egui::RichText::new(notes.join(" · ")).small().weak());
    }
}

impl eframe::App for VisorApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let persisted = PersistedSettings {
            last_open_dir: self.state.last_open_dir.clone(),
        };
        eframe::set_value(storage, STORAGE_KEY, &persisted);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::TopBottomPanel::top("title_panel").show(ctx, |ui| {
            ui.heading("🪐 Image analysis (simulated)");
            ui.label("Upload an image and see what the model's analysis would look like.");
            show_run_notes(ui, &self.state.settings);
            if let Some(error) = &self.state.error_message {
                ui.colored_label(egui::Color32::RED, error.as_str());
            }
            ui.add_space(4.0);
        });

        // 1:2 split between the upload column and the dashboard
        let upload_width = ctx.screen_rect().width() / 3.0;
        let mut upload_requested = false;
        egui::SidePanel::left("upload_panel")
            .resizable(true)
            .default_width(upload_width)
            .show(ctx, |ui| {
                upload_requested = upload::show_upload_panel(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::show_dashboard(ui, &self.state.session);
        });

        if upload_requested {
            self.upload_image();
        }
    }
}
