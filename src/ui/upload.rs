// src/ui/upload.rs
use eframe::egui;
use crate::state::{AppState, CurrentUpload};

/// Left column. Returns `true` when the user asked to pick a new image.
pub fn show_upload_panel(ui: &mut egui::Ui, state: &AppState) -> bool {
    let mut upload_requested = false;

    ui.heading("Upload an image");
    ui.add_space(4.0);
    if ui.button("📸 Choose image (jpg, png, jpeg)").clicked() {
        upload_requested = true;
    }

    ui.add_space(8.0);
    ui.separator();
    ui.add_space(8.0);

    egui::ScrollArea::vertical()
        .id_source("upload_panel_scroll")
        .show(ui, |ui| {
            if let Some(upload) = &state.current_upload {
                show_image_preview(ui, upload);
                ui.add_space(12.0);
                show_analysis_result(ui, upload);
            }
        });

    upload_requested
}

fn show_image_preview(ui: &mut egui::Ui, upload: &CurrentUpload) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        let uri = format!("file://{}", upload.path.display());
        ui.add(egui::Image::new(uri).max_width(ui.available_width()));
        ui.label(egui::RichText::new("Uploaded image").small().weak());
    });
}

fn show_analysis_result(ui: &mut egui::Ui, upload: &CurrentUpload) {
    let result = &upload.result;

    ui.heading("🔍 Analysis results");
    ui.add_space(4.0);

    egui::Grid::new("analysis_result_grid")
        .num_columns(2)
        .spacing([12.0, 4.0])
        .show(ui, |ui| {
            ui.strong("Person present:");
            ui.label(if result.has_person { "✅ Yes" } else { "❌ No" });
            ui.end_row();

            ui.strong("Estimated age:");
            ui.label(result.estimated_age_bracket.as_str());
            ui.end_row();

            ui.strong("Estimated gender:");
            ui.label(result.estimated_gender.as_str());
            ui.end_row();
        });

    ui.add_space(8.0);
    ui.strong("Detected objects:");
    match serde_json::to_string_pretty(&result.detections) {
        Ok(json) => {
            ui.code(json);
        }
        Err(e) => {
            ui.colored_label(egui::Color32::RED, format!("Cannot display detections: {}", e));
        }
    }
}
