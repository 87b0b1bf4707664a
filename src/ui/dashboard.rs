// src/ui/dashboard.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::state::session::{age_distribution, gender_distribution};
use crate::state::{SessionAggregator, SessionRecord};

const GENDER_BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 150, 255);
const AGE_BAR_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);

/// Right column: session table plus the two distribution charts.
pub fn show_dashboard(ui: &mut egui::Ui, session: &SessionAggregator) {
    ui.heading("🧾 Analyzed images dashboard");
    ui.add_space(4.0);

    if session.is_empty() {
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label("ℹ Upload an image to start filling the dashboard.");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .id_source("dashboard_scroll")
        .show(ui, |ui| {
            ui.label(format!("{} images analyzed", session.len()));
            ui.add_space(4.0);
            ui.push_id("session_table", |ui| {
                show_session_table(ui, session.records());
            });

            ui.add_space(16.0);
            ui.heading("📊 Gender distribution");
            let genders: Vec<(String, usize)> = gender_distribution(session.records())
                .into_iter()
                .map(|(gender, count)| (gender.to_string(), count))
                .collect();
            draw_bar_chart(ui, "gender_distribution", &genders, GENDER_BAR_COLOR);

            ui.add_space(16.0);
            ui.heading("👶 Age distribution");
            let ages: Vec<(String, usize)> = age_distribution(session.records())
                .into_iter()
                .map(|(bracket, count)| (bracket.to_string(), count))
                .collect();
            draw_bar_chart(ui, "age_distribution", &ages, AGE_BAR_COLOR);
        });
}

fn show_session_table(ui: &mut egui::Ui, records: &[SessionRecord]) {
    let row_height = ui.text_style_height(&egui::TextStyle::Body) * 1.3;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(120.0)) // Filename
        .column(Column::initial(70.0).at_least(50.0)) // Age
        .column(Column::initial(100.0).at_least(60.0)) // Gender
        .column(Column::initial(60.0).at_least(50.0)) // Person
        .header(row_height, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("Age");
            });
            header.col(|ui| {
                ui.strong("Gender");
            });
            header.col(|ui| {
                ui.strong("Person");
            });
        })
        .body(|mut body| {
            for record in records {
                body.row(row_height, |mut row| {
                    row.col(|ui| {
                        ui.label(record.filename.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.age_bracket.as_str());
                    });
                    row.col(|ui| {
                        ui.label(record.gender.as_str());
                    });
                    row.col(|ui| {
                        ui.label(if record.has_person { "Yes" } else { "No" });
                    });
                });
            }
        });
}

fn draw_bar_chart(ui: &mut egui::Ui, id: &str, entries: &[(String, usize)], color: egui::Color32) {
    ui.group(|ui| {
        ui.vertical(|ui| {
            let plot = egui_plot::Plot::new(id)
                .height(180.0)
                .allow_zoom(false)
                .allow_drag(false)
                .show_background(false)
                .show_axes([false, true])
                .include_y(0.0);

            plot.show(ui, |plot_ui| {
                let bars: Vec<egui_plot::Bar> = entries.iter()
                    .enumerate()
                    .map(|(i, (label, count))| {
                        egui_plot::Bar::new(i as f64, *count as f64)
                            .name(label)
                            .width(0.6)
                            .fill(color)
                    })
                    .collect();

                plot_ui.bar_chart(egui_plot::BarChart::new(bars));
            });

            // x axis labels
            ui.horizontal_wrapped(|ui| {
                for (label, count) in entries {
                    ui.label(format!("{}: {}", label, count));
                    ui.add_space(8.0);
                }
            });
        });
    });
}
