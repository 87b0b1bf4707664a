// src/main.rs
use eframe::egui;
use anyhow::Result;
use env_logger::Builder;
use log::{info, LevelFilter};

mod analysis;
mod app;
mod config;
mod file;
mod state;
mod ui;
mod utils;

use app::{VisorApp, APP_TITLE};
use crate::config::Settings;

fn main() -> Result<()> {
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter(Some("image_visor"), LevelFilter::Debug)
        .parse_default_env()
        .init();

    let settings = Settings::load()?;
    info!("Starting up (seed: {:?}, overrides enabled: {})", settings.seed, settings.override_rules_enabled);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Box::new(VisorApp::new(cc, settings))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
