// src/file/session.rs

use std::fs::File;
use std::io;
use std::path::Path;
use anyhow::{Context, Result};
use chrono::prelude::*;
use csv::Writer;

use crate::state::SessionRecord;

const HEADER: [&str; 4] = ["filename", "age_bracket", "gender", "has_person"];

/// Writes the session table as CSV.
#[derive(Debug, Default)]
pub struct SessionExporter;

impl SessionExporter {
    pub fn new() -> Self {
        Self
    }

    /// Suggested name for the export dialog, e.g. `session_20240131_174501.csv`.
    pub fn default_file_name() -> String {
        format!("session_{}.csv", Local::now().format("%Y%m%d_%H%M%S"))
    }

    pub fn export(&self, records: &[SessionRecord], path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        self.write(records, file)
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;
        log::info!("Exported {} session records to {}", records.len(), path.display());
        Ok(())
    }

    pub fn write<W: io::Write>(&self, records: &[SessionRecord], writer: W) -> Result<()> {
        let mut writer = Writer::from_writer(writer);

        // serde only emits the header alongside the first row
        if records.is_empty() {
            writer.write_record(HEADER)?;
        }
        for record in records {
            writer.serialize(record)?;
        }

        writer.flush()?;
        Ok(())
    }
}
