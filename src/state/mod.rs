// src/state/mod.rs
use std::path::{Path, PathBuf};
use anyhow::{anyhow, Result};
use rand::rngs::StdRng;

use crate::analysis::overrides::default_rules;
use crate::analysis::{AnalysisResult, FakeAnalyzer};
use crate::config::Settings;
use crate::file::SessionExporter;

pub mod session;

pub use session::{SessionAggregator, SessionRecord};

/// The file currently shown in the upload column.
#[derive(Debug, Clone)]
pub struct CurrentUpload {
    pub path: PathBuf,
    pub filename: String,
    pub result: AnalysisResult,
}

// Core application state, lives as long as the window
pub struct AppState {
    pub settings: Settings,
    pub session: SessionAggregator,
    pub current_upload: Option<CurrentUpload>,
    pub error_message: Option<String>,
    pub last_open_dir: Option<PathBuf>,

    analyzer: FakeAnalyzer<StdRng>,
    exporter: SessionExporter,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let rules = if settings.override_rules_enabled {
            default_rules()
        } else {
            Vec::new()
        };
        let analyzer = FakeAnalyzer::from_seed(settings.seed, rules);

        Self {
            settings,
            session: SessionAggregator::new(),
            current_upload: None,
            error_message: None,
            last_open_dir: None,
            analyzer,
            exporter: SessionExporter::new(),
        }
    }

    /// Runs the simulated analysis for `path` and records it in the session.
    pub fn analyze_upload(&mut self, path: &Path) -> Result<AnalysisResult> {
        let filename = path
            .file_name()
            .ok_or_else(|| anyhow!("Not a file: {}", path.display()))?
            .to_string_lossy()
            .into_owned();

        let result = self.analyzer.analyze(&filename);
        self.session.record(&filename, &result);
        log::info!(
            "Analyzed {}: person={}, age={}, gender={}, {} detections",
            filename,
            result.has_person,
            result.estimated_age_bracket,
            result.estimated_gender,
            result.detections.len()
        );

        self.current_upload = Some(CurrentUpload {
            path: path.to_path_buf(),
            filename,
            result: result.clone(),
        });
        self.error_message = None;

        Ok(result)
    }

    pub fn export_session(&self, path: &Path) -> Result<()> {
        self.exporter.export(&self.session.snapshot(), path)
    }
}
