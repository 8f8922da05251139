use crate::errors::AppError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Snapshot settings loaded from a JSON config file.
///
/// Every field is optional; command-line flags extend the pattern lists and
/// override the scalars.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    pub ignore_patterns: Vec<String>,
    pub focus_patterns: Vec<String>,
    pub obfuscate_sensitive_data: Option<bool>,
    pub output: Option<PathBuf>,
}

impl SnapshotConfig {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let config: SnapshotConfig = serde_json::from_str(&raw)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        info!(
            path = %path.display(),
            ignore = config.ignore_patterns.len(),
            focus = config.focus_patterns.len(),
            "loaded snapshot config"
        );
        debug!(?config, "config loaded (full debug)");

        Ok(config)
    }
}
