use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime settings shared by the server and the CLI commands.
///
/// Every field has a default so an empty (or missing) config file is valid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub port: u16,
    pub database: String,
    pub cors_origin: Option<String>,
    pub dataset_path: PathBuf,
    pub upload_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database: "database.db".to_string(),
            cors_origin: None,
            dataset_path: PathBuf::from("data.csv"),
            upload_path: PathBuf::from("uploaded_data.csv"),
            static_dir: PathBuf::from("static"),
        }
    }
}

impl AppConfig {
    /// Load settings from a YAML file, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
