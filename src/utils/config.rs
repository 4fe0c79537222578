use crate::utils::errors::{Result, RowTranslatorError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub translator: TranslatorConfig,
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub dest_lang: String,
    pub source_lang: String,
    pub has_headers: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub endpoint: String,
    /// No timeout when unset; a hung service blocks the run.
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("seg_translate.csv"),
            output_path: PathBuf::from("translate"),
            dest_lang: "en".to_string(),
            source_lang: "auto".to_string(),
            has_headers: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.googleapis.com/translate_a/single".to_string(),
            timeout_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| RowTranslatorError::ConfigError(e.to_string()))?;
        toml::from_str(&content).map_err(|e| RowTranslatorError::ConfigError(e.to_string()))
    }

    /// Loads `path` if it exists, otherwise the defaults. A file that exists
    /// but cannot be loaded also yields the defaults, along with the error so
    /// the caller can report it once logging is up.
    pub fn load_or_default(path: &str) -> (Self, Option<RowTranslatorError>) {
        if !Path::new(path).exists() {
            return (Self::default(), None);
        }
        match Self::load_from_file(path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}
