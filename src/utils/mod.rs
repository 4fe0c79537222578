pub mod config;
pub mod errors;

pub use config::{ApiConfig, AppConfig, LoggingConfig, TranslatorConfig};
pub use errors::{Result, RowTranslatorError};
