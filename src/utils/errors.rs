use thiserror::Error;

#[derive(Error, Debug)]
pub enum RowTranslatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("HTTP request error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Row {row} has no first field")]
    MissingField { row: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Translation failed at row {row}")]
    TranslationFailed {
        row: usize,
        #[source]
        source: Box<RowTranslatorError>,
    },
}

pub type Result<T> = std::result::Result<T, RowTranslatorError>;
