pub mod csv_processor;
pub mod translation;
pub mod utils;

pub use csv_processor::{CsvTableReader, InputTable, TsvTableWriter};
pub use translation::{run, translate_all, GoogleTranslateClient, RunSummary, Translate};
pub use utils::{AppConfig, Result, RowTranslatorError, TranslatorConfig};
