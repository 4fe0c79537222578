use crate::utils::{Result, RowTranslatorError};
use csv::StringRecord;
use std::path::{Path, PathBuf};

/// Rows of the input file, in file order. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputTable {
    rows: Vec<Vec<String>>,
}

impl InputTable {
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn first_field(&self, index: usize) -> Option<&str> {
        self.rows.get(index)?.first().map(String::as_str)
    }
}

pub struct CsvTableReader {
    path: PathBuf,
    has_headers: bool,
}

impl CsvTableReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            has_headers: true,
        }
    }

    pub fn has_headers(mut self, yes: bool) -> Self {
        self.has_headers = yes;
        self
    }

    /// Reads the whole file before any row is handed out.
    pub fn read_table(&self) -> Result<InputTable> {
        if !file_exists(&self.path) {
            return Err(RowTranslatorError::FileNotFound(
                self.path.display().to_string(),
            ));
        }

        let file = std::fs::File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(string_record_to_vec(&record));
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "Loaded input table");

        Ok(InputTable::from_rows(rows))
    }
}

fn string_record_to_vec(record: &StringRecord) -> Vec<String> {
    record.iter().map(|s| s.to_string()).collect()
}

fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
