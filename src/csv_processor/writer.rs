use crate::utils::Result;
use csv::{QuoteStyle, WriterBuilder};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes a single column of values as a tab-separated table with a
/// leading row-index column. The header line is `\t0`: an unnamed index
/// column followed by the content column named `0`.
pub struct TsvTableWriter {
    path: PathBuf,
}

impl TsvTableWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Writes into a temporary file next to the target and renames it into
    /// place, so the target path never holds a partial table.
    pub fn write_column(&self, values: &[String]) -> Result<usize> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;

        let mut rows_written = 0;
        {
            let mut writer = WriterBuilder::new()
                .delimiter(b'\t')
                .quote_style(QuoteStyle::Necessary)
                .from_writer(&mut tmp);

            writer.write_record(["", "0"])?;

            for (index, value) in values.iter().enumerate() {
                writer.write_record([index.to_string().as_str(), value.as_str()])?;
                rows_written += 1;
            }

            writer.flush()?;
        }

        tmp.persist(&self.path).map_err(|e| e.error)?;

        tracing::debug!(path = %self.path.display(), rows_written, "Wrote output table");

        Ok(rows_written)
    }
}
