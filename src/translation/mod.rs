pub mod client;

pub use client::{GoogleTranslateClient, Translate};

use crate::csv_processor::{CsvTableReader, InputTable, TsvTableWriter};
use crate::utils::{Result, RowTranslatorError, TranslatorConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub rows_translated: usize,
    pub output_path: PathBuf,
}

/// Translates the first field of every row, one row at a time, in order.
///
/// The result is all-or-nothing: the first failing row aborts the pass and
/// its error is returned, wrapped with the row index. Nothing is retried
/// or skipped.
pub async fn translate_all(
    table: &InputTable,
    translator: &dyn Translate,
    dest_lang: &str,
) -> Result<Vec<String>> {
    let rows_total = table.len();
    let mut translated = Vec::with_capacity(rows_total);

    for row in 0..rows_total {
        let text = table
            .first_field(row)
            .ok_or(RowTranslatorError::MissingField { row })?;

        tracing::debug!(row, rows_total, "Translating row");

        let result = translator
            .translate(text, dest_lang)
            .await
            .map_err(|e| RowTranslatorError::TranslationFailed {
                row,
                source: Box::new(e),
            })?;

        translated.push(result);
    }

    Ok(translated)
}

/// Loads the input table, translates it and writes the output table.
///
/// The output file is only created once every row has been translated, so a
/// failed run leaves no output behind.
pub async fn run(config: &TranslatorConfig, translator: &dyn Translate) -> Result<RunSummary> {
    let table = CsvTableReader::new(&config.input_path)
        .has_headers(config.has_headers)
        .read_table()?;

    tracing::info!(
        input = %config.input_path.display(),
        rows_total = table.len(),
        dest_lang = %config.dest_lang,
        "Starting translation"
    );

    let translated = match translate_all(&table, translator, &config.dest_lang).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::error!(error = ?e, "Translation aborted, no output written");
            return Err(e);
        }
    };

    let writer = TsvTableWriter::new(&config.output_path);
    let rows_translated = writer.write_column(&translated)?;

    tracing::info!(
        output = %config.output_path.display(),
        rows_translated,
        "Translation completed"
    );

    Ok(RunSummary {
        rows_translated,
        output_path: config.output_path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records every call and answers from a fixed dictionary, falling back
    /// to uppercasing.
    #[derive(Default)]
    struct StubTranslator {
        dictionary: HashMap<String, String>,
        fail_on_call: Option<usize>,
        calls: AtomicUsize,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl StubTranslator {
        fn with_dictionary(pairs: &[(&str, &str)]) -> Self {
            Self {
                dictionary: pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                ..Default::default()
            }
        }

        fn failing_on(call: usize) -> Self {
            Self {
                fail_on_call: Some(call),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl Translate for StubTranslator {
        async fn translate(&self, text: &str, dest_lang: &str) -> Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen
                .lock()
                .unwrap()
                .push((text.to_string(), dest_lang.to_string()));

            if self.fail_on_call == Some(call) {
                return Err(RowTranslatorError::ApiError("quota exceeded".to_string()));
            }

            Ok(self
                .dictionary
                .get(text)
                .cloned()
                .unwrap_or_else(|| text.to_uppercase()))
        }
    }

    fn table(values: &[&str]) -> InputTable {
        InputTable::from_rows(values.iter().map(|v| vec![v.to_string()]).collect())
    }

    fn test_config(dir: &tempfile::TempDir, csv: &str) -> TranslatorConfig {
        let input_path = dir.path().join("seg_translate.csv");
        std::fs::write(&input_path, csv).unwrap();
        TranslatorConfig {
            input_path,
            output_path: dir.path().join("translate"),
            ..Default::default()
        }
    }

    // ==================== translate_all ====================

    #[tokio::test]
    async fn test_translate_all_dictionary_scenario() {
        let stub = StubTranslator::with_dictionary(&[("Hola", "Hello"), ("Adios", "Goodbye")]);

        let result = translate_all(&table(&["Hola", "Adios"]), &stub, "en")
            .await
            .unwrap();

        assert_eq!(result, vec!["Hello".to_string(), "Goodbye".to_string()]);
    }

    #[tokio::test]
    async fn test_translate_all_preserves_length_and_order() {
        let input = ["uno", "dos", "tres", "cuatro", "cinco"];
        let stub = StubTranslator::default();

        let result = translate_all(&table(&input), &stub, "en").await.unwrap();

        assert_eq!(result.len(), input.len());
        for (i, source) in input.iter().enumerate() {
            assert_eq!(result[i], source.to_uppercase());
        }

        let seen = stub.seen.lock().unwrap();
        let order: Vec<&str> = seen.iter().map(|(text, _)| text.as_str()).collect();
        assert_eq!(order, input);
        assert!(seen.iter().all(|(_, dest)| dest == "en"));
    }

    #[tokio::test]
    async fn test_translate_all_reads_only_first_field() {
        let input = InputTable::from_rows(vec![
            vec!["Hola".to_string(), "ignored".to_string()],
            vec!["Adios".to_string(), "also ignored".to_string()],
        ]);
        let stub = StubTranslator::default();

        let result = translate_all(&input, &stub, "en").await.unwrap();

        assert_eq!(result, vec!["HOLA".to_string(), "ADIOS".to_string()]);
    }

    #[tokio::test]
    async fn test_translate_all_is_deterministic() {
        let input = table(&["Hola", "Adios", "Gracias"]);

        let first = translate_all(&input, &StubTranslator::default(), "en")
            .await
            .unwrap();
        let second = translate_all(&input, &StubTranslator::default(), "en")
            .await
            .unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_translate_all_empty_table() {
        let stub = StubTranslator::default();

        let result = translate_all(&InputTable::default(), &stub, "en").await.unwrap();

        assert!(result.is_empty());
        assert_eq!(stub.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_translate_all_stops_at_first_failure() {
        let stub = StubTranslator::failing_on(1);

        let err = translate_all(&table(&["Hola", "Adios", "Gracias"]), &stub, "en")
            .await
            .unwrap_err();

        assert!(matches!(err, RowTranslatorError::TranslationFailed { row: 1, .. }));
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_translate_all_missing_first_field() {
        let input = InputTable::from_rows(vec![vec!["Hola".to_string()], vec![]]);

        let err = translate_all(&input, &StubTranslator::default(), "en")
            .await
            .unwrap_err();

        assert!(matches!(err, RowTranslatorError::MissingField { row: 1 }));
    }

    // ==================== run ====================

    #[tokio::test]
    async fn test_run_writes_translated_column() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, "text\nHola\nAdios\n");
        let stub = StubTranslator::with_dictionary(&[("Hola", "Hello"), ("Adios", "Goodbye")]);

        let summary = run(&config, &stub).await.unwrap();

        assert_eq!(summary.rows_translated, 2);
        assert_eq!(summary.output_path, config.output_path);
        let content = std::fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(content, "\t0\n0\tHello\n1\tGoodbye\n");
    }

    #[tokio::test]
    async fn test_run_empty_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, "text\n");

        let summary = run(&config, &StubTranslator::default()).await.unwrap();

        assert_eq!(summary.rows_translated, 0);
        assert_eq!(std::fs::read_to_string(&config.output_path).unwrap(), "\t0\n");
    }

    #[tokio::test]
    async fn test_run_failure_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(&dir, "text\nHola\nAdios\n");
        let stub = StubTranslator::failing_on(1);

        let result = run(&config, &stub).await;

        assert!(matches!(
            result,
            Err(RowTranslatorError::TranslationFailed { row: 1, .. })
        ));
        assert!(!config.output_path.exists());
    }

    #[tokio::test]
    async fn test_run_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = TranslatorConfig {
            input_path: dir.path().join("missing.csv"),
            output_path: dir.path().join("translate"),
            ..Default::default()
        };

        let result = run(&config, &StubTranslator::default()).await;

        assert!(matches!(result, Err(RowTranslatorError::FileNotFound(_))));
        assert!(!config.output_path.exists());
    }
}
