use clap::Parser;
use row_translator::{run, AppConfig, GoogleTranslateClient, TranslatorConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "row-translator")]
#[command(version)]
#[command(about = "Translate the first column of a CSV file into a tab-separated file")]
struct Cli {
    /// Input CSV file (default: seg_translate.csv)
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output file (default: translate)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Destination language code (default: en)
    #[arg(short, long)]
    dest: Option<String>,

    /// Source language code (default: auto)
    #[arg(short, long)]
    source: Option<String>,

    /// Configuration file, ignored when missing
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Treat the first line of the input as data
    #[arg(long)]
    no_headers: bool,
}

impl Cli {
    /// Command-line values win over whatever the config file set.
    fn apply(self, config: &mut TranslatorConfig) {
        if let Some(input) = self.input {
            config.input_path = input;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(dest) = self.dest {
            config.dest_lang = dest;
        }
        if let Some(source) = self.source {
            config.source_lang = source;
        }
        if self.no_headers {
            config.has_headers = false;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, load_error) = AppConfig::load_or_default(&cli.config);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive(format!("row_translator={}", config.logging.level).parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Some(e) = load_error {
        tracing::warn!(path = %cli.config, error = %e, "Invalid configuration, using defaults");
    }

    cli.apply(&mut config.translator);

    let client = GoogleTranslateClient::new(&config.api, config.translator.source_lang.clone())?;
    let summary = run(&config.translator, &client).await?;

    tracing::info!(
        rows = summary.rows_translated,
        output = %summary.output_path.display(),
        "Done"
    );

    Ok(())
}
