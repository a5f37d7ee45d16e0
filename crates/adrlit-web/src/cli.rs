//! Command-line interface for the `adrlit` binary.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use adrlit_common::DocumentSource;
use adrlit_config::AppConfig;
use adrlit_ingestion::load_path;
use adrlit_ner::InsightExtractor;

use crate::analysis::{analyze, ExportFormat};

#[derive(Debug, Parser)]
#[command(name = "adrlit", version, about = "ADR literature extractor")]
pub struct Cli {
    /// TOML configuration file (defaults to ./adrlit.toml when present)
    #[arg(long, global = true, env = "ADRLIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the web dashboard (default)
    Serve {
        /// Address to listen on, overrides `server.bind`
        #[arg(long)]
        bind: Option<String>,
    },
    /// Analyse one document and print the export to stdout
    Extract {
        /// PDF, DOCX or text file; `-` reads text from stdin
        input: String,

        /// Replace the medical assessment with a humanized variant
        #[arg(long)]
        humanize: bool,

        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,
    },
}

/// Filter for the log subscriber: a valid `RUST_LOG` wins over the configured level.
pub fn log_filter(rust_log: Option<&str>, level: &str) -> anyhow::Result<EnvFilter> {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))
}

/// Install the global subscriber, writing to stderr. Called once per process.
pub fn init_tracing(level: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = log_filter(rust_log.as_deref(), level)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

/// Run `adrlit extract` and return what should be printed.
pub fn run_extract(
    config: &AppConfig,
    input: &str,
    humanize: bool,
    format: ExportFormat,
) -> anyhow::Result<String> {
    let (text, source) = read_input(input)?;
    if text.trim().is_empty() {
        bail!("{} contains no extractable text", source.label());
    }

    let extractor = InsightExtractor::new(&config.extraction)?;
    let report = analyze(&extractor, &text, source, humanize, &mut rand::thread_rng());

    if format == ExportFormat::Csv && !report.insights.has_adrs() {
        bail!("no ADRs identified, nothing to export as CSV");
    }
    Ok(format.render(&report.insights)?)
}

fn read_input(input: &str) -> anyhow::Result<(String, DocumentSource)> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("reading text from stdin")?;
        return Ok((text, DocumentSource::Pasted));
    }

    let path = Path::new(input);
    let doc = load_path(path).with_context(|| format!("loading {}", path.display()))?;
    let source = DocumentSource::File {
        path: path.display().to_string(),
        format: doc.format.as_str().to_string(),
    };
    Ok((doc.text, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use adrlit_common::LiteratureInsights;
    use std::io::Write;

    const REPORT: &str = "Tramadol-associated tremor\n\
        Background: an older patient on Risperidone.\n\
        Results: tremor resolved after withdrawal.\n\
        Conclusion: monitor closely.";

    fn text_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_defaults_to_serve() {
        let cli = Cli::try_parse_from(["adrlit"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_extract_flags() {
        let cli = Cli::try_parse_from(["adrlit", "extract", "case.pdf", "--humanize", "--format", "csv"])
            .unwrap();
        match cli.command {
            Some(Command::Extract { input, humanize, format }) => {
                assert_eq!(input, "case.pdf");
                assert!(humanize);
                assert_eq!(format, ExportFormat::Csv);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_log_filter_precedence() {
        assert_eq!(log_filter(None, "debug").unwrap().to_string(), "debug");
        assert_eq!(
            log_filter(Some("adrlit_web=trace"), "info").unwrap().to_string(),
            "adrlit_web=trace"
        );
        // An unparsable RUST_LOG falls back to the configured level
        assert_eq!(log_filter(Some("adrlit=loud"), "warn").unwrap().to_string(), "warn");
        assert!(log_filter(None, "adrlit=loud").is_err());
    }

    #[test]
    fn test_extract_json_from_file() {
        let file = text_file(REPORT);
        let out = run_extract(
            &AppConfig::default(),
            file.path().to_str().unwrap(),
            false,
            ExportFormat::Json,
        )
        .unwrap();

        let insights: LiteratureInsights = serde_json::from_str(&out).unwrap();
        assert_eq!(insights.title, "Tramadol-associated tremor");
        assert_eq!(insights.molecules, vec!["Risperidone", "Tramadol"]);
        assert_eq!(insights.structured_summary.conclusion, ": monitor closely.");
    }

    #[test]
    fn test_extract_csv_rows() {
        let file = text_file(REPORT);
        let out = run_extract(
            &AppConfig::default(),
            file.path().to_str().unwrap(),
            false,
            ExportFormat::Csv,
        )
        .unwrap();
        assert_eq!(out, "ADR,Molecule\ntremor,Risperidone\n");
    }

    #[test]
    fn test_csv_without_adrs_fails() {
        let file = text_file("A review of Aripiprazole dosing");
        let err = run_extract(
            &AppConfig::default(),
            file.path().to_str().unwrap(),
            false,
            ExportFormat::Csv,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no ADRs"));
    }

    #[test]
    fn test_blank_file_rejected() {
        let file = text_file("  \n ");
        let result = run_extract(
            &AppConfig::default(),
            file.path().to_str().unwrap(),
            false,
            ExportFormat::Json,
        );
        assert!(result.is_err());
    }
}
