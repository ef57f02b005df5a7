//! pagesel - Entry Point

use clap::Parser;
use pagesel::config::ReportFormat;
use pagesel::model::{Artwork, PageSize};
use pagesel::source::{FileSource, HttpSource, PageSource};
use pagesel::state::{SelectionReport, TableSession};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// pagesel - replay table interactions and report selected rows
#[derive(Parser, Debug)]
#[command(name = "pagesel")]
#[command(version)]
#[command(about = "Replay paginated-table selection events and report the selected rows")]
pub struct Args {
    /// Path to JSONL event script (reads from stdin if not provided)
    pub script: Option<PathBuf>,

    /// Serve pages from a local JSON file instead of the HTTP API
    #[arg(long, conflicts_with = "url")]
    pub data: Option<PathBuf>,

    /// Collection endpoint for HTTP page fetches
    #[arg(long)]
    pub url: Option<String>,

    /// Rows per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Report output format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

type DynSource = Box<dyn PageSource<Record = Artwork>>;

fn open_source(data: Option<PathBuf>, api_url: &str) -> Result<DynSource, pagesel::model::AppError> {
    match data {
        Some(path) => {
            let source = FileSource::open(&path)?;
            info!(path = %path.display(), records = source.len(), "serving pages from file");
            Ok(Box::new(source))
        }
        None => {
            let source = HttpSource::new(api_url)?;
            info!(url = %api_url, "serving pages from HTTP API");
            Ok(Box::new(source))
        }
    }
}

fn print_report(
    out: &mut impl Write,
    report: &SelectionReport,
    format: ReportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        ReportFormat::Text => writeln!(out, "{report}")?,
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string(report)?)?,
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = pagesel::config::load_config_with_precedence(args.config.clone())?;
        let merged = pagesel::config::merge_config(config_file)?;
        let with_env = pagesel::config::apply_env_overrides(merged)?;

        let page_size_override = args
            .page_size
            .map(|rows| PageSize::new(rows as usize))
            .transpose()?;

        pagesel::config::apply_cli_overrides(
            with_env,
            page_size_override,
            args.url.clone(),
            args.format,
        )
    };

    pagesel::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let script = pagesel::source::detect_script_source(args.script.clone())?;
    info!(origin = ?script.origin(), "reading session script");
    let (events, errors) = pagesel::integration::process_lines(script.read_lines()?, 1);
    for error in &errors {
        warn!(error = %error, "skipping malformed script line");
    }

    let source = open_source(args.data.clone(), &config.api_url)?;
    let mut session = TableSession::new(source, config.page_size);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut write_failure = None;
    let summary = pagesel::integration::replay(&mut session, &events, |report| {
        if write_failure.is_none() {
            write_failure = print_report(&mut out, report, config.report_format).err();
        }
    });
    if let Some(err) = write_failure {
        return Err(err);
    }

    info!(
        applied = summary.applied,
        failed = summary.failed,
        skipped_lines = errors.len(),
        "replay finished"
    );

    print_report(&mut out, &session.report(), config.report_format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["pagesel", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["pagesel", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["pagesel"]);
        assert_eq!(args.script, None);
        assert_eq!(args.data, None);
        assert_eq!(args.url, None);
        assert_eq!(args.page_size, None);
        assert_eq!(args.format, None);
        assert_eq!(args.config, None);
    }

    #[test]
    fn test_script_path_populates_script_field() {
        let args = Args::parse_from(["pagesel", "events.jsonl"]);
        assert_eq!(args.script, Some(PathBuf::from("events.jsonl")));
    }

    #[test]
    fn test_page_size_rejects_zero() {
        let result = Args::try_parse_from(["pagesel", "--page-size", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_page_size_rejects_negative() {
        let result = Args::try_parse_from(["pagesel", "--page-size", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_format_json() {
        let args = Args::parse_from(["pagesel", "--format", "json"]);
        assert_eq!(args.format, Some(ReportFormat::Json));
    }

    #[test]
    fn test_format_invalid_rejects() {
        let result = Args::try_parse_from(["pagesel", "--format", "yaml"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_data_and_url_conflict() {
        let result = Args::try_parse_from([
            "pagesel",
            "--data",
            "rows.json",
            "--url",
            "https://example.test/items",
        ]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_combined_flags() {
        let args = Args::parse_from([
            "pagesel",
            "events.jsonl",
            "--data",
            "rows.json",
            "--page-size",
            "24",
            "--format",
            "text",
            "--config",
            "/custom/config.toml",
        ]);
        assert_eq!(args.script, Some(PathBuf::from("events.jsonl")));
        assert_eq!(args.data, Some(PathBuf::from("rows.json")));
        assert_eq!(args.page_size, Some(24));
        assert_eq!(args.format, Some(ReportFormat::Text));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_page_size_flows_through_config_precedence_chain() {
        use pagesel::config::{apply_cli_overrides, merge_config, ConfigFile};

        // Defaults → Config File → CLI Args
        let config_file = ConfigFile {
            page_size: Some(30),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file)).unwrap();
        assert_eq!(merged.page_size.get(), 30, "Config file should override default");

        let with_cli = apply_cli_overrides(merged, Some(PageSize::new(6).unwrap()), None, None);
        assert_eq!(
            with_cli.page_size.get(),
            6,
            "CLI page size should override all other sources"
        );
    }

    #[test]
    fn test_print_report_text_and_json() {
        let report = SelectionReport::default();

        let mut text = Vec::new();
        print_report(&mut text, &report, ReportFormat::Text).unwrap();
        assert_eq!(String::from_utf8(text).unwrap(), "No rows selected\n");

        let mut json = Vec::new();
        print_report(&mut json, &report, ReportFormat::Json).unwrap();
        assert_eq!(
            String::from_utf8(json).unwrap(),
            "{\"pages\":[],\"total\":0}\n"
        );
    }
}
