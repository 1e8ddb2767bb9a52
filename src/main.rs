mod config;
mod report;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use dotenv::dotenv;
use inapp_content::input::{read_document, select_payloads, InputSource};
use inapp_content::metrics::{install_prometheus_recorder, ParseMetrics};
use inapp_content::parse;
use report::Report;
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if dotenv().is_ok() {
        info!("Loaded .env file");
    }

    let config = Config::parse();

    let prometheus = if config.metrics {
        Some(install_prometheus_recorder()?)
    } else {
        None
    };
    let metrics = ParseMetrics::new();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut input_errors = 0usize;

    for source in config.sources() {
        match process_source(&config, &source, &metrics, &mut out) {
            Ok(count) => info!("Parsed {} payload(s) from {}", count, source),
            Err(e) => {
                error!("Skipping {}: {:#}", source, e);
                input_errors += 1;
            }
        }
    }
    out.flush().context("Failed to flush output")?;

    if let Some(handle) = prometheus {
        eprint!("{}", handle.render());
    }

    info!(
        parsed = metrics.parsed(),
        failed = metrics.failed(),
        input_errors,
        "Done"
    );

    if should_fail(input_errors, metrics.failed(), config.strict) {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Unreadable input always fails the run; rejected payloads only in strict mode
fn should_fail(input_errors: usize, failed: u64, strict: bool) -> bool {
    input_errors > 0 || (strict && failed > 0)
}

/// Parse every payload in one document and write a report line for each
fn process_source(
    config: &Config,
    source: &InputSource,
    metrics: &ParseMetrics,
    out: &mut impl Write,
) -> Result<usize> {
    let document = read_document(source)?;
    let payloads = select_payloads(document, config.pointer())?;

    for (index, payload) in payloads.iter().enumerate() {
        let result = parse(payload);
        metrics.record(&result);
        if let Err(e) = &result {
            warn!("{} #{}: {}", source, index, e.kind());
        }

        let line = Report::new(source.to_string(), index, &result)
            .to_json(config.pretty)
            .context("Failed to serialize report")?;
        writeln!(out, "{line}").context("Failed to write report")?;
    }
    Ok(payloads.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::TempDir;

    fn run(args: &[&str], path: &std::path::Path) -> (usize, Vec<Value>) {
        let mut argv = vec!["inapp-content"];
        argv.extend_from_slice(args);
        let config = Config::parse_from(argv);
        let metrics = ParseMetrics::new();
        let mut out = Vec::new();
        let count = process_source(
            &config,
            &InputSource::File(path.to_path_buf()),
            &metrics,
            &mut out,
        )
        .unwrap();
        let lines = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (count, lines)
    }

    #[test]
    fn test_process_source_array_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payloads.json");
        std::fs::write(
            &path,
            r#"[{"html": "<a href='x'>go</a>"}, {"html": "<p>no link</p>"}]"#,
        )
        .unwrap();

        let (count, lines) = run(&[], &path);
        assert_eq!(count, 2);
        assert_eq!(lines[0]["status"], "success");
        assert_eq!(lines[1]["status"], "failure");
        assert_eq!(lines[1]["index"], 1);
    }

    #[test]
    fn test_process_source_with_pointer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("message.json");
        std::fs::write(
            &path,
            r#"{"messageId": "m1", "content": {"contentType": "inboxHtml", "html": "<a href>", "inboxIcon": "i.png"}}"#,
        )
        .unwrap();

        let (count, lines) = run(&["--pointer", "/content"], &path);
        assert_eq!(count, 1);
        assert_eq!(lines[0]["content"]["type"], "inboxHtml");
        assert_eq!(lines[0]["content"]["icon"], "i.png");
    }

    #[test]
    fn test_should_fail_strict_with_rejected_payload() {
        assert!(should_fail(0, 1, true));
    }

    #[test]
    fn test_should_not_fail_lenient_with_rejected_payload() {
        assert!(!should_fail(0, 1, false));
    }

    #[test]
    fn test_should_fail_on_input_error() {
        assert!(should_fail(1, 0, false));
        assert!(should_fail(1, 0, true));
    }

    #[test]
    fn test_should_not_fail_when_everything_parsed() {
        assert!(!should_fail(0, 0, true));
    }

    #[test]
    fn test_process_source_invalid_json_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{").unwrap();

        let config = Config::parse_from(["inapp-content"]);
        let metrics = ParseMetrics::new();
        let mut out = Vec::new();
        let result = process_source(&config, &InputSource::File(path), &metrics, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
