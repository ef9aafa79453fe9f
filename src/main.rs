//! Cable modem signal statistics scraper
//!
//! Polls the status page of an Arris SB6183 cable modem once, extracts the
//! per-channel downstream and upstream signal statistics and writes them to
//! stdout as InfluxDB line protocol or as a JSON array.
//!
//! # Pipeline
//!
//! Fetch → extract → render, strictly sequential. Any failure aborts the run
//! with a non-zero exit status and nothing on stdout.
//!
//! # Environment
//!
//! - `LOG_LEVEL`: diagnostic verbosity on stderr (default `warn`). It never
//!   affects stdout or the exit status.

mod config;
mod emitter;
mod error;
mod model;
mod modem;

#[cfg(test)]
mod test_utils;

use crate::config::{ModemConfig, DEFAULT_STATUS_URL};
use crate::emitter::{OutputFormat, Renderer};
use crate::error::{Error, Result};
use crate::model::MetricCollector;
use chrono::Utc;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "cable-modem-stats")]
#[command(about = "A tool to scrape modem statistics")]
struct Cli {
    #[arg(long, default_value = DEFAULT_STATUS_URL, help = "URL to modem status page")]
    url: String,

    #[arg(
        long,
        value_enum,
        default_value_t = OutputFormat::Influx,
        help = "Output format"
    )]
    format: OutputFormat,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Argument errors exit here, before any network activity.
    let cli = Cli::parse();

    let (app_config, config_error) = config::load_app_config_or_default();
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .with_writer(std::io::stderr)
        .init();
    if let Some(e) = config_error {
        tracing::warn!("{}; using default configuration", e);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run(&cli, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}

/// Builds the collector and renderer from the command line and polls once.
async fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    let client = modem::Client::new(ModemConfig::new(cli.url.as_str()))?;
    let collector = modem::ModemStatusCollector::new(Arc::new(client));
    let renderer = cli.format.renderer();

    poll_once(&collector, renderer.as_ref(), out).await
}

/// Collects one snapshot and renders it.
///
/// The poll timestamp is captured here, once, and handed to the collector so
/// every point of the snapshot carries the same instant. Nothing is written
/// unless collection succeeded.
async fn poll_once(
    collector: &dyn MetricCollector,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<()> {
    let timestamp = Utc::now();
    let points = collector.collect(timestamp).await?;

    for point in &points {
        tracing::debug!("{:?}", point);
    }

    renderer.render(&points, out)?;
    Ok(())
}

/// Short message printed on stderr ahead of the error detail.
fn failure_message(err: &Error) -> &'static str {
    match err {
        Error::Fetch(_) => "Failed to get modem stats.  Aborting",
        Error::MalformedDocument(_) => "Failed to parse modem stats.  Aborting",
        Error::Emit(_) => "Failed to write modem stats.  Aborting",
    }
}

/// The error's source chain joined by `: `, omitting the top-level summary.
fn error_detail(err: &Error) -> String {
    let mut parts = Vec::new();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        parts.push(cause.to_string());
        source = std::error::Error::source(cause);
    }
    if parts.is_empty() {
        err.to_string()
    } else {
        parts.join(": ")
    }
}

fn report_failure(err: &Error) {
    tracing::debug!("{:?}", err);
    eprintln!("ERROR: {}", failure_message(err));
    eprintln!("{}", error_detail(err));
}
