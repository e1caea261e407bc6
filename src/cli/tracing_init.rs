//! Diagnostic logging setup for the binary.
//!
//! Everything goes to stderr unless `CONTEXT7_LOG_FILE` names a file, so the
//! Markdown report on stdout stays clean for piping.

use crate::constants;
use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Reads a `CONTEXT7_LOG_FORMAT` value. Unset means text; anything
    /// unrecognized is handed back so the caller can warn about it.
    fn from_env_value(raw: Option<&str>) -> Result<Self, String> {
        match raw.map(str::to_ascii_lowercase).as_deref() {
            None | Some("text") => Ok(Self::Text),
            Some("json") => Ok(Self::Json),
            Some(_) => Err(raw.unwrap_or_default().to_string()),
        }
    }
}

/// Maps `-v` counts onto a filter directive, falling back to `CONTEXT7_LOG`.
fn log_level(verbosity: u8, from_env: Option<String>) -> String {
    match verbosity {
        0 => from_env.unwrap_or_else(|| "error".to_string()),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("error"))
}

fn open_log_file(path: &str) -> Result<File, String> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("Warning: Could not open log file '{path}': {e}. Using stderr."))
}

fn log_writer(path: Option<&str>) -> BoxMakeWriter {
    match path.map(open_log_file) {
        Some(Ok(file)) => BoxMakeWriter::new(Mutex::new(file)),
        Some(Err(warning)) => {
            // The subscriber does not exist yet.
            eprintln!("{warning}");
            BoxMakeWriter::new(std::io::stderr)
        }
        None => BoxMakeWriter::new(std::io::stderr),
    }
}

/// Installs the global subscriber. Called once, before any request is made.
pub fn init_tracing(verbosity: u8) {
    let filter = build_filter(&log_level(verbosity, std::env::var(constants::ENV_LOG).ok()));

    let raw_format = std::env::var(constants::ENV_LOG_FORMAT).ok();
    let format = LogFormat::from_env_value(raw_format.as_deref()).unwrap_or_else(|unknown| {
        eprintln!(
            "Warning: Unrecognized {} '{unknown}'. Valid values: 'json', 'text'. Using 'text'.",
            constants::ENV_LOG_FORMAT
        );
        LogFormat::Text
    });

    let writer = log_writer(std::env::var(constants::ENV_LOG_FILE).ok().as_deref());

    let (text_layer, json_layer) = match format {
        LogFormat::Text => (
            Some(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(writer),
            ),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_span_list(false)
                    .with_writer(writer),
            ),
        ),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(text_layer)
        .with(json_layer)
        .init();
}
