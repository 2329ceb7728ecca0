//! Logging setup and selection diffing for diagnostics
//!
//! Configure via the RUST_LOG environment variable:
//! - `RUST_LOG=debug` - every selector, operation, and mode change
//! - `RUST_LOG=fate::editable=trace` - per-interval detail in the core
//!
//! Logs are also written to `<config dir>/logs/fate.log` with daily rotation,
//! at debug level regardless of RUST_LOG.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::Interval;
use crate::model::Session;

/// Initialize tracing subscriber with console (stderr) and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // stdout carries the program's output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "fate.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Copy of a session's selection and buffer length, for before/after logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub buffer_len: usize,
    pub intervals: Vec<Interval>,
}

impl SelectionSnapshot {
    pub fn from_session(session: &Session) -> Self {
        use crate::editable::TextBuffer;

        Self {
            buffer_len: session.buffer.len_chars(),
            intervals: session.selection.to_vec(),
        }
    }

    /// Describe what changed between two snapshots, if anything
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.buffer_len != other.buffer_len {
            changes.push(format!("length: {} → {}", self.buffer_len, other.buffer_len));
        }

        if self.intervals.len() != other.intervals.len() {
            changes.push(format!(
                "interval count: {} → {}",
                self.intervals.len(),
                other.intervals.len()
            ));
        } else {
            for (i, (before, after)) in self.intervals.iter().zip(&other.intervals).enumerate() {
                if before != after {
                    changes.push(format!("#{}: {} → {}", i, before, after));
                }
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
