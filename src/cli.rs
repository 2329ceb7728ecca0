//! Command-line argument parsing
//!
//! fate runs headless: it loads a file, plays a key script against it, and
//! prints the result.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::EditorConfig;

/// A selection-driven modal text editor core
#[derive(Parser, Debug)]
#[command(name = "fate", version, about = "A selection-driven modal text editor core")]
pub struct CliArgs {
    /// File to edit (empty buffer if omitted)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Keys to play, e.g. `jjicontent<esc>`
    #[arg(short = 'k', long, value_name = "SCRIPT")]
    pub keys: Option<String>,

    /// JSON file mapping buffer positions to labels
    #[arg(short = 'l', long, value_name = "FILE")]
    pub labels: Option<PathBuf>,

    /// Wrap width in columns (overrides config)
    #[arg(long, value_name = "N")]
    pub width: Option<usize>,

    /// Visible screen rows (overrides config)
    #[arg(long, value_name = "N")]
    pub height: Option<usize>,

    /// What to print after the keys have been played
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Buffer content only
    Text,
    /// Rendered view with selection markers and a status line
    View,
    /// Buffer, selection, and status as JSON
    Json,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub path: Option<PathBuf>,
    pub keys: String,
    pub labels: Option<PathBuf>,
    pub wrap_width: usize,
    pub visible_lines: usize,
    pub output: OutputFormat,
}

impl CliArgs {
    /// Merge with `config`; flags win over the config file
    pub fn into_config(self, config: &EditorConfig) -> Result<StartupConfig, String> {
        let wrap_width = self.width.unwrap_or(config.wrap_width);
        if wrap_width == 0 {
            return Err("--width must be at least 1".to_string());
        }
        let visible_lines = self.height.unwrap_or(config.visible_lines);
        if visible_lines == 0 {
            return Err("--height must be at least 1".to_string());
        }

        Ok(StartupConfig {
            path: self.path,
            keys: self.keys.unwrap_or_default(),
            labels: self.labels,
            wrap_width,
            visible_lines,
            output: self.output,
        })
    }
}
