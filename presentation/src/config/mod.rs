//! Presentation-level configuration
//!
//! Configuration for output formatting and REPL behavior, resolved from the
//! config file and command-line flags.

use docqa_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Apply the color setting process-wide
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplConfig {
    /// Path to history file
    pub history_file: Option<PathBuf>,
}
