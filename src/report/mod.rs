//! Report rendering
//!
//! Rendering is a pure function of the fetched snapshot: no I/O, no reordering, and
//! identical input always produces identical output.

pub mod json;
pub mod text;

pub use text::{HEADER, NOT_SET, format_list};

use std::fmt;
use std::str::FromStr;

use crate::error::Result;
use crate::model::WebhookConfiguration;

/// How much of each webhook entry to print
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Configuration and webhook names only
    Summary,
    /// Every field of every webhook entry
    #[default]
    Detailed,
}

/// Output encoding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verbosity::Summary => write!(f, "summary"),
            Verbosity::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "summary" => Ok(Verbosity::Summary),
            "detailed" => Ok(Verbosity::Detailed),
            other => Err(format!(
                "unknown verbosity '{}' (expected summary or detailed)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}' (expected text or json)", other)),
        }
    }
}

/// Rendering options
#[derive(Clone, Copy, Debug, Default)]
pub struct ReportOptions {
    pub verbosity: Verbosity,
    pub format: OutputFormat,
}

/// Render the plain-text report. Never fails.
pub fn render(configs: &[WebhookConfiguration], verbosity: Verbosity) -> String {
    text::render(configs, verbosity)
}

/// Render in the encoding selected by `options`
pub fn render_with(configs: &[WebhookConfiguration], options: ReportOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(text::render(configs, options.verbosity)),
        OutputFormat::Json => json::render(configs, options.verbosity),
    }
}
