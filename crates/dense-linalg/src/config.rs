//! Display configuration for matrices and vectors.
//!
//! `FormatOptions` controls how `Matrix` and `Vector` values are rendered as
//! text, both through `Display` and through the logging helpers. Options can
//! be built in code or loaded from a JSON file.
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How individual entries are written.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// `12.3400`
    #[default]
    Fixed,
    /// `1.2340e1`
    Scientific,
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" => Ok(Notation::Fixed),
            "scientific" | "sci" => Ok(Notation::Scientific),
            _ => Err(format!(
                "Unknown notation: {}. Expected one of `fixed` or `scientific`",
                s
            )),
        }
    }
}

/// Text rendering options.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FormatOptions {
    /// Digits after the decimal point.
    pub precision: usize,
    pub notation: Notation,
    /// Show at most this many rows before eliding the rest with `...`.
    pub max_rows: Option<usize>,
    /// Show this many leading and trailing columns when a row is more than
    /// twice as wide.
    pub max_cols: Option<usize>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            notation: Notation::Fixed,
            max_rows: None,
            max_cols: None,
        }
    }
}

impl FormatOptions {
    pub fn new(precision: usize, notation: Notation) -> Self {
        Self {
            precision,
            notation,
            ..Self::default()
        }
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    pub fn with_max_cols(mut self, max_cols: usize) -> Self {
        self.max_cols = Some(max_cols);
        self
    }

    /// Format a single entry.
    pub fn format_value(&self, value: f64) -> String {
        match self.notation {
            Notation::Fixed => format!("{:.*}", self.precision, value),
            Notation::Scientific => format!("{:.*e}", self.precision, value),
        }
    }
}

/// Load formatting options from a JSON file. Missing fields take their
/// default values.
pub fn load_format_options<P: AsRef<Path>>(path: P) -> Result<FormatOptions> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let options: FormatOptions = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(options)
}
