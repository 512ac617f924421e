//! Search configuration resolved from flags, environment and defaults.
//!
//! Precedence: command-line flag, then environment variable, then default.
//!
//! - `TERMSIM_THRESHOLD`: exclusive minimum similarity (default: 0.5)
//! - `TERMSIM_FORMAT`: `text` or `json` (default: text)

use std::str::FromStr;

use crate::error::{Error, Result};

pub const THRESHOLD_ENV: &str = "TERMSIM_THRESHOLD";
pub const FORMAT_ENV: &str = "TERMSIM_FORMAT";

pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// How search results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::Config(format!(
                "{FORMAT_ENV}: expected `text` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Settings for a `search` run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub threshold: f64,
    pub format: OutputFormat,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            format: OutputFormat::default(),
        }
    }
}

impl SearchConfig {
    /// Resolve settings from the process environment.
    pub fn resolve(threshold: Option<f64>, format: Option<OutputFormat>) -> Result<Self> {
        Self::resolve_with(threshold, format, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `lookup` for environment variables.
    pub fn resolve_with<F>(
        threshold: Option<f64>,
        format: Option<OutputFormat>,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let threshold = match threshold {
            Some(value) => value,
            None => match lookup(THRESHOLD_ENV) {
                Some(raw) => raw.trim().parse::<f64>().map_err(|e| {
                    Error::Config(format!("{THRESHOLD_ENV}: invalid number `{raw}`: {e}"))
                })?,
                None => defaults.threshold,
            },
        };

        let format = match format {
            Some(value) => value,
            None => match lookup(FORMAT_ENV) {
                Some(raw) => raw.parse()?,
                None => defaults.format,
            },
        };

        Ok(Self { threshold, format })
    }
}
