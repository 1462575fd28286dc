//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{AppError, AppResult};

/// How the driver prints the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered HTML markup.
    #[default]
    Html,
    /// JSON snapshot of the observable state.
    Json,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "output format must be \"html\" or \"json\", got \"{other}\""
            ))),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Directory with template overrides (default: built-in templates only).
    pub templates_dir: Option<PathBuf>,

    /// Output format (default: html).
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let templates_dir = lookup("PASSFORM_TEMPLATES_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let output = lookup("PASSFORM_OUTPUT")
            .map(|v| v.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            templates_dir,
            output,
        })
    }
}
