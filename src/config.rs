//! Content pipeline configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::path::PathBuf;

use crate::error::ContentError;

/// Output format of the tracing subscriber installed by the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ContentError::InvalidConfig(format!(
                "LOG_FORMAT must be `pretty` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Top-level content pipeline configuration.
///
/// Loaded once at startup via [`ContentConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Directory holding the six dataset CSV files.
    pub content_dir: PathBuf,

    /// Directory the JSON page views are written to.
    pub output_dir: PathBuf,

    /// Fail the run when any row diagnostic was recorded.
    pub strict: bool,

    /// Tracing output format.
    pub log_format: LogFormat,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist/content"),
            strict: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ContentConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to the [`Default`] values when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidConfig`] if `LOG_FORMAT` is set to
    /// anything other than `pretty` or `json`.
    pub fn from_env() -> Result<Self, ContentError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let content_dir = std::env::var("CONTENT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.content_dir);
        let output_dir = std::env::var("OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);
        let strict = parse_env_bool("CONTENT_STRICT", defaults.strict);
        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(raw) => raw.parse()?,
            Err(_) => defaults.log_format,
        };

        Ok(Self {
            content_dir,
            output_dir,
            strict,
            log_format,
        })
    }
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_bool(&v))
        .unwrap_or(default)
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
