//! Environment configuration

use import_core::{ImportLimits, ParseOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Extra bytes the HTTP layer accepts past the import limit.
pub const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

/// Server configuration read from the environment.
///
/// Variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
/// - HOST / PORT: listen address (default 0.0.0.0:3000)
/// - IMPORT_MAX_BYTES: largest accepted import body
/// - IMPORT_MAX_LINES: most non-blank lines per import
/// - IMPORT_STRICT_ANSWERS: reject ambiguous correct options by default
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub limits: ImportLimits,
    pub strict_answers: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_var(&lookup, "PORT")?.unwrap_or(3000);

        let defaults = ImportLimits::default();
        let limits = ImportLimits {
            max_bytes: parse_var(&lookup, "IMPORT_MAX_BYTES")?.or(defaults.max_bytes),
            max_lines: parse_var(&lookup, "IMPORT_MAX_LINES")?.or(defaults.max_lines),
        };
        let strict_answers = parse_var(&lookup, "IMPORT_STRICT_ANSWERS")?.unwrap_or(false);

        Ok(Self {
            database_url,
            host,
            port,
            limits,
            strict_answers,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parser options for one request.
    pub fn parse_options(&self, strict: Option<bool>) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            strict_answers: strict.unwrap_or(self.strict_answers),
        }
    }

    /// Request body cap. `None` when import size is unlimited.
    ///
    /// Sits above `IMPORT_MAX_BYTES` so that a slightly oversized upload reaches
    /// the parser and gets the JSON `import_too_large` error.
    pub fn body_limit(&self) -> Option<usize> {
        self.limits
            .max_bytes
            .map(|max| max.saturating_add(BODY_LIMIT_HEADROOM))
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}
