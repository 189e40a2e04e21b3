//! Runtime settings resolved from the environment.
//!
//! Raw environment strings are validated here; everything downstream sees
//! a resolved [`Settings`]. Invalid values fall back to defaults and are
//! reported as warnings, which the caller logs once tracing is up.

use std::env::{self, VarError};

use tracing::level_filters::LevelFilter;

pub(crate) const INTCONV_LOG: &str = "INTCONV_LOG";
pub(crate) const RUST_LOG: &str = "RUST_LOG";

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    log_level: LevelFilter,
    /// Non-blank `RUST_LOG` directives. Take precedence over `log_level`.
    rust_log: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            rust_log: None,
        }
    }
}

impl Settings {
    pub(crate) fn from_env() -> (Self, Vec<String>) {
        Self::resolve(|key| env::var(key))
    }

    fn resolve(lookup: impl Fn(&str) -> Result<String, VarError>) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();

        let log_level = match non_blank(INTCONV_LOG, &lookup, &mut warnings) {
            None => DEFAULT_LOG_LEVEL,
            Some(raw) => match raw.parse::<LevelFilter>() {
                Ok(level) => level,
                Err(_) => {
                    warnings.push(format!(
                        "Unknown {INTCONV_LOG} value {raw:?}, using {DEFAULT_LOG_LEVEL}"
                    ));
                    DEFAULT_LOG_LEVEL
                }
            },
        };

        let rust_log = non_blank(RUST_LOG, &lookup, &mut warnings);

        (
            Self {
                log_level,
                rust_log,
            },
            warnings,
        )
    }

    #[must_use]
    pub(crate) const fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    #[must_use]
    pub(crate) fn rust_log(&self) -> Option<&str> {
        self.rust_log.as_deref()
    }
}

/// Trimmed value of `key`, or `None` when unset, blank or not UTF-8.
fn non_blank(
    key: &str,
    lookup: &impl Fn(&str) -> Result<String, VarError>,
    warnings: &mut Vec<String>,
) -> Option<String> {
    match lookup(key) {
        Ok(raw) if raw.trim().is_empty() => None,
        Ok(raw) => Some(raw.trim().to_string()),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            warnings.push(format!(
                "Ignoring {key}: value {:?} is not valid UTF-8",
                raw.to_string_lossy()
            ));
            None
        }
    }
}
