//! Configuration management for the daybook application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults.
//!
//! # Environment Variables
//!
//! - `DAYBOOK_PATH`: Path to the journal file (defaults to ~/.daybook/journal.json)
//! - `DAYBOOK_STRICT_DATES`: When `1` or `true`, `add` refuses text that does
//!   not start with a recognised date instead of dating it now
//! - `HOME`: Used for expanding the default journal path

use crate::constants::{
    DEFAULT_JOURNAL_FILE, ENV_VAR_DAYBOOK_PATH, ENV_VAR_DAYBOOK_STRICT_DATES, ENV_VAR_HOME,
    REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use crate::journal_core::DateParsePolicy;
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the daybook application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use daybook::Config;
/// use daybook::journal_core::DateParsePolicy;
/// use std::path::PathBuf;
///
/// let config = Config {
///     journal_path: PathBuf::from("/path/to/journal.json"),
///     date_policy: DateParsePolicy::FallbackToNow,
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// File holding the journal entries.
    pub journal_path: PathBuf,

    /// What `add` does with text that does not start with a date.
    pub date_policy: DateParsePolicy,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("journal_path", &REDACTED_PLACEHOLDER)
            .field("date_policy", &self.date_policy)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            journal_path: PathBuf::from(""),
            date_policy: DateParsePolicy::FallbackToNow,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The journal path is expanded with `shellexpand`, so `~` and
    /// `$VARIABLE` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if:
    /// - The journal path expansion fails
    /// - The resulting journal path is empty
    /// - `DAYBOOK_STRICT_DATES` holds something other than a boolean
    pub fn load() -> AppResult<Self> {
        let journal_path_str = env::var(ENV_VAR_DAYBOOK_PATH).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_JOURNAL_FILE)
        });

        let expanded_path = shellexpand::full(&journal_path_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let journal_path = PathBuf::from(expanded_path.into_owned());

        if journal_path.as_os_str().is_empty() {
            return Err(AppError::Config("Journal path is empty".to_string()));
        }

        let date_policy = match env::var(ENV_VAR_DAYBOOK_STRICT_DATES) {
            Ok(value) => Self::parse_strict_flag(&value)?,
            Err(_) => DateParsePolicy::FallbackToNow,
        };

        Ok(Config {
            journal_path,
            date_policy,
        })
    }

    fn parse_strict_flag(value: &str) -> AppResult<DateParsePolicy> {
        match value.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(DateParsePolicy::Reject),
            "" | "0" | "false" | "no" => Ok(DateParsePolicy::FallbackToNow),
            other => Err(AppError::Config(format!(
                "{} must be true or false, got '{}'",
                ENV_VAR_DAYBOOK_STRICT_DATES, other
            ))),
        }
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Journal path is empty"
    /// - "Journal path must be an absolute path"
    /// - "Journal path points to a directory"
    pub fn validate(&self) -> AppResult<()> {
        if self.journal_path.as_os_str().is_empty() {
            return Err(AppError::Config("Journal path is empty".to_string()));
        }

        if !self.journal_path.is_absolute() {
            return Err(AppError::Config(
                "Journal path must be an absolute path".to_string(),
            ));
        }

        if self.journal_path.is_dir() {
            return Err(AppError::Config(format!(
                "Journal path points to a directory: {}. Point {} at a file instead",
                self.journal_path.display(),
                ENV_VAR_DAYBOOK_PATH
            )));
        }

        Ok(())
    }
}
