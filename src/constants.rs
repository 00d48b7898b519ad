//! Constants used throughout the application.
//!
//! This module contains all constants used in the daybook application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "daybook";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A personal journal that lives in a single file";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";
/// Positional argument selecting every entry for `view` and `remove`.
pub const ALL_ENTRIES_ARG: &str = "all";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the journal file.
pub const ENV_VAR_DAYBOOK_PATH: &str = "DAYBOOK_PATH";
/// Environment variable that makes `add` reject unrecognised leading dates.
pub const ENV_VAR_DAYBOOK_STRICT_DATES: &str = "DAYBOOK_STRICT_DATES";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default journal location relative to the user's home directory.
pub const DEFAULT_JOURNAL_FILE: &str = ".daybook/journal.json";
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Suffix appended to the journal path to form the lock file path.
pub const LOCK_FILE_SUFFIX: &str = ".lock";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Date/Time Logic
/// Canonical timestamp format shared by display and storage.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d, %H:%M";
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Format string for a 24-hour time-of-day token such as `14.30`.
pub const TIME_OF_DAY_FORMAT: &str = "%H.%M";
/// Token resolving to the current day.
pub const TODAY_TOKEN: &str = "today";
/// Token resolving to the day before the current one.
pub const YESTERDAY_TOKEN: &str = "yesterday";

// Entry Parsing
/// Characters that end an entry title.
pub const TITLE_DELIMITERS: &[char] = &['.', ',', '?', '!'];
/// Marker introducing a tag.
pub const TAG_MARKER: char = '+';
/// Separator between a field key and its value.
pub const FIELD_SEPARATOR: char = '=';

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "daybook";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
