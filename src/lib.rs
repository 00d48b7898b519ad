/*!
# Daybook

Daybook is a personal journal kept in a single JSON file. Entries are plain
sentences, optionally starting with a loose date ("yesterday", "monday 14.30",
"2023-04") and carrying `+tags` and `key=value` fields. Entries can then be
viewed by date or range and searched by keyword, tag or field.

## Architecture

- `journal_core`: pure logic. Date resolution, entry building and queries;
  takes "now" as a parameter and never touches the clock, disk or logs
- `journal_io`: the JSON file store and its advisory lock
- `output`: plain, JSON and colored human rendering
- `cli`: command-line parsing using clap
- `config`: configuration loading and validation
- `ops`: one function per command, tying the above together
- `errors`: error handling infrastructure

## Usage Example

```rust,no_run
use daybook::journal_io::JsonFileStore;
use daybook::{ops, CliArgs, Config};

fn main() -> daybook::AppResult<()> {
    let args = CliArgs::parse();
    let config = Config::load()?;
    config.validate()?;

    let store = JsonFileStore::open(&config.journal_path)?;
    let now = chrono::Local::now().naive_local();
    print!("{}", ops::run(&args.command, &store, &config, now)?);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// Error types and utilities for error handling
pub mod errors;
/// Date resolution, entry building and queries
pub mod journal_core;
/// Journal persistence
pub mod journal_io;
/// Operations behind each command
pub mod ops;
/// Rendering for the terminal
pub mod output;

// Re-export important types for convenience
pub use cli::{CliArgs, Command};
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal_core::{Entry, Journal, Query};
