/*!
# Daybook - A Journal in a Single File

This file contains the main application flow: parse arguments, set up
logging, load configuration, open the journal and run one command.

## Usage

```
daybook [OPTIONS] <COMMAND>

Commands:
  add     Adds an entry. A leading date such as `yesterday` backdates it
  remove  Removes the entries on a date, or every entry with `all`
  view    Shows the entries on a date, or every entry with `all`
  search  Finds entries by keyword, tag or field name
  tags    Lists every tag with the number of entries carrying it
  fields  Lists every field of every entry

Options:
  -v, --verbose                 Print verbose output
      --log-format <FORMAT>     Log output format [default: text] [possible values: text, json]
  -h, --help                    Print help information
  -V, --version                 Print version information
```

## Configuration

- `DAYBOOK_PATH`: The journal file (defaults to "~/.daybook/journal.json")
- `DAYBOOK_STRICT_DATES`: Reject `add` text that does not start with a date
*/

use chrono::Local;
use daybook::cli::CliArgs;
use daybook::config::Config;
use daybook::constants::{
    DEFAULT_LOG_LEVEL, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME, VERBOSE_LOG_LEVEL,
};
use daybook::errors::AppResult;
use daybook::journal_io::JsonFileStore;
use daybook::ops;
use std::process::ExitCode;
use tracing::{debug, error, info, info_span};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

fn init_tracing(args: &CliArgs) {
    let default_level = if args.verbose {
        VERBOSE_LOG_LEVEL
    } else {
        DEFAULT_LOG_LEVEL
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so rendered entries on stdout stay clean
    if args.json_logs() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

/// The main entry point for the daybook application.
///
/// Every invocation runs inside a root span carrying a fresh correlation ID.
/// Errors are logged once here and turned into a non-zero exit code.
fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_tracing(&args);

    let correlation_id = Uuid::new_v4().to_string();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    match run_application(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Application error");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads configuration, opens the journal and runs the requested command.
///
/// The current time is read exactly once, here.
fn run_application(args: &CliArgs) -> AppResult<String> {
    let now = Local::now().naive_local();
    debug!("CLI arguments: {:?}", args);

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;
    debug!("Configuration: {:?}", config);

    let store = JsonFileStore::open(&config.journal_path)?;
    ops::run(&args.command, &store, &config, now)
}
