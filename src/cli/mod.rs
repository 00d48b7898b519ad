//! Command-line interface for daybook.
//!
//! Arguments are parsed with clap's derive API. Every invocation runs exactly
//! one subcommand; the global flags only affect logging.

use crate::constants::{APP_DESCRIPTION, APP_NAME, LOG_FORMAT_JSON, LOG_FORMAT_TEXT};
use crate::output::RenderMode;
use clap::builder::PossibleValuesParser;
use clap::{ArgGroup, Args, Parser, Subcommand};

/// A personal journal that lives in a single file
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[clap(
        long,
        global = true,
        default_value = LOG_FORMAT_TEXT,
        value_parser = PossibleValuesParser::new([LOG_FORMAT_TEXT, LOG_FORMAT_JSON])
    )]
    pub log_format: String,

    #[clap(subcommand)]
    pub command: Command,
}

/// The operation to run.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Adds an entry. A leading date such as `yesterday`, `2023-04-15` or `monday 14.30` backdates it
    Add(AddArgs),

    /// Removes the entries on a date, or every entry with `all`
    Remove(SelectionArgs),

    /// Shows the entries on a date, or every entry with `all`
    View {
        #[clap(flatten)]
        selection: SelectionArgs,

        #[clap(flatten)]
        output: OutputArgs,
    },

    /// Finds entries by keyword, tag or field name
    Search(SearchArgs),

    /// Lists every tag with the number of entries carrying it
    Tags,

    /// Lists every field of every entry
    Fields,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    /// Entry text, optionally starting with a date
    #[clap(required = true)]
    pub text: Vec<String>,

    /// Time of day for the entry (format: HH.MM, 24-hour)
    #[clap(short = 't', long)]
    pub time: Option<String>,
}

impl AddArgs {
    /// The words of the entry joined back into one string.
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

/// Which entries `view` and `remove` act on.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SelectionArgs {
    /// A date (today, yesterday, a weekday, YYYY-MM-DD, YYYY-MM, YYYY) or `all`
    pub target: String,

    /// Start of a range, exclusive. Only valid with `all`
    #[clap(long, requires = "to")]
    pub from: Option<String>,

    /// End of a range, exclusive. Only valid with `all`
    #[clap(long, requires = "from")]
    pub to: Option<String>,
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputArgs {
    /// Print one line per entry
    #[clap(long)]
    pub plaintext: bool,

    /// Print entries as JSON
    #[clap(long)]
    pub json: bool,
}

impl OutputArgs {
    pub fn mode(&self) -> RenderMode {
        RenderMode::from_flags(self.plaintext, self.json)
    }
}

/// What part of an entry a search looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Keywords,
    Tags,
    Fields,
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
#[clap(group(ArgGroup::new("criteria").required(true).args(["keywords", "tags", "fields"])))]
pub struct SearchArgs {
    /// Match entries whose content contains any of the values
    #[clap(long)]
    pub keywords: bool,

    /// Match entries carrying any of the values as a tag
    #[clap(long)]
    pub tags: bool,

    /// Match entries with a field named by any of the values
    #[clap(long)]
    pub fields: bool,

    /// Values to search for
    #[clap(required = true)]
    pub values: Vec<String>,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl SearchArgs {
    pub fn kind(&self) -> SearchKind {
        if self.tags {
            SearchKind::Tags
        } else if self.fields {
            SearchKind::Fields
        } else {
            SearchKind::Keywords
        }
    }
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse_from(std::env::args())
    }

    /// Whether structured JSON logs were requested
    pub fn json_logs(&self) -> bool {
        self.log_format == LOG_FORMAT_JSON
    }
}
