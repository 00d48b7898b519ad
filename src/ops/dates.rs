//! Date arguments of `view` and `remove`.

use crate::cli::SelectionArgs;
use crate::constants::ALL_ENTRIES_ARG;
use crate::errors::{AppError, AppResult};
use crate::journal_core::{
    normalize, remainder, resolve_date, tokenize, DateParsePolicy, Query, ResolvedDate,
};
use chrono::NaiveDateTime;
use tracing::debug;

/// Resolves a command-line date argument such as `yesterday`, `2023-04` or
/// `monday 14.30`.
///
/// Unlike entry text, an argument must be a date and nothing else.
///
/// # Errors
///
/// Returns `AppError::Journal` if the argument does not start with a date, or
/// if anything follows the date.
pub fn resolve_argument(arg: &str, now: NaiveDateTime) -> AppResult<ResolvedDate> {
    let normalized = normalize(arg.trim());
    let tokens = tokenize(&normalized);
    let resolved = DateParsePolicy::Reject.apply(resolve_date(&tokens, now), now, arg)?;

    if resolved.consumed < tokens.len() {
        return Err(AppError::Journal(format!(
            "Unexpected text after the date in '{}': '{}'",
            arg,
            remainder(&tokens, resolved.consumed)
        )));
    }

    debug!(
        "Resolved '{}' to {} ({:?})",
        arg, resolved.instant, resolved.precision
    );
    Ok(resolved)
}

/// Turns the target and optional range of `view`/`remove` into a query.
///
/// `all`, in any case, selects every entry, or with `--from`/`--to` the entries strictly
/// between the two dates. Any other target selects the entries on that date
/// at the precision it was given in.
///
/// # Errors
///
/// Returns `AppError::Journal` if a date does not resolve, if only one end of
/// the range is given, or if a range is combined with a specific date.
pub fn selection_query(selection: &SelectionArgs, now: NaiveDateTime) -> AppResult<Query> {
    let is_all = selection.target.eq_ignore_ascii_case(ALL_ENTRIES_ARG);

    match (is_all, selection.from.as_deref(), selection.to.as_deref()) {
        (true, None, None) => Ok(Query::All),
        (true, Some(from), Some(to)) => Ok(Query::Between {
            start: resolve_argument(from, now)?.instant,
            end: resolve_argument(to, now)?.instant,
        }),
        (true, _, _) => Err(AppError::Journal(
            "--from and --to must be given together".to_string(),
        )),
        (false, None, None) => {
            let date = resolve_argument(&selection.target, now)?;
            Ok(Query::OnDate {
                instant: date.instant,
                precision: date.precision,
            })
        }
        (false, _, _) => Err(AppError::Journal(format!(
            "--from and --to can only be used with '{}'",
            ALL_ENTRIES_ARG
        ))),
    }
}
