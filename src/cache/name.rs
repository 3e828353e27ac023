//! Entry-name grammar for cache files.
//!
//! Every cache entry is a plain file whose name follows the convention
//! `<key>--<date-token><extension>`, e.g. `state-CA--02Oct2009.opml`.
//! Allocation always writes the date as `ddMonYYYY`; parsing additionally
//! accepts a few alternate spellings left behind by older producers.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;

use crate::error::{CacheError, Result};

/// Splits an entry name into key, date token, and extension.
///
/// Both inner groups are greedy, so the split lands on the *last* `--`
/// before the *last* `.`. Keys containing `--` or `.` parse at those last
/// delimiters; this is load-bearing for compatibility with existing cache
/// directories and must not be tightened.
static ENTRY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)--(.*)\.(.*)$").expect("ENTRY_REGEX must compile"));

/// Accepted date-token spellings, tried in order.
///
/// `%d%b%Y` is the canonical written form; the rest exist for read
/// compatibility. chrono matches month names case-insensitively, so
/// `12jan2009` and `15Feb2009` both parse via `%d%b%Y`.
const DATE_FORMATS: &[&str] = &["%d%b%Y", "%b-%d-%Y", "%d-%b-%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// A decoded cache entry name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryName {
    /// Logical key, independent of the date suffix.
    pub key: String,
    /// Calendar date encoded in the file name.
    pub date: NaiveDate,
}

impl EntryName {
    /// Decode `file_name` against the cache's configured `extension`.
    ///
    /// Returns `Ok(None)` when the name does not follow the entry convention
    /// at all (no `--` delimiter, or a different extension). Returns
    /// [`CacheError::DateParse`] when the name has the right shape but its
    /// date token matches none of the accepted spellings — directory scans
    /// swallow that case per entry and keep going.
    pub fn parse(file_name: &str, extension: &str) -> Result<Option<EntryName>> {
        let Some(caps) = ENTRY_REGEX.captures(file_name) else {
            return Ok(None);
        };

        // Extension check is exact and case-sensitive: ".opml" != ".OPML".
        if format!(".{}", &caps[3]) != extension {
            return Ok(None);
        }

        let token = &caps[2];
        let date = parse_date_token(token).ok_or_else(|| CacheError::DateParse {
            file_name: file_name.to_string(),
            token: token.to_string(),
        })?;

        Ok(Some(EntryName {
            key: caps[1].to_string(),
            date,
        }))
    }

    /// Age in whole days relative to today's calendar date.
    ///
    /// Time of day is discarded on both sides; an entry written late
    /// yesterday is 1 day old all of today. Future-dated entries yield a
    /// negative age.
    pub fn age_days(&self) -> i64 {
        (Local::now().date_naive() - self.date).num_days()
    }

    /// An entry is fresh when it was dated today or yesterday.
    pub fn is_fresh(&self) -> bool {
        self.age_days() <= 1
    }

    /// Encode a file name for `key` dated `date`, e.g. `state-CA--02Oct2009.opml`.
    pub fn format(key: &str, date: NaiveDate, extension: &str) -> String {
        format!("{key}--{}{extension}", date.format("%d%b%Y"))
    }
}

/// Try each accepted date spelling in turn.
fn parse_date_token(token: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
}
