//! Module containing date helpers to locate daily routing table snapshots.

use std::path::{Path, PathBuf};

use time::{format_description::FormatItem, macros::format_description, Date, Duration};

/// Layout of a daily snapshot below the data root, e.g. `2013-01/pfx2as_2013-01-01.bz2`.
const SNAPSHOT_FILE: &[FormatItem<'static>] =
    format_description!("[year]-[month]/pfx2as_[year]-[month]-[day].bz2");
/// Layout of a forward-diff result below the output root.
const RESULT_FILE: &[FormatItem<'static>] =
    format_description!("[year]-[month]/pfxfwdres_[year]-[month]-[day].json");
const MONTH_DIR: &[FormatItem<'static>] = format_description!("[year]-[month]");
const ISO_DATE: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Iterate over all days from `start` to `end`, both inclusive. Yields nothing if `start > end`.
pub fn date_iter(start: Date, end: Date) -> impl Iterator<Item = Date> {
    std::iter::successors(Some(start), |d| d.next_day()).take_while(move |d| *d <= end)
}

/// Go back `days` days from `date`, clamping at the earliest representable date.
pub fn days_before(date: Date, days: i64) -> Date {
    date.checked_sub(Duration::days(days)).unwrap_or(Date::MIN)
}

/// Parse a date in `YYYY-MM-DD` format.
pub fn parse_date(s: &str) -> Result<Date, time::error::Parse> {
    Date::parse(s, ISO_DATE)
}

/// Format a date as `YYYY-MM-DD`.
pub fn fmt_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Path of the snapshot file for `date` below `base`.
pub fn snapshot_path(base: impl AsRef<Path>, date: Date) -> PathBuf {
    join_formatted(base, date, SNAPSHOT_FILE)
}

/// Path of the forward-diff result file for `date` below `base`.
pub fn result_path(base: impl AsRef<Path>, date: Date) -> PathBuf {
    join_formatted(base, date, RESULT_FILE)
}

/// Path of the monthly directory that contains the files for `date`.
pub fn month_dir(base: impl AsRef<Path>, date: Date) -> PathBuf {
    join_formatted(base, date, MONTH_DIR)
}

fn join_formatted(base: impl AsRef<Path>, date: Date, fmt: &[FormatItem<'_>]) -> PathBuf {
    let mut path = base.as_ref().to_path_buf();
    // all components of the descriptions above are numeric, formatting cannot fail for them.
    path.push(date.format(fmt).unwrap_or_default());
    path
}
