/// Birthdate formatting
///
/// Turns an ISO `YYYY-MM-DD` birthdate into its long human-readable form
/// ("May 18, 1991"). The function is deliberately total: any input that is
/// not exactly three numeric components naming a real calendar date comes
/// back unchanged, so a malformed record still renders, just unformatted.
///
/// Formatting is a pure calendar rendering with no timezone involved, which
/// keeps the output identical regardless of where the process runs.

use chrono::NaiveDate;

/// Formats a `YYYY-MM-DD` birthdate for display.
///
/// Returns the original input unchanged on any parse failure (wrong
/// component count, non-numeric part, not-a-date). Never panics.
///
/// # Example
///
/// ```
/// use cardfile_shared::derive::format_birthdate;
///
/// assert_eq!(format_birthdate("1991-05-18"), "May 18, 1991");
/// assert_eq!(format_birthdate("around 1990"), "around 1990");
/// ```
pub fn format_birthdate(raw: &str) -> String {
    let Some((year, month, day)) = split_ymd(raw) else {
        return raw.to_string();
    };
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Splits a date string into exactly three numeric components.
///
/// Shared with the age calculation, which needs the numeric parts but not
/// calendar validity.
pub(crate) fn split_ymd(raw: &str) -> Option<(i32, u32, u32)> {
    let mut parts = raw.split('-');
    let year = parts.next()?.parse().ok()?;
    let month = parts.next()?.parse().ok()?;
    let day = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}
