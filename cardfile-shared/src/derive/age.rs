/// Age calculation
///
/// Computes an integer age from a `YYYY-MM-DD` birthdate and an injected
/// "today": the year difference, decremented by one when today's
/// (month, day) precedes the birth (month, day). "Today" is a parameter so
/// callers control the clock and tests are reproducible.
///
/// The calculation needs only the three numeric components, not calendar
/// validity: a birthdate the formatter rejects as not-a-date can still
/// yield an age, matching the independent fallback policies of the two
/// derivations. Absent or non-numeric input yields `None`.

use crate::derive::birthdate::split_ymd;
use chrono::{Datelike, NaiveDate};

/// Computes the age on `today` for a `YYYY-MM-DD` birthdate.
///
/// Returns `None` when the birthdate does not split into three numeric
/// components. Never panics.
///
/// # Example
///
/// ```
/// use cardfile_shared::derive::age_on;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// assert_eq!(age_on("2000-01-01", today), Some(20));
/// assert_eq!(age_on("not a date", today), None);
/// ```
pub fn age_on(birthdate: &str, today: NaiveDate) -> Option<i32> {
    let (birth_year, birth_month, birth_day) = split_ymd(birthdate)?;

    let mut age = today.year() - birth_year;
    if (today.month(), today.day()) < (birth_month, birth_day) {
        age -= 1;
    }
    Some(age)
}

/// Whether a computed age warrants the under-21 marker.
///
/// True iff an age was computed and it is below 21. A missing age is never
/// flagged.
pub fn is_under_21(age: Option<i32>) -> bool {
    matches!(age, Some(a) if a < 21)
}
