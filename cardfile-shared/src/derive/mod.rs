/// Per-contact display derivations
///
/// Pure functions computing the display fields a contact card carries beyond
/// the raw record: the long-form birthdate, the integer age, and the
/// under-21 flag. All of them are total: malformed input degrades to the
/// safest visible fallback (the raw string, or no value) and never produces
/// an error, so one bad record cannot take down a whole result page.
///
/// - `birthdate`: `YYYY-MM-DD` → "May 18, 1991", original string on failure
/// - `age`: age relative to an injected "today"; `None` on failure
/// - `view`: bundles the derivations for one contact

pub mod age;
pub mod birthdate;
pub mod view;

pub use age::{age_on, is_under_21};
pub use birthdate::format_birthdate;
pub use view::ContactView;
