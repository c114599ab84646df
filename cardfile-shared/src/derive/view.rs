/// Derived per-contact view
///
/// Bundles the display derivations for one contact: the formatted
/// birthdate, the computed age, and the under-21 flag. A view is derived
/// freshly on every render against a caller-supplied "today" and is never
/// persisted.

use crate::derive::{age_on, format_birthdate, is_under_21};
use crate::models::Contact;
use chrono::NaiveDate;

/// Computed display fields for one contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    /// Birthdate for display; raw string when unformattable, `None` when absent
    pub birthdate_display: Option<String>,

    /// Age on the supplied date; `None` when the birthdate is absent or malformed
    pub age: Option<i32>,

    /// Whether the card carries the under-21 marker
    pub under_21: bool,
}

impl ContactView {
    /// Derives the view for a contact as of `today`.
    ///
    /// A malformed birthdate degrades per field: the display falls back to
    /// the raw string while the age is simply absent. Never fails.
    pub fn derive(contact: &Contact, today: NaiveDate) -> Self {
        let birthdate = contact.birthdate();
        let age = birthdate.and_then(|raw| age_on(raw, today));

        ContactView {
            birthdate_display: birthdate.map(format_birthdate),
            age,
            under_21: is_under_21(age),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_with_birthdate(birthdate: &str) -> Contact {
        serde_json::from_value(json!({
            "id": "c-1",
            "info": { "birthdate": birthdate }
        }))
        .unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    }

    #[test]
    fn test_valid_birthdate() {
        let view = ContactView::derive(&contact_with_birthdate("2000-01-01"), today());
        assert_eq!(view.birthdate_display.as_deref(), Some("January 1, 2000"));
        assert_eq!(view.age, Some(20));
        assert!(view.under_21);
    }

    #[test]
    fn test_adult_not_flagged() {
        let view = ContactView::derive(&contact_with_birthdate("1990-01-01"), today());
        assert_eq!(view.age, Some(30));
        assert!(!view.under_21);
    }

    #[test]
    fn test_malformed_birthdate_degrades_per_field() {
        let view = ContactView::derive(&contact_with_birthdate("spring of 91"), today());
        assert_eq!(view.birthdate_display.as_deref(), Some("spring of 91"));
        assert_eq!(view.age, None);
        assert!(!view.under_21);
    }

    #[test]
    fn test_absent_birthdate() {
        let contact: Contact = serde_json::from_value(json!({ "id": "c-1" })).unwrap();
        let view = ContactView::derive(&contact, today());
        assert_eq!(view.birthdate_display, None);
        assert_eq!(view.age, None);
        assert!(!view.under_21);
    }
}
