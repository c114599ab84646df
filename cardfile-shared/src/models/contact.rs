/// Contact model
///
/// A contact as returned by the upstream CRM's contacts-query endpoint.
/// The wire format is camelCase JSON with deeply nested optional sections:
///
/// ```json
/// {
///   "id": "c-1001",
///   "info": {
///     "name": { "first": "May", "last": "Lindqvist" },
///     "company": "Acme",
///     "jobTitle": "Engineer",
///     "birthdate": "1991-05-18"
///   },
///   "primaryInfo": { "email": "may@example.com", "phone": "+4670..." },
///   "memberInfo": { "memberId": "m-77" }
/// }
/// ```
///
/// Every nested section and field may be absent. Accessor methods provide
/// the display view: string fields are surfaced only when non-empty, and
/// the member id is `None` when missing or blank.

use serde::{Deserialize, Serialize};

/// Response page of a contacts query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactsPage {
    /// Matched contacts, in upstream order
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// A single CRM contact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Contact id (opaque upstream identifier)
    pub id: String,

    /// Personal info section
    #[serde(default)]
    pub info: ContactInfo,

    /// Primary contact info section
    #[serde(default)]
    pub primary_info: PrimaryInfo,

    /// Membership info, present only for contacts with a site member account
    #[serde(default)]
    pub member_info: Option<MemberInfo>,
}

/// Personal info section of a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Name sub-section
    #[serde(default)]
    pub name: Option<ContactName>,

    /// Company name
    #[serde(default)]
    pub company: Option<String>,

    /// Job title
    #[serde(default)]
    pub job_title: Option<String>,

    /// Birthdate as an ISO calendar date string (`YYYY-MM-DD`)
    #[serde(default)]
    pub birthdate: Option<String>,
}

/// First/last name pair
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactName {
    #[serde(default)]
    pub first: Option<String>,

    #[serde(default)]
    pub last: Option<String>,
}

/// Primary contact info section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrimaryInfo {
    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,
}

/// Membership info section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberInfo {
    /// Member id linking the contact to its paid-plan orders
    #[serde(default)]
    pub member_id: Option<String>,
}

impl Contact {
    /// First name, or the empty string when absent
    pub fn first_name(&self) -> &str {
        self.info
            .name
            .as_ref()
            .and_then(|n| n.first.as_deref())
            .unwrap_or("")
    }

    /// Last name, or the empty string when absent
    pub fn last_name(&self) -> &str {
        self.info
            .name
            .as_ref()
            .and_then(|n| n.last.as_deref())
            .unwrap_or("")
    }

    /// Full display name, trimmed; empty when neither part is present
    pub fn full_name(&self) -> String {
        let full = format!("{} {}", self.first_name(), self.last_name());
        full.trim().to_string()
    }

    /// Email, only when present and non-empty
    pub fn email(&self) -> Option<&str> {
        non_empty(self.primary_info.email.as_deref())
    }

    /// Phone, only when present and non-empty
    pub fn phone(&self) -> Option<&str> {
        non_empty(self.primary_info.phone.as_deref())
    }

    /// Company, only when present and non-empty
    pub fn company(&self) -> Option<&str> {
        non_empty(self.info.company.as_deref())
    }

    /// Job title, only when present and non-empty
    pub fn job_title(&self) -> Option<&str> {
        non_empty(self.info.job_title.as_deref())
    }

    /// Birthdate string, only when present and non-empty
    pub fn birthdate(&self) -> Option<&str> {
        non_empty(self.info.birthdate.as_deref())
    }

    /// Member id, only when the contact carries a non-blank membership
    pub fn member_id(&self) -> Option<&str> {
        non_empty(self.member_info.as_ref().and_then(|m| m.member_id.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
