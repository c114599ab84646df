/// Subscription order model
///
/// An order as returned by the upstream pricing-plans endpoint. Orders are
/// linked to a contact through `buyer.memberId`; the upstream list is not
/// reliably pre-filtered, so the proxy narrows it per member before relaying.
///
/// Start and end dates arrive as RFC 3339 timestamps. Display accessors
/// render them as calendar dates and fall back to the raw string when a
/// value does not parse; an absent end date reads as "Ongoing".

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Response page of an orders-by-member lookup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersPage {
    /// Orders, in upstream order
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A single subscription order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Name of the purchased plan
    #[serde(default)]
    pub plan_name: Option<String>,

    /// Order status as reported upstream (e.g. "ACTIVE", "ENDED")
    #[serde(default)]
    pub status: Option<String>,

    /// Subscription start, RFC 3339
    #[serde(default)]
    pub start_date: Option<String>,

    /// Subscription end, RFC 3339; absent while the subscription is ongoing
    #[serde(default)]
    pub end_date: Option<String>,

    /// Purchasing member
    #[serde(default)]
    pub buyer: Option<Buyer>,
}

/// Buyer section linking an order to a member
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    #[serde(default)]
    pub member_id: Option<String>,
}

impl Order {
    /// Plan name for display, defaulting when absent or blank
    pub fn plan_label(&self) -> &str {
        match self.plan_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Unknown Plan",
        }
    }

    /// Status for display, defaulting when absent or blank
    pub fn status_label(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => "Unknown Status",
        }
    }

    /// Start date for display; raw string when unparseable, "Unknown" when absent
    pub fn start_label(&self) -> String {
        match self.start_date.as_deref() {
            Some(raw) if !raw.is_empty() => display_date(raw),
            _ => "Unknown".to_string(),
        }
    }

    /// End date for display; "Ongoing" when absent
    pub fn end_label(&self) -> String {
        match self.end_date.as_deref() {
            Some(raw) if !raw.is_empty() => display_date(raw),
            _ => "Ongoing".to_string(),
        }
    }

    /// Member id of the buyer, when present
    pub fn buyer_member_id(&self) -> Option<&str> {
        self.buyer
            .as_ref()
            .and_then(|b| b.member_id.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// Whether this order belongs to the given member
    pub fn is_for_member(&self, member_id: &str) -> bool {
        self.buyer_member_id() == Some(member_id)
    }
}

impl OrdersPage {
    /// Drops orders whose buyer does not match the given member id
    pub fn retain_member(&mut self, member_id: &str) {
        self.orders.retain(|order| order.is_for_member(member_id));
    }
}

/// Renders an upstream timestamp as a calendar date.
///
/// Accepts RFC 3339 datetimes and bare `YYYY-MM-DD` dates; anything else is
/// returned unchanged.
fn display_date(raw: &str) -> String {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.date_naive().format("%B %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }
    raw.to_string()
}
