/// Card and subscription-panel rendering
///
/// Turns contact records plus their derived views into the text blocks the
/// surface displays. Optional identity fields are emitted only when
/// non-empty; a malformed birthdate shows as its raw string with the age
/// line simply absent.

use crate::surface::{Card, CardHandle};
use cardfile_shared::derive::ContactView;
use cardfile_shared::models::{Contact, Order};

/// Placeholder shown in a card's subscription region before its fetch lands
pub const ORDERS_LOADING: &str = "Loading subscriptions...";

/// Builds the card for one contact
pub fn card(contact: &Contact, view: &ContactView) -> Card {
    let name = match contact.full_name() {
        name if name.is_empty() => "(no name)".to_string(),
        name => name,
    };

    let mut body = String::new();
    body.push_str(&format!("=== {} ===\n", name));
    body.push_str(&format!("Contact ID: {}\n", contact.id));

    push_field(&mut body, "Email", contact.email());
    push_field(&mut body, "Phone", contact.phone());
    push_field(&mut body, "Company", contact.company());
    push_field(&mut body, "Job Title", contact.job_title());
    push_field(&mut body, "Birthday", view.birthdate_display.as_deref());

    if let Some(age) = view.age {
        if view.under_21 {
            body.push_str(&format!("Age: {} (under 21)\n", age));
        } else {
            body.push_str(&format!("Age: {}\n", age));
        }
    }

    push_field(&mut body, "Member ID", contact.member_id());

    let awaiting_orders = contact.member_id().is_some();
    if awaiting_orders {
        body.push_str(ORDERS_LOADING);
        body.push('\n');
    }

    Card {
        handle: CardHandle {
            contact_id: contact.id.clone(),
            display_name: name,
        },
        body,
        awaiting_orders,
    }
}

fn push_field(body: &mut String, label: &str, value: Option<&str>) {
    if let Some(value) = value {
        body.push_str(&format!("{}: {}\n", label, value));
    }
}

/// Builds the subscription panel for a resolved order list
pub fn orders_panel(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "No subscriptions found".to_string();
    }

    let mut panel = String::from("Subscriptions:\n");
    for order in orders {
        panel.push_str(&format!(
            "- {} | {} | {} - {}\n",
            order.plan_label(),
            order.status_label(),
            order.start_label(),
            order.end_label(),
        ));
    }
    panel.trim_end().to_string()
}

/// Builds the inline error panel for a failed order fetch
pub fn orders_error(message: &str) -> String {
    format!("Error loading subscriptions: {}", message)
}
