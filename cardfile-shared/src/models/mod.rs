/// Data model for the CRM records the proxy relays
///
/// This module contains the wire types exchanged with the upstream CRM and
/// between the Cardfile server and client:
///
/// - `contact`: Contact records with nested personal and membership info
/// - `order`: Subscription orders attached to a member
///
/// All records are immutable as received. Optional fields are modeled as
/// explicit `Option`s with display defaults provided by accessor methods,
/// so absence never needs falsy-coalescing at the call site.

pub mod contact;
pub mod order;

pub use contact::{Contact, ContactsPage};
pub use order::{Order, OrdersPage};
