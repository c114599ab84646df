//! # Cardfile Client Library
//!
//! This library provides the terminal client for the Cardfile contact
//! lookup: searching contacts by name through the proxy and rendering one
//! card per match, each patched with the member's subscription orders as
//! they arrive.
//!
//! ## Modules
//!
//! - `client`: Proxy API client behind the `Directory` trait
//! - `surface`: Render-surface abstraction and terminal implementation
//! - `render`: Card and subscription-panel text rendering
//! - `session`: Search orchestration with per-contact concurrent fetches

pub mod client;
pub mod render;
pub mod session;
pub mod surface;
