//! # Cardfile Proxy Server Library
//!
//! This library provides the core functionality for the Cardfile proxy
//! server: the thin HTTP layer that injects the CRM credentials the client
//! must never hold.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: API route handlers
//! - `upstream`: Credential-injecting client for the upstream CRM

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod upstream;
