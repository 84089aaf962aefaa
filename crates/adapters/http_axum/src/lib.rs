//! # infinity-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Act as a **remote control surface** (the popup/menu of a browser
//!   deployment): send control messages, change settings, report page
//!   visibility
//! - Expose the controller status (`GET /api/state`) and stream loop
//!   transitions as Server-Sent Events (`GET /api/events/stream`)
//! - Map [`InfinityError`](infinity_domain::error::InfinityError) into HTTP
//!   status codes
//!
//! ## Dependency rule
//! Depends on `infinity-app` (for the bridge and port traits) and
//! `infinity-domain` (for request/response types). Never leaks axum types
//! into the domain.

#[allow(clippy::missing_errors_doc)]
pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;
