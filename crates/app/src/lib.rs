//! # infinity-app
//!
//! Application layer — the automation loop and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PageDriver` — wait for page/reply readiness, submit, stop, scroll, new chat
//!   - `SettingsStore` — load & save persisted settings
//!   - `Surface` — notifications, alerts and the page toggle
//!   - `EventPublisher` — fan loop transitions out to other surfaces
//! - Provide the **driving/inbound** side:
//!   - `AutomationController` — activate, continue, deactivate, reconfigure
//!   - `ControlBridge` — control messages, settings and visibility events
//!   - `session::bootstrap` — first-load seeding and toggle injection
//! - Provide **in-process infrastructure** (event bus) that doesn't need IO
//!
//! ## Dependency rule
//! Depends on `infinity-domain` only (plus `tokio` for tasks, timers and channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod bridge;
pub mod controller;
pub mod event_bus;
pub mod ports;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
