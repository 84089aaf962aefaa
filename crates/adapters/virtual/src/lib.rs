//! # infinity-adapter-virtual
//!
//! Virtual/demo adapters that let the automation loop run without a browser.
//!
//! | Type | Port | Behaviour |
//! |------|------|-----------|
//! | [`VirtualPage`] | `PageDriver` | Every submission "generates" a reply for a fixed duration |
//! | [`VirtualSurface`] | `Surface` | Logs and records notifications, alerts and the toggle |
//!
//! ## Dependency rule
//!
//! Depends on `infinity-app` (port traits) and `infinity-domain` only.

mod page;
mod surface;

pub use page::VirtualPage;
pub use surface::VirtualSurface;
