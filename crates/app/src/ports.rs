//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the automation core and the outside world:
//! the remote page being driven, the settings store, the UI surface that shows
//! notifications and the toggle, and the event fan-out to other surfaces.
//! They are defined here (in `app`) so that both the controller and the
//! adapters can depend on them without creating circular dependencies.

pub mod event_bus;
pub mod page_driver;
pub mod settings_store;
pub mod surface;

pub use event_bus::EventPublisher;
pub use page_driver::{IdleOutcome, PageDriver};
pub use settings_store::{SettingValues, SettingsStore};
pub use surface::Surface;
