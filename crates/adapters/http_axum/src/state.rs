//! Shared application state for axum handlers.

use std::sync::Arc;

use infinity_app::bridge::ControlBridge;
use infinity_app::controller::AutomationController;
use infinity_app::event_bus::InProcessEventBus;
use infinity_app::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

/// Application state shared across all axum handlers.
///
/// Generic over the controller's port types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the port types themselves do not need
/// to be `Clone`.
pub struct AppState<D, S, U, P> {
    /// Entry point for control messages, settings and visibility events.
    pub bridge: ControlBridge<D, S, U, P>,
    /// Event bus the SSE stream subscribes to.
    pub event_bus: Arc<InProcessEventBus>,
}

impl<D, S, U, P> Clone for AppState<D, S, U, P> {
    fn clone(&self) -> Self {
        Self {
            bridge: self.bridge.clone(),
            event_bus: Arc::clone(&self.event_bus),
        }
    }
}

impl<D, S, U, P> AppState<D, S, U, P>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    pub fn new(bridge: ControlBridge<D, S, U, P>, event_bus: Arc<InProcessEventBus>) -> Self {
        Self { bridge, event_bus }
    }

    #[must_use]
    pub fn controller(&self) -> &AutomationController<D, S, U, P> {
        self.bridge.controller()
    }
}
