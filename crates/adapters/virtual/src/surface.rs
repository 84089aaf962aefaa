//! Surface that logs what a real UI would draw.

use std::sync::{Mutex, MutexGuard, PoisonError};

use infinity_app::ports::Surface;
use infinity_domain::surface::{Alert, Notification, ToggleDisplay};

#[derive(Default)]
struct Drawn {
    notifications: Vec<Notification>,
    alerts: Vec<Alert>,
    toggle: Option<ToggleDisplay>,
}

/// Records everything shown and logs it through `tracing`.
#[derive(Default)]
pub struct VirtualSurface {
    drawn: Mutex<Drawn>,
}

impl VirtualSurface {
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().notifications.clone()
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<Alert> {
        self.lock().alerts.clone()
    }

    /// The toggle as last rendered.
    #[must_use]
    pub fn toggle(&self) -> Option<ToggleDisplay> {
        self.lock().toggle.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Drawn> {
        self.drawn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Surface for VirtualSurface {
    fn notify(&self, notification: Notification) {
        tracing::info!(
            message = %notification.message,
            position = ?notification.position,
            "notification"
        );
        self.lock().notifications.push(notification);
    }

    fn alert(&self, alert: Alert) {
        tracing::info!(title = %alert.title, message = %alert.message, "alert");
        self.lock().alerts.push(alert);
    }

    fn render_toggle(&self, toggle: ToggleDisplay) {
        tracing::debug!(
            visible = toggle.visible,
            label = %toggle.label,
            compact = toggle.compact,
            "toggle rendered"
        );
        self.lock().toggle = Some(toggle);
    }
}
