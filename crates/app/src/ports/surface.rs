//! Surface port — the UI this page shows to the user.

use std::sync::Arc;

use infinity_domain::surface::{Alert, Notification, ToggleDisplay};

/// Renders notifications, alerts and the page toggle.
///
/// Calls are fire-and-forget; drawing is the surface's concern.
pub trait Surface {
    fn notify(&self, notification: Notification);

    fn alert(&self, alert: Alert);

    fn render_toggle(&self, display: ToggleDisplay);
}

impl<T: Surface> Surface for Arc<T> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification);
    }

    fn alert(&self, alert: Alert) {
        (**self).alert(alert);
    }

    fn render_toggle(&self, display: ToggleDisplay) {
        (**self).render_toggle(display);
    }
}
