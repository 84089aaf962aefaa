//! Trigger — who asked for an activation or deactivation.

use serde::{Deserialize, Serialize};

/// Origin of a state transition.
///
/// Notification suppression is a pure function of the trigger: surfaces that
/// react to an event another surface already announced pass `Sync` or `Menu`
/// so the user sees one ON/OFF notification, not one per surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Direct interaction with this page's toggle.
    #[default]
    User,
    /// A settings change observed from another surface.
    Sync,
    /// A menu or popup command relayed to this page.
    Menu,
}

impl Trigger {
    /// Whether the ON/OFF notification must be skipped for this call.
    #[must_use]
    pub fn suppresses_notification(self) -> bool {
        !matches!(self, Self::User)
    }
}
