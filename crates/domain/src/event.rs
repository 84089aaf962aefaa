//! Event — an immutable record of a loop transition, broadcast so every
//! surface converges on the same running/stopped view.

use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::time::{Timestamp, now};
use crate::trigger::Trigger;

/// What happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// A run started and its first prompt went out.
    Activated { trigger: Trigger, prompt: String },
    /// Activation was rolled back before reaching the loop.
    ActivationAborted { reason: String },
    /// A continue iteration submitted the repeat instruction.
    Continued { iteration: u64 },
    /// The pending timer was re-armed with a new interval.
    Rescheduled { interval_secs: u64 },
    /// The run was torn down.
    Deactivated { trigger: Trigger },
    /// Settings were reloaded after a change on another surface.
    SettingsSynced,
}

/// A timestamped [`EventKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(flatten)]
    pub kind: EventKind,
    pub timestamp: Timestamp,
}

impl Event {
    #[must_use]
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: now(),
        }
    }
}
