//! Automation state — the activate/continue/deactivate state machine.
//!
//! The state holds no timers or tasks itself, only the facts every
//! post-suspension step re-validates: is automation still wanted, which
//! activation ("run") is current, and whether a continue is already pending.
//!
//! ```text
//! Deactivated ──activate──▶ Activating ──first idle──▶ Waiting
//!      ▲                                                │  ▲
//!      │                                           fire │  │ idle
//!      └────────────── deactivate (from any) ◀──────────▼  │
//!                                                     Continuing
//! ```

use serde::{Deserialize, Serialize};

use crate::id::TimerId;
use crate::time::Timestamp;
use crate::trigger::Trigger;

/// Coarse position in the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Deactivated,
    /// New conversation started, first prompt pending or in flight.
    Activating,
    /// A continue timer is pending (or about to be re-armed).
    Waiting,
    /// The continue callback is running.
    Continuing,
}

/// Identifies one activation. Continuations from an older run become no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunId(u64);

/// Outcome of tearing down an active run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stopped {
    /// Whether the run got as far as submitting its first prompt.
    pub had_sent_prompt: bool,
    /// Timer that was pending and must now be cancelled.
    pub cancelled_timer: Option<TimerId>,
}

impl Stopped {
    /// Whether an OFF notification is due for a stop requested by `trigger`.
    #[must_use]
    pub fn announces(&self, trigger: Trigger) -> bool {
        self.had_sent_prompt && !trigger.suppresses_notification()
    }
}

/// The single state instance owned by the controller.
#[derive(Debug, Clone, Default)]
pub struct AutomationState {
    is_active: bool,
    timer: Option<TimerId>,
    has_sent_first_prompt: bool,
    phase: Phase,
    run: u64,
    activated_at: Option<Timestamp>,
}

impl AutomationState {
    /// Whether automation is wanted (set as soon as activation starts).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }

    #[must_use]
    pub fn has_sent_first_prompt(&self) -> bool {
        self.has_sent_first_prompt
    }

    #[must_use]
    pub fn activated_at(&self) -> Option<Timestamp> {
        self.activated_at
    }

    /// The current run, if automation is active.
    #[must_use]
    pub fn current_run(&self) -> Option<RunId> {
        self.is_active.then_some(RunId(self.run))
    }

    /// Whether `run` is still the active run.
    #[must_use]
    pub fn is_current(&self, run: RunId) -> bool {
        self.is_active && self.run == run.0
    }

    /// Start a new run. Returns `None` when one is already active.
    pub fn begin_activation(&mut self, at: Timestamp) -> Option<RunId> {
        if self.is_active {
            return None;
        }
        self.run += 1;
        self.is_active = true;
        self.has_sent_first_prompt = false;
        self.phase = Phase::Activating;
        self.activated_at = Some(at);
        Some(RunId(self.run))
    }

    /// Roll a failed activation back to `Deactivated`.
    ///
    /// Returns `false` when `run` is no longer current (someone else already
    /// deactivated or restarted).
    pub fn abort_activation(&mut self, run: RunId) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.reset();
        true
    }

    /// Record that the first prompt of `run` went out.
    pub fn mark_prompt_sent(&mut self, run: RunId) -> bool {
        if !self.is_current(run) {
            return false;
        }
        self.has_sent_first_prompt = true;
        true
    }

    /// Whether a continue timer may be armed for `run` right now.
    #[must_use]
    pub fn can_schedule(&self, run: RunId) -> bool {
        self.is_current(run) && self.timer.is_none()
    }

    /// Register `timer` as the pending continue for `run`.
    ///
    /// Refuses (returns `false`) when the run is stale or another timer is
    /// already pending, which keeps at most one live timer.
    pub fn arm(&mut self, run: RunId, timer: TimerId) -> bool {
        if !self.can_schedule(run) {
            return false;
        }
        self.timer = Some(timer);
        self.phase = Phase::Waiting;
        true
    }

    /// Consume the pending timer when it fires.
    ///
    /// Returns the run it belongs to, or `None` if `timer` was cancelled or
    /// replaced in the meantime.
    pub fn fire(&mut self, timer: TimerId) -> Option<RunId> {
        if self.timer != Some(timer) {
            return None;
        }
        self.timer = None;
        self.phase = Phase::Continuing;
        Some(RunId(self.run))
    }

    /// Drop the pending timer without leaving the run.
    pub fn disarm(&mut self) -> Option<TimerId> {
        self.timer.take()
    }

    /// Tear down the active run. Returns `None` when already deactivated.
    pub fn deactivate(&mut self) -> Option<Stopped> {
        if !self.is_active && self.timer.is_none() {
            return None;
        }
        let stopped = Stopped {
            had_sent_prompt: self.has_sent_first_prompt,
            cancelled_timer: self.timer,
        };
        self.reset();
        Some(stopped)
    }

    fn reset(&mut self) {
        self.is_active = false;
        self.timer = None;
        self.has_sent_first_prompt = false;
        self.phase = Phase::Deactivated;
        self.activated_at = None;
    }
}
