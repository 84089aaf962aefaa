//! Automation controller — owns the loop state and its continue timer.
//!
//! Every step that resumes after a suspension (settle delay, idle wait, timer
//! sleep) re-checks the state before acting: still active, same run, no
//! other timer armed. Deactivation therefore wins any race with a pending
//! wait without having to cancel it.

mod reconfigure;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;
use tokio::task::AbortHandle;

use infinity_domain::error::InfinityError;
use infinity_domain::event::{Event, EventKind};
use infinity_domain::id::TimerId;
use infinity_domain::prompt::{REPEAT_INSTRUCTION, first_prompt};
use infinity_domain::settings::{Configuration, SettingKey};
use infinity_domain::state::{AutomationState, Phase, RunId};
use infinity_domain::surface::{Notification, ToggleDisplay};
use infinity_domain::time::{Timestamp, now};
use infinity_domain::trigger::Trigger;

use crate::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

/// Pause between opening a new conversation and the first submission.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Tunables that are not user settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub settle_delay: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

/// Result of [`AutomationController::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// The first prompt went out.
    Started,
    /// A run was already in progress; nothing changed.
    AlreadyActive,
    /// Rolled back before the first prompt (page not ready, or stopped meanwhile).
    Aborted,
}

/// Result of [`AutomationController::deactivate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deactivation {
    Stopped,
    AlreadyInactive,
}

/// Serializable status shown by other surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub is_active: bool,
    pub phase: Phase,
    pub has_pending_timer: bool,
    pub has_sent_first_prompt: bool,
    pub activated_at: Option<Timestamp>,
    /// Continue iterations since the process started.
    pub iterations: u64,
    pub configuration: Configuration,
}

struct Slot {
    state: AutomationState,
    timer: Option<AbortHandle>,
    iterations: u64,
}

struct Inner<D, S, U, P> {
    driver: D,
    store: S,
    surface: U,
    publisher: P,
    options: ControllerOptions,
    slot: Mutex<Slot>,
    config: Mutex<Configuration>,
}

/// The single owner of [`AutomationState`] and [`Configuration`] for a page.
///
/// Cheap to clone; clones share the same state.
pub struct AutomationController<D, S, U, P> {
    inner: Arc<Inner<D, S, U, P>>,
}

impl<D, S, U, P> Clone for AutomationController<D, S, U, P> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<D, S, U, P> AutomationController<D, S, U, P>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a deactivated controller running on the default configuration.
    pub fn new(driver: D, store: S, surface: U, publisher: P) -> Self {
        Self::with_options(driver, store, surface, publisher, ControllerOptions::default())
    }

    pub fn with_options(
        driver: D,
        store: S,
        surface: U,
        publisher: P,
        options: ControllerOptions,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                driver,
                store,
                surface,
                publisher,
                options,
                slot: Mutex::new(Slot {
                    state: AutomationState::default(),
                    timer: None,
                    iterations: 0,
                }),
                config: Mutex::new(Configuration::default()),
            }),
        }
    }

    #[must_use]
    pub fn driver(&self) -> &D {
        &self.inner.driver
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.inner.store
    }

    #[must_use]
    pub fn surface(&self) -> &U {
        &self.inner.surface
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.lock_slot().state.is_active()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.lock_slot().state.phase()
    }

    #[must_use]
    pub fn has_pending_timer(&self) -> bool {
        self.lock_slot().state.pending_timer().is_some()
    }

    /// A copy of the current configuration.
    #[must_use]
    pub fn configuration(&self) -> Configuration {
        self.lock_config().clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let configuration = self.configuration();
        let slot = self.lock_slot();
        Snapshot {
            is_active: slot.state.is_active(),
            phase: slot.state.phase(),
            has_pending_timer: slot.state.pending_timer().is_some(),
            has_sent_first_prompt: slot.state.has_sent_first_prompt(),
            activated_at: slot.state.activated_at(),
            iterations: slot.iterations,
            configuration,
        }
    }

    /// Start a run: new conversation, first prompt, then the continue loop.
    ///
    /// Returns once the first reply has settled and the first continue timer
    /// is armed (or the run was stopped meanwhile).
    #[tracing::instrument(skip(self))]
    pub async fn activate(&self, trigger: Trigger) -> Activation {
        let run = self.lock_slot().state.begin_activation(now());
        let Some(run) = run else {
            tracing::debug!("already active");
            return Activation::AlreadyActive;
        };
        self.refresh_toggle();

        if let Err(err) = self.inner.driver.start_new_conversation().await {
            tracing::debug!(error = %err, "could not open a new conversation");
            self.roll_back(run, &err, false).await;
            return Activation::Aborted;
        }
        let announced = !trigger.suppresses_notification();
        if announced {
            self.announce(true);
        }

        tokio::time::sleep(self.inner.options.settle_delay).await;
        if !self.is_current(run) {
            tracing::debug!("stopped while settling");
            return Activation::Aborted;
        }

        let prompt = first_prompt(&self.configuration());
        if let Err(err) = self.inner.driver.submit(&prompt).await {
            tracing::debug!(error = %err, "could not submit the first prompt");
            self.roll_back(run, &err, announced).await;
            return Activation::Aborted;
        }
        let sent = self.lock_slot().state.mark_prompt_sent(run);
        if !sent {
            return Activation::Aborted;
        }
        self.persist_mode(true).await;
        self.publish(EventKind::Activated { trigger, prompt }).await;
        tracing::info!("infinity mode activated");

        let outcome = self.inner.driver.wait_reply_idle().await;
        tracing::debug!(?outcome, "first reply settled");
        self.arm_timer(run);
        Activation::Started
    }

    /// Stop the run, cancel the pending continue and stop generation.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate(&self, trigger: Trigger) -> Deactivation {
        let stopped = {
            let mut slot = self.lock_slot();
            if let Some(handle) = slot.timer.take() {
                handle.abort();
            }
            slot.state.deactivate()
        };
        let Some(stopped) = stopped else {
            return Deactivation::AlreadyInactive;
        };
        if stopped.announces(trigger) {
            self.announce(false);
        }
        self.inner.driver.stop().await;
        self.persist_mode(false).await;
        self.refresh_toggle();
        self.publish(EventKind::Deactivated { trigger }).await;
        tracing::info!("infinity mode deactivated");
        Deactivation::Stopped
    }

    /// Drive the state towards `desired`. Returns whether automation is
    /// active afterwards.
    pub async fn toggle(&self, desired: bool, trigger: Trigger) -> bool {
        if desired {
            self.activate(trigger).await;
        } else {
            self.deactivate(trigger).await;
        }
        self.is_active()
    }

    /// Render the page toggle from the current configuration and state.
    pub fn refresh_toggle(&self) {
        let visible = self.lock_config().toggle_visible();
        let display = ToggleDisplay::new(
            visible,
            self.is_active(),
            self.inner.driver.is_mobile_viewport(),
        );
        self.inner.surface.render_toggle(display);
    }

    /// Re-read `keys` from the store into the configuration.
    ///
    /// Stored values that fail validation are skipped and the previous value
    /// is kept. Keys missing from the store fall back to their defaults.
    /// Returns whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the store cannot be read.
    pub async fn reload_configuration(&self, keys: &[SettingKey]) -> Result<bool, InfinityError> {
        let values = self.inner.store.load(keys).await?;
        let mut config = self.lock_config();
        let mut changed = false;
        for key in keys {
            let Some(value) = values.get(key) else {
                changed |= config.clear(*key);
                continue;
            };
            match config.apply(*key, value) {
                Ok(applied) => changed |= applied,
                Err(err) => tracing::warn!(%key, error = %err, "ignoring invalid setting"),
            }
        }
        Ok(changed)
    }

    /// Arm the continue timer for `run` at the current interval.
    ///
    /// Refuses when `run` is stale or a timer is already pending.
    pub(crate) fn arm_timer(&self, run: RunId) -> bool {
        let interval = self.lock_config().reply_interval();
        let timer = TimerId::new();
        let mut slot = self.lock_slot();
        if !slot.state.arm(run, timer) {
            tracing::debug!("not scheduling a continue for a stale run");
            return false;
        }
        let this = self.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(interval).await;
            this.on_timer(timer).await;
        });
        slot.timer = Some(task.abort_handle());
        true
    }

    async fn on_timer(&self, timer: TimerId) {
        let fired = {
            let mut slot = self.lock_slot();
            let run = slot.state.fire(timer);
            if run.is_some() {
                slot.timer = None;
                slot.iterations += 1;
            }
            run.map(|run| (run, slot.iterations))
        };
        if let Some((run, iteration)) = fired {
            self.continue_run(run, iteration).await;
        }
    }

    #[tracing::instrument(skip(self))]
    async fn continue_run(&self, run: RunId, iteration: u64) {
        match self.inner.driver.submit(REPEAT_INSTRUCTION).await {
            Ok(()) => self.publish(EventKind::Continued { iteration }).await,
            Err(err) => tracing::warn!(error = %err, "could not submit the repeat instruction"),
        }
        let auto_scroll = !self.lock_config().auto_scroll_disabled;
        if auto_scroll && let Err(err) = self.inner.driver.scroll_to_latest() {
            tracing::debug!(error = %err, "could not scroll to the latest reply");
        }
        let outcome = self.inner.driver.wait_reply_idle().await;
        tracing::debug!(?outcome, "reply settled");
        self.arm_timer(run);
    }

    /// Undo a failed activation. `announced` is whether ON was already shown,
    /// in which case OFF follows.
    async fn roll_back(&self, run: RunId, err: &InfinityError, announced: bool) {
        let rolled_back = self.lock_slot().state.abort_activation(run);
        if !rolled_back {
            return;
        }
        if announced {
            self.announce(false);
        }
        self.persist_mode(false).await;
        self.refresh_toggle();
        self.publish(EventKind::ActivationAborted {
            reason: error_chain(err),
        })
        .await;
    }

    fn is_current(&self, run: RunId) -> bool {
        self.lock_slot().state.is_current(run)
    }

    fn announce(&self, is_on: bool) {
        let notification =
            Notification::mode_state(is_on).with_shadow(!self.inner.driver.is_dark_theme());
        self.inner.surface.notify(notification);
    }

    async fn persist_mode(&self, is_on: bool) {
        if let Err(err) = self
            .inner
            .store
            .save(SettingKey::InfinityMode, Value::Bool(is_on))
            .await
        {
            tracing::warn!(error = %err, "failed to persist infinity mode");
        }
    }

    async fn publish(&self, kind: EventKind) {
        if let Err(err) = self.inner.publisher.publish(Event::new(kind)).await {
            tracing::warn!(error = %err, "failed to publish event");
        }
    }

    fn lock_slot(&self) -> MutexGuard<'_, Slot> {
        self.inner.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_config(&self) -> MutexGuard<'_, Configuration> {
        self.inner
            .config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn error_chain(err: &InfinityError) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Harness, started_harness};

    const SECOND: Duration = Duration::from_secs(1);

    fn off_count(harness: &Harness) -> usize {
        harness
            .surface
            .messages()
            .iter()
            .filter(|m| m.ends_with("OFF"))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn should_start_run_and_arm_first_timer() {
        let harness = Harness::new();
        harness.driver.finish_replies_instantly();

        let outcome = harness.controller.activate(Trigger::User).await;

        assert_eq!(outcome, Activation::Started);
        assert!(harness.controller.is_active());
        assert!(harness.controller.has_pending_timer());
        assert_eq!(harness.controller.phase(), Phase::Waiting);
        assert_eq!(harness.driver.log().new_conversations, 1);
        assert_eq!(
            harness.driver.log().submissions,
            vec!["Generate a single random question on ALL topics then answer it. Don't type anything else.".to_string()]
        );
        assert_eq!(harness.surface.messages(), vec!["∞ Infinity Mode: ON"]);
        assert_eq!(
            harness.store.get(SettingKey::InfinityMode),
            Some(Value::Bool(true))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_submit_repeat_instruction_every_interval() {
        let harness = started_harness().await;

        tokio::time::sleep(Duration::from_millis(7_100)).await;
        assert_eq!(harness.driver.repeats(), 1);

        tokio::time::sleep(7 * SECOND).await;
        assert_eq!(harness.driver.repeats(), 2);
        assert_eq!(harness.controller.snapshot().iterations, 2);
        assert_eq!(harness.driver.log().scrolls, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_scroll_when_auto_scroll_disabled() {
        let harness = Harness::new();
        harness.driver.finish_replies_instantly();
        harness
            .store
            .put(SettingKey::AutoScrollDisabled, Value::Bool(true));
        harness
            .controller
            .reload_configuration(&SettingKey::CONFIGURATION)
            .await
            .unwrap();
        harness.controller.activate(Trigger::User).await;

        tokio::time::sleep(Duration::from_millis(7_100)).await;

        assert_eq!(harness.driver.repeats(), 1);
        assert_eq!(harness.driver.log().scrolls, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_refuse_second_activation_while_first_is_in_flight() {
        let harness = Harness::new();
        let first = tokio::spawn({
            let controller = harness.controller.clone();
            async move { controller.activate(Trigger::User).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        let second = harness.controller.activate(Trigger::User).await;

        assert_eq!(second, Activation::AlreadyActive);
        tokio::time::sleep(SECOND).await;
        harness.driver.finish_reply();
        assert_eq!(first.await.unwrap(), Activation::Started);
        assert_eq!(harness.driver.log().new_conversations, 1);
        assert_eq!(harness.surface.messages().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_let_deactivation_win_over_pending_idle_wait() {
        let harness = Harness::new();
        let activation = tokio::spawn({
            let controller = harness.controller.clone();
            async move { controller.activate(Trigger::User).await }
        });
        tokio::time::sleep(SECOND).await;
        assert_eq!(harness.driver.log().submissions.len(), 1);

        let outcome = harness.controller.deactivate(Trigger::User).await;
        activation.await.unwrap();

        assert_eq!(outcome, Deactivation::Stopped);
        assert!(!harness.controller.is_active());
        assert!(!harness.controller.has_pending_timer());
        tokio::time::sleep(30 * SECOND).await;
        assert_eq!(harness.driver.repeats(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_abort_when_deactivated_during_settle_delay() {
        let harness = Harness::new();
        let activation = tokio::spawn({
            let controller = harness.controller.clone();
            async move { controller.activate(Trigger::User).await }
        });
        tokio::time::sleep(Duration::from_millis(100)).await;

        harness.controller.deactivate(Trigger::User).await;

        assert_eq!(activation.await.unwrap(), Activation::Aborted);
        assert!(harness.driver.log().submissions.is_empty());
        assert_eq!(off_count(&harness), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_at_most_one_timer() {
        let harness = started_harness().await;
        let run = harness.controller.lock_slot().state.current_run().unwrap();

        assert!(!harness.controller.arm_timer(run));

        tokio::time::sleep(Duration::from_millis(7_100)).await;
        assert_eq!(harness.driver.repeats(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_rearm_after_reply_if_deactivated_meanwhile() {
        let harness = started_harness().await;
        harness.driver.hold_replies();

        tokio::time::sleep(Duration::from_millis(7_100)).await;
        assert_eq!(harness.controller.phase(), Phase::Continuing);

        harness.controller.deactivate(Trigger::Sync).await;
        tokio::time::sleep(30 * SECOND).await;

        assert_eq!(harness.driver.repeats(), 1);
        assert!(!harness.controller.has_pending_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn should_roll_back_when_new_chat_button_is_missing() {
        let harness = Harness::new();
        harness.driver.remove_new_chat_button();

        let outcome = harness.controller.activate(Trigger::User).await;

        assert_eq!(outcome, Activation::Aborted);
        assert!(!harness.controller.is_active());
        assert_eq!(harness.controller.phase(), Phase::Deactivated);
        assert!(harness.driver.log().submissions.is_empty());
        assert_eq!(
            harness.store.get(SettingKey::InfinityMode),
            Some(Value::Bool(false))
        );
        assert!(matches!(
            harness.events.kinds().last(),
            Some(EventKind::ActivationAborted { .. })
        ));
        assert!(!harness.surface.last_toggle().unwrap().is_on);
        assert!(harness.surface.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_roll_back_when_first_prompt_cannot_be_submitted() {
        let harness = Harness::new();
        harness.driver.fail_submits();

        let outcome = harness.controller.activate(Trigger::User).await;

        assert_eq!(outcome, Activation::Aborted);
        assert!(!harness.controller.is_active());
        assert!(!harness.controller.has_pending_timer());
        assert_eq!(harness.driver.log().new_conversations, 1);
        assert_eq!(
            harness.store.get(SettingKey::InfinityMode),
            Some(Value::Bool(false))
        );
        assert!(matches!(
            harness.events.kinds().last(),
            Some(EventKind::ActivationAborted { reason }) if reason.contains("chat input")
        ));
        assert_eq!(
            harness.surface.messages(),
            vec!["∞ Infinity Mode: ON".to_string(), "∞ Infinity Mode: OFF".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_stay_silent_when_sync_activation_fails() {
        let harness = Harness::new();
        harness.driver.fail_submits();

        let outcome = harness.controller.activate(Trigger::Sync).await;

        assert_eq!(outcome, Activation::Aborted);
        assert!(harness.surface.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_rearm_when_reply_wait_is_abandoned() {
        let harness = started_harness().await;
        harness.driver.hold_replies();
        tokio::time::sleep(Duration::from_millis(7_100)).await;
        assert_eq!(harness.controller.phase(), Phase::Continuing);

        harness.driver.abandon_idle();
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(harness.controller.has_pending_timer());
        assert_eq!(harness.controller.phase(), Phase::Waiting);
        tokio::time::sleep(7 * SECOND).await;
        assert_eq!(harness.driver.repeats(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_rearm_after_abandoned_wait_if_deactivated() {
        let harness = started_harness().await;
        harness.driver.hold_replies();
        tokio::time::sleep(Duration::from_millis(7_100)).await;
        assert_eq!(harness.controller.phase(), Phase::Continuing);

        harness.driver.abandon_idle();
        harness.controller.deactivate(Trigger::Sync).await;
        tokio::time::sleep(30 * SECOND).await;

        assert!(!harness.controller.has_pending_timer());
        assert_eq!(harness.driver.repeats(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_keep_running_when_settings_cannot_be_saved() {
        let harness = Harness::new();
        harness.driver.finish_replies_instantly();
        harness.store.fail_saves();

        let outcome = harness.controller.activate(Trigger::User).await;

        assert_eq!(outcome, Activation::Started);
        assert!(harness.controller.has_pending_timer());
    }

    #[tokio::test(start_paused = true)]
    async fn should_not_notify_on_sync_deactivation() {
        let harness = started_harness().await;

        harness.controller.deactivate(Trigger::Sync).await;

        assert_eq!(off_count(&harness), 0);
        assert_eq!(harness.driver.log().stops, 1);
        assert_eq!(
            harness.store.get(SettingKey::InfinityMode),
            Some(Value::Bool(false))
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_notify_once_on_user_deactivation_after_prompt() {
        let harness = started_harness().await;

        harness.controller.deactivate(Trigger::User).await;
        harness.controller.deactivate(Trigger::User).await;

        assert_eq!(off_count(&harness), 1);
        assert_eq!(
            harness.surface.messages().last().map(String::as_str),
            Some("∞ Infinity Mode: OFF")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn should_report_already_inactive_without_side_effects() {
        let harness = Harness::new();

        let outcome = harness.controller.deactivate(Trigger::User).await;

        assert_eq!(outcome, Deactivation::AlreadyInactive);
        assert_eq!(harness.driver.log().stops, 0);
        assert!(harness.events.kinds().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn should_toggle_idempotently_under_concurrent_calls() {
        let harness = Harness::new();
        harness.driver.finish_replies_instantly();

        let (a, b) = tokio::join!(
            harness.controller.toggle(true, Trigger::User),
            harness.controller.toggle(true, Trigger::User),
        );
        assert!(a && b);
        assert_eq!(harness.driver.log().new_conversations, 1);

        let (a, b) = tokio::join!(
            harness.controller.toggle(false, Trigger::User),
            harness.controller.toggle(false, Trigger::User),
        );
        assert!(!a && !b);
        assert_eq!(harness.driver.log().stops, 1);
        assert_eq!(off_count(&harness), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn should_hide_toggle_when_extension_disabled() {
        let harness = Harness::new();
        harness
            .store
            .put(SettingKey::ExtensionDisabled, Value::Bool(true));
        harness
            .controller
            .reload_configuration(&SettingKey::CONFIGURATION)
            .await
            .unwrap();

        harness.controller.refresh_toggle();

        let toggle = harness.surface.last_toggle().unwrap();
        assert!(!toggle.visible);
        assert_eq!(toggle.label, "Infinity Mode disabled");
    }

    #[tokio::test]
    async fn should_keep_previous_interval_when_stored_value_is_invalid() {
        let harness = Harness::new();
        harness.store.put(SettingKey::ReplyInterval, Value::from(3));
        harness
            .controller
            .reload_configuration(&[SettingKey::ReplyInterval])
            .await
            .unwrap();

        harness.store.put(SettingKey::ReplyInterval, Value::from(0));
        let changed = harness
            .controller
            .reload_configuration(&[SettingKey::ReplyInterval])
            .await
            .unwrap();

        assert!(!changed);
        assert_eq!(harness.controller.configuration().reply_interval_secs.get(), 3);
    }

    #[test]
    fn should_join_error_sources() {
        let err: InfinityError = infinity_domain::error::ElementMissingError {
            element: "new chat button",
        }
        .into();
        assert_eq!(
            error_chain(&err),
            "page element missing: page element \"new chat button\" not found"
        );
    }
}
