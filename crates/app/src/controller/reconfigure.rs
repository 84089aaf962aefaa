//! Live reconfiguration: apply a changed setting without losing whether the
//! loop is running.

use infinity_domain::error::InfinityError;
use infinity_domain::event::EventKind;
use infinity_domain::settings::SettingKey;
use infinity_domain::trigger::Trigger;

use super::{Activation, AutomationController};
use crate::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

impl<D, S, U, P> AutomationController<D, S, U, P>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Reply language or topic changed: restart the run in a fresh
    /// conversation so the new first prompt applies. Silent.
    ///
    /// Returns `Ok(None)` when automation was off (only the configuration is
    /// reloaded), otherwise the outcome of the new activation.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the settings cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn restart_in_new_conversation(&self) -> Result<Option<Activation>, InfinityError> {
        self.reload_configuration(&[SettingKey::ReplyLanguage, SettingKey::ReplyTopic])
            .await?;
        if !self.is_active() {
            return Ok(None);
        }
        self.deactivate(Trigger::Sync).await;
        Ok(Some(self.activate(Trigger::Sync).await))
    }

    /// Reply interval changed: replace the pending timer with one at the new
    /// interval, in the same conversation. Silent.
    ///
    /// Returns whether a timer was re-armed.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the settings cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn reschedule(&self) -> Result<bool, InfinityError> {
        self.reload_configuration(&[SettingKey::ReplyInterval]).await?;
        let run = {
            let mut slot = self.lock_slot();
            if let Some(handle) = slot.timer.take() {
                handle.abort();
            }
            slot.state.disarm();
            // Before the first prompt the activation arms its own timer.
            slot.state
                .current_run()
                .filter(|_| slot.state.has_sent_first_prompt())
        };
        let Some(run) = run else {
            return Ok(false);
        };

        let outcome = self.driver().wait_reply_idle().await;
        tracing::debug!(?outcome, "reply settled before rescheduling");
        if !self.arm_timer(run) {
            return Ok(false);
        }
        let interval_secs = self.configuration().reply_interval_secs.get();
        self.publish(EventKind::Rescheduled { interval_secs }).await;
        Ok(true)
    }

    /// Another surface changed the settings: reload `keys`, redraw the
    /// toggle and force the loop off without notifying.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the settings cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn sync_from_settings(&self, keys: &[SettingKey]) -> Result<(), InfinityError> {
        self.reload_configuration(keys).await?;
        self.refresh_toggle();
        self.publish(EventKind::SettingsSynced).await;
        self.deactivate(Trigger::Sync).await;
        Ok(())
    }
}
