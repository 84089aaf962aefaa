//! Control surface bridge — routes what other surfaces send into the
//! controller.
//!
//! Three inbound channels: direct control messages ([`ControlBridge::dispatch`]),
//! settings changes ([`ControlBridge::apply_setting_change`],
//! [`ControlBridge::on_settings_changed`]) and page visibility
//! ([`ControlBridge::on_visibility_changed`]).
//!
//! Operations that run for a whole reply (activation, restart, reschedule)
//! are spawned so the sender gets its answer right away; their failures are
//! logged.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use infinity_domain::command::{Command, ControlMessage};
use infinity_domain::error::{InfinityError, UnknownCommandError};
use infinity_domain::settings::SettingKey;
use infinity_domain::trigger::Trigger;

use crate::controller::AutomationController;
use crate::ports::{EventPublisher, PageDriver, SettingsStore, Surface};

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<(), InfinityError>> + Send>>;

/// A registered action: receives the normalized argument list.
pub type Handler = Arc<dyn Fn(Vec<Value>) -> HandlerFuture + Send + Sync>;

/// Entry point for every surface other than the page toggle itself.
pub struct ControlBridge<D, S, U, P> {
    controller: AutomationController<D, S, U, P>,
    handlers: Arc<HashMap<String, Handler>>,
}

impl<D, S, U, P> Clone for ControlBridge<D, S, U, P> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
            handlers: Arc::clone(&self.handlers),
        }
    }
}

impl<D, S, U, P> ControlBridge<D, S, U, P>
where
    D: PageDriver + Send + Sync + 'static,
    S: SettingsStore + Send + Sync + 'static,
    U: Surface + Send + Sync + 'static,
    P: EventPublisher + Send + Sync + 'static,
{
    /// Create a bridge with the built-in actions registered.
    pub fn new(controller: AutomationController<D, S, U, P>) -> Self {
        let mut bridge = Self {
            controller,
            handlers: Arc::new(HashMap::new()),
        };
        bridge.register_builtins();
        bridge
    }

    #[must_use]
    pub fn controller(&self) -> &AutomationController<D, S, U, P> {
        &self.controller
    }

    /// Register `handler` under `name`, replacing any previous one.
    pub fn register<F, Fut>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(Vec<Value>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(), InfinityError>> + Send + 'static,
    {
        let handler: Handler = Arc::new(move |args| -> HandlerFuture { Box::pin(handler(args)) });
        Arc::make_mut(&mut self.handlers).insert(name.into(), handler);
    }

    #[must_use]
    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    fn register_builtins(&mut self) {
        let controller = self.controller.clone();
        self.register("syncExtension", move |_args| {
            let controller = controller.clone();
            async move {
                controller
                    .sync_from_settings(&SettingKey::CONFIGURATION)
                    .await
            }
        });

        for name in ["restartOnReplyLang", "restartInNewChat"] {
            let controller = self.controller.clone();
            self.register(name, move |_args| {
                let controller = controller.clone();
                spawn_detached("restart", async move {
                    controller.restart_in_new_conversation().await.map(drop)
                });
                async { Ok::<(), InfinityError>(()) }
            });
        }

        for name in ["restartOnReplyInt", "resetInSameChat"] {
            let controller = self.controller.clone();
            self.register(name, move |_args| {
                let controller = controller.clone();
                spawn_detached("reschedule", async move {
                    controller.reschedule().await.map(drop)
                });
                async { Ok::<(), InfinityError>(()) }
            });
        }
    }

    /// Handle a control message from another surface.
    ///
    /// # Errors
    ///
    /// Returns [`InfinityError::InvalidArguments`] when the message cannot be
    /// interpreted, [`InfinityError::UnknownCommand`] when no handler is
    /// registered for its action, or whatever the handler returns.
    #[tracing::instrument(skip(self, message), fields(action = %message.action))]
    pub async fn dispatch(&self, message: ControlMessage) -> Result<(), InfinityError> {
        match Command::parse(&message)? {
            Command::Notify(notification) => {
                let shadow = !self.controller.driver().is_dark_theme();
                self.controller
                    .surface()
                    .notify(notification.with_shadow(shadow));
            }
            Command::Alert(alert) => self.controller.surface().alert(alert),
            Command::RefreshToggleDisplay => self.controller.refresh_toggle(),
            Command::SimulateToggleClick => {
                if self.controller.is_active() {
                    self.controller.deactivate(Trigger::Menu).await;
                } else {
                    let controller = self.controller.clone();
                    tokio::spawn(async move {
                        controller.activate(Trigger::Menu).await;
                    });
                }
            }
            Command::ForceDeactivate => {
                self.controller.deactivate(Trigger::Menu).await;
            }
            Command::Call { name, args } => {
                let handler = self
                    .handlers
                    .get(&name)
                    .cloned()
                    .ok_or(UnknownCommandError { action: name })?;
                handler(args).await?;
            }
        }
        Ok(())
    }

    /// Settings were changed on another surface.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the settings cannot be read.
    pub async fn on_settings_changed(&self, keys: &[SettingKey]) -> Result<(), InfinityError> {
        self.controller.sync_from_settings(keys).await
    }

    /// The page was shown or hidden. Hiding a running page stops the loop.
    #[tracing::instrument(skip(self))]
    pub async fn on_visibility_changed(&self, hidden: bool) {
        if hidden && self.controller.is_active() {
            self.controller.deactivate(Trigger::User).await;
        }
    }

    /// React to `key` having just been saved by another surface.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the settings cannot be read.
    #[tracing::instrument(skip(self))]
    pub async fn apply_setting_change(&self, key: SettingKey) -> Result<(), InfinityError> {
        match key {
            SettingKey::ReplyLanguage | SettingKey::ReplyTopic => {
                let controller = self.controller.clone();
                spawn_detached("restart", async move {
                    controller.restart_in_new_conversation().await.map(drop)
                });
            }
            SettingKey::ReplyInterval => {
                let controller = self.controller.clone();
                spawn_detached("reschedule", async move {
                    controller.reschedule().await.map(drop)
                });
            }
            SettingKey::InfinityMode => {
                let stored = self
                    .controller
                    .store()
                    .load(&[SettingKey::InfinityMode])
                    .await?;
                let desired = stored
                    .get(&SettingKey::InfinityMode)
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                let controller = self.controller.clone();
                tokio::spawn(async move {
                    controller.toggle(desired, Trigger::Menu).await;
                });
            }
            other => self.on_settings_changed(&[other]).await?,
        }
        Ok(())
    }
}

fn spawn_detached<F>(operation: &'static str, task: F)
where
    F: Future<Output = Result<(), InfinityError>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = task.await {
            tracing::warn!(operation, error = %err, "background operation failed");
        }
    });
}
