//! In-crate fakes for the ports, shared by the unit tests.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;
use tokio::sync::watch;

use infinity_domain::error::{ElementMissingError, InfinityError};
use infinity_domain::event::{Event, EventKind};
use infinity_domain::prompt::REPEAT_INSTRUCTION;
use infinity_domain::settings::SettingKey;
use infinity_domain::surface::{Alert, Notification, ToggleDisplay};
use infinity_domain::trigger::Trigger;

use crate::controller::{Activation, AutomationController};
use crate::ports::{
    EventPublisher, IdleOutcome, PageDriver, SettingValues, SettingsStore, Surface,
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DriverLog {
    pub submissions: Vec<String>,
    pub new_conversations: usize,
    pub stops: usize,
    pub scrolls: usize,
}

/// Page whose replies stay "generating" until told otherwise.
pub(crate) struct FakeDriver {
    idle: Mutex<watch::Sender<bool>>,
    auto_finish: AtomicBool,
    new_chat_missing: AtomicBool,
    submit_fails: AtomicBool,
    log: Mutex<DriverLog>,
}

impl Default for FakeDriver {
    fn default() -> Self {
        Self {
            idle: Mutex::new(watch::Sender::new(true)),
            auto_finish: AtomicBool::new(false),
            new_chat_missing: AtomicBool::new(false),
            submit_fails: AtomicBool::new(false),
            log: Mutex::new(DriverLog::default()),
        }
    }
}

impl FakeDriver {
    pub fn finish_replies_instantly(&self) {
        self.auto_finish.store(true, Ordering::SeqCst);
    }

    pub fn hold_replies(&self) {
        self.auto_finish.store(false, Ordering::SeqCst);
    }

    pub fn finish_reply(&self) {
        self.set_idle(true);
    }

    /// Drop the idle channel so pending waits resolve as abandoned.
    pub fn abandon_idle(&self) {
        *lock(&self.idle) = watch::Sender::new(true);
    }

    pub fn remove_new_chat_button(&self) {
        self.new_chat_missing.store(true, Ordering::SeqCst);
    }

    pub fn fail_submits(&self) {
        self.submit_fails.store(true, Ordering::SeqCst);
    }

    fn set_idle(&self, idle: bool) {
        lock(&self.idle).send_replace(idle);
    }

    pub fn log(&self) -> DriverLog {
        lock(&self.log).clone()
    }

    pub fn repeats(&self) -> usize {
        lock(&self.log)
            .submissions
            .iter()
            .filter(|text| *text == REPEAT_INSTRUCTION)
            .count()
    }
}

impl PageDriver for FakeDriver {
    fn wait_page_ready(&self) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn wait_sidebar_ready(&self) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn wait_reply_idle(&self) -> impl Future<Output = IdleOutcome> + Send {
        let mut idle = lock(&self.idle).subscribe();
        async move {
            let reached = idle.wait_for(|ready| *ready).await.is_ok();
            if reached {
                IdleOutcome::Idle
            } else {
                IdleOutcome::Abandoned
            }
        }
    }

    fn submit(&self, text: &str) -> impl Future<Output = Result<(), InfinityError>> + Send {
        let result = if self.submit_fails.load(Ordering::SeqCst) {
            Err(ElementMissingError {
                element: "chat input",
            }
            .into())
        } else {
            lock(&self.log).submissions.push(text.to_string());
            if !self.auto_finish.load(Ordering::SeqCst) {
                self.set_idle(false);
            }
            Ok(())
        };
        async move { result }
    }

    fn stop(&self) -> impl Future<Output = ()> + Send {
        lock(&self.log).stops += 1;
        self.set_idle(true);
        async {}
    }

    fn scroll_to_latest(&self) -> Result<(), InfinityError> {
        lock(&self.log).scrolls += 1;
        Ok(())
    }

    fn start_new_conversation(&self) -> impl Future<Output = Result<(), InfinityError>> + Send {
        let result = if self.new_chat_missing.load(Ordering::SeqCst) {
            Err(ElementMissingError {
                element: "new chat button",
            }
            .into())
        } else {
            lock(&self.log).new_conversations += 1;
            self.set_idle(true);
            Ok(())
        };
        async move { result }
    }

    fn is_dark_theme(&self) -> bool {
        false
    }

    fn is_mobile_viewport(&self) -> bool {
        false
    }
}

#[derive(Default)]
pub(crate) struct MemoryStore {
    values: Mutex<SettingValues>,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn put(&self, key: SettingKey, value: Value) {
        lock(&self.values).insert(key, value);
    }

    pub fn remove(&self, key: SettingKey) {
        lock(&self.values).remove(&key);
    }

    pub fn get(&self, key: SettingKey) -> Option<Value> {
        lock(&self.values).get(&key).cloned()
    }

    pub fn fail_saves(&self) {
        self.fail_saves.store(true, Ordering::SeqCst);
    }
}

impl SettingsStore for MemoryStore {
    fn load(
        &self,
        keys: &[SettingKey],
    ) -> impl Future<Output = Result<SettingValues, InfinityError>> + Send {
        let values = lock(&self.values);
        let loaded: SettingValues = keys
            .iter()
            .filter_map(|key| values.get(key).map(|value| (*key, value.clone())))
            .collect();
        async move { Ok(loaded) }
    }

    fn save(
        &self,
        key: SettingKey,
        value: Value,
    ) -> impl Future<Output = Result<(), InfinityError>> + Send {
        let result = if self.fail_saves.load(Ordering::SeqCst) {
            Err(InfinityError::Storage("disk full".into()))
        } else {
            if value.is_null() {
                self.remove(key);
            } else {
                self.put(key, value);
            }
            Ok(())
        };
        async move { result }
    }
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    notifications: Mutex<Vec<Notification>>,
    alerts: Mutex<Vec<Alert>>,
    toggles: Mutex<Vec<ToggleDisplay>>,
}

impl RecordingSurface {
    pub fn messages(&self) -> Vec<String> {
        lock(&self.notifications)
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        lock(&self.notifications).clone()
    }

    pub fn alerts(&self) -> Vec<Alert> {
        lock(&self.alerts).clone()
    }

    pub fn last_toggle(&self) -> Option<ToggleDisplay> {
        lock(&self.toggles).last().cloned()
    }
}

impl Surface for RecordingSurface {
    fn notify(&self, notification: Notification) {
        lock(&self.notifications).push(notification);
    }

    fn alert(&self, alert: Alert) {
        lock(&self.alerts).push(alert);
    }

    fn render_toggle(&self, display: ToggleDisplay) {
        lock(&self.toggles).push(display);
    }
}

#[derive(Default)]
pub(crate) struct SpyPublisher {
    events: Mutex<Vec<Event>>,
}

impl SpyPublisher {
    pub fn kinds(&self) -> Vec<EventKind> {
        lock(&self.events).iter().map(|e| e.kind.clone()).collect()
    }
}

impl EventPublisher for SpyPublisher {
    fn publish(&self, event: Event) -> impl Future<Output = Result<(), InfinityError>> + Send {
        lock(&self.events).push(event);
        async { Ok(()) }
    }
}

pub(crate) type TestController = AutomationController<
    Arc<FakeDriver>,
    Arc<MemoryStore>,
    Arc<RecordingSurface>,
    Arc<SpyPublisher>,
>;

pub(crate) struct Harness {
    pub controller: TestController,
    pub driver: Arc<FakeDriver>,
    pub store: Arc<MemoryStore>,
    pub surface: Arc<RecordingSurface>,
    pub events: Arc<SpyPublisher>,
}

impl Harness {
    pub fn new() -> Self {
        let driver = Arc::new(FakeDriver::default());
        let store = Arc::new(MemoryStore::default());
        let surface = Arc::new(RecordingSurface::default());
        let events = Arc::new(SpyPublisher::default());
        let controller = AutomationController::new(
            Arc::clone(&driver),
            Arc::clone(&store),
            Arc::clone(&surface),
            Arc::clone(&events),
        );
        Self {
            controller,
            driver,
            store,
            surface,
            events,
        }
    }
}

/// A harness whose loop is running, first timer armed at the default 7 s.
pub(crate) async fn started_harness() -> Harness {
    let harness = Harness::new();
    harness.driver.finish_replies_instantly();
    let outcome = harness.controller.activate(Trigger::User).await;
    assert_eq!(outcome, Activation::Started);
    harness
}
