//! Simulated conversation page.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::AbortHandle;

use infinity_app::ports::{IdleOutcome, PageDriver};
use infinity_domain::error::{ElementMissingError, InfinityError};

#[derive(Default)]
struct Conversation {
    messages: Vec<String>,
    started: usize,
    scrolls: usize,
    generation: Option<AbortHandle>,
}

/// A page whose replies take `reply_duration` to finish.
///
/// Must be used from inside a tokio runtime: each submission spawns the
/// task that ends its reply.
pub struct VirtualPage {
    reply_duration: Duration,
    dark_theme: bool,
    mobile_viewport: bool,
    new_chat_present: AtomicBool,
    idle: Arc<watch::Sender<bool>>,
    conversation: Mutex<Conversation>,
}

impl VirtualPage {
    #[must_use]
    pub fn new(reply_duration: Duration) -> Self {
        Self {
            reply_duration,
            dark_theme: false,
            mobile_viewport: false,
            new_chat_present: AtomicBool::new(true),
            idle: Arc::new(watch::Sender::new(true)),
            conversation: Mutex::new(Conversation::default()),
        }
    }

    #[must_use]
    pub fn with_dark_theme(mut self, dark_theme: bool) -> Self {
        self.dark_theme = dark_theme;
        self
    }

    #[must_use]
    pub fn with_mobile_viewport(mut self, mobile_viewport: bool) -> Self {
        self.mobile_viewport = mobile_viewport;
        self
    }

    /// Simulate the "new chat" button appearing or disappearing.
    pub fn set_new_chat_present(&self, present: bool) {
        self.new_chat_present.store(present, Ordering::SeqCst);
    }

    /// Messages submitted to the current conversation.
    #[must_use]
    pub fn transcript(&self) -> Vec<String> {
        self.lock().messages.clone()
    }

    /// Conversations opened through [`PageDriver::start_new_conversation`].
    #[must_use]
    pub fn conversation_count(&self) -> usize {
        self.lock().started
    }

    #[must_use]
    pub fn scroll_count(&self) -> usize {
        self.lock().scrolls
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        !*self.idle.borrow()
    }

    fn lock(&self) -> MutexGuard<'_, Conversation> {
        self.conversation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel_generation(&self, conversation: &mut Conversation) {
        if let Some(handle) = conversation.generation.take() {
            handle.abort();
        }
        self.idle.send_replace(true);
    }
}

impl PageDriver for VirtualPage {
    fn wait_page_ready(&self) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn wait_sidebar_ready(&self) -> impl Future<Output = ()> + Send {
        async {}
    }

    fn wait_reply_idle(&self) -> impl Future<Output = IdleOutcome> + Send {
        let mut idle = self.idle.subscribe();
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
        let mut conversation = self.lock();
        self.cancel_generation(&mut conversation);
        conversation.messages.push(text.to_string());
        tracing::info!(text, "virtual page received prompt");

        self.idle.send_replace(false);
        let idle = Arc::clone(&self.idle);
        let reply_duration = self.reply_duration;
        let task = tokio::spawn(async move {
            tokio::time::sleep(reply_duration).await;
            idle.send_replace(true);
            tracing::debug!("virtual reply finished");
        });
        conversation.generation = Some(task.abort_handle());
        async { Ok(()) }
    }

    fn stop(&self) -> impl Future<Output = ()> + Send {
        let mut conversation = self.lock();
        self.cancel_generation(&mut conversation);
        async {}
    }

    fn scroll_to_latest(&self) -> Result<(), InfinityError> {
        let mut conversation = self.lock();
        if conversation.messages.is_empty() {
            return Err(ElementMissingError {
                element: "latest message",
            }
            .into());
        }
        conversation.scrolls += 1;
        Ok(())
    }

    fn start_new_conversation(&self) -> impl Future<Output = Result<(), InfinityError>> + Send {
        let result = if self.new_chat_present.load(Ordering::SeqCst) {
            let mut conversation = self.lock();
            self.cancel_generation(&mut conversation);
            conversation.messages.clear();
            conversation.started += 1;
            Ok(())
        } else {
            Err(ElementMissingError {
                element: "new chat button",
            }
            .into())
        };
        async move { result }
    }

    fn is_dark_theme(&self) -> bool {
        self.dark_theme
    }

    fn is_mobile_viewport(&self) -> bool {
        self.mobile_viewport
    }
}
