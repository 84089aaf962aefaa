//! Page driver port — the automation primitives of the remote conversation UI.
//!
//! The driver hides how the page is observed and manipulated. The `wait_*`
//! methods suspend until a condition on the remote page becomes true; none of
//! them fail. An idle wait that can no longer be satisfied (the page went
//! away, the driver shut down) resolves to [`IdleOutcome::Abandoned`] so the
//! controller's post-suspension re-validation stays a plain state check.

use std::future::Future;
use std::sync::Arc;

use infinity_domain::error::InfinityError;

/// How an idle wait ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleOutcome {
    /// The reply finished and the page accepts input.
    Idle,
    /// The wait was given up before the page reported idle.
    Abandoned,
}

/// Primitives the controller needs from the conversational page.
pub trait PageDriver {
    /// Suspend until the page has finished loading.
    fn wait_page_ready(&self) -> impl Future<Output = ()> + Send;

    /// Suspend until the sidebar (where the toggle lives) is rendered.
    fn wait_sidebar_ready(&self) -> impl Future<Output = ()> + Send;

    /// Suspend until the current reply has finished streaming.
    fn wait_reply_idle(&self) -> impl Future<Output = IdleOutcome> + Send;

    /// Type `text` into the composer and send it.
    fn submit(&self, text: &str) -> impl Future<Output = Result<(), InfinityError>> + Send;

    /// Stop any in-flight generation. A no-op when idle.
    fn stop(&self) -> impl Future<Output = ()> + Send;

    /// Scroll the conversation to its newest message.
    ///
    /// # Errors
    ///
    /// Returns [`InfinityError::ElementMissing`] when the scroll target is absent.
    fn scroll_to_latest(&self) -> Result<(), InfinityError>;

    /// Open a fresh conversation.
    ///
    /// # Errors
    ///
    /// Returns [`InfinityError::ElementMissing`] when the "new chat" control is
    /// not on the page (e.g. mid-navigation).
    fn start_new_conversation(&self) -> impl Future<Output = Result<(), InfinityError>> + Send;

    fn is_dark_theme(&self) -> bool;

    fn is_mobile_viewport(&self) -> bool;
}

impl<T: PageDriver + Send + Sync> PageDriver for Arc<T> {
    fn wait_page_ready(&self) -> impl Future<Output = ()> + Send {
        (**self).wait_page_ready()
    }

    fn wait_sidebar_ready(&self) -> impl Future<Output = ()> + Send {
        (**self).wait_sidebar_ready()
    }

    fn wait_reply_idle(&self) -> impl Future<Output = IdleOutcome> + Send {
        (**self).wait_reply_idle()
    }

    fn submit(&self, text: &str) -> impl Future<Output = Result<(), InfinityError>> + Send {
        (**self).submit(text)
    }

    fn stop(&self) -> impl Future<Output = ()> + Send {
        (**self).stop()
    }

    fn scroll_to_latest(&self) -> Result<(), InfinityError> {
        (**self).scroll_to_latest()
    }

    fn start_new_conversation(&self) -> impl Future<Output = Result<(), InfinityError>> + Send {
        (**self).start_new_conversation()
    }

    fn is_dark_theme(&self) -> bool {
        (**self).is_dark_theme()
    }

    fn is_mobile_viewport(&self) -> bool {
        (**self).is_mobile_viewport()
    }
}
