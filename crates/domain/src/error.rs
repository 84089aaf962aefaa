//! Common error types used across the workspace.
//!
//! Each failure family has its own typed error; [`InfinityError`] wraps them
//! through `#[from]` so ports and services can propagate with `?`.

/// Base error type shared by every layer.
#[derive(Debug, thiserror::Error)]
pub enum InfinityError {
    /// An expected element of the remote page is absent (e.g. mid-navigation).
    #[error("page element missing")]
    ElementMissing(#[from] ElementMissingError),

    /// A control message named an action nobody handles.
    #[error("unknown command")]
    UnknownCommand(#[from] UnknownCommandError),

    /// A control message carried arguments of the wrong shape.
    #[error("invalid command arguments")]
    InvalidArguments(#[from] ArgumentError),

    /// A configuration value broke a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The settings store (or another persistence adapter) failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Transient UI absence reported by a page driver.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page element {element:?} not found")]
pub struct ElementMissingError {
    /// Human-readable name of the missing element (e.g. `"new chat button"`).
    pub element: &'static str,
}

/// No handler is registered under the requested action name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no handler registered for action {action:?}")]
pub struct UnknownCommandError {
    pub action: String,
}

/// Arguments of a control message could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("action {action:?}: {reason}")]
pub struct ArgumentError {
    pub action: String,
    pub reason: &'static str,
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The reply interval must be strictly positive.
    #[error("reply interval must be greater than zero")]
    NonPositiveInterval,

    /// The persisted key name is not one of the known settings.
    #[error("unknown setting key {0:?}")]
    UnknownSettingKey(String),

    /// A stored value has the wrong JSON type for its key.
    #[error("setting {key} expects {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}
