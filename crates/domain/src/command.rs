//! Control messages exchanged between surfaces.
//!
//! A [`ControlMessage`] is the loosely-typed wire shape
//! (`{ "action": …, "args": …, …extra fields }`). [`Command::parse`] turns
//! it into the typed form the bridge dispatches on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ArgumentError;
use crate::surface::{Alert, Notification};

/// Wire shape of an inbound control message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlMessage {
    pub action: String,
    /// Call arguments: absent, a single bare value, or an array to spread.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
    /// Extra named fields (`msg`, `position`, `title`, `btns`, …).
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ControlMessage {
    #[must_use]
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            args: None,
            fields: Map::new(),
        }
    }

    #[must_use]
    pub fn with_args(mut self, args: Value) -> Self {
        self.args = Some(args);
        self
    }

    #[must_use]
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// Arguments normalized to a list: arrays are spread, a bare value
    /// becomes a single argument, and absent (or `null`) means none.
    #[must_use]
    pub fn arguments(&self) -> Vec<Value> {
        match &self.args {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(items)) => items.clone(),
            Some(other) => vec![other.clone()],
        }
    }

    /// A named field, falling back to the positional argument at `index`.
    fn field_or_arg(&self, name: &str, index: usize) -> Option<Value> {
        self.fields
            .get(name)
            .cloned()
            .or_else(|| self.arguments().into_iter().nth(index))
    }
}

/// Typed form of a control message.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Show a toast on this surface.
    Notify(Notification),
    /// Show a modal on this surface.
    Alert(Alert),
    /// Re-render the toggle from the current settings and state.
    RefreshToggleDisplay,
    /// Act as if the page toggle had been clicked.
    SimulateToggleClick,
    /// Stop automation regardless of the toggle.
    ForceDeactivate,
    /// Any other action, dispatched through the handler table.
    Call { name: String, args: Vec<Value> },
}

impl Command {
    /// Interpret a control message.
    ///
    /// Fixed commands are matched by name (including their legacy aliases);
    /// every other action becomes [`Command::Call`].
    ///
    /// # Errors
    ///
    /// Returns an [`ArgumentError`] for an empty action or when a fixed
    /// command's fields have the wrong type.
    pub fn parse(message: &ControlMessage) -> Result<Self, ArgumentError> {
        let action = message.action.trim();
        let invalid = |reason| ArgumentError {
            action: action.to_string(),
            reason,
        };
        match action {
            "" => Err(invalid("action must not be empty")),
            "notify" => {
                let text = message
                    .field_or_arg("msg", 0)
                    .and_then(|v| v.as_str().map(str::to_string))
                    .ok_or_else(|| invalid("expected a string `msg`"))?;
                let position = optional_text(message.field_or_arg("position", 1))
                    .map_err(|()| invalid("expected a string `position`"))?;
                Ok(Self::Notify(Notification::branded(text).at(position)))
            }
            "alert" => {
                let title = optional_text(message.field_or_arg("title", 0))
                    .map_err(|()| invalid("expected a string `title`"))?
                    .unwrap_or_default();
                let text = optional_text(message.field_or_arg("msg", 1))
                    .map_err(|()| invalid("expected a string `msg`"))?
                    .unwrap_or_default();
                let buttons = buttons(message.field_or_arg("btns", 2))
                    .map_err(|()| invalid("expected `btns` as a string or list of strings"))?;
                Ok(Self::Alert(Alert::branded(&title, text, buttons)))
            }
            "updateToggleHTML" | "refreshToggleDisplay" => Ok(Self::RefreshToggleDisplay),
            "clickToggle" | "simulateToggleClick" => Ok(Self::SimulateToggleClick),
            "stopInfinityMode" | "forceDeactivate" => Ok(Self::ForceDeactivate),
            name => Ok(Self::Call {
                name: name.to_string(),
                args: message.arguments(),
            }),
        }
    }
}

fn optional_text(value: Option<Value>) -> Result<Option<String>, ()> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(()),
    }
}

fn buttons(value: Option<Value>) -> Result<Vec<String>, ()> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(label)) if label.is_empty() => Ok(Vec::new()),
        Some(Value::String(label)) => Ok(vec![label]),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(label) => Ok(label),
                _ => Err(()),
            })
            .collect(),
        Some(_) => Err(()),
    }
}
