//! # infinity-domain
//!
//! Pure domain model for the infinity reply-automation loop.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **automation state machine** (`AutomationState`, `Phase`)
//!   and its transitions
//! - Define the **configuration** snapshot and the persisted setting keys
//! - Define **triggers** (who asked for a transition) and the notification
//!   suppression rule derived from them
//! - Define the **prompts** submitted to the remote conversation
//! - Define **control messages** exchanged between surfaces and their parsed
//!   `Command` form
//! - Define **events** broadcast to other surfaces and the surface view models
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod command;
pub mod event;
pub mod prompt;
pub mod settings;
pub mod state;
pub mod surface;
pub mod trigger;
