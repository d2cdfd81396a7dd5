//! Scripted, non-interactive execution of actions.
//!
//! A scripted run answers every prompt from a queue of [`ScriptedInput`]
//! values instead of a live user. The queue is strict in both directions:
//! running out of inputs mid-prompt is an error, and finishing an action
//! with inputs still queued is an error too. That second check is what the
//! verification flow keys off when a deployment finishes before the cloud
//! has caught up.

pub mod driver;
pub mod error;
pub mod inputs;
pub mod mailbox;
pub mod scripted;

pub use driver::{ActionDriver, ActionInvoker};
pub use error::AutomationError;
pub use inputs::{InputQueue, ScriptedInput};
pub use mailbox::UrlMailbox;
pub use scripted::ScriptedInteraction;
