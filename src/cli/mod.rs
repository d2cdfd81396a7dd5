//! Command-line surface: argument structures, prompt-queue backed
//! interaction, and the command router.

pub mod args;
pub mod interaction;
pub mod router;

pub use args::{Cli, Commands};
pub use interaction::QueueBackedInteraction;
pub use router::execute_command;
