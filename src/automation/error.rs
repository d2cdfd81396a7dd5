use thiserror::Error;

/// Failures raised while driving an action from scripted inputs.
#[derive(Error, Debug)]
pub enum AutomationError {
    /// The action finished while queued inputs were still pending. The
    /// message enumerates the leftover values; downstream retry
    /// classification matches on this text.
    #[error("Not all inputs were used: {}", values.join(", "))]
    UnusedInputs { values: Vec<String> },

    /// The action asked for more input than was queued.
    #[error("scripted inputs exhausted at prompt '{prompt}'")]
    QueueExhausted { prompt: String },

    /// A choice prompt had no entry matching the queued input.
    #[error("no choice matching '{input}' among: {}", choices.join(", "))]
    NoMatchingChoice { input: String, choices: Vec<String> },

    /// The queued input kind cannot answer this prompt kind.
    #[error("input '{input}' cannot answer prompt '{prompt}'")]
    InputMismatch { input: String, prompt: String },

    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("unknown action '{0}'")]
    UnknownAction(String),
}
