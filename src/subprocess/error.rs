use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),

    #[error("Process timed out after {0:?}")]
    Timeout(Duration),

    #[error("'{command}' exited with code {code}: {stderr}")]
    ExitCode {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected output from '{command}': {message}")]
    UnexpectedOutput { command: String, message: String },

    #[error("Mock expectation not met: {0}")]
    MockExpectationNotMet(String),
}

impl ProcessError {
    /// Build the exit-code error for a failed tool invocation, carrying the
    /// trimmed stderr so callers can surface it verbatim.
    pub fn from_failure(command: &str, code: Option<i32>, stderr: &str) -> Self {
        ProcessError::ExitCode {
            command: command.to_string(),
            code: code.unwrap_or(1),
            stderr: stderr.trim().to_string(),
        }
    }
}
