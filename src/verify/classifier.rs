//! Failure classification and attempt-state transitions for the
//! verification loop.
//!
//! A failed resolution retries only when the error looks like the
//! discoverability race: the scripted run finished with inputs left over
//! and the leftover values mention the function being resolved. Anything
//! else is a genuine failure and must not be masked by the retry loop.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    Retry,
    Abort,
}

/// Decide whether a failed attempt is the not-yet-listed race.
///
/// The signal is string matching against the driver's unused-inputs error
/// text. A typed "not listed yet" error from the automation layer would be
/// a sturdier contract; until then the message shape is load-bearing.
pub fn classify(message: &str, function_name: &str) -> RetryDecision {
    if message.contains("inputs") && message.contains(function_name) {
        RetryDecision::Retry
    } else {
        RetryDecision::Abort
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptOutcome {
    Success,
    RetryableFailure,
    NonRetryableFailure,
}

/// Where the verification loop stands. Attempt ordinals are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Attempting(u32),
    Succeeded,
    Aborted,
}

impl FlowState {
    /// Transition after attempt `k` finished with `outcome`. A retryable
    /// failure moves to attempt `k + 1` unless the budget of
    /// `max_attempts` is spent, in which case the flow aborts.
    pub fn advance(self, outcome: AttemptOutcome, max_attempts: u32) -> FlowState {
        match (self, outcome) {
            (FlowState::Attempting(_), AttemptOutcome::Success) => FlowState::Succeeded,
            (FlowState::Attempting(k), AttemptOutcome::RetryableFailure) if k < max_attempts => {
                FlowState::Attempting(k + 1)
            }
            (FlowState::Attempting(_), AttemptOutcome::RetryableFailure) => FlowState::Aborted,
            (FlowState::Attempting(_), AttemptOutcome::NonRetryableFailure) => FlowState::Aborted,
            (terminal, _) => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, FlowState::Attempting(_))
    }
}
