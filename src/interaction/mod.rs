//! User interaction handling for actions.
//!
//! Provides abstractions for prompts and message display so that actions can
//! run interactively on a terminal or be driven by scripted inputs.

pub mod display;
pub mod prompts;

pub use display::{ProgressDisplay, ProgressDisplayImpl};
pub use prompts::{UserPrompter, UserPrompterImpl};

use async_trait::async_trait;

use crate::error::Result;

/// Trait for user interaction
#[async_trait]
pub trait UserInteraction: Send + Sync {
    /// Prompt user for yes/no confirmation
    async fn prompt_yes_no(&self, message: &str) -> Result<bool>;

    /// Prompt user for text input
    async fn prompt_text(&self, message: &str, default: Option<&str>) -> Result<String>;

    /// Prompt user to pick one entry from a list; returns the index
    async fn prompt_choice(&self, message: &str, choices: &[String]) -> Result<usize>;

    /// Display information message
    fn display_info(&self, message: &str);

    /// Display warning message
    fn display_warning(&self, message: &str);

    /// Display error message
    fn display_error(&self, message: &str);

    /// Display progress
    fn display_progress(&self, message: &str);

    /// Display success message
    fn display_success(&self, message: &str);
}

/// Default implementation of user interaction
pub struct DefaultUserInteraction {
    prompter: UserPrompterImpl,
    display: ProgressDisplayImpl,
}

impl Default for DefaultUserInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultUserInteraction {
    pub fn new() -> Self {
        Self {
            prompter: UserPrompterImpl::new(),
            display: ProgressDisplayImpl::new(),
        }
    }
}

#[async_trait]
impl UserInteraction for DefaultUserInteraction {
    async fn prompt_yes_no(&self, message: &str) -> Result<bool> {
        self.prompter.prompt_yes_no(message).await
    }

    async fn prompt_text(&self, message: &str, default: Option<&str>) -> Result<String> {
        self.prompter.prompt_text(message, default).await
    }

    async fn prompt_choice(&self, message: &str, choices: &[String]) -> Result<usize> {
        self.prompter.prompt_choice(message, choices).await
    }

    fn display_info(&self, message: &str) {
        self.display.info(message);
    }

    fn display_warning(&self, message: &str) {
        self.display.warning(message);
    }

    fn display_error(&self, message: &str) {
        self.display.error(message);
    }

    fn display_progress(&self, message: &str) {
        self.display.progress(message);
    }

    fn display_success(&self, message: &str) {
        self.display.success(message);
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    pub struct MockUserInteraction {
        pub yes_no_responses: Mutex<Vec<bool>>,
        pub text_responses: Mutex<Vec<String>>,
        pub choice_responses: Mutex<Vec<usize>>,
        pub messages: Mutex<Vec<String>>,
    }

    impl Default for MockUserInteraction {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUserInteraction {
        pub fn new() -> Self {
            Self {
                yes_no_responses: Mutex::new(Vec::new()),
                text_responses: Mutex::new(Vec::new()),
                choice_responses: Mutex::new(Vec::new()),
                messages: Mutex::new(Vec::new()),
            }
        }

        pub fn add_yes_no_response(&self, response: bool) {
            self.yes_no_responses.lock().unwrap().insert(0, response);
        }

        pub fn add_text_response(&self, response: &str) {
            self.text_responses
                .lock()
                .unwrap()
                .insert(0, response.to_string());
        }

        pub fn add_choice_response(&self, index: usize) {
            self.choice_responses.lock().unwrap().insert(0, index);
        }

        pub fn get_messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl UserInteraction for MockUserInteraction {
        async fn prompt_yes_no(&self, message: &str) -> Result<bool> {
            self.messages
                .lock()
                .unwrap()
                .push(format!("CONFIRM: {message}"));
            self.yes_no_responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| crate::error::Error::UserCancelled)
        }

        async fn prompt_text(&self, message: &str, _default: Option<&str>) -> Result<String> {
            self.messages
                .lock()
                .unwrap()
                .push(format!("TEXT: {message}"));
            self.text_responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| crate::error::Error::UserCancelled)
        }

        async fn prompt_choice(&self, message: &str, _choices: &[String]) -> Result<usize> {
            self.messages
                .lock()
                .unwrap()
                .push(format!("CHOICE: {message}"));
            self.choice_responses
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| crate::error::Error::UserCancelled)
        }

        fn display_info(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("INFO: {message}"));
        }

        fn display_warning(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("WARN: {message}"));
        }

        fn display_error(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("ERROR: {message}"));
        }

        fn display_progress(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("PROGRESS: {message}"));
        }

        fn display_success(&self, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push(format!("SUCCESS: {message}"));
        }
    }
}
