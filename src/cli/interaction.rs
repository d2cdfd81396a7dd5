//! Interaction that answers prompts from command-line arguments first and
//! falls back to the interactive prompter once they run out.

use std::sync::Arc;

use async_trait::async_trait;

use crate::automation::{AutomationError, InputQueue};
use crate::error::Result;
use crate::interaction::UserInteraction;

pub struct QueueBackedInteraction {
    queue: Arc<InputQueue>,
    fallback: Arc<dyn UserInteraction>,
}

impl QueueBackedInteraction {
    pub fn new(queue: Arc<InputQueue>, fallback: Arc<dyn UserInteraction>) -> Self {
        Self { queue, fallback }
    }

    /// Error if any queued argument was never consumed by a prompt.
    pub fn unused_inputs_error(&self) -> Option<AutomationError> {
        self.queue.unused_inputs_error()
    }
}

#[async_trait]
impl UserInteraction for QueueBackedInteraction {
    async fn prompt_yes_no(&self, message: &str) -> Result<bool> {
        match self.queue.try_next() {
            Some(input) => input.as_yes_no().ok_or_else(|| {
                AutomationError::InputMismatch {
                    input: input.to_string(),
                    prompt: message.to_string(),
                }
                .into()
            }),
            None => self.fallback.prompt_yes_no(message).await,
        }
    }

    async fn prompt_text(&self, message: &str, default: Option<&str>) -> Result<String> {
        match self.queue.try_next() {
            Some(input) => match input.answer_text() {
                Some(text) => Ok(text.to_string()),
                None => Err(AutomationError::InputMismatch {
                    input: input.to_string(),
                    prompt: message.to_string(),
                }
                .into()),
            },
            None => self.fallback.prompt_text(message, default).await,
        }
    }

    async fn prompt_choice(&self, message: &str, choices: &[String]) -> Result<usize> {
        match self.queue.try_next() {
            Some(input) => {
                for (index, label) in choices.iter().enumerate() {
                    if input.matches_label(label)? {
                        return Ok(index);
                    }
                }
                Err(AutomationError::NoMatchingChoice {
                    input: input.to_string(),
                    choices: choices.to_vec(),
                }
                .into())
            }
            None => self.fallback.prompt_choice(message, choices).await,
        }
    }

    fn display_info(&self, message: &str) {
        self.fallback.display_info(message);
    }

    fn display_warning(&self, message: &str) {
        self.fallback.display_warning(message);
    }

    fn display_error(&self, message: &str) {
        self.fallback.display_error(message);
    }

    fn display_progress(&self, message: &str) {
        self.fallback.display_progress(message);
    }

    fn display_success(&self, message: &str) {
        self.fallback.display_success(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::ScriptedInput;
    use crate::interaction::mocks::MockUserInteraction;

    fn backed(
        inputs: Vec<ScriptedInput>,
        fallback: Arc<MockUserInteraction>,
    ) -> QueueBackedInteraction {
        QueueBackedInteraction::new(Arc::new(InputQueue::new(inputs)), fallback)
    }

    #[tokio::test]
    async fn queued_arguments_answer_before_the_prompter() {
        let fallback = Arc::new(MockUserInteraction::new());
        let interaction = backed(vec![ScriptedInput::literal("myproj")], fallback.clone());

        let name = interaction.prompt_text("Project folder name", None).await.unwrap();
        assert_eq!(name, "myproj");
        assert!(fallback.get_messages().is_empty());
    }

    #[tokio::test]
    async fn drained_queue_falls_back_to_the_prompter() {
        let fallback = Arc::new(MockUserInteraction::new());
        fallback.add_text_response("fromPrompt");
        let interaction = backed(vec![ScriptedInput::literal("fromArgs")], fallback);

        let first = interaction.prompt_text("Project folder name", None).await.unwrap();
        let second = interaction.prompt_text("Function name", None).await.unwrap();
        assert_eq!(first, "fromArgs");
        assert_eq!(second, "fromPrompt");
    }

    #[tokio::test]
    async fn queued_argument_selects_a_choice() {
        let fallback = Arc::new(MockUserInteraction::new());
        let interaction = backed(vec![ScriptedInput::contains("appY")], fallback);

        let choices = vec!["appX".to_string(), "appY".to_string()];
        let index = interaction
            .prompt_choice("Select a function app", &choices)
            .await
            .unwrap();
        assert_eq!(index, 1);
    }

    #[tokio::test]
    async fn leftover_arguments_are_reported() {
        let fallback = Arc::new(MockUserInteraction::new());
        let interaction = backed(vec![ScriptedInput::literal("spare")], fallback);

        let err = interaction.unused_inputs_error().unwrap();
        assert_eq!(err.to_string(), "Not all inputs were used: spare");
    }
}
