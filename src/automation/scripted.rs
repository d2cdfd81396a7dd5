//! `UserInteraction` implementation answering prompts from a scripted queue.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::error::AutomationError;
use super::inputs::InputQueue;
use crate::error::Result;
use crate::interaction::UserInteraction;

pub struct ScriptedInteraction {
    queue: Arc<InputQueue>,
    messages: Mutex<Vec<String>>,
}

impl ScriptedInteraction {
    pub fn new(queue: Arc<InputQueue>) -> Self {
        Self {
            queue,
            messages: Mutex::new(Vec::new()),
        }
    }

    /// Display calls recorded during the run, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn record(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

#[async_trait]
impl UserInteraction for ScriptedInteraction {
    async fn prompt_yes_no(&self, message: &str) -> Result<bool> {
        let input = self.queue.next(message)?;
        match input.as_yes_no() {
            Some(answer) => Ok(answer),
            None => Err(AutomationError::InputMismatch {
                input: input.to_string(),
                prompt: message.to_string(),
            }
            .into()),
        }
    }

    async fn prompt_text(&self, message: &str, _default: Option<&str>) -> Result<String> {
        let input = self.queue.next(message)?;
        match input.answer_text() {
            Some(text) => Ok(text.to_string()),
            None => Err(AutomationError::InputMismatch {
                input: input.to_string(),
                prompt: message.to_string(),
            }
            .into()),
        }
    }

    async fn prompt_choice(&self, message: &str, choices: &[String]) -> Result<usize> {
        let input = self.queue.next(message)?;
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

    fn display_info(&self, message: &str) {
        tracing::info!("{}", message);
        self.record(format!("INFO: {message}"));
    }

    fn display_warning(&self, message: &str) {
        tracing::warn!("{}", message);
        self.record(format!("WARN: {message}"));
    }

    fn display_error(&self, message: &str) {
        tracing::error!("{}", message);
        self.record(format!("ERROR: {message}"));
    }

    fn display_progress(&self, message: &str) {
        tracing::info!("{}", message);
        self.record(format!("PROGRESS: {message}"));
    }

    fn display_success(&self, message: &str) {
        tracing::info!("{}", message);
        self.record(format!("SUCCESS: {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automation::ScriptedInput;
    use crate::error::Error;

    fn scripted(inputs: Vec<ScriptedInput>) -> ScriptedInteraction {
        ScriptedInteraction::new(Arc::new(InputQueue::new(inputs)))
    }

    #[tokio::test]
    async fn text_prompt_takes_literal() {
        let interaction = scripted(vec![ScriptedInput::literal("myFunc")]);
        let answer = interaction
            .prompt_text("Function name", None)
            .await
            .unwrap();
        assert_eq!(answer, "myFunc");
    }

    #[tokio::test]
    async fn choice_prompt_selects_by_contains() {
        let interaction = scripted(vec![ScriptedInput::contains("Java")]);
        let choices = vec!["C#".to_string(), "JavaScript".to_string()];
        let index = interaction
            .prompt_choice("Select a language", &choices)
            .await
            .unwrap();
        assert_eq!(index, 1);
    }

    #[tokio::test]
    async fn choice_prompt_selects_by_pattern() {
        let interaction = scripted(vec![ScriptedInput::pattern("^Py")]);
        let choices = vec!["JavaScript".to_string(), "Python".to_string()];
        let index = interaction
            .prompt_choice("Select a language", &choices)
            .await
            .unwrap();
        assert_eq!(index, 1);
    }

    #[tokio::test]
    async fn unmatched_choice_is_an_error() {
        let interaction = scripted(vec![ScriptedInput::literal("Go")]);
        let choices = vec!["C#".to_string(), "Python".to_string()];
        let err = interaction
            .prompt_choice("Select a language", &choices)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Automation(AutomationError::NoMatchingChoice { .. })
        ));
    }

    #[tokio::test]
    async fn yes_no_parses_literals() {
        let interaction = scripted(vec![
            ScriptedInput::literal("yes"),
            ScriptedInput::literal("n"),
        ]);
        assert!(interaction.prompt_yes_no("Create project?").await.unwrap());
        assert!(!interaction.prompt_yes_no("Create project?").await.unwrap());
    }

    #[tokio::test]
    async fn pattern_cannot_answer_text_prompt() {
        let interaction = scripted(vec![ScriptedInput::pattern(".*")]);
        let err = interaction
            .prompt_text("Function name", None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Automation(AutomationError::InputMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn exhausted_queue_surfaces_prompt_name() {
        let interaction = scripted(vec![]);
        let err = interaction
            .prompt_text("Function name", None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Function name"));
    }

    #[tokio::test]
    async fn displays_are_recorded() {
        let interaction = scripted(vec![]);
        interaction.display_warning("no functions found");
        interaction.display_info("done");
        assert_eq!(
            interaction.messages(),
            vec![
                "WARN: no functions found".to_string(),
                "INFO: done".to_string()
            ]
        );
    }
}
