//! Scripted execution of actions with queued inputs.

use std::sync::Arc;

use async_trait::async_trait;

use super::inputs::{InputQueue, ScriptedInput};
use super::scripted::ScriptedInteraction;
use crate::actions::{ActionContext, ActionRegistry};
use crate::error::Result;

/// Runs a single action with a scripted input queue standing in for the
/// interactive prompts. The verification flow drives deployments through
/// this seam so tests can substitute their own invoker.
#[async_trait]
pub trait ActionInvoker: Send + Sync {
    async fn run_with_inputs(&self, action_id: &str, inputs: Vec<ScriptedInput>) -> Result<()>;
}

pub struct ActionDriver {
    registry: Arc<ActionRegistry>,
    prototype: ActionContext,
}

impl ActionDriver {
    pub fn new(registry: Arc<ActionRegistry>, prototype: ActionContext) -> Self {
        Self {
            registry,
            prototype,
        }
    }
}

#[async_trait]
impl ActionInvoker for ActionDriver {
    async fn run_with_inputs(&self, action_id: &str, inputs: Vec<ScriptedInput>) -> Result<()> {
        let queue = Arc::new(InputQueue::new(inputs));
        let interaction = Arc::new(ScriptedInteraction::new(Arc::clone(&queue)));
        let ctx = self.prototype.with_interaction(interaction);

        self.registry.execute(action_id, &ctx).await?;

        // An action that finishes without consuming every queued input has
        // answered fewer prompts than the script expected. Surfacing that as
        // an error is what lets callers detect a short-circuited run.
        match queue.unused_inputs_error() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::handlers::test_support::{app, entry, TestHarness};
    use crate::actions::ids;
    use crate::automation::AutomationError;
    use crate::error::Error;

    fn driver_for(harness: &TestHarness) -> ActionDriver {
        ActionDriver::new(
            Arc::new(ActionRegistry::with_defaults()),
            harness.ctx.clone(),
        )
    }

    #[tokio::test]
    async fn scripted_copy_url_lands_in_mailbox() {
        let harness = TestHarness::with_apps(
            None,
            vec![(app("appX"), vec![entry("appX", "funcAB12")])],
        );
        let driver = driver_for(&harness);

        driver
            .run_with_inputs(
                ids::COPY_FUNCTION_URL,
                vec![
                    ScriptedInput::contains("appX"),
                    ScriptedInput::contains("funcAB12"),
                ],
            )
            .await
            .unwrap();

        assert_eq!(
            harness.ctx.mailbox.read().as_deref(),
            Some("https://appX.azurewebsites.net/api/funcAB12")
        );
    }

    #[tokio::test]
    async fn early_finish_reports_unused_inputs() {
        // The app exists but has no functions yet, so copyFunctionUrl warns
        // and finishes after the first prompt, leaving the second input queued.
        let harness = TestHarness::with_apps(None, vec![(app("appX"), vec![])]);
        let driver = driver_for(&harness);

        let err = driver
            .run_with_inputs(
                ids::COPY_FUNCTION_URL,
                vec![
                    ScriptedInput::contains("appX"),
                    ScriptedInput::contains("funcAB12"),
                ],
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Not all inputs were used: funcAB12");
        assert_eq!(harness.ctx.mailbox.read(), None);
    }

    #[tokio::test]
    async fn unknown_action_is_rejected() {
        let harness = TestHarness::new(None);
        let driver = driver_for(&harness);

        let err = driver
            .run_with_inputs("azureFunctions.doesNotExist", vec![])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Automation(AutomationError::UnknownAction(_))
        ));
    }

    #[tokio::test]
    async fn action_error_wins_over_unused_inputs() {
        // No apps exist, so the action fails before touching the queue.
        let harness = TestHarness::new(None);
        let driver = driver_for(&harness);

        let err = driver
            .run_with_inputs(
                ids::COPY_FUNCTION_URL,
                vec![ScriptedInput::contains("appX")],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
