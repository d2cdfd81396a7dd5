//! `azureFunctions.createFunction`

use async_trait::async_trait;

use super::create_project::prompt_language;
use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};
use crate::project::has_project_files;
use crate::scaffold;

/// Template quick-pick labels and the identifiers the core tools expect.
const TEMPLATES: &[(&str, &str)] = &[
    ("HTTP trigger", "HttpTrigger"),
    ("Timer trigger", "TimerTrigger"),
    ("Queue trigger", "QueueTrigger"),
    ("Blob trigger", "BlobTrigger"),
];

pub struct CreateFunctionAction;

#[async_trait]
impl Action for CreateFunctionAction {
    fn id(&self) -> &'static str {
        ids::CREATE_FUNCTION
    }

    fn description(&self) -> &'static str {
        "Create a function from a template in the workspace project"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let workspace = ctx.require_workspace()?.to_path_buf();

        if !has_project_files(&workspace) {
            let initialize = ctx
                .interaction
                .prompt_yes_no("The workspace has no function project. Initialize one now?")
                .await?;
            if !initialize {
                tracing::debug!("Declined project initialization, nothing to do");
                return Ok(());
            }
            let language = prompt_language(ctx).await?;
            ctx.func_tools.init_project(&workspace, language).await?;
            scaffold::write_debug_scaffold(&workspace, &ctx.settings.tools.func_program)?;
        }

        let labels: Vec<String> = TEMPLATES
            .iter()
            .map(|(label, _)| label.to_string())
            .collect();
        let index = ctx
            .interaction
            .prompt_choice("Select a template for your function", &labels)
            .await?;
        let template = TEMPLATES[index].1;

        let name = ctx
            .interaction
            .prompt_text("Function name", Some("HttpTrigger1"))
            .await?;
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "function name must not be empty".to_string(),
            ));
        }

        ctx.func_tools
            .create_function(&workspace, template, &name)
            .await?;
        ctx.interaction
            .display_success(&format!("Created function '{name}'"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::handlers::test_support::TestHarness;
    use crate::project::{HOST_FILE, LOCAL_SETTINGS_FILE};
    use tempfile::TempDir;

    fn init_project_files(dir: &TempDir) {
        std::fs::write(dir.path().join(HOST_FILE), "{}").unwrap();
        std::fs::write(dir.path().join(LOCAL_SETTINGS_FILE), "{}").unwrap();
    }

    #[tokio::test]
    async fn creates_function_from_template() {
        let dir = TempDir::new().unwrap();
        init_project_files(&dir);

        let harness = TestHarness::new(Some(dir.path().to_path_buf()));
        harness.interaction.add_choice_response(0); // HTTP trigger
        harness.interaction.add_text_response("myFunc");

        CreateFunctionAction.run(&harness.ctx).await.unwrap();

        let calls = harness.func_tools.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("new HttpTrigger myFunc"));
    }

    #[tokio::test]
    async fn offers_to_initialize_missing_project() {
        let dir = TempDir::new().unwrap();

        let harness = TestHarness::new(Some(dir.path().to_path_buf()));
        harness.interaction.add_yes_no_response(true);
        harness.interaction.add_choice_response(3); // Python
        harness.interaction.add_choice_response(1); // Timer trigger
        harness.interaction.add_text_response("tick");

        CreateFunctionAction.run(&harness.ctx).await.unwrap();

        let calls = harness.func_tools.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("init Python"));
        assert!(calls[1].starts_with("new TimerTrigger tick"));
        assert!(dir.path().join(".vscode").join("tasks.json").is_file());
    }

    #[tokio::test]
    async fn declining_initialization_cancels_silently() {
        let dir = TempDir::new().unwrap();

        let harness = TestHarness::new(Some(dir.path().to_path_buf()));
        harness.interaction.add_yes_no_response(false);

        CreateFunctionAction.run(&harness.ctx).await.unwrap();
        assert!(harness.func_tools.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn empty_function_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        init_project_files(&dir);

        let harness = TestHarness::new(Some(dir.path().to_path_buf()));
        harness.interaction.add_choice_response(0);
        harness.interaction.add_text_response("");

        let err = CreateFunctionAction.run(&harness.ctx).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
