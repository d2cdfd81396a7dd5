//! `azureFunctions.createFunctionApp`

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};

/// Cloud site names: 2-60 characters, alphanumerics and hyphens, no
/// leading or trailing hyphen.
static APP_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]{0,58}[A-Za-z0-9]$").expect("Invalid regex pattern")
});

pub struct CreateFunctionAppAction;

#[async_trait]
impl Action for CreateFunctionAppAction {
    fn id(&self) -> &'static str {
        ids::CREATE_FUNCTION_APP
    }

    fn description(&self) -> &'static str {
        "Create a function app in the cloud"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let name = ctx
            .interaction
            .prompt_text("Function app name", None)
            .await?;
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "function app name must not be empty".to_string(),
            ));
        }
        if !APP_NAME_REGEX.is_match(&name) {
            return Err(Error::Validation(format!(
                "'{name}' is not a valid function app name (2-60 letters, digits or hyphens)"
            )));
        }

        ctx.interaction
            .display_progress(&format!("Creating function app '{name}'"));
        let app = ctx.cloud.create_function_app(&name).await?;
        ctx.tree.insert_app(app).await;

        ctx.interaction
            .display_success(&format!("Created function app '{name}'"));
        Ok(())
    }
}
