//! `azureFunctions.deploy`

use async_trait::async_trait;

use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};
use crate::project::has_project_files;

pub struct DeployAction;

#[async_trait]
impl Action for DeployAction {
    fn id(&self) -> &'static str {
        ids::DEPLOY
    }

    fn description(&self) -> &'static str {
        "Publish the workspace project to a function app"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let workspace = ctx.require_workspace()?.to_path_buf();
        if !has_project_files(&workspace) {
            return Err(Error::NotFound(
                "no function project in the workspace".to_string(),
            ));
        }

        let app = ctx
            .select_app("Select the function app to deploy to")
            .await?;

        ctx.interaction
            .display_progress(&format!("Deploying to '{app}'"));
        let output = ctx.func_tools.publish(&workspace, &app).await?;
        tracing::debug!("Publish output: {}", output.trim_end());

        ctx.interaction
            .display_success(&format!("Deployed to '{app}'"));
        Ok(())
    }
}
