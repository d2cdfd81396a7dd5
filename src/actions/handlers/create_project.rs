//! `azureFunctions.createNewProject`

use async_trait::async_trait;

use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};
use crate::project::ProjectLanguage;
use crate::scaffold;

pub struct CreateNewProjectAction;

/// Language quick pick shared with the create-function fallback.
pub(super) async fn prompt_language(ctx: &ActionContext) -> Result<ProjectLanguage> {
    let labels: Vec<String> = ProjectLanguage::all()
        .iter()
        .map(|l| l.label().to_string())
        .collect();
    let index = ctx
        .interaction
        .prompt_choice("Select a language", &labels)
        .await?;
    Ok(ProjectLanguage::all()[index])
}

#[async_trait]
impl Action for CreateNewProjectAction {
    fn id(&self) -> &'static str {
        ids::CREATE_NEW_PROJECT
    }

    fn description(&self) -> &'static str {
        "Create a new function project folder in the workspace"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let workspace = ctx.require_workspace()?.to_path_buf();

        let name = ctx
            .interaction
            .prompt_text("Project folder name", None)
            .await?;
        if name.trim().is_empty() {
            return Err(Error::Validation(
                "project folder name must not be empty".to_string(),
            ));
        }

        let target = workspace.join(&name);
        if target.exists() {
            return Err(Error::FolderExists(name));
        }

        let language = prompt_language(ctx).await?;

        std::fs::create_dir_all(&target)?;
        ctx.interaction
            .display_progress(&format!("Initializing {language} project '{name}'"));
        ctx.func_tools.init_project(&target, language).await?;
        scaffold::write_debug_scaffold(&target, &ctx.settings.tools.func_program)?;

        ctx.interaction
            .display_success(&format!("Created function project '{name}'"));
        Ok(())
    }
}
