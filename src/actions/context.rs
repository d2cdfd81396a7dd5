//! Shared collaborators handed to every action.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::automation::UrlMailbox;
use crate::config::Settings;
use crate::error::{Error, Result};
use crate::interaction::UserInteraction;
use crate::subprocess::{CloudRunner, FuncToolsRunner, UrlOpener};
use crate::tree::AppTree;

#[derive(Clone)]
pub struct ActionContext {
    pub workspace: Option<PathBuf>,
    pub interaction: Arc<dyn UserInteraction>,
    pub func_tools: Arc<dyn FuncToolsRunner>,
    pub cloud: Arc<dyn CloudRunner>,
    pub tree: Arc<AppTree>,
    pub mailbox: UrlMailbox,
    pub opener: Arc<dyn UrlOpener>,
    pub settings: Settings,
}

impl ActionContext {
    /// Same context with the interaction collaborator swapped out; the
    /// scripted driver uses this to answer prompts from its queue.
    pub fn with_interaction(&self, interaction: Arc<dyn UserInteraction>) -> Self {
        let mut ctx = self.clone();
        ctx.interaction = interaction;
        ctx
    }

    /// The open workspace folder, or the environment error when none is.
    pub fn require_workspace(&self) -> Result<&Path> {
        self.workspace.as_deref().ok_or(Error::NoWorkspace)
    }

    /// Prompt for one of the known function apps; errors when none exist.
    pub async fn select_app(&self, message: &str) -> Result<String> {
        let names = self.tree.app_names().await?;
        if names.is_empty() {
            return Err(Error::NotFound("no function apps available".to_string()));
        }
        let index = self.interaction.prompt_choice(message, &names).await?;
        Ok(names[index].clone())
    }
}
