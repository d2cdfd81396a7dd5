//! Command routing and execution.
//!
//! Wires the production collaborators together, maps each subcommand to its
//! action, and feeds command-line parameters into the prompt queue so only
//! the missing ones are asked for.

use std::sync::Arc;

use anyhow::Result;

use crate::actions::{ids, ActionContext, ActionRegistry};
use crate::automation::{ActionDriver, InputQueue, ScriptedInput, UrlMailbox};
use crate::cli::args::{Cli, Commands};
use crate::cli::interaction::QueueBackedInteraction;
use crate::config::Settings;
use crate::error::Error;
use crate::interaction::{DefaultUserInteraction, UserInteraction};
use crate::project::ProjectLanguage;
use crate::subprocess::{CloudRunner, FuncToolsRunner, SubprocessManager};
use crate::tree::{AppTree, TreeRefresh};
use crate::verify::{DeploymentTarget, ReqwestClient, VerificationFlow};

/// Execute a parsed CLI invocation.
pub async fn execute_command(cli: Cli) -> Result<()> {
    let workspace = match cli.path {
        Some(path) => Some(path),
        None => std::env::current_dir().ok(),
    };
    let settings = Settings::load(cli.config.as_deref(), workspace.as_deref())?;

    let subprocess = SubprocessManager::production(settings.tools.clone());
    let cloud: Arc<dyn CloudRunner> = Arc::new(subprocess.cloud());
    let func_tools: Arc<dyn FuncToolsRunner> = Arc::new(subprocess.func_tools());
    let tree = Arc::new(AppTree::new(Arc::clone(&cloud)));
    let interactive: Arc<dyn UserInteraction> = Arc::new(DefaultUserInteraction::new());

    let ctx = ActionContext {
        workspace,
        interaction: Arc::clone(&interactive),
        func_tools,
        cloud,
        tree,
        mailbox: UrlMailbox::default(),
        opener: Arc::new(subprocess.url_opener()),
        settings,
    };

    let (action_id, inputs) = match cli.command {
        Commands::Verify {
            app,
            function,
            language,
            retries,
        } => return run_verify(&ctx, app, function, language, retries).await,
        Commands::CreateProject { name, language } => {
            let mut inputs = Vec::new();
            if let Some(name) = name {
                inputs.push(ScriptedInput::literal(name));
            }
            if let Some(language) = language {
                inputs.push(ScriptedInput::literal(language.label()));
            }
            (ids::CREATE_NEW_PROJECT, inputs)
        }
        Commands::CreateFunction { template, name } => {
            let mut inputs = Vec::new();
            if let Some(template) = template {
                inputs.push(ScriptedInput::contains(template));
            }
            if let Some(name) = name {
                inputs.push(ScriptedInput::literal(name));
            }
            (ids::CREATE_FUNCTION, inputs)
        }
        Commands::CreateApp { name } => (
            ids::CREATE_FUNCTION_APP,
            name.into_iter().map(ScriptedInput::literal).collect(),
        ),
        Commands::Deploy { app } => (
            ids::DEPLOY,
            app.into_iter().map(ScriptedInput::contains).collect(),
        ),
        Commands::Start { app } => (
            ids::START_FUNCTION_APP,
            app.into_iter().map(ScriptedInput::contains).collect(),
        ),
        Commands::Stop { app } => (
            ids::STOP_FUNCTION_APP,
            app.into_iter().map(ScriptedInput::contains).collect(),
        ),
        Commands::Restart { app } => (
            ids::RESTART_FUNCTION_APP,
            app.into_iter().map(ScriptedInput::contains).collect(),
        ),
        Commands::OpenPortal { app } => (
            ids::OPEN_IN_PORTAL,
            app.into_iter().map(ScriptedInput::contains).collect(),
        ),
        Commands::CopyUrl { app, function } => {
            let mut inputs = Vec::new();
            if let Some(app) = app {
                inputs.push(ScriptedInput::contains(app));
            }
            if let Some(function) = function {
                inputs.push(ScriptedInput::contains(function));
            }
            (ids::COPY_FUNCTION_URL, inputs)
        }
    };

    run_action(&ctx, interactive, action_id, inputs).await
}

async fn run_action(
    ctx: &ActionContext,
    fallback: Arc<dyn UserInteraction>,
    action_id: &str,
    inputs: Vec<ScriptedInput>,
) -> Result<()> {
    let registry = ActionRegistry::with_defaults();
    let queue = Arc::new(InputQueue::new(inputs));
    let interaction = Arc::new(QueueBackedInteraction::new(Arc::clone(&queue), fallback));
    let ctx = ctx.with_interaction(interaction);

    match registry.execute(action_id, &ctx).await {
        Ok(()) => match queue.unused_inputs_error() {
            Some(err) => Err(Error::Automation(err).into()),
            None => Ok(()),
        },
        Err(err) if err.is_cancellation() => {
            tracing::debug!("Action {} cancelled", action_id);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

async fn run_verify(
    ctx: &ActionContext,
    app: String,
    function: String,
    language: ProjectLanguage,
    retries: Option<u32>,
) -> Result<()> {
    let target = DeploymentTarget::new(&app, &function, language)?;
    let mut verify_settings = ctx.settings.verify.clone();
    if let Some(retries) = retries {
        verify_settings.retries = retries;
    }

    let registry = Arc::new(ActionRegistry::with_defaults());
    let driver = Arc::new(ActionDriver::new(registry, ctx.clone()));
    let flow = VerificationFlow::new(
        driver,
        Arc::clone(&ctx.tree) as Arc<dyn TreeRefresh>,
        ctx.mailbox.clone(),
        Arc::new(ReqwestClient::new()),
        verify_settings,
    );

    let report = flow.run(&target).await?;
    ctx.interaction.display_success(&format!(
        "'{function}' responded at {} after {} attempt(s)",
        report.url, report.attempts
    ));
    Ok(())
}
