//! Identifier-addressed actions mapping user intents onto the CLI wrappers.
//!
//! Each action validates its preconditions, gathers missing parameters
//! through the user-interaction collaborator, delegates the work to a
//! subprocess-backed wrapper, and reports progress. Actions are addressed by
//! dotted identifiers so they can be driven both from the binary's
//! subcommands and from the scripted automation driver.

use async_trait::async_trait;

pub mod context;
pub mod handlers;
pub mod registry;

pub use context::ActionContext;
pub use registry::ActionRegistry;

use crate::error::Result;

/// Action identifiers, mirroring the editor command namespace.
pub mod ids {
    pub const CREATE_NEW_PROJECT: &str = "azureFunctions.createNewProject";
    pub const CREATE_FUNCTION: &str = "azureFunctions.createFunction";
    pub const CREATE_FUNCTION_APP: &str = "azureFunctions.createFunctionApp";
    pub const DEPLOY: &str = "azureFunctions.deploy";
    pub const START_FUNCTION_APP: &str = "azureFunctions.startFunctionApp";
    pub const STOP_FUNCTION_APP: &str = "azureFunctions.stopFunctionApp";
    pub const RESTART_FUNCTION_APP: &str = "azureFunctions.restartFunctionApp";
    pub const OPEN_IN_PORTAL: &str = "azureFunctions.openInPortal";
    pub const COPY_FUNCTION_URL: &str = "azureFunctions.copyFunctionUrl";
}

/// Core trait all actions implement
#[async_trait]
pub trait Action: Send + Sync {
    /// Unique dotted identifier for this action
    fn id(&self) -> &'static str;

    /// One-line description of what this action does
    fn description(&self) -> &'static str;

    /// Executes the action against the given context
    async fn run(&self, ctx: &ActionContext) -> Result<()>;
}
