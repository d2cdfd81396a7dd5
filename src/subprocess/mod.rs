pub mod builder;
pub mod cloud;
pub mod error;
pub mod func_tools;
pub mod mock;
pub mod opener;
pub mod runner;

pub use builder::ProcessCommandBuilder;
pub use cloud::{AppState, CloudRunner, CloudRunnerImpl, FunctionApp, FunctionEntry};
pub use error::ProcessError;
pub use func_tools::{FuncToolsRunner, FuncToolsRunnerImpl};
pub use mock::{MockCommandConfig, MockProcessRunner};
pub use opener::{SystemUrlOpener, UrlOpener};
pub use runner::{ExitStatus, ProcessCommand, ProcessOutput, ProcessRunner, TokioProcessRunner};

use std::sync::Arc;

use crate::config::ToolsSettings;

#[derive(Clone)]
pub struct SubprocessManager {
    runner: Arc<dyn ProcessRunner>,
    tools: ToolsSettings,
}

impl SubprocessManager {
    pub fn new(runner: Arc<dyn ProcessRunner>, tools: ToolsSettings) -> Self {
        Self { runner, tools }
    }

    pub fn production(tools: ToolsSettings) -> Self {
        Self::new(Arc::new(TokioProcessRunner), tools)
    }

    pub fn runner(&self) -> Arc<dyn ProcessRunner> {
        Arc::clone(&self.runner)
    }

    pub fn func_tools(&self) -> FuncToolsRunnerImpl {
        FuncToolsRunnerImpl::new(Arc::clone(&self.runner), self.tools.func_program.clone())
    }

    pub fn cloud(&self) -> CloudRunnerImpl {
        CloudRunnerImpl::new(
            Arc::clone(&self.runner),
            self.tools.cloud_program.clone(),
            self.tools.resource_group.clone(),
        )
    }

    pub fn url_opener(&self) -> SystemUrlOpener {
        SystemUrlOpener::new(Arc::clone(&self.runner))
    }

    #[cfg(test)]
    pub fn mock() -> (Self, MockProcessRunner) {
        let mock = MockProcessRunner::new();
        let runner = Arc::new(mock.clone()) as Arc<dyn ProcessRunner>;
        (Self::new(runner, ToolsSettings::default()), mock)
    }
}
