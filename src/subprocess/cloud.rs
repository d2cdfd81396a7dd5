use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;

use super::builder::ProcessCommandBuilder;
use super::error::ProcessError;
use super::runner::ProcessRunner;

/// A deployed function app as reported by the cloud CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionApp {
    pub name: String,
    pub state: AppState,
    pub host_name: Option<String>,
    /// Full resource id; portal links are composed from it.
    pub resource_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Running,
    Stopped,
    Unknown,
}

impl AppState {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("Running") => AppState::Running,
            Some("Stopped") => AppState::Stopped,
            _ => AppState::Unknown,
        }
    }
}

/// One function inside an app, with its invocation endpoint when the
/// platform has published one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionEntry {
    pub name: String,
    pub invoke_url: Option<String>,
}

/// Wrapper around the cloud CLI (`az`) for function app operations.
#[async_trait]
pub trait CloudRunner: Send + Sync {
    async fn create_function_app(&self, name: &str) -> Result<FunctionApp, ProcessError>;
    async fn list_function_apps(&self) -> Result<Vec<FunctionApp>, ProcessError>;
    async fn list_functions(&self, app: &str) -> Result<Vec<FunctionEntry>, ProcessError>;
    async fn start_app(&self, name: &str) -> Result<(), ProcessError>;
    async fn stop_app(&self, name: &str) -> Result<(), ProcessError>;
    async fn restart_app(&self, name: &str) -> Result<(), ProcessError>;
}

pub struct CloudRunnerImpl {
    runner: Arc<dyn ProcessRunner>,
    program: String,
    resource_group: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawApp {
    name: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    default_host_name: Option<String>,
    #[serde(default)]
    id: Option<String>,
}

#[derive(Deserialize)]
struct RawFunction {
    name: String,
    #[serde(default)]
    properties: Option<RawFunctionProps>,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RawFunctionProps {
    #[serde(default)]
    invoke_url_template: Option<String>,
}

impl CloudRunnerImpl {
    pub fn new(
        runner: Arc<dyn ProcessRunner>,
        program: String,
        resource_group: Option<String>,
    ) -> Self {
        Self {
            runner,
            program,
            resource_group,
        }
    }

    fn builder(&self, args: &[&str]) -> ProcessCommandBuilder {
        let mut builder = ProcessCommandBuilder::new(&self.program).args(args);
        if let Some(group) = &self.resource_group {
            builder = builder.args(["--resource-group", group]);
        }
        builder
    }

    async fn run_checked(
        &self,
        builder: ProcessCommandBuilder,
        what: &str,
    ) -> Result<String, ProcessError> {
        let output = self.runner.run(builder.build()).await?;
        if !output.status.success() {
            return Err(ProcessError::from_failure(
                what,
                output.status.code(),
                &output.stderr,
            ));
        }
        Ok(output.stdout)
    }

    fn parse_json<T: serde::de::DeserializeOwned>(
        stdout: &str,
        command: &str,
    ) -> Result<T, ProcessError> {
        serde_json::from_str(stdout).map_err(|e| ProcessError::UnexpectedOutput {
            command: command.to_string(),
            message: e.to_string(),
        })
    }

    fn app_from_raw(raw: RawApp) -> FunctionApp {
        FunctionApp {
            name: raw.name,
            state: AppState::parse(raw.state.as_deref()),
            host_name: raw.default_host_name,
            resource_id: raw.id,
        }
    }

    /// Function listings name entries `<app>/<function>`; strip the app part.
    fn function_from_raw(raw: RawFunction) -> FunctionEntry {
        let name = raw
            .name
            .rsplit_once('/')
            .map(|(_, short)| short.to_string())
            .unwrap_or(raw.name);
        FunctionEntry {
            name,
            invoke_url: raw.properties.and_then(|p| p.invoke_url_template),
        }
    }

    async fn app_operation(&self, op: &str, name: &str) -> Result<(), ProcessError> {
        tracing::info!("{} function app '{}'", op, name);
        let builder = self.builder(&["functionapp", op, "--name", name]);
        self.run_checked(builder, &format!("{} functionapp {}", self.program, op))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl CloudRunner for CloudRunnerImpl {
    async fn create_function_app(&self, name: &str) -> Result<FunctionApp, ProcessError> {
        tracing::info!("Creating function app '{}'", name);
        let builder = self.builder(&["functionapp", "create", "--name", name, "--output", "json"]);
        let stdout = self
            .run_checked(builder, &format!("{} functionapp create", self.program))
            .await?;
        let raw: RawApp = Self::parse_json(&stdout, "functionapp create")?;
        Ok(Self::app_from_raw(raw))
    }

    async fn list_function_apps(&self) -> Result<Vec<FunctionApp>, ProcessError> {
        let builder = self.builder(&["functionapp", "list", "--output", "json"]);
        let stdout = self
            .run_checked(builder, &format!("{} functionapp list", self.program))
            .await?;
        let raw: Vec<RawApp> = Self::parse_json(&stdout, "functionapp list")?;
        Ok(raw.into_iter().map(Self::app_from_raw).collect())
    }

    async fn list_functions(&self, app: &str) -> Result<Vec<FunctionEntry>, ProcessError> {
        let builder = self.builder(&[
            "functionapp", "function", "list", "--name", app, "--output", "json",
        ]);
        let stdout = self
            .run_checked(builder, &format!("{} functionapp function list", self.program))
            .await?;
        let raw: Vec<RawFunction> = Self::parse_json(&stdout, "functionapp function list")?;
        Ok(raw.into_iter().map(Self::function_from_raw).collect())
    }

    async fn start_app(&self, name: &str) -> Result<(), ProcessError> {
        self.app_operation("start", name).await
    }

    async fn stop_app(&self, name: &str) -> Result<(), ProcessError> {
        self.app_operation("stop", name).await
    }

    async fn restart_app(&self, name: &str) -> Result<(), ProcessError> {
        self.app_operation("restart", name).await
    }
}
