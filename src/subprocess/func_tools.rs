use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

use super::builder::ProcessCommandBuilder;
use super::error::ProcessError;
use super::runner::ProcessRunner;
use crate::project::ProjectLanguage;

/// Wrapper around the function core tools binary (`func`).
#[async_trait]
pub trait FuncToolsRunner: Send + Sync {
    async fn check_availability(&self) -> Result<bool, ProcessError>;

    /// `func init` for the chosen language, run inside the project folder.
    async fn init_project(
        &self,
        path: &Path,
        language: ProjectLanguage,
    ) -> Result<(), ProcessError>;

    /// `func new` with an explicit template and function name.
    async fn create_function(
        &self,
        path: &Path,
        template: &str,
        name: &str,
    ) -> Result<(), ProcessError>;

    /// `func azure functionapp publish` from the project folder.
    async fn publish(&self, path: &Path, app: &str) -> Result<String, ProcessError>;
}

pub struct FuncToolsRunnerImpl {
    runner: Arc<dyn ProcessRunner>,
    program: String,
}

impl FuncToolsRunnerImpl {
    pub fn new(runner: Arc<dyn ProcessRunner>, program: String) -> Self {
        Self { runner, program }
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
}

#[async_trait]
impl FuncToolsRunner for FuncToolsRunnerImpl {
    async fn check_availability(&self) -> Result<bool, ProcessError> {
        let result = self
            .runner
            .run(
                ProcessCommandBuilder::new(&self.program)
                    .args(["--version"])
                    .build(),
            )
            .await;

        match result {
            Ok(output) => Ok(output.status.success()),
            Err(ProcessError::CommandNotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    async fn init_project(
        &self,
        path: &Path,
        language: ProjectLanguage,
    ) -> Result<(), ProcessError> {
        tracing::info!("Initializing {} project in {}", language, path.display());

        let mut builder = ProcessCommandBuilder::new(&self.program)
            .arg("init")
            .args(["--worker-runtime", language.worker_runtime()])
            .current_dir(path);
        if language == ProjectLanguage::TypeScript {
            builder = builder.args(["--language", "typescript"]);
        }

        self.run_checked(builder, &format!("{} init", self.program))
            .await?;
        Ok(())
    }

    async fn create_function(
        &self,
        path: &Path,
        template: &str,
        name: &str,
    ) -> Result<(), ProcessError> {
        tracing::info!("Creating function '{}' from template '{}'", name, template);

        let builder = ProcessCommandBuilder::new(&self.program)
            .arg("new")
            .args(["--template", template])
            .args(["--name", name])
            .current_dir(path);

        self.run_checked(builder, &format!("{} new", self.program))
            .await?;
        Ok(())
    }

    async fn publish(&self, path: &Path, app: &str) -> Result<String, ProcessError> {
        tracing::info!("Publishing {} to app '{}'", path.display(), app);

        let builder = ProcessCommandBuilder::new(&self.program)
            .args(["azure", "functionapp", "publish", app])
            .current_dir(path);

        self.run_checked(
            builder,
            &format!("{} azure functionapp publish", self.program),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subprocess::mock::MockProcessRunner;

    fn runner_with(mock: &MockProcessRunner) -> FuncToolsRunnerImpl {
        FuncToolsRunnerImpl::new(Arc::new(mock.clone()), "func".to_string())
    }

    #[tokio::test]
    async fn init_project_passes_worker_runtime() {
        let mock = MockProcessRunner::new();
        mock.expect_command("func").finish();

        let func = runner_with(&mock);
        func.init_project(Path::new("/tmp/proj"), ProjectLanguage::JavaScript)
            .await
            .unwrap();

        let calls = mock.call_history();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0].args,
            vec!["init", "--worker-runtime", "node"],
        );
    }

    #[tokio::test]
    async fn typescript_gets_language_flag() {
        let mock = MockProcessRunner::new();
        mock.expect_command("func").finish();

        let func = runner_with(&mock);
        func.init_project(Path::new("/tmp/proj"), ProjectLanguage::TypeScript)
            .await
            .unwrap();

        let calls = mock.call_history();
        assert!(calls[0].args.contains(&"typescript".to_string()));
    }

    #[tokio::test]
    async fn publish_runs_from_project_dir() {
        let mock = MockProcessRunner::new();
        mock.expect_command("func")
            .returns_stdout("Deployment completed successfully.")
            .finish();

        let func = runner_with(&mock);
        let stdout = func
            .publish(Path::new("/tmp/proj"), "appX")
            .await
            .unwrap();
        assert!(stdout.contains("Deployment completed"));

        let calls = mock.call_history();
        assert_eq!(
            calls[0].args,
            vec!["azure", "functionapp", "publish", "appX"],
        );
        assert_eq!(
            calls[0].working_dir.as_deref(),
            Some(Path::new("/tmp/proj")),
        );
    }

    #[tokio::test]
    async fn create_function_surfaces_stderr() {
        let mock = MockProcessRunner::new();
        mock.expect_command("func")
            .returns_exit_code(1)
            .returns_stderr("template not found")
            .finish();

        let func = runner_with(&mock);
        let err = func
            .create_function(Path::new("/tmp/proj"), "HttpTrigger", "myFunc")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("template not found"));
    }
}
