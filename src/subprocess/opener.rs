use async_trait::async_trait;
use std::sync::Arc;

use super::builder::ProcessCommandBuilder;
use super::error::ProcessError;
use super::runner::ProcessRunner;

/// Hands a URL to the platform opener.
#[async_trait]
pub trait UrlOpener: Send + Sync {
    async fn open(&self, url: &str) -> Result<(), ProcessError>;
}

pub struct SystemUrlOpener {
    runner: Arc<dyn ProcessRunner>,
}

impl SystemUrlOpener {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }

    fn opener_command(url: &str) -> ProcessCommandBuilder {
        if cfg!(target_os = "macos") {
            ProcessCommandBuilder::new("open").arg(url)
        } else if cfg!(target_os = "windows") {
            ProcessCommandBuilder::new("cmd").args(["/C", "start", "", url])
        } else {
            ProcessCommandBuilder::new("xdg-open").arg(url)
        }
    }
}

#[async_trait]
impl UrlOpener for SystemUrlOpener {
    async fn open(&self, url: &str) -> Result<(), ProcessError> {
        tracing::info!("Opening {}", url);
        let output = self.runner.run(Self::opener_command(url).build()).await?;
        if !output.status.success() {
            return Err(ProcessError::from_failure(
                "open URL",
                output.status.code(),
                &output.stderr,
            ));
        }
        Ok(())
    }
}
