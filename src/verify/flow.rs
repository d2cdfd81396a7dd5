//! The bounded-retry deployment verification flow.
//!
//! After a deploy, the newly published function may not show up in listings
//! right away. The flow resolves its invocation URL through the scripted
//! copy-URL action, retrying the discoverability race with a fixed delay
//! and a tree refresh between attempts, then issues one HTTP request to
//! confirm the deployed code actually runs.

use std::sync::Arc;

use crate::actions::ids;
use crate::automation::{ActionInvoker, ScriptedInput, UrlMailbox};
use crate::config::VerifySettings;
use crate::error::{Error, Result};
use crate::project::ProjectLanguage;
use crate::tree::TreeRefresh;

use super::classifier::{classify, AttemptOutcome, FlowState, RetryDecision};
use super::http::{HttpClient, RequestSpec, PAYLOAD_NAME};

/// What is being verified. Immutable once a flow starts.
#[derive(Debug, Clone)]
pub struct DeploymentTarget {
    pub app_name: String,
    pub function_name: String,
    pub language: ProjectLanguage,
}

impl DeploymentTarget {
    pub fn new(app_name: &str, function_name: &str, language: ProjectLanguage) -> Result<Self> {
        if app_name.trim().is_empty() {
            return Err(Error::Validation("app name must not be empty".to_string()));
        }
        if function_name.trim().is_empty() {
            return Err(Error::Validation(
                "function name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            app_name: app_name.to_string(),
            function_name: function_name.to_string(),
            language,
        })
    }
}

/// Outcome of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyReport {
    /// Attempts consumed, including the successful one.
    pub attempts: u32,
    /// Tree refreshes issued (always `attempts - 1`).
    pub refreshes: u32,
    /// The resolved invocation URL.
    pub url: String,
}

pub struct VerificationFlow {
    invoker: Arc<dyn ActionInvoker>,
    tree: Arc<dyn TreeRefresh>,
    mailbox: UrlMailbox,
    http: Arc<dyn HttpClient>,
    settings: VerifySettings,
}

impl VerificationFlow {
    pub fn new(
        invoker: Arc<dyn ActionInvoker>,
        tree: Arc<dyn TreeRefresh>,
        mailbox: UrlMailbox,
        http: Arc<dyn HttpClient>,
        settings: VerifySettings,
    ) -> Self {
        Self {
            invoker,
            tree,
            mailbox,
            http,
            settings,
        }
    }

    /// Resolve the target's invocation URL, retrying the discoverability
    /// race up to `retries` extra times, then smoke-check the deployment.
    pub async fn run(&self, target: &DeploymentTarget) -> Result<VerifyReport> {
        self.mailbox.clear();

        let max_attempts = self.settings.retries + 1;
        let mut state = FlowState::Attempting(1);
        let mut attempts = 0u32;
        let mut refreshes = 0u32;
        let mut last_error: Option<Error> = None;

        while let FlowState::Attempting(attempt) = state {
            if attempt > 1 {
                tokio::time::sleep(self.settings.min_timeout).await;
                self.tree.refresh().await?;
                refreshes += 1;
            }
            attempts = attempt;
            tracing::info!(
                app = %target.app_name,
                function = %target.function_name,
                language = %target.language,
                attempt,
                max_attempts,
                "Resolving invocation URL"
            );

            let outcome = match self.resolve_url(target).await {
                Ok(()) => AttemptOutcome::Success,
                Err(err) => {
                    let outcome = match classify(&err.to_string(), &target.function_name) {
                        RetryDecision::Retry => {
                            tracing::warn!("Function not listed yet: {}", err);
                            AttemptOutcome::RetryableFailure
                        }
                        RetryDecision::Abort => AttemptOutcome::NonRetryableFailure,
                    };
                    last_error = Some(err);
                    outcome
                }
            };
            state = state.advance(outcome, max_attempts);
        }

        match state {
            FlowState::Succeeded => {
                let url = self.mailbox.read().ok_or_else(|| {
                    Error::Validation("resolution succeeded but the mailbox is empty".to_string())
                })?;
                self.smoke_check(&url).await?;
                Ok(VerifyReport {
                    attempts,
                    refreshes,
                    url,
                })
            }
            _ => Err(last_error.unwrap_or_else(|| {
                Error::Validation("verification aborted without a recorded error".to_string())
            })),
        }
    }

    async fn resolve_url(&self, target: &DeploymentTarget) -> Result<()> {
        self.invoker
            .run_with_inputs(
                ids::COPY_FUNCTION_URL,
                vec![
                    ScriptedInput::contains(&target.app_name),
                    ScriptedInput::contains(&target.function_name),
                ],
            )
            .await
    }

    async fn smoke_check(&self, url: &str) -> Result<()> {
        let spec = RequestSpec::default_for(url);
        let body = self.http.send_request(&spec).await?;
        tracing::debug!("Smoke check response: {}", body.trim_end());

        for fragment in ["Hello", PAYLOAD_NAME] {
            if !body.contains(fragment) {
                return Err(Error::Validation(format!(
                    "response body does not contain '{fragment}': {body}"
                )));
            }
        }
        Ok(())
    }
}
