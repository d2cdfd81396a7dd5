//! `azureFunctions.startFunctionApp` / `stopFunctionApp` / `restartFunctionApp`

use async_trait::async_trait;

use crate::actions::{ids, Action, ActionContext};
use crate::error::Result;
use crate::subprocess::AppState;

#[derive(Debug, Clone, Copy)]
enum AppOperation {
    Start,
    Stop,
    Restart,
}

impl AppOperation {
    fn verb(&self) -> &'static str {
        match self {
            AppOperation::Start => "start",
            AppOperation::Stop => "stop",
            AppOperation::Restart => "restart",
        }
    }

    fn done(&self) -> &'static str {
        match self {
            AppOperation::Start => "started",
            AppOperation::Stop => "stopped",
            AppOperation::Restart => "restarted",
        }
    }

    fn resulting_state(&self) -> AppState {
        match self {
            AppOperation::Start | AppOperation::Restart => AppState::Running,
            AppOperation::Stop => AppState::Stopped,
        }
    }
}

async fn run_app_operation(ctx: &ActionContext, op: AppOperation) -> Result<()> {
    let app = ctx
        .select_app(&format!("Select the function app to {}", op.verb()))
        .await?;

    ctx.interaction
        .display_progress(&format!("Waiting for '{app}' to {}", op.verb()));
    match op {
        AppOperation::Start => ctx.cloud.start_app(&app).await?,
        AppOperation::Stop => ctx.cloud.stop_app(&app).await?,
        AppOperation::Restart => ctx.cloud.restart_app(&app).await?,
    }
    ctx.tree.set_app_state(&app, op.resulting_state()).await;

    ctx.interaction
        .display_success(&format!("'{app}' {}", op.done()));
    Ok(())
}

pub struct StartFunctionAppAction;

#[async_trait]
impl Action for StartFunctionAppAction {
    fn id(&self) -> &'static str {
        ids::START_FUNCTION_APP
    }

    fn description(&self) -> &'static str {
        "Start a function app"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        run_app_operation(ctx, AppOperation::Start).await
    }
}

pub struct StopFunctionAppAction;

#[async_trait]
impl Action for StopFunctionAppAction {
    fn id(&self) -> &'static str {
        ids::STOP_FUNCTION_APP
    }

    fn description(&self) -> &'static str {
        "Stop a function app"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        run_app_operation(ctx, AppOperation::Stop).await
    }
}

pub struct RestartFunctionAppAction;

#[async_trait]
impl Action for RestartFunctionAppAction {
    fn id(&self) -> &'static str {
        ids::RESTART_FUNCTION_APP
    }

    fn description(&self) -> &'static str {
        "Restart a function app"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        run_app_operation(ctx, AppOperation::Restart).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::handlers::test_support::{app, TestHarness};
    use crate::error::Error;

    #[tokio::test]
    async fn stop_updates_cached_state() {
        let harness = TestHarness::with_apps(None, vec![(app("appX"), vec![])]);
        harness.interaction.add_choice_response(0);

        StopFunctionAppAction.run(&harness.ctx).await.unwrap();

        assert_eq!(
            harness.cloud.calls.lock().unwrap().clone(),
            vec!["stop appX".to_string()]
        );
        let cached = harness.ctx.tree.app("appX").await.unwrap().unwrap();
        assert_eq!(cached.state, AppState::Stopped);
    }

    #[tokio::test]
    async fn start_and_restart_leave_app_running() {
        for (action, expected_call) in [
            (
                Box::new(StartFunctionAppAction) as Box<dyn Action>,
                "start appX",
            ),
            (Box::new(RestartFunctionAppAction), "restart appX"),
        ] {
            let harness = TestHarness::with_apps(None, vec![(app("appX"), vec![])]);
            harness.interaction.add_choice_response(0);

            action.run(&harness.ctx).await.unwrap();

            assert_eq!(
                harness.cloud.calls.lock().unwrap().clone(),
                vec![expected_call.to_string()]
            );
            let cached = harness.ctx.tree.app("appX").await.unwrap().unwrap();
            assert_eq!(cached.state, AppState::Running);
        }
    }

    #[tokio::test]
    async fn no_apps_means_nothing_to_operate_on() {
        let harness = TestHarness::new(None);
        let err = StartFunctionAppAction.run(&harness.ctx).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
