//! `azureFunctions.openInPortal`

use async_trait::async_trait;

use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};

const PORTAL_BASE_URL: &str = "https://portal.azure.com";

pub struct OpenInPortalAction;

#[async_trait]
impl Action for OpenInPortalAction {
    fn id(&self) -> &'static str {
        ids::OPEN_IN_PORTAL
    }

    fn description(&self) -> &'static str {
        "Open a function app in the cloud portal"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let name = ctx.select_app("Select a function app").await?;
        let app = ctx
            .tree
            .app(&name)
            .await?
            .ok_or_else(|| Error::NotFound(format!("function app '{name}'")))?;

        let resource_id = app.resource_id.ok_or_else(|| {
            Error::Validation(format!("no resource id known for '{name}'"))
        })?;
        let url = format!("{PORTAL_BASE_URL}/#resource{resource_id}");

        ctx.opener.open(&url).await?;
        ctx.interaction
            .display_info(&format!("Opened '{name}' in the portal"));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::handlers::test_support::{app, TestHarness};

    #[tokio::test]
    async fn composes_portal_url_from_resource_id() {
        let harness = TestHarness::with_apps(None, vec![(app("appX"), vec![])]);
        harness.interaction.add_choice_response(0);

        OpenInPortalAction.run(&harness.ctx).await.unwrap();

        let urls = harness.opener.urls.lock().unwrap().clone();
        assert_eq!(urls.len(), 1);
        assert_eq!(
            urls[0],
            "https://portal.azure.com/#resource/subscriptions/s1/resourceGroups/rg/providers/Microsoft.Web/sites/appX"
        );
    }

    #[tokio::test]
    async fn missing_resource_id_is_an_error() {
        let mut no_id = app("appX");
        no_id.resource_id = None;
        let harness = TestHarness::with_apps(None, vec![(no_id, vec![])]);
        harness.interaction.add_choice_response(0);

        let err = OpenInPortalAction.run(&harness.ctx).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(harness.opener.urls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn no_apps_available_is_an_error() {
        let harness = TestHarness::new(None);
        let err = OpenInPortalAction.run(&harness.ctx).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
