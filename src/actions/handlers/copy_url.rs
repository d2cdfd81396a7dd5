//! `azureFunctions.copyFunctionUrl`

use async_trait::async_trait;
use url::Url;

use crate::actions::{ids, Action, ActionContext};
use crate::error::{Error, Result};

pub struct CopyFunctionUrlAction;

#[async_trait]
impl Action for CopyFunctionUrlAction {
    fn id(&self) -> &'static str {
        ids::COPY_FUNCTION_URL
    }

    fn description(&self) -> &'static str {
        "Copy a function's invocation URL to the shared mailbox"
    }

    async fn run(&self, ctx: &ActionContext) -> Result<()> {
        let app = ctx.select_app("Select a function app").await?;

        let functions = ctx.tree.functions_of(&app).await?;
        if functions.is_empty() {
            // Finishing here leaves any queued function input unconsumed;
            // the scripted driver reports that as an unused-inputs failure,
            // which is how the discoverability race surfaces.
            ctx.interaction
                .display_warning(&format!("No functions found in app '{app}'"));
            return Ok(());
        }

        let labels: Vec<String> = functions.iter().map(|f| f.name.clone()).collect();
        let index = ctx
            .interaction
            .prompt_choice("Select a function", &labels)
            .await?;
        let function = &functions[index];

        let url = function.invoke_url.clone().ok_or_else(|| {
            Error::NotFound(format!(
                "no invocation URL published for '{}'",
                function.name
            ))
        })?;
        Url::parse(&url)?;

        ctx.mailbox.write(&url);
        ctx.interaction
            .display_info(&format!("Copied URL for '{}'", function.name));
        Ok(())
    }
}
