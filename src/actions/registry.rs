//! Registry managing the available actions by identifier.

use std::collections::HashMap;
use std::sync::Arc;

use super::handlers::{
    CopyFunctionUrlAction, CreateFunctionAction, CreateFunctionAppAction, CreateNewProjectAction,
    DeployAction, OpenInPortalAction, RestartFunctionAppAction, StartFunctionAppAction,
    StopFunctionAppAction,
};
use super::{Action, ActionContext};
use crate::automation::AutomationError;
use crate::error::Result;

pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Registry with every built-in action registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(CreateNewProjectAction));
        registry.register(Arc::new(CreateFunctionAction));
        registry.register(Arc::new(CreateFunctionAppAction));
        registry.register(Arc::new(DeployAction));
        registry.register(Arc::new(StartFunctionAppAction));
        registry.register(Arc::new(StopFunctionAppAction));
        registry.register(Arc::new(RestartFunctionAppAction));
        registry.register(Arc::new(OpenInPortalAction));
        registry.register(Arc::new(CopyFunctionUrlAction));
        registry
    }

    pub fn register(&mut self, action: Arc<dyn Action>) {
        self.actions.insert(action.id(), action);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(id).cloned()
    }

    /// All registered identifiers, sorted for stable output.
    pub fn list(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.actions.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub async fn execute(&self, id: &str, ctx: &ActionContext) -> Result<()> {
        let action = self
            .get(id)
            .ok_or_else(|| AutomationError::UnknownAction(id.to_string()))?;
        tracing::debug!("Running action {}", id);
        action.run(ctx).await
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ids;

    #[test]
    fn defaults_cover_all_identifiers() {
        let registry = ActionRegistry::with_defaults();
        for id in [
            ids::CREATE_NEW_PROJECT,
            ids::CREATE_FUNCTION,
            ids::CREATE_FUNCTION_APP,
            ids::DEPLOY,
            ids::START_FUNCTION_APP,
            ids::STOP_FUNCTION_APP,
            ids::RESTART_FUNCTION_APP,
            ids::OPEN_IN_PORTAL,
            ids::COPY_FUNCTION_URL,
        ] {
            assert!(registry.get(id).is_some(), "missing action {id}");
        }
        assert_eq!(registry.list().len(), 9);
    }

    #[test]
    fn unknown_identifier_is_absent() {
        let registry = ActionRegistry::with_defaults();
        assert!(registry.get("azureFunctions.doesNotExist").is_none());
    }
}
