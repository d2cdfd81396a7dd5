//! Cached model of deployed function apps and their functions.
//!
//! Mirrors what an editor tree view would hold: a snapshot of the remote
//! state, re-synced on demand. Newly deployed functions may take a while to
//! show up in listings, which is why the verification flow refreshes between
//! attempts.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::subprocess::{AppState, CloudRunner, FunctionApp, FunctionEntry};

/// One app plus the functions listed under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppNode {
    pub app: FunctionApp,
    pub functions: Vec<FunctionEntry>,
}

/// Forces a re-sync with the remote state. Idempotent, returns nothing.
#[async_trait]
pub trait TreeRefresh: Send + Sync {
    async fn refresh(&self) -> Result<()>;
}

pub struct AppTree {
    cloud: Arc<dyn CloudRunner>,
    nodes: RwLock<Option<Vec<AppNode>>>,
}

impl AppTree {
    pub fn new(cloud: Arc<dyn CloudRunner>) -> Self {
        Self {
            cloud,
            nodes: RwLock::new(None),
        }
    }

    async fn fetch(&self) -> Result<Vec<AppNode>> {
        let apps = self.cloud.list_function_apps().await?;
        let mut nodes = Vec::with_capacity(apps.len());
        for app in apps {
            let functions = self.cloud.list_functions(&app.name).await?;
            nodes.push(AppNode { app, functions });
        }
        Ok(nodes)
    }

    /// Populate the cache if it has never been loaded.
    pub async fn ensure_loaded(&self) -> Result<()> {
        if self.nodes.read().await.is_some() {
            return Ok(());
        }
        let fetched = self.fetch().await?;
        *self.nodes.write().await = Some(fetched);
        Ok(())
    }

    pub async fn app_names(&self) -> Result<Vec<String>> {
        self.ensure_loaded().await?;
        let nodes = self.nodes.read().await;
        Ok(nodes
            .as_ref()
            .map(|n| n.iter().map(|node| node.app.name.clone()).collect())
            .unwrap_or_default())
    }

    pub async fn app(&self, name: &str) -> Result<Option<FunctionApp>> {
        self.ensure_loaded().await?;
        let nodes = self.nodes.read().await;
        Ok(nodes.as_ref().and_then(|n| {
            n.iter()
                .find(|node| node.app.name == name)
                .map(|node| node.app.clone())
        }))
    }

    pub async fn functions_of(&self, app: &str) -> Result<Vec<FunctionEntry>> {
        self.ensure_loaded().await?;
        let nodes = self.nodes.read().await;
        Ok(nodes
            .as_ref()
            .and_then(|n| {
                n.iter()
                    .find(|node| node.app.name == app)
                    .map(|node| node.functions.clone())
            })
            .unwrap_or_default())
    }

    /// Insert a freshly created app without waiting for a full re-sync.
    pub async fn insert_app(&self, app: FunctionApp) {
        let mut nodes = self.nodes.write().await;
        let list = nodes.get_or_insert_with(Vec::new);
        if !list.iter().any(|node| node.app.name == app.name) {
            list.push(AppNode {
                app,
                functions: Vec::new(),
            });
        }
    }

    /// Update the cached state after a start/stop/restart operation.
    pub async fn set_app_state(&self, name: &str, state: AppState) {
        let mut nodes = self.nodes.write().await;
        if let Some(list) = nodes.as_mut() {
            if let Some(node) = list.iter_mut().find(|node| node.app.name == name) {
                node.app.state = state;
            }
        }
    }
}

#[async_trait]
impl TreeRefresh for AppTree {
    async fn refresh(&self) -> Result<()> {
        let fetched = self.fetch().await?;
        *self.nodes.write().await = Some(fetched);
        Ok(())
    }
}
