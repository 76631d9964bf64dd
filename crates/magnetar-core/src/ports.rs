//! The four narrow ports the workspace service talks to the backend through.
//! Implemented elsewhere (REST calls in the CLI crate, stubs in tests).

use anyhow::Result;
use async_trait::async_trait;

use magnetar_common::{DeployWorkspaceRequest, Workspace, WorkspaceCluster, WorkspaceTemplate};

/// Read access to clusters and their per-node spare capacity.
#[async_trait]
pub trait ClustersProvider: Send + Sync {
    async fn list_clusters(&self) -> Result<Vec<WorkspaceCluster>>;

    /// Must include the cluster's current status and available resources.
    async fn get_cluster(&self, cluster_id: &str) -> Result<WorkspaceCluster>;
}

/// Read access to workspace templates.
#[async_trait]
pub trait WorkspaceTemplatesProvider: Send + Sync {
    async fn list_workspace_templates(&self) -> Result<Vec<WorkspaceTemplate>>;
}

/// Issues deploy requests against the backend.
#[async_trait]
pub trait WorkspaceOperations: Send + Sync {
    /// Returns the id of the workspace the backend created.
    async fn deploy(&self, parameters: &DeployWorkspaceRequest) -> Result<String>;
}

/// Read/delete access to workspace state.
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    async fn list(&self, cluster_id: &str) -> Result<Vec<Workspace>>;

    async fn get(&self, workspace_id: &str) -> Result<Workspace>;

    /// Returns the id of the deleted workspace.
    async fn delete(&self, workspace_id: &str) -> Result<String>;
}
