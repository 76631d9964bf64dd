use std::sync::Arc;

use tokio::time::{sleep, Instant};
use tracing::{debug, info};

use magnetar_common::{
    ClusterStatus, DeployWorkspaceRequest, GpuVendorPreference, WorkerGroupAllocation,
    WorkerResources, Workspace, WorkspaceCluster, WorkspaceStatus, WorkspaceTemplate,
};

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::partition;
use crate::ports::{
    ClustersProvider, WorkspaceOperations, WorkspaceRepository, WorkspaceTemplatesProvider,
};

/// Sizing parameters for a single-node worker.
#[derive(Debug, Clone)]
pub struct SingleWorkerResourceRequest {
    pub cluster_id: String,
    pub num_gpus: u32,
    pub gpu_vendor: GpuVendorPreference,
}

/// Sizing parameters for a set of homogeneous worker groups.
///
/// `num_workers == -1` means "as many workers as the cluster can support".
#[derive(Debug, Clone)]
pub struct WorkerGroupResourceRequest {
    pub cluster_id: String,
    pub num_workers: i64,
    pub gpu_vendor: GpuVendorPreference,
    pub gpus_per_worker: u32,
}

/// Orchestrates cluster lookup, resource partitioning, and workspace
/// deployment against the backend ports.
///
/// Every operation works on a fresh cluster snapshot; nothing is locked
/// between a feasibility check and a deploy, so a concurrent cluster
/// mutation can still fail a deploy that looked feasible.
pub struct WorkspaceService {
    clusters: Arc<dyn ClustersProvider>,
    templates: Arc<dyn WorkspaceTemplatesProvider>,
    operations: Arc<dyn WorkspaceOperations>,
    repository: Arc<dyn WorkspaceRepository>,
    config: ServiceConfig,
}

impl WorkspaceService {
    pub fn new(
        clusters: Arc<dyn ClustersProvider>,
        templates: Arc<dyn WorkspaceTemplatesProvider>,
        operations: Arc<dyn WorkspaceOperations>,
        repository: Arc<dyn WorkspaceRepository>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            clusters,
            templates,
            operations,
            repository,
            config,
        }
    }

    pub async fn list_clusters(&self) -> Result<Vec<WorkspaceCluster>, ServiceError> {
        Ok(self.clusters.list_clusters().await?)
    }

    pub async fn get_cluster(&self, cluster_id: &str) -> Result<WorkspaceCluster, ServiceError> {
        Ok(self.clusters.get_cluster(cluster_id).await?)
    }

    pub async fn get_workspace_templates(&self) -> Result<Vec<WorkspaceTemplate>, ServiceError> {
        Ok(self.templates.list_workspace_templates().await?)
    }

    /// Size a single worker on the cluster, or fail if no node qualifies.
    pub async fn get_resources_for_single_node_worker(
        &self,
        request: &SingleWorkerResourceRequest,
    ) -> Result<WorkerResources, ServiceError> {
        let cluster = self.ready_cluster(&request.cluster_id).await?;
        partition::partition_for_single_worker(
            &cluster,
            request.num_gpus,
            request.gpu_vendor,
            self.config.resource_split_tolerance,
        )
        .ok_or(ServiceError::NoQualifyingNode {
            num_gpus: request.num_gpus,
            vendor: request.gpu_vendor,
        })
    }

    /// Size worker groups on the cluster, resolving `num_workers == -1` to
    /// the cluster maximum first.
    pub async fn get_resources_for_worker_groups(
        &self,
        request: &WorkerGroupResourceRequest,
    ) -> Result<Vec<WorkerGroupAllocation>, ServiceError> {
        let cluster = self.ready_cluster(&request.cluster_id).await?;
        let num_workers = if request.num_workers < 0 {
            let resolved =
                partition::max_workers(&cluster, request.gpu_vendor, request.gpus_per_worker);
            debug!(
                cluster_id = %cluster.cluster_id,
                num_workers = resolved,
                "resolved worker count to cluster maximum"
            );
            resolved
        } else {
            request.num_workers as u32
        };
        let allocations = partition::partition_for_worker_groups(
            &cluster,
            num_workers,
            request.gpu_vendor,
            request.gpus_per_worker,
            self.config.resource_split_tolerance,
        )?;
        Ok(allocations)
    }

    pub async fn list_workspaces(&self, cluster_id: &str) -> Result<Vec<Workspace>, ServiceError> {
        Ok(self.repository.list(cluster_id).await?)
    }

    pub async fn get_workspace(&self, workspace_id: &str) -> Result<Workspace, ServiceError> {
        Ok(self.repository.get(workspace_id).await?)
    }

    /// Delete workspaces in order; stops at the first failing id.
    pub async fn delete_workspaces(
        &self,
        workspace_ids: &[String],
    ) -> Result<Vec<String>, ServiceError> {
        let mut deleted = Vec::with_capacity(workspace_ids.len());
        for workspace_id in workspace_ids {
            deleted.push(self.repository.delete(workspace_id).await?);
        }
        Ok(deleted)
    }

    /// Deploy a workspace onto its cluster.
    ///
    /// The cluster must be ready and the aggregate feasibility check must
    /// pass before the deploy request is issued. With `wait_for_ready`, the
    /// repository is polled until the workspace is running, has failed, or
    /// the configured timeout elapses.
    pub async fn deploy_workspace(
        &self,
        request: &DeployWorkspaceRequest,
        wait_for_ready: bool,
    ) -> Result<Workspace, ServiceError> {
        let cluster = self.ready_cluster(&request.cluster_id).await?;
        if !partition::has_enough_resources(&cluster, &request.resources) {
            return Err(ServiceError::InsufficientClusterResources);
        }

        let workspace_id = self.operations.deploy(request).await?;
        info!(
            workspace_id = %workspace_id,
            cluster_id = %request.cluster_id,
            name = %request.name,
            "deploy request accepted"
        );

        let workspace = self.repository.get(&workspace_id).await?;
        if !wait_for_ready {
            return Ok(workspace);
        }
        self.wait_until_running(workspace).await
    }

    async fn ready_cluster(&self, cluster_id: &str) -> Result<WorkspaceCluster, ServiceError> {
        let cluster = self.clusters.get_cluster(cluster_id).await?;
        if cluster.status != ClusterStatus::Ready {
            return Err(ServiceError::ClusterNotReady {
                name: cluster.name,
                status: cluster.status,
            });
        }
        Ok(cluster)
    }

    async fn wait_until_running(
        &self,
        mut workspace: Workspace,
    ) -> Result<Workspace, ServiceError> {
        let deadline = Instant::now() + self.config.deploy_timeout;
        loop {
            match workspace.status {
                WorkspaceStatus::Running => return Ok(workspace),
                WorkspaceStatus::Failed => {
                    return Err(ServiceError::DeployFailed {
                        name: workspace.name,
                        workspace_id: workspace.workspace_id,
                        status: WorkspaceStatus::Failed,
                    });
                }
                _ => {}
            }
            if Instant::now() >= deadline {
                return Err(ServiceError::Timeout(self.config.deploy_timeout));
            }
            sleep(self.config.poll_interval).await;
            workspace = self.repository.get(&workspace.workspace_id).await?;
        }
    }
}
