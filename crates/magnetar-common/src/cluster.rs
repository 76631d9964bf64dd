use serde::{Deserialize, Serialize};

use crate::resources::AvailableClusterNodeResources;

/// Lifecycle status of a workspace cluster.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ClusterStatus {
    Pending,
    Deploying,
    Ready,
    Failed,
    Unknown,
}

/// A managed GPU cluster together with its per-node spare capacity.
///
/// `available_resources` preserves the backend's reported node order.
/// Partitioning walks the list front to back and the first qualifying
/// node wins, so the order is load-bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceCluster {
    pub cluster_id: String,
    pub name: String,
    pub status: ClusterStatus,

    #[serde(default)]
    pub available_resources: Vec<AvailableClusterNodeResources>,
}

/// Request body for creating an empty cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClusterRequest {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for importing an existing machine into a cluster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportNodeRequest {
    pub cluster_id: String,
    pub name: String,

    /// Address the backend should reach the node at.
    pub endpoint: String,

    /// Cloud provider the node was rented from, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}
