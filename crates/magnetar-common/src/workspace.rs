use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resources::WorkerResources;

/// Lifecycle status of a deployed workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceStatus {
    Pending,
    Running,
    Stopped,
    Deleted,
    Failed,
    Unknown,
}

/// How a running workspace is reached (SSH endpoint, notebook URL, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkspaceAccessInfo {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A containerized workload deployed onto a cluster.
///
/// Created by the backend; observed read-only on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workspace {
    pub workspace_id: String,
    pub name: String,
    pub cluster_id: String,
    pub template_name: String,
    pub status: WorkspaceStatus,

    /// Creation timestamp (ms since epoch).
    #[serde(default)]
    pub created_at_ms: u64,

    #[serde(default)]
    pub access: Vec<WorkspaceAccessInfo>,
}

/// Deploy parameters, passed unmodified to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployWorkspaceRequest {
    pub cluster_id: String,
    pub name: String,
    pub template_id: String,

    /// Free-form key/value substitutions for the template.
    #[serde(default)]
    pub template_variables: HashMap<String, String>,

    /// The per-worker allocation the backend should carve out.
    pub resources: WorkerResources,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Expiry timestamp (ms since epoch). None means no expiry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at_ms: Option<u64>,
}
