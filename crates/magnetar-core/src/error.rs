use std::time::Duration;

use thiserror::Error;

use magnetar_common::{ClusterStatus, GpuVendor, GpuVendorPreference, WorkspaceStatus};

/// Infeasibility raised by the worker-group partitioning algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PartitionError {
    #[error("cluster does not have enough {0} GPUs")]
    InsufficientVendorGpus(GpuVendor),

    #[error("cluster does not have enough GPUs available")]
    InsufficientGpus,
}

fn vendor_label(preference: &GpuVendorPreference) -> &'static str {
    match preference {
        GpuVendorPreference::Auto => "matching",
        GpuVendorPreference::Amd => "AMD",
        GpuVendorPreference::Nvidia => "NVIDIA",
    }
}

/// Failures surfaced by the workspace service.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("cluster '{name}' is not ready (status: {status:?})")]
    ClusterNotReady { name: String, status: ClusterStatus },

    #[error(
        "cluster does not have a node with at least {num_gpus} {} GPUs available",
        vendor_label(.vendor)
    )]
    NoQualifyingNode {
        num_gpus: u32,
        vendor: GpuVendorPreference,
    },

    #[error(transparent)]
    Infeasible(#[from] PartitionError),

    #[error("cluster does not have enough resources for this deployment")]
    InsufficientClusterResources,

    #[error("workspace '{name}' ({workspace_id}) failed to deploy (status: {status:?})")]
    DeployFailed {
        name: String,
        workspace_id: String,
        status: WorkspaceStatus,
    },

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("remote operation failed: {0}")]
    Remote(#[from] anyhow::Error),
}
