pub mod cluster;
pub mod offer;
pub mod resources;
pub mod template;
pub mod workspace;

pub use cluster::{ClusterStatus, CreateClusterRequest, ImportNodeRequest, WorkspaceCluster};
pub use offer::GpuOffer;
pub use resources::{
    AvailableClusterNodeResources, GpuVendor, GpuVendorPreference, WorkerGroupAllocation,
    WorkerResources,
};
pub use template::{TemplateVariable, WorkspaceTemplate};
pub use workspace::{DeployWorkspaceRequest, Workspace, WorkspaceAccessInfo, WorkspaceStatus};
