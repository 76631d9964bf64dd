pub mod config;
pub mod error;
pub mod partition;
pub mod ports;
pub mod service;

pub use config::ServiceConfig;
pub use error::{PartitionError, ServiceError};
pub use service::{SingleWorkerResourceRequest, WorkerGroupResourceRequest, WorkspaceService};
