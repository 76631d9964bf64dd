use std::time::Duration;

/// Default fraction of a full node's resources held back as headroom.
pub const DEFAULT_RESOURCE_SPLIT_TOLERANCE: f64 = 0.1;

/// Default interval between readiness poll fetches.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default bound on the deploy readiness poll.
pub const DEFAULT_DEPLOY_TIMEOUT: Duration = Duration::from_secs(600);

/// Tunables for the workspace service, passed in explicitly at construction.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Safety margin in [0, 1) subtracted from full-node allocations so the
    /// node keeps room for its own overhead.
    pub resource_split_tolerance: f64,

    pub poll_interval: Duration,
    pub deploy_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            resource_split_tolerance: DEFAULT_RESOURCE_SPLIT_TOLERANCE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            deploy_timeout: DEFAULT_DEPLOY_TIMEOUT,
        }
    }
}
