use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// GPU vendor reported by cluster telemetry for one node.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GpuVendor {
    Amd,
    Nvidia,
    NoGpu,
    Unknown,
}

impl fmt::Display for GpuVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GpuVendor::Amd => "AMD",
            GpuVendor::Nvidia => "NVIDIA",
            GpuVendor::NoGpu => "no-GPU",
            GpuVendor::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Caller-specified constraint restricting which nodes partitioning may draw from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GpuVendorPreference {
    #[default]
    Auto,
    Amd,
    Nvidia,
}

impl GpuVendorPreference {
    /// Whether a node with the given vendor may be considered under this preference.
    pub fn admits(&self, vendor: GpuVendor) -> bool {
        match self {
            GpuVendorPreference::Auto => true,
            GpuVendorPreference::Amd => vendor == GpuVendor::Amd,
            GpuVendorPreference::Nvidia => vendor == GpuVendor::Nvidia,
        }
    }
}

impl FromStr for GpuVendorPreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(GpuVendorPreference::Auto),
            "amd" => Ok(GpuVendorPreference::Amd),
            "nvidia" => Ok(GpuVendorPreference::Nvidia),
            other => Err(format!(
                "unknown GPU vendor '{}', available: auto, amd, nvidia",
                other
            )),
        }
    }
}

/// One physical node's spare capacity, snapshotted from live cluster
/// telemetry by the backend. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableClusterNodeResources {
    pub node_id: String,
    pub node_name: String,

    /// Reachable address of the node, when the backend exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Marketing label of the installed GPU, e.g. "H100" or "MI300X".
    pub gpu_type: String,
    pub gpu_vendor: GpuVendor,
    pub gpu_count: u32,

    pub cpu_cores: u32,
    pub memory_gb: u64,
    pub storage_gb: u64,
}

/// A resource demand or allocation vector for one worker.
///
/// Used both as caller input (desired GPU count) and as computed output
/// (allocated CPU/memory/storage shares).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerResources {
    pub gpu_count: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_vendor: Option<GpuVendor>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpu_type: Option<String>,

    pub cpu_cores: u32,
    pub memory_gb: u64,
    pub storage_gb: u64,
}

/// A homogeneous worker definition shared by `num_workers` workers, all
/// drawn from a single GPU vendor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerGroupAllocation {
    pub num_workers: u32,
    pub resources: WorkerResources,
}
