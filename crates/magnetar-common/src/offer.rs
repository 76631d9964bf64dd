use serde::{Deserialize, Serialize};

use crate::resources::GpuVendor;

/// A rentable GPU machine offered by a cloud provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpuOffer {
    pub offer_id: String,
    pub provider: String,
    pub region: String,

    pub gpu_type: String,
    pub gpu_vendor: GpuVendor,
    pub gpu_count: u32,

    pub cpu_cores: u32,
    pub memory_gb: u64,
    pub storage_gb: u64,

    pub price_per_hour_usd: f64,
}
