//! Resource partitioning over a cluster's per-node spare capacity.
//!
//! Everything here is a pure, synchronous computation over an in-memory
//! cluster snapshot. Node order is significant: single-worker partitioning
//! walks `available_resources` front to back and the first qualifying node
//! wins.

use magnetar_common::{
    GpuVendor, GpuVendorPreference, WorkerGroupAllocation, WorkerResources, WorkspaceCluster,
};

use crate::error::PartitionError;

/// Nodes with fewer CPU cores than this never qualify for a worker.
const MIN_NODE_CPU_CORES: u32 = 2;

/// Nodes with less memory (GB) than this never qualify for a worker.
const MIN_NODE_MEMORY_GB: u64 = 10;

/// Nodes with less storage (GB) than this never qualify for a worker.
const MIN_NODE_STORAGE_GB: u64 = 20;

/// Minimum storage (GB) a computed allocation must retain to be usable.
const MIN_WORKER_STORAGE_GB: u64 = 10;

/// Storage (GB) held back for runtime scratch space whenever a worker
/// consumes an entire node.
const EPHEMERAL_STORAGE_RESERVE_GB: u64 = 10;

/// Compute the CPU/memory/storage share a single worker receives for
/// `num_requested_gpus` GPUs.
///
/// Nodes are scanned in stored order, filtered by vendor preference, and the
/// first qualifying node's allocation is returned. `None` means no node
/// qualifies.
pub fn partition_for_single_worker(
    cluster: &WorkspaceCluster,
    num_requested_gpus: u32,
    gpu_vendor_preference: GpuVendorPreference,
    resource_split_tolerance: f64,
) -> Option<WorkerResources> {
    for node in &cluster.available_resources {
        if !gpu_vendor_preference.admits(node.gpu_vendor) {
            continue;
        }
        if node.cpu_cores < MIN_NODE_CPU_CORES
            || node.memory_gb < MIN_NODE_MEMORY_GB
            || node.storage_gb < MIN_NODE_STORAGE_GB
        {
            continue;
        }

        if num_requested_gpus == 0 {
            if node.gpu_count > 0 {
                // A zero-GPU worker colocated with GPUs gets a token slice of
                // CPU and memory; storage stays unrestricted on this node.
                return Some(WorkerResources {
                    gpu_count: 0,
                    gpu_vendor: Some(node.gpu_vendor),
                    gpu_type: None,
                    cpu_cores: 1,
                    memory_gb: 1,
                    storage_gb: node.storage_gb,
                });
            }

            // CPU-only node: the worker takes the whole node.
            let (cpu_cores, memory_gb, storage_gb) = reduce_full_node(
                node.cpu_cores,
                node.memory_gb,
                node.storage_gb,
                resource_split_tolerance,
            );
            if storage_gb < MIN_WORKER_STORAGE_GB {
                continue;
            }
            return Some(WorkerResources {
                gpu_count: 0,
                gpu_vendor: Some(node.gpu_vendor),
                gpu_type: None,
                cpu_cores,
                memory_gb,
                storage_gb,
            });
        }

        if node.gpu_count < num_requested_gpus {
            continue;
        }

        let mut cpu_cores =
            (node.cpu_cores as u64 * num_requested_gpus as u64 / node.gpu_count as u64) as u32;
        let mut memory_gb = node.memory_gb * num_requested_gpus as u64 / node.gpu_count as u64;
        let mut storage_gb = node.storage_gb * num_requested_gpus as u64 / node.gpu_count as u64;

        if num_requested_gpus == node.gpu_count {
            (cpu_cores, memory_gb, storage_gb) =
                reduce_full_node(cpu_cores, memory_gb, storage_gb, resource_split_tolerance);
        }
        if storage_gb < MIN_WORKER_STORAGE_GB {
            continue;
        }

        return Some(WorkerResources {
            gpu_count: num_requested_gpus,
            gpu_vendor: Some(node.gpu_vendor),
            gpu_type: Some(node.gpu_type.clone()),
            cpu_cores,
            memory_gb,
            storage_gb,
        });
    }

    None
}

/// Trim a full-node allocation: CPU and memory each give up
/// `floor(value * tolerance)`; storage additionally holds back the
/// ephemeral scratch reserve.
fn reduce_full_node(
    cpu_cores: u32,
    memory_gb: u64,
    storage_gb: u64,
    tolerance: f64,
) -> (u32, u64, u64) {
    let cpu_cores = cpu_cores - (cpu_cores as f64 * tolerance).floor() as u32;
    let memory_gb = memory_gb - (memory_gb as f64 * tolerance).floor() as u64;
    let storage_gb = storage_gb
        .saturating_sub((storage_gb as f64 * tolerance).floor() as u64)
        .saturating_sub(EPHEMERAL_STORAGE_RESERVE_GB);
    (cpu_cores, memory_gb, storage_gb)
}

/// Partition `num_workers` homogeneous workers across the cluster's GPU
/// vendors, one allocation entry per vendor actually used.
///
/// The per-worker shape of each vendor group is bounded by the weakest node
/// of that vendor, so workers stay interchangeable. The per-worker tolerance
/// reduction here is `floor(value * (1 - tolerance))` for CPU and memory,
/// which rounds differently from the full-node reduction in
/// [`partition_for_single_worker`]; both behaviors are load-bearing.
pub fn partition_for_worker_groups(
    cluster: &WorkspaceCluster,
    num_workers: u32,
    gpu_vendor: GpuVendorPreference,
    gpus_per_worker: u32,
    resource_split_tolerance: f64,
) -> Result<Vec<WorkerGroupAllocation>, PartitionError> {
    let total_requested_gpus = num_workers as u64 * gpus_per_worker as u64;

    let split: Vec<(GpuVendor, u32)> = match gpu_vendor {
        GpuVendorPreference::Amd => {
            if vendor_gpu_total(cluster, GpuVendor::Amd) < total_requested_gpus {
                return Err(PartitionError::InsufficientVendorGpus(GpuVendor::Amd));
            }
            vec![(GpuVendor::Amd, num_workers)]
        }
        GpuVendorPreference::Nvidia => {
            if vendor_gpu_total(cluster, GpuVendor::Nvidia) < total_requested_gpus {
                return Err(PartitionError::InsufficientVendorGpus(GpuVendor::Nvidia));
            }
            vec![(GpuVendor::Nvidia, num_workers)]
        }
        GpuVendorPreference::Auto => split_workers_auto(cluster, num_workers, gpus_per_worker)?,
    };

    let mut allocations = Vec::new();
    for (vendor, workers) in split {
        if workers == 0 {
            continue;
        }
        let Some(resources) =
            group_worker_resources(cluster, vendor, gpus_per_worker, resource_split_tolerance)
        else {
            continue;
        };
        allocations.push(WorkerGroupAllocation {
            num_workers: workers,
            resources,
        });
    }
    Ok(allocations)
}

/// Coarse, vendor-agnostic feasibility pre-check: each requested quantity
/// must not exceed the cluster-wide sum. A passing check does not guarantee
/// a qualifying node or placement exists.
pub fn has_enough_resources(cluster: &WorkspaceCluster, demand: &WorkerResources) -> bool {
    let mut gpus = 0u64;
    let mut cpus = 0u64;
    let mut memory_gb = 0u64;
    let mut storage_gb = 0u64;
    for node in &cluster.available_resources {
        gpus += node.gpu_count as u64;
        cpus += node.cpu_cores as u64;
        memory_gb += node.memory_gb;
        storage_gb += node.storage_gb;
    }
    demand.gpu_count as u64 <= gpus
        && demand.cpu_cores as u64 <= cpus
        && demand.memory_gb <= memory_gb
        && demand.storage_gb <= storage_gb
}

/// The largest worker count the cluster can host at `gpus_per_worker` GPUs
/// each, under the given vendor preference.
pub fn max_workers(
    cluster: &WorkspaceCluster,
    gpu_vendor: GpuVendorPreference,
    gpus_per_worker: u32,
) -> u32 {
    let gpus = match gpu_vendor {
        GpuVendorPreference::Amd => vendor_gpu_total(cluster, GpuVendor::Amd),
        GpuVendorPreference::Nvidia => vendor_gpu_total(cluster, GpuVendor::Nvidia),
        GpuVendorPreference::Auto => {
            vendor_gpu_total(cluster, GpuVendor::Amd) + vendor_gpu_total(cluster, GpuVendor::Nvidia)
        }
    };
    (gpus / gpus_per_worker.max(1) as u64) as u32
}

fn vendor_gpu_total(cluster: &WorkspaceCluster, vendor: GpuVendor) -> u64 {
    cluster
        .available_resources
        .iter()
        .filter(|n| n.gpu_vendor == vendor)
        .map(|n| n.gpu_count as u64)
        .sum()
}

/// Split `num_workers` across AMD and NVIDIA proportionally to each vendor's
/// share of available GPUs, via largest-remainder apportionment.
///
/// Floor quotas are always vendor-feasible because the overall demand fits
/// the cluster; leftover workers are handed out by largest fractional
/// remainder, preferring vendors that still have a whole worker's GPUs
/// unassigned. When no vendor does, the largest remainder wins anyway so the
/// requested worker count is always honored.
fn split_workers_auto(
    cluster: &WorkspaceCluster,
    num_workers: u32,
    gpus_per_worker: u32,
) -> Result<Vec<(GpuVendor, u32)>, PartitionError> {
    let vendors = [GpuVendor::Amd, GpuVendor::Nvidia];
    let totals: Vec<u64> = vendors
        .iter()
        .map(|v| vendor_gpu_total(cluster, *v))
        .collect();
    let total: u64 = totals.iter().sum();
    let requested = num_workers as u64 * gpus_per_worker as u64;

    if total < requested {
        return Err(PartitionError::InsufficientGpus);
    }
    if total == 0 {
        return Ok(vendors.iter().map(|v| (*v, 0)).collect());
    }

    let mut assigned: Vec<u32> = Vec::with_capacity(vendors.len());
    let mut remainders: Vec<(usize, u64)> = Vec::with_capacity(vendors.len());
    for (i, &vendor_gpus) in totals.iter().enumerate() {
        let quota_numerator = num_workers as u64 * vendor_gpus;
        assigned.push((quota_numerator / total) as u32);
        remainders.push((i, quota_numerator % total));
    }

    // Largest remainder first; the sort is stable so ties keep vendor order.
    remainders.sort_by(|a, b| b.1.cmp(&a.1));

    let mut leftover = num_workers - assigned.iter().sum::<u32>();
    while leftover > 0 {
        let next = remainders
            .iter()
            .map(|&(i, _)| i)
            .find(|&i| totals[i] >= (assigned[i] as u64 + 1) * gpus_per_worker as u64)
            .or_else(|| remainders.first().map(|&(i, _)| i));
        let Some(i) = next else { break };
        assigned[i] += 1;
        leftover -= 1;
    }

    Ok(vendors.iter().copied().zip(assigned).collect())
}

/// The homogeneous per-worker shape for one vendor group: the minimum
/// per-GPU CPU/memory/storage share across the vendor's nodes, scaled by
/// `gpus_per_worker`, with the `(1 - tolerance)` reduction applied to CPU
/// and memory.
fn group_worker_resources(
    cluster: &WorkspaceCluster,
    vendor: GpuVendor,
    gpus_per_worker: u32,
    resource_split_tolerance: f64,
) -> Option<WorkerResources> {
    let mut per_gpu_cpu = u32::MAX;
    let mut per_gpu_memory = u64::MAX;
    let mut per_gpu_storage = u64::MAX;
    let mut gpu_type: Option<String> = None;
    let mut uniform_type = true;

    for node in cluster
        .available_resources
        .iter()
        .filter(|n| n.gpu_vendor == vendor && n.gpu_count > 0)
    {
        per_gpu_cpu = per_gpu_cpu.min(node.cpu_cores / node.gpu_count);
        per_gpu_memory = per_gpu_memory.min(node.memory_gb / node.gpu_count as u64);
        per_gpu_storage = per_gpu_storage.min(node.storage_gb / node.gpu_count as u64);
        match &gpu_type {
            None => gpu_type = Some(node.gpu_type.clone()),
            Some(t) if *t != node.gpu_type => uniform_type = false,
            Some(_) => {}
        }
    }
    if per_gpu_cpu == u32::MAX {
        return None;
    }

    let cpu_cores = per_gpu_cpu * gpus_per_worker;
    let memory_gb = per_gpu_memory * gpus_per_worker as u64;
    let storage_gb = per_gpu_storage * gpus_per_worker as u64;

    Some(WorkerResources {
        gpu_count: gpus_per_worker,
        gpu_vendor: Some(vendor),
        gpu_type: if uniform_type { gpu_type } else { None },
        cpu_cores: (cpu_cores as f64 * (1.0 - resource_split_tolerance)).floor() as u32,
        memory_gb: (memory_gb as f64 * (1.0 - resource_split_tolerance)).floor() as u64,
        storage_gb,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use magnetar_common::{AvailableClusterNodeResources, ClusterStatus};

    fn make_node(
        id: &str,
        vendor: GpuVendor,
        gpu_type: &str,
        gpus: u32,
        cpus: u32,
        memory_gb: u64,
        storage_gb: u64,
    ) -> AvailableClusterNodeResources {
        AvailableClusterNodeResources {
            node_id: id.to_string(),
            node_name: format!("node-{id}"),
            endpoint: None,
            gpu_type: gpu_type.to_string(),
            gpu_vendor: vendor,
            gpu_count: gpus,
            cpu_cores: cpus,
            memory_gb,
            storage_gb,
        }
    }

    fn make_cluster(nodes: Vec<AvailableClusterNodeResources>) -> WorkspaceCluster {
        WorkspaceCluster {
            cluster_id: "c1".to_string(),
            name: "test-cluster".to_string(),
            status: ClusterStatus::Ready,
            available_resources: nodes,
        }
    }

    /// AMD 8x96/512/2000, NVIDIA 4x64/256/1000, NVIDIA 1x16/64/250.
    fn mixed_cluster() -> WorkspaceCluster {
        make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
            make_node("n1", GpuVendor::Nvidia, "H100", 4, 64, 256, 1000),
            make_node("n2", GpuVendor::Nvidia, "H100", 1, 16, 64, 250),
        ])
    }

    #[test]
    fn test_partial_request_is_exact_ratio() {
        let cluster = mixed_cluster();
        let alloc =
            partition_for_single_worker(&cluster, 1, GpuVendorPreference::Amd, 0.0).unwrap();
        assert_eq!(alloc.gpu_count, 1);
        assert_eq!(alloc.gpu_vendor, Some(GpuVendor::Amd));
        assert_eq!(alloc.gpu_type.as_deref(), Some("MI300X"));
        assert_eq!(alloc.cpu_cores, 12);
        assert_eq!(alloc.memory_gb, 64);
        assert_eq!(alloc.storage_gb, 250);
    }

    #[test]
    fn test_partial_request_ignores_tolerance() {
        let cluster = mixed_cluster();
        let alloc =
            partition_for_single_worker(&cluster, 1, GpuVendorPreference::Amd, 0.25).unwrap();
        assert_eq!(alloc.cpu_cores, 12);
        assert_eq!(alloc.memory_gb, 64);
        assert_eq!(alloc.storage_gb, 250);
    }

    #[test]
    fn test_full_node_applies_tolerance_and_reserve() {
        let cluster = mixed_cluster();
        let alloc =
            partition_for_single_worker(&cluster, 8, GpuVendorPreference::Amd, 0.1).unwrap();
        assert_eq!(alloc.cpu_cores, 87); // 96 - floor(9.6)
        assert_eq!(alloc.memory_gb, 461); // 512 - floor(51.2)
        assert_eq!(alloc.storage_gb, 1790); // 2000 - 200 - 10
    }

    #[test]
    fn test_first_matching_node_wins_within_vendor() {
        let cluster = mixed_cluster();
        let alloc =
            partition_for_single_worker(&cluster, 2, GpuVendorPreference::Nvidia, 0.0).unwrap();
        // The 4-GPU node is declared first and covers the request; the 1-GPU
        // node is never considered.
        assert_eq!(alloc.cpu_cores, 32);
        assert_eq!(alloc.memory_gb, 128);
        assert_eq!(alloc.storage_gb, 500);
    }

    #[test]
    fn test_vendor_preference_skips_other_vendors() {
        let cluster = make_cluster(vec![
            make_node("n1", GpuVendor::Nvidia, "H100", 4, 64, 256, 1000),
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
        ]);
        let alloc =
            partition_for_single_worker(&cluster, 1, GpuVendorPreference::Amd, 0.0).unwrap();
        assert_eq!(alloc.gpu_vendor, Some(GpuVendor::Amd));
        assert_eq!(alloc.cpu_cores, 12);
    }

    #[test]
    fn test_baseline_eligibility_skips_undersized_nodes() {
        let cluster = make_cluster(vec![
            make_node("tiny-cpu", GpuVendor::Nvidia, "T4", 1, 1, 64, 250),
            make_node("tiny-mem", GpuVendor::Nvidia, "T4", 1, 8, 4, 250),
            make_node("tiny-disk", GpuVendor::Nvidia, "T4", 1, 8, 64, 16),
        ]);
        assert_eq!(
            partition_for_single_worker(&cluster, 1, GpuVendorPreference::Auto, 0.0),
            None
        );
    }

    #[test]
    fn test_no_node_with_enough_gpus() {
        let cluster = mixed_cluster();
        assert_eq!(
            partition_for_single_worker(&cluster, 16, GpuVendorPreference::Auto, 0.0),
            None
        );
    }

    #[test]
    fn test_storage_floor_disqualifies_node() {
        // 1/8 of 64 GB storage is 8 GB, below the usable floor.
        let cluster = make_cluster(vec![make_node(
            "a1",
            GpuVendor::Amd,
            "MI300X",
            8,
            96,
            512,
            64,
        )]);
        assert_eq!(
            partition_for_single_worker(&cluster, 1, GpuVendorPreference::Auto, 0.0),
            None
        );
    }

    #[test]
    fn test_zero_gpu_request_on_gpu_node_gets_token_slice() {
        let cluster = mixed_cluster();
        let alloc =
            partition_for_single_worker(&cluster, 0, GpuVendorPreference::Auto, 0.1).unwrap();
        assert_eq!(alloc.gpu_count, 0);
        assert_eq!(alloc.gpu_vendor, Some(GpuVendor::Amd));
        assert_eq!(alloc.cpu_cores, 1);
        assert_eq!(alloc.memory_gb, 1);
        assert_eq!(alloc.storage_gb, 2000);
    }

    #[test]
    fn test_zero_gpu_request_on_cpu_only_node_takes_whole_node() {
        let cluster = make_cluster(vec![make_node(
            "cpu1",
            GpuVendor::NoGpu,
            "",
            0,
            32,
            128,
            500,
        )]);
        let alloc =
            partition_for_single_worker(&cluster, 0, GpuVendorPreference::Auto, 0.1).unwrap();
        assert_eq!(alloc.gpu_count, 0);
        assert_eq!(alloc.gpu_vendor, Some(GpuVendor::NoGpu));
        assert_eq!(alloc.cpu_cores, 29); // 32 - floor(3.2)
        assert_eq!(alloc.memory_gb, 116); // 128 - floor(12.8)
        assert_eq!(alloc.storage_gb, 440); // 500 - 50 - 10
    }

    #[test]
    fn test_has_enough_resources_sums_all_vendors() {
        let cluster = mixed_cluster();
        let demand = WorkerResources {
            gpu_count: 13,
            gpu_vendor: None,
            gpu_type: None,
            cpu_cores: 176,
            memory_gb: 832,
            storage_gb: 3250,
        };
        assert!(has_enough_resources(&cluster, &demand));

        let mut too_many_gpus = demand.clone();
        too_many_gpus.gpu_count = 14;
        assert!(!has_enough_resources(&cluster, &too_many_gpus));

        let mut too_much_memory = demand.clone();
        too_much_memory.memory_gb = 833;
        assert!(!has_enough_resources(&cluster, &too_much_memory));
    }

    #[test]
    fn test_worker_groups_proportional_split() {
        // 8 AMD + 5 NVIDIA GPUs, 13 single-GPU workers.
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
            make_node("n1", GpuVendor::Nvidia, "H100", 5, 80, 320, 1250),
        ]);
        let allocations =
            partition_for_worker_groups(&cluster, 13, GpuVendorPreference::Auto, 1, 0.0).unwrap();
        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[0].num_workers, 8);
        assert_eq!(allocations[0].resources.gpu_vendor, Some(GpuVendor::Amd));
        assert_eq!(allocations[1].num_workers, 5);
        assert_eq!(allocations[1].resources.gpu_vendor, Some(GpuVendor::Nvidia));
    }

    #[test]
    fn test_worker_groups_split_with_leftover() {
        // 3 AMD + 3 NVIDIA GPUs, 3 workers at 2 GPUs each.
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI250", 3, 48, 192, 750),
            make_node("n1", GpuVendor::Nvidia, "A100", 3, 48, 192, 750),
        ]);
        let allocations =
            partition_for_worker_groups(&cluster, 3, GpuVendorPreference::Auto, 2, 0.0).unwrap();
        assert_eq!(allocations.len(), 2);
        assert_eq!(allocations[0].num_workers, 2);
        assert_eq!(allocations[0].resources.gpu_vendor, Some(GpuVendor::Amd));
        assert_eq!(allocations[1].num_workers, 1);
        assert_eq!(allocations[1].resources.gpu_vendor, Some(GpuVendor::Nvidia));
    }

    #[test]
    fn test_worker_groups_total_always_matches_request() {
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
            make_node("n1", GpuVendor::Nvidia, "H100", 5, 80, 320, 1250),
        ]);
        for requested in 1..=13u32 {
            let allocations =
                partition_for_worker_groups(&cluster, requested, GpuVendorPreference::Auto, 1, 0.0)
                    .unwrap();
            let total: u32 = allocations.iter().map(|a| a.num_workers).sum();
            assert_eq!(total, requested, "requested {requested} workers");
        }
    }

    #[test]
    fn test_worker_groups_explicit_vendor_insufficient() {
        let cluster = mixed_cluster();
        let err = partition_for_worker_groups(&cluster, 3, GpuVendorPreference::Nvidia, 2, 0.0)
            .unwrap_err();
        assert_eq!(err, PartitionError::InsufficientVendorGpus(GpuVendor::Nvidia));
        assert_eq!(err.to_string(), "cluster does not have enough NVIDIA GPUs");
    }

    #[test]
    fn test_worker_groups_auto_insufficient() {
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI250", 3, 48, 192, 750),
            make_node("n1", GpuVendor::Nvidia, "A100", 3, 48, 192, 750),
        ]);
        let err =
            partition_for_worker_groups(&cluster, 7, GpuVendorPreference::Auto, 1, 0.0).unwrap_err();
        assert_eq!(err, PartitionError::InsufficientGpus);
        assert_eq!(err.to_string(), "cluster does not have enough GPUs available");
    }

    #[test]
    fn test_worker_group_shape_bounded_by_weakest_node() {
        // Per-GPU shares: 12/64/250 on the big node, 8/32/125 on the small one.
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
            make_node("a2", GpuVendor::Amd, "MI300X", 4, 32, 128, 500),
        ]);
        let allocations =
            partition_for_worker_groups(&cluster, 2, GpuVendorPreference::Amd, 2, 0.1).unwrap();
        assert_eq!(allocations.len(), 1);
        let resources = &allocations[0].resources;
        assert_eq!(resources.gpu_count, 2);
        assert_eq!(resources.gpu_type.as_deref(), Some("MI300X"));
        assert_eq!(resources.cpu_cores, 14); // floor(2 * 8 * 0.9)
        assert_eq!(resources.memory_gb, 57); // floor(2 * 32 * 0.9)
        assert_eq!(resources.storage_gb, 250); // no tolerance on storage
    }

    #[test]
    fn test_worker_group_mixed_gpu_types_drop_type_label() {
        let cluster = make_cluster(vec![
            make_node("n1", GpuVendor::Nvidia, "H100", 4, 64, 256, 1000),
            make_node("n2", GpuVendor::Nvidia, "A100", 4, 64, 256, 1000),
        ]);
        let allocations =
            partition_for_worker_groups(&cluster, 2, GpuVendorPreference::Nvidia, 1, 0.0).unwrap();
        assert_eq!(allocations[0].resources.gpu_type, None);
    }

    #[test]
    fn test_max_workers_per_vendor_preference() {
        let cluster = make_cluster(vec![
            make_node("a1", GpuVendor::Amd, "MI300X", 8, 96, 512, 2000),
            make_node("n1", GpuVendor::Nvidia, "H100", 5, 80, 320, 1250),
        ]);
        assert_eq!(max_workers(&cluster, GpuVendorPreference::Auto, 2), 6);
        assert_eq!(max_workers(&cluster, GpuVendorPreference::Amd, 2), 4);
        assert_eq!(max_workers(&cluster, GpuVendorPreference::Nvidia, 2), 2);
        assert_eq!(max_workers(&cluster, GpuVendorPreference::Auto, 1), 13);
    }
}
