use anyhow::Result;
use serde::Serialize;

use magnetar_common::{
    GpuOffer, WorkerGroupAllocation, WorkerResources, Workspace, WorkspaceCluster,
    WorkspaceTemplate,
};

use crate::args::OutputFormat;

/// Render `value` as a table via `table`, or as pretty JSON/YAML.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Table => table(value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
    }
    Ok(())
}

pub fn print_offers(offers: &[GpuOffer]) {
    println!("\n=== GPU Offers ===\n");
    if offers.is_empty() {
        println!("No offers found.");
        return;
    }
    println!(
        "{:<14} {:<12} {:<12} {:<10} {:>5} {:>6} {:>8} {:>9} {:>9}",
        "Offer ID", "Provider", "Region", "GPU", "GPUs", "CPUs", "Mem(GB)", "Disk(GB)", "$/hr"
    );
    println!("{:-<95}", "");
    for offer in offers {
        println!(
            "{:<14} {:<12} {:<12} {:<10} {:>5} {:>6} {:>8} {:>9} {:>9.2}",
            offer.offer_id,
            offer.provider,
            offer.region,
            offer.gpu_type,
            offer.gpu_count,
            offer.cpu_cores,
            offer.memory_gb,
            offer.storage_gb,
            offer.price_per_hour_usd,
        );
    }
    println!();
}

pub fn print_clusters(clusters: &[WorkspaceCluster]) {
    println!("\n=== Clusters ===\n");
    if clusters.is_empty() {
        println!("No clusters found.");
        return;
    }
    println!("{:<20} {:<25} {:<12} {:>6}", "Cluster ID", "Name", "Status", "Nodes");
    println!("{:-<70}", "");
    for cluster in clusters {
        println!(
            "{:<20} {:<25} {:<12} {:>6}",
            cluster.cluster_id,
            cluster.name,
            format!("{:?}", cluster.status),
            cluster.available_resources.len(),
        );
    }
    println!();
}

pub fn print_cluster_detail(cluster: &WorkspaceCluster) {
    println!("\n=== Cluster Detail ===\n");
    println!("  ID:     {}", cluster.cluster_id);
    println!("  Name:   {}", cluster.name);
    println!("  Status: {:?}", cluster.status);

    println!("\n  [Available Node Resources]");
    if cluster.available_resources.is_empty() {
        println!("  (no nodes)");
    } else {
        println!(
            "  {:<20} {:<10} {:<10} {:>5} {:>6} {:>8} {:>9}",
            "Node", "Vendor", "GPU", "GPUs", "CPUs", "Mem(GB)", "Disk(GB)"
        );
        for node in &cluster.available_resources {
            println!(
                "  {:<20} {:<10} {:<10} {:>5} {:>6} {:>8} {:>9}",
                node.node_name,
                node.gpu_vendor.to_string(),
                node.gpu_type,
                node.gpu_count,
                node.cpu_cores,
                node.memory_gb,
                node.storage_gb,
            );
        }
    }
    println!();
}

pub fn print_templates(templates: &[WorkspaceTemplate]) {
    println!("\n=== Workspace Templates ===\n");
    if templates.is_empty() {
        println!("No templates found.");
        return;
    }
    println!("{:<20} {:<25} {:<40}", "Template ID", "Name", "Description");
    println!("{:-<90}", "");
    for template in templates {
        println!(
            "{:<20} {:<25} {:<40}",
            template.template_id,
            template.name,
            template.description.as_deref().unwrap_or(""),
        );
    }
    println!();
}

pub fn print_workspaces(workspaces: &[Workspace]) {
    println!("\n=== Workspaces ===\n");
    if workspaces.is_empty() {
        println!("No workspaces found.");
        return;
    }
    println!(
        "{:<20} {:<25} {:<20} {:<10} {:>14}",
        "Workspace ID", "Name", "Template", "Status", "Age"
    );
    println!("{:-<95}", "");
    for workspace in workspaces {
        println!(
            "{:<20} {:<25} {:<20} {:<10} {:>14}",
            workspace.workspace_id,
            workspace.name,
            workspace.template_name,
            format!("{:?}", workspace.status),
            format_age(workspace.created_at_ms),
        );
    }
    println!();
}

pub fn print_workspace_detail(workspace: &Workspace) {
    println!("\n=== Workspace Detail ===\n");
    println!("  ID:       {}", workspace.workspace_id);
    println!("  Name:     {}", workspace.name);
    println!("  Cluster:  {}", workspace.cluster_id);
    println!("  Template: {}", workspace.template_name);
    println!("  Status:   {:?}", workspace.status);
    println!("  Age:      {}", format_age(workspace.created_at_ms));

    if !workspace.access.is_empty() {
        println!("\n  [Access]");
        for access in &workspace.access {
            println!(
                "  {:<15} {}",
                access.name,
                access.url.as_deref().unwrap_or("N/A")
            );
        }
    }
    println!();
}

pub fn print_worker_resources(resources: &WorkerResources) {
    println!("\n=== Worker Resources ===\n");
    print_resource_lines(resources, "  ");
    println!();
}

pub fn print_worker_groups(allocations: &[WorkerGroupAllocation]) {
    println!("\n=== Worker Groups ===\n");
    if allocations.is_empty() {
        println!("No worker groups computed.");
        return;
    }
    for (i, allocation) in allocations.iter().enumerate() {
        println!("  [Group {}] {} worker(s)", i + 1, allocation.num_workers);
        print_resource_lines(&allocation.resources, "    ");
        println!();
    }
}

fn print_resource_lines(resources: &WorkerResources, indent: &str) {
    if let Some(vendor) = resources.gpu_vendor {
        println!("{indent}GPU vendor: {}", vendor);
    }
    if let Some(gpu_type) = &resources.gpu_type {
        println!("{indent}GPU type:   {}", gpu_type);
    }
    println!("{indent}GPUs:       {}", resources.gpu_count);
    println!("{indent}CPUs:       {}", resources.cpu_cores);
    println!("{indent}Memory:     {} GB", resources.memory_gb);
    println!("{indent}Storage:    {} GB", resources.storage_gb);
}

fn format_age(created_at_ms: u64) -> String {
    if created_at_ms == 0 {
        return "N/A".to_string();
    }
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64;
    let elapsed_secs = now.saturating_sub(created_at_ms) / 1000;
    match elapsed_secs {
        s if s < 60 => format!("{}s", s),
        s if s < 3600 => format!("{}m", s / 60),
        s if s < 86_400 => format!("{}h", s / 3600),
        s => format!("{}d", s / 86_400),
    }
}
