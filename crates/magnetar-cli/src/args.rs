use clap::{Parser, Subcommand, ValueEnum};

use magnetar_common::GpuVendorPreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Debug, Parser)]
#[command(name = "magnetar")]
#[command(about = "Magnetar CLI for GPU cluster and workspace management", long_about = None)]
pub struct Args {
    /// API base URL
    #[arg(
        long,
        env = "MAGNETAR_API_URL",
        default_value = "http://127.0.0.1:8080"
    )]
    pub api_url: String,

    /// API token (Authorization: Bearer)
    #[arg(long, env = "MAGNETAR_API_TOKEN")]
    pub token: Option<String>,

    /// Output format
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Fraction of a full node's resources held back as headroom (0 to 1)
    #[arg(long, global = true, default_value_t = 0.1)]
    pub resource_split_tolerance: f64,

    /// Seconds between readiness poll fetches
    #[arg(long, global = true, default_value_t = 5)]
    pub poll_interval_secs: u64,

    /// Bound in seconds on --wait polling
    #[arg(long, global = true, default_value_t = 600)]
    pub deploy_timeout_secs: u64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Cloud GPU offers
    Offer {
        #[command(subcommand)]
        subcommand: OfferCommand,
    },
    /// Cluster management
    Cluster {
        #[command(subcommand)]
        subcommand: ClusterCommand,
    },
    /// Node management
    Node {
        #[command(subcommand)]
        subcommand: NodeCommand,
    },
    /// Workspace templates
    Template {
        #[command(subcommand)]
        subcommand: TemplateCommand,
    },
    /// Workspace management
    Workspace {
        #[command(subcommand)]
        subcommand: WorkspaceCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum OfferCommand {
    /// List available cloud GPU offers
    List,
}

#[derive(Debug, Subcommand)]
pub enum ClusterCommand {
    /// List clusters
    List,
    /// Show one cluster and its per-node available resources
    Get { cluster_id: String },
    /// Create an empty cluster
    Create {
        /// Cluster name
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum NodeCommand {
    /// Import an existing machine into a cluster
    Import {
        #[arg(long)]
        cluster_id: String,

        /// Node name
        #[arg(long)]
        name: String,

        /// Address the backend should reach the node at
        #[arg(long)]
        endpoint: String,

        /// Cloud provider the node was rented from
        #[arg(long)]
        provider: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum TemplateCommand {
    /// List workspace templates
    List,
}

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommand {
    /// List workspaces on a cluster
    List {
        #[arg(long)]
        cluster_id: String,
    },
    /// Show one workspace
    Get { workspace_id: String },
    /// Delete workspaces by id
    Delete {
        #[arg(required = true)]
        workspace_ids: Vec<String>,
    },
    /// Compute worker resource allocations without deploying
    Resources {
        #[arg(long)]
        cluster_id: String,

        /// Size a single worker for this many GPUs
        #[arg(long, conflicts_with_all = ["num_workers", "gpus_per_worker"])]
        num_gpus: Option<u32>,

        /// GPU vendor preference: auto, amd or nvidia
        #[arg(long, default_value = "auto")]
        gpu_vendor: GpuVendorPreference,

        /// Size worker groups for this many workers (-1 = cluster maximum)
        #[arg(long, allow_negative_numbers = true)]
        num_workers: Option<i64>,

        /// GPUs per worker when sizing worker groups
        #[arg(long, default_value_t = 1)]
        gpus_per_worker: u32,
    },
    /// Deploy a workspace from a template
    Deploy {
        #[arg(long)]
        cluster_id: String,

        /// Workspace name
        #[arg(long)]
        name: String,

        #[arg(long)]
        template_id: String,

        /// Template variable as KEY=VALUE (repeatable)
        #[arg(long = "var", value_parser = parse_key_val)]
        vars: Vec<(String, String)>,

        /// GPUs for the worker
        #[arg(long, default_value_t = 1)]
        num_gpus: u32,

        /// GPU vendor preference: auto, amd or nvidia
        #[arg(long, default_value = "auto")]
        gpu_vendor: GpuVendorPreference,

        #[arg(long)]
        description: Option<String>,

        /// Expiry timestamp (RFC 3339)
        #[arg(long)]
        expires_at: Option<String>,

        /// Block until the workspace is running
        #[arg(long)]
        wait: bool,
    },
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("invalid KEY=VALUE: '{}'", s)),
    }
}
