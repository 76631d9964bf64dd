mod args;
mod client;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use magnetar_common::{CreateClusterRequest, DeployWorkspaceRequest, ImportNodeRequest};
use magnetar_core::{
    ServiceConfig, SingleWorkerResourceRequest, WorkerGroupResourceRequest, WorkspaceService,
};

use crate::args::{
    Args, ClusterCommand, Command, NodeCommand, OfferCommand, OutputFormat, TemplateCommand,
    WorkspaceCommand,
};
use crate::client::ApiClient;
use crate::output::{
    emit, print_cluster_detail, print_clusters, print_offers, print_templates,
    print_worker_groups, print_worker_resources, print_workspace_detail, print_workspaces,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let client = Arc::new(ApiClient::new(&args.api_url, args.token.clone()));
    let config = ServiceConfig {
        resource_split_tolerance: args.resource_split_tolerance,
        poll_interval: Duration::from_secs(args.poll_interval_secs),
        deploy_timeout: Duration::from_secs(args.deploy_timeout_secs),
    };
    let service = WorkspaceService::new(
        client.clone(),
        client.clone(),
        client.clone(),
        client.clone(),
        config,
    );

    match args.command {
        Command::Offer { subcommand } => match subcommand {
            OfferCommand::List => {
                let offers = client.list_offers().await?;
                emit(args.output, &offers, |o| print_offers(o))?;
            }
        },
        Command::Cluster { subcommand } => match subcommand {
            ClusterCommand::List => {
                let clusters = service.list_clusters().await?;
                emit(args.output, &clusters, |c| print_clusters(c))?;
            }
            ClusterCommand::Get { cluster_id } => {
                let cluster = service.get_cluster(&cluster_id).await?;
                emit(args.output, &cluster, print_cluster_detail)?;
            }
            ClusterCommand::Create { name, description } => {
                let cluster = client
                    .create_cluster(&CreateClusterRequest { name, description })
                    .await?;
                println!(
                    "✓ Cluster '{}' created (id: {})",
                    cluster.name, cluster.cluster_id
                );
            }
        },
        Command::Node { subcommand } => match subcommand {
            NodeCommand::Import {
                cluster_id,
                name,
                endpoint,
                provider,
            } => {
                let node = client
                    .import_node(&ImportNodeRequest {
                        cluster_id: cluster_id.clone(),
                        name,
                        endpoint,
                        provider,
                    })
                    .await?;
                println!(
                    "✓ Node '{}' imported into cluster {} (id: {})",
                    node.node_name, cluster_id, node.node_id
                );
            }
        },
        Command::Template { subcommand } => match subcommand {
            TemplateCommand::List => {
                let templates = service.get_workspace_templates().await?;
                emit(args.output, &templates, |t| print_templates(t))?;
            }
        },
        Command::Workspace { subcommand } => match subcommand {
            WorkspaceCommand::List { cluster_id } => {
                let workspaces = service.list_workspaces(&cluster_id).await?;
                emit(args.output, &workspaces, |w| print_workspaces(w))?;
            }
            WorkspaceCommand::Get { workspace_id } => {
                let workspace = service.get_workspace(&workspace_id).await?;
                emit(args.output, &workspace, print_workspace_detail)?;
            }
            WorkspaceCommand::Delete { workspace_ids } => {
                let deleted = service.delete_workspaces(&workspace_ids).await?;
                for workspace_id in deleted {
                    println!("✓ Workspace '{}' deleted", workspace_id);
                }
            }
            WorkspaceCommand::Resources {
                cluster_id,
                num_gpus,
                gpu_vendor,
                num_workers,
                gpus_per_worker,
            } => {
                if let Some(num_workers) = num_workers {
                    let allocations = service
                        .get_resources_for_worker_groups(&WorkerGroupResourceRequest {
                            cluster_id,
                            num_workers,
                            gpu_vendor,
                            gpus_per_worker,
                        })
                        .await?;
                    emit(args.output, &allocations, |a| print_worker_groups(a))?;
                } else {
                    let resources = service
                        .get_resources_for_single_node_worker(&SingleWorkerResourceRequest {
                            cluster_id,
                            num_gpus: num_gpus.unwrap_or(1),
                            gpu_vendor,
                        })
                        .await?;
                    emit(args.output, &resources, print_worker_resources)?;
                }
            }
            WorkspaceCommand::Deploy {
                cluster_id,
                name,
                template_id,
                vars,
                num_gpus,
                gpu_vendor,
                description,
                expires_at,
                wait,
            } => {
                let resources = service
                    .get_resources_for_single_node_worker(&SingleWorkerResourceRequest {
                        cluster_id: cluster_id.clone(),
                        num_gpus,
                        gpu_vendor,
                    })
                    .await?;

                let expires_at_ms = match &expires_at {
                    Some(raw) => {
                        Some(chrono::DateTime::parse_from_rfc3339(raw)?.timestamp_millis() as u64)
                    }
                    None => None,
                };

                let request = DeployWorkspaceRequest {
                    cluster_id,
                    name,
                    template_id,
                    template_variables: vars.into_iter().collect(),
                    resources,
                    description,
                    expires_at_ms,
                };
                let workspace = service.deploy_workspace(&request, wait).await?;

                if args.output == OutputFormat::Table {
                    println!(
                        "✓ Workspace '{}' deployed (id: {}, status: {:?})",
                        workspace.name, workspace.workspace_id, workspace.status
                    );
                    print_workspace_detail(&workspace);
                } else {
                    emit(args.output, &workspace, print_workspace_detail)?;
                }
            }
        },
    }

    Ok(())
}
