use anyhow::{bail, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use magnetar_common::{
    AvailableClusterNodeResources, CreateClusterRequest, DeployWorkspaceRequest, GpuOffer,
    ImportNodeRequest, Workspace, WorkspaceCluster, WorkspaceTemplate,
};
use magnetar_core::ports::{
    ClustersProvider, WorkspaceOperations, WorkspaceRepository, WorkspaceTemplatesProvider,
};

/// REST client for the magnetar backend; implements the core's ports.
pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{}", self.base_url, path)
    }

    fn auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.auth(self.http.get(self.url(path))).send().await?;
        if !resp.status().is_success() {
            bail!(
                "GET {} failed: {} {}",
                path,
                resp.status(),
                resp.text().await.unwrap_or_default()
            );
        }
        Ok(resp.json().await?)
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let resp = self
            .auth(self.http.post(self.url(path)))
            .json(body)
            .send()
            .await?;
        if !resp.status().is_success() {
            bail!(
                "POST {} failed: {} {}",
                path,
                resp.status(),
                resp.text().await.unwrap_or_default()
            );
        }
        Ok(resp.json().await?)
    }

    pub async fn list_offers(&self) -> Result<Vec<GpuOffer>> {
        self.get_json("/offers").await
    }

    pub async fn create_cluster(&self, request: &CreateClusterRequest) -> Result<WorkspaceCluster> {
        self.post_json("/clusters", request).await
    }

    pub async fn import_node(
        &self,
        request: &ImportNodeRequest,
    ) -> Result<AvailableClusterNodeResources> {
        self.post_json("/nodes/import", request).await
    }
}

#[async_trait]
impl ClustersProvider for ApiClient {
    async fn list_clusters(&self) -> Result<Vec<WorkspaceCluster>> {
        self.get_json("/clusters").await
    }

    async fn get_cluster(&self, cluster_id: &str) -> Result<WorkspaceCluster> {
        self.get_json(&format!("/clusters/{}", cluster_id)).await
    }
}

#[async_trait]
impl WorkspaceTemplatesProvider for ApiClient {
    async fn list_workspace_templates(&self) -> Result<Vec<WorkspaceTemplate>> {
        self.get_json("/templates").await
    }
}

#[async_trait]
impl WorkspaceOperations for ApiClient {
    async fn deploy(&self, parameters: &DeployWorkspaceRequest) -> Result<String> {
        #[derive(Deserialize)]
        struct DeployResponse {
            workspace_id: String,
        }
        let resp: DeployResponse = self.post_json("/workspaces", parameters).await?;
        Ok(resp.workspace_id)
    }
}

#[async_trait]
impl WorkspaceRepository for ApiClient {
    async fn list(&self, cluster_id: &str) -> Result<Vec<Workspace>> {
        self.get_json(&format!("/clusters/{}/workspaces", cluster_id))
            .await
    }

    async fn get(&self, workspace_id: &str) -> Result<Workspace> {
        self.get_json(&format!("/workspaces/{}", workspace_id)).await
    }

    async fn delete(&self, workspace_id: &str) -> Result<String> {
        let path = format!("/workspaces/{}", workspace_id);
        let resp = self.auth(self.http.delete(self.url(&path))).send().await?;
        if !resp.status().is_success() {
            bail!(
                "DELETE {} failed: {} {}",
                path,
                resp.status(),
                resp.text().await.unwrap_or_default()
            );
        }
        Ok(workspace_id.to_string())
    }
}
