//! Access to pods and namespaces on the cluster

use crate::error::Result;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::{Namespace, Pod};
use kube::api::{Api, DeleteParams, ListParams, LogParams, PostParams};
use kube::{Client, ResourceExt};

/// Operations the pod service needs from the Kubernetes API
///
/// `KubePodStore` is the real implementation; tests use an in-memory one.
#[async_trait]
pub trait PodStore: Send + Sync {
    /// List pods in a namespace. An empty namespace lists across all namespaces.
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>>;

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod>;

    /// Replace a pod with the given object. The name comes from its metadata.
    async fn replace_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod>;

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()>;

    /// Fetch the last `tail_lines` lines of a container log
    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: &str,
        tail_lines: i64,
    ) -> Result<String>;

    /// Names of all namespaces, in API order
    async fn list_namespaces(&self) -> Result<Vec<String>>;
}

/// `PodStore` backed by a live cluster
#[derive(Clone)]
pub struct KubePodStore {
    client: Client,
}

impl KubePodStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn pods(&self, namespace: &str) -> Api<Pod> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }
}

#[async_trait]
impl PodStore for KubePodStore {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        let list = self.pods(namespace).list(&ListParams::default()).await?;
        Ok(list.items)
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        Ok(self.pods(namespace).get(name).await?)
    }

    async fn replace_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod> {
        let name = pod.name_any();
        Ok(self
            .pods(namespace)
            .replace(&name, &PostParams::default(), pod)
            .await?)
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        self.pods(namespace)
            .delete(name, &DeleteParams::default())
            .await?;
        Ok(())
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: &str,
        tail_lines: i64,
    ) -> Result<String> {
        let params = LogParams {
            container: (!container.is_empty()).then(|| container.to_string()),
            tail_lines: Some(tail_lines),
            ..Default::default()
        };
        Ok(self.pods(namespace).logs(name, &params).await?)
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items.iter().map(|ns| ns.name_any()).collect())
    }
}
