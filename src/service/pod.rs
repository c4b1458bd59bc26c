//! Pod operations behind the HTTP API

use crate::dataselect::{self, DataSelectQuery, PodCell, Selection};
use crate::error::{Error, Result};
use crate::k8s::PodStore;
use k8s_openapi::api::core::v1::Pod;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

/// Pod count for one namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespacePodCount {
    pub namespace: String,
    pub pod_num: usize,
}

/// Pod list, detail, update, delete, container and log operations
pub struct PodService {
    store: Arc<dyn PodStore>,
    log_tail_lines: i64,
}

impl PodService {
    pub fn new(store: Arc<dyn PodStore>, log_tail_lines: i64) -> Self {
        Self {
            store,
            log_tail_lines,
        }
    }

    /// List pods, filtered by name, newest first, one page at a time.
    ///
    /// `total` is the number of pods matching the filter across all pages.
    pub async fn get_pods(
        &self,
        filter_name: &str,
        namespace: &str,
        limit: i64,
        page: i64,
    ) -> Result<Selection<Pod>> {
        let pods = self.store.list_pods(namespace).await.inspect_err(|e| {
            error!(namespace = %namespace, error = %e, "Failed to list pods");
        })?;

        let query = DataSelectQuery::new(filter_name, limit, page);
        let selection = dataselect::select::<Pod, PodCell>(pods, &query);

        debug!(
            namespace = %namespace,
            filter = %filter_name,
            limit,
            page,
            total = selection.total,
            returned = selection.items.len(),
            "Selected pods"
        );
        Ok(selection)
    }

    pub async fn get_pod_detail(&self, pod_name: &str, namespace: &str) -> Result<Pod> {
        self.store
            .get_pod(namespace, pod_name)
            .await
            .inspect_err(|e| {
                error!(pod = %pod_name, namespace = %namespace, error = %e, "Failed to get pod");
            })
    }

    pub async fn delete_pod(&self, pod_name: &str, namespace: &str) -> Result<()> {
        self.store
            .delete_pod(namespace, pod_name)
            .await
            .inspect_err(|e| {
                error!(pod = %pod_name, namespace = %namespace, error = %e, "Failed to delete pod");
            })
    }

    /// Replace a pod with the JSON object in `content`.
    ///
    /// The object must carry `metadata.name`. When `pod_name` is given it has
    /// to agree with that name.
    pub async fn update_pod(&self, pod_name: &str, namespace: &str, content: &str) -> Result<()> {
        let pod: Pod = serde_json::from_str(content).inspect_err(|e| {
            error!(pod = %pod_name, error = %e, "Failed to deserialize pod");
        })?;

        let name = pod.metadata.name.as_deref().unwrap_or_default();
        if name.is_empty() {
            return Err(Error::InvalidPayload(
                "pod content is missing metadata.name".to_string(),
            ));
        }
        if !pod_name.is_empty() && pod_name != name {
            return Err(Error::InvalidPayload(format!(
                "pod name '{}' does not match metadata.name '{}'",
                pod_name, name
            )));
        }

        self.store
            .replace_pod(namespace, &pod)
            .await
            .inspect_err(|e| {
                error!(pod = %name, namespace = %namespace, error = %e, "Failed to update pod");
            })?;
        Ok(())
    }

    /// Container names from the pod spec, in declaration order
    pub async fn get_pod_containers(&self, pod_name: &str, namespace: &str) -> Result<Vec<String>> {
        let pod = self.get_pod_detail(pod_name, namespace).await?;

        Ok(pod
            .spec
            .map(|spec| spec.containers.into_iter().map(|c| c.name).collect())
            .unwrap_or_default())
    }

    /// Tail of a container log, bounded by the configured line limit
    pub async fn get_pod_log(
        &self,
        container_name: &str,
        pod_name: &str,
        namespace: &str,
    ) -> Result<String> {
        self.store
            .pod_logs(namespace, pod_name, container_name, self.log_tail_lines)
            .await
            .inspect_err(|e| {
                error!(
                    pod = %pod_name,
                    container = %container_name,
                    namespace = %namespace,
                    error = %e,
                    "Failed to get pod log"
                );
            })
    }

    /// Number of pods in every namespace. Stops at the first failure.
    pub async fn get_pod_num_per_namespace(&self) -> Result<Vec<NamespacePodCount>> {
        let namespaces = self.store.list_namespaces().await.inspect_err(|e| {
            error!(error = %e, "Failed to list namespaces");
        })?;

        let mut counts = Vec::with_capacity(namespaces.len());
        for namespace in namespaces {
            let pods = self.store.list_pods(&namespace).await.inspect_err(|e| {
                error!(namespace = %namespace, error = %e, "Failed to list pods");
            })?;
            counts.push(NamespacePodCount {
                pod_num: pods.len(),
                namespace,
            });
        }

        Ok(counts)
    }
}
