//! In-memory `PodStore` for tests

use super::PodStore;
use crate::error::{Error, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Pod;
use kube::ResourceExt;
use std::collections::HashMap;
use std::sync::Mutex;

#[derive(Default)]
pub struct FakePodStore {
    pods: Mutex<Vec<Pod>>,
    namespaces: Vec<String>,
    logs: HashMap<(String, String), String>,
    unavailable: bool,
    /// (namespace, name, container, tail_lines) of every log request
    pub log_requests: Mutex<Vec<(String, String, String, i64)>>,
}

impl FakePodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the API server were unreachable
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        self.namespaces.push(namespace.to_string());
        self
    }

    pub fn with_pod(self, pod: Pod) -> Self {
        self.pods.lock().unwrap().push(pod);
        self
    }

    pub fn with_log(mut self, pod: &str, container: &str, log: &str) -> Self {
        self.logs
            .insert((pod.to_string(), container.to_string()), log.to_string());
        self
    }

    pub fn pods(&self) -> Vec<Pod> {
        self.pods.lock().unwrap().clone()
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(Error::Upstream("connection refused".to_string()));
        }
        Ok(())
    }

    fn not_found(namespace: &str, name: &str) -> Error {
        Error::NotFound(format!("pods \"{}\" not found in {}", name, namespace))
    }
}

#[async_trait]
impl PodStore for FakePodStore {
    async fn list_pods(&self, namespace: &str) -> Result<Vec<Pod>> {
        self.check()?;
        Ok(self
            .pods()
            .into_iter()
            .filter(|p| namespace.is_empty() || p.namespace().as_deref() == Some(namespace))
            .collect())
    }

    async fn get_pod(&self, namespace: &str, name: &str) -> Result<Pod> {
        self.check()?;
        self.pods()
            .into_iter()
            .find(|p| p.namespace().as_deref() == Some(namespace) && p.name_any() == name)
            .ok_or_else(|| Self::not_found(namespace, name))
    }

    async fn replace_pod(&self, namespace: &str, pod: &Pod) -> Result<Pod> {
        self.check()?;
        let name = pod.name_any();
        let mut pods = self.pods.lock().unwrap();
        let slot = pods
            .iter_mut()
            .find(|p| p.namespace().as_deref() == Some(namespace) && p.name_any() == name)
            .ok_or_else(|| Self::not_found(namespace, &name))?;
        *slot = pod.clone();
        Ok(pod.clone())
    }

    async fn delete_pod(&self, namespace: &str, name: &str) -> Result<()> {
        self.check()?;
        let mut pods = self.pods.lock().unwrap();
        let before = pods.len();
        pods.retain(|p| !(p.namespace().as_deref() == Some(namespace) && p.name_any() == name));
        if pods.len() == before {
            return Err(Self::not_found(namespace, name));
        }
        Ok(())
    }

    async fn pod_logs(
        &self,
        namespace: &str,
        name: &str,
        container: &str,
        tail_lines: i64,
    ) -> Result<String> {
        self.check()?;
        self.log_requests.lock().unwrap().push((
            namespace.to_string(),
            name.to_string(),
            container.to_string(),
            tail_lines,
        ));
        self.logs
            .get(&(name.to_string(), container.to_string()))
            .cloned()
            .ok_or_else(|| Self::not_found(namespace, name))
    }

    async fn list_namespaces(&self) -> Result<Vec<String>> {
        self.check()?;
        Ok(self.namespaces.clone())
    }
}

/// Build a pod from its name, namespace, creation time and container names
pub fn pod(namespace: &str, name: &str, created: &str, containers: &[&str]) -> Pod {
    let containers: Vec<serde_json::Value> = containers
        .iter()
        .map(|c| serde_json::json!({"name": c, "image": format!("registry.local/{}:1.0", c)}))
        .collect();

    serde_json::from_value(serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "creationTimestamp": created,
        },
        "spec": {"containers": containers},
    }))
    .unwrap()
}
