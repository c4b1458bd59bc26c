//! Kubernetes client construction

use crate::config::KubeSettings;
use anyhow::{Context, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use std::path::Path;

/// Build a client from an explicit kubeconfig, or infer one from the
/// environment (in-cluster service account, $KUBECONFIG, ~/.kube/config)
pub async fn build_client(settings: &KubeSettings) -> Result<Client> {
    let config = match settings.kubeconfig.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            let kubeconfig = Kubeconfig::read_from(path)
                .with_context(|| format!("Failed to read kubeconfig file: {}", path.display()))?;

            let options = KubeConfigOptions {
                context: settings.context.clone(),
                ..Default::default()
            };

            Config::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .with_context(|| {
                    format!(
                        "Failed to create config from kubeconfig: {}",
                        path.display()
                    )
                })?
        }
        None => Config::infer()
            .await
            .context("Failed to infer Kubernetes config")?,
    };

    let cluster_url = config.cluster_url.to_string();
    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;

    tracing::info!(cluster = %cluster_url, "Kubernetes client initialized");
    Ok(client)
}
