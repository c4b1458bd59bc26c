//! Configuration file support for k8s-platform

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default, skip_serializing_if = "KubeSettings::is_unset")]
    pub kube: KubeSettings,

    #[serde(default)]
    pub pods: PodSettings,
}

/// HTTP listener settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Cluster connection settings
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct KubeSettings {
    /// Optional path to a kubeconfig file.
    /// If not set, the in-cluster config or $KUBECONFIG / ~/.kube/config is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubeconfig: Option<String>,

    /// Optional kubeconfig context. Only used together with `kubeconfig`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Pod endpoint settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PodSettings {
    /// Number of trailing log lines returned by the log endpoint
    #[serde(default = "default_log_tail_lines")]
    pub log_tail_lines: i64,
}

// Default value functions
fn default_listen_addr() -> String {
    "0.0.0.0:9090".to_string()
}

fn default_log_tail_lines() -> i64 {
    2000
}

impl KubeSettings {
    fn is_unset(&self) -> bool {
        self.kubeconfig.is_none() && self.context.is_none()
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for PodSettings {
    fn default() -> Self {
        Self {
            log_tail_lines: default_log_tail_lines(),
        }
    }
}

impl Settings {
    /// Load settings from file or return defaults
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_file() {
            match Self::load_from_file(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    crate::log_warn!("{:#}, using defaults", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(settings)
    }

    /// Check values that would otherwise only fail once requests arrive
    pub fn validate(&self) -> Result<()> {
        if self.pods.log_tail_lines <= 0 {
            anyhow::bail!(
                "Invalid pods.log_tail_lines: {} (must be a positive number of lines)",
                self.pods.log_tail_lines
            );
        }
        Ok(())
    }

    /// Find config file in standard locations
    /// Priority:
    /// 1. .k8s-platform.toml in current directory
    /// 2. ~/.config/k8s-platform/config.toml (XDG config directory)
    fn find_config_file() -> Option<PathBuf> {
        let local_config = PathBuf::from(".k8s-platform.toml");
        if local_config.exists() {
            return Some(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("k8s-platform").join("config.toml");
            if xdg_config.exists() {
                return Some(xdg_config);
            }
        }

        None
    }

    /// Generate example config file content
    pub fn example_config() -> String {
        let header = "# k8s-platform configuration file\n\
                      # Place this file at ~/.config/k8s-platform/config.toml or .k8s-platform.toml in your working directory\n\n";

        match toml::to_string_pretty(&Settings::default()) {
            Ok(config) => format!(
                "{}{}\n[kube]\n# kubeconfig = \"/path/to/kubeconfig\"\n# context = \"my-context\"\n",
                header, config
            ),
            Err(_) => {
                // Fallback in case serialization fails
                r#"# k8s-platform configuration file
# Place this file at ~/.config/k8s-platform/config.toml or .k8s-platform.toml in your working directory

[server]
listen_addr = "0.0.0.0:9090"

[pods]
log_tail_lines = 2000

[kube]
# kubeconfig = "/path/to/kubeconfig"
# context = "my-context"
"#
                .to_string()
            }
        }
    }
}
