//! Startup errors with actionable suggestions

use colored::Colorize;
use thiserror::Error;

/// Error shown to the operator when the server cannot start
#[derive(Error, Debug)]
#[error("{message}")]
pub struct PlatformError {
    pub message: String,
    pub suggestions: Vec<String>,
}

impl PlatformError {
    /// Create a new error with suggestions
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestions: Vec::new(),
        }
    }

    /// Add a suggestion to the error
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Display the error with suggestions
    pub fn display(&self) {
        crate::log_error!("{}", self.message);

        if !self.suggestions.is_empty() {
            eprintln!();
            eprintln!("{}", "Suggestions:".yellow().bold());
            for suggestion in &self.suggestions {
                eprintln!("  {} {}", "→".blue(), suggestion);
            }
        }
    }

    // Common error patterns

    /// Kubeconfig could not be read
    pub fn kubeconfig_not_found(detail: &str) -> Self {
        Self::new(detail.to_string())
            .suggest("Check the path passed with --kubeconfig or set in [kube] kubeconfig")
            .suggest("Unset KUBECONFIG to fall back to ~/.kube/config or the in-cluster config")
    }

    /// Listener could not be bound
    pub fn bind_failed(detail: &str) -> Self {
        Self::new(detail.to_string())
            .suggest("Check whether another process is using the port")
            .suggest("Pick a different address with --listen or [server] listen_addr")
    }

    /// Cluster unreachable
    pub fn connection_failed(detail: &str) -> Self {
        Self::new(detail.to_string())
            .suggest("Check if the cluster is healthy")
            .suggest("Verify network connectivity to the API server")
    }

    /// Credentials rejected
    pub fn permission_denied(detail: &str) -> Self {
        Self::new(detail.to_string())
            .suggest("Verify the service account or user can list, get, update and delete pods")
            .suggest("Check that namespaces can be listed for the per-namespace count endpoint")
    }
}

/// Helper to display error and exit
pub fn display_error_and_exit(error: PlatformError) -> ! {
    error.display();
    std::process::exit(1);
}

/// Convert anyhow error to PlatformError when possible
pub fn enhance_error(err: anyhow::Error) -> PlatformError {
    let err_str = format!("{:#}", err);
    let lower = err_str.to_lowercase();

    if lower.contains("kubeconfig") {
        return PlatformError::kubeconfig_not_found(&err_str);
    }

    if lower.contains("failed to bind") || lower.contains("address already in use") {
        return PlatformError::bind_failed(&err_str);
    }

    if lower.contains("unauthorized") || lower.contains("forbidden") {
        return PlatformError::permission_denied(&err_str);
    }

    if lower.contains("connection refused") || lower.contains("timed out") || lower.contains("timeout") {
        return PlatformError::connection_failed(&err_str);
    }

    // Default error with generic suggestion
    PlatformError::new(err_str).suggest("Run with --verbose for more details")
}
