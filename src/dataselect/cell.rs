//! Adapters that expose resources to the selection pipeline

use k8s_openapi::api::core::v1::Pod;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

/// Minimal view of a resource needed to filter and sort it
pub trait DataCell {
    /// Creation timestamp, if the server has set one
    fn creation_time(&self) -> Option<&Time>;

    /// Object name used for filtering
    fn name(&self) -> &str;
}

/// Pod wrapped for selection
#[derive(Debug, Clone, PartialEq)]
pub struct PodCell(Pod);

impl PodCell {
    pub fn into_inner(self) -> Pod {
        self.0
    }
}

impl From<Pod> for PodCell {
    fn from(pod: Pod) -> Self {
        Self(pod)
    }
}

impl From<PodCell> for Pod {
    fn from(cell: PodCell) -> Self {
        cell.0
    }
}

impl DataCell for PodCell {
    fn creation_time(&self) -> Option<&Time> {
        self.0.metadata.creation_timestamp.as_ref()
    }

    fn name(&self) -> &str {
        self.0.metadata.name.as_deref().unwrap_or_default()
    }
}
