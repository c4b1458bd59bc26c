//! Kubernetes operations

pub mod client;
pub mod store;

#[cfg(test)]
pub(crate) mod fake;

pub use client::build_client;
pub use store::{KubePodStore, PodStore};
