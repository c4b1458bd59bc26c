//! Resource services used by the HTTP handlers

pub mod pod;

pub use pod::{NamespacePodCount, PodService};
