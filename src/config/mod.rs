//! Configuration loading

pub mod settings;

pub use settings::{KubeSettings, PodSettings, ServerSettings, Settings};
