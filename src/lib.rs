//! k8s-platform: HTTP API for listing, inspecting and managing pods
//!
//! The list endpoint runs every result through [`dataselect`], a generic
//! filter, sort and paginate pipeline over resource adapters.

pub mod api;
pub mod config;
pub mod dataselect;
pub mod error;
pub mod k8s;
pub mod service;
pub mod utils;
