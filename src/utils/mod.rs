//! Utility modules for k8s-platform

pub mod errors;
pub mod logger;

// Re-export commonly used items
pub use errors::{PlatformError, display_error_and_exit, enhance_error};
pub use logger::{log_error, log_info, log_warn};
