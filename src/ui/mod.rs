//! User interface module - console output for the bump workflow.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_dry_run, display_error, display_file_set, display_status, display_success,
    display_version_change, display_warning,
};
