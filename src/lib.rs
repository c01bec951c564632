// sysreport library - Public API

// Re-export error types
pub mod error;
pub use error::{ReportError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod platform;
pub mod ui;

// Re-export commonly used types
pub use crate::commands::report::ReportOptions;
pub use crate::core::severity::SeverityBand;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
}
