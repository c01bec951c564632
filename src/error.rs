use std::io;
use thiserror::Error;

/// Custom error type for the sysreport application
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Resource unavailable: {0}")]
    ResourceUnavailable(String),

    #[error("No login session: {0}")]
    NoLoginSession(String),

    #[error("No processes visible: {0}")]
    NoProcessesVisible(String),

    #[error("Malformed sensor data: {0}")]
    MalformedSensorData(String),
}

/// Result type alias for the sysreport application
pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    /// Create a permission denied error
    pub fn permission_denied<S: Into<String>>(msg: S) -> Self {
        ReportError::PermissionDenied(msg.into())
    }

    /// Create a backend unavailable error
    pub fn backend_unavailable<S: Into<String>>(msg: S) -> Self {
        ReportError::BackendUnavailable(msg.into())
    }

    /// Create a resource unavailable error
    pub fn resource_unavailable<S: Into<String>>(msg: S) -> Self {
        ReportError::ResourceUnavailable(msg.into())
    }

    /// Create a no login session error
    pub fn no_login_session<S: Into<String>>(msg: S) -> Self {
        ReportError::NoLoginSession(msg.into())
    }

    /// Create a no processes visible error
    pub fn no_processes_visible<S: Into<String>>(msg: S) -> Self {
        ReportError::NoProcessesVisible(msg.into())
    }

    pub fn malformed_sensor_data<S: Into<String>>(msg: S) -> Self {
        ReportError::MalformedSensorData(msg.into())
    }
}
