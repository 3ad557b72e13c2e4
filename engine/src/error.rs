//! Error types
//!
//! Per-frame camera updates are infallible. Only loading and validating a
//! [`CameraConfig`](crate::camera::CameraConfig) can fail.

use thiserror::Error;

/// Errors produced while loading or validating camera configuration.
#[derive(Error, Debug)]
pub enum CameraError {
    /// Reading the config file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The config file is not valid JSON for [`CameraConfig`](crate::camera::CameraConfig).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// A field holds a value the camera cannot run with.
    #[error("invalid camera config: {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },
}

impl CameraError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CameraError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CameraError>;
