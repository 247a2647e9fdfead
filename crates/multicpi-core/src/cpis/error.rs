//! CPI error types

use thiserror::Error;

/// Errors that can occur while constructing a CPI handle
#[derive(Error, Debug)]
pub enum CpiError {
    /// Handle construction failed
    #[error("Failed to construct CPI '{exec_path}': {message}")]
    Construction { exec_path: String, message: String },
}

impl CpiError {
    /// Create a construction error
    pub fn construction(exec_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Construction {
            exec_path: exec_path.into(),
            message: message.into(),
        }
    }
}

pub type CpiResult<T> = Result<T, CpiError>;
