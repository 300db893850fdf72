//! Error types for the synthetic demo job.

use thiserror::Error;

/// Job error type
#[derive(Debug, Error)]
pub enum JobError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// NPY container encoding or decoding error
    #[error("NPY format error: {0}")]
    Npy(String),

    /// JSON serialisation error
    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    /// Array shape error
    #[error("Shape error: {0}")]
    Shape(String),
}

impl JobError {
    /// Create an NPY format error
    pub fn npy(msg: impl Into<String>) -> Self {
        Self::Npy(msg.into())
    }

    /// Create a shape error
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JobError::npy("truncated header");
        assert!(err.to_string().contains("truncated header"));

        let err = JobError::shape("expected 4 elements, got 3");
        assert!(err.to_string().starts_with("Shape error"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = JobError::from(io);
        assert!(matches!(err, JobError::Io(_)));
    }
}
