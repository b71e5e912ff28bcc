use thiserror::Error;

/// Errors raised by shape and composite operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// A composite-only operation was invoked on a leaf shape
    #[error("{operation} is not supported on a {kind} shape")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },

    #[error("child index {index} out of range for group of {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    /// Inserting the child would make a group its own descendant
    #[error("adding this shape would make the group contain itself")]
    CycleDetected,

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

/// Result type for shape operations
pub type ShapeResult<T> = Result<T, ShapeError>;

/// A drop tag that names no known shape kind
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown shape kind {0:?}")]
pub struct UnknownShapeKind(pub String);

/// Errors that can occur while loading the editor configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
