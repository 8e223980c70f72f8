//! Error types for glyphscan-region

use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Seed or target point outside the traversal region
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i32, y: i32 },

    /// Traversal region has no pixels inside the image
    #[error("empty region: no pixels to process")]
    EmptyRegion,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
