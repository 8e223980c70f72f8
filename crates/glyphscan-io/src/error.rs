//! I/O error types
//!
//! Provides a unified error type for all image decoding operations.
//! Each format-specific module maps its underlying library errors
//! into `IoError` variants so that callers only need to handle
//! one error type.

use thiserror::Error;

/// Error type for image decoding.
///
/// A decode failure is terminal for the whole run: the pipeline never
/// proceeds with partially decoded pixel data.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The image format is not supported or not enabled via features
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The image data is malformed or truncated
    #[error("decode error: {0}")]
    DecodeError(String),

    /// An error from the core library (e.g. zero image dimensions)
    #[error("core error: {0}")]
    Core(#[from] glyphscan_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
