//! Error types for the test harness

use thiserror::Error;

/// Errors that can occur while building fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// Fixture construction failed in the core image type
    #[error("fixture error: {0}")]
    Core(#[from] glyphscan_core::Error),

    /// Fixture geometry does not fit the requested page
    #[error("fixture '{name}' does not fit a {width}x{height} page")]
    FixtureBounds {
        name: &'static str,
        width: u32,
        height: u32,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
