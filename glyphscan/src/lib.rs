//! glyphscan - OCR preprocessing for Rust
//!
//! Segments a scanned page into text lines, splits each line into
//! graphemes, and extracts shape features (bounding box, hole count)
//! for a downstream classifier.
//!
//! # Overview
//!
//! - Image decoding (BMP, PNM, PNG, JPEG) in [`io`]
//! - Flood fill, bounds trimming, and hole counting in [`region`]
//! - Line segmentation and page reading in [`recog`]
//!
//! # Example
//!
//! ```
//! use glyphscan::{Color, Pix};
//! use glyphscan::recog::{Font, Page};
//!
//! let pix = Pix::new_filled(64, 48, Color::WHITE).unwrap();
//! let font = Font::new("serif");
//! assert_eq!(Page::new(&pix, &font).read().unwrap(), "");
//! ```

// Re-export core types (primary data structures used everywhere)
pub use glyphscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use glyphscan_io as io;
pub use glyphscan_recog as recog;
pub use glyphscan_region as region;

use std::path::Path;
use thiserror::Error;

/// Errors from reading a page file end to end
#[derive(Debug, Error)]
pub enum ReadError {
    /// The image could not be decoded
    #[error("cannot decode image: {0}")]
    Decode(#[from] io::IoError),

    /// The page pipeline failed
    #[error("cannot read page: {0}")]
    Recog(#[from] recog::RecogError),
}

/// Result type for [`read_page`]
pub type ReadResult<T> = std::result::Result<T, ReadError>;

/// Decode the image at `path` and read it with `classifier`
pub fn read_page<P, C>(path: P, classifier: &C) -> ReadResult<String>
where
    P: AsRef<Path>,
    C: recog::Classifier + ?Sized,
{
    let pix = io::read_image(path)?;
    tracing::debug!(
        "decoded {}x{} {:?} image",
        pix.width(),
        pix.height(),
        pix.informat()
    );
    Ok(recog::Page::new(&pix, classifier).read()?)
}
