//! glyphscan-core - Basic data structures for OCR preprocessing
//!
//! This crate provides the fundamental data structures shared by the
//! segmentation and feature-extraction crates:
//!
//! - [`Pix`] / [`PixMut`] - The RGB image container (immutable / mutable)
//! - [`Color`] - A single RGB pixel value
//! - [`Point`] - Integer pixel coordinates
//! - [`Box`] - An inclusive bounding rectangle that only grows
//! - [`Region`] - A rectangular region of interest over a shared image
//! - [`PixelSource`] - The read-only pixel access contract consumed by the
//!   segmentation code
//!
//! Everything downstream reads pixels through [`PixelSource`], so any
//! decoder that can answer `width`, `height`, and `color_at` can feed the
//! pipeline.

pub mod box_;
pub mod color;
pub mod error;
pub mod pix;
pub mod point;
pub mod region;
pub mod source;

pub use box_::Box;
pub use color::Color;
pub use error::{Error, Result};
pub use pix::{ImageFormat, Pix, PixMut};
pub use point::Point;
pub use region::Region;
pub use source::PixelSource;
