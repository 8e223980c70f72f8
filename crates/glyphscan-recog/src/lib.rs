//! glyphscan-recog - Page reading for glyphscan
//!
//! This crate turns a decoded page into text:
//!
//! - **Line segmentation**: full-width bands of rows that contain ink
//! - **Grapheme extraction**: connected ink blobs within a line, trimmed
//!   to their ink
//! - **Feature collection**: bounding box, hole count, stroke angles
//! - **Classification**: a pluggable [`Classifier`]; [`Font`] answers
//!   every grapheme with a placeholder
//!
//! # Quick Start
//!
//! ```
//! use glyphscan_core::{Color, Pix};
//! use glyphscan_recog::{Font, Page};
//!
//! let pix = Pix::new_filled(64, 32, Color::WHITE).unwrap();
//! let font = Font::new("serif");
//! let text = Page::new(&pix, &font).read().unwrap();
//! assert_eq!(text, "");
//! ```
//!
//! # Modules
//!
//! - [`lineseg`]: Line segmentation
//! - [`line`]: Lines and grapheme splitting
//! - [`grapheme`]: Trimming and feature collection
//! - [`page`]: The whole-page pipeline

pub mod classify;
mod error;
pub mod features;
pub mod grapheme;
pub mod line;
pub mod lineseg;
pub mod page;

pub use error::{RecogError, RecogResult};

// Re-export commonly used types
pub use classify::{Classifier, Font, PLACEHOLDER};
pub use features::{GraphemeFeatures, StrokeAngle, StrokeAngleExtractor, UnimplementedStrokeAngles};
pub use grapheme::Grapheme;
pub use line::Line;
pub use lineseg::{LineSegOptions, segment_lines};
pub use page::{Page, PageOptions};

// Re-export core for convenience
pub use glyphscan_core;
