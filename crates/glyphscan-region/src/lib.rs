//! glyphscan-region - Connected-component analysis for glyphscan
//!
//! This crate holds the topology engine the rest of the pipeline is
//! built on:
//!
//! - **Pixel classification** - ink vs. paper, and color similarity
//! - **Component walking** - one breadth-first flood fill, specialized for
//!   extent accumulation and point-to-point reachability
//! - **Bounds trimming** - shrinking a region until every side touches ink
//! - **Hole counting** - sampled reachability clustering
//!
//! Every operation reads pixels through [`glyphscan_core::PixelSource`] and
//! never mutates the image.
//!
//! # Examples
//!
//! ```
//! use glyphscan_core::{Color, Pix, Region};
//! use glyphscan_region::{ComponentWalker, trim_bounds};
//!
//! let pix = Pix::new_filled(10, 10, Color::WHITE).unwrap();
//! let mut pix_mut = pix.try_into_mut().unwrap();
//! for y in 3..=5 {
//!     for x in 2..=6 {
//!         pix_mut.set_color(x, y, Color::BLACK).unwrap();
//!     }
//! }
//! let pix: glyphscan_core::Pix = pix_mut.into();
//!
//! let trimmed = trim_bounds(&pix, Region::of_image(10, 10));
//! assert_eq!(trimmed, Region::new(2, 3, 6, 5));
//!
//! let walker = ComponentWalker::new(&pix, Region::of_image(10, 10)).unwrap();
//! let extent = walker.find_extent((4, 4).into()).unwrap();
//! assert_eq!(extent.to_region(), trimmed);
//! ```

pub mod classify;
mod error;
pub mod holes;
pub mod trim;
pub mod visited;
pub mod walker;

pub use classify::{FOREGROUND_THRESHOLD, SIMILARITY_TOLERANCE, is_foreground, is_similar};
pub use error::{RegionError, RegionResult};
pub use holes::{HoleCountOptions, count_holes};
pub use trim::trim_bounds;
pub use visited::VisitedGrid;
pub use walker::ComponentWalker;
