//! glyphscan-test - Regression test harness for glyphscan
//!
//! Provides [`RegParams`], a small bookkeeping helper for regression-style
//! tests, and [`fixtures`], which synthesizes pages with known geometry
//! (rectangles, rings, disks, figure-eights, text bands) so tests never
//! depend on binary data files.
//!
//! # Usage
//!
//! ```ignore
//! use glyphscan_test::{RegParams, fixtures};
//!
//! let mut rp = RegParams::new("holes");
//! let pix = fixtures::ring(40, 40, 20, 20, 12, 6);
//! rp.compare_values(1.0, holes as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
pub mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
