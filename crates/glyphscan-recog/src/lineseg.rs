//! Line segmentation
//!
//! Scans the page top to bottom. A row is part of a line when any pixel
//! across the full page width is ink; each maximal run of such rows is
//! one line.

use glyphscan_core::{PixelSource, Region};
use glyphscan_region::is_foreground;

/// Options for line segmentation
#[derive(Debug, Clone)]
pub struct LineSegOptions {
    /// Emit a line that is still open at the last row (default: true)
    pub close_trailing_line: bool,
}

impl Default for LineSegOptions {
    fn default() -> Self {
        Self {
            close_trailing_line: true,
        }
    }
}

impl LineSegOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a line touching the bottom edge is emitted
    pub fn with_close_trailing_line(mut self, close: bool) -> Self {
        self.close_trailing_line = close;
        self
    }
}

fn row_has_ink<S: PixelSource + ?Sized>(source: &S, y: u32) -> bool {
    (0..source.width()).any(|x| is_foreground(source.color_at(x, y)))
}

/// Split a page into full-width line bands, top to bottom
///
/// Bands never overlap and are separated by at least one row without ink.
pub fn segment_lines<S: PixelSource + ?Sized>(source: &S, options: &LineSegOptions) -> Vec<Region> {
    let right = source.width() as i32 - 1;
    let mut lines = Vec::new();
    let mut open: Option<i32> = None;

    for y in 0..source.height() {
        let ink = row_has_ink(source, y);
        match (open, ink) {
            (None, true) => open = Some(y as i32),
            (Some(top), false) => {
                lines.push(Region::new(0, top, right, y as i32 - 1));
                open = None;
            }
            _ => {}
        }
    }

    if let Some(top) = open {
        if options.close_trailing_line {
            lines.push(Region::new(0, top, right, source.height() as i32 - 1));
        } else {
            tracing::debug!("dropping line open at the last row (top = {})", top);
        }
    }

    tracing::debug!("found {} lines", lines.len());
    lines
}
