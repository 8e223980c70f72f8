//! Box - Inclusive bounding rectangle
//!
//! A `Box` starts out degenerate (a single point) and only ever grows as
//! points are included. Both corners are inclusive.

use crate::point::Point;
use crate::region::Region;

/// An axis-aligned bounding rectangle
///
/// This is a simple Copy type since it's small and frequently copied.
/// Once non-degenerate, `low.x <= high.x` and `low.y <= high.y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Box {
    /// Top-left corner (inclusive)
    pub low: Point,
    /// Bottom-right corner (inclusive)
    pub high: Point,
}

impl Box {
    /// Create a degenerate box covering a single point
    pub const fn at(point: Point) -> Self {
        Self {
            low: point,
            high: point,
        }
    }

    /// Create a box from two corner points, normalizing their order
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            low: Point::new(x1.min(x2), y1.min(y2)),
            high: Point::new(x1.max(x2), y1.max(y2)),
        }
    }

    /// Grow the box so that it contains `point`
    #[inline]
    pub fn include(&mut self, point: Point) {
        self.low.x = self.low.x.min(point.x);
        self.low.y = self.low.y.min(point.y);
        self.high.x = self.high.x.max(point.x);
        self.high.y = self.high.y.max(point.y);
    }

    /// Width in pixels (both edges inclusive)
    #[inline]
    pub fn width(&self) -> i32 {
        self.high.x - self.low.x + 1
    }

    /// Height in pixels (both edges inclusive)
    #[inline]
    pub fn height(&self) -> i32 {
        self.high.y - self.low.y + 1
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.low.x
            && point.x <= self.high.x
            && point.y >= self.low.y
            && point.y <= self.high.y
    }

    /// Check whether the horizontal extents of two boxes overlap
    pub fn overlaps_horizontally(&self, other: &Box) -> bool {
        self.low.x <= other.high.x && other.low.x <= self.high.x
    }

    /// Compute the union (bounding box) of two boxes
    pub fn union(&self, other: &Box) -> Box {
        let mut merged = *self;
        merged.include(other.low);
        merged.include(other.high);
        merged
    }

    /// The same rectangle as a region of interest
    pub fn to_region(&self) -> Region {
        Region::new(self.low.x, self.low.y, self.high.x, self.high.y)
    }
}
