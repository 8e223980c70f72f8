//! Region-scoped visited markers
//!
//! One contiguous buffer per traversal, addressed by
//! `(y - top) * width + (x - left)`. The grid lives exactly as long as the
//! traversal that owns it.

use glyphscan_core::{Point, Region};

/// Tracks which points of a region have been enqueued
#[derive(Debug, Clone)]
pub struct VisitedGrid {
    region: Region,
    width: usize,
    marks: Vec<bool>,
}

impl VisitedGrid {
    /// Create an unmarked grid covering `region`
    pub fn new(region: Region) -> Self {
        let width = region.width() as usize;
        let height = region.height() as usize;
        Self {
            region,
            width,
            marks: vec![false; width * height],
        }
    }

    /// The region this grid covers
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    fn offset(&self, point: Point) -> Option<usize> {
        if !self.region.contains(point) {
            return None;
        }
        let dx = (point.x - self.region.left) as usize;
        let dy = (point.y - self.region.top) as usize;
        Some(dy * self.width + dx)
    }

    /// Mark a point. Returns `true` the first time a point is marked and
    /// `false` if it was already marked or lies outside the region.
    #[inline]
    pub fn mark(&mut self, point: Point) -> bool {
        match self.offset(point) {
            Some(i) if !self.marks[i] => {
                self.marks[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Check whether a point has been marked
    #[inline]
    pub fn is_marked(&self, point: Point) -> bool {
        self.offset(point).is_some_and(|i| self.marks[i])
    }

    /// Number of marked points
    pub fn count(&self) -> usize {
        self.marks.iter().filter(|&&m| m).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_once() {
        let mut grid = VisitedGrid::new(Region::new(5, 5, 7, 6));
        let p = Point::new(6, 6);
        assert!(!grid.is_marked(p));
        assert!(grid.mark(p));
        assert!(!grid.mark(p));
        assert!(grid.is_marked(p));
        assert_eq!(grid.count(), 1);
    }

    #[test]
    fn test_outside_region() {
        let mut grid = VisitedGrid::new(Region::new(5, 5, 7, 6));
        assert!(!grid.mark(Point::new(4, 5)));
        assert!(!grid.mark(Point::new(7, 7)));
        assert!(!grid.is_marked(Point::new(8, 6)));
        assert_eq!(grid.count(), 0);
    }

    #[test]
    fn test_empty_region() {
        let mut grid = VisitedGrid::new(Region::new(3, 3, 2, 2));
        assert!(!grid.mark(Point::new(3, 3)));
    }
}
