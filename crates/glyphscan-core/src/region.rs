//! Region - A rectangular region of interest over a shared image
//!
//! Regions never own pixel data; they only name a window of an image
//! that outlives them. All four bounds are inclusive. A region whose
//! `left > right` or `top > bottom` is empty, which is how trimming
//! reports "no ink here".

use crate::point::Point;

/// Inclusive rectangle `[left, right] x [top, bottom]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Region {
    /// Create a region from inclusive bounds
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The region covering a whole `width` x `height` image
    pub fn of_image(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    /// Check whether the region contains no pixels
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }

    /// Number of columns, or 0 when empty
    #[inline]
    pub fn width(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.right) - i64::from(self.left) + 1).min(u32::MAX as i64) as u32
        }
    }

    /// Number of rows, or 0 when empty
    #[inline]
    pub fn height(&self) -> u32 {
        if self.is_empty() {
            0
        } else {
            (i64::from(self.bottom) - i64::from(self.top) + 1).min(u32::MAX as i64) as u32
        }
    }

    /// Top-left corner
    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Check if a point lies inside the region
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Intersect with the bounds of a `width` x `height` image
    pub fn clip_to(&self, width: u32, height: u32) -> Region {
        Region {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(width as i32 - 1),
            bottom: self.bottom.min(height as i32 - 1),
        }
    }

    /// Grow the region by `margin` pixels on every side, saturating at the
    /// `i32` range. A negative margin shrinks it.
    pub fn expand(&self, margin: i32) -> Region {
        Region {
            left: self.left.saturating_sub(margin),
            top: self.top.saturating_sub(margin),
            right: self.right.saturating_add(margin),
            bottom: self.bottom.saturating_add(margin),
        }
    }

    /// Iterate over the points on the region's outer border, clockwise
    /// from the top-left corner. Yields nothing for an empty region.
    pub fn border_points(&self) -> impl Iterator<Item = Point> + '_ {
        let r = *self;
        let empty = r.is_empty();
        let top = (r.left..=r.right).map(move |x| Point::new(x, r.top));
        let right = (r.top + 1..=r.bottom).map(move |y| Point::new(r.right, y));
        let bottom = (r.left..r.right)
            .rev()
            .filter(move |_| r.bottom > r.top)
            .map(move |x| Point::new(x, r.bottom));
        let left = (r.top + 1..r.bottom)
            .rev()
            .filter(move |_| r.right > r.left)
            .map(move |y| Point::new(r.left, y));
        top.chain(right)
            .chain(bottom)
            .chain(left)
            .filter(move |_| !empty)
    }
}
