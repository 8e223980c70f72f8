//! Integer pixel coordinates

use std::fmt;

/// A pixel position in the source image's coordinate space.
///
/// Ordering is lexicographic on `(x, y)`, so points can key a
/// `BTreeSet` and iterate column by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_ordering_is_x_then_y() {
        let set: BTreeSet<Point> = [Point::new(2, 0), Point::new(1, 5), Point::new(1, 2)]
            .into_iter()
            .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![Point::new(1, 2), Point::new(1, 5), Point::new(2, 0)]
        );
    }
}
