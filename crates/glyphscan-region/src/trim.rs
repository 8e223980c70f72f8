//! Bounds trimming
//!
//! Shrinks a region inward until each side touches ink. Every side tests
//! its own current row or column.

use crate::classify::is_foreground;
use glyphscan_core::{PixelSource, Region};

fn row_has_ink<S: PixelSource + ?Sized>(source: &S, y: i32, left: i32, right: i32) -> bool {
    (left..=right).any(|x| is_foreground(source.color_at(x as u32, y as u32)))
}

fn column_has_ink<S: PixelSource + ?Sized>(source: &S, x: i32, top: i32, bottom: i32) -> bool {
    (top..=bottom).any(|y| is_foreground(source.color_at(x as u32, y as u32)))
}

/// Tightest region containing every ink pixel of `region`
///
/// The region is clipped to the image first. When it holds no ink the
/// result is empty (`top > bottom`); callers must check
/// [`Region::is_empty`] before using it.
pub fn trim_bounds<S: PixelSource + ?Sized>(source: &S, region: Region) -> Region {
    let Region {
        mut left,
        mut top,
        mut right,
        mut bottom,
    } = region.clip_to(source.width(), source.height());

    if left > right || top > bottom {
        return Region::new(left, top, right, bottom);
    }

    while top <= bottom && !row_has_ink(source, top, left, right) {
        top += 1;
    }
    while bottom >= top && !row_has_ink(source, bottom, left, right) {
        bottom -= 1;
    }
    if top > bottom {
        tracing::trace!("no ink in region {:?}", region);
        return Region::new(left, top, right, bottom);
    }

    while left <= right && !column_has_ink(source, left, top, bottom) {
        left += 1;
    }
    while right >= left && !column_has_ink(source, right, top, bottom) {
        right -= 1;
    }

    Region::new(left, top, right, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::{Color, Pix};

    fn rect(width: u32, height: u32, ink: Region) -> Pix {
        let mut pix = Pix::new_filled(width, height, Color::WHITE)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for y in ink.top..=ink.bottom {
            for x in ink.left..=ink.right {
                pix.set_color(x as u32, y as u32, Color::BLACK).unwrap();
            }
        }
        pix.into()
    }

    #[test]
    fn test_bottom_uses_bottom_row() {
        // Ink only in the top row: the bottom side must stop there, not
        // keep going because the top row happens to contain ink.
        let pix = rect(6, 6, Region::new(1, 0, 4, 0));
        let trimmed = trim_bounds(&pix, Region::of_image(6, 6));
        assert_eq!(trimmed, Region::new(1, 0, 4, 0));
    }

    #[test]
    fn test_single_pixel() {
        let pix = rect(5, 5, Region::new(3, 2, 3, 2));
        assert_eq!(
            trim_bounds(&pix, Region::of_image(5, 5)),
            Region::new(3, 2, 3, 2)
        );
    }

    #[test]
    fn test_no_ink_collapses() {
        let pix = Pix::new_filled(5, 4, Color::WHITE).unwrap();
        let trimmed = trim_bounds(&pix, Region::of_image(5, 4));
        assert!(trimmed.is_empty());
    }

    #[test]
    fn test_clipped_to_image() {
        let pix = rect(5, 5, Region::new(0, 0, 4, 4));
        let trimmed = trim_bounds(&pix, Region::new(-3, -3, 10, 10));
        assert_eq!(trimmed, Region::new(0, 0, 4, 4));
    }
}
