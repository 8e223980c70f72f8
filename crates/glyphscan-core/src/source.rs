//! The pixel source contract
//!
//! Segmentation never touches a concrete bitmap type. It reads pixels
//! through [`PixelSource`], which any decoder-backed store can implement.

use crate::color::Color;
use crate::pix::{Pix, PixMut};

/// Read-only random access to a 2D grid of colors.
///
/// Callers must keep `x < width()` and `y < height()`; implementations
/// are allowed to panic otherwise.
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color of the pixel at (x, y)
    fn color_at(&self, x: u32, y: u32) -> Color;
}

impl PixelSource for Pix {
    #[inline]
    fn width(&self) -> u32 {
        Pix::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        Pix::height(self)
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        Color::from_pixel32(self.get_pixel_unchecked(x, y))
    }
}

impl PixelSource for PixMut {
    #[inline]
    fn width(&self) -> u32 {
        PixMut::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        PixMut::height(self)
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        self.color(x, y).unwrap_or(Color::WHITE)
    }
}

impl<S: PixelSource + ?Sized> PixelSource for &S {
    #[inline]
    fn width(&self) -> u32 {
        (**self).width()
    }

    #[inline]
    fn height(&self) -> u32 {
        (**self).height()
    }

    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Color {
        (**self).color_at(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner<S: PixelSource>(source: S) -> Color {
        source.color_at(source.width() - 1, source.height() - 1)
    }

    #[test]
    fn test_pix_as_source() {
        let mut pm = Pix::new_filled(4, 3, Color::WHITE).unwrap().to_mut();
        pm.set_color(3, 2, Color::BLACK).unwrap();
        assert_eq!(corner(&pm), Color::BLACK);
        let pix: Pix = pm.into();
        assert_eq!(corner(&pix), Color::BLACK);
        assert_eq!(PixelSource::width(&pix), 4);
    }
}
