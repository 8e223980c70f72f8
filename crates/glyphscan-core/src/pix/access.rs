//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels.

use super::{Pix, PixMut};
use crate::color::{self, Color};
use crate::error::{Error, Result};

impl Pix {
    /// Get a raw pixel word at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get a raw pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[self.inner.index(x, y)]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// Get the color at (x, y).
    pub fn color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel32)
    }
}

impl PixMut {
    /// Get a raw pixel word at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Get the color at (x, y).
    pub fn color(&self, x: u32, y: u32) -> Option<Color> {
        self.get_pixel(x, y).map(Color::from_pixel32)
    }

    /// Set a raw pixel word at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width || y >= self.inner.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.inner.width,
                height: self.inner.height,
            });
        }
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
        Ok(())
    }

    /// Set a raw pixel word without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index falls outside the pixel buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Set an RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Set a pixel to `color` at (x, y).
    pub fn set_color(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.set_pixel(x, y, color.to_pixel32())
    }

    /// Fill every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        self.inner.data.fill(color.to_pixel32());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_roundtrip() {
        let pix = Pix::new(5, 4).unwrap();
        let mut pm = pix.try_into_mut().unwrap();
        pm.set_rgb(4, 3, 1, 2, 3).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(4, 3), Some((1, 2, 3)));
        assert_eq!(pix.color(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_out_of_bounds() {
        let pix = Pix::new(5, 4).unwrap();
        assert_eq!(pix.get_pixel(5, 0), None);
        assert_eq!(pix.get_pixel(0, 4), None);
        let mut pm = pix.to_mut();
        assert!(matches!(
            pm.set_color(5, 0, Color::WHITE),
            Err(Error::OutOfBounds { x: 5, y: 0, .. })
        ));
    }

    #[test]
    fn test_fill() {
        let mut pm = Pix::new(3, 2).unwrap().to_mut();
        pm.fill(Color::gray(200));
        assert_eq!(pm.color(2, 1), Some(Color::gray(200)));
    }
}
