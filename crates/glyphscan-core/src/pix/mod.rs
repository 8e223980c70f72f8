//! PIX - The RGB image container
//!
//! Every decoded page ends up as a 32-bit `Pix`: one `0xRRGGBBAA` word
//! per pixel, rows stored top to bottom with no padding. Grayscale,
//! bilevel, and palette inputs are expanded to RGB by the decoders, so
//! the segmentation code only ever sees colors.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for cheap cloning (shared ownership). To modify pixel
//! data, convert to `PixMut` via [`Pix::try_into_mut`] or [`Pix::to_mut`],
//! then convert back with `Into<Pix>`. The segmentation pipeline only
//! ever holds `&Pix`.

mod access;

use crate::color::Color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Image file format a `Pix` was decoded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format (built in memory)
    #[default]
    Unknown,
    /// BMP format
    Bmp,
    /// JFIF JPEG format
    Jpeg,
    /// PNG format
    Png,
    /// PNM format
    Pnm,
}

/// Internal PIX data
#[derive(Debug)]
struct PixData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Input file format
    informat: ImageFormat,
    /// The image data, one RGBA word per pixel
    data: Vec<u32>,
}

impl PixData {
    /// Number of pixel words for a `width x height` image, rejecting sizes
    /// that could never be allocated.
    fn pixel_count(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| {
                n.checked_mul(std::mem::size_of::<u32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(Error::InvalidDimension { width, height })
    }

    fn new(width: u32, height: u32, fill: u32) -> Result<Self> {
        let size = Self::pixel_count(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| Error::InvalidDimension { width, height })?;
        data.resize(size, fill);
        Ok(Self {
            width,
            height,
            informat: ImageFormat::Unknown,
            data,
        })
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use glyphscan_core::{Color, Pix};
///
/// let pix = Pix::new_filled(640, 480, Color::WHITE).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.color(10, 10), Some(Color::WHITE));
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions.
    ///
    /// The image data is initialized to zero (black, transparent).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, or if
    /// the pixel buffer would not fit in memory.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, 0)?),
        })
    }

    /// Create a new PIX with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Color) -> Result<Self> {
        Ok(Pix {
            inner: Arc::new(PixData::new(width, height, color.to_pixel32())?),
        })
    }

    /// Build a PIX from row-major RGBA words.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u32>) -> Result<Self> {
        let expected = PixData::pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                informat: ImageFormat::Unknown,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get the number of strong references to this PIX.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: PixData {
                width: self.inner.width,
                height: self.inner.height,
                informat: self.inner.informat,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable PIX
///
/// Allows modification of image data while an image is being built.
/// Convert back to an immutable [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Record the format the image was decoded from.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get raw mutable access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }
}

impl From<PixMut> for Pix {
    fn from(pix: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert!(matches!(
            Pix::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
    }

    #[test]
    fn test_new_rejects_unallocatable_size() {
        assert!(matches!(
            Pix::new(u32::MAX, u32::MAX),
            Err(Error::InvalidDimension { .. })
        ));
        assert!(matches!(
            Pix::from_raw(u32::MAX, u32::MAX, Vec::new()),
            Err(Error::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_from_raw_checks_length() {
        assert!(Pix::from_raw(2, 2, vec![0; 3]).is_err());
        let pix = Pix::from_raw(2, 1, vec![Color::BLACK.to_pixel32(), 0]).unwrap();
        assert_eq!(pix.color(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_try_into_mut_shared() {
        let pix = Pix::new(4, 4).unwrap();
        let shared = pix.clone();
        assert_eq!(pix.ref_count(), 2);
        let pix = pix.try_into_mut().unwrap_err();
        drop(shared);
        assert!(pix.try_into_mut().is_ok());
    }

    #[test]
    fn test_to_mut_is_independent() {
        let pix = Pix::new_filled(3, 3, Color::WHITE).unwrap();
        let mut copy = pix.to_mut();
        copy.set_color(1, 1, Color::BLACK).unwrap();
        let copy: Pix = copy.into();
        assert_eq!(pix.color(1, 1), Some(Color::WHITE));
        assert_eq!(copy.color(1, 1), Some(Color::BLACK));
    }
}
