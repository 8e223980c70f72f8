//! JPEG image format support
//!
//! Reads baseline and progressive JPEG images using the `jpeg-decoder`
//! crate. Grayscale, RGB, and CMYK sources all produce RGB pixels.

use crate::{IoError, IoResult};
use glyphscan_core::{Pix, color};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image from a reader.
///
/// # Arguments
/// * `reader` - A reader positioned at the JPEG SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let bytes_per_pixel = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };

    let expected = width as usize * height as usize * bytes_per_pixel;
    if data.len() < expected {
        return Err(IoError::DecodeError(format!(
            "JPEG data too short: expected {} bytes, got {}",
            expected,
            data.len()
        )));
    }

    let pix = Pix::new(width, height)?;
    let mut pix_mut = pix.try_into_mut().unwrap_or_else(|p| p.to_mut());

    for (i, px) in data[..expected].chunks_exact(bytes_per_pixel).enumerate() {
        let x = (i % width as usize) as u32;
        let y = (i / width as usize) as u32;
        let pixel = match info.pixel_format {
            PixelFormat::L8 => color::compose_rgb(px[0], px[0], px[0]),
            // Big-endian 16-bit luma; keep the high byte
            PixelFormat::L16 => color::compose_rgb(px[0], px[0], px[0]),
            PixelFormat::RGB24 => color::compose_rgb(px[0], px[1], px[2]),
            PixelFormat::CMYK32 => {
                // Adobe-style inverted CMYK as delivered by the decoder
                let k = px[3] as u32;
                let channel = |c: u8| ((c as u32 * k + 127) / 255) as u8;
                color::compose_rgb(channel(px[0]), channel(px[1]), channel(px[2]))
            }
        };
        pix_mut.set_pixel_unchecked(x, y, pixel);
    }

    Ok(pix_mut.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_not_a_jpeg() {
        let err = read_jpeg(Cursor::new(vec![0xFF, 0xD8, 0x00, 0x00])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
