//! PNG image format support
//!
//! Palette, low bit depth, and 16-bit images are normalized by the decoder
//! to 8-bit gray or RGB before being packed into RGB pixels. Alpha is
//! dropped.

use crate::{IoError, IoResult};
use glyphscan_core::{Pix, color};
use png::{BitDepth, ColorType, Decoder, Transformations};
use std::io::{BufRead, Seek};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (width, height) = {
        let info = reader.info();
        (info.width, info.height)
    };

    let (color_type, bit_depth) = reader.output_color_type();
    let channels = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let pix = Pix::new(width, height)?;
    let mut pix_mut = pix.try_into_mut().unwrap_or_else(|p| p.to_mut());

    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..];
        for x in 0..width {
            let idx = x as usize * channels;
            let pixel = if channels < 3 {
                let v = row[idx];
                color::compose_rgb(v, v, v)
            } else {
                color::compose_rgb(row[idx], row[idx + 1], row[idx + 2])
            };
            pix_mut.set_pixel_unchecked(x, y, pixel);
        }
    }

    Ok(pix_mut.into())
}
