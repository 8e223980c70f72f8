//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap files at 1, 4, 8, 24, and 32 bits per
//! pixel, bottom-up or top-down. Palette images are expanded to RGB.

use crate::{IoError, IoResult, read_row, row_size, skip_bytes, truncated};
use glyphscan_core::{Pix, color};
use std::io::Read;

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// BI_RGB
const COMPRESSION_NONE: u32 = 0;

/// BI_BITFIELDS (accepted for 32-bit BGRA files written with explicit masks)
const COMPRESSION_BITFIELDS: u32 = 3;

#[inline]
fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

#[inline]
fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

#[inline]
fn le_i32(b: &[u8], at: usize) -> i32 {
    i32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// Read a BMP image
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Pix> {
    // Read file header (14 bytes)
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header).map_err(truncated)?;

    // Verify magic number
    if &file_header[0..2] != b"BM" {
        return Err(IoError::DecodeError("not a BMP file".to_string()));
    }

    let pixel_offset = le_u32(&file_header, 10) as usize;

    // Read info header (minimum 40 bytes)
    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header).map_err(truncated)?;

    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_i32(&info_header, 4);
    let height = le_i32(&info_header, 8);

    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::DecodeError(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }

    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    let colors_used = le_u32(&info_header, 32);

    if compression != COMPRESSION_NONE && compression != COMPRESSION_BITFIELDS {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }

    if width <= 0 || height == 0 {
        return Err(IoError::DecodeError(format!(
            "invalid BMP dimensions: {}x{}",
            width, height
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();

    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let mut consumed = BMP_FILE_HEADER_SIZE + BMP_INFO_HEADER_SIZE as usize;
    let extra_header = (header_size - BMP_INFO_HEADER_SIZE) as usize;
    skip_bytes(&mut reader, extra_header as u64)?;
    consumed += extra_header;

    // Palette entries are BGR0 quads, expanded to RGB pixel words
    let palette: Vec<u32> = if bits_per_pixel <= 8 {
        let max_colors = 1usize << bits_per_pixel;
        let num_colors = match colors_used as usize {
            0 => max_colors,
            n => n.min(max_colors),
        };
        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw).map_err(truncated)?;
        consumed += raw.len();
        raw.chunks_exact(4)
            .map(|q| color::compose_rgb(q[2], q[1], q[0]))
            .collect()
    } else {
        Vec::new()
    };

    // Skip to pixel data (bitfield masks, gaps)
    if pixel_offset > consumed {
        skip_bytes(&mut reader, (pixel_offset - consumed) as u64)?;
    }

    let lookup = |index: u8| -> IoResult<u32> {
        palette.get(index as usize).copied().ok_or_else(|| {
            IoError::DecodeError(format!("palette index {} out of range", index))
        })
    };

    // Rows are 4-byte aligned
    let row_stride = row_size(width, bits_per_pixel as usize)?.next_multiple_of(4);
    let mut row_buffer = Vec::new();
    let mut pixels = Vec::new();

    for _ in 0..height {
        read_row(&mut reader, &mut row_buffer, row_stride)?;

        for xi in 0..width as usize {
            let pixel = match bits_per_pixel {
                1 => lookup((row_buffer[xi / 8] >> (7 - (xi % 8))) & 1)?,
                4 => {
                    let byte = row_buffer[xi / 2];
                    lookup(if xi % 2 == 0 { byte >> 4 } else { byte & 0xF })?
                }
                8 => lookup(row_buffer[xi])?,
                24 => {
                    let idx = xi * 3;
                    color::compose_rgb(row_buffer[idx + 2], row_buffer[idx + 1], row_buffer[idx])
                }
                _ => {
                    let idx = xi * 4;
                    color::compose_rgba(
                        row_buffer[idx + 2],
                        row_buffer[idx + 1],
                        row_buffer[idx],
                        row_buffer[idx + 3],
                    )
                }
            };
            pixels.push(pixel);
        }
    }

    // Bottom-up files store the last image row first
    if !top_down {
        pixels = pixels
            .chunks_exact(width as usize)
            .rev()
            .flatten()
            .copied()
            .collect();
    }

    Ok(Pix::from_raw(width, height, pixels)?)
}
