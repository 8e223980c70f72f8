//! glyphscan-io - Image decoding for glyphscan
//!
//! Turns BMP, PNM, PNG, and JPEG files into 32-bit RGB [`Pix`] images.
//! The format is sniffed from the leading magic bytes, never from the
//! file extension.
//!
//! ```no_run
//! use glyphscan_io::read_image;
//!
//! let pix = read_image("page.bmp").unwrap();
//! println!("{}x{}", pix.width(), pix.height());
//! ```

#[cfg(feature = "bmp")]
pub mod bmp;
mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};
pub use glyphscan_core::ImageFormat;

use glyphscan_core::Pix;
use std::io::{Cursor, Read};
use std::path::Path;

/// Read an image from a file path.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be read,
/// [`IoError::UnsupportedFormat`] for unknown or disabled formats, and
/// [`IoError::DecodeError`] for malformed data.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    tracing::debug!("decoding {} ({} bytes)", path.display(), data.len());
    read_image_mem(&data)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    let pix = decode(format, data)?;
    let mut pix = pix.try_into_mut().unwrap_or_else(|p| p.to_mut());
    pix.set_informat(format);
    Ok(pix.into())
}

fn decode(format: ImageFormat, data: &[u8]) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(Cursor::new(data)),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(Cursor::new(data)),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support is not enabled",
            other
        ))),
    }
}

const TRUNCATED: &str = "unexpected end of image data";

/// Map an `UnexpectedEof` into a decode error; everything else stays I/O.
pub(crate) fn truncated(err: std::io::Error) -> IoError {
    if err.kind() == std::io::ErrorKind::UnexpectedEof {
        IoError::DecodeError(TRUNCATED.to_string())
    } else {
        IoError::Io(err)
    }
}

/// Replace the contents of `row` with the next `len` bytes of `reader`.
///
/// The buffer only grows as bytes arrive, so a header that declares huge
/// dimensions over a short payload fails as truncated data instead of
/// allocating up front.
pub(crate) fn read_row<R: Read>(reader: &mut R, row: &mut Vec<u8>, len: usize) -> IoResult<()> {
    row.clear();
    reader.by_ref().take(len as u64).read_to_end(row)?;
    if row.len() < len {
        return Err(IoError::DecodeError(TRUNCATED.to_string()));
    }
    Ok(())
}

/// Discard the next `len` bytes of `reader`.
pub(crate) fn skip_bytes<R: Read>(reader: &mut R, len: u64) -> IoResult<()> {
    let skipped = std::io::copy(&mut reader.by_ref().take(len), &mut std::io::sink())?;
    if skipped < len {
        return Err(IoError::DecodeError(TRUNCATED.to_string()));
    }
    Ok(())
}

/// Row size in bytes, or a decode error when the declared width overflows.
pub(crate) fn row_size(width: u32, bits_per_pixel: usize) -> IoResult<usize> {
    (width as usize)
        .checked_mul(bits_per_pixel)
        .map(|bits| bits.div_ceil(8))
        .ok_or_else(|| IoError::DecodeError(format!("image width {} too large", width)))
}
