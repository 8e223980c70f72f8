//! PNM (PBM/PGM/PPM) image format support
//!
//! Reads both the ASCII (P1, P2, P3) and binary (P4, P5, P6) variants.
//! Samples with a maxval other than 255 are rescaled to 8 bits.

use crate::{IoError, IoResult, read_row, row_size};
use glyphscan_core::{Error, Pix, color};
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Bitmap,
    Graymap,
    Pixmap,
}

#[derive(Debug, Clone, Copy)]
struct Header {
    kind: Kind,
    ascii: bool,
    width: u32,
    height: u32,
    maxval: u32,
}

/// Pulls whitespace-separated header tokens, skipping `#` comments.
struct Tokens<R> {
    reader: R,
}

impl<R: BufRead> Tokens<R> {
    fn next_byte(&mut self) -> IoResult<Option<u8>> {
        let buf = self.reader.fill_buf()?;
        let Some(&b) = buf.first() else {
            return Ok(None);
        };
        self.reader.consume(1);
        Ok(Some(b))
    }

    fn token(&mut self) -> IoResult<String> {
        let mut out = String::new();
        loop {
            let Some(b) = self.next_byte()? else {
                if out.is_empty() {
                    return Err(IoError::DecodeError(
                        "unexpected end of PNM header".to_string(),
                    ));
                }
                return Ok(out);
            };
            match b {
                b'#' => {
                    // Comment runs to end of line
                    while let Some(c) = self.next_byte()? {
                        if c == b'\n' || c == b'\r' {
                            break;
                        }
                    }
                    if !out.is_empty() {
                        return Ok(out);
                    }
                }
                b if b.is_ascii_whitespace() => {
                    if !out.is_empty() {
                        return Ok(out);
                    }
                }
                b => out.push(b as char),
            }
        }
    }

    fn number(&mut self, what: &str) -> IoResult<u32> {
        let tok = self.token()?;
        tok.parse()
            .map_err(|_| IoError::DecodeError(format!("invalid PNM {}: {:?}", what, tok)))
    }

    /// ASCII bitmaps may pack digits without separators.
    fn bit(&mut self) -> IoResult<u32> {
        loop {
            match self.next_byte()? {
                Some(b'0') => return Ok(0),
                Some(b'1') => return Ok(1),
                Some(b'#') => {
                    while let Some(c) = self.next_byte()? {
                        if c == b'\n' || c == b'\r' {
                            break;
                        }
                    }
                }
                Some(b) if b.is_ascii_whitespace() => {}
                Some(b) => {
                    return Err(IoError::DecodeError(format!(
                        "invalid PBM sample: {:?}",
                        b as char
                    )));
                }
                None => {
                    return Err(IoError::DecodeError(
                        "unexpected end of PBM data".to_string(),
                    ));
                }
            }
        }
    }
}

fn read_header<R: BufRead>(tokens: &mut Tokens<R>) -> IoResult<Header> {
    let magic = tokens.token()?;
    let (kind, ascii) = match magic.as_str() {
        "P1" => (Kind::Bitmap, true),
        "P2" => (Kind::Graymap, true),
        "P3" => (Kind::Pixmap, true),
        "P4" => (Kind::Bitmap, false),
        "P5" => (Kind::Graymap, false),
        "P6" => (Kind::Pixmap, false),
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM type: {}",
                other
            )));
        }
    };

    let width = tokens.number("width")?;
    let height = tokens.number("height")?;
    let maxval = if kind == Kind::Bitmap {
        1
    } else {
        tokens.number("maxval")?
    };

    if maxval == 0 || maxval > 65535 {
        return Err(IoError::DecodeError(format!(
            "invalid PNM maxval: {}",
            maxval
        )));
    }

    Ok(Header {
        kind,
        ascii,
        width,
        height,
        maxval,
    })
}

#[inline]
fn scale(sample: u32, maxval: u32) -> u8 {
    if maxval == 255 {
        sample.min(255) as u8
    } else {
        ((sample.min(maxval) * 255 + maxval / 2) / maxval) as u8
    }
}

/// Read a PNM image
pub fn read_pnm<R: BufRead>(reader: R) -> IoResult<Pix> {
    let mut tokens = Tokens { reader };
    let header = read_header(&mut tokens)?;

    let (w, h) = (header.width, header.height);
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimension {
            width: w,
            height: h,
        }
        .into());
    }
    let mut pixels = Vec::new();

    if header.ascii {
        for _ in 0..h {
            for _ in 0..w {
                let pixel = match header.kind {
                    // PBM: 1 is black
                    Kind::Bitmap => {
                        let v = if tokens.bit()? == 1 { 0 } else { 255 };
                        color::compose_rgb(v, v, v)
                    }
                    Kind::Graymap => {
                        let v = scale(tokens.number("sample")?, header.maxval);
                        color::compose_rgb(v, v, v)
                    }
                    Kind::Pixmap => {
                        let r = scale(tokens.number("sample")?, header.maxval);
                        let g = scale(tokens.number("sample")?, header.maxval);
                        let b = scale(tokens.number("sample")?, header.maxval);
                        color::compose_rgb(r, g, b)
                    }
                };
                pixels.push(pixel);
            }
        }
        return Ok(Pix::from_raw(w, h, pixels)?);
    }

    // Binary payload starts right after the single whitespace that ended
    // the last header token.
    let mut reader = tokens.reader;
    let wide = header.maxval > 255;
    let bits_per_sample = if wide { 16 } else { 8 };
    let row_bytes = match header.kind {
        Kind::Bitmap => row_size(w, 1)?,
        Kind::Graymap => row_size(w, bits_per_sample)?,
        Kind::Pixmap => row_size(w, 3 * bits_per_sample)?,
    };
    let mut row = Vec::new();
    let sample = |row: &[u8], i: usize| -> u32 {
        if wide {
            u16::from_be_bytes([row[i * 2], row[i * 2 + 1]]) as u32
        } else {
            row[i] as u32
        }
    };

    for _ in 0..h {
        read_row(&mut reader, &mut row, row_bytes)?;
        for xi in 0..w as usize {
            let pixel = match header.kind {
                Kind::Bitmap => {
                    let bit = (row[xi / 8] >> (7 - (xi % 8))) & 1;
                    let v = if bit == 1 { 0 } else { 255 };
                    color::compose_rgb(v, v, v)
                }
                Kind::Graymap => {
                    let v = scale(sample(&row, xi), header.maxval);
                    color::compose_rgb(v, v, v)
                }
                Kind::Pixmap => color::compose_rgb(
                    scale(sample(&row, xi * 3), header.maxval),
                    scale(sample(&row, xi * 3 + 1), header.maxval),
                    scale(sample(&row, xi * 3 + 2), header.maxval),
                ),
            };
            pixels.push(pixel);
        }
    }

    Ok(Pix::from_raw(w, h, pixels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::Color;
    use std::io::Cursor;

    #[test]
    fn test_ascii_pbm_with_comment() {
        let data = b"P1\n# a comment\n3 2\n1 0 1\n010\n";
        let pix = read_pnm(Cursor::new(&data[..])).unwrap();
        assert_eq!((pix.width(), pix.height()), (3, 2));
        assert_eq!(pix.color(0, 0), Some(Color::BLACK));
        assert_eq!(pix.color(1, 0), Some(Color::WHITE));
        assert_eq!(pix.color(1, 1), Some(Color::BLACK));
        assert_eq!(pix.color(2, 1), Some(Color::WHITE));
    }

    #[test]
    fn test_binary_pgm() {
        let mut data = b"P5 2 1 255\n".to_vec();
        data.extend_from_slice(&[0, 200]);
        let pix = read_pnm(Cursor::new(&data[..])).unwrap();
        assert_eq!(pix.color(0, 0), Some(Color::BLACK));
        assert_eq!(pix.color(1, 0), Some(Color::gray(200)));
    }

    #[test]
    fn test_binary_ppm_and_pbm() {
        let mut data = b"P6\n1 1\n255\n".to_vec();
        data.extend_from_slice(&[10, 20, 30]);
        let pix = read_pnm(Cursor::new(&data[..])).unwrap();
        assert_eq!(pix.color(0, 0), Some(Color::new(10, 20, 30)));

        let mut data = b"P4\n9 1\n".to_vec();
        data.extend_from_slice(&[0b1000_0000, 0b1000_0000]);
        let pix = read_pnm(Cursor::new(&data[..])).unwrap();
        assert_eq!(pix.color(0, 0), Some(Color::BLACK));
        assert_eq!(pix.color(1, 0), Some(Color::WHITE));
        assert_eq!(pix.color(8, 0), Some(Color::BLACK));
    }

    #[test]
    fn test_maxval_rescaled() {
        let data = b"P2 2 1 15\n0 15\n";
        let pix = read_pnm(Cursor::new(&data[..])).unwrap();
        assert_eq!(pix.color(1, 0), Some(Color::WHITE));
    }

    #[test]
    fn test_huge_dimensions_without_data() {
        for data in [
            &b"P5 4000000000 4000000000 255\n"[..],
            &b"P6 4000000000 4000000000 65535\n"[..],
            &b"P4 4000000000 1\n"[..],
            &b"P2 4000000000 4000000000 255\n0 0"[..],
        ] {
            let err = read_pnm(Cursor::new(data)).unwrap_err();
            assert!(matches!(err, IoError::DecodeError(_)), "{err:?}");
        }
    }

    #[test]
    fn test_zero_width_is_rejected() {
        let err = read_pnm(Cursor::new(&b"P5 0 3 255\n"[..])).unwrap_err();
        assert!(matches!(err, IoError::Core(_)));
    }

    #[test]
    fn test_truncated_payload() {
        let data = b"P5 4 4 255\n\x00\x00";
        let err = read_pnm(Cursor::new(&data[..])).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
