//! Synthetic page fixtures
//!
//! Every fixture is a white page with black ink drawn at known positions,
//! so expected line boundaries, extents, and hole counts can be stated
//! exactly in tests.

use crate::{TestError, TestResult};
use glyphscan_core::{Color, Pix, PixMut, Region};

/// Ink color used by all fixtures
pub const INK: Color = Color::BLACK;

/// Paper color used by all fixtures
pub const PAPER: Color = Color::WHITE;

fn page(width: u32, height: u32) -> TestResult<PixMut> {
    let pix = Pix::new_filled(width, height, PAPER)?;
    Ok(pix.try_into_mut().unwrap_or_else(|p| p.to_mut()))
}

/// An all-background page
pub fn blank_page(width: u32, height: u32) -> TestResult<Pix> {
    Ok(page(width, height)?.into())
}

/// Fill an inclusive rectangle, clipped to the page
pub fn fill_rect(pix: &mut PixMut, region: Region, color: Color) {
    let clipped = region.clip_to(pix.width(), pix.height());
    if clipped.is_empty() {
        return;
    }
    let value = color.to_pixel32();
    for y in clipped.top..=clipped.bottom {
        for x in clipped.left..=clipped.right {
            pix.set_pixel_unchecked(x as u32, y as u32, value);
        }
    }
}

/// Paint every pixel whose offset from `(cx, cy)` satisfies `inside`
fn paint_where(pix: &mut PixMut, cx: i32, cy: i32, reach: i32, inside: impl Fn(i64) -> bool) {
    let value = INK.to_pixel32();
    for y in (cy - reach)..=(cy + reach) {
        for x in (cx - reach)..=(cx + reach) {
            if x < 0 || y < 0 || x >= pix.width() as i32 || y >= pix.height() as i32 {
                continue;
            }
            let (dx, dy) = ((x - cx) as i64, (y - cy) as i64);
            if inside(dx * dx + dy * dy) {
                pix.set_pixel_unchecked(x as u32, y as u32, value);
            }
        }
    }
}

fn check_fits(
    name: &'static str,
    width: u32,
    height: u32,
    cx: i32,
    cy: i32,
    reach: i32,
) -> TestResult<()> {
    if cx - reach < 0 || cy - reach < 0 || cx + reach >= width as i32 || cy + reach >= height as i32
    {
        return Err(TestError::FixtureBounds {
            name,
            width,
            height,
        });
    }
    Ok(())
}

fn draw_ring(pix: &mut PixMut, cx: i32, cy: i32, outer: i32, inner: i32) {
    let (o2, i2) = ((outer as i64).pow(2), (inner as i64).pow(2));
    paint_where(pix, cx, cy, outer, |d2| d2 <= o2 && d2 > i2);
}

/// A page with one ring (an "o"): one enclosed hole
///
/// Ink covers `inner < distance <= outer` around `(cx, cy)`.
pub fn ring(width: u32, height: u32, cx: i32, cy: i32, outer: i32, inner: i32) -> TestResult<Pix> {
    check_fits("ring", width, height, cx, cy, outer)?;
    let mut pix = page(width, height)?;
    draw_ring(&mut pix, cx, cy, outer, inner);
    Ok(pix.into())
}

/// A page with one filled disk: no holes
pub fn disk(width: u32, height: u32, cx: i32, cy: i32, radius: i32) -> TestResult<Pix> {
    check_fits("disk", width, height, cx, cy, radius)?;
    let mut pix = page(width, height)?;
    let r2 = (radius as i64).pow(2);
    paint_where(&mut pix, cx, cy, radius, |d2| d2 <= r2);
    Ok(pix.into())
}

/// A page with two stacked rings sharing ink (an "8"): two holes
///
/// The ring centers are about `outer + inner` apart vertically, so the rings
/// overlap while their holes stay separated by a full stroke.
pub fn figure_eight(
    width: u32,
    height: u32,
    cx: i32,
    cy: i32,
    outer: i32,
    inner: i32,
) -> TestResult<Pix> {
    let offset = (outer + inner) / 2;
    check_fits("figure_eight", width, height, cx, cy, offset + outer)?;
    let mut pix = page(width, height)?;
    draw_ring(&mut pix, cx, cy - offset, outer, inner);
    draw_ring(&mut pix, cx, cy + offset, outer, inner);
    Ok(pix.into())
}

/// A page with one filled rectangle of ink
pub fn rect_page(width: u32, height: u32, region: Region) -> TestResult<Pix> {
    let mut pix = page(width, height)?;
    fill_rect(&mut pix, region, INK);
    Ok(pix.into())
}

/// A page with horizontal text bands
///
/// Each `(top, bottom)` band (inclusive) is filled with block "glyphs"
/// `glyph_width` pixels wide separated by `gap` pixels of paper, starting
/// `gap` pixels from the left edge.
pub fn text_bands(
    width: u32,
    height: u32,
    bands: &[(i32, i32)],
    glyph_width: i32,
    gap: i32,
) -> TestResult<Pix> {
    let mut pix = page(width, height)?;
    let step = (glyph_width + gap).max(1);
    for &(top, bottom) in bands {
        let mut left = gap;
        while left + glyph_width <= width as i32 {
            fill_rect(
                &mut pix,
                Region::new(left, top, left + glyph_width - 1, bottom),
                INK,
            );
            left += step;
        }
    }
    Ok(pix.into())
}

/// Count the glyphs [`text_bands`] draws per band
pub fn glyphs_per_band(width: u32, glyph_width: i32, gap: i32) -> usize {
    let step = (glyph_width + gap).max(1);
    let mut count = 0;
    let mut left = gap;
    while left + glyph_width <= width as i32 {
        count += 1;
        left += step;
    }
    count
}

/// Encode an image as an uncompressed bottom-up 24-bit BMP
///
/// Used to hand images to decoders and the command-line binary without
/// checking binary files into the tree.
pub fn to_bmp_bytes(pix: &Pix) -> Vec<u8> {
    let (width, height) = (pix.width(), pix.height());
    let stride = (width as usize * 3).div_ceil(4) * 4;
    let offset = 54u32;
    let file_size = offset + (stride * height as usize) as u32;

    let mut out = Vec::with_capacity(file_size as usize);
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0; 4]);
    out.extend_from_slice(&offset.to_le_bytes());
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&(width as i32).to_le_bytes());
    out.extend_from_slice(&(height as i32).to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&[0; 24]);

    let mut line = vec![0u8; stride];
    for y in (0..height).rev() {
        for x in 0..width {
            let (r, g, b) = pix.get_rgb(x, y).unwrap_or((255, 255, 255));
            let i = x as usize * 3;
            line[i] = b;
            line[i + 1] = g;
            line[i + 2] = r;
        }
        out.extend_from_slice(&line);
    }
    out
}
