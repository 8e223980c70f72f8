//! Hole counting by sampled reachability
//!
//! Paper-colored sample points that cannot reach the paper outside a glyph
//! must be enclosed by ink. Enclosed samples that can reach one another lie
//! in the same hole, so the hole count is the number of clusters left after
//! merging mutually reachable samples.
//!
//! Sampling keeps this tractable but holes thinner than the sampling stride
//! can be missed.

use crate::classify::{is_foreground, is_similar};
use crate::error::{RegionError, RegionResult};
use crate::walker::ComponentWalker;
use glyphscan_core::{PixelSource, Point, Region};
use std::collections::BTreeSet;

/// Options for hole counting
#[derive(Debug, Clone)]
pub struct HoleCountOptions {
    /// The region width is divided by this to get the sampling stride
    pub sample_divisions: u32,
    /// Paper margin added around the region before traversal, so that
    /// background outside a tightly trimmed glyph stays connected
    pub margin: u32,
}

impl Default for HoleCountOptions {
    fn default() -> Self {
        Self {
            sample_divisions: 10,
            margin: 1,
        }
    }
}

impl HoleCountOptions {
    /// Set the number of sample divisions across the region width
    pub fn with_sample_divisions(mut self, divisions: u32) -> Self {
        self.sample_divisions = divisions;
        self
    }

    /// Set the traversal margin
    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    /// Validate the options
    pub fn validate(&self) -> RegionResult<()> {
        if self.sample_divisions == 0 {
            return Err(RegionError::InvalidParameters(
                "sample_divisions must be at least 1".to_string(),
            ));
        }
        if self.margin > i32::MAX as u32 {
            return Err(RegionError::InvalidParameters(format!(
                "margin too large: {}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Sampling stride for a region; never zero
    pub fn stride(&self, region: Region) -> usize {
        let span = (i64::from(region.right) - i64::from(region.left)).max(0) as u64;
        (span / u64::from(self.sample_divisions.max(1))).max(1) as usize
    }
}

/// Count the holes enclosed by ink inside `region`
///
/// An empty region has no holes.
///
/// # Errors
///
/// Returns [`RegionError::InvalidParameters`] if the options are invalid.
pub fn count_holes<S: PixelSource + ?Sized>(
    source: &S,
    region: Region,
    options: &HoleCountOptions,
) -> RegionResult<usize> {
    options.validate()?;

    let region = region.clip_to(source.width(), source.height());
    if region.is_empty() {
        return Ok(0);
    }

    let traversal = region
        .expand(options.margin as i32)
        .clip_to(source.width(), source.height());
    let walker = ComponentWalker::new(source, traversal)?;
    let color = |p: Point| source.color_at(p.x as u32, p.y as u32);

    // The outer corner is usually paper; otherwise fall back to the first
    // paper pixel on the border.
    let corner = traversal.top_left();
    let reference = if is_foreground(color(corner)) {
        traversal.border_points().find(|&p| !is_foreground(color(p)))
    } else {
        Some(corner)
    };
    let Some(reference) = reference else {
        tracing::trace!("no paper on the border of {:?}", traversal);
        return Ok(0);
    };
    let reference_color = color(reference);
    let outside = walker.flood(reference)?;

    let stride = options.stride(region);
    let mut holes = BTreeSet::new();
    for y in (region.top..=region.bottom).step_by(stride) {
        for x in (region.left..=region.right).step_by(stride) {
            let p = Point::new(x, y);
            if is_similar(reference_color, color(p)) && !outside.is_marked(p) {
                holes.insert(p);
            }
        }
    }
    tracing::trace!(
        "{} enclosed samples in {:?} (stride {})",
        holes.len(),
        region,
        stride
    );

    // Drop every sample that reaches another surviving sample. A flood
    // depends only on its seed and survivors are only ever removed, so a
    // sample kept here cannot merge later: one pass leaves the set stable.
    // Each subject costs one flood, O(samples x area) overall.
    let subjects: Vec<Point> = holes.iter().copied().collect();
    for subject in subjects {
        let reach = walker.flood(subject)?;
        if holes.iter().any(|&p| p != subject && reach.is_marked(p)) {
            holes.remove(&subject);
        }
    }

    Ok(holes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphscan_core::{Color, Pix, PixMut};

    fn page(width: u32, height: u32) -> PixMut {
        Pix::new_filled(width, height, Color::WHITE)
            .unwrap()
            .try_into_mut()
            .unwrap()
    }

    fn frame(pix: &mut PixMut, r: Region) {
        for y in r.top..=r.bottom {
            for x in r.left..=r.right {
                if x == r.left || x == r.right || y == r.top || y == r.bottom {
                    pix.set_color(x as u32, y as u32, Color::BLACK).unwrap();
                }
            }
        }
    }

    #[test]
    fn test_stride_never_zero() {
        let opts = HoleCountOptions::default();
        assert_eq!(opts.stride(Region::new(0, 0, 3, 3)), 1);
        assert_eq!(opts.stride(Region::new(5, 0, 5, 0)), 1);
        assert_eq!(opts.stride(Region::new(0, 0, 40, 0)), 4);
    }

    #[test]
    fn test_square_frame_has_one_hole() {
        let mut pix = page(12, 12);
        frame(&mut pix, Region::new(2, 2, 9, 9));
        let pix: Pix = pix.into();
        let holes = count_holes(&pix, Region::new(2, 2, 9, 9), &HoleCountOptions::default());
        assert_eq!(holes.unwrap(), 1);
    }

    #[test]
    fn test_narrow_glyph_terminates() {
        // 3 pixels wide: stride would be zero without the guard
        let mut pix = page(7, 7);
        frame(&mut pix, Region::new(2, 1, 4, 5));
        let pix: Pix = pix.into();
        let holes = count_holes(&pix, Region::new(2, 1, 4, 5), &HoleCountOptions::default());
        assert_eq!(holes.unwrap(), 1);
    }

    #[test]
    fn test_frame_touching_image_edge() {
        // The frame covers the whole image border, so there is no outside
        // paper to measure from.
        let mut pix = page(6, 6);
        frame(&mut pix, Region::new(0, 0, 5, 5));
        let pix: Pix = pix.into();
        let holes = count_holes(&pix, Region::of_image(6, 6), &HoleCountOptions::default());
        assert_eq!(holes.unwrap(), 0);
    }

    #[test]
    fn test_all_ink_has_no_holes() {
        let pix = Pix::new_filled(4, 4, Color::BLACK).unwrap();
        let holes = count_holes(&pix, Region::of_image(4, 4), &HoleCountOptions::default());
        assert_eq!(holes.unwrap(), 0);
    }

    #[test]
    fn test_empty_region() {
        let pix: Pix = page(4, 4).into();
        let holes = count_holes(&pix, Region::new(3, 3, 1, 1), &HoleCountOptions::default());
        assert_eq!(holes.unwrap(), 0);
    }

    #[test]
    fn test_samples_in_one_hole_collapse() {
        // Two frames side by side, sampled densely enough that each
        // interior holds many enclosed samples.
        let mut pix = page(30, 14);
        frame(&mut pix, Region::new(1, 1, 13, 12));
        frame(&mut pix, Region::new(16, 1, 28, 12));
        let pix: Pix = pix.into();
        let opts = HoleCountOptions::default().with_sample_divisions(29);
        assert_eq!(opts.stride(Region::of_image(30, 14)), 1);
        let holes = count_holes(&pix, Region::of_image(30, 14), &opts);
        assert_eq!(holes.unwrap(), 2);
    }

    #[test]
    fn test_huge_margin_is_clipped() {
        let mut pix = page(8, 8);
        frame(&mut pix, Region::new(1, 1, 6, 6));
        let pix: Pix = pix.into();
        for margin in [i32::MAX as u32, i32::MAX as u32 - 1] {
            let opts = HoleCountOptions::default().with_margin(margin);
            let holes = count_holes(&pix, Region::new(1, 1, 6, 6), &opts);
            assert_eq!(holes.unwrap(), 1);
        }
        let opts = HoleCountOptions::default().with_margin(u32::MAX);
        assert!(matches!(
            count_holes(&pix, Region::of_image(8, 8), &opts),
            Err(RegionError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_stride_on_extreme_region() {
        let opts = HoleCountOptions::default();
        let wide = Region::new(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(opts.stride(wide), (u32::MAX / 10) as usize);
    }

    #[test]
    fn test_invalid_options() {
        let pix: Pix = page(4, 4).into();
        let opts = HoleCountOptions::default().with_sample_divisions(0);
        assert!(matches!(
            count_holes(&pix, Region::of_image(4, 4), &opts),
            Err(RegionError::InvalidParameters(_))
        ));
    }
}
