//! Graphemes
//!
//! A grapheme is a region of the page presumed to hold one character. It
//! borrows the page and never copies pixels; trimming only narrows the
//! region.

use crate::classify::Classifier;
use crate::error::RecogResult;
use crate::features::{GraphemeFeatures, StrokeAngle, StrokeAngleExtractor, UnimplementedStrokeAngles};
use glyphscan_core::{Box, PixelSource, Region};
use glyphscan_region::{HoleCountOptions, count_holes, trim_bounds};

static NO_STROKE_ANGLES: UnimplementedStrokeAngles = UnimplementedStrokeAngles;

/// One glyph-sized region of a page
pub struct Grapheme<'a, S: PixelSource> {
    source: &'a S,
    region: Region,
    stroke_angles: &'a dyn StrokeAngleExtractor,
}

impl<'a, S: PixelSource> Grapheme<'a, S> {
    /// Create a grapheme over `region` of `source`
    pub fn new(source: &'a S, region: Region) -> Self {
        Self {
            source,
            region,
            stroke_angles: &NO_STROKE_ANGLES,
        }
    }

    /// Use a different stroke-angle extractor
    pub fn with_stroke_extractor(mut self, extractor: &'a dyn StrokeAngleExtractor) -> Self {
        self.stroke_angles = extractor;
        self
    }

    /// Current region
    pub fn region(&self) -> Region {
        self.region
    }

    /// Shrink the region to the ink it contains
    ///
    /// Leaves an empty region when there is no ink.
    pub fn trim(&mut self) {
        self.region = trim_bounds(self.source, self.region);
    }

    /// Check whether the region holds no pixels
    pub fn is_empty(&self) -> bool {
        self.region.is_empty()
    }

    /// Number of holes in the current region
    pub fn count_holes(&self, options: &HoleCountOptions) -> RecogResult<usize> {
        Ok(count_holes(self.source, self.region, options)?)
    }

    /// Stroke angles of the current region
    pub fn find_stroke_angles(&self) -> Vec<StrokeAngle> {
        self.stroke_angles.extract(self.source, self.region)
    }

    /// Trim, then collect features
    ///
    /// Returns `None` when the grapheme holds no ink.
    pub fn features(&mut self, options: &HoleCountOptions) -> RecogResult<Option<GraphemeFeatures>> {
        self.trim();
        if self.is_empty() {
            tracing::trace!("grapheme has no ink, skipping");
            return Ok(None);
        }

        let hole_count = self.count_holes(options)?;
        let stroke_angles = self.find_stroke_angles();
        let r = self.region;
        tracing::debug!(
            "grapheme {:?}: {} holes, {} stroke angles",
            r,
            hole_count,
            stroke_angles.len()
        );

        Ok(Some(GraphemeFeatures {
            bounding_box: Box::from_corners(r.left, r.top, r.right, r.bottom),
            hole_count,
            stroke_angles,
        }))
    }

    /// Trim, collect features, and classify
    ///
    /// Returns `None` when the grapheme holds no ink.
    pub fn read<C: Classifier + ?Sized>(
        &mut self,
        classifier: &C,
        options: &HoleCountOptions,
    ) -> RecogResult<Option<char>> {
        Ok(self
            .features(options)?
            .map(|features| classifier.classify(&features)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Font;
    use glyphscan_core::{Color, Pix};

    struct Fixed;

    impl StrokeAngleExtractor for Fixed {
        fn extract(&self, _source: &dyn PixelSource, _region: Region) -> Vec<StrokeAngle> {
            vec![StrokeAngle(90.0)]
        }
    }

    fn square_frame() -> Pix {
        let mut pix = Pix::new_filled(12, 12, Color::WHITE)
            .unwrap()
            .try_into_mut()
            .unwrap();
        for i in 3..=8 {
            for (x, y) in [(i, 3), (i, 8), (3, i), (8, i)] {
                pix.set_color(x, y, Color::BLACK).unwrap();
            }
        }
        pix.into()
    }

    #[test]
    fn test_features_of_frame() {
        let pix = square_frame();
        let mut g = Grapheme::new(&pix, Region::of_image(12, 12));
        let features = g.features(&HoleCountOptions::default()).unwrap().unwrap();
        assert_eq!(features.bounding_box, Box::from_corners(3, 3, 8, 8));
        assert_eq!(features.hole_count, 1);
        assert!(features.stroke_angles.is_empty());
        assert_eq!(g.region(), Region::new(3, 3, 8, 8));
    }

    #[test]
    fn test_custom_extractor() {
        let pix = square_frame();
        let extractor = Fixed;
        let mut g = Grapheme::new(&pix, Region::of_image(12, 12)).with_stroke_extractor(&extractor);
        let features = g.features(&HoleCountOptions::default()).unwrap().unwrap();
        assert_eq!(features.stroke_angles, vec![StrokeAngle(90.0)]);
    }

    #[test]
    fn test_blank_grapheme_skipped() {
        let pix = Pix::new_filled(5, 5, Color::WHITE).unwrap();
        let mut g = Grapheme::new(&pix, Region::of_image(5, 5));
        let c = g.read(&Font::new("any"), &HoleCountOptions::default()).unwrap();
        assert_eq!(c, None);
        assert!(g.is_empty());
    }

    #[test]
    fn test_read_placeholder() {
        let pix = square_frame();
        let mut g = Grapheme::new(&pix, Region::of_image(12, 12));
        let c = g.read(&Font::new("any"), &HoleCountOptions::default()).unwrap();
        assert_eq!(c, Some('?'));
    }
}
