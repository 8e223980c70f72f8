//! Text lines
//!
//! A line is a full-width band of the page. Splitting it into graphemes
//! seeds an extent walk at every ink pixel not yet covered by a found
//! extent, then merges extents whose columns overlap so that dotted glyphs
//! such as `i` and `j` stay whole.

use crate::classify::Classifier;
use crate::error::RecogResult;
use crate::features::StrokeAngleExtractor;
use crate::grapheme::Grapheme;
use glyphscan_core::{Box, PixelSource, Point, Region};
use glyphscan_region::{ComponentWalker, HoleCountOptions, is_foreground};

/// One text line of a page
pub struct Line<'a, S: PixelSource> {
    source: &'a S,
    region: Region,
}

impl<'a, S: PixelSource> Line<'a, S> {
    /// Create a line spanning rows `top..=bottom` across the full page width
    pub fn new(source: &'a S, top: i32, bottom: i32) -> Self {
        Self {
            source,
            region: Region::new(0, top, source.width() as i32 - 1, bottom),
        }
    }

    /// The line band
    pub fn region(&self) -> Region {
        self.region
    }

    /// First row of the line
    pub fn top(&self) -> i32 {
        self.region.top
    }

    /// Last row of the line
    pub fn bottom(&self) -> i32 {
        self.region.bottom
    }

    /// Extents of the ink blobs in this line, merged by column overlap and
    /// sorted left to right
    pub fn grapheme_boxes(&self) -> RecogResult<Vec<Box>> {
        let walker = ComponentWalker::new(self.source, self.region)?;
        let region = walker.region();

        let mut extents: Vec<Box> = Vec::new();
        for x in region.left..=region.right {
            for y in region.top..=region.bottom {
                let p = Point::new(x, y);
                if !is_foreground(self.source.color_at(x as u32, y as u32)) {
                    continue;
                }
                if extents.iter().any(|b| b.contains_point(p)) {
                    continue;
                }
                extents.push(walker.find_extent(p)?);
            }
        }

        extents.sort_by_key(|b| (b.low.x, b.high.x));
        let mut merged: Vec<Box> = Vec::with_capacity(extents.len());
        for extent in extents {
            match merged.last_mut() {
                Some(last) if last.overlaps_horizontally(&extent) => *last = last.union(&extent),
                _ => merged.push(extent),
            }
        }

        tracing::debug!(
            "line {}..={}: {} graphemes",
            self.region.top,
            self.region.bottom,
            merged.len()
        );
        Ok(merged)
    }

    /// Split the line into graphemes, left to right
    pub fn graphemes(&self) -> RecogResult<Vec<Grapheme<'a, S>>> {
        Ok(self
            .grapheme_boxes()?
            .into_iter()
            .map(|b| Grapheme::new(self.source, b.to_region()))
            .collect())
    }

    /// Classify every grapheme and concatenate the characters
    ///
    /// A grapheme that fails is logged and skipped.
    pub fn read<C: Classifier + ?Sized>(
        &self,
        classifier: &C,
        options: &HoleCountOptions,
        stroke_angles: &'a dyn StrokeAngleExtractor,
    ) -> RecogResult<String> {
        let mut text = String::new();
        for grapheme in self.graphemes()? {
            let mut grapheme = grapheme.with_stroke_extractor(stroke_angles);
            match grapheme.read(classifier, options) {
                Ok(Some(c)) => text.push(c),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("skipping grapheme at {:?}: {}", grapheme.region(), e);
                }
            }
        }
        Ok(text)
    }
}
