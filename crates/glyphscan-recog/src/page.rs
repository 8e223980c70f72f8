//! Page reading
//!
//! Splits a page into lines, each line into graphemes, and classifies each
//! grapheme. The result holds one text line per segmented line, each
//! terminated by `'\n'`.

use crate::classify::Classifier;
use crate::error::{RecogError, RecogResult};
use crate::features::{StrokeAngleExtractor, UnimplementedStrokeAngles};
use crate::line::Line;
use crate::lineseg::{LineSegOptions, segment_lines};
use glyphscan_core::PixelSource;
use glyphscan_region::HoleCountOptions;

/// Options for reading a page
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Line segmentation options
    pub line: LineSegOptions,
    /// Hole counting options
    pub holes: HoleCountOptions,
}

impl PageOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the line segmentation options
    pub fn with_line_options(mut self, line: LineSegOptions) -> Self {
        self.line = line;
        self
    }

    /// Set the hole counting options
    pub fn with_hole_options(mut self, holes: HoleCountOptions) -> Self {
        self.holes = holes;
        self
    }

    /// Validate options
    pub fn validate(&self) -> RecogResult<()> {
        self.holes
            .validate()
            .map_err(|e| RecogError::InvalidParameter(e.to_string()))
    }
}

static NO_STROKE_ANGLES: UnimplementedStrokeAngles = UnimplementedStrokeAngles;

/// A decoded page and the classifier that reads it
pub struct Page<'a, S: PixelSource, C: Classifier + ?Sized> {
    source: &'a S,
    classifier: &'a C,
    options: PageOptions,
    stroke_angles: &'a dyn StrokeAngleExtractor,
}

impl<'a, S: PixelSource, C: Classifier + ?Sized> Page<'a, S, C> {
    /// Create a page reader with default options
    pub fn new(source: &'a S, classifier: &'a C) -> Self {
        Self {
            source,
            classifier,
            options: PageOptions::default(),
            stroke_angles: &NO_STROKE_ANGLES,
        }
    }

    /// Replace the options
    pub fn with_options(mut self, options: PageOptions) -> Self {
        self.options = options;
        self
    }

    /// Use a stroke-angle extractor for every grapheme
    pub fn with_stroke_extractor(mut self, extractor: &'a dyn StrokeAngleExtractor) -> Self {
        self.stroke_angles = extractor;
        self
    }

    /// Current options
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Segment the page into lines, top to bottom
    pub fn lines(&self) -> Vec<Line<'a, S>> {
        segment_lines(self.source, &self.options.line)
            .into_iter()
            .map(|r| Line::new(self.source, r.top, r.bottom))
            .collect()
    }

    /// Read the page
    ///
    /// A page without ink reads as the empty string. A line that cannot be
    /// split is logged and contributes an empty line.
    ///
    /// # Errors
    ///
    /// Returns [`RecogError::InvalidParameter`] if the options are invalid.
    pub fn read(&self) -> RecogResult<String> {
        self.options.validate()?;

        let lines = self.lines();
        tracing::debug!(
            "reading {}x{} page: {} lines",
            self.source.width(),
            self.source.height(),
            lines.len()
        );

        let mut text = String::new();
        for line in &lines {
            match line.read(self.classifier, &self.options.holes, self.stroke_angles) {
                Ok(s) => text.push_str(&s),
                Err(e) => {
                    tracing::warn!("skipping line {}..={}: {}", line.top(), line.bottom(), e);
                }
            }
            text.push('\n');
        }
        Ok(text)
    }
}
