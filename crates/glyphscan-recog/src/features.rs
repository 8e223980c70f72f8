//! Grapheme feature records
//!
//! The record handed to a [`Classifier`](crate::Classifier): bounding box,
//! hole count, and stroke angles.

use glyphscan_core::{Box, PixelSource, Region};

/// Orientation of one straight stroke segment, in degrees
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct StrokeAngle(pub f32);

/// Shape features of one trimmed grapheme
#[derive(Debug, Clone, PartialEq)]
pub struct GraphemeFeatures {
    /// Trimmed bounding box
    pub bounding_box: Box,
    /// Number of enclosed holes
    pub hole_count: usize,
    /// Dominant stroke directions; may be empty
    pub stroke_angles: Vec<StrokeAngle>,
}

/// Extracts dominant stroke directions from a trimmed grapheme
pub trait StrokeAngleExtractor {
    /// Angles of the straight segments in the stroke skeleton of `region`
    fn extract(&self, source: &dyn PixelSource, region: Region) -> Vec<StrokeAngle>;
}

/// Stroke-angle extraction that has no algorithm yet
///
/// Always returns an empty sequence.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnimplementedStrokeAngles;

impl StrokeAngleExtractor for UnimplementedStrokeAngles {
    fn extract(&self, _source: &dyn PixelSource, _region: Region) -> Vec<StrokeAngle> {
        Vec::new()
    }
}
