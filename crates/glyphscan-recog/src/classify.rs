//! Classification contract
//!
//! Mapping feature records to characters is left to a [`Classifier`].
//! [`Font`] stands in for a font-backed classifier and answers every
//! grapheme with [`PLACEHOLDER`].

use crate::features::GraphemeFeatures;

/// Character reported when no real classification is available
pub const PLACEHOLDER: char = '?';

/// Maps a grapheme's features to a character
pub trait Classifier {
    /// Classify one grapheme
    fn classify(&self, features: &GraphemeFeatures) -> char;
}

impl<F> Classifier for F
where
    F: Fn(&GraphemeFeatures) -> char,
{
    fn classify(&self, features: &GraphemeFeatures) -> char {
        self(features)
    }
}

/// A named font used for classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    name: String,
}

impl Font {
    /// Create a font from its identifier
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            name: identifier.into(),
        }
    }

    /// The font identifier
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Classifier for Font {
    fn classify(&self, _features: &GraphemeFeatures) -> char {
        PLACEHOLDER
    }
}
