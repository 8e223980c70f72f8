//! Pixel classification predicates

use glyphscan_core::Color;

/// A channel strictly below this value is dark
pub const FOREGROUND_THRESHOLD: u8 = 128;

/// Channels differing by strictly less than this are similar
pub const SIMILARITY_TOLERANCE: u8 = 10;

/// Check whether a color is ink (every channel dark)
#[inline]
pub fn is_foreground(color: Color) -> bool {
    color
        .channels()
        .iter()
        .all(|&c| c < FOREGROUND_THRESHOLD)
}

/// Check whether two colors belong to the same blob
///
/// Symmetric and reflexive but not transitive: a run of small steps can
/// drift arbitrarily far from where it started.
#[inline]
pub fn is_similar(a: Color, b: Color) -> bool {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .all(|(&x, &y)| x.abs_diff(y) < SIMILARITY_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreground_threshold() {
        assert!(is_foreground(Color::BLACK));
        assert!(is_foreground(Color::gray(127)));
        assert!(!is_foreground(Color::gray(128)));
        // one bright channel is enough to be paper
        assert!(!is_foreground(Color::new(0, 0, 200)));
        assert!(!is_foreground(Color::WHITE));
    }

    #[test]
    fn test_similar_reflexive() {
        for v in [0u8, 9, 10, 127, 128, 254, 255] {
            let c = Color::new(v, 255 - v, v / 2);
            assert!(is_similar(c, c));
        }
    }

    #[test]
    fn test_similar_boundary_is_strict() {
        assert!(is_similar(Color::gray(100), Color::gray(109)));
        assert!(!is_similar(Color::gray(100), Color::gray(110)));
        assert!(!is_similar(Color::new(0, 0, 0), Color::new(0, 10, 0)));
    }

    #[test]
    fn test_similar_symmetric_not_transitive() {
        let (a, b, c) = (Color::gray(0), Color::gray(9), Color::gray(18));
        assert!(is_similar(a, b) && is_similar(b, a));
        assert!(is_similar(b, c));
        assert!(!is_similar(a, c));
    }
}
