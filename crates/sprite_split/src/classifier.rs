use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::pixels::PixelGrid;

/// Decides whether a pixel belongs to the blue separator gutter.
///
/// A pixel is gutter when its blue channel is above `blue_threshold`, red and
/// green are both below `channel_cap`, and alpha is above `alpha_floor`.
/// Pixels without alpha count as fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct GutterClassifier {
    pub blue_threshold: u8,
    pub channel_cap: u8,
    pub alpha_floor: u8,
}

impl Default for GutterClassifier {
    fn default() -> Self {
        Self {
            blue_threshold: 100,
            channel_cap: 100,
            alpha_floor: 200,
        }
    }
}

impl GutterClassifier {
    /// Classify a raw RGB or RGBA pixel.
    ///
    /// # Panics
    /// When `pixel` does not have exactly 3 or 4 channels.
    pub fn is_gutter(&self, pixel: &[u8]) -> bool {
        assert!(
            matches!(pixel.len(), 3 | 4),
            "expected 3 or 4 channels, got {}",
            pixel.len()
        );
        let (r, g, b) = (pixel[0], pixel[1], pixel[2]);
        let a = pixel.get(3).copied().unwrap_or(u8::MAX);
        b > self.blue_threshold && r < self.channel_cap && g < self.channel_cap && a > self.alpha_floor
    }

    pub fn is_gutter_at(&self, grid: &PixelGrid, x: u32, y: u32) -> bool {
        self.is_gutter(grid.channels(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_blue_opaque_is_gutter() {
        let classifier = GutterClassifier::default();
        for r in [0u8, 50, 99] {
            for g in [0u8, 42, 99] {
                for b in [101u8, 180, 255] {
                    assert!(classifier.is_gutter(&[r, g, b]));
                    assert!(classifier.is_gutter(&[r, g, b, 201]));
                    assert!(classifier.is_gutter(&[r, g, b, 255]));
                }
            }
        }
    }

    #[test]
    fn test_low_blue_is_never_gutter() {
        let classifier = GutterClassifier::default();
        for b in [0u8, 64, 100] {
            for other in [0u8, 99, 100, 255] {
                assert!(!classifier.is_gutter(&[other, other, b]));
                assert!(!classifier.is_gutter(&[other, other, b, 255]));
            }
        }
    }

    #[test]
    fn test_thresholds_are_strict() {
        let classifier = GutterClassifier::default();
        assert!(!classifier.is_gutter(&[100, 0, 255]));
        assert!(!classifier.is_gutter(&[0, 100, 255]));
        assert!(!classifier.is_gutter(&[0, 0, 255, 200]));
        assert!(classifier.is_gutter(&[0, 0, 255, 201]));
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = GutterClassifier {
            blue_threshold: 200,
            channel_cap: 30,
            alpha_floor: 0,
        };
        assert!(!classifier.is_gutter(&[0, 0, 180]));
        assert!(!classifier.is_gutter(&[40, 0, 255]));
        assert!(classifier.is_gutter(&[10, 10, 230, 1]));
    }

    #[test]
    #[should_panic(expected = "expected 3 or 4 channels")]
    fn test_malformed_pixel_panics() {
        GutterClassifier::default().is_gutter(&[0, 0]);
    }
}
