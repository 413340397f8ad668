use crate::{classifier::GutterClassifier, config::SplitConfig, pixels::PixelGrid, types::Rect};

/// Rejects candidates narrower or shorter than the configured minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeFilter {
    pub min_width: u32,
    pub min_height: u32,
}

impl Default for SizeFilter {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl SizeFilter {
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }

    pub fn accepts(&self, width: u32, height: u32) -> bool {
        width >= self.min_width && height >= self.min_height
    }

    pub fn accepts_rect(&self, rect: &Rect) -> bool {
        self.accepts(rect.width(), rect.height())
    }
}

/// Visible and gutter pixel counts of one candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStats {
    pub visible: usize,
    pub gutter: usize,
}

impl CellStats {
    pub fn gutter_fraction(&self) -> f64 {
        if self.visible == 0 {
            0.0
        } else {
            self.gutter as f64 / self.visible as f64
        }
    }
}

/// Drops grid cells that are mostly transparent or mostly gutter.
///
/// Only alpha images are inspected; without an alpha channel there is no
/// notion of empty padding, so every cell passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseFilter {
    pub classifier: GutterClassifier,
    pub visibility_alpha: u8,
    pub min_visible_pixels: usize,
    pub max_gutter_fraction: f64,
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl NoiseFilter {
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            classifier: config.classifier,
            visibility_alpha: config.visibility_alpha,
            min_visible_pixels: config.min_visible_pixels,
            max_gutter_fraction: config.max_gutter_fraction,
        }
    }

    /// Count visible pixels inside `rect` and how many of those are gutter
    pub fn stats(&self, grid: &PixelGrid, rect: &Rect) -> CellStats {
        let mut stats = CellStats::default();
        for y in rect.top..rect.bottom {
            for x in rect.left..rect.right {
                if grid.alpha(x, y) > self.visibility_alpha {
                    stats.visible += 1;
                    if self.classifier.is_gutter_at(grid, x, y) {
                        stats.gutter += 1;
                    }
                }
            }
        }
        stats
    }

    pub fn accepts(&self, grid: &PixelGrid, rect: &Rect) -> bool {
        if !grid.has_alpha() {
            return true;
        }
        let stats = self.stats(grid, rect);
        if stats.visible < self.min_visible_pixels {
            return false;
        }
        stats.gutter as f64 <= stats.visible as f64 * self.max_gutter_fraction
    }
}
