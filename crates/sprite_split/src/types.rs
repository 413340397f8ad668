use serde::{Deserialize, Serialize};
use strum::Display;

/// Crop rectangle in pixel coordinates, right/bottom exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// True when the rectangle lies inside a `width` x `height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left < self.right && self.top < self.bottom && self.right <= width && self.bottom <= height
    }
}

/// Closed interval of row or column indices forming one separator band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRange {
    pub start: u32,
    pub end: u32,
}

impl LineRange {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Cut position: the floored midpoint of the band
    pub fn midpoint(&self) -> u32 {
        ((self.start as u64 + self.end as u64) / 2) as u32
    }
}

/// Inclusive bounding box of a connected region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

impl BoundingBox {
    /// Box covering a single pixel
    pub fn at(x: u32, y: u32) -> Self {
        Self { min_x: x, min_y: y, max_x: x, max_y: y }
    }

    pub fn include(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn width(&self) -> u32 {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> u32 {
        self.max_y - self.min_y + 1
    }

    /// Exclusive rectangle covering exactly this box
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x + 1, self.max_y + 1)
    }

    /// Exclusive rectangle grown by `padding` on every side, clamped to the image
    pub fn padded(&self, padding: u32, width: u32, height: u32) -> Rect {
        Rect::new(
            self.min_x.saturating_sub(padding),
            self.min_y.saturating_sub(padding),
            (self.max_x + padding + 1).min(width),
            (self.max_y + padding + 1).min(height),
        )
    }
}

/// Whether the decoded source carries an alpha channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum ColorMode {
    #[strum(serialize = "RGB")]
    Rgb,
    #[strum(serialize = "RGBA")]
    Rgba,
}

/// Strategy-specific detection counters, reported alongside the crops
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Detection {
    Grid {
        horizontal_lines: usize,
        vertical_lines: usize,
        horizontal_bands: Vec<LineRange>,
        vertical_bands: Vec<LineRange>,
        rows: usize,
        columns: usize,
    },
    Components {
        /// Regions that passed the size filter, duplicates included
        regions: usize,
        duplicates: usize,
    },
}

/// Outcome of running a segmenter over a pixel grid, before any crop is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segmentation {
    /// Accepted rectangles in emission order
    pub rects: Vec<Rect>,
    /// Number of candidates evaluated before filtering
    pub candidates: usize,
    pub detection: Detection,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_floors() {
        assert_eq!(LineRange::new(0, 2).midpoint(), 1);
        assert_eq!(LineRange::new(10, 11).midpoint(), 10);
        assert_eq!(LineRange::new(50, 50).midpoint(), 50);
    }

    #[test]
    fn test_padded_box_is_clamped() {
        let bbox = BoundingBox { min_x: 0, min_y: 1, max_x: 9, max_y: 9 };
        assert_eq!(bbox.padded(2, 10, 10), Rect::new(0, 0, 10, 10));

        let inner = BoundingBox { min_x: 5, min_y: 5, max_x: 14, max_y: 14 };
        assert_eq!(inner.padded(2, 100, 100), Rect::new(3, 3, 17, 17));
    }

    #[test]
    fn test_bounding_box_grows() {
        let mut bbox = BoundingBox::at(4, 4);
        bbox.include(2, 7);
        bbox.include(6, 3);
        assert_eq!(bbox, BoundingBox { min_x: 2, min_y: 3, max_x: 6, max_y: 7 });
        assert_eq!(bbox.width(), 5);
        assert_eq!(bbox.height(), 5);
        assert_eq!(bbox.to_rect(), Rect::new(2, 3, 7, 8));
    }
}
