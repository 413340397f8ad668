use crate::{
    classifier::GutterClassifier,
    pixels::PixelGrid,
    types::{BoundingBox, Rect},
};

/// Grows a region's bounding box out to the surrounding gutter so the crop
/// keeps the icon's transparent padding.
///
/// Each edge moves outward one pixel at a time until the next pixel on a
/// single probe line is gutter or the image border is reached. Left and right
/// probe along row `min_y`; up and down probe along column `min_x`. The rest
/// of the edge is not inspected, so an irregular icon whose probe line misses
/// a nearby gutter can expand past it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegionExpander {
    pub classifier: GutterClassifier,
}

impl RegionExpander {
    pub fn new(classifier: GutterClassifier) -> Self {
        Self { classifier }
    }

    pub fn expand(&self, grid: &PixelGrid, bbox: &BoundingBox) -> Rect {
        let (width, height) = grid.dimensions();
        let is_gutter = |x: u32, y: u32| self.classifier.is_gutter_at(grid, x, y);

        let mut left = bbox.min_x;
        while left > 0 && !is_gutter(left - 1, bbox.min_y) {
            left -= 1;
        }

        let mut right = bbox.max_x + 1;
        while right < width && !is_gutter(right, bbox.min_y) {
            right += 1;
        }

        let mut top = bbox.min_y;
        while top > 0 && !is_gutter(bbox.min_x, top - 1) {
            top -= 1;
        }

        let mut bottom = bbox.max_y + 1;
        while bottom < height && !is_gutter(bbox.min_x, bottom) {
            bottom += 1;
        }

        Rect::new(left, top, right, bottom)
    }
}
