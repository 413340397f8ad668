use image::{GrayImage, Luma};

use crate::{classifier::GutterClassifier, pixels::PixelGrid};

/// Per-pixel content flags: `true` for visible, non-gutter pixels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidityMask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl ValidityMask {
    /// Build the mask for `grid`.
    ///
    /// With alpha, a pixel is content when its alpha exceeds `visibility_alpha`
    /// and it is not gutter; without alpha, when it is not gutter.
    pub fn build(grid: &PixelGrid, classifier: &GutterClassifier, visibility_alpha: u8) -> Self {
        let (width, height) = grid.dimensions();
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                let visible = !grid.has_alpha() || grid.alpha(x, y) > visibility_alpha;
                cells.push(visible && !classifier.is_gutter_at(grid, x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&valid| valid).count()
    }

    /// Binary image with content at 255 and everything else at 0
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.get(x, y) { Luma([255u8]) } else { Luma([0u8]) }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[test]
    fn test_alpha_mask_drops_faint_and_blue() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([200, 10, 10, 101]));
        img.put_pixel(1, 0, Rgba([200, 10, 10, 100]));
        img.put_pixel(2, 0, Rgba([0, 0, 255, 255]));
        let mask = ValidityMask::build(&PixelGrid::from(img), &GutterClassifier::default(), 100);

        assert!(mask.get(0, 0));
        assert!(!mask.get(1, 0));
        assert!(!mask.get(2, 0));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_rgb_mask_only_drops_blue() {
        let mut img = RgbImage::from_pixel(2, 2, Rgb([0, 0, 0]));
        img.put_pixel(1, 1, Rgb([0, 0, 255]));
        let mask = ValidityMask::build(&PixelGrid::from(img), &GutterClassifier::default(), 100);

        assert_eq!(mask.count(), 3);
        assert!(!mask.get(1, 1));
        assert_eq!(mask.to_luma().get_pixel(1, 1), &Luma([0u8]));
        assert_eq!(mask.to_luma().get_pixel(0, 1), &Luma([255u8]));
    }

    #[test]
    fn test_half_transparent_blue_is_content() {
        // alpha 150 is visible but too faint to be gutter
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 255, 150]));
        let mask = ValidityMask::build(&PixelGrid::from(img), &GutterClassifier::default(), 100);
        assert!(mask.get(0, 0));
    }
}
