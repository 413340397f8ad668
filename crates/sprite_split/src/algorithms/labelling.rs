use std::collections::{HashMap, hash_map::Entry};

use image::Luma;
use imageproc::region_labelling::{Connectivity, connected_components};
use tracing::{debug, info};

use crate::{
    algorithms::{filter::SizeFilter, mask::ValidityMask},
    classifier::GutterClassifier,
    config::SplitConfig,
    error::Result,
    pixels::PixelGrid,
    traits::Segmenter,
    types::{BoundingBox, Detection, Segmentation},
};

/// Bounding boxes of the 4-connected content regions, ordered by the raster
/// position of each region's first pixel.
pub fn label_regions(mask: &ValidityMask) -> Vec<BoundingBox> {
    let labels = connected_components(&mask.to_luma(), Connectivity::Four, Luma([0u8]));

    let mut slots: HashMap<u32, usize> = HashMap::new();
    let mut boxes: Vec<BoundingBox> = Vec::new();
    for (x, y, pixel) in labels.enumerate_pixels() {
        let label = pixel[0];
        if label == 0 {
            continue;
        }
        match slots.entry(label) {
            Entry::Occupied(slot) => boxes[*slot.get()].include(x, y),
            Entry::Vacant(slot) => {
                slot.insert(boxes.len());
                boxes.push(BoundingBox::at(x, y));
            }
        }
    }
    boxes
}

/// Array-based component strategy: label the validity mask in one pass and
/// crop each region's bounding box plus a fixed padding.
#[derive(Debug, Clone)]
pub struct LabelSegmenter {
    pub classifier: GutterClassifier,
    pub visibility_alpha: u8,
    pub size_filter: SizeFilter,
    pub padding: u32,
}

impl Default for LabelSegmenter {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl LabelSegmenter {
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            classifier: config.classifier,
            visibility_alpha: config.visibility_alpha,
            size_filter: SizeFilter::from_config(config),
            padding: config.padding,
        }
    }
}

impl Segmenter for LabelSegmenter {
    fn segment(&self, grid: &PixelGrid) -> Result<Segmentation> {
        let (width, height) = grid.dimensions();
        let mask = ValidityMask::build(grid, &self.classifier, self.visibility_alpha);
        let boxes = label_regions(&mask);
        info!("Detected {} connected regions", boxes.len());

        let rects: Vec<_> = boxes
            .iter()
            .filter(|bbox| {
                let keep = self.size_filter.accepts(bbox.width(), bbox.height());
                if !keep {
                    debug!(?bbox, "region below minimum size");
                }
                keep
            })
            .map(|bbox| bbox.padded(self.padding, width, height))
            .collect();

        Ok(Segmentation {
            candidates: boxes.len(),
            detection: Detection::Components {
                regions: rects.len(),
                duplicates: 0,
            },
            rects,
        })
    }

    fn name(&self) -> &'static str {
        "auto"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rect;
    use image::{Rgba, RgbaImage};

    fn fill(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, color: Rgba<u8>) {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                img.put_pixel(x, y, color);
            }
        }
    }

    #[test]
    fn test_diagonal_pixels_are_separate_regions() {
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 1, Rgba([255, 0, 0, 255]));
        let mask = ValidityMask::build(&PixelGrid::from(img), &GutterClassifier::default(), 100);

        assert_eq!(
            label_regions(&mask),
            vec![BoundingBox::at(0, 0), BoundingBox::at(1, 1)]
        );
    }

    #[test]
    fn test_u_shape_is_one_region() {
        let mut img = RgbaImage::new(6, 6);
        let red = Rgba([255, 0, 0, 255]);
        fill(&mut img, 0, 0, 1, 5, red);
        fill(&mut img, 4, 0, 1, 5, red);
        fill(&mut img, 0, 5, 5, 1, red);
        let mask = ValidityMask::build(&PixelGrid::from(img), &GutterClassifier::default(), 100);

        assert_eq!(
            label_regions(&mask),
            vec![BoundingBox { min_x: 0, min_y: 0, max_x: 4, max_y: 5 }]
        );
    }

    #[test]
    fn test_crops_padded_boxes_and_drops_small_regions() {
        let mut img = RgbaImage::new(40, 40);
        fill(&mut img, 0, 0, 12, 12, Rgba([200, 120, 40, 255]));
        fill(&mut img, 20, 20, 12, 14, Rgba([40, 200, 40, 255]));
        fill(&mut img, 35, 2, 5, 5, Rgba([40, 200, 40, 255]));
        let segmentation = LabelSegmenter::default().segment(&PixelGrid::from(img)).unwrap();

        assert_eq!(segmentation.candidates, 3);
        assert_eq!(
            segmentation.rects,
            vec![Rect::new(0, 0, 14, 14), Rect::new(18, 18, 34, 36)]
        );
        assert_eq!(
            segmentation.detection,
            Detection::Components { regions: 2, duplicates: 0 }
        );
    }
}
