use tracing::{debug, info};

use crate::{
    algorithms::{dedup::Deduplicator, expansion::RegionExpander, filter::SizeFilter, mask::ValidityMask},
    classifier::GutterClassifier,
    config::SplitConfig,
    error::Result,
    pixels::PixelGrid,
    traits::Segmenter,
    types::{BoundingBox, Detection, Segmentation},
};

/// Bounding boxes of the 4-connected content regions, found by scanning in
/// raster order and flood filling from each unvisited content pixel.
///
/// The fill keeps pending coordinates on an explicit stack, so region size is
/// bounded by memory rather than call depth.
pub fn flood_fill_regions(mask: &ValidityMask) -> Vec<BoundingBox> {
    let (width, height) = (mask.width(), mask.height());
    let mut visited = vec![false; width as usize * height as usize];
    let mut stack: Vec<(u32, u32)> = Vec::new();
    let mut boxes = Vec::new();

    for y in 0..height {
        for x in 0..width {
            let index = mask.index(x, y);
            if !mask.get(x, y) || visited[index] {
                continue;
            }

            visited[index] = true;
            stack.push((x, y));
            let mut bbox = BoundingBox::at(x, y);

            while let Some((cx, cy)) = stack.pop() {
                bbox.include(cx, cy);
                let neighbours = [
                    (cx + 1 < width).then(|| (cx + 1, cy)),
                    cx.checked_sub(1).map(|nx| (nx, cy)),
                    (cy + 1 < height).then(|| (cx, cy + 1)),
                    cy.checked_sub(1).map(|ny| (cx, ny)),
                ];
                for (nx, ny) in neighbours.into_iter().flatten() {
                    let next = mask.index(nx, ny);
                    if mask.get(nx, ny) && !visited[next] {
                        visited[next] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            boxes.push(bbox);
        }
    }
    boxes
}

/// Pixel-loop component strategy: flood fill the validity mask, grow each
/// region out to the surrounding gutter, and skip repeated crops.
#[derive(Debug, Clone)]
pub struct FloodFillSegmenter {
    pub classifier: GutterClassifier,
    pub visibility_alpha: u8,
    pub size_filter: SizeFilter,
    pub expander: RegionExpander,
}

impl Default for FloodFillSegmenter {
    fn default() -> Self {
        Self::from_config(&SplitConfig::default())
    }
}

impl FloodFillSegmenter {
    pub fn from_config(config: &SplitConfig) -> Self {
        Self {
            classifier: config.classifier,
            visibility_alpha: config.visibility_alpha,
            size_filter: SizeFilter::from_config(config),
            expander: RegionExpander::new(config.classifier),
        }
    }
}

impl Segmenter for FloodFillSegmenter {
    fn segment(&self, grid: &PixelGrid) -> Result<Segmentation> {
        let mask = ValidityMask::build(grid, &self.classifier, self.visibility_alpha);
        let boxes = flood_fill_regions(&mask);

        let regions: Vec<&BoundingBox> = boxes
            .iter()
            .filter(|bbox| self.size_filter.accepts(bbox.width(), bbox.height()))
            .collect();
        for bbox in &regions {
            debug!(
                "Found region ({}, {}) - ({}, {}), size {}x{}",
                bbox.min_x,
                bbox.min_y,
                bbox.max_x,
                bbox.max_y,
                bbox.width(),
                bbox.height()
            );
        }
        info!("Found {} regions of sufficient size", regions.len());

        let mut dedup = Deduplicator::new();
        for (i, bbox) in regions.iter().enumerate() {
            let rect = self.expander.expand(grid, bbox);
            if !dedup.insert(rect) {
                info!(
                    "[{}/{}] Skipping duplicate region ({}, {}) - ({}, {})",
                    i + 1,
                    regions.len(),
                    rect.left,
                    rect.top,
                    rect.right,
                    rect.bottom
                );
            }
        }

        Ok(Segmentation {
            candidates: boxes.len(),
            detection: Detection::Components {
                regions: regions.len(),
                duplicates: dedup.duplicates(),
            },
            rects: dedup.into_accepted(),
        })
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}
