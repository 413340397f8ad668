pub mod builder;
pub mod emitter;

use std::path::Path;

use tracing::info;

use crate::{
    error::Result,
    io::SplitReport,
    pixels::PixelGrid,
    traits::{CropSink, Segmenter},
    types::Segmentation,
};
use emitter::CropEmitter;

/// One configured detection strategy plus crop emission
pub struct Pipeline {
    segmenter: Box<dyn Segmenter>,
}

impl Pipeline {
    /// Create a new pipeline builder
    pub fn builder() -> builder::PipelineBuilder {
        builder::PipelineBuilder::new()
    }

    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Detect crop rectangles without writing anything
    pub fn segment(&self, grid: &PixelGrid) -> Result<Segmentation> {
        self.segmenter.segment(grid)
    }

    /// Segment the grid, then emit every accepted rectangle in order.
    ///
    /// A sink failure aborts the run; crops saved before it stay in place.
    pub fn run(&self, grid: &PixelGrid, sink: &mut dyn CropSink) -> Result<SplitReport> {
        let (width, height) = grid.dimensions();
        info!("Image size: {}x{}", width, height);
        info!("Image mode: {}", grid.color_mode());

        let segmentation = self.segment(grid)?;

        let mut emitter = CropEmitter::new(sink);
        let crops = segmentation
            .rects
            .iter()
            .map(|rect| emitter.emit(grid, rect))
            .collect::<Result<Vec<_>>>()?;

        info!(
            "Done: {} of {} candidates saved ({})",
            crops.len(),
            segmentation.candidates,
            self.segmenter.name()
        );

        Ok(SplitReport {
            strategy: self.segmenter.name().to_string(),
            source_width: width,
            source_height: height,
            color_mode: grid.color_mode(),
            candidates: segmentation.candidates,
            detection: segmentation.detection,
            crops,
        })
    }

    /// Decode the image at `path` and run the pipeline on it
    pub fn run_path<P: AsRef<Path>>(&self, path: P, sink: &mut dyn CropSink) -> Result<SplitReport> {
        let grid = PixelGrid::open(path)?;
        self.run(&grid, sink)
    }

    /// Get information about the pipeline configuration
    pub fn info(&self) -> String {
        format!("Pipeline: {} segmenter", self.segmenter.name())
    }
}
