use std::path::PathBuf;

use crate::{error::Result, pixels::PixelGrid, types::Segmentation};

/// Trait for region detection strategies
pub trait Segmenter: Send + Sync {
    /// Detect the crop rectangles of every icon in the grid.
    ///
    /// Must not perform I/O: the same grid always yields the same rectangles
    /// in the same order.
    fn segment(&self, grid: &PixelGrid) -> Result<Segmentation>;

    /// Short human readable name used in logs
    fn name(&self) -> &'static str;
}

/// Trait for persisting accepted crops
pub trait CropSink {
    /// Store the crop with 1-based sequence number `index` and return where it went
    fn save(&mut self, index: usize, crop: &PixelGrid) -> Result<PathBuf>;
}
