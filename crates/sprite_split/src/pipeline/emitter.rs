use tracing::info;

use crate::{
    error::Result,
    io::SavedCrop,
    pixels::PixelGrid,
    traits::CropSink,
    types::Rect,
};

/// Crops accepted rectangles out of the source grid and hands them to a sink,
/// numbering them from 1 in emission order.
pub struct CropEmitter<'a> {
    sink: &'a mut dyn CropSink,
    emitted: usize,
}

impl<'a> CropEmitter<'a> {
    pub fn new(sink: &'a mut dyn CropSink) -> Self {
        Self { sink, emitted: 0 }
    }

    /// Save the crop for `rect`; a sink failure is returned as-is
    pub fn emit(&mut self, grid: &PixelGrid, rect: &Rect) -> Result<SavedCrop> {
        let crop = grid.crop(rect);
        let index = self.emitted + 1;
        let path = self.sink.save(index, &crop)?;
        self.emitted = index;

        info!(
            "Saved icon {}: {} ({}x{})",
            index,
            path.display(),
            crop.width(),
            crop.height()
        );

        Ok(SavedCrop {
            index,
            rect: *rect,
            path,
            width: crop.width(),
            height: crop.height(),
        })
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }
}
