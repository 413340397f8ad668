use std::path::{Path, PathBuf};

use crate::{error::Result, pixels::PixelGrid, traits::CropSink};

/// File name for the crop with 1-based sequence number `index`
pub fn icon_file_name(index: usize) -> String {
    format!("icon_{index:03}.png")
}

/// Writes each crop as `icon_NNN.png` into a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create the sink, creating `dir` and any missing parents first
    pub fn create<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }
}

impl CropSink for DirectorySink {
    fn save(&mut self, index: usize, crop: &PixelGrid) -> Result<PathBuf> {
        let path = self.dir.join(icon_file_name(index));
        crop.save_png(&path)?;
        Ok(path)
    }
}

/// Keeps crops in memory, in the order they were emitted
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub crops: Vec<(usize, PixelGrid)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CropSink for MemorySink {
    fn save(&mut self, index: usize, crop: &PixelGrid) -> Result<PathBuf> {
        self.crops.push((index, crop.clone()));
        Ok(PathBuf::from(icon_file_name(index)))
    }
}
