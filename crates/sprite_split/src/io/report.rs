use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    types::{ColorMode, Detection, Rect},
};

/// One crop handed to the sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCrop {
    pub index: usize,
    pub rect: Rect,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Summary of a single strategy run over one source image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitReport {
    pub strategy: String,
    pub source_width: u32,
    pub source_height: u32,
    pub color_mode: ColorMode,
    pub candidates: usize,
    pub detection: Detection,
    pub crops: Vec<SavedCrop>,
}

impl SplitReport {
    /// Number of crops written
    pub fn count(&self) -> usize {
        self.crops.len()
    }

    pub fn rects(&self) -> Vec<Rect> {
        self.crops.iter().map(|crop| crop.rect).collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save the report as pretty-printed JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
