use std::path::Path;

use image::{DynamicImage, ImageFormat, Pixel, RgbImage, RgbaImage};

use crate::{
    error::{Result, SplitError},
    types::{ColorMode, Rect},
};

/// Decoded source image held fully in memory.
///
/// Images with any kind of alpha channel are kept as RGBA, everything else
/// is normalised to RGB so the classifier always sees 3 or 4 channels.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelGrid {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl PixelGrid {
    /// Decode an image file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SplitError::MissingSource(path.to_path_buf()));
        }
        let image = image::open(path).map_err(|source| SplitError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_dynamic(image))
    }

    pub fn from_dynamic(image: DynamicImage) -> Self {
        if image.color().has_alpha() {
            Self::Rgba(image.to_rgba8())
        } else {
            Self::Rgb(image.to_rgb8())
        }
    }

    pub fn width(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.width(),
            Self::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Self::Rgb(img) => img.height(),
            Self::Rgba(img) => img.height(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn color_mode(&self) -> ColorMode {
        match self {
            Self::Rgb(_) => ColorMode::Rgb,
            Self::Rgba(_) => ColorMode::Rgba,
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::Rgba(_))
    }

    /// Channel values of the pixel at `(x, y)`: 3 for RGB, 4 for RGBA
    pub fn channels(&self, x: u32, y: u32) -> &[u8] {
        match self {
            Self::Rgb(img) => img.get_pixel(x, y).channels(),
            Self::Rgba(img) => img.get_pixel(x, y).channels(),
        }
    }

    /// Alpha of the pixel at `(x, y)`; 255 when the grid has no alpha channel
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        match self {
            Self::Rgb(_) => u8::MAX,
            Self::Rgba(img) => img.get_pixel(x, y)[3],
        }
    }

    /// Copy out the sub-grid `[top, bottom) x [left, right)`
    pub fn crop(&self, rect: &Rect) -> PixelGrid {
        let (x, y, w, h) = (rect.left, rect.top, rect.width(), rect.height());
        match self {
            Self::Rgb(img) => Self::Rgb(image::imageops::crop_imm(img, x, y, w, h).to_image()),
            Self::Rgba(img) => Self::Rgba(image::imageops::crop_imm(img, x, y, w, h).to_image()),
        }
    }

    /// Write the grid as PNG, keeping the alpha channel when present
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let saved = match self {
            Self::Rgb(img) => img.save_with_format(path, ImageFormat::Png),
            Self::Rgba(img) => img.save_with_format(path, ImageFormat::Png),
        };
        saved.map_err(|source| SplitError::Encode {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<RgbImage> for PixelGrid {
    fn from(image: RgbImage) -> Self {
        Self::Rgb(image)
    }
}

impl From<RgbaImage> for PixelGrid {
    fn from(image: RgbaImage) -> Self {
        Self::Rgba(image)
    }
}
