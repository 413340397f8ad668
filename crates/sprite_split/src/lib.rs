//! # Sprite Sheet Splitting Library
//!
//! Extracts individual icons from a composite sprite sheet in which icons are
//! separated by a solid blue gutter and/or transparent padding.
//!
//! ## Core Features
//!
//! - **Grid strategy**: finds rows and columns that are mostly gutter, merges
//!   them into bands and cuts the sheet at the band midpoints
//! - **Component strategies**: labels 4-connected content regions, either with
//!   array labelling and padded bounding boxes, or with a flood fill whose
//!   boxes are grown out to the surrounding gutter and deduplicated
//! - **Noise filtering**: minimum size, minimum visible pixels and maximum
//!   gutter fraction
//! - **Pluggable output**: crops go through the [`CropSink`] trait
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sprite_split::{DirectorySink, Pipeline, Strategy};
//!
//! let pipeline = Pipeline::builder()
//!     .strategy(Strategy::Grid)
//!     .build()?;
//!
//! let mut sink = DirectorySink::create("output_icons_grid")?;
//! let report = pipeline.run_path("sheet.png", &mut sink)?;
//! println!("saved {} icons", report.count());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Custom Thresholds
//!
//! ```rust,no_run
//! use sprite_split::{GutterClassifier, Pipeline, PixelGrid, SplitConfig, Strategy};
//!
//! let config = SplitConfig {
//!     classifier: GutterClassifier { blue_threshold: 150, ..Default::default() },
//!     padding: 0,
//!     ..Default::default()
//! };
//! let pipeline = Pipeline::builder()
//!     .strategy(Strategy::Auto)
//!     .config(config)
//!     .build()?;
//!
//! let grid = PixelGrid::open("sheet.png")?;
//! let segmentation = pipeline.segment(&grid)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Core modules
pub mod algorithms;
pub mod classifier;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod pixels;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use algorithms::*;
pub use classifier::GutterClassifier;
pub use config::SplitConfig;
pub use error::{Result, SplitError};
pub use io::*;
pub use pipeline::{Pipeline, builder::PipelineBuilder, emitter::CropEmitter};
pub use pixels::PixelGrid;
pub use traits::*;
pub use types::*;
