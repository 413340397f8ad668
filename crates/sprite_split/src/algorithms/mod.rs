pub mod dedup;
pub mod expansion;
pub mod filter;
pub mod flood_fill;
pub mod gridlines;
pub mod labelling;
pub mod mask;

pub use dedup::*;
pub use expansion::*;
pub use filter::*;
pub use flood_fill::*;
pub use gridlines::*;
pub use labelling::*;
pub use mask::*;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, VariantNames};

use crate::{config::SplitConfig, traits::Segmenter};

/// The available region detection strategies.
///
/// They are independent alternatives; none of them falls back to another.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize,
    Display, EnumString, EnumIter, VariantNames,
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Strategy {
    /// Cut along majority-gutter rows and columns
    Grid,
    /// Label connected components and crop padded bounding boxes
    Auto,
    /// Flood fill, expand to the gutter and drop duplicate crops
    Simple,
}

impl Strategy {
    /// Build the segmenter implementing this strategy
    pub fn segmenter(self, config: &SplitConfig) -> Box<dyn Segmenter> {
        match self {
            Self::Grid => Box::new(GridSegmenter::from_config(config)),
            Self::Auto => Box::new(LabelSegmenter::from_config(config)),
            Self::Simple => Box::new(FloodFillSegmenter::from_config(config)),
        }
    }

    /// Suffix appended to the base output directory when several strategies run together
    pub fn dir_suffix(self) -> &'static str {
        match self {
            Self::Grid => "_grid",
            Self::Auto => "_auto",
            Self::Simple => "_simple",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Grid => "Grid split along blue separator lines",
            Self::Auto => "Connected-component detection with padded bounding boxes",
            Self::Simple => "Flood-fill detection expanded to the surrounding gutter",
        }
    }

    /// Get a list of all strategy names
    pub fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }
}
