use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    classifier::GutterClassifier,
    error::{Result, SplitError},
};

/// Every tunable threshold used by the segmenters and filters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct SplitConfig {
    /// Gutter colour classification
    pub classifier: GutterClassifier,
    /// Minimum alpha for a pixel to count as visible content
    pub visibility_alpha: u8,
    /// Separator indices closer than this join the same band
    pub max_gap: u32,
    pub min_width: u32,
    pub min_height: u32,
    /// Grid cells with fewer visible pixels are dropped
    pub min_visible_pixels: usize,
    /// Grid cells whose visible pixels are more gutter than this are dropped
    #[schemars(range(min = 0.0, max = 1.0))]
    pub max_gutter_fraction: f64,
    /// Margin added around each labelled component
    pub padding: u32,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            classifier: GutterClassifier::default(),
            visibility_alpha: 100,
            max_gap: 5,
            min_width: 10,
            min_height: 10,
            min_visible_pixels: 100,
            max_gutter_fraction: 0.8,
            padding: 2,
        }
    }
}

impl SplitConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.max_gutter_fraction) {
            return Err(SplitError::Config(format!(
                "max_gutter_fraction must be within [0, 1], got {}",
                self.max_gutter_fraction
            )));
        }
        if self.min_width == 0 || self.min_height == 0 {
            return Err(SplitError::Config(
                "min_width and min_height must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// JSON schema describing the configuration file format
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(SplitConfig)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SplitConfig =
            serde_json::from_str(r#"{ "padding": 0, "classifier": { "blue_threshold": 150 } }"#).unwrap();
        assert_eq!(config.padding, 0);
        assert_eq!(config.classifier.blue_threshold, 150);
        assert_eq!(config.classifier.channel_cap, 100);
        assert_eq!(config.min_visible_pixels, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        let config = SplitConfig {
            max_gutter_fraction: 1.5,
            ..SplitConfig::default()
        };
        assert!(matches!(config.validate(), Err(SplitError::Config(_))));
    }

    #[test]
    fn test_schema_lists_fields() {
        let schema = serde_json::to_value(SplitConfig::schema()).unwrap();
        let properties = &schema["properties"];
        assert!(properties.get("max_gap").is_some());
        assert!(properties.get("classifier").is_some());
    }
}
