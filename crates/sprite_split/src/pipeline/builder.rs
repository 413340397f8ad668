use crate::{
    algorithms::Strategy,
    config::SplitConfig,
    error::Result,
    pipeline::Pipeline,
    traits::Segmenter,
};

/// Builder for creating pipelines with a fluent API
pub struct PipelineBuilder {
    strategy: Strategy,
    config: SplitConfig,
    segmenter: Option<Box<dyn Segmenter>>,
}

impl PipelineBuilder {
    /// Create a new pipeline builder
    pub fn new() -> Self {
        Self {
            strategy: Strategy::Grid,
            config: SplitConfig::default(),
            segmenter: None,
        }
    }

    /// Select one of the built-in strategies
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Thresholds used by the built-in strategies
    pub fn config(mut self, config: SplitConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a custom segmenter (replaces the selected strategy)
    pub fn set_segmenter<S>(mut self, segmenter: S) -> Self
    where
        S: Segmenter + 'static,
    {
        self.segmenter = Some(Box::new(segmenter));
        self
    }

    /// Build the pipeline, rejecting thresholds that fail `SplitConfig::validate`
    pub fn build(self) -> Result<Pipeline> {
        let segmenter = match self.segmenter {
            Some(segmenter) => segmenter,
            None => {
                self.config.validate()?;
                self.strategy.segmenter(&self.config)
            }
        };
        Ok(Pipeline::new(segmenter))
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
