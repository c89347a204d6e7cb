//! Analysis configuration and result types

use crate::color_pipeline::common::file_info::FileInfo;
use crate::color_pipeline::loader::DisplayImage;
use crate::color_pipeline::projection::ColorSpace;

/// Accepted downsampling range, bounds inclusive.
pub const MIN_SAMPLE_RATE: u32 = 1;
pub const MAX_SAMPLE_RATE: u32 = 1000;

/// Configuration for one color-space analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Target color-ratio space
    pub color_space: ColorSpace,
    /// Keep every n-th row and column before projecting
    pub sample_rate: u32,
    /// Whether to reject sample rates outside the accepted range
    pub validate_sample_rate: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            color_space: ColorSpace::Ratio,
            sample_rate: 10,
            validate_sample_rate: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    color_space: Option<ColorSpace>,
    sample_rate: Option<u32>,
    validate_sample_rate: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = Some(color_space);
        self
    }

    pub fn sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = Some(sample_rate);
        self
    }

    pub fn validate_sample_rate(mut self, validate: bool) -> Self {
        self.validate_sample_rate = Some(validate);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            color_space: self.color_space.unwrap_or(default.color_space),
            sample_rate: self.sample_rate.unwrap_or(default.sample_rate),
            validate_sample_rate: self
                .validate_sample_rate
                .unwrap_or(default.validate_sample_rate),
        }
    }
}

/// Everything the caller needs to plot one analyzed image.
///
/// Built fresh on every pipeline invocation and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ColorSpaceResult {
    /// 8-bit preview of the source image
    pub display: DisplayImage,
    /// X coordinates of the pixels that passed the validity mask
    pub x_data: Vec<f64>,
    /// Y coordinates, same length as `x_data`
    pub y_data: Vec<f64>,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Number of pixels that survived the validity mask
    pub point_count: usize,
    pub file_info: FileInfo,
}
