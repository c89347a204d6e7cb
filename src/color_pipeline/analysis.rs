//! Analysis orchestration module
//!
//! Composes the loader, downsampler and projector behind the single entry
//! point the presentation layer invokes.

mod pipeline;
mod timing;
mod types;


pub use pipeline::ColorAnalysisPipeline;
pub use timing::{PipelineTimings, StepTiming, Timer};
pub use types::{
    AnalysisConfig, AnalysisConfigBuilder, ColorSpaceResult, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
};
