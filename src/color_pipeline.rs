//! Image color-space analysis pipeline
//!
//! This module decodes raster images (including high-bit-depth TIFF),
//! downsamples them, and projects the retained RGB pixels into 2-D
//! color-ratio coordinates for scatter plotting. The presentation layer
//! drives it through a single entry point and consumes the returned
//! coordinate arrays plus metadata.

pub mod analysis;
pub mod common;
pub mod loader;
pub mod projection;
pub mod sampling;

pub use common::{
    AnalysisError,
    FileInfo,
    Result,
    format_file_size,
};

pub use loader::{
    AutoFormatReader,
    DecodedImage,
    DisplayImage,
    ImageReader,
    PixelBuffer,
    PixelData,
    StandardReader,
    TiffReader,
};

pub use sampling::downsample;

pub use projection::{
    ColorSpace,
    ProjectedPoints,
    project,
};

pub use analysis::{
    AnalysisConfig,
    AnalysisConfigBuilder,
    ColorAnalysisPipeline,
    ColorSpaceResult,
    PipelineTimings,
};
