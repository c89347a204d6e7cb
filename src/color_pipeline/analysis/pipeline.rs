use std::path::Path;

use tracing::{info, instrument};

use crate::color_pipeline::analysis::timing::{PipelineTimings, Timer};
use crate::color_pipeline::analysis::types::{
    AnalysisConfig, ColorSpaceResult, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE,
};
use crate::color_pipeline::common::error::{AnalysisError, Result};
use crate::color_pipeline::common::file_info::FileInfo;
use crate::color_pipeline::loader::{AutoFormatReader, DecodedImage, ImageReader};
use crate::color_pipeline::projection::project;
use crate::color_pipeline::sampling::downsample;

/// Composes loader, downsampler and projector into the single call the
/// presentation layer makes per image.
pub struct ColorAnalysisPipeline<R: ImageReader> {
    reader: R,
    config: AnalysisConfig,
}

impl ColorAnalysisPipeline<AutoFormatReader> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            reader: AutoFormatReader,
            config,
        }
    }
}

impl<R: ImageReader> ColorAnalysisPipeline<R> {
    pub fn with_custom(reader: R, config: AnalysisConfig) -> Self {
        Self { reader, config }
    }

    fn validate_sample_rate(&self) -> Result<()> {
        if !self.config.validate_sample_rate {
            return Ok(());
        }

        let rate = self.config.sample_rate;
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&rate) {
            return Err(AnalysisError::InvalidSampleRate(rate));
        }

        Ok(())
    }

    #[instrument(skip(self, path))]
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<ColorSpaceResult> {
        self.process_file_with_timings(path)
            .map(|(result, _)| result)
    }

    pub fn process_file_with_timings<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(ColorSpaceResult, PipelineTimings)> {
        let path = path.as_ref();
        let mut timings = PipelineTimings::new();

        info!(
            input = %path.display(),
            space = ?self.config.color_space,
            sample_rate = self.config.sample_rate,
            "Starting color-space analysis"
        );

        self.validate_sample_rate()?;

        let timer = Timer::start("decode_image");
        let DecodedImage {
            display, pixels, ..
        } = self.reader.read_image(path)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let file_info = FileInfo::for_path(path, pixels.width, pixels.height)?;

        let timer = Timer::start("downsample");
        let sampled = downsample(pixels, self.config.sample_rate);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("project");
        let points = project(&sampled, self.config.color_space);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let (x_label, y_label) = self.config.color_space.axis_labels();
        let point_count = points.len();

        info!(
            points = point_count,
            "Analysis complete: {}x{} in {:.3}ms",
            file_info.width,
            file_info.height,
            timings.total_duration().as_secs_f64() * 1000.0
        );

        Ok((
            ColorSpaceResult {
                display,
                x_data: points.x,
                y_data: points.y,
                x_label,
                y_label,
                point_count,
                file_info,
            },
            timings,
        ))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.config = config;
    }
}
