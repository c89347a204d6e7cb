//! Standard-format reader backed by the image crate.
//!
//! Covers JPEG, PNG, BMP, GIF and everything else the image crate decodes.
//! These formats carry no extra precision, so the decoded 8-bit RGB array
//! backs both the preview and the color-space buffer.

use std::path::Path;

use tracing::debug;

use crate::color_pipeline::common::error::{AnalysisError, Result};
use crate::color_pipeline::loader::reader::ImageReader;
use crate::color_pipeline::loader::types::{DecodedImage, DisplayImage, PixelBuffer, PixelData};

pub struct StandardReader;

impl ImageReader for StandardReader {
    fn read_image(&self, path: &Path) -> Result<DecodedImage> {
        debug!("Decoding {} with the standard codec set", path.display());

        let decoded = image::open(path)
            .map_err(|e| AnalysisError::DecodeError(format!("{}: {}", path.display(), e)))?;

        let rgb = decoded.to_rgb8();
        let width = rgb.width() as usize;
        let height = rgb.height() as usize;

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        let data = rgb.into_raw();

        debug!("Decoded image: {}x{}", width, height);

        Ok(DecodedImage {
            display: DisplayImage {
                width,
                height,
                data: data.clone(),
            },
            pixels: PixelBuffer {
                width,
                height,
                data: PixelData::U8(data),
            },
            high_precision: false,
        })
    }
}
