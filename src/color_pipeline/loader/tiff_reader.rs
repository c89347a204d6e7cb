//! TIFF reader preserving the file's native bit depth.
//!
//! The tiff crate reports the stored sample type directly, which is what
//! lets 16-bit and floating-point scans keep their full precision for the
//! color-space math while the preview gets a rescaled 8-bit copy. Channel
//! normalization (truncate to 3, broadcast grayscale) is applied before any
//! display rescale so both views stay in step.

use std::fs::File;
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult};
use tracing::debug;

use crate::color_pipeline::common::error::{AnalysisError, Result};
use crate::color_pipeline::loader::display;
use crate::color_pipeline::loader::reader::ImageReader;
use crate::color_pipeline::loader::types::{DecodedImage, DisplayImage, PixelBuffer, PixelData};

pub struct TiffReader;

impl ImageReader for TiffReader {
    fn read_image(&self, path: &Path) -> Result<DecodedImage> {
        debug!("Decoding {} with the TIFF decoder", path.display());

        let file = File::open(path)
            .map_err(|e| AnalysisError::LoadError(format!("{}: {}", path.display(), e)))?;
        let mut decoder = Decoder::new(file)
            .map_err(|e| AnalysisError::DecodeError(format!("{}: {}", path.display(), e)))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;
        let width = width as usize;
        let height = height as usize;

        if width == 0 || height == 0 {
            return Err(AnalysisError::InvalidDimensions(width, height));
        }

        let image = decoder
            .read_image()
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let decoded = match image {
            DecodingResult::U8(data) => {
                let data = normalize_channels(data, width, height)?;
                DecodedImage {
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
                }
            }
            DecodingResult::U16(data) => {
                let data = normalize_channels(data, width, height)?;
                let preview = display::display_from_u16(&data);
                DecodedImage {
                    display: DisplayImage {
                        width,
                        height,
                        data: preview,
                    },
                    pixels: PixelBuffer {
                        width,
                        height,
                        data: PixelData::U16(data),
                    },
                    high_precision: true,
                }
            }
            DecodingResult::F32(data) => {
                let data = normalize_channels(data, width, height)?;
                let preview = display::display_from_float(&data);
                DecodedImage {
                    display: DisplayImage {
                        width,
                        height,
                        data: preview,
                    },
                    pixels: PixelBuffer {
                        width,
                        height,
                        data: PixelData::F32(data),
                    },
                    high_precision: true,
                }
            }
            DecodingResult::F64(data) => {
                let data = normalize_channels(data, width, height)?;
                let preview = display::display_from_float(&data);
                DecodedImage {
                    display: DisplayImage {
                        width,
                        height,
                        data: preview,
                    },
                    pixels: PixelBuffer {
                        width,
                        height,
                        data: PixelData::F64(data),
                    },
                    high_precision: true,
                }
            }
            DecodingResult::U32(data) => {
                widen(data.into_iter().map(|v| v as f64).collect(), width, height)?
            }
            DecodingResult::U64(data) => {
                widen(data.into_iter().map(|v| v as f64).collect(), width, height)?
            }
            DecodingResult::I8(data) => {
                widen(data.into_iter().map(f64::from).collect(), width, height)?
            }
            DecodingResult::I16(data) => {
                widen(data.into_iter().map(f64::from).collect(), width, height)?
            }
            DecodingResult::I32(data) => {
                widen(data.into_iter().map(f64::from).collect(), width, height)?
            }
            DecodingResult::I64(data) => {
                widen(data.into_iter().map(|v| v as f64).collect(), width, height)?
            }
            _ => {
                return Err(AnalysisError::UnsupportedFormat(format!(
                    "{}: unrecognized TIFF sample type",
                    path.display()
                )));
            }
        };

        debug!(
            "Decoded TIFF: {}x{}, high_precision={}",
            width, height, decoded.high_precision
        );

        Ok(decoded)
    }
}

/// Applies the channel policy: more than 3 channels are truncated to the
/// first 3, a single channel is broadcast to 3, and a gray+alpha pair keeps
/// only the gray channel broadcast to 3.
fn normalize_channels<T: Copy>(data: Vec<T>, width: usize, height: usize) -> Result<Vec<T>> {
    let pixels = width * height;
    if pixels == 0 || data.len() % pixels != 0 {
        return Err(AnalysisError::UnsupportedFormat(format!(
            "sample count {} does not match {}x{} pixels",
            data.len(),
            width,
            height
        )));
    }

    let channels = data.len() / pixels;
    match channels {
        0 => Err(AnalysisError::UnsupportedFormat(
            "image contains no samples".to_string(),
        )),
        1 => Ok(data.iter().flat_map(|&v| [v, v, v]).collect()),
        2 => Ok(data
            .chunks_exact(2)
            .flat_map(|px| [px[0], px[0], px[0]])
            .collect()),
        3 => Ok(data),
        c => Ok(data
            .chunks_exact(c)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect()),
    }
}

/// Keeps raw sample values of an unrecognized integer width as `f64`. The
/// projector treats float data as already normalized, matching how these
/// widths have always been handled downstream.
fn widen(data: Vec<f64>, width: usize, height: usize) -> Result<DecodedImage> {
    let data = normalize_channels(data, width, height)?;
    let preview = display::display_from_range(&data);
    Ok(DecodedImage {
        display: DisplayImage {
            width,
            height,
            data: preview,
        },
        pixels: PixelBuffer {
            width,
            height,
            data: PixelData::F64(data),
        },
        high_precision: true,
    })
}

#[cfg(test)]
mod tests {
    use super::normalize_channels;

    #[test]
    fn three_channels_pass_through() {
        let data = vec![1u16, 2, 3, 4, 5, 6];
        assert_eq!(normalize_channels(data.clone(), 2, 1).unwrap(), data);
    }

    #[test]
    fn grayscale_broadcasts_to_three_channels() {
        let out = normalize_channels(vec![7u16, 9], 2, 1).unwrap();
        assert_eq!(out, vec![7, 7, 7, 9, 9, 9]);
    }

    #[test]
    fn gray_alpha_drops_alpha_and_broadcasts() {
        let out = normalize_channels(vec![7u16, 255, 9, 128], 2, 1).unwrap();
        assert_eq!(out, vec![7, 7, 7, 9, 9, 9]);
    }

    #[test]
    fn extra_channels_are_truncated() {
        let out = normalize_channels(vec![1u8, 2, 3, 4, 5, 6, 7, 8], 2, 1).unwrap();
        assert_eq!(out, vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn mismatched_sample_count_is_rejected() {
        assert!(normalize_channels(vec![1u8, 2, 3, 4, 5], 2, 1).is_err());
    }
}
