use std::path::Path;

use crate::color_pipeline::common::error::Result;
use crate::color_pipeline::loader::reader::ImageReader;
use crate::color_pipeline::loader::standard_reader::StandardReader;
use crate::color_pipeline::loader::tiff_reader::TiffReader;
use crate::color_pipeline::loader::types::DecodedImage;

/// Extensions routed to the dedicated TIFF decode path.
const TIFF_EXTENSIONS: [&str; 2] = ["tif", "tiff"];

/// Default reader: picks the decode path from the file extension.
pub struct AutoFormatReader;

impl ImageReader for AutoFormatReader {
    fn read_image(&self, path: &Path) -> Result<DecodedImage> {
        if is_tiff_path(path) {
            TiffReader.read_image(path)
        } else {
            StandardReader.read_image(path)
        }
    }
}

fn is_tiff_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            TIFF_EXTENSIONS.iter().any(|t| *t == ext)
        })
}
