use std::path::Path;

use crate::color_pipeline::common::error::Result;
use crate::color_pipeline::loader::types::DecodedImage;

pub trait ImageReader {
    fn read_image(&self, path: &Path) -> Result<DecodedImage>;
}
