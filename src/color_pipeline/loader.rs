//! Image loading module
//!
//! Decodes raster files into a native-precision pixel buffer plus an 8-bit
//! preview. TIFF files get a dedicated decode path so 16-bit and
//! floating-point scans keep their full precision for the color-space math;
//! every other format goes through the standard codec set.

mod auto_reader;
mod display;
mod reader;
mod standard_reader;
mod tiff_reader;
pub mod types;


pub use auto_reader::AutoFormatReader;
pub use reader::ImageReader;
pub use standard_reader::StandardReader;
pub use tiff_reader::TiffReader;
pub use types::{DecodedImage, DisplayImage, PixelBuffer, PixelData};
