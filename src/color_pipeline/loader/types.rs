//! Decoded image data types

/// Pixel storage preserving the decoder's native sample type.
///
/// Samples are interleaved per pixel. Integer widths other than 8 and 16 bit
/// are widened to `F64` at decode time.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelData {
    U8(Vec<u8>),
    U16(Vec<u16>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

impl PixelData {
    pub fn len(&self) -> usize {
        match self {
            PixelData::U8(v) => v.len(),
            PixelData::U16(v) => v.len(),
            PixelData::F32(v) => v.len(),
            PixelData::F64(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Dense pixel array holding exactly 3 interleaved channels after channel
/// normalization (`data.len() == width * height * 3`).
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Interleaved RGB samples
    pub data: PixelData,
}

impl PixelBuffer {
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// 8-bit RGB preview raster, interleaved `width * height * 3` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Loader output: the preview plus the buffer the color-space math runs on.
///
/// For 8-bit sources both views carry the same sample values; for
/// high-bit-depth TIFFs `pixels` keeps the sensor's native precision while
/// `display` holds a rescaled copy for the screen.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub display: DisplayImage,
    pub pixels: PixelBuffer,
    /// True when `pixels` holds more than 8 bits per sample.
    pub high_precision: bool,
}
