//! Spatial downsampling by strided selection.
//!
//! Keeps every n-th row and column, channel axis untouched. No interpolation
//! or averaging; aliasing is the accepted trade-off for speed, since the
//! scatter plot downstream only needs a bounded point count.

use crate::color_pipeline::loader::{PixelBuffer, PixelData};

/// Interleaved channels in a normalized pixel buffer.
const CHANNELS: usize = 3;

/// Selects every `rate`-th row and column of `buffer`, yielding
/// `ceil(height / rate) x ceil(width / rate)` pixels. A rate of 1 returns
/// the buffer unchanged.
pub fn downsample(buffer: PixelBuffer, rate: u32) -> PixelBuffer {
    if rate <= 1 {
        return buffer;
    }

    let rate = rate as usize;
    let (out_width, out_height) = sampled_dimensions(buffer.width, buffer.height, rate);

    let data = match &buffer.data {
        PixelData::U8(v) => PixelData::U8(stride_select(v, buffer.width, rate)),
        PixelData::U16(v) => PixelData::U16(stride_select(v, buffer.width, rate)),
        PixelData::F32(v) => PixelData::F32(stride_select(v, buffer.width, rate)),
        PixelData::F64(v) => PixelData::F64(stride_select(v, buffer.width, rate)),
    };

    PixelBuffer {
        width: out_width,
        height: out_height,
        data,
    }
}

/// Output dimensions of a strided selection.
pub fn sampled_dimensions(width: usize, height: usize, rate: usize) -> (usize, usize) {
    (width.div_ceil(rate), height.div_ceil(rate))
}

fn stride_select<T: Copy>(data: &[T], width: usize, rate: usize) -> Vec<T> {
    let height = data.len() / (width * CHANNELS);
    let (out_width, out_height) = sampled_dimensions(width, height, rate);

    let mut out = Vec::with_capacity(out_width * out_height * CHANNELS);
    for row in data.chunks_exact(width * CHANNELS).step_by(rate) {
        for px in row.chunks_exact(CHANNELS).step_by(rate) {
            out.extend_from_slice(px);
        }
    }
    out
}
