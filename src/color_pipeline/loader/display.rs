//! Display normalization: mapping native-precision samples onto 8-bit RGB.
//!
//! These rescales only ever feed the on-screen preview. The buffer used for
//! color-space math keeps the original decoded values.

/// Fill value for images where every sample is identical and the observed
/// range collapses to zero.
const FLAT_IMAGE_GRAY: u8 = 128;

/// Linearly rescales 16-bit samples to 0-255 using the observed min/max so
/// narrow-range scans stay visible.
pub(super) fn display_from_u16(data: &[u16]) -> Vec<u8> {
    let min = data.iter().copied().min().unwrap_or(0);
    let max = data.iter().copied().max().unwrap_or(0);

    if max > min {
        let range = (max - min) as f64;
        data.iter()
            .map(|&v| (((v - min) as f64 / range) * 255.0) as u8)
            .collect()
    } else {
        vec![FLAT_IMAGE_GRAY; data.len()]
    }
}

/// Clips floating-point samples to [0, 1] and scales to 0-255.
pub(super) fn display_from_float<T: Into<f64> + Copy>(data: &[T]) -> Vec<u8> {
    data.iter()
        .map(|&v| (v.into().clamp(0.0, 1.0) * 255.0) as u8)
        .collect()
}

/// Rescales samples of any other numeric width (already widened to `f64`)
/// using the observed min/max.
pub(super) fn display_from_range(data: &[f64]) -> Vec<u8> {
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if max > min {
        let range = max - min;
        data.iter()
            .map(|&v| (((v - min) / range) * 255.0) as u8)
            .collect()
    } else {
        vec![FLAT_IMAGE_GRAY; data.len()]
    }
}
