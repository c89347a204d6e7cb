//! Projection of RGB pixels into the supported color-ratio spaces.
//!
//! Channel values are normalized to [0, 1] before dividing: integer samples
//! by their type's theoretical maximum, float samples taken as-is. Pixels
//! whose denominator is zero are excluded by the validity mask rather than
//! substituted, so the output never contains sentinel coordinates.

use crate::color_pipeline::loader::{PixelBuffer, PixelData};
use crate::color_pipeline::projection::types::{ColorSpace, ProjectedPoints};

const U8_SCALE: f64 = u8::MAX as f64;
const U16_SCALE: f64 = u16::MAX as f64;

/// Projects every pixel of `buffer` into `space`, in row-major scan order.
pub fn project(buffer: &PixelBuffer, space: ColorSpace) -> ProjectedPoints {
    let pixels = normalized_rgb(buffer);
    match space {
        ColorSpace::Ratio => {
            project_with(&pixels, |[r, g, b]| (g > 0.0).then(|| (r / g, b / g)))
        }
        ColorSpace::Chromaticity => project_with(&pixels, |[r, g, b]| {
            let total = r + g + b;
            (total > 0.0).then(|| (r / total, g / total))
        }),
    }
}

fn project_with<F>(pixels: &[[f64; 3]], valid: F) -> ProjectedPoints
where
    F: Fn([f64; 3]) -> Option<(f64, f64)>,
{
    let mut points = ProjectedPoints::default();
    for &px in pixels {
        if let Some((x, y)) = valid(px) {
            points.x.push(x);
            points.y.push(y);
        }
    }
    points
}

/// Extracts RGB triples normalized to [0, 1].
fn normalized_rgb(buffer: &PixelBuffer) -> Vec<[f64; 3]> {
    match &buffer.data {
        PixelData::U8(v) => triples(v, |s| s as f64 / U8_SCALE),
        PixelData::U16(v) => triples(v, |s| s as f64 / U16_SCALE),
        PixelData::F32(v) => triples(v, |s| s as f64),
        PixelData::F64(v) => triples(v, |s| s),
    }
}

fn triples<T: Copy>(data: &[T], norm: impl Fn(T) -> f64) -> Vec<[f64; 3]> {
    data.chunks_exact(3)
        .map(|px| [norm(px[0]), norm(px[1]), norm(px[2])])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u8_buffer(width: usize, height: usize, data: Vec<u8>) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            data: PixelData::U8(data),
        }
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn ratio_matches_raw_channel_ratios() {
        let buffer = u8_buffer(2, 1, vec![10, 20, 30, 60, 40, 20]);
        let points = project(&buffer, ColorSpace::Ratio);

        assert_eq!(points.len(), 2);
        assert_close(points.x[0], 0.5);
        assert_close(points.y[0], 1.5);
        assert_close(points.x[1], 1.5);
        assert_close(points.y[1], 0.5);
    }

    #[test]
    fn ratio_drops_pixels_with_zero_green() {
        let buffer = u8_buffer(2, 2, vec![10, 20, 30, 5, 0, 5, 0, 0, 0, 60, 40, 20]);
        let points = project(&buffer, ColorSpace::Ratio);

        assert_eq!(points.len(), 2);
        assert_close(points.x[0], 0.5);
        assert_close(points.x[1], 1.5);
    }

    #[test]
    fn chromaticity_matches_hand_computed_values() {
        let buffer = u8_buffer(1, 1, vec![51, 102, 51]);
        let points = project(&buffer, ColorSpace::Chromaticity);

        assert_eq!(points.len(), 1);
        assert_close(points.x[0], 0.25);
        assert_close(points.y[0], 0.5);
    }

    #[test]
    fn chromaticity_on_all_black_is_empty() {
        let buffer = u8_buffer(2, 2, vec![0; 12]);
        let points = project(&buffer, ColorSpace::Chromaticity);

        assert!(points.is_empty());
        assert_eq!(points.x, Vec::<f64>::new());
        assert_eq!(points.y, Vec::<f64>::new());
    }

    #[test]
    fn u16_samples_normalize_by_theoretical_maximum() {
        let buffer = PixelBuffer {
            width: 1,
            height: 1,
            data: PixelData::U16(vec![65535, 65535, 65535]),
        };
        let points = project(&buffer, ColorSpace::Chromaticity);

        assert_eq!(points.len(), 1);
        assert_close(points.x[0], 1.0 / 3.0);
        assert_close(points.y[0], 1.0 / 3.0);
    }

    #[test]
    fn float_samples_are_taken_as_already_normalized() {
        let buffer = PixelBuffer {
            width: 1,
            height: 1,
            data: PixelData::F64(vec![2.0, 1.0, 4.0]),
        };
        let points = project(&buffer, ColorSpace::Ratio);

        assert_eq!(points.len(), 1);
        assert_close(points.x[0], 2.0);
        assert_close(points.y[0], 4.0);
    }

    #[test]
    fn output_preserves_row_major_scan_order() {
        let buffer = u8_buffer(2, 1, vec![10, 10, 10, 20, 10, 10]);
        let points = project(&buffer, ColorSpace::Ratio);

        assert_close(points.x[0], 1.0);
        assert_close(points.x[1], 2.0);
    }
}
