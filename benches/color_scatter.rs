use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use easylook_rs::color_pipeline::{ColorSpace, PixelBuffer, PixelData, downsample, project};

fn generate_rgb16_buffer(width: usize, height: usize) -> PixelBuffer {
    let mut data = Vec::with_capacity(width * height * 3);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y * width) % 65536) as u16;
            data.push(v);
            data.push(v.wrapping_add(257));
            data.push(v.wrapping_add(514));
        }
    }
    PixelBuffer {
        width,
        height,
        data: PixelData::U16(data),
    }
}

fn benchmark_projection_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let buffer = generate_rgb16_buffer(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &buffer, |b, buffer| {
            b.iter(|| project(black_box(buffer), ColorSpace::Chromaticity));
        });
    }

    group.finish();
}

fn benchmark_color_spaces(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection_by_space");
    let buffer = generate_rgb16_buffer(500, 500);

    let spaces = vec![(ColorSpace::Ratio, "ratio"), (ColorSpace::Chromaticity, "chromaticity")];

    for (space, label) in spaces {
        group.bench_with_input(BenchmarkId::from_parameter(label), &space, |b, &space| {
            b.iter(|| project(black_box(&buffer), space));
        });
    }

    group.finish();
}

fn benchmark_sample_rates(c: &mut Criterion) {
    let mut group = c.benchmark_group("downsample_by_rate");
    let buffer = generate_rgb16_buffer(1000, 1000);

    for rate in [2u32, 4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            b.iter(|| black_box(downsample(buffer.clone(), rate)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_projection_sizes,
    benchmark_color_spaces,
    benchmark_sample_rates
);
criterion_main!(benches);
