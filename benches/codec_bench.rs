//! Benchmarks for each codec and for the named pipelines, across a few
//! representative data patterns.

use blockcodecs::{Codec, Pipeline};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

mod test_data {
    pub fn uniform(size: usize) -> Vec<u8> {
        vec![0xAA; size]
    }

    pub fn random(size: usize) -> Vec<u8> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push((seed >> 32) as u8);
        }
        data
    }

    pub fn text_like(size: usize) -> Vec<u8> {
        let text = b"The quick brown fox jumps over the lazy dog. \
                     Pack my box with five dozen liquor jugs. \
                     Lorem ipsum dolor sit amet, consectetur adipiscing elit. ";
        let mut data = Vec::with_capacity(size);
        while data.len() < size {
            let remaining = size - data.len();
            let chunk_size = remaining.min(text.len());
            data.extend_from_slice(&text[..chunk_size]);
        }
        data
    }
}

const DATA_SIZE: usize = 8 * 1024;
const BLOCK_SIZE: usize = 4096;
const WINDOW_SIZE: usize = 4096;

type PatternGenerator = fn(usize) -> Vec<u8>;

const PATTERNS: [(&str, PatternGenerator); 3] = [
    ("uniform", test_data::uniform as PatternGenerator),
    ("random", test_data::random as PatternGenerator),
    ("text", test_data::text_like as PatternGenerator),
];

fn bench_named_pipelines(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_encode");

    for name in [
        "HA",
        "RLE",
        "BWT+RLE",
        "BWT+MTF+HA",
        "BWT+MTF+RLE+HA",
        "LZSS",
        "LZSS+HA",
        "LZW",
        "LZW+HA",
    ] {
        let pipeline = Pipeline::named(name, BLOCK_SIZE, WINDOW_SIZE).unwrap();
        let data = test_data::text_like(DATA_SIZE);

        group.throughput(Throughput::Bytes(DATA_SIZE as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &data, |b, data| {
            b.iter(|| {
                let encoded = pipeline.encode(black_box(data)).unwrap();
                black_box(encoded);
            });
        });
    }

    group.finish();
}

fn bench_pipeline_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_roundtrip");

    for (pattern_name, generator) in PATTERNS {
        let data = generator(DATA_SIZE);
        let pipeline = Pipeline::named("BWT+MTF+RLE+HA", BLOCK_SIZE, WINDOW_SIZE).unwrap();

        group.throughput(Throughput::Bytes(DATA_SIZE as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let encoded = pipeline.encode(black_box(data)).unwrap();
                    let decoded = pipeline.decode(&encoded).unwrap();
                    black_box(decoded);
                });
            },
        );
    }

    group.finish();
}

fn bench_lzss_window_sizes(c: &mut Criterion) {
    use blockcodecs::Lzss;

    let mut group = c.benchmark_group("lzss_window_size");
    let data = test_data::text_like(DATA_SIZE);

    for window in [256usize, 1024, 4096, 16384] {
        let lzss = Lzss::new(BLOCK_SIZE, window).unwrap();
        group.throughput(Throughput::Bytes(DATA_SIZE as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(window),
            &data,
            |b, data| {
                b.iter(|| {
                    let encoded = lzss.encode(black_box(data)).unwrap();
                    black_box(encoded);
                });
            },
        );
    }

    group.finish();
}

fn bench_compression_ratio(c: &mut Criterion) {
    let mut group = c.benchmark_group("compression_ratio");
    group.sample_size(10);

    for (pattern_name, generator) in PATTERNS {
        let data = generator(DATA_SIZE);
        let pipeline = Pipeline::named("BWT+MTF+RLE+HA", BLOCK_SIZE, WINDOW_SIZE).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(pattern_name),
            &data,
            |b, data| {
                b.iter(|| {
                    let encoded = pipeline.encode(black_box(data)).unwrap();
                    let ratio = data.len() as f64 / encoded.len() as f64;
                    black_box((encoded, ratio));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_named_pipelines,
    bench_pipeline_roundtrip,
    bench_lzss_window_sizes,
    bench_compression_ratio,
);
criterion_main!(benches);
