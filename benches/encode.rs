use block_glyphs::prelude::*;
use criterion::{Criterion, criterion_group, criterion_main};
use rand::RngExt;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;
use std::time::Duration;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut r = SmallRng::seed_from_u64(0);
    let data: Vec<u8> = (0..256 * 256 / 8).map(|_| r.random()).collect();
    let raster = Raster::from_bytes(&data, 256, 256);

    for block in BlockType::ALL {
        let encoder = Encoder::new(block);
        c.bench_function(&format!("encode 256x256 {}", block), |b| {
            b.iter(|| encoder.to_text(black_box(&raster)))
        });
    }

    let text = Encoder::new(BlockType::Braille).to_text(&raster);
    let decoder = Decoder::new(BlockType::Braille);
    c.bench_function("decode 256x256 Braille", |b| {
        b.iter(|| decoder.decode(black_box(&text), 256, 256))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().warm_up_time(Duration::from_secs(1)).measurement_time(Duration::from_secs(3));
    targets = criterion_benchmark
}
criterion_main!(benches);
