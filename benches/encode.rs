use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_forge::{MaskPattern, byte_mode_encode, render_matrix};

fn bench_byte_mode_encode(c: &mut Criterion) {
    c.bench_function("byte_mode_encode_v1", |b| {
        b.iter(|| byte_mode_encode(black_box("0xYolo"), black_box(1)))
    });

    let text = "https://example.com/a/fairly/long/path?with=query&and=more";
    c.bench_function("byte_mode_encode_v4", |b| {
        b.iter(|| byte_mode_encode(black_box(text), black_box(4)))
    });
}

fn bench_render_fixed_mask(c: &mut Criterion) {
    let bits = byte_mode_encode("0xYolo", 1).unwrap();
    c.bench_function("render_matrix_v1_mask0", |b| {
        b.iter(|| render_matrix(black_box(1), black_box(&bits), Some(MaskPattern::Pattern0)))
    });

    let bits = byte_mode_encode("benchmark payload for version four", 4).unwrap();
    c.bench_function("render_matrix_v4_mask3", |b| {
        b.iter(|| render_matrix(black_box(4), black_box(&bits), Some(MaskPattern::Pattern3)))
    });
}

criterion_group!(benches, bench_byte_mode_encode, bench_render_fixed_mask);
criterion_main!(benches);
