use criterion::{Criterion, black_box, criterion_group, criterion_main};
use qr_format_bch::decoder::batch::{decode_batch, decode_batch_parallel};
use qr_format_bch::{decode, encode, is_valid};

fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_all_32", |b| {
        b.iter(|| {
            let mut acc = 0u16;
            for m in 0..32u8 {
                acc ^= encode(black_box(m));
            }
            acc
        })
    });
}

fn bench_is_valid(c: &mut Criterion) {
    c.bench_function("is_valid_3929", |b| b.iter(|| is_valid(black_box(3929))));
}

fn bench_decode_single(c: &mut Criterion) {
    c.bench_function("decode_one_error", |b| b.iter(|| decode(black_box(3933))));
}

fn bench_decode_batch_all_words(c: &mut Criterion) {
    let words: Vec<u16> = (0..=0x7FFFu16).collect();
    c.bench_function("decode_batch_32768", |b| {
        b.iter(|| decode_batch(black_box(&words)))
    });
}

fn bench_decode_batch_parallel_all_words(c: &mut Criterion) {
    let words: Vec<u16> = (0..=0x7FFFu16).collect();
    c.bench_function("decode_batch_parallel_32768", |b| {
        b.iter(|| decode_batch_parallel(black_box(&words)))
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_is_valid,
    bench_decode_single,
    bench_decode_batch_all_words,
    bench_decode_batch_parallel_all_words
);
criterion_main!(benches);
