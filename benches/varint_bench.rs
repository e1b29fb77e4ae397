use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use num_bigint::BigUint;
use protowire::core::{length_delimited, varint};

#[allow(clippy::unwrap_used)]
fn bench_varint_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("varint_encode_decode");
    let values = [
        ("1b", 0x7Fu64),
        ("2b", 0x3FFF),
        ("5b", 3_000_000_000),
        ("10b", u64::MAX),
    ];

    for &(label, value) in &values {
        group.bench_function(format!("encode_{label}"), |b| {
            let mut buf = [0u8; 10];
            b.iter(|| varint::encode_narrow(black_box(&mut buf), black_box(value), 0).unwrap())
        });
        group.bench_function(format!("decode_{label}"), |b| {
            let mut buf = [0u8; 10];
            let end = varint::encode_narrow(&mut buf, value, 0).unwrap();
            b.iter(|| varint::decode(black_box(&buf[..end]), 0).unwrap())
        });
    }

    group.bench_function("encode_wide_16b", |b| {
        let value = BigUint::from(u64::MAX) * BigUint::from(u64::MAX);
        let mut buf = [0u8; 20];
        b.iter(|| varint::encode_wide(black_box(&mut buf), black_box(&value), 0).unwrap())
    });

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_length_delimited(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_delimited");
    let payload_sizes = [64usize, 512, 4096, 65536];

    for &size in &payload_sizes {
        let payload = vec![0xABu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encode_{size}b"), |b| {
            b.iter(|| length_delimited::encode(black_box(&payload)).unwrap())
        });
        group.bench_function(format!("decode_{size}b"), |b| {
            let framed = length_delimited::encode(&payload).unwrap();
            b.iter(|| length_delimited::decode(black_box(&framed), 0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_varint_encode_decode, bench_length_delimited);
criterion_main!(benches);
