// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::thread_rng;
use std::time::Duration;
use ringsig::{
    common::*,
    hashes::*
};

fn random_scalar() -> Scalar {
    return Scalar::random(&mut thread_rng()).unwrap()
}

fn random_point() -> CurvePoint {
    return CurvePoint::mul_base(&random_scalar())
}

fn secp256k1_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1");
    group.sample_size(40);
    group.measurement_time(Duration::from_secs(3));


    let params = (random_scalar().to_bytes(), random_scalar().to_bytes());
    group.bench_with_input(BenchmarkId::new("Scalar", "deterministic"), &params,
    |b, (p1, p2) | b.iter(|| {
        black_box(domain_h_scalar(&[p1.as_slice(), p2.as_slice()].concat(), domains::SIGNING_NONCE));
    }));
    group.bench_with_input(BenchmarkId::new("Scalar", "random"), &(),
    |b, () | b.iter(|| {
        black_box(random_scalar());
    }));
    let params = random_scalar();
    group.bench_with_input(BenchmarkId::new("Scalar", "invert"), &params,
    |b, s | b.iter(|| {
        black_box(s.invert().unwrap());
    }));


    let params = random_point();
    group.bench_with_input(BenchmarkId::new("Encode", "compressed"), &params,
    |b, p | b.iter(|| {
        black_box(p.to_bytes());
    }));
    let params = random_point().to_bytes();
    group.bench_with_input(BenchmarkId::new("Decode", "compressed"), &params,
    |b, p | b.iter(|| {
        black_box(CurvePoint::from_bytes(p).unwrap());
    }));
    let params = random_point().to_x_only();
    group.bench_with_input(BenchmarkId::new("Decode", "x-only"), &params,
    |b, p | b.iter(|| {
        black_box(CurvePoint::from_bytes(p).unwrap());
    }));


    let params = (random_point(), random_point());
    group.bench_with_input(BenchmarkId::new("Point", "addition"), &params,
    |b, (p1, p2) | b.iter(|| {
        black_box(p1.add(p2));
    }));
    let params = (random_scalar(), random_point());
    group.bench_with_input(BenchmarkId::new("Point", "multiplication"), &params,
    |b, (s, p) | b.iter(|| {
        black_box(p.mul(s));
    }));
    let params = random_scalar();
    group.bench_with_input(BenchmarkId::new("Point", "basepoint multiplication"), &params,
    |b, s | b.iter(|| {
        black_box(CurvePoint::mul_base(s));
    }));
    let params = (random_scalar(), random_scalar(), random_point());
    group.bench_with_input(BenchmarkId::new("Point", "ring link"), &params,
    |b, (s, c, p) | b.iter(|| {
        black_box(CurvePoint::mul_base_add(s, c, p));
    }));


    let params = random_point().to_bytes();
    group.bench_with_input(BenchmarkId::new("Hash", "to point"), &params,
    |b, p | b.iter(|| {
        black_box(domain_h_point(p, domains::KEY_IMAGE));
    }));
}

criterion_group!(curve, secp256k1_benchmark);
criterion_main!(curve);
