// Copyright (c) 2023 Boris Onchev (boris.oncev@gmail.com)
//
// Distributed under the Boost Software License, Version 1.0. (See accompanying
// file LICENSE or copy at http://www.boost.org/LICENSE_1_0.txt)

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rc5_family::{expand_key, RC5};

fn bench_key_schedule(c: &mut Criterion) {
    let key = [0x5Au8; 16];

    let mut group = c.benchmark_group("key_schedule");
    group.bench_function("rc5_16_16_16", |b| {
        b.iter(|| expand_key::<u16>(black_box(&key), 16))
    });
    group.bench_function("rc5_32_12_16", |b| {
        b.iter(|| expand_key::<u32>(black_box(&key), 12))
    });
    group.bench_function("rc5_64_24_16", |b| {
        b.iter(|| expand_key::<u64>(black_box(&key), 24))
    });
    group.finish();
}

fn bench_encrypt(c: &mut Criterion) {
    let key = [0x5Au8; 16];
    let rc5_16 = RC5::<u16>::new(&key, 16).unwrap();
    let rc5_32 = RC5::<u32>::new(&key, 12).unwrap();
    let rc5_64 = RC5::<u64>::new(&key, 24).unwrap();

    let mut group = c.benchmark_group("encrypt_block");
    group.bench_function("rc5_16_16_16", |b| {
        let mut block = [0u8; 4];
        b.iter(|| rc5_16.encrypt_block(black_box(&mut block)))
    });
    group.bench_function("rc5_32_12_16", |b| {
        let mut block = [0u8; 8];
        b.iter(|| rc5_32.encrypt_block(black_box(&mut block)))
    });
    group.bench_function("rc5_64_24_16", |b| {
        let mut block = [0u8; 16];
        b.iter(|| rc5_64.encrypt_block(black_box(&mut block)))
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_encrypt);
criterion_main!(benches);
