use bytemuck::{Pod, Zeroable};
use enumcast::{to_enum, to_i64, to_u8};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

#[repr(transparent)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Flag(u8);

#[repr(transparent)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Handle(i64);

pub fn bench_to_enum(c: &mut Criterion) {
    c.bench_function("to_enum u32 into 1 byte", |b| {
        b.iter(|| to_enum::<Flag, _>(black_box(0x1234_5678u32)))
    });

    c.bench_function("to_enum f64 into 8 bytes", |b| {
        b.iter(|| to_enum::<Handle, _>(black_box(-3.9f64)))
    });
}

pub fn bench_readers(c: &mut Criterion) {
    c.bench_function("to_i64 from 1 byte", |b| b.iter(|| to_i64(black_box(Flag(0x80)))));

    c.bench_function("to_u8 from 8 bytes", |b| {
        b.iter(|| to_u8(black_box(Handle(0x0102_0304_0506_07F8))))
    });
}

criterion_group!(benches, bench_to_enum, bench_readers);
criterion_main!(benches);
