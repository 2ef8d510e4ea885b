// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use strong_index::strong_index;

strong_index! {
    type Row = Incrementable<RowTag>;
    type Offset = FullArithmetic<OffsetTag>;
}

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn gather_raw(table: &[u64], start: usize, stride: usize) -> u64 {
    let mut sum = 0u64;
    let mut i = start;
    while i < table.len() {
        sum = sum.wrapping_add(table[i]);
        i += stride;
    }
    sum
}

fn gather_wrapped(table: &[u64], start: Row, stride: usize) -> u64 {
    let mut sum = 0u64;
    let mut row = start;
    while row.get() < table.len() {
        sum = sum.wrapping_add(table[usize::from(row)]);
        row += stride;
    }
    sum
}

fn scale_raw(values: &[usize], factor: usize) -> usize {
    values
        .iter()
        .fold(0usize, |acc, &v| acc.wrapping_add((v * factor + 3) % 97))
}

fn scale_wrapped(values: &[Offset], factor: usize) -> usize {
    values
        .iter()
        .fold(0usize, |acc, &v| acc.wrapping_add(((v * factor + 3) % 97).get()))
}

/// Compares raw `usize` loops with the same loops over wrapped indices.
/// Both variants should compile to the same code.
fn bench_index_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_ops");

    for size in SIZES {
        let table: Vec<u64> = (0..size as u64).collect();
        let values: Vec<usize> = (0..size).collect();
        let offsets: Vec<Offset> = values.iter().copied().map(Offset::new).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("gather_raw", size), &size, |b, _| {
            b.iter(|| gather_raw(black_box(&table), black_box(0), black_box(1)))
        });
        group.bench_with_input(BenchmarkId::new("gather_wrapped", size), &size, |b, _| {
            b.iter(|| gather_wrapped(black_box(&table), black_box(Row::new(0)), black_box(1)))
        });
        group.bench_with_input(BenchmarkId::new("scale_raw", size), &size, |b, _| {
            b.iter(|| scale_raw(black_box(&values), black_box(4)))
        });
        group.bench_with_input(BenchmarkId::new("scale_wrapped", size), &size, |b, _| {
            b.iter(|| scale_wrapped(black_box(&offsets), black_box(4)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_index_ops);
criterion_main!(benches);
