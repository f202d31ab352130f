//! Construction and lookup benchmarks
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sfx::tree::{CommonPrefixVisitor, SuffixTree, SuffixTreeBuilder};

/// Deterministic text over the first `alphabet` lowercase letters
fn generate_text(len: usize, alphabet: u8, seed: u64) -> String {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (b'a' + ((state >> 33) % alphabet as u64) as u8) as char
        })
        .collect()
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for len in [1_000, 10_000, 100_000] {
        let random = generate_text(len, 4, 42);
        let repetitive = "ab".repeat(len / 2);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("random_4", len), &random, |b, text| {
            b.iter(|| SuffixTree::new(black_box(text)))
        });
        group.bench_with_input(BenchmarkId::new("repetitive", len), &repetitive, |b, text| {
            b.iter(|| SuffixTree::new(black_box(text)))
        });
    }

    group.finish();
}

fn bench_common_prefix(c: &mut Criterion) {
    let text = generate_text(100_000, 4, 7);
    let builder = SuffixTreeBuilder::with_defaults();

    c.bench_function("common_prefix_100k", |b| {
        b.iter(|| {
            let mut visitor = CommonPrefixVisitor::new(text.len());
            builder
                .build_with_visitor(black_box(&text), &mut visitor)
                .map(|_| visitor.into_lengths())
        })
    });
}

fn bench_find(c: &mut Criterion) {
    let text = generate_text(100_000, 4, 1);
    let tree = SuffixTree::new(&text).expect("Failed to build tree");

    let present = &text[50_000..50_032];
    let absent = "e".repeat(32);

    let mut group = c.benchmark_group("find");
    group.bench_function("present_32", |b| b.iter(|| tree.find(black_box(present))));
    group.bench_function("absent_32", |b| b.iter(|| tree.find(black_box(&absent))));
    group.bench_function("find_all_short", |b| b.iter(|| tree.find_all(black_box("abc"))));
    group.finish();
}

criterion_group!(benches, bench_construction, bench_common_prefix, bench_find);
criterion_main!(benches);
