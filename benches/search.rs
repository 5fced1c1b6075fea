//! Benchmarks for neighbor generation and bidirectional search.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use word_morph::search::DEFAULT_EXPANSION_CEILING;
use word_morph::{load_dictionary, search, EditMode, Lexicon, NeighborGenerator, PatternIndex};

fn bench_pattern_index(c: &mut Criterion) {
    let lexicon = load_dictionary();
    let words = lexicon.words_of_length(4).cloned().unwrap_or_default();

    c.bench_function("pattern_index_build_len4", |b| {
        b.iter(|| black_box(PatternIndex::build(black_box(&words))))
    });
}

fn bench_neighbors(c: &mut Criterion) {
    let lexicon = load_dictionary();
    let mut group = c.benchmark_group("neighbors");

    for mode in [EditMode::Classic, EditMode::Flex] {
        let generator = NeighborGenerator::new(&lexicon, mode);
        group.bench_with_input(BenchmarkId::new("cold", mode), &mode, |b, _| {
            b.iter(|| black_box(generator.neighbors(black_box("cold")).len()))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let lexicon: Lexicon = load_dictionary();
    let mut group = c.benchmark_group("search");

    let cases = [
        ("cold", "warm", EditMode::Classic),
        ("cat", "dog", EditMode::Classic),
        ("cat", "bird", EditMode::Flex),
    ];
    for (start, target, mode) in cases {
        let generator = NeighborGenerator::new(&lexicon, mode);
        let cap = 3 * start.len().max(target.len());
        group.bench_with_input(
            BenchmarkId::new(format!("{}", mode), format!("{}-{}", start, target)),
            &(start, target),
            |b, &(start, target)| {
                b.iter(|| {
                    black_box(search(
                        black_box(start),
                        black_box(target),
                        &generator,
                        cap,
                        DEFAULT_EXPANSION_CEILING,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pattern_index, bench_neighbors, bench_search);
criterion_main!(benches);
