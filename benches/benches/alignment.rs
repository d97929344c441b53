//! Benchmarks for pairwise and three-way alignment in engine/src/diff and
//! engine/src/three_way
//!
//! Performance-critical paths:
//! - `diff_pieces`: longest-run and Myers alignment of line sequences
//! - `three_way_diff_pieces`: two base-anchored diffs plus region grouping
//! - `merge`: merge synthesis over the classified regions

#![allow(missing_docs)]

use chunkdiff::{Algorithm, DiffOptions, diff_pieces, merge, three_way_diff_pieces};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Generates a source-like file with `count` lines.
fn source_lines(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| match i % 7 {
            0 => format!("fn function_{i}() {{"),
            6 => "}".to_string(),
            3 => String::new(),
            _ => format!("    let value_{i} = compute({i});"),
        })
        .collect()
}

/// Rewrites every `stride`-th line, starting at `offset`.
fn edit_every(lines: &[String], stride: usize, offset: usize, tag: &str) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            if i % stride == offset {
                format!("{line} // {tag}")
            } else {
                line.clone()
            }
        })
        .collect()
}

fn bench_pairwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/pairwise");

    for count in [100usize, 1_000, 10_000] {
        let old = source_lines(count);
        let new = edit_every(&old, 50, 7, "edited");

        group.throughput(Throughput::Elements(count as u64));
        for algorithm in [Algorithm::LongestRun, Algorithm::Myers] {
            let options = DiffOptions::new().algorithm(algorithm);
            group.bench_with_input(
                BenchmarkId::new(format!("{algorithm:?}"), format!("{count}_lines")),
                &count,
                |b, _| {
                    b.iter(|| {
                        diff_pieces(black_box(old.clone()), black_box(new.clone()), &options)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_repetitive_input(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/repetitive");

    // Few distinct pieces stress the candidate search
    for count in [200usize, 1_000] {
        let old: Vec<String> = (0..count).map(|i| (i % 3).to_string()).collect();
        let new: Vec<String> = (0..count).map(|i| ((i + 1) % 4).to_string()).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_pieces")),
            &count,
            |b, _| {
                b.iter(|| {
                    diff_pieces(
                        black_box(old.clone()),
                        black_box(new.clone()),
                        &DiffOptions::default(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn bench_three_way(c: &mut Criterion) {
    let mut group = c.benchmark_group("alignment/three_way");

    for count in [100usize, 1_000, 10_000] {
        let base = source_lines(count);
        let old = edit_every(&base, 40, 3, "old");
        let new = edit_every(&base, 60, 11, "new");

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("diff", format!("{count}_lines")),
            &count,
            |b, _| {
                b.iter(|| {
                    three_way_diff_pieces(
                        black_box(base.clone()),
                        black_box(old.clone()),
                        black_box(new.clone()),
                        &DiffOptions::default(),
                    )
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("merge", format!("{count}_lines")),
            &count,
            |b, _| {
                b.iter(|| {
                    three_way_diff_pieces(
                        black_box(base.clone()),
                        black_box(old.clone()),
                        black_box(new.clone()),
                        &DiffOptions::default(),
                    )
                    .map(merge)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pairwise, bench_repetitive_input, bench_three_way);
criterion_main!(benches);
