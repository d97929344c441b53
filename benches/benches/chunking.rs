//! Benchmarks for chunkers in engine/src/chunker
//!
//! Performance-critical paths:
//! - `LineChunker` / `LineEndingsPreservingChunker`: terminator scanning
//! - `WordChunker`: delimiter-run splitting
//! - `CharacterChunker`: per-character allocation

#![allow(missing_docs)]

use chunkdiff::chunker::{
    CharacterChunker, Chunker, LineChunker, LineEndingsPreservingChunker, WordChunker,
};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

fn sample_text(bytes: usize) -> String {
    let line = "The quick brown fox, jumping over the lazy dog; again!\r\n";
    line.repeat(bytes / line.len() + 1)
}

fn bench_chunkers(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunking");

    let chunkers: [(&str, Box<dyn Chunker>); 4] = [
        ("line", Box::new(LineChunker::new())),
        ("line_preserving", Box::new(LineEndingsPreservingChunker::new())),
        ("word", Box::new(WordChunker::new())),
        ("character", Box::new(CharacterChunker::new())),
    ];

    for size in [4096usize, 65536, 1_048_576] {
        let text = sample_text(size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        for (name, chunker) in &chunkers {
            group.bench_with_input(BenchmarkId::new(*name, size), &text, |b, text| {
                b.iter(|| chunker.chunk(black_box(text)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_chunkers);
criterion_main!(benches);
