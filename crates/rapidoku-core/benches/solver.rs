//! Solver benchmarks over puzzles of varying difficulty.

use criterion::{Criterion, criterion_group, criterion_main};
use rapidoku_core::Board;

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const ESCARGOT: &str =
    "1....7.9..3..2...8..96..5....53..9...1..8...26....4...3......1..4......7..7...3..";

fn bench_solve(c: &mut Criterion) {
    let easy: Board = EASY.parse().unwrap();
    let escargot: Board = ESCARGOT.parse().unwrap();

    let mut group = c.benchmark_group("solve");
    group.bench_function("easy", |b| b.iter(|| easy.solve()));
    group.bench_function("escargot", |b| b.iter(|| escargot.solve()));
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
