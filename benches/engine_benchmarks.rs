//! Benchmarks for position construction, evaluation, and search.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use emberhill::{parse_san, Position, Searcher, Variant};

fn play(sans: &[&str]) -> Position {
    let mut position = Position::new();
    for san in sans {
        let mv = parse_san(&position, san).expect("legal move");
        position = position.derive(mv);
    }
    position
}

fn middlegame() -> Position {
    play(&[
        "e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "O-O", "Nf6", "d3", "d6", "c3", "O-O",
    ])
}

fn bench_derive(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive");

    let startpos = Position::new();
    let first = startpos.legal_moves()[0];
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.derive(black_box(first))))
    });

    let middle = middlegame();
    let mv = middle.legal_moves()[0];
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.derive(black_box(mv))))
    });

    let atomic = Position::new_with_variant(Variant::Atomic);
    let mv = atomic.legal_moves()[0];
    group.bench_function("atomic", |b| {
        b.iter(|| black_box(atomic.derive(black_box(mv))))
    });

    group.finish();
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");

    let startpos = Position::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.clone().evaluate()))
    });

    let middle = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middle.clone().evaluate()))
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let middle = middlegame();
    group.bench_function("middlegame_50ms", |b| {
        b.iter(|| {
            let mut searcher = Searcher::with_budget(Duration::from_millis(50));
            black_box(searcher.find_best_move(black_box(&middle)))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_derive, bench_eval, bench_search);
criterion_main!(benches);
