//! Benchmarks for engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mailbox_engine::board::{parse_fen, Position, Searcher};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";
const CASTLING: &str = "r3k2r/pppq1ppp/2n5/3pP3/8/5N2/PPP2PPP/R3K2R w KQkq d6 0 1";

fn position(fen: &str) -> Position {
    parse_fen(fen).expect("valid benchmark FEN").position
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, pos) in [
        ("startpos", Position::startpos()),
        ("middlegame", position(MIDDLEGAME)),
        ("castling", position(CASTLING)),
    ] {
        group.bench_with_input(BenchmarkId::new("generate", name), &pos, |b, pos| {
            b.iter(|| black_box(pos.generate_moves()))
        });
    }

    group.finish();
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");

    let pos = position(MIDDLEGAME);
    let moves = pos.generate_moves();
    group.bench_function("all_children", |b| {
        b.iter(|| {
            for &mv in &moves {
                black_box(pos.make_move(mv));
            }
        })
    });
    group.bench_function("value_all", |b| {
        b.iter(|| moves.iter().map(|&mv| pos.value(mv)).sum::<i32>())
    });

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10); // Fewer samples for slower benchmarks

    for budget in [1_000u64, 10_000] {
        group.bench_with_input(BenchmarkId::new("startpos", budget), &budget, |b, &budget| {
            b.iter(|| {
                let mut searcher = Searcher::new();
                searcher.search(&Position::startpos(), budget)
            })
        });
    }

    let tactical = position("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
    group.bench_function("tactical", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new();
            searcher.search(&tactical, 5_000)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_movegen, bench_make_move, bench_search);
criterion_main!(benches);
