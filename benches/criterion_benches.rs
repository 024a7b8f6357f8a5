use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sokoban_astar::config::{Config, DeadSquareMethod, HeuristicKind};
use sokoban_astar::solver::dead_squares::DeadSquares;
use sokoban_astar::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_microban_1(c: &mut Criterion) {
    bench_level(c, HeuristicKind::Greedy, "levels/microban/1.txt", 100);
}

#[allow(unused)]
fn bench_microban_3(c: &mut Criterion) {
    bench_level(c, HeuristicKind::Greedy, "levels/microban/3.txt", 50);
}

#[allow(unused)]
fn bench_microban_3_optimal(c: &mut Criterion) {
    bench_level(c, HeuristicKind::Optimal, "levels/microban/3.txt", 50);
}

#[allow(unused)]
fn bench_dead_squares(c: &mut Criterion) {
    let level = "levels/microban/3.txt".load_level().unwrap();
    c.bench_function("dead squares levels/microban/3.txt", move |b| {
        b.iter(|| {
            DeadSquares::detect(
                black_box(&level.map),
                black_box(DeadSquareMethod::Reachability),
            )
        })
    });
}

fn bench_level(c: &mut Criterion, heuristic: HeuristicKind, level_path: &str, samples: usize) {
    let level = level_path.load_level().unwrap();
    let config = Config::default().with_heuristic(heuristic);

    let mut group = c.benchmark_group(heuristic.to_string());
    group.sample_size(samples);
    group.bench_function(level_path, move |b| {
        b.iter(|| black_box(level.solve(black_box(&config))))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_microban_1,
    bench_microban_3,
    bench_microban_3_optimal,
    bench_dead_squares,
);
criterion_main!(benches);
