use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use snake_maze::{generators, grid_dimensions::MazeDimensions};

fn bench_recursive_backtracker_maze_51(c: &mut Criterion) {
    let dimensions = MazeDimensions::new(51, 51).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(0);

    c.bench_function("recursive_backtracker_maze_51", move |b| {
        b.iter(|| generators::build_maze(dimensions, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_301(c: &mut Criterion) {
    let dimensions = MazeDimensions::new(301, 301).unwrap();
    let mut rng = XorShiftRng::seed_from_u64(0);

    c.bench_function("recursive_backtracker_maze_301", move |b| {
        b.iter(|| generators::build_maze(dimensions, &mut rng))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_51,
    bench_recursive_backtracker_maze_301
);
criterion_main!(benches);
