use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use snake_maze::animation::step_animation;
use snake_maze::generators;
use snake_maze::grid_dimensions::MazeDimensions;
use snake_maze::pathing;
use snake_maze::units::TickIndex;

fn bench_find_track(c: &mut Criterion) {
    c.bench_function("find_track", |b| {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let mut g = generators::build_maze(MazeDimensions::new(301, 301).unwrap(), &mut rng);
        b.iter(|| pathing::find_track(&mut g, &mut rng))
    });
}

fn bench_animation_frames(c: &mut Criterion) {
    c.bench_function("animation_frames", |b| {
        let mut rng = XorShiftRng::seed_from_u64(1);
        let mut g = generators::build_maze(MazeDimensions::new(101, 101).unwrap(), &mut rng);
        let track = pathing::find_track(&mut g, &mut rng).unwrap();
        b.iter(|| {
            (0..track.len() + 4)
                .map(|i| step_animation(&track, TickIndex(i)))
                .filter(|frame| frame.completed)
                .count()
        })
    });
}

criterion_group!(benches,
    bench_find_track,
    bench_animation_frames
);
criterion_main!(benches);
