use criterion::{criterion_group, criterion_main, Criterion};
use perfect_mazes::{
    dimensions::MazeDimensions,
    generators,
    maze_display::MazeView,
    pathing,
    units::{ColumnsCount, RowsCount},
};
use rand::{rngs::StdRng, SeedableRng};

fn dims(rows: usize, columns: usize) -> MazeDimensions {
    MazeDimensions::new(RowsCount(rows), ColumnsCount(columns)).unwrap()
}

fn bench_recursive_backtracker_maze_8(c: &mut Criterion) {
    let d = dims(8, 8);
    let mut rng = StdRng::seed_from_u64(8);
    c.bench_function("recursive_backtracker_maze_8", move |b| {
        b.iter(|| generators::recursive_backtracker(&d, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let d = dims(32, 32);
    let mut rng = StdRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| generators::recursive_backtracker(&d, &mut rng))
    });
}

fn bench_recursive_backtracker_maze_500(c: &mut Criterion) {
    let d = dims(500, 500);
    let mut rng = StdRng::seed_from_u64(500);
    c.bench_function("recursive_backtracker_maze_500", move |b| {
        b.iter(|| generators::recursive_backtracker(&d, &mut rng))
    });
}

fn bench_start_to_goal_path_32(c: &mut Criterion) {
    let maze = generators::recursive_backtracker(&dims(32, 32), &mut StdRng::seed_from_u64(1));
    c.bench_function("start_to_goal_path_32", move |b| {
        b.iter(|| pathing::start_to_goal_path(&maze))
    });
}

fn bench_text_render_32(c: &mut Criterion) {
    let maze = generators::recursive_backtracker(&dims(32, 32), &mut StdRng::seed_from_u64(2));
    c.bench_function("text_render_32", move |b| {
        b.iter(|| format!("{}", MazeView::new(&maze)))
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_8,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_500,
    bench_start_to_goal_path_32,
    bench_text_render_32
);
criterion_main!(benches);
