use criterion::{black_box, criterion_group, criterion_main, Criterion};
use maze_escape::core::{GameConfig, GameEngine, Grid};
use maze_escape::term::MazeView;
use maze_escape::types::{Direction, Position, REFERENCE_MAP};

/// Open room with the monster sealed away, so turns never end the game.
const ARENA: [&str; 7] = [
    "###E#####",
    "#.....#.#",
    "#.....###",
    "#.....###",
    "#.....###",
    "#.....###",
    "#########",
];

fn arena() -> GameEngine {
    GameEngine::new(GameConfig::with_map(&ARENA, Position::new(3, 3), Position::new(7, 1))).unwrap()
}

fn bench_parse_grid(c: &mut Criterion) {
    c.bench_function("parse_reference_grid", |b| {
        b.iter(|| Grid::parse(black_box(&REFERENCE_MAP)).unwrap())
    });
}

fn bench_attempt_move(c: &mut Criterion) {
    let mut engine = arena();
    let mut flip = false;

    c.bench_function("attempt_move", |b| {
        b.iter(|| {
            flip = !flip;
            let dir = if flip { Direction::Left } else { Direction::Right };
            engine.attempt_move(black_box(dir))
        })
    });
}

fn bench_step_monster(c: &mut Criterion) {
    let mut engine = arena();

    c.bench_function("step_monster", |b| b.iter(|| engine.step_monster()));
}

fn bench_play_turn(c: &mut Criterion) {
    let mut engine = arena();
    let mut flip = false;

    c.bench_function("play_turn", |b| {
        b.iter(|| {
            flip = !flip;
            let dir = if flip { Direction::Up } else { Direction::Down };
            engine.play_turn(black_box(dir))
        })
    });
}

fn bench_render_frame(c: &mut Criterion) {
    let grid = Grid::parse(&REFERENCE_MAP).unwrap();
    let view = MazeView::default();

    c.bench_function("render_reference_frame", |b| {
        b.iter(|| view.render(&grid, black_box(Position::new(1, 11)), Position::new(11, 3), None))
    });
}

criterion_group!(
    benches,
    bench_parse_grid,
    bench_attempt_move,
    bench_step_monster,
    bench_play_turn,
    bench_render_frame
);
criterion_main!(benches);
