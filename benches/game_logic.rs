use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrion::core::{Block, BlockIds, Game, Playfield, Tetrion, Vector};
use tetrion::types::{Color, Command, SPAWN_DELAY_MS};

fn bench_tick(c: &mut Criterion) {
    let game = Game::new(12345).tick(SPAWN_DELAY_MS, None);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| game.tick(black_box(16), None))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    // Bottom 4 rows complete.
    let mut ids = BlockIds::new();
    let blocks: Vec<Block> = (0..4)
        .flat_map(|y| (0..10).map(move |x| (x, y)))
        .map(|(x, y)| Block::new(ids.next(), Vector::new(x, y), Color::Cyan))
        .collect();
    let playfield = Playfield::new().lock(&blocks);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| black_box(&playfield).clear_lines())
    });
}

fn bench_spawn(c: &mut Criterion) {
    let tetrion = Tetrion::new(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| black_box(&tetrion).spawn()));
}

fn bench_move(c: &mut Criterion) {
    let tetrion = Tetrion::new(12345).spawn().tetrion;

    c.bench_function("move_right", |b| {
        b.iter(|| black_box(&tetrion).move_right())
    });
}

fn bench_rotate(c: &mut Criterion) {
    let tetrion = Tetrion::new(12345).spawn().tetrion;

    c.bench_function("rotate_cw", |b| {
        b.iter(|| black_box(&tetrion).rotate_right())
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let game = Game::new(12345).tick(SPAWN_DELAY_MS, None);

    c.bench_function("hard_drop_command", |b| {
        b.iter(|| game.tick(black_box(0), Some(Command::HardDrop)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
