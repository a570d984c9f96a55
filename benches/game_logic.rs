use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Field, GameSnapshot, GameState, TickOutcome};
use tui_blockfall::engine::SharedGame;

fn playing() -> GameState {
    let mut state = GameState::new(10, 20, 12345);
    state.start();
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = playing();

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if state.tick(black_box(0.016)) == TickOutcome::GameOver {
                state.reset();
            }
        })
    });
}

fn bench_scan_lines(c: &mut Criterion) {
    c.bench_function("scan_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new(10, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    field.set(x, y, 3);
                }
            }
            black_box(field.scan_lines());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut state = playing();

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            state.spawn_next_piece();
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut state = playing();
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(black_box(dx)) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut state = playing();
    // Lower the piece so rotations are not blocked by the side walls.
    for _ in 0..8 {
        state.tick(0.31);
    }

    c.bench_function("rotate", |b| {
        b.iter(|| {
            state.rotate();
        })
    });
}

fn bench_shared_snapshot(c: &mut Criterion) {
    let game = SharedGame::new(playing());
    let mut snap = GameSnapshot::default();

    c.bench_function("shared_snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_scan_lines,
    bench_spawn,
    bench_move,
    bench_rotate,
    bench_shared_snapshot
);
criterion_main!(benches);
