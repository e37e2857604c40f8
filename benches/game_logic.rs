use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_arcade::core::{Board, FlappyGame, MergeGame, MinesGame};
use tui_arcade::term::{fit_into, FrameBuffer, MergeView, MinesView, PixelBuffer, View};
use tui_arcade::types::{Direction, PieceKind};

fn bench_merge_move(c: &mut Criterion) {
    let start = MergeGame::with_tiles(
        [[2, 2, 4, 8], [0, 4, 4, 0], [2, 0, 2, 16], [32, 32, 0, 2]],
        12345,
    );

    c.bench_function("merge_apply_left", |b| {
        b.iter(|| {
            let mut game = start.clone();
            black_box(game.apply_direction(black_box(Direction::Left)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_flood_reveal(c: &mut Criterion) {
    // One mine in the corner: the flood opens almost the whole field.
    let start = MinesGame::with_mines(&[(15, 15)]);

    c.bench_function("mines_flood_reveal", |b| {
        b.iter(|| {
            let mut game = start.clone();
            black_box(game.flood_reveal(black_box(0), black_box(0)));
        })
    });
}

fn bench_flappy_tick(c: &mut Criterion) {
    let mut game = FlappyGame::new(320, 240, 12345);

    c.bench_function("flappy_tick", |b| {
        b.iter(|| {
            if game.bird_y() > game.geometry().ground_y() / 2 {
                game.jump();
            }
            if game.tick().died {
                game.restart();
            }
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let merge = MergeGame::new(12345);
    let mines = MinesGame::new(12345);
    let mut fb = PixelBuffer::new(1, 1);
    let mut cells = FrameBuffer::new(80, 24);

    c.bench_function("render_merge_frame", |b| {
        b.iter(|| {
            MergeView.render_into(black_box(&merge), &mut fb);
        })
    });

    c.bench_function("render_and_fit_mines_frame", |b| {
        b.iter(|| {
            MinesView.render_into(black_box(&mines), &mut fb);
            fit_into(&fb, 80, 24, &mut cells);
        })
    });
}

criterion_group!(
    benches,
    bench_merge_move,
    bench_line_clear,
    bench_flood_reveal,
    bench_flappy_tick,
    bench_render
);
criterion_main!(benches);
