//! Checkers Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use checkers_engine::api::new_game;
use checkers_engine::board::init_board;
use checkers_engine::constants::{COLOR_OPPONENT, COLOR_PLAYER, DEFAULT_SEARCH_DEPTH};
use checkers_engine::evaluation::evaluate_material;
use checkers_engine::move_gen::generate_moves;
use checkers_engine::search::minimax;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| b.iter(|| black_box(new_game())));
}

fn bench_move_generation_both_colors(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("generate_moves_both_colors", |b| {
        b.iter(|| {
            let player = generate_moves(&board, COLOR_PLAYER);
            let opponent = generate_moves(&board, COLOR_OPPONENT);
            black_box((player.len(), opponent.len()))
        })
    });
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("evaluate_material_starting", |b| {
        b.iter(|| black_box(evaluate_material(&board)))
    });
}

fn bench_minimax_default_depth(c: &mut Criterion) {
    let board = init_board();

    c.bench_function("minimax_starting_position", |b| {
        b.iter(|| black_box(minimax(&board, DEFAULT_SEARCH_DEPTH, true)))
    });
}

criterion_group!(
    benches,
    bench_new_game,
    bench_move_generation_both_colors,
    bench_evaluate_starting,
    bench_minimax_default_depth,
);
criterion_main!(benches);
