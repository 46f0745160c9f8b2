use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use tty_chess::game_state::board::Board;
use tty_chess::game_state::chess_types::Team;
use tty_chess::game_state::rule_set::RuleSet;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    rules: RuleSet,
    expected_white_moves: usize,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "classic",
        rules: RuleSet::classic(),
        expected_white_moves: 20,
    },
    BenchCase {
        name: "strict",
        rules: RuleSet::strict(),
        expected_white_moves: 20,
    },
];

fn count_moves(board: &Board, team: Team) -> usize {
    board
        .pieces()
        .filter(|p| p.team() == team)
        .map(|p| p.possible_moves(board).len())
        .sum()
}

fn bench_move_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_generation");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let board = Board::new_game(case.rules);

        // Correctness guard before benchmarking.
        assert_eq!(
            count_moves(&board, Team::White),
            case.expected_white_moves,
            "move count mismatch for {}",
            case.name
        );

        group.bench_with_input(
            BenchmarkId::new("count_moves", case.name),
            &board,
            |b, board| b.iter(|| count_moves(black_box(board), black_box(Team::White))),
        );
        group.bench_with_input(
            BenchmarkId::new("can_make_move", case.name),
            &board,
            |b, board| b.iter(|| board.can_make_move(black_box(Team::Black))),
        );
        group.bench_with_input(
            BenchmarkId::new("is_in_check", case.name),
            &board,
            |b, board| b.iter(|| board.is_in_check(black_box(Team::White))),
        );
    }

    group.finish();
}

criterion_group!(move_generation_benches, bench_move_generation);
criterion_main!(move_generation_benches);
