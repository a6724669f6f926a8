// Property tests for board invariants under arbitrary open/mark sequences

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use xtsweep::{Board, FieldCell};

#[derive(Debug, Clone, Copy)]
enum Op {
    Open(usize, usize),
    Mark(usize, usize),
}

fn op_strategy(size: usize) -> impl Strategy<Value = Op> {
    (any::<bool>(), 0..size, 0..size).prop_map(|(open, x, y)| {
        if open { Op::Open(x, y) } else { Op::Mark(x, y) }
    })
}

// Board plus a sequence of moves on it
fn game_strategy() -> impl Strategy<Value = (usize, i64, u64, Vec<Op>)> {
    (1usize..10, 0i64..5, any::<u64>()).prop_flat_map(|(size, level, seed)| {
        (
            Just(size),
            Just(level),
            Just(seed),
            prop::collection::vec(op_strategy(size), 0..40),
        )
    })
}

fn mine_mask(board: &Board) -> Vec<bool> {
    board.cells().map(|((x, y), _)| board.is_mine(x, y)).collect()
}

fn apply(board: &mut Board, op: Op) {
    match op {
        Op::Open(x, y) => {
            board.open(x, y, |_| {});
        }
        Op::Mark(x, y) => board.cycle_mark(x, y),
    }
}

proptest! {
    #[test]
    fn mines_never_move((size, level, seed, ops) in game_strategy()) {
        let mut board = Board::create(size, level, &mut StdRng::seed_from_u64(seed));
        let before = mine_mask(&board);
        for op in ops {
            apply(&mut board, op);
            prop_assert_eq!(mine_mask(&board), before.clone());
        }
    }

    #[test]
    fn revealed_counts_are_exact((size, level, seed, ops) in game_strategy()) {
        let mut board = Board::create(size, level, &mut StdRng::seed_from_u64(seed));
        for op in ops {
            apply(&mut board, op);
        }
        for ((x, y), cell) in board.cells() {
            match cell {
                FieldCell::Revealed(n) => {
                    prop_assert!(!board.is_mine(x, y));
                    prop_assert_eq!(n, board.mine_count_around(x, y));
                }
                FieldCell::Exploded => prop_assert!(board.is_mine(x, y)),
                _ => {}
            }
        }
    }

    #[test]
    fn zero_regions_are_closed((size, level, seed, ops) in game_strategy()) {
        let mut board = Board::create(size, level, &mut StdRng::seed_from_u64(seed));
        for op in ops {
            apply(&mut board, op);
        }
        for ((x, y), cell) in board.cells() {
            if cell == FieldCell::Revealed(0) {
                for (nx, ny) in board.neighbors(x, y) {
                    prop_assert!(matches!(board.cell(nx, ny), FieldCell::Revealed(_)));
                }
            }
        }
    }

    #[test]
    fn win_matches_its_definition((size, level, seed, ops) in game_strategy()) {
        let mut board = Board::create(size, level, &mut StdRng::seed_from_u64(seed));
        for op in ops {
            apply(&mut board, op);
            let expected = board.cells().all(|((x, y), cell)| match cell {
                FieldCell::Hidden | FieldCell::Questioned | FieldCell::Exploded => false,
                FieldCell::Flagged => board.is_mine(x, y),
                FieldCell::Revealed(_) => true,
            });
            prop_assert_eq!(board.check_win(), expected);
        }
    }

    #[test]
    fn three_marks_restore_a_hidden_cell(size in 1usize..8, x in 0usize..8, y in 0usize..8) {
        let (x, y) = (x % size, y % size);
        let mut board = Board::from_mine_coords(size, &[(x, y)]);
        for _ in 0..3 {
            board.cycle_mark(x, y);
        }
        prop_assert_eq!(board.cell(x, y), FieldCell::Hidden);
    }

    #[test]
    fn mine_free_board_opens_in_one_move(size in 1usize..40, x in 0usize..40, y in 0usize..40) {
        let mut board = Board::from_mine_coords(size, &[]);
        let opened = board.open(x % size, y % size, |_| {});
        prop_assert!(opened);
        prop_assert!(board.cells().all(|(_, c)| c == FieldCell::Revealed(0)));
        prop_assert!(board.check_win());
    }

    #[test]
    fn realized_mines_bounded_by_nominal(size in 1usize..20, level in -2i64..25, seed in any::<u64>()) {
        let board = Board::create(size, level, &mut StdRng::seed_from_u64(seed));
        prop_assert!(board.mine_total() <= Board::nominal_mines(size, level));
        prop_assert!(board.mine_total() <= size * size);
    }
}
