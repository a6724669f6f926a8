// Cell annotations and the win check
// Only closed cells take marks; revealed and exploded cells are left alone

use crate::xts_board::{Board, FieldCell};

impl Board {
    /// Advance the annotation of a closed cell: hidden → flagged → questioned → hidden
    pub fn cycle_mark(&mut self, x: usize, y: usize) {
        let idx = self.index(x, y);
        self.field[idx] = match self.field[idx] {
            FieldCell::Hidden => FieldCell::Flagged,
            FieldCell::Flagged => FieldCell::Questioned,
            FieldCell::Questioned => FieldCell::Hidden,
            other => other,
        };
    }

    /// The board is won once no cell is hidden or questioned, every flag
    /// sits on a mine, and nothing has exploded
    pub fn check_win(&self) -> bool {
        self.cells().all(|((x, y), cell)| match cell {
            FieldCell::Revealed(_) => true,
            FieldCell::Flagged => self.is_mine(x, y),
            FieldCell::Hidden | FieldCell::Questioned | FieldCell::Exploded => false,
        })
    }

    /// Number of flagged cells
    pub fn flag_count(&self) -> usize {
        self.cells().filter(|(_, c)| *c == FieldCell::Flagged).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_cycle_with_period_three() {
        let mut board = Board::from_mine_coords(2, &[]);
        board.cycle_mark(1, 0);
        assert_eq!(board.cell(1, 0), FieldCell::Flagged);
        board.cycle_mark(1, 0);
        assert_eq!(board.cell(1, 0), FieldCell::Questioned);
        board.cycle_mark(1, 0);
        assert_eq!(board.cell(1, 0), FieldCell::Hidden);
    }

    #[test]
    fn marking_open_cells_is_a_no_op() {
        let mut board = Board::from_mine_coords(2, &[(1, 1)]);
        assert!(board.open(0, 0, |_| {}));
        board.cycle_mark(0, 0);
        assert_eq!(board.cell(0, 0), FieldCell::Revealed(1));

        assert!(!board.open(1, 1, |_| {}));
        board.cycle_mark(1, 1);
        assert_eq!(board.cell(1, 1), FieldCell::Exploded);
    }

    #[test]
    fn win_requires_flags_on_every_remaining_mine() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]);
        for (x, y) in [(1, 0), (0, 1), (1, 1)] {
            assert!(board.open(x, y, |_| {}));
        }
        assert!(!board.check_win());
        board.cycle_mark(0, 0);
        assert!(board.check_win());
        assert_eq!(board.flag_count(), 1);
        board.cycle_mark(0, 0);
        assert!(!board.check_win()); // questioned
    }

    #[test]
    fn misplaced_flag_blocks_win() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]);
        board.cycle_mark(0, 0);
        board.cycle_mark(1, 1);
        assert!(board.open(1, 0, |_| {}));
        assert!(board.open(0, 1, |_| {}));
        assert!(!board.check_win());
    }

    #[test]
    fn exploded_board_is_never_won() {
        let mut board = Board::from_mine_coords(1, &[(0, 0)]);
        assert!(!board.open(0, 0, |_| {}));
        assert!(!board.check_win());
    }

    #[test]
    fn all_flags_on_a_full_minefield_wins() {
        let mut board = Board::from_mine_coords(1, &[(0, 0)]);
        board.cycle_mark(0, 0);
        assert!(board.check_win());
    }
}
