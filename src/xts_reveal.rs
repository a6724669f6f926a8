// Reveal engine: opening cells and the zero-count cascade
// The board itself is the visited set, so no cell is ever revealed twice

use tracing::debug;

use crate::xts_board::{Board, FieldCell};

impl Board {
    /// Open the cell at (x, y)
    ///
    /// Returns `false` when the cell holds a mine (it becomes `Exploded`),
    /// `true` otherwise. Opening an already revealed cell does nothing.
    /// A closed cell, flagged or questioned ones included, is revealed with
    /// its neighbor mine count; a count of zero opens every neighbor too,
    /// spreading until non-zero counts wall the region off.
    ///
    /// `on_reveal` runs after each newly revealed cell so a caller can repaint
    /// the cascade as it grows.
    pub fn open<F>(&mut self, x: usize, y: usize, mut on_reveal: F) -> bool
    where
        F: FnMut(&Board),
    {
        match self.cell(x, y) {
            FieldCell::Revealed(_) => return true,
            FieldCell::Exploded => return false,
            _ => {}
        }
        if self.is_mine(x, y) {
            let idx = self.index(x, y);
            self.field[idx] = FieldCell::Exploded;
            return false;
        }

        let mut revealed = 0usize;
        let mut pending = vec![(x, y)];
        while let Some((cx, cy)) = pending.pop() {
            let idx = self.index(cx, cy);
            if !self.field[idx].is_closed() {
                continue;
            }
            // Only zero cells push neighbors, and a zero cell has no mined neighbor
            let count = self.mine_count_around(cx, cy);
            self.field[idx] = FieldCell::Revealed(count);
            revealed += 1;
            on_reveal(self);
            if count == 0 {
                let before = pending.len();
                pending.extend(
                    self.neighbors(cx, cy)
                        .filter(|&(nx, ny)| self.cell(nx, ny).is_closed()),
                );
                // Visit neighbors in row order, as a recursive walk would
                pending[before..].reverse();
            }
        }
        if revealed > 1 {
            debug!(x, y, revealed, "cascade opened");
        }
        true
    }
}
