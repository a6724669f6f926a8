// Board model: the player-visible field and the hidden mine layout
// Mines are placed once at creation; the field only changes through open/mark

use rand::Rng;
use tracing::debug;

/// Player-visible state of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCell {
    Revealed(u8), // Open, showing the adjacent mine count (0-8)
    Hidden,
    Flagged,
    Questioned,
    Exploded, // The mine the player opened
}

impl FieldCell {
    /// Hidden, flagged and questioned cells are "closed"
    pub fn is_closed(self) -> bool {
        matches!(self, FieldCell::Hidden | FieldCell::Flagged | FieldCell::Questioned)
    }
}

// Offsets of the eight neighbors, row by row
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Square minesweeper board of side `size`
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    pub(crate) field: Vec<FieldCell>, // Row-major player-visible state
    mines: Vec<bool>,                 // Row-major mine layout, fixed after creation
    mine_total: usize,                // Distinct mined cells actually placed
}

impl Board {
    /// Create a board with all cells hidden and mines sampled at random
    ///
    /// `floor(size² × level / 20)` coordinates are drawn independently and
    /// with replacement, so two draws may land on the same cell and the
    /// realized mine count can come out below that target. A non-positive
    /// level places no mines.
    pub fn create<R: Rng + ?Sized>(size: usize, level: i64, rng: &mut R) -> Self {
        let mut board = Board::empty(size);
        let target = Board::nominal_mines(size, level);
        for _ in 0..target {
            let x = rng.gen_range(0..size);
            let y = rng.gen_range(0..size);
            let idx = board.index(x, y);
            board.mines[idx] = true;
        }
        board.mine_total = board.mines.iter().filter(|m| **m).count();
        debug!(size, level, target, placed = board.mine_total, "mines placed");
        board
    }

    /// Build a board with mines at exactly the given `(x, y)` coordinates
    /// Coordinates outside the board are ignored.
    pub fn from_mine_coords(size: usize, coords: &[(usize, usize)]) -> Self {
        let mut board = Board::empty(size);
        for &(x, y) in coords {
            if board.contains(x, y) {
                let idx = board.index(x, y);
                board.mines[idx] = true;
            }
        }
        board.mine_total = board.mines.iter().filter(|m| **m).count();
        board
    }

    fn empty(size: usize) -> Self {
        Board {
            size,
            field: vec![FieldCell::Hidden; size * size],
            mines: vec![false; size * size],
            mine_total: 0,
        }
    }

    /// Number of coordinate samples drawn for a board: `floor(size² × level / 20)`
    pub fn nominal_mines(size: usize, level: i64) -> usize {
        let cells = (size as i128) * (size as i128);
        let target = cells * i128::from(level) / 20;
        usize::try_from(target.max(0)).unwrap_or(usize::MAX)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn mine_total(&self) -> usize {
        self.mine_total
    }

    /// Convert (x, y) coordinates to flat array index
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    pub fn cell(&self, x: usize, y: usize) -> FieldCell {
        self.field[self.index(x, y)]
    }

    pub fn is_mine(&self, x: usize, y: usize) -> bool {
        self.mines[self.index(x, y)]
    }

    /// Iterate the up-to-8 in-bounds neighbors of (x, y)
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> + use<> {
        let size = self.size;
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < size && ny < size).then_some((nx, ny))
        })
    }

    /// Count mines among the neighbors of (x, y), clipped at the edges
    pub fn mine_count_around(&self, x: usize, y: usize) -> u8 {
        self.neighbors(x, y).filter(|&(nx, ny)| self.is_mine(nx, ny)).count() as u8
    }

    /// Row-major iterator over every cell with its coordinates
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), FieldCell)> + '_ {
        self.field
            .iter()
            .enumerate()
            .map(|(i, c)| ((i % self.size, i / self.size), *c))
    }
}

/// Movement direction for the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Down,
    Up,
    Right,
}

/// Cursor position, always inside the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub x: usize,
    pub y: usize,
}

impl Cursor {
    /// Step one cell in `dir`; stepping off the board is a no-op
    pub fn step(&mut self, dir: Direction, size: usize) {
        let last = size.saturating_sub(1);
        match dir {
            Direction::Left => self.x = self.x.saturating_sub(1),
            Direction::Up => self.y = self.y.saturating_sub(1),
            Direction::Right => self.x = (self.x + 1).min(last),
            Direction::Down => self.y = (self.y + 1).min(last),
        }
    }
}
