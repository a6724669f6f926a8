// Render surface contract shared by the game loop and the clock
// Every paint goes through RenderLock so two painters never interleave

use std::io;
use std::sync::{Mutex, PoisonError};

use ratatui::style::Color;

/// Character-grid draw target
pub trait Surface {
    /// Put `glyph` at (col, row); writes outside the surface are dropped
    fn set_cell(&mut self, col: u16, row: u16, glyph: &str, fg: Color, bg: Color);

    /// Push pending cell writes to the screen
    fn flush(&mut self) -> io::Result<()>;
}

/// Logical keys the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Down,
    Up,
    Right,
    Quit,
    Mark,
    Open,
    Other,
}

/// Blocking source of key presses
pub trait KeySource {
    fn poll_key(&mut self) -> io::Result<Key>;
}

/// Lock-guarded surface handing out scoped draw batches
pub struct RenderLock<S> {
    surface: Mutex<S>,
}

impl<S: Surface> RenderLock<S> {
    pub fn new(surface: S) -> Self {
        RenderLock {
            surface: Mutex::new(surface),
        }
    }

    /// Run `paint` and flush while holding the lock
    pub fn batch<F>(&self, paint: F) -> io::Result<()>
    where
        F: FnOnce(&mut S),
    {
        // A painter that panicked only left a half-written frame; the next batch repaints it
        let mut surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        paint(&mut *surface);
        surface.flush()
    }

    /// Read the surface under the lock without flushing
    pub fn inspect<T, F>(&self, read: F) -> T
    where
        F: FnOnce(&S) -> T,
    {
        let surface = self.surface.lock().unwrap_or_else(PoisonError::into_inner);
        read(&*surface)
    }

    pub fn into_inner(self) -> S {
        self.surface.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One cell of a `GridSurface`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell {
    pub glyph: String,
    pub fg: Color,
    pub bg: Color,
}

impl Default for GridCell {
    fn default() -> Self {
        GridCell {
            glyph: " ".to_string(),
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Off-screen surface backed by a plain grid
/// Useful for headless runs and for checking what a painter produced.
#[derive(Debug, Clone)]
pub struct GridSurface {
    width: u16,
    height: u16,
    cells: Vec<GridCell>,
    pending: usize, // Writes since the last flush
    flushes: usize,
}

impl GridSurface {
    pub fn new(width: u16, height: u16) -> Self {
        GridSurface {
            width,
            height,
            cells: vec![GridCell::default(); width as usize * height as usize],
            pending: 0,
            flushes: 0,
        }
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<&GridCell> {
        if col < self.width && row < self.height {
            self.cells.get(row as usize * self.width as usize + col as usize)
        } else {
            None
        }
    }

    pub fn glyph(&self, col: u16, row: u16) -> &str {
        self.cell(col, row).map_or("", |c| c.glyph.as_str())
    }

    /// Concatenated glyphs of `row` with trailing blanks trimmed
    pub fn row_text(&self, row: u16) -> String {
        let text: String = (0..self.width).map(|col| self.glyph(col, row)).collect();
        text.trim_end().to_string()
    }

    pub fn flush_count(&self) -> usize {
        self.flushes
    }

    pub fn pending_writes(&self) -> usize {
        self.pending
    }
}

impl Surface for GridSurface {
    fn set_cell(&mut self, col: u16, row: u16, glyph: &str, fg: Color, bg: Color) {
        if col >= self.width || row >= self.height {
            return;
        }
        let idx = row as usize * self.width as usize + col as usize;
        self.cells[idx] = GridCell {
            glyph: glyph.to_string(),
            fg,
            bg,
        };
        self.pending += 1;
    }

    fn flush(&mut self) -> io::Result<()> {
        self.pending = 0;
        self.flushes += 1;
        Ok(())
    }
}
