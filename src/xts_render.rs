// Board and text painting onto a Surface
// Each board cell is two columns wide so full-width and ASCII glyphs share one layout

use ratatui::style::Color;
use unicode_width::UnicodeWidthStr;

use crate::xts_board::{Board, Cursor, FieldCell};
use crate::xts_color::{ColorDepth, WTMatch};
use crate::xts_surface::Surface;

/// Symbols for every cell state plus the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphSet {
    pub counts: [&'static str; 9], // Revealed 0..=8
    pub hidden: &'static str,
    pub flagged: &'static str,
    pub questioned: &'static str,
    pub exploded: &'static str,
    pub border: &'static str,
}

pub const FULL_WIDTH_GLYPHS: GlyphSet = GlyphSet {
    counts: ["　", "１", "２", "３", "４", "５", "６", "７", "８"],
    hidden: "・",
    flagged: "＊",
    questioned: "？",
    exploded: "💣",
    border: "＃",
};

pub const ASCII_GLYPHS: GlyphSet = GlyphSet {
    counts: [" ", "1", "2", "3", "4", "5", "6", "7", "8"],
    hidden: ".",
    flagged: "F",
    questioned: "?",
    exploded: "*",
    border: "#",
};

/// Foreground/background choices, already matched to the terminal depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellColors {
    pub count: Color,
    pub flagged: Color,
    pub questioned: Color,
    pub exploded: Color,
    pub cursor_fg: Color,
    pub cursor_bg: Color,
}

impl CellColors {
    pub fn for_depth(depth: ColorDepth) -> Self {
        CellColors {
            count: Color::Blue.wtmatch(depth),
            flagged: Color::Red.wtmatch(depth),
            questioned: Color::Red.wtmatch(depth),
            exploded: Color::LightRed.wtmatch(depth),
            cursor_fg: Color::White.wtmatch(depth),
            cursor_bg: Color::Magenta.wtmatch(depth),
        }
    }
}

// Clamp a layout position into terminal coordinates
fn term_pos(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Screen layout for one board size
/// Row 0 holds the clock, the framed board starts on row 1.
#[derive(Debug, Clone)]
pub struct Painter {
    glyphs: GlyphSet,
    colors: CellColors,
}

impl Painter {
    pub fn new(glyphs: GlyphSet, colors: CellColors) -> Self {
        Painter { glyphs, colors }
    }

    /// Where the elapsed-time line goes
    pub fn clock_origin(&self) -> (u16, u16) {
        (0, 0)
    }

    /// First of the two key-help rows
    pub fn help_row(&self, size: usize) -> u16 {
        term_pos(size + 3)
    }

    pub fn message_row(&self, size: usize) -> u16 {
        term_pos(size + 5)
    }

    /// Terminal position of board cell (x, y)
    pub fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        (term_pos(x * 2 + 2), term_pos(y + 2))
    }

    fn glyph_for(&self, cell: FieldCell) -> (&'static str, Color) {
        match cell {
            FieldCell::Revealed(n) => {
                let fg = if n == 0 { Color::Reset } else { self.colors.count };
                (self.glyphs.counts[usize::from(n.min(8))], fg)
            }
            FieldCell::Hidden => (self.glyphs.hidden, Color::Reset),
            FieldCell::Flagged => (self.glyphs.flagged, self.colors.flagged),
            FieldCell::Questioned => (self.glyphs.questioned, self.colors.questioned),
            FieldCell::Exploded => (self.glyphs.exploded, self.colors.exploded),
        }
    }

    // Two-column slot: a narrow glyph gets a blank right half in the same colors
    fn put_slot<S: Surface>(
        &self,
        s: &mut S,
        col: u16,
        row: u16,
        glyph: &str,
        fg: Color,
        bg: Color,
    ) {
        s.set_cell(col, row, glyph, fg, bg);
        if glyph.width() < 2 {
            s.set_cell(col.saturating_add(1), row, " ", fg, bg);
        }
    }

    /// Paint the frame and every cell; `cursor` gets the highlight colors
    pub fn paint_board<S: Surface>(&self, s: &mut S, board: &Board, cursor: Option<Cursor>) {
        let size = board.size();
        let border = self.glyphs.border;
        let bottom = term_pos(size + 2);
        for x in 0..size + 2 {
            let col = term_pos(x * 2);
            self.put_slot(s, col, 1, border, Color::Reset, Color::Reset);
            self.put_slot(s, col, bottom, border, Color::Reset, Color::Reset);
        }
        let right = term_pos(size * 2 + 2);
        for y in 0..size {
            let row = term_pos(y + 2);
            self.put_slot(s, 0, row, border, Color::Reset, Color::Reset);
            self.put_slot(s, right, row, border, Color::Reset, Color::Reset);
        }

        for ((x, y), cell) in board.cells() {
            let (glyph, mut fg) = self.glyph_for(cell);
            let mut bg = Color::Reset;
            if cursor == Some(Cursor { x, y }) {
                fg = self.colors.cursor_fg;
                bg = self.colors.cursor_bg;
            }
            let (col, row) = self.cell_origin(x, y);
            self.put_slot(s, col, row, glyph, fg, bg);
        }
    }

    /// Paint text lines starting at (col, row), advancing by display width
    pub fn paint_lines<S: Surface>(&self, s: &mut S, col: u16, row: u16, lines: &[&str]) {
        for (i, line) in lines.iter().enumerate() {
            let row = row.saturating_add(term_pos(i));
            let mut at = col;
            let mut buf = [0u8; 4];
            for ch in line.chars() {
                let glyph: &str = ch.encode_utf8(&mut buf);
                let w = glyph.width();
                if w == 0 {
                    continue;
                }
                s.set_cell(at, row, glyph, Color::Reset, Color::Reset);
                at = at.saturating_add(term_pos(w));
            }
        }
    }
}
