// Color depth detection and palette matching
// Named ANSI colors are pinned to the Windows Terminal "Campbell" values when the terminal allows it

use ratatui::style::Color;
use term_color_support::ColorSupport;

/// How many colors the attached terminal can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    Basic,     // 16 ANSI colors
    Indexed,   // 256-color palette
    TrueColor, // 24-bit RGB
}

impl ColorDepth {
    /// Probe stdout once; callers keep the result for the whole session
    pub fn detect() -> Self {
        let support = ColorSupport::stdout();
        if support.has_16m {
            ColorDepth::TrueColor
        } else if support.has_256 {
            ColorDepth::Indexed
        } else {
            ColorDepth::Basic
        }
    }
}

/// Campbell reference: ((R, G, B), closest 256-color index)
fn campbell(color: Color) -> Option<((u8, u8, u8), u8)> {
    match color {
        Color::Black => Some(((12, 12, 12), 232)),
        Color::Red => Some(((197, 15, 31), 160)),
        Color::Green => Some(((19, 161, 14), 28)),
        Color::Yellow => Some(((193, 156, 0), 178)),
        Color::Blue => Some(((0, 55, 218), 20)),
        Color::Magenta => Some(((136, 23, 152), 90)),
        Color::Cyan => Some(((58, 150, 221), 38)),
        Color::Gray => Some(((204, 204, 204), 250)),
        Color::DarkGray => Some(((118, 118, 118), 243)),
        Color::LightRed => Some(((231, 72, 86), 203)),
        Color::LightGreen => Some(((22, 198, 12), 46)),
        Color::LightYellow => Some(((249, 241, 165), 229)),
        Color::LightBlue => Some(((59, 120, 255), 63)),
        Color::LightMagenta => Some(((180, 0, 158), 163)),
        Color::LightCyan => Some(((97, 214, 214), 116)),
        Color::White => Some(((242, 242, 242), 255)),
        _ => None,
    }
}

/// Extends Ratatui's Color with depth-aware matching
pub trait WTMatch {
    fn wtmatch(self, depth: ColorDepth) -> Color;
}

impl WTMatch for Color {
    fn wtmatch(self, depth: ColorDepth) -> Color {
        match (campbell(self), depth) {
            (Some(((r, g, b), _)), ColorDepth::TrueColor) => Color::Rgb(r, g, b),
            (Some((_, index)), ColorDepth::Indexed) => Color::Indexed(index),
            // Basic terminals, Reset, RGB and indexed colors pass through
            _ => self,
        }
    }
}
