// Terminal Minesweeper with a live clock
// Board logic is terminal-agnostic; xts_term adapts it to a real terminal

pub mod xts_board;    // Board model, mine placement, cursor
pub mod xts_cli;      // Command-line flags and logging setup
pub mod xts_color;    // Terminal color depth matching
pub mod xts_error;    // Error types
pub mod xts_game;     // Session state machine and main loop
pub mod xts_lang;     // Localized strings
pub mod xts_mark;     // Mark cycling and win check
pub mod xts_render;   // Glyphs and painting
pub mod xts_reveal;   // Open and cascade
pub mod xts_surface;  // Surface contract and render lock
pub mod xts_term;     // Crossterm backend
pub mod xts_timer;    // Elapsed-time clock

pub use xts_board::{Board, Cursor, Direction, FieldCell};
pub use xts_error::{Result, SweepError};
pub use xts_game::{Outcome, Phase, Session, View, play};
pub use xts_surface::{GridSurface, Key, KeySource, RenderLock, Surface};
