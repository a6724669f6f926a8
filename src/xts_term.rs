// Crossterm-backed terminal: raw mode guard, diffing surface, key reader
// The rest of the crate only sees the Surface and KeySource traits

use std::io::{self, Stdout, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, execute};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::buffer::Buffer;
use ratatui::style::Color;
use tracing::warn;

use crate::xts_surface::{Key, KeySource, Surface};

/// Raw mode plus alternate screen for as long as the guard lives
pub struct TermGuard {
    _private: (),
}

impl TermGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::Hide
        ) {
            // Part of the sequence may already be on the terminal
            let _ = leave_screen(&mut stdout);
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(TermGuard { _private: () })
    }
}

impl Drop for TermGuard {
    fn drop(&mut self) {
        if let Err(err) = leave_screen(&mut io::stdout()) {
            warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
    }
}

// Show the cursor and return to the main screen; raw mode is left to the caller
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, cursor::Show, terminal::LeaveAlternateScreen)
}

/// Surface that collects writes in a back buffer and sends only the
/// changed cells on flush
pub struct CrosstermSurface {
    backend: CrosstermBackend<Stdout>,
    current: Buffer,
    previous: Buffer,
}

impl CrosstermSurface {
    pub fn new() -> io::Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let area = backend.size()?;
        Ok(CrosstermSurface {
            backend,
            current: Buffer::empty(area),
            previous: Buffer::empty(area),
        })
    }
}

impl Surface for CrosstermSurface {
    fn set_cell(&mut self, col: u16, row: u16, glyph: &str, fg: Color, bg: Color) {
        let area = self.current.area;
        if col >= area.right() || row >= area.bottom() {
            return;
        }
        self.current.get_mut(col, row).set_symbol(glyph).set_fg(fg).set_bg(bg);
    }

    fn flush(&mut self) -> io::Result<()> {
        let updates = self.previous.diff(&self.current);
        self.backend.draw(updates.into_iter())?;
        Backend::flush(&mut self.backend)?;
        self.previous = self.current.clone();
        Ok(())
    }
}

/// Map a terminal event to a game key
/// h/j/k/l and the arrows move, Tab or f marks, Space opens, Esc or Ctrl-C quits.
/// Only key presses count: releases, repeats, focus, mouse and resize events give `None`.
pub fn key_from_event(ev: &Event) -> Option<Key> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        ..
    }) = ev
    else {
        return None;
    };
    let key = match code {
        KeyCode::Esc => Key::Quit,
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Key::Quit,
        KeyCode::Char('h') | KeyCode::Left => Key::Left,
        KeyCode::Char('j') | KeyCode::Down => Key::Down,
        KeyCode::Char('k') | KeyCode::Up => Key::Up,
        KeyCode::Char('l') | KeyCode::Right => Key::Right,
        KeyCode::Tab | KeyCode::Char('f') | KeyCode::Char('F') => Key::Mark,
        KeyCode::Char(' ') => Key::Open,
        _ => Key::Other,
    };
    Some(key)
}

/// Key source over a blocking event reader
/// Each `poll_key` reads until a key press arrives and drops everything else.
pub struct EventKeys<R> {
    read_event: R,
}

impl<R> EventKeys<R>
where
    R: FnMut() -> io::Result<Event>,
{
    pub fn new(read_event: R) -> Self {
        EventKeys { read_event }
    }
}

impl EventKeys<fn() -> io::Result<Event>> {
    /// Keys from the real terminal
    pub fn terminal() -> Self {
        EventKeys {
            read_event: event::read,
        }
    }
}

impl<R> KeySource for EventKeys<R>
where
    R: FnMut() -> io::Result<Event>,
{
    fn poll_key(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = key_from_event(&(self.read_event)()?) {
                return Ok(key);
            }
        }
    }
}
