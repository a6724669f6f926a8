// Game session state and the input-driven main loop
// The loop owns the board; the clock thread shares only the render lock

use std::io;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::xts_board::{Board, Cursor, Direction};
use crate::xts_lang::Lang;
use crate::xts_render::Painter;
use crate::xts_surface::{Key, KeySource, RenderLock, Surface};
use crate::xts_timer::ElapsedTimer;

/// Where a session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Won,
    Lost,
    Quit,
}

impl Phase {
    pub fn is_over(self) -> bool {
        !matches!(self, Phase::Playing)
    }
}

/// One board, one cursor, one phase
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    cursor: Cursor,
    phase: Phase,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Session {
            board,
            cursor: Cursor::default(),
            phase: Phase::Playing,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply one key; `on_reveal` sees the board after every cell an open uncovers
    /// Keys after the session is over change nothing.
    pub fn apply<F>(&mut self, key: Key, on_reveal: F) -> Phase
    where
        F: FnMut(&Board),
    {
        if self.phase.is_over() {
            return self.phase;
        }
        let size = self.board.size();
        let Cursor { x, y } = self.cursor;
        match key {
            Key::Left => self.cursor.step(Direction::Left, size),
            Key::Down => self.cursor.step(Direction::Down, size),
            Key::Up => self.cursor.step(Direction::Up, size),
            Key::Right => self.cursor.step(Direction::Right, size),
            Key::Quit => self.phase = Phase::Quit,
            Key::Mark => {
                self.board.cycle_mark(x, y);
                if self.board.check_win() {
                    self.phase = Phase::Won;
                }
            }
            Key::Open => {
                if !self.board.open(x, y, on_reveal) {
                    self.phase = Phase::Lost;
                } else if self.board.check_win() {
                    self.phase = Phase::Won;
                }
            }
            Key::Other => {}
        }
        if self.phase.is_over() {
            let flags = self.board.flag_count();
            info!(phase = ?self.phase, x, y, flags, "session over");
        }
        self.phase
    }
}

/// Presentation settings for `play`
#[derive(Debug, Clone)]
pub struct View {
    pub painter: Painter,
    pub lang: Lang,
    pub tick: Duration, // Clock interval
}

/// How a finished session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub phase: Phase,
    pub elapsed_secs: u64,
}

/// Run one session to completion
///
/// Starts the clock, then alternates a full board repaint with the cursor
/// and a blocking key read until the session ends. The clock is stopped
/// before the final board and message are painted; after a win or loss one
/// more key is awaited.
pub fn play<S, K>(
    surface: Arc<RenderLock<S>>,
    keys: &mut K,
    board: Board,
    view: &View,
) -> io::Result<Outcome>
where
    S: Surface + Send + 'static,
    K: KeySource,
{
    let painter = &view.painter;
    let size = board.size();
    let mut session = Session::new(board);

    let help = [view.lang.assets.help_move, view.lang.assets.help_open];
    surface.batch(|s| painter.paint_lines(s, 0, painter.help_row(size), &help))?;

    let lang = view.lang.clone();
    let mut clock = ElapsedTimer::start(
        Arc::clone(&surface),
        painter.clone(),
        view.tick,
        move |secs| lang.time_status(secs),
    );

    while !session.phase().is_over() {
        let cursor = session.cursor();
        surface.batch(|s| painter.paint_board(s, session.board(), Some(cursor)))?;
        let key = keys.poll_key()?;
        debug!(?key, "key");

        // The hook cannot return errors, so keep the first one for after the open
        let mut repaint_err: Option<io::Error> = None;
        session.apply(key, |board| {
            if repaint_err.is_none() {
                repaint_err = surface.batch(|s| painter.paint_board(s, board, None)).err();
            }
        });
        if let Some(err) = repaint_err {
            return Err(err);
        }
    }

    let elapsed_secs = clock.stop();
    let phase = session.phase();
    let message = match phase {
        Phase::Won => Some(view.lang.assets.win_message),
        Phase::Lost => Some(view.lang.assets.loss_message),
        Phase::Playing | Phase::Quit => None,
    };
    if let Some(message) = message {
        surface.batch(|s| {
            painter.paint_board(s, session.board(), None);
            painter.paint_lines(s, 0, painter.message_row(size), &[message]);
        })?;
        keys.poll_key()?;
    }
    info!(?phase, elapsed_secs, "session finished");
    Ok(Outcome { phase, elapsed_secs })
}
