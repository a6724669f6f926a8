// Entry point for the terminal Minesweeper
// Parses flags, sets up logging and the terminal, then plays one session

use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use xtsweep::xts_cli::{Args, init_logging};
use xtsweep::xts_color::ColorDepth;
use xtsweep::xts_render::{ASCII_GLYPHS, CellColors, FULL_WIDTH_GLYPHS, Painter};
use xtsweep::xts_term::{CrosstermSurface, EventKeys, TermGuard};
use xtsweep::{Board, RenderLock, View, play};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref(), args.log_level)?;
    let cfg = args.into_config();

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let board = Board::create(cfg.size, cfg.level, &mut rng);
    info!(
        size = cfg.size,
        level = cfg.level,
        nominal = Board::nominal_mines(cfg.size, cfg.level),
        mines = board.mine_total(),
        seed = cfg.seed,
        "new game"
    );

    let glyphs = if cfg.ascii_icons { ASCII_GLYPHS } else { FULL_WIDTH_GLYPHS };
    let view = View {
        painter: Painter::new(glyphs, CellColors::for_depth(ColorDepth::detect())),
        lang: cfg.lang,
        tick: Duration::from_secs(1),
    };

    // Terminal is restored when the guard drops, error paths included
    let _term = TermGuard::enter()?;
    let surface = Arc::new(RenderLock::new(CrosstermSurface::new()?));
    let outcome = play(surface, &mut EventKeys::terminal(), board, &view)?;
    info!(phase = ?outcome.phase, secs = outcome.elapsed_secs, "exit");
    Ok(())
}
