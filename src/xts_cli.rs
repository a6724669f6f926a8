// Command-line flags and logging setup
// There is no config file: everything a session needs comes from these flags

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use tracing::Level;

use crate::xts_error::{Result, SweepError};
use crate::xts_lang::Lang;

#[derive(Parser, Debug)]
#[command(name = "xtsweep", version, about = "A keyboard-driven terminal Minesweeper")]
pub struct Args {
    /// Board size (cells per side)
    #[arg(short = 's', long, default_value_t = 10, value_parser = parse_size)]
    pub size: usize,

    /// Game level, usually 1-3; scales mine density as size² × level / 20
    #[arg(short = 'l', long, default_value_t = 2, allow_negative_numbers = true)]
    pub level: i64,

    /// Use ASCII glyphs instead of full-width ones
    #[arg(long)]
    pub ascii: bool,

    /// UI language (en, zh); defaults to the system locale
    #[arg(long)]
    pub lang: Option<String>,

    /// Seed for mine placement; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (the screen belongs to the game)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level: error, warn, info, debug or trace
    #[arg(long, default_value_t = Level::INFO)]
    pub log_level: Level,
}

/// Settings for one run, resolved from the flags
#[derive(Debug, Clone)]
pub struct Config {
    pub size: usize,
    pub level: i64,
    pub ascii_icons: bool, // ASCII fallback glyphs
    pub lang: Lang,
    pub seed: u64,
}

// Any positive side whose cell count fits in a usize
fn parse_size(arg: &str) -> std::result::Result<usize, String> {
    let size: usize = arg.parse().map_err(|err| format!("{err}"))?;
    if size == 0 {
        return Err("board size must be at least 1".to_string());
    }
    match size.checked_mul(size) {
        Some(_) => Ok(size),
        None => Err(format!("a {size}×{size} board has too many cells")),
    }
}

impl Args {
    /// Resolve defaults that depend on the environment (locale, random seed)
    pub fn into_config(self) -> Config {
        let lang = match self.lang.as_deref() {
            Some(code) => Lang::new(code),
            None => Lang::from_system(),
        };
        Config {
            size: self.size,
            level: self.level,
            ascii_icons: self.ascii,
            lang,
            seed: self.seed.unwrap_or_else(rand::random),
        }
    }
}

/// Send `tracing` output to `path`; without a path nothing is installed
pub fn init_logging(path: Option<&PathBuf>, level: Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| SweepError::LogFile {
        path: path.clone(),
        source,
    })?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_game() {
        let args = Args::try_parse_from(["xtsweep"]).unwrap();
        assert_eq!(args.size, 10);
        assert_eq!(args.level, 2);
        assert!(!args.ascii);
        assert_eq!(args.log_level, Level::INFO);
    }

    #[test]
    fn short_flags_and_unvalidated_level() {
        let args = Args::try_parse_from(["xtsweep", "-s", "4", "-l", "7"]).unwrap();
        assert_eq!((args.size, args.level), (4, 7));
        let args = Args::try_parse_from(["xtsweep", "-l", "-1"]).unwrap();
        assert_eq!(args.level, -1);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["xtsweep", "-s", "0"]).is_err());
        assert!(Args::try_parse_from(["xtsweep", "-s", "-3"]).is_err());
    }

    #[test]
    fn sizes_beyond_terminal_coordinates_are_accepted() {
        let args = Args::try_parse_from(["xtsweep", "-s", "70000"]).unwrap();
        assert_eq!(args.into_config().size, 70000);
        let huge = (usize::MAX / 2).to_string();
        assert!(Args::try_parse_from(["xtsweep", "-s", huge.as_str()]).is_err());
    }

    #[test]
    fn explicit_lang_and_seed_are_kept() {
        let args =
            Args::try_parse_from(["xtsweep", "--lang", "zh-CN", "--seed", "9", "--ascii"]).unwrap();
        let cfg = args.into_config();
        assert_eq!(cfg.lang.current_lang, "zh");
        assert_eq!(cfg.seed, 9);
        assert!(cfg.ascii_icons);
        assert_eq!(cfg.size, 10);
    }

    #[test]
    fn missing_log_file_is_a_no_op() {
        assert!(init_logging(None, Level::DEBUG).is_ok());
    }

    #[test]
    fn log_file_in_missing_directory_reports_path() {
        let path = PathBuf::from("/nonexistent-xtsweep-dir/log.txt");
        let err = init_logging(Some(&path), Level::INFO).unwrap_err();
        assert!(matches!(err, SweepError::LogFile { .. }));
        assert!(err.to_string().contains("nonexistent-xtsweep-dir"));
    }
}
