use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

/// Command line tic-tac-toe with time travel
#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct TicTacToeArgs {
    /// list moves newest first
    #[arg(short, long)]
    pub descending: bool,
    /// write logs to this file
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,
    /// off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}
