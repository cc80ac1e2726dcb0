use args::TicTacToeArgs;
use clap::Parser;
use color_eyre::Result;
use simplelog::{Config, WriteLogger};
use std::fs::File;

mod action;
mod args;
mod board;
mod cell;
mod highlight;
mod history;
mod input_state;
mod mark;
mod move_record;
mod tictactoe;
mod ui;
mod util;
mod view;
mod win_state;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = TicTacToeArgs::parse();
    init_logging(&args)?;
    ui::main(args)
}

/// The terminal belongs to the ui, so logs only go to a file, and only
/// when one is given.
fn init_logging(args: &TicTacToeArgs) -> Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };
    WriteLogger::init(args.log_level, Config::default(), File::create(path)?)?;
    log::info!("logging to {}", path.display());
    Ok(())
}
