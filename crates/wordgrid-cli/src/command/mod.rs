use std::{io, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordgrid_engine::{BoardController, DEFAULT_DICTIONARY_PATH, DEFAULT_GRID_SIZE, Dictionary};

use self::{interactive::InteractiveArg, script::ScriptArg};

mod demo;
mod interactive;
mod script;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Word list with one word per line
    #[arg(long, global = true, default_value = DEFAULT_DICTIONARY_PATH)]
    dictionary: PathBuf,
    /// Side length of the board
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Replay the built-in sample moves
    Demo,
    /// Apply placements from a JSON file
    Script(#[clap(flatten)] ScriptArg),
    /// Read placements from stdin
    Interactive(#[clap(flatten)] InteractiveArg),
}

pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let args = CommandArgs::parse();
    let mut board = new_board(&args)?;
    match args.mode.unwrap_or(Mode::Demo) {
        Mode::Demo => demo::run(&mut board)?,
        Mode::Script(arg) => script::run(&arg, &mut board)?,
        Mode::Interactive(arg) => interactive::run(&arg, &mut board)?,
    }
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
}

fn new_board(args: &CommandArgs) -> anyhow::Result<BoardController> {
    let dictionary = Dictionary::load(&args.dictionary)?;
    let board = BoardController::with_size(args.size, Arc::new(dictionary))
        .context("Invalid board configuration")?;
    info!(size = args.size, "board ready");
    Ok(board)
}
