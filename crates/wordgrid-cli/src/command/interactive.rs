use std::io::{self, BufRead as _, Write as _};

use anyhow::{Context as _, bail};
use wordgrid_engine::{BoardController, Direction, Position};

use crate::util::{self, PlacementOutcome};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InteractiveArg {
    /// Do not print the board after each accepted placement
    #[arg(long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Place {
        origin: Position,
        direction: Direction,
        word: String,
    },
    Board,
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let tokens = line.split_whitespace().collect::<Vec<_>>();
    let command = match tokens.as_slice() {
        [] => return Ok(None),
        ["quit" | "exit"] => Command::Quit,
        ["board"] => Command::Board,
        [x, y, direction, word] => Command::Place {
            origin: Position::new(
                x.parse().with_context(|| format!("invalid x coordinate: {x}"))?,
                y.parse().with_context(|| format!("invalid y coordinate: {y}"))?,
            ),
            direction: direction
                .parse()
                .with_context(|| format!("invalid direction: {direction}"))?,
            word: (*word).to_owned(),
        },
        _ => bail!("expected `X Y DIRECTION WORD`, `board` or `quit`"),
    };
    Ok(Some(command))
}

pub(crate) fn run(arg: &InteractiveArg, board: &mut BoardController) -> anyhow::Result<()> {
    let InteractiveArg { quiet } = arg;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read from stdin")?;

        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => break,
            Ok(Some(Command::Board)) => util::print_board(board)?,
            Ok(Some(Command::Place {
                origin,
                direction,
                word,
            })) => {
                let outcome = PlacementOutcome::attempt(board, origin, direction, &word);
                println!("{outcome}");
                if outcome.accepted && !*quiet {
                    util::print_board(board)?;
                }
            }
            Err(err) => println!("error: {err:#}"),
        }
    }
    Ok(())
}
