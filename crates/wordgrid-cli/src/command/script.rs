use std::path::PathBuf;

use serde::Serialize;
use tracing::info;
use wordgrid_engine::{BoardController, Grid, Placement};

use crate::util::{self, PlacementOutcome};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ScriptArg {
    /// JSON file containing an array of placements
    script: PathBuf,
    /// Write a JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
    /// Print the JSON report to stdout instead of the text board
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct ScriptReport<'a> {
    results: Vec<PlacementOutcome>,
    board: &'a Grid,
}

pub(crate) fn run(arg: &ScriptArg, board: &mut BoardController) -> anyhow::Result<()> {
    let ScriptArg {
        script,
        output,
        json,
    } = arg;

    let placements: Vec<Placement> = util::read_json_file("placement script", script)?;
    info!(count = placements.len(), path = %script.display(), "loaded placement script");

    let results = placements
        .iter()
        .map(|placement| PlacementOutcome::apply(board, placement))
        .collect::<Vec<_>>();
    let accepted = results.iter().filter(|outcome| outcome.accepted).count();
    info!(accepted, rejected = results.len() - accepted, "script finished");

    if !*json {
        for outcome in &results {
            println!("{outcome}");
        }
        util::print_board(board)?;
    }

    let report = ScriptReport {
        results,
        board: board.grid(),
    };
    if let Some(path) = output {
        util::save_json(path, &report)?;
    }
    if *json {
        util::print_json(&report)?;
    }
    Ok(())
}
