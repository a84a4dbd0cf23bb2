use wordgrid_engine::{BoardController, Direction, Position};

use crate::util::{self, PlacementOutcome};

const SAMPLE_MOVES: [(Position, Direction, &str); 4] = [
    (Position::new(0, 0), Direction::South, "hello"),
    (Position::new(0, 0), Direction::East, "hello"),
    (Position::new(3, 3), Direction::East, "fgoa"),
    (Position::new(6, 8), Direction::East, "what"),
];

pub(crate) fn run(board: &mut BoardController) -> anyhow::Result<()> {
    for (origin, direction, word) in SAMPLE_MOVES {
        let outcome = PlacementOutcome::attempt(board, origin, direction, word);
        println!("{outcome}");
    }
    util::print_board(board)?;
    Ok(())
}
