use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use serde::{Serialize, de::DeserializeOwned};
use wordgrid_engine::{BoardController, Direction, Placement, PlacementRejection, Position};

/// Pretty-prints `value` as JSON to stdout.
pub fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    write_json(io::stdout().lock(), value).context("Failed to write JSON to stdout")
}

/// Pretty-prints `value` as JSON into a newly created file at `path`.
pub fn save_json<T>(path: &Path, value: &T) -> anyhow::Result<()>
where
    T: Serialize,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    write_json(BufWriter::new(file), value)
        .with_context(|| format!("Failed to write JSON to {}", path.display()))
}

fn write_json<W, T>(mut writer: W, value: &T) -> anyhow::Result<()>
where
    W: Write,
    T: Serialize,
{
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn read_json_file<T>(file_kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file = File::open(path)
        .with_context(|| format!("Failed to open {file_kind} file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse {file_kind} file: {}", path.display()))
}

/// Result of one placement attempt, as shown to the player and written to reports.
#[derive(Debug, Clone, Serialize)]
pub struct PlacementOutcome {
    pub origin: Position,
    pub direction: Direction,
    pub word: String,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl PlacementOutcome {
    pub fn attempt(
        board: &mut BoardController,
        origin: Position,
        direction: Direction,
        word: &str,
    ) -> Self {
        let result = board.place_word(origin, direction, word);
        Self::new(origin, direction, word.to_ascii_uppercase(), result)
    }

    pub fn apply(board: &mut BoardController, placement: &Placement) -> Self {
        let result = board.place(placement);
        Self::new(
            placement.origin,
            placement.direction,
            placement.word.to_string(),
            result,
        )
    }

    fn new(
        origin: Position,
        direction: Direction,
        word: String,
        result: Result<(), PlacementRejection>,
    ) -> Self {
        let (accepted, check, reason) = match result {
            Ok(()) => (true, None, None),
            Err(rejection) => (
                false,
                rejection.check().map(|check| check.to_string()),
                Some(rejection.to_string()),
            ),
        };
        Self {
            origin,
            direction,
            word,
            accepted,
            check,
            reason,
        }
    }
}

impl fmt::Display for PlacementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.accepted { "VALID" } else { "INVALID" };
        write!(
            f,
            "{status}. origin: {}, direction: {}, word: {}.",
            self.origin, self.direction, self.word
        )?;
        match (&self.check, &self.reason) {
            (Some(check), Some(reason)) => write!(f, " {check} check failed: {reason}"),
            (None, Some(reason)) => write!(f, " malformed word: {reason}"),
            _ => Ok(()),
        }
    }
}

pub fn print_board(board: &BoardController) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in board.render() {
        writeln!(stdout, "{line}").context("Failed to write board to stdout")?;
    }
    stdout.flush().context("Failed to flush stdout")?;
    Ok(())
}
