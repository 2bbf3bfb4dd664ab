use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::GameState;

use crate::{process_lines, sequence_field, LineError, RunSummary, ToolOptions};

/// Every legal one-ply continuation of the line's move sequence, left to right.
///
/// A finished game has no continuations: nothing is written when the last move made four in a
/// row or filled the board.
pub fn extend_line(line: &str) -> Result<Vec<String>, LineError> {
    let move_sequence = sequence_field(line)?;
    let game_state = GameState::from_moves(move_sequence)?;

    if game_state.has_connected_4() {
        return Ok(vec![]);
    }

    Ok(game_state
        .valid_columns()
        .map(|column| format!("{}{}", move_sequence, column))
        .collect())
}

pub fn extend<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    process_lines(reader, writer, options, extend_line)
}
