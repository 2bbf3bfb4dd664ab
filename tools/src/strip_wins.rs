use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::GameState;

use crate::{process_lines, sequence_field, LineError, RunSummary, ToolOptions};

/// Keeps the line unless the player to move can make four in a row right away.
pub fn strip_wins_line(line: &str) -> Result<Option<String>, LineError> {
    let game_state = GameState::from_moves(sequence_field(line)?)?;

    Ok((!game_state.can_win_this_move()).then(|| line.to_string()))
}

pub fn strip_wins<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    process_lines(reader, writer, options, |line| {
        Ok(strip_wins_line(line)?.into_iter().collect())
    })
}
