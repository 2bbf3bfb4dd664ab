use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::MoveSequence;

use crate::{process_lines, sequence_field, LineError, RunSummary, ToolOptions};

/// Every prefix of the line's sequence, shortest first, ending with the sequence itself.
pub fn prefixes_line(line: &str) -> Result<Vec<String>, LineError> {
    let move_sequence = sequence_field(line)?.parse::<MoveSequence>()?;

    Ok(move_sequence.prefixes().map(|p| p.to_string()).collect())
}

pub fn prefixes<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    process_lines(reader, writer, options, prefixes_line)
}
