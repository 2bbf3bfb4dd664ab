use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::TranspositionSet;
use log::info;

use crate::{process_lines, sequence_field, RunSummary, ToolOptions};

/// Keeps the first line for every distinct board position and drops its transpositions.
///
/// Positions are compared by their 012 encoding, so the output holds one representative move
/// sequence per board. Running the output through again removes nothing. With `mirrors` set a
/// line is also dropped when the reflection of its board was already kept.
pub fn dedup<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    let mut transpositions = if options.mirrors {
        TranspositionSet::with_mirrors()
    } else {
        TranspositionSet::new()
    };

    let summary = process_lines(reader, writer, options, |line| {
        let move_sequence = sequence_field(line)?;

        if transpositions.insert(move_sequence)? {
            Ok(vec![line.to_string()])
        } else {
            Ok(vec![])
        }
    })?;

    if transpositions.includes_mirrors() {
        info!("{} distinct positions up to mirroring", transpositions.len());
    } else {
        info!("{} distinct positions", transpositions.len());
    }

    Ok(summary)
}
