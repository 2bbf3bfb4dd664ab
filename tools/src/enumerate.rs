use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use connect4::{GameState, MoveError, TranspositionSet, MAX_PLY};
use log::info;
use serde::{Deserialize, Serialize};

use crate::create_output;
use crate::split_by_ply::ply_file_path;

pub const TRANSPOSITION_LIST_FILE_NAME: &str = "transposition_list";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EnumerateSummary {
    /// Number of positions written for each ply, index 0 being ply 1.
    pub positions_per_ply: Vec<usize>,
}

/// Every position one ply deeper than `previous`, one sequence per board up to mirroring.
///
/// Positions where the last move made four in a row are not continued. Sequences come out in
/// the order they are reached: by `previous` first, then by column.
pub fn next_ply(previous: &[String]) -> Result<Vec<String>, MoveError> {
    let mut transpositions = TranspositionSet::with_mirrors();
    let mut next = Vec::new();

    for move_sequence in previous {
        let game_state = GameState::from_moves(move_sequence)?;
        if game_state.has_connected_4() {
            continue;
        }

        for column in game_state.valid_columns() {
            let extended = format!("{}{}", move_sequence, column);

            if transpositions.insert(&extended)? {
                next.push(extended);
            }
        }
    }

    Ok(next)
}

/// Writes one transposition list per ply, from ply 1 up to `max_ply`, into `out_dir`.
///
/// The lists start from the empty board, so ply 1 holds `0` to `3`.
pub fn enumerate(out_dir: &Path, max_ply: usize) -> Result<EnumerateSummary> {
    if max_ply == 0 || max_ply > MAX_PLY {
        return Err(anyhow!(
            "max_ply must be between 1 and {}, found {}",
            MAX_PLY,
            max_ply
        ));
    }

    fs::create_dir_all(out_dir).with_context(|| format!("Failed to create {:?}", out_dir))?;

    let mut summary = EnumerateSummary {
        positions_per_ply: Vec::with_capacity(max_ply),
    };
    let mut positions = vec![String::new()];

    for ply in 1..=max_ply {
        positions = next_ply(&positions)?;

        let path = ply_file_path(out_dir, TRANSPOSITION_LIST_FILE_NAME, ply);
        let mut writer = create_output(&path)?;
        for move_sequence in &positions {
            writeln!(writer, "{}", move_sequence)?;
        }
        writer.flush()?;

        info!("{} positions at ply {} written to {:?}", positions.len(), ply, path);
        summary.positions_per_ply.push(positions.len());
    }

    Ok(summary)
}
