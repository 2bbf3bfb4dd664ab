use std::collections::HashSet;

use crate::{Columns, MoveError};

/// Encodes the board reached by `move_sequence` in the canonical "012" format.
///
/// Column marks are written bottom to top, `1` for the player who moved first and `2` for the
/// other player, and the seven columns are joined by `0`. Only the final board is encoded, so
/// transpositions share an encoding.
///
/// ```
/// assert_eq!(connect4::encode("33").unwrap(), "00012000");
/// ```
pub fn encode(move_sequence: &str) -> Result<String, MoveError> {
    Ok(Columns::from_moves(move_sequence)?.to_012_string())
}

/// The smaller of the 012 encodings of the board and of its mirror image.
///
/// A board and its left-right reflection share this key.
pub fn encode_up_to_mirror(move_sequence: &str) -> Result<String, MoveError> {
    let columns = Columns::from_moves(move_sequence)?;

    Ok(mirror_key(&columns))
}

fn mirror_key(columns: &Columns) -> String {
    let encoded = columns.to_012_string();
    let mirrored = columns.mirrored().to_012_string();

    encoded.min(mirrored)
}

/// Remembers the positions seen so far by their 012 encoding.
///
/// With mirrors enabled a position also counts as seen when its left-right reflection was.
#[derive(Debug, Default)]
pub struct TranspositionSet {
    seen: HashSet<String>,
    mirrors: bool,
}

impl TranspositionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mirrors() -> Self {
        Self {
            seen: HashSet::new(),
            mirrors: true,
        }
    }

    pub fn includes_mirrors(&self) -> bool {
        self.mirrors
    }

    /// Returns `true` when the position reached by `move_sequence` has not been seen before.
    pub fn insert(&mut self, move_sequence: &str) -> Result<bool, MoveError> {
        let key = self.key(move_sequence)?;

        Ok(self.seen.insert(key))
    }

    pub fn contains(&self, move_sequence: &str) -> Result<bool, MoveError> {
        Ok(self.seen.contains(&self.key(move_sequence)?))
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn key(&self, move_sequence: &str) -> Result<String, MoveError> {
        let columns = Columns::from_moves(move_sequence)?;

        if self.mirrors {
            Ok(mirror_key(&columns))
        } else {
            Ok(columns.to_012_string())
        }
    }
}
