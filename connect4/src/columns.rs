use std::fmt::{self, Display, Formatter};

use crate::{
    Action, MoveError, MoveSequence, Player, BOARD_HEIGHT, BOARD_WIDTH, COLUMN_DELIMITER, MAX_PLY,
};

/// The board as one stack of marks per column, bottom to top.
///
/// Only the final configuration is kept: two sequences that transpose into the same board build
/// equal `Columns`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Columns {
    columns: [Vec<Player>; BOARD_WIDTH],
    player_to_move: Player,
    ply: usize,
}

impl Columns {
    pub fn new() -> Self {
        Self {
            columns: Default::default(),
            player_to_move: Player::first(),
            ply: 0,
        }
    }

    /// Plays out a move-sequence string such as `"334"`.
    pub fn from_moves(move_sequence: &str) -> Result<Self, MoveError> {
        let mut columns = Self::new();

        for (idx, c) in move_sequence.chars().enumerate() {
            let action = Action::from_char(c).ok_or(MoveError::InvalidMove {
                ply: idx + 1,
                found: c,
            })?;

            columns.play(action)?;
        }

        Ok(columns)
    }

    pub fn from_sequence(move_sequence: &MoveSequence) -> Result<Self, MoveError> {
        let mut columns = Self::new();

        for action in move_sequence.actions() {
            columns.play(*action)?;
        }

        Ok(columns)
    }

    /// Drops a disc for the player to move, then passes the turn.
    pub fn play(&mut self, action: Action) -> Result<(), MoveError> {
        let column_idx = action.column();
        let column = &mut self.columns[column_idx];

        if column.len() >= BOARD_HEIGHT {
            return Err(MoveError::ColumnFull {
                ply: self.ply + 1,
                column: column_idx,
            });
        }

        column.push(self.player_to_move);
        self.player_to_move = self.player_to_move.other();
        self.ply += 1;

        Ok(())
    }

    pub fn column(&self, column: usize) -> &[Player] {
        &self.columns[column]
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    pub fn player_to_move(&self) -> Player {
        self.player_to_move
    }

    pub fn is_full(&self) -> bool {
        self.ply == MAX_PLY
    }

    /// The canonical "012" encoding: each column's marks bottom to top, columns joined by `0`.
    pub fn to_012_string(&self) -> String {
        let mut encoded = String::with_capacity(self.ply + BOARD_WIDTH - 1);

        for (idx, column) in self.columns.iter().enumerate() {
            if idx != 0 {
                encoded.push(COLUMN_DELIMITER);
            }
            encoded.extend(column.iter().map(Player::mark));
        }

        encoded
    }

    /// The board reflected left to right. Column `c` becomes column `6 - c`.
    pub fn mirrored(&self) -> Self {
        let mut columns = self.columns.clone();
        columns.reverse();

        Self {
            columns,
            player_to_move: self.player_to_move,
            ply: self.ply,
        }
    }
}

impl Default for Columns {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Columns {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_HEIGHT).rev() {
            for column in &self.columns {
                let disc = column.get(row).map(Player::disc).unwrap_or(' ');
                write!(f, "|{}", disc)?;
            }
            writeln!(f, "|")?;
        }

        writeln!(f, " 0 1 2 3 4 5 6")
    }
}
