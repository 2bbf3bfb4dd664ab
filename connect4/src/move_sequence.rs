use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::{Action, MoveError, Player};

/// The history of a game as the columns played, in order, starting with player one.
///
/// Parsing only checks that every character names a column. Whether the moves fit on the board
/// is checked when they are played out, see [`crate::Columns`] and [`crate::GameState`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct MoveSequence {
    actions: Vec<Action>,
}

impl MoveSequence {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn player_to_move(&self) -> Player {
        Player::to_move_after(self.len())
    }

    /// Every non-empty prefix of the sequence, shortest first. The last item is the full sequence.
    pub fn prefixes(&self) -> impl Iterator<Item = MoveSequence> + '_ {
        (1..=self.actions.len()).map(move |len| MoveSequence::new(self.actions[..len].to_vec()))
    }

    /// The sequence played on the left-right reflection of the board.
    pub fn mirrored(&self) -> MoveSequence {
        MoveSequence::new(self.actions.iter().map(Action::mirrored).collect())
    }
}

impl FromStr for MoveSequence {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let actions = s
            .chars()
            .enumerate()
            .map(|(idx, c)| {
                Action::from_char(c).ok_or(MoveError::InvalidMove {
                    ply: idx + 1,
                    found: c,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { actions })
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            write!(f, "{}", action)?;
        }

        Ok(())
    }
}
