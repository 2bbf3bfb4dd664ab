use serde::de::Error;
use serde::de::{Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::{ParseActionError, BOARD_WIDTH};

/// A single ply: a disc dropped into a column. Columns are numbered 0-6 from the left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Action {
    DropPiece(usize),
}

impl Action {
    pub fn from_char(c: char) -> Option<Self> {
        let column = c.to_digit(10)? as usize;

        if column >= BOARD_WIDTH {
            return None;
        }

        Some(Action::DropPiece(column))
    }

    pub fn column(&self) -> usize {
        let Action::DropPiece(column) = self;
        *column
    }

    /// The same drop reflected across the centre column.
    pub fn mirrored(&self) -> Self {
        Action::DropPiece(BOARD_WIDTH - 1 - self.column())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();

        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Action::from_char(c).ok_or_else(|| ParseActionError(s.to_string()))
            }
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.column())
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.column() as u64)
    }
}

struct ActionVisitor {}

impl ActionVisitor {
    fn new() -> Self {
        Self {}
    }
}

impl<'de> Visitor<'de> for ActionVisitor {
    type Value = Action;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str(
            "Expecting an integer from 0-6 that represents the column that a piece was dropped.",
        )
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: Error,
    {
        if v >= BOARD_WIDTH as u64 {
            return Err(E::invalid_value(serde::de::Unexpected::Unsigned(v), &self));
        }

        Ok(Action::DropPiece(v as usize))
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_u64(ActionVisitor::new())
    }
}
