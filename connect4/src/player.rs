use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The player who makes the first move of every game.
    pub fn first() -> Self {
        Player::One
    }

    pub fn other(&self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Mark used in the 012 encoding.
    pub fn mark(&self) -> char {
        match self {
            Player::One => '1',
            Player::Two => '2',
        }
    }

    /// Disc used when drawing a board.
    pub fn disc(&self) -> char {
        match self {
            Player::One => '○',
            Player::Two => '●',
        }
    }

    /// The player to move after `ply` moves have been played.
    pub fn to_move_after(ply: usize) -> Self {
        if ply % 2 == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_toggles() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
        assert_eq!(Player::first().other().other(), Player::first());
    }

    #[test]
    fn test_to_move_after() {
        assert_eq!(Player::to_move_after(0), Player::One);
        assert_eq!(Player::to_move_after(1), Player::Two);
        assert_eq!(Player::to_move_after(42), Player::One);
    }

    #[test]
    fn test_marks_and_discs() {
        assert_eq!(Player::One.mark(), '1');
        assert_eq!(Player::Two.mark(), '2');
        assert_eq!(Player::One.disc(), '○');
        assert_eq!(Player::Two.disc(), '●');
    }
}
