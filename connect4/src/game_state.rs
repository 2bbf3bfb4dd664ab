use crate::{Action, MoveError, Player, BOARD_HEIGHT, BOARD_WIDTH};

const TOP_ROW_MASK: u64 = 0b0100000_0100000_0100000_0100000_0100000_0100000_0100000;

/// Bitboard position used for tactical checks.
///
/// Each column takes seven bits, bottom to top, with the seventh bit always empty so that
/// shifted patterns never wrap into the next column:
///
/// ```text
/// 05  12  19  26  33  40  47
/// 04  11  18  25  32  39  46
/// 03  10  17  24  31  38  45
/// 02  09  16  23  30  37  44
/// 01  08  15  22  29  36  43
/// 00  07  14  21  28  35  42
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct GameState {
    pub p1_turn_to_move: bool,
    pub p1_piece_board: u64,
    pub p2_piece_board: u64,
}

impl GameState {
    pub fn initial() -> Self {
        GameState {
            p1_turn_to_move: true,
            p1_piece_board: 0,
            p2_piece_board: 0,
        }
    }

    /// Loads the position reached by a move-sequence string such as `"334"`.
    pub fn from_moves(move_sequence: &str) -> Result<Self, MoveError> {
        let mut game_state = Self::initial();

        for (idx, c) in move_sequence.chars().enumerate() {
            let ply = idx + 1;
            let column = Action::from_char(c)
                .ok_or(MoveError::InvalidMove { ply, found: c })?
                .column();

            if game_state.is_column_full(column) {
                return Err(MoveError::ColumnFull { ply, column });
            }

            game_state = game_state.drop_piece(column);
        }

        Ok(game_state)
    }

    pub fn player_to_move(&self) -> Player {
        if self.p1_turn_to_move {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Drops a disc for the player to move into `column` (0-6). The column must not be full.
    pub fn drop_piece(&self, column: usize) -> Self {
        debug_assert!(!self.is_column_full(column), "column {} is full", column);

        let column_adder = 1 << (7 * column);
        let all_pieces = self.p1_piece_board | self.p2_piece_board;
        let dropped_piece = (all_pieces + column_adder) & !all_pieces;
        let p1_turn_to_move = self.p1_turn_to_move;
        let mut p1_piece_board = self.p1_piece_board;
        let mut p2_piece_board = self.p2_piece_board;

        if p1_turn_to_move {
            p1_piece_board = self.p1_piece_board | dropped_piece;
        } else {
            p2_piece_board = self.p2_piece_board | dropped_piece;
        }

        Self {
            p1_turn_to_move: !p1_turn_to_move,
            p1_piece_board,
            p2_piece_board,
        }
    }

    pub fn is_column_full(&self, column: usize) -> bool {
        let all_pieces = self.p1_piece_board | self.p2_piece_board;
        let column_mask_top_row = 1 << (7 * column + (BOARD_HEIGHT - 1));
        column_mask_top_row & all_pieces != 0
    }

    pub fn is_board_full(&self) -> bool {
        let all_pieces = self.p1_piece_board | self.p2_piece_board;
        all_pieces & TOP_ROW_MASK == TOP_ROW_MASK
    }

    pub fn valid_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_WIDTH).filter(move |column| !self.is_column_full(*column))
    }

    pub fn number_of_pieces(&self) -> usize {
        (self.p1_piece_board | self.p2_piece_board).count_ones() as usize
    }

    /// Whether the player to move can complete four in a row with a single drop.
    pub fn can_win_this_move(&self) -> bool {
        self.valid_columns()
            .any(|column| self.drop_piece(column).has_connected_4())
    }

    /// Whether the player who made the last move has four in a row.
    pub fn has_connected_4(&self) -> bool {
        let board = if self.p1_turn_to_move {
            self.p2_piece_board
        } else {
            self.p1_piece_board
        };

        // Diagonal, down to the right.
        let c2 = board & (board << 6);
        if c2 & (c2 << (2 * 6)) != 0 {
            return true;
        }

        // Horizontal.
        let c2 = board & (board << 7);
        if c2 & (c2 << (2 * 7)) != 0 {
            return true;
        }

        // Diagonal, up to the right.
        let c2 = board & (board << 8);
        if c2 & (c2 << (2 * 8)) != 0 {
            return true;
        }

        // Vertical.
        let c2 = board & (board << 1);
        if c2 & (c2 << 2) != 0 {
            return true;
        }

        false
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game_state = GameState::initial();

        assert_eq!(game_state.player_to_move(), Player::One);
        assert_eq!(game_state.number_of_pieces(), 0);
        assert!(!game_state.has_connected_4());
        assert!(!game_state.can_win_this_move());
    }

    #[test]
    fn test_drop_piece_stacks() {
        let game_state = GameState::initial().drop_piece(3).drop_piece(3);

        assert_eq!(game_state.p1_piece_board, 1 << 21);
        assert_eq!(game_state.p2_piece_board, 1 << 22);
        assert_eq!(game_state.player_to_move(), Player::One);
    }

    #[test]
    fn test_column_full() {
        let game_state = GameState::from_moves("222222").unwrap();

        assert!(game_state.is_column_full(2));
        assert!(!game_state.is_column_full(3));
        assert_eq!(game_state.valid_columns().count(), 6);
        assert_eq!(
            GameState::from_moves("2222222"),
            Err(MoveError::ColumnFull { ply: 7, column: 2 })
        );
    }

    #[test]
    fn test_invalid_move() {
        assert_eq!(
            GameState::from_moves("3-"),
            Err(MoveError::InvalidMove { ply: 2, found: '-' })
        );
    }

    #[test]
    fn test_board_full() {
        let game_state = GameState::from_moves("000000111111222222444444333333555555666666").unwrap();

        assert!(game_state.is_board_full());
        assert_eq!(game_state.number_of_pieces(), 42);
        assert_eq!(game_state.valid_columns().count(), 0);
    }

    #[test]
    fn test_horizontal_four() {
        let game_state = GameState::from_moves("0011223").unwrap();

        assert!(game_state.has_connected_4());
    }

    #[test]
    fn test_vertical_four() {
        let game_state = GameState::from_moves("0101010").unwrap();

        assert!(game_state.has_connected_4());
    }

    #[test]
    fn test_diagonal_up_four() {
        let game_state = GameState::from_moves("0112322336").unwrap();
        assert!(!game_state.has_connected_4());

        let game_state = game_state.drop_piece(3);
        assert!(game_state.has_connected_4());
    }

    #[test]
    fn test_diagonal_down_four() {
        let game_state = GameState::from_moves("6554344330").unwrap();
        assert!(!game_state.has_connected_4());

        let game_state = game_state.drop_piece(3);
        assert!(game_state.has_connected_4());
    }

    #[test]
    fn test_no_wrap_between_columns() {
        // Player one holds the top three cells of column 0 and the bottom cell of column 1.
        let game_state = GameState::from_moves("10606005050").unwrap();

        assert!(!game_state.has_connected_4());
    }

    #[test]
    fn test_can_win_this_move() {
        assert!(GameState::from_moves("001122").unwrap().can_win_this_move());
        assert!(GameState::from_moves("010101").unwrap().can_win_this_move());
        assert!(!GameState::from_moves("0").unwrap().can_win_this_move());
        assert!(!GameState::from_moves("3344").unwrap().can_win_this_move());
    }

    #[test]
    fn test_can_win_this_move_for_second_player() {
        // Player two has three stacked in column 3 and plays next.
        let game_state = GameState::from_moves("0303635").unwrap();

        assert_eq!(game_state.player_to_move(), Player::Two);
        assert!(game_state.can_win_this_move());
    }
}
