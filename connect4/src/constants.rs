pub const BOARD_WIDTH: usize = 7;
pub const BOARD_HEIGHT: usize = 6;
pub const MAX_PLY: usize = BOARD_WIDTH * BOARD_HEIGHT;

/// Separates the per-column mark runs in the 012 encoding.
pub const COLUMN_DELIMITER: char = '0';
