use connect4::{Columns, MoveError, Player, MAX_PLY};

/// Draws the board reached by `move_sequence`, followed by whose turn it is.
pub fn render_board(move_sequence: &str, show_encoding: bool) -> Result<String, MoveError> {
    let columns = Columns::from_moves(move_sequence)?;
    let mut rendered = format!("\n{}", columns);

    if columns.ply() < MAX_PLY {
        let to_move = Player::to_move_after(columns.ply());
        rendered.push_str(&format!("{} to play\n", to_move.disc()));
    }

    if show_encoding {
        rendered.push_str(&format!("{}\n", columns.to_012_string()));
    }

    Ok(rendered)
}
