#![allow(clippy::unusual_byte_groupings)]

pub mod action;
pub mod columns;
pub mod encoding;
pub mod error;
pub mod game_state;
pub mod move_sequence;
pub mod player;

mod constants;

pub use action::*;
pub use columns::*;
pub use constants::*;
pub use encoding::*;
pub use error::*;
pub use game_state::*;
pub use move_sequence::*;
pub use player::*;
