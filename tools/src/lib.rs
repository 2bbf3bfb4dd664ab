pub mod convert;
pub mod dedup;
pub mod enumerate;
pub mod error;
pub mod extend;
pub mod filter_time;
pub mod line_io;
pub mod options;
pub mod prefixes;
pub mod print;
pub mod split_by_ply;
pub mod strip_wins;

pub use error::*;
pub use line_io::*;
pub use options::*;
