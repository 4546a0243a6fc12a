pub mod game_log;
pub mod result_set;

pub use game_log::parse_game_log;
pub use result_set::ResultSet;
