pub mod parsers;
pub mod stats_client;

pub use stats_client::{SeasonType, StatsClient};
