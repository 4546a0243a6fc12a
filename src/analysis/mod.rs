pub mod deviation;
pub mod filter;
pub mod trend;

pub use deviation::compare_matchups;
pub use filter::filter_and_truncate;
pub use trend::estimate_trend;
