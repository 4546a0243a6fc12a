pub mod models;

pub use models::{DeviationEntry, GameRecord, Stat, StatDeviation, TrendResult};
