use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked box-score statistic and its upstream column name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Points,
    Rebounds,
    Assists,
    ThreesMade,
    ThreesAttempted,
}

impl Stat {
    /// The default set of statistics every report covers
    pub const TARGETS: [Stat; 5] = [
        Stat::Points,
        Stat::Rebounds,
        Stat::Assists,
        Stat::ThreesMade,
        Stat::ThreesAttempted,
    ];

    /// Column name in the upstream game log result set
    pub fn column(&self) -> &'static str {
        match self {
            Stat::Points => "PTS",
            Stat::Rebounds => "REB",
            Stat::Assists => "AST",
            Stat::ThreesMade => "FG3M",
            Stat::ThreesAttempted => "FG3A",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Points => "Points",
            Stat::Rebounds => "Rebounds",
            Stat::Assists => "Assists",
            Stat::ThreesMade => "3PM",
            Stat::ThreesAttempted => "3PA",
        }
    }
}

/// One row of a player's game log, immutable once parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_id: String,
    pub season_id: String,
    pub game_date: NaiveDate,
    /// Free-text matchup string, e.g. "BOS vs. MIA" or "BOS @ MIA"
    pub matchup: String,
    pub stats: HashMap<Stat, f64>,
}

impl GameRecord {
    pub fn stat(&self, stat: Stat) -> Option<f64> {
        self.stats.get(&stat).copied()
    }
}

/// Output of the recency-weighted trend estimator.
///
/// `weighted_average` and `dispersion` keep full precision; the `rounded_*`
/// helpers produce the display form (2 and 3 decimal places respectively).
#[derive(Debug, Clone, PartialEq)]
pub struct TrendResult {
    pub weighted_average: f64,
    /// Population standard deviation of the unweighted raw values
    pub dispersion: f64,
    /// The series the estimate was computed from, most-recent-first
    pub raw_values: Vec<f64>,
}

impl TrendResult {
    pub fn rounded_average(&self) -> f64 {
        (self.weighted_average * 100.0).round() / 100.0
    }

    pub fn rounded_dispersion(&self) -> f64 {
        (self.dispersion * 1000.0).round() / 1000.0
    }
}

/// Before/after window averages for one statistic of one matchup game.
///
/// `None` means the corresponding window was empty, never zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatDeviation {
    /// The matchup game's own value for this statistic
    pub value: Option<f64>,
    pub before_average: Option<f64>,
    pub after_average: Option<f64>,
    /// Matchup value minus the mean of the two window averages,
    /// present only when both windows are non-empty
    pub deviation: Option<f64>,
}

/// Output of the matchup deviation comparator, one per matchup game
#[derive(Debug, Clone)]
pub struct DeviationEntry {
    pub game_id: String,
    pub game_date: NaiveDate,
    pub matchup: String,
    pub stats: HashMap<Stat, StatDeviation>,
}
