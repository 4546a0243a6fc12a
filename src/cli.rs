use clap::{Parser, Subcommand};

use crate::api::SeasonType;
use crate::config::AnalysisSettings;

#[derive(Parser, Debug)]
#[command(author, version, about = "NBA player matchup and trend analyzer")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Show a player's recent games against one opponent, and overall
    Matchup {
        /// Player full name, e.g. "Jayson Tatum"
        #[arg(short, long)]
        player: String,
        /// Opponent team full name or abbreviation, e.g. "Miami Heat"
        #[arg(short, long)]
        opponent: String,
        /// Number of games to show (capped at 20)
        #[arg(short, long, default_value_t = AnalysisSettings::default().recent_games)]
        games: usize,
        /// Season segment to analyze
        #[arg(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,
    },
    /// Recency-weighted per-stat trend report for a player
    Trend {
        /// Player full name
        #[arg(short, long)]
        player: String,
        /// The player's team, used for the roster retention score
        #[arg(short, long)]
        team: String,
        /// Weight multiplier applied per step into the past
        #[arg(short, long, default_value_t = AnalysisSettings::default().decay)]
        decay: f64,
        /// Season segment to analyze
        #[arg(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,
    },
    /// Compare matchup games against the player's surrounding form
    Form {
        /// Player full name
        #[arg(short, long)]
        player: String,
        /// Opponent team full name or abbreviation
        #[arg(short, long)]
        opponent: String,
        /// Number of matchup games to examine
        #[arg(short, long, default_value_t = AnalysisSettings::default().num_matchups)]
        matchups: usize,
        /// Games on each side of a matchup forming its baseline
        #[arg(short, long, default_value_t = AnalysisSettings::default().matchup_window)]
        window: usize,
        /// Season segment to analyze
        #[arg(long, value_enum, default_value_t = SeasonType::Regular)]
        season_type: SeasonType,
    },
}
