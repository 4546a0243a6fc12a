use anyhow::Result;
use log::info;

use crate::analysis::filter_and_truncate;
use crate::api::{SeasonType, StatsClient};
use crate::domain::GameRecord;

/// A player's game history accumulated across seasons, most-recent-first
pub struct MatchupHistory {
    /// Every fetched game, newest season first
    pub full_log: Vec<GameRecord>,
    /// Games against the opponent, truncated to the requested count
    pub matchups: Vec<GameRecord>,
    /// The newest season's log on its own, for the overall-form table
    pub latest_season: Vec<GameRecord>,
}

/// Walk the season list newest-first, fetching logs until enough matchup
/// games have been found. Seasons beyond the satisfying one are not fetched.
pub async fn collect(
    client: &mut StatsClient,
    seasons: &[&str],
    player_id: i64,
    opponent_token: &str,
    limit: usize,
    season_type: SeasonType,
) -> Result<MatchupHistory> {
    let mut history = MatchupHistory {
        full_log: Vec::new(),
        matchups: Vec::new(),
        latest_season: Vec::new(),
    };

    for (idx, season) in seasons.iter().enumerate() {
        let log = client.fetch_game_log(player_id, season, season_type).await?;
        if idx == 0 {
            history.latest_season = log.clone();
        }

        if merge_season(&mut history, log, opponent_token, limit) {
            break;
        }
    }

    info!(
        "Collected {} matchup games out of {} total",
        history.matchups.len(),
        history.full_log.len()
    );
    Ok(history)
}

/// Fold one season's log into the history. Seasons arrive newest-first, so
/// plain appends keep the merged log most-recent-first. Returns true once
/// the matchup quota is met.
fn merge_season(
    history: &mut MatchupHistory,
    log: Vec<GameRecord>,
    opponent_token: &str,
    limit: usize,
) -> bool {
    let remaining = limit.saturating_sub(history.matchups.len());
    history
        .matchups
        .extend(filter_and_truncate(&log, opponent_token, remaining));
    history.full_log.extend(log);

    history.matchups.len() >= limit
}
