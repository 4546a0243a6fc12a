use std::collections::HashSet;

use anyhow::Result;
use log::warn;

use crate::analysis::estimate_trend;
use crate::api::{SeasonType, StatsClient};
use crate::config::{AppConfig, find_team};
use crate::domain::Stat;
use crate::report::table;

/// Renders a player's recency-weighted form per statistic, plus how much of
/// their team's roster carried over from the previous season.
pub struct TrendReportService {
    config: AppConfig,
    client: StatsClient,
}

impl TrendReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = StatsClient::new(&config.scraper)?;
        Ok(Self { config, client })
    }

    pub async fn run(
        &mut self,
        player: &str,
        team: &str,
        decay: f64,
        season_type: SeasonType,
    ) -> Result<()> {
        let team_config = find_team(team)?;
        let player_id = self.client.find_player_id(player).await?;

        let season = self.config.analysis.seasons[0];
        let log = self
            .client
            .fetch_game_log(player_id, season, season_type)
            .await?;
        let recent: Vec<_> = log
            .into_iter()
            .take(self.config.analysis.recent_games)
            .collect();

        table::heading(&format!(
            "{player} trend report ({season}, last {} games, decay {decay})",
            recent.len()
        ));

        for stat in Stat::TARGETS {
            let values: Vec<f64> = recent.iter().filter_map(|g| g.stat(stat)).collect();
            match estimate_trend(&values, decay) {
                Ok(trend) => println!("{}", table::render_trend_line(stat, &trend)),
                Err(e) => warn!("{}: {e}", stat.label()),
            }
        }

        self.report_roster_retention(team_config.id, team_config.full_name)
            .await?;

        Ok(())
    }

    async fn report_roster_retention(&mut self, team_id: i64, team_name: &str) -> Result<()> {
        let seasons = self.config.analysis.seasons;
        if seasons.len() < 2 {
            return Ok(());
        }

        let current = self.client.fetch_team_roster(team_id, seasons[0]).await?;
        let previous = self.client.fetch_team_roster(team_id, seasons[1]).await?;

        match retention_score(&current, &previous) {
            Some(score) => println!(
                "\n{team_name} roster retention vs {}: {:.3}",
                seasons[1], score
            ),
            None => warn!("No {} roster found for {team_name}", seasons[1]),
        }
        Ok(())
    }
}

/// Share of the past roster still on the current one; None when the past
/// roster is empty
fn retention_score(current: &HashSet<String>, past: &HashSet<String>) -> Option<f64> {
    if past.is_empty() {
        return None;
    }
    let shared = current.intersection(past).count();
    Some(shared as f64 / past.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn retention_is_the_shared_fraction_of_the_past_roster() {
        let current = roster(&["Tatum", "Brown", "White", "Rookie"]);
        let past = roster(&["Tatum", "Brown", "Horford", "Smart"]);
        assert_eq!(retention_score(&current, &past), Some(0.5));
    }

    #[test]
    fn identical_rosters_score_one() {
        let squad = roster(&["Tatum", "Brown"]);
        assert_eq!(retention_score(&squad, &squad), Some(1.0));
    }

    #[test]
    fn empty_past_roster_has_no_score() {
        let current = roster(&["Tatum"]);
        assert_eq!(retention_score(&current, &HashSet::new()), None);
    }
}
