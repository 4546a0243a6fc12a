use anyhow::Result;
use log::warn;

use crate::api::{SeasonType, StatsClient};
use crate::config::{AppConfig, find_team};
use crate::domain::Stat;
use crate::report::table;
use crate::services::history;

/// Renders a player's recent games against one opponent, alongside their
/// recent games overall.
pub struct MatchupReportService {
    config: AppConfig,
    client: StatsClient,
}

impl MatchupReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = StatsClient::new(&config.scraper)?;
        Ok(Self { config, client })
    }

    pub async fn run(
        &mut self,
        player: &str,
        opponent: &str,
        games: usize,
        season_type: SeasonType,
    ) -> Result<()> {
        let games = self.config.clamp_games(games);
        let opponent_team = find_team(opponent)?;
        let player_id = self.client.find_player_id(player).await?;

        let history = history::collect(
            &mut self.client,
            self.config.analysis.seasons,
            player_id,
            opponent_team.abbreviation,
            games,
            season_type,
        )
        .await?;

        if history.matchups.is_empty() {
            warn!("{player} has no logged games against {}", opponent_team.full_name);
        }

        table::heading(&format!(
            "{player}'s last {} games vs {}",
            history.matchups.len(),
            opponent_team.full_name
        ));
        println!("{}", table::render_game_table(&history.matchups, &Stat::TARGETS));

        let latest_season = self.config.analysis.seasons[0];
        let overall: Vec<_> = history.latest_season.iter().take(games).cloned().collect();

        table::heading(&format!(
            "Last {} overall games ({latest_season})",
            overall.len()
        ));
        println!("{}", table::render_game_table(&overall, &Stat::TARGETS));

        Ok(())
    }
}
