use anyhow::Result;
use log::warn;

use crate::analysis::compare_matchups;
use crate::api::{SeasonType, StatsClient};
use crate::config::{AppConfig, find_team};
use crate::domain::Stat;
use crate::report::table;
use crate::services::history;

/// Renders how a player performed in matchup games relative to their form in
/// the games surrounding each one.
pub struct FormReportService {
    config: AppConfig,
    client: StatsClient,
}

impl FormReportService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = StatsClient::new(&config.scraper)?;
        Ok(Self { config, client })
    }

    pub async fn run(
        &mut self,
        player: &str,
        opponent: &str,
        matchups: usize,
        window: usize,
        season_type: SeasonType,
    ) -> Result<()> {
        let opponent_team = find_team(opponent)?;
        let player_id = self.client.find_player_id(player).await?;

        let history = history::collect(
            &mut self.client,
            self.config.analysis.seasons,
            player_id,
            opponent_team.abbreviation,
            matchups,
            season_type,
        )
        .await?;

        let entries = compare_matchups(
            &history.full_log,
            &history.matchups,
            &Stat::TARGETS,
            window,
        );

        if entries.is_empty() {
            warn!("{player} has no comparable games against {}", opponent_team.full_name);
            return Ok(());
        }

        table::heading(&format!(
            "{player} vs {}: performance against usual form (window {window})",
            opponent_team.full_name
        ));
        for entry in &entries {
            println!("\n{}", table::render_deviation_block(entry, &Stat::TARGETS));
        }

        Ok(())
    }
}
