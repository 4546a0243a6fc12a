use std::collections::HashSet;

use anyhow::{Context, Result};
use clap::ValueEnum;
use log::info;
use serde_json::Value;

use crate::api::parsers::{self, ResultSet};
use crate::config::ScraperSettings;
use crate::domain::GameRecord;
use crate::errors::AnalysisError;
use crate::http::RateLimitedClient;

/// Which part of a season a game log covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeasonType {
    Regular,
    Playoffs,
}

impl SeasonType {
    fn as_query(&self) -> &'static str {
        match self {
            SeasonType::Regular => "Regular%20Season",
            SeasonType::Playoffs => "Playoffs",
        }
    }
}

impl std::fmt::Display for SeasonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SeasonType::Regular => "regular",
            SeasonType::Playoffs => "playoffs",
        })
    }
}

/// A player directory entry from `commonallplayers`
#[derive(Debug, Clone)]
struct PlayerEntry {
    id: i64,
    name: String,
}

/// Stats API client.
///
/// All traffic goes through the rate-limited HTTP client; there are no
/// retries, a failed fetch propagates to the caller.
pub struct StatsClient {
    client: RateLimitedClient,
    base_url: &'static str,
    /// Player directory, fetched once per client on first lookup
    player_index: Option<Vec<PlayerEntry>>,
}

impl StatsClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = RateLimitedClient::new(settings)?;
        Ok(Self {
            client,
            base_url: settings.api_base_url,
            player_index: None,
        })
    }

    /// Resolve a player's full name to their upstream numeric id.
    ///
    /// Matching is case-insensitive on the display name.
    pub async fn find_player_id(&mut self, full_name: &str) -> Result<i64> {
        self.ensure_player_index().await?;

        let index = self.player_index.as_deref().unwrap_or_default();
        index
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(full_name))
            .map(|entry| entry.id)
            .ok_or_else(|| AnalysisError::PlayerNotFound(full_name.to_string()).into())
    }

    /// Fetch one season of a player's game log, most-recent-first
    pub async fn fetch_game_log(
        &mut self,
        player_id: i64,
        season: &str,
        season_type: SeasonType,
    ) -> Result<Vec<GameRecord>> {
        let url = self.build_game_log_url(player_id, season, season_type);
        info!("Fetching game log for player {player_id}, season {season}");

        let payload = self.fetch_json(&url).await?;
        let records = parsers::parse_game_log(&payload)
            .with_context(|| format!("Failed to parse game log for season {season}"))?;

        info!("Fetched {} games for season {season}", records.len());
        Ok(records)
    }

    /// Fetch the set of player names on a team's roster for one season
    pub async fn fetch_team_roster(
        &mut self,
        team_id: i64,
        season: &str,
    ) -> Result<HashSet<String>> {
        let url = self.build_roster_url(team_id, season);
        info!("Fetching roster for team {team_id}, season {season}");

        let payload = self.fetch_json(&url).await?;
        let set = ResultSet::extract(&payload, "CommonTeamRoster")
            .context("Failed to parse team roster")?;

        let mut roster = HashSet::new();
        for row in set.rows() {
            roster.insert(row.string("PLAYER")?);
        }
        Ok(roster)
    }

    async fn ensure_player_index(&mut self) -> Result<()> {
        if self.player_index.is_some() {
            return Ok(());
        }

        let url = self.build_player_index_url();
        info!("Fetching player directory");

        let payload = self.fetch_json(&url).await?;
        let set = ResultSet::extract(&payload, "CommonAllPlayers")
            .context("Failed to parse player directory")?;

        let mut index = Vec::with_capacity(set.len());
        for row in set.rows() {
            index.push(PlayerEntry {
                id: row.integer("PERSON_ID")?,
                name: row.string("DISPLAY_FIRST_LAST")?,
            });
        }

        info!("Player directory holds {} players", index.len());
        self.player_index = Some(index);
        Ok(())
    }

    async fn fetch_json(&mut self, url: &str) -> Result<Value> {
        let response = self.client.get(url).await?;

        if !response.status().is_success() {
            anyhow::bail!("API returned status: {}", response.status());
        }

        response.json().await.context("Response was not valid JSON")
    }

    // --- URL builders ---

    fn build_game_log_url(&self, player_id: i64, season: &str, season_type: SeasonType) -> String {
        format!(
            "{}/playergamelog?PlayerID={}&Season={}&SeasonType={}",
            self.base_url,
            player_id,
            season,
            season_type.as_query()
        )
    }

    fn build_roster_url(&self, team_id: i64, season: &str) -> String {
        format!(
            "{}/commonteamroster?TeamID={}&Season={}",
            self.base_url, team_id, season
        )
    }

    fn build_player_index_url(&self) -> String {
        format!(
            "{}/commonallplayers?IsOnlyCurrentSeason=0&LeagueID=00&Season={}",
            self.base_url,
            crate::config::settings::SEASONS[0]
        )
    }
}
