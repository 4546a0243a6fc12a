pub mod analysis;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod rate_limiter;
pub mod report;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::api::SeasonType;
use crate::cli::Command;
use crate::config::AppConfig;
use crate::services::form_report::FormReportService;
use crate::services::matchup_report::MatchupReportService;
use crate::services::trend_report::TrendReportService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_matchup(
    player: &str,
    opponent: &str,
    games: usize,
    season_type: SeasonType,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = MatchupReportService::new(config)?;
        service.run(player, opponent, games, season_type).await
    })
}

pub fn handle_trend(player: &str, team: &str, decay: f64, season_type: SeasonType) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = TrendReportService::new(config)?;
        service.run(player, team, decay, season_type).await
    })
}

pub fn handle_form(
    player: &str,
    opponent: &str,
    matchups: usize,
    window: usize,
    season_type: SeasonType,
) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let mut service = FormReportService::new(config)?;
        service
            .run(player, opponent, matchups, window, season_type)
            .await
    })
}
