use anyhow::Result;

use bucket_book::cli::Command;
use bucket_book::{handle_form, handle_matchup, handle_trend, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Matchup {
            player,
            opponent,
            games,
            season_type,
        } => handle_matchup(player, opponent, *games, *season_type),
        Command::Trend {
            player,
            team,
            decay,
            season_type,
        } => handle_trend(player, team, *decay, *season_type),
        Command::Form {
            player,
            opponent,
            matchups,
            window,
            season_type,
        } => handle_form(player, opponent, *matchups, *window, *season_type),
    }
}
