use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::Value;

use super::result_set::ResultSet;
use crate::domain::{GameRecord, Stat};

const RESULT_SET_NAME: &str = "PlayerGameLog";
// Upstream dates look like "APR 11, 2025"
const DATE_FORMAT: &str = "%b %d, %Y";

/// Map a raw `playergamelog` payload into game records.
///
/// Rows keep the upstream most-recent-first order. A malformed row fails the
/// whole parse with context rather than being dropped silently.
pub fn parse_game_log(payload: &Value) -> Result<Vec<GameRecord>> {
    let set = ResultSet::extract(payload, RESULT_SET_NAME)?;
    let mut records = Vec::with_capacity(set.len());

    for row in set.rows() {
        let game_id = row.string("Game_ID")?;
        let date_text = row.string("GAME_DATE")?;
        let game_date = parse_game_date(&date_text)
            .with_context(|| format!("Bad game date '{date_text}' in game {game_id}"))?;

        let mut stats = std::collections::HashMap::new();
        for stat in Stat::TARGETS {
            let value = row
                .number(stat.column())
                .with_context(|| format!("Bad {} value in game {game_id}", stat.column()))?;
            stats.insert(stat, value);
        }

        records.push(GameRecord {
            game_id,
            season_id: row.string("SEASON_ID")?,
            game_date,
            matchup: row.string("MATCHUP")?,
            stats,
        });
    }

    Ok(records)
}

fn parse_game_date(text: &str) -> Result<NaiveDate> {
    // chrono matches month names case-insensitively, so the upstream
    // all-caps form parses as-is
    NaiveDate::parse_from_str(text, DATE_FORMAT).context("Unrecognized date format")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload() -> Value {
        json!({
            "resource": "playergamelog",
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": [
                    "SEASON_ID", "Player_ID", "Game_ID", "GAME_DATE", "MATCHUP",
                    "WL", "MIN", "PTS", "REB", "AST", "FG3M", "FG3A"
                ],
                "rowSet": [
                    ["22024", 1628369, "0022401101", "APR 11, 2025", "BOS vs. MIA",
                     "W", 36, 32, 9, 5, 4, 11],
                    ["22024", 1628369, "0022401087", "APR 09, 2025", "BOS @ NYK",
                     "L", 38, 27, 11, 7, 2, 8]
                ]
            }]
        })
    }

    #[test]
    fn maps_rows_into_game_records() {
        let records = parse_game_log(&payload()).unwrap();
        assert_eq!(records.len(), 2);

        let latest = &records[0];
        assert_eq!(latest.game_id, "0022401101");
        assert_eq!(latest.season_id, "22024");
        assert_eq!(latest.game_date, NaiveDate::from_ymd_opt(2025, 4, 11).unwrap());
        assert_eq!(latest.matchup, "BOS vs. MIA");
        assert_eq!(latest.stat(Stat::Points), Some(32.0));
        assert_eq!(latest.stat(Stat::ThreesAttempted), Some(11.0));
    }

    #[test]
    fn preserves_most_recent_first_order() {
        let records = parse_game_log(&payload()).unwrap();
        assert!(records[0].game_date > records[1].game_date);
    }

    #[test]
    fn malformed_date_fails_the_parse() {
        let mut bad = payload();
        bad["resultSets"][0]["rowSet"][0][3] = json!("2025-04-11");
        assert!(parse_game_log(&bad).is_err());
    }

    #[test]
    fn missing_stat_column_fails_the_parse() {
        let bad = json!({
            "resultSets": [{
                "name": "PlayerGameLog",
                "headers": ["SEASON_ID", "Game_ID", "GAME_DATE", "MATCHUP", "PTS"],
                "rowSet": [["22024", "0022401101", "APR 11, 2025", "BOS vs. MIA", 32]]
            }]
        });
        assert!(parse_game_log(&bad).is_err());
    }
}
