use crate::domain::GameRecord;

/// Keep the games played against a given opponent, most-recent-first.
///
/// Matching is a case-sensitive substring test on the matchup field, which
/// follows the upstream convention of 3-letter uppercase team codes. Input
/// order is preserved and the result is truncated to at most `limit` rows;
/// fewer matches simply yield fewer rows.
pub fn filter_and_truncate(
    log: &[GameRecord],
    opponent_token: &str,
    limit: usize,
) -> Vec<GameRecord> {
    log.iter()
        .filter(|game| game.matchup.contains(opponent_token))
        .take(limit)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stat;
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn game(id: &str, matchup: &str) -> GameRecord {
        GameRecord {
            game_id: id.to_string(),
            season_id: "22024".to_string(),
            game_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            matchup: matchup.to_string(),
            stats: HashMap::from([(Stat::Points, 20.0)]),
        }
    }

    #[test]
    fn keeps_only_opponent_games_in_order() {
        let log = vec![
            game("1", "BOS vs. MIA"),
            game("2", "BOS @ NYK"),
            game("3", "BOS @ MIA"),
            game("4", "BOS vs. PHI"),
        ];

        let kept = filter_and_truncate(&log, "MIA", 10);
        let ids: Vec<&str> = kept.iter().map(|g| g.game_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn truncates_to_the_limit() {
        let log: Vec<GameRecord> = (0..6)
            .map(|i| game(&i.to_string(), "BOS vs. MIA"))
            .collect();

        let kept = filter_and_truncate(&log, "MIA", 4);
        assert_eq!(kept.len(), 4);
        assert_eq!(kept[0].game_id, "0");
        assert_eq!(kept[3].game_id, "3");
    }

    #[test]
    fn fewer_matches_than_limit_is_not_an_error() {
        let log = vec![game("1", "BOS vs. MIA"), game("2", "BOS @ NYK")];
        assert_eq!(filter_and_truncate(&log, "MIA", 10).len(), 1);
        assert!(filter_and_truncate(&log, "LAL", 10).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let log = vec![game("1", "BOS vs. MIA")];
        assert!(filter_and_truncate(&log, "mia", 10).is_empty());
    }
}
