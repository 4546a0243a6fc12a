use std::collections::HashMap;

use log::debug;

use crate::domain::{DeviationEntry, GameRecord, Stat, StatDeviation};

/// Compare each matchup game against the player's form around it.
///
/// `full_log` and `matchup_subset` are both most-recent-first. For a matchup
/// game at position `idx` in `full_log`, the "before" window holds the
/// `window` games at `idx+1 ..= idx+window` (chronologically earlier) and the
/// "after" window the games at `idx-window .. idx` (chronologically later).
/// Both clip at the log boundaries. A matchup game whose `game_id` is absent
/// from `full_log` is skipped rather than failing the batch.
pub fn compare_matchups(
    full_log: &[GameRecord],
    matchup_subset: &[GameRecord],
    stats: &[Stat],
    window: usize,
) -> Vec<DeviationEntry> {
    let mut entries = Vec::new();

    for game in matchup_subset {
        let Some(idx) = position_by_id(full_log, &game.game_id) else {
            debug!("matchup game {} not in full log, skipping", game.game_id);
            continue;
        };

        let before = window_before(full_log, idx, window);
        let after = window_after(full_log, idx, window);

        let mut per_stat = HashMap::new();
        for &stat in stats {
            per_stat.insert(stat, deviation_for_stat(game, stat, before, after));
        }

        entries.push(DeviationEntry {
            game_id: game.game_id.clone(),
            game_date: game.game_date,
            matchup: game.matchup.clone(),
            stats: per_stat,
        });
    }

    entries
}

fn position_by_id(log: &[GameRecord], game_id: &str) -> Option<usize> {
    log.iter().position(|g| g.game_id == game_id)
}

/// Games chronologically before the matchup: positions idx+1 ..= idx+window
fn window_before(log: &[GameRecord], idx: usize, window: usize) -> &[GameRecord] {
    let start = (idx + 1).min(log.len());
    let end = (idx + 1 + window).min(log.len());
    &log[start..end]
}

/// Games chronologically after the matchup: positions idx-window .. idx
fn window_after(log: &[GameRecord], idx: usize, window: usize) -> &[GameRecord] {
    let start = idx.saturating_sub(window);
    &log[start..idx]
}

fn deviation_for_stat(
    game: &GameRecord,
    stat: Stat,
    before: &[GameRecord],
    after: &[GameRecord],
) -> StatDeviation {
    let value = game.stat(stat);
    let before_average = window_mean(before, stat);
    let after_average = window_mean(after, stat);

    let deviation = match (value, before_average, after_average) {
        (Some(v), Some(b), Some(a)) => Some(v - (b + a) / 2.0),
        _ => None,
    };

    StatDeviation {
        value,
        before_average,
        after_average,
        deviation,
    }
}

/// Arithmetic mean of a stat over a window; None when the window is empty
fn window_mean(window: &[GameRecord], stat: Stat) -> Option<f64> {
    let values: Vec<f64> = window.iter().filter_map(|g| g.stat(stat)).collect();
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // Most-recent-first log with points descending from the latest game,
    // so position i has PTS = base - i.
    fn make_log(len: usize, base: f64) -> Vec<GameRecord> {
        (0..len)
            .map(|i| GameRecord {
                game_id: format!("00224{:05}", i),
                season_id: "22024".to_string(),
                game_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
                    - chrono::Days::new(i as u64),
                matchup: (if i % 3 == 0 { "BOS vs. MIA" } else { "BOS @ NYK" }).to_string(),
                stats: HashMap::from([(Stat::Points, base - i as f64)]),
            })
            .collect()
    }

    #[test]
    fn windows_surround_the_matchup_game() {
        let log = make_log(9, 30.0);
        // position 4 in the log, PTS = 26
        let subset = vec![log[4].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 2);
        assert_eq!(entries.len(), 1);

        let dev = &entries[0].stats[&Stat::Points];
        // before: positions 5,6 -> 25, 24; after: positions 2,3 -> 28, 27
        assert_eq!(dev.before_average, Some(24.5));
        assert_eq!(dev.after_average, Some(27.5));
        assert_eq!(dev.deviation, Some(26.0 - 26.0));
    }

    #[test]
    fn oldest_game_has_no_before_window() {
        let log = make_log(5, 20.0);
        let subset = vec![log[4].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 3);
        let dev = &entries[0].stats[&Stat::Points];
        assert_eq!(dev.before_average, None);
        assert!(dev.after_average.is_some());
        assert_eq!(dev.deviation, None);
    }

    #[test]
    fn latest_game_has_no_after_window() {
        let log = make_log(5, 20.0);
        let subset = vec![log[0].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 3);
        let dev = &entries[0].stats[&Stat::Points];
        assert!(dev.before_average.is_some());
        assert_eq!(dev.after_average, None);
        assert_eq!(dev.deviation, None);
    }

    #[test]
    fn windows_clip_at_the_boundaries() {
        let log = make_log(4, 10.0);
        // position 2: before window asks for 3 games but only position 3 exists
        let subset = vec![log[2].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 3);
        let dev = &entries[0].stats[&Stat::Points];
        assert_eq!(dev.before_average, Some(7.0));
        assert_eq!(dev.after_average, Some((10.0 + 9.0) / 2.0));
    }

    #[test]
    fn unknown_matchup_game_is_skipped() {
        let log = make_log(6, 15.0);
        let mut stranger = log[1].clone();
        stranger.game_id = "0029900001".to_string();
        let subset = vec![stranger, log[2].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 2);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].game_id, log[2].game_id);
    }

    #[test]
    fn output_follows_subset_order() {
        let log = make_log(8, 40.0);
        let subset = vec![log[6].clone(), log[1].clone(), log[3].clone()];

        let entries = compare_matchups(&log, &subset, &[Stat::Points], 2);
        let ids: Vec<&str> = entries.iter().map(|e| e.game_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                log[6].game_id.as_str(),
                log[1].game_id.as_str(),
                log[3].game_id.as_str()
            ]
        );
    }
}
