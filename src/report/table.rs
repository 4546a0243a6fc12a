use colored::Colorize;

use crate::domain::{DeviationEntry, GameRecord, Stat, TrendResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Print a section heading
pub fn heading(text: &str) {
    println!("\n{}", text.bold().cyan());
}

/// Render a game log slice as a fixed-width table
pub fn render_game_table(records: &[GameRecord], stats: &[Stat]) -> String {
    let mut header = vec![
        pad("DATE", 12),
        pad("MATCHUP", 14),
        pad("SEASON", 8),
    ];
    header.extend(stats.iter().map(|s| pad(s.column(), 6)));

    let mut lines = vec![header.join(" ")];
    for record in records {
        let mut cells = vec![
            pad(&record.game_date.format(DATE_FORMAT).to_string(), 12),
            pad(&record.matchup, 14),
            pad(&record.season_id, 8),
        ];
        for &stat in stats {
            let cell = record
                .stat(stat)
                .map(format_value)
                .unwrap_or_else(|| "-".to_string());
            cells.push(pad(&cell, 6));
        }
        lines.push(cells.join(" "));
    }

    lines.join("\n")
}

/// Render one stat's trend result as a report line
pub fn render_trend_line(stat: Stat, trend: &TrendResult) -> String {
    let raw: Vec<String> = trend.raw_values.iter().map(|v| format_value(*v)).collect();
    format!(
        "{} weighted avg {}, consistency {}  [{}]",
        pad(stat.label(), 10),
        trend.rounded_average(),
        trend.rounded_dispersion(),
        raw.join(", ")
    )
}

/// Render a matchup's before/after comparison as a block of stat lines
pub fn render_deviation_block(entry: &DeviationEntry, stats: &[Stat]) -> String {
    let mut lines = vec![format!(
        "{}  {}",
        entry.game_date.format(DATE_FORMAT),
        entry.matchup.bold()
    )];

    lines.push(format!(
        "  {} {} {} {} {}",
        pad("STAT", 10),
        pad("GAME", 8),
        pad("BEFORE", 8),
        pad("AFTER", 8),
        pad("DEV", 8)
    ));

    for &stat in stats {
        let Some(dev) = entry.stats.get(&stat) else {
            continue;
        };
        lines.push(format!(
            "  {} {} {} {} {}",
            pad(stat.column(), 10),
            pad(&optional_value(dev.value), 8),
            pad(&optional_value(dev.before_average), 8),
            pad(&optional_value(dev.after_average), 8),
            pad(&optional_signed(dev.deviation), 8)
        ));
    }

    lines.join("\n")
}

fn optional_value(value: Option<f64>) -> String {
    value.map(format_rounded).unwrap_or_else(|| "-".to_string())
}

fn optional_signed(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}{}", if v >= 0.0 { "+" } else { "" }, format_rounded(v)),
        None => "-".to_string(),
    }
}

fn format_rounded(value: f64) -> String {
    format!("{:.1}", value)
}

/// Whole numbers print without the trailing ".0" the raw floats carry
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}
