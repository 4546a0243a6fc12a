/// Season strings understood by the stats API, newest first.
///
/// Matchup history accumulates across these until enough games are found.
pub const SEASONS: &[&str] = &[
    "2024-25", "2023-24", "2022-23", "2021-22", "2020-21", "2019-20",
];

pub struct AnalysisSettings {
    /// How many recent games feed the trend estimator
    pub recent_games: usize,
    /// Hard cap on any caller-supplied game count
    pub max_games: usize,
    /// Per-step multiplicative weight reduction for older games
    pub decay: f64,
    /// Matchup games examined by the form comparison
    pub num_matchups: usize,
    /// Games on each side of a matchup used as its local baseline
    pub matchup_window: usize,
    pub seasons: &'static [&'static str],
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            recent_games: 10,
            max_games: 20,
            decay: 0.9,
            num_matchups: 5,
            matchup_window: 5,
            seasons: SEASONS,
        }
    }
}

pub struct ScraperSettings {
    pub rate_limit_ms: u64,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
    pub api_base_url: &'static str,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            rate_limit_ms: 600, // stats API throttles aggressively
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
            timeout_secs: 30,
            api_base_url: "https://stats.nba.com/stats",
        }
    }
}

pub struct AppConfig {
    pub analysis: AnalysisSettings,
    pub scraper: ScraperSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            analysis: AnalysisSettings::default(),
            scraper: ScraperSettings::default(),
        }
    }

    /// Clamp a caller-supplied game count to [1, max_games]
    pub fn clamp_games(&self, games: usize) -> usize {
        games.clamp(1, self.analysis.max_games)
    }
}
