use crate::errors::AnalysisError;

/// Static NBA team directory.
///
/// Team identities are stable, so they ship with the binary instead of being
/// fetched. The ids are the upstream franchise ids used by every stats
/// endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamConfig {
    pub id: i64,
    pub abbreviation: &'static str,
    pub full_name: &'static str,
}

const TEAMS: &[TeamConfig] = &[
    TeamConfig { id: 1610612737, abbreviation: "ATL", full_name: "Atlanta Hawks" },
    TeamConfig { id: 1610612738, abbreviation: "BOS", full_name: "Boston Celtics" },
    TeamConfig { id: 1610612751, abbreviation: "BKN", full_name: "Brooklyn Nets" },
    TeamConfig { id: 1610612766, abbreviation: "CHA", full_name: "Charlotte Hornets" },
    TeamConfig { id: 1610612741, abbreviation: "CHI", full_name: "Chicago Bulls" },
    TeamConfig { id: 1610612739, abbreviation: "CLE", full_name: "Cleveland Cavaliers" },
    TeamConfig { id: 1610612742, abbreviation: "DAL", full_name: "Dallas Mavericks" },
    TeamConfig { id: 1610612743, abbreviation: "DEN", full_name: "Denver Nuggets" },
    TeamConfig { id: 1610612765, abbreviation: "DET", full_name: "Detroit Pistons" },
    TeamConfig { id: 1610612744, abbreviation: "GSW", full_name: "Golden State Warriors" },
    TeamConfig { id: 1610612745, abbreviation: "HOU", full_name: "Houston Rockets" },
    TeamConfig { id: 1610612754, abbreviation: "IND", full_name: "Indiana Pacers" },
    TeamConfig { id: 1610612746, abbreviation: "LAC", full_name: "Los Angeles Clippers" },
    TeamConfig { id: 1610612747, abbreviation: "LAL", full_name: "Los Angeles Lakers" },
    TeamConfig { id: 1610612763, abbreviation: "MEM", full_name: "Memphis Grizzlies" },
    TeamConfig { id: 1610612748, abbreviation: "MIA", full_name: "Miami Heat" },
    TeamConfig { id: 1610612749, abbreviation: "MIL", full_name: "Milwaukee Bucks" },
    TeamConfig { id: 1610612750, abbreviation: "MIN", full_name: "Minnesota Timberwolves" },
    TeamConfig { id: 1610612740, abbreviation: "NOP", full_name: "New Orleans Pelicans" },
    TeamConfig { id: 1610612752, abbreviation: "NYK", full_name: "New York Knicks" },
    TeamConfig { id: 1610612760, abbreviation: "OKC", full_name: "Oklahoma City Thunder" },
    TeamConfig { id: 1610612753, abbreviation: "ORL", full_name: "Orlando Magic" },
    TeamConfig { id: 1610612755, abbreviation: "PHI", full_name: "Philadelphia 76ers" },
    TeamConfig { id: 1610612756, abbreviation: "PHX", full_name: "Phoenix Suns" },
    TeamConfig { id: 1610612757, abbreviation: "POR", full_name: "Portland Trail Blazers" },
    TeamConfig { id: 1610612758, abbreviation: "SAC", full_name: "Sacramento Kings" },
    TeamConfig { id: 1610612759, abbreviation: "SAS", full_name: "San Antonio Spurs" },
    TeamConfig { id: 1610612761, abbreviation: "TOR", full_name: "Toronto Raptors" },
    TeamConfig { id: 1610612762, abbreviation: "UTA", full_name: "Utah Jazz" },
    TeamConfig { id: 1610612764, abbreviation: "WAS", full_name: "Washington Wizards" },
];

/// Look a team up by full name or abbreviation, case-insensitively
pub fn find_team(name: &str) -> Result<TeamConfig, AnalysisError> {
    TEAMS
        .iter()
        .find(|team| {
            team.full_name.eq_ignore_ascii_case(name)
                || team.abbreviation.eq_ignore_ascii_case(name)
        })
        .copied()
        .ok_or_else(|| AnalysisError::TeamNotFound(name.to_string()))
}
