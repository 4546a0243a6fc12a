pub mod form_report;
pub mod history;
pub mod matchup_report;
pub mod trend_report;

pub use form_report::FormReportService;
pub use matchup_report::MatchupReportService;
pub use trend_report::TrendReportService;
