pub mod settings;
pub mod teams;

pub use settings::{AnalysisSettings, AppConfig, ScraperSettings};
pub use teams::{TeamConfig, find_team};
