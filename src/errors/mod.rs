use thiserror::Error;

/// Local, recoverable failures of the analysis core and lookups
#[derive(Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error("no player found matching '{0}'")]
    PlayerNotFound(String),

    #[error("no team found matching '{0}'")]
    TeamNotFound(String),

    #[error("cannot estimate a trend from an empty series")]
    EmptyInput,
}
