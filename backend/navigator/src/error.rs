use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("No route matches {0}")]
    NoRoute(String),

    #[error("No history entry to move to")]
    NoHistoryEntry,

    #[error("Invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response status {0}")]
    UnexpectedStatus(u16),

    #[error("Submission answered without a redirect")]
    MissingRedirect,
}
