use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("GitHub API error: {0}")]
    GitHubApi(String),

    #[error("GitHub GraphQL error: {0}")]
    GraphQl(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

/// The two outcomes a caller of the aggregation can observe on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserNotFound,
    FetchFailed,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UserNotFound(_) => ErrorKind::UserNotFound,
            _ => ErrorKind::FetchFailed,
        }
    }
}

/// JSON body returned to HTTP clients when a lookup fails.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    pub fn from_error(err: &Error, username: &str) -> Self {
        match err.kind() {
            ErrorKind::UserNotFound => Self {
                error: "User not found".to_string(),
                message: format!("No GitHub user found with username '{}'.", username),
            },
            ErrorKind::FetchFailed => Self {
                error: err.to_string(),
                message: "Failed to fetch data from GitHub API".to_string(),
            },
        }
    }
}
