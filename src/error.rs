use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrewFindError {
    #[error("API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid install count: {0:?}")]
    InvalidCount(String),

    #[error("Cannot specify both --cask and --formula")]
    ConflictingFilters,
}

pub type Result<T> = std::result::Result<T, BrewFindError>;
