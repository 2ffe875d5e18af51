use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Fetch of '{collection}' failed: {message}")]
    FetchFailed {
        collection: &'static str,
        message:    String,
    },

    #[error("Collection '{collection}' unavailable for this run")]
    MissingCollection { collection: &'static str },

    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type InsightsResult<T> = Result<T, InsightsError>;
