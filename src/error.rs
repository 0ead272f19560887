use thiserror::Error;

pub type BotResult<T> = Result<T, BotError>;

/// Failures owned by the I/O and setup layers. The formatting core never
/// produces these; it maps bad input to empty outcomes instead.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read simulations csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid team table: {0}")]
    Teams(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
