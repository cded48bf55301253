use thiserror::Error;

/// Fatal errors: any of these aborts the run before (or while) the CSV is written.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Request to {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Found {prices} price tiles but {names} name tiles, refusing to pair them")]
    Mismatch { prices: usize, names: usize },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Data-quality problems with a single product tile. The record is skipped.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("price text {0:?} is not a valid amount")]
    InvalidPrice(String),

    #[error("name tile has no second line")]
    MissingSecondLine,

    #[error("no serving clause in {0:?}")]
    MissingServingClause(String),

    #[error("empty product name in {0:?}")]
    EmptyName(String),

    #[error("serving count {0:?} is not a number")]
    InvalidServings(String),

    #[error("serving count is zero")]
    ZeroServings,

    #[error("could not decode HTML entities: {0}")]
    Entity(String),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
