use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML deserialization failed: {0}")]
    Xml(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error: {message}")]
    Api { message: String },

    #[error("malformed date field, expected five whitespace-delimited tokens: {value:?}")]
    MalformedDateField { value: String },

    #[error("unknown state name: {name:?}")]
    UnknownStateName { name: String },

    #[error("feed did not drain after {pages} pages, aborting")]
    PageLimitExceeded { pages: usize },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
