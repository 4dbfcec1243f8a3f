use thiserror::Error;
use url::Url;

/// Failure reported by the transport before a status line was available.
#[derive(Error, Debug)]
pub enum TransportFailure {
    #[error("connection failed: {0}")]
    Connect(String),

    #[error("connect timeout elapsed")]
    Timeout,

    #[error("request dropped before a reply arrived")]
    Dropped,
}

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("transport failure for {url}: {source}")]
    TransportError { url: Url, source: TransportFailure },

    #[error("API request to {url} failed with status {status} {message}")]
    ApiError {
        url: Url,
        status: u16,
        message: String,
    },

    #[error("failed to decode response body from {url}: {source}")]
    DecodeError {
        url: Url,
        source: serde_json::Error,
    },

    #[error("empty response body from {url}")]
    EmptyBodyError { url: Url },

    #[error("failed to build HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid configuration value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, FeedError>;
