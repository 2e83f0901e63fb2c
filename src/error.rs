//! Crate-level error types.
//!
//! [`CoinwatchError`] unifies every error source (configuration, network,
//! JSON, navigation input) behind a single enum so callers can match on
//! the variant they care about while still using the `?` operator for
//! easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CoinwatchError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum CoinwatchError {
    /// An environment variable held an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup/teardown or log file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// A time-window string outside the enumerated selection.
    #[error("unsupported time window: {0:?}")]
    UnsupportedWindow(String),

    /// An asset identifier that is empty or not in slug format.
    #[error("invalid asset id: {0:?}")]
    InvalidAssetId(String),

    /// The upstream API could not be reached or returned a non-success
    /// status. Transient; the next window or asset change retries.
    #[error("market data unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    /// The upstream response did not match the documented shape.
    #[error("malformed market data: {0}")]
    Parse(#[from] serde_json::Error),
}
