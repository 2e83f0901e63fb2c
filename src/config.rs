//! Application configuration loaded from environment variables.
//!
//! All variables are optional:
//! - `COINGECKO_API_URL` — overrides the default public API base URL
//! - `COINGECKO_API_KEY` — demo API key sent as `x-cg-demo-api-key`
//! - `COINWATCH_LOG` — tracing filter directive; enables file logging

/// Default public CoinGecko v3 base URL.
const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub coingecko: CoingeckoConfig,
    /// Tracing filter directive, e.g. `coinwatch=debug`. Logging is
    /// disabled when absent.
    pub log_filter: Option<String>,
}

/// CoinGecko-specific configuration values.
#[derive(Debug)]
pub struct CoingeckoConfig {
    pub api_url: String,
    pub api_key: Option<String>,
}

/// Loads the application configuration from environment variables.
///
/// The API base URL defaults to the public CoinGecko v3 endpoint and can
/// be overridden with `COINGECKO_API_URL`. The API key is optional
/// (the public endpoints are unauthenticated).
///
/// # Errors
///
/// Returns [`CoinwatchError::Config`](crate::CoinwatchError::Config) if
/// the override URL is not an http(s) URL.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let api_url = non_empty_var("COINGECKO_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

    if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
        return Err(crate::CoinwatchError::Config(format!(
            "COINGECKO_API_URL must be an http(s) URL, got {api_url:?}"
        )));
    }

    Ok(AppConfig {
        coingecko: CoingeckoConfig {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: non_empty_var("COINGECKO_API_KEY"),
        },
        log_filter: non_empty_var("COINWATCH_LOG"),
    })
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
