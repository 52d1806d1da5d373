use crate::error::ApiError;
use reqwest::Url;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3000/api/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub timeout: Duration,
    /// Bearer token to start with (e.g. from a previous `login`).
    pub token: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ClientConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            token: None,
        }
    }

    /// Reads `BLUI_API_URL`, `BLUI_TIMEOUT_SECS` and `BLUI_TOKEN`.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("BLUI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            timeout: Duration::from_secs(
                env::var("BLUI_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            token: env::var("BLUI_TOKEN").ok().filter(|t| !t.is_empty()),
        }
    }

    /// Parsed base URL, always ending in `/` so relative endpoint paths join under it.
    pub fn base_url(&self) -> Result<Url, ApiError> {
        let mut raw = self.api_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ApiError::Config(format!("{}: {}", raw, e)))?;
        if url.cannot_be_a_base() {
            return Err(ApiError::Config(format!("{} cannot be a base URL", raw)));
        }
        Ok(url)
    }
}
