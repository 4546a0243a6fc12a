use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue, ORIGIN, REFERER};

use crate::config::ScraperSettings;
use crate::rate_limiter::RateLimiter;

/// HTTP client with built-in rate limiting and the stats API's header set.
///
/// stats.nba.com rejects requests without a browser-like referer/origin and
/// its own `x-nba-stats-*` markers, so those are baked into every request.
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings)?;
        let rate_limiter = RateLimiter::new(settings.rate_limit_ms);

        Ok(Self {
            client,
            rate_limiter,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.rate_limiter.wait().await;
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {url}"))
    }

    fn build_client(settings: &ScraperSettings) -> Result<Client> {
        Client::builder()
            .user_agent(settings.user_agent)
            .default_headers(Self::stats_headers())
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    fn stats_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(REFERER, HeaderValue::from_static("https://stats.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));
        headers
    }
}
