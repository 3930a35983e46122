use crate::error::AppError;
use governor::{clock::{Clock, DefaultClock}, state::{InMemoryState, NotKeyed}, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;

use super::models::*;

const BASE_URL: &str = "https://ddragon.leagueoflegends.com";
const MAX_RETRIES: u32 = 3;
const RETRY_DELAY_MS: u64 = 2000;

pub struct DataDragonClient {
    base_url: String,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl Default for DataDragonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl DataDragonClient {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        // The CDN is not metered, but stay polite
        let rate_limiter = RateLimiter::direct(Quota::per_second(NonZeroU32::new(10).unwrap_or(NonZeroU32::MIN)));
        DataDragonClient {
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter,
        }
    }

    /// How long until the limiter admits another request, if it is saturated.
    fn throttle_delay(&self) -> Option<Duration> {
        self.rate_limiter
            .check()
            .err()
            .map(|not_until| not_until.wait_time_from(DefaultClock::default().now()))
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            while let Some(wait) = self.throttle_delay() {
                thread::sleep(wait);
            }

            tracing::debug!(url, attempt = retry_count + 1, "GET");
            let response = ureq::get(url)
                .set("User-Agent", "league_draft/0.1.0")
                .call();

            match response {
                Ok(resp) => {
                    return resp.into_string().map_err(|e| {
                        AppError::HttpError(e.to_string())
                    });
                }
                Err(ureq::Error::Status(429, _)) => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::RateLimited);
                    }
                    let wait_ms = RETRY_DELAY_MS * (retry_count + 1) as u64;
                    tracing::warn!(wait_ms, "rate limited by Data Dragon, retrying");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }

    /// Published patch versions, newest first.
    pub fn get_versions(&self) -> Result<Vec<String>, AppError> {
        let url = format!("{}/api/versions.json", self.base_url);
        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    pub fn get_champions(&self, version: &str, language: &str) -> Result<DataDragonChampions, AppError> {
        let url = format!(
            "{}/cdn/{}/data/{}/champion.json",
            self.base_url, version, language
        );

        let body = self.execute_request(&url)?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::JsonError(e.to_string())
        })
    }

    pub fn image_url(&self, version: &str, champion_id: &str) -> String {
        format!("{}/cdn/{}/img/champion/{}.png", self.base_url, version, champion_id)
    }
}
