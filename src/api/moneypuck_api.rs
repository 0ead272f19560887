use crate::api::{build_client, get_ok};
use crate::error::{BotError, BotResult};
use crate::utils::odds::parse_update_date;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tracing::warn;

pub const MONEYPUCK_BASE_URL: &str = "https://moneypuck.com";

const UPDATE_DATE_PATH: &str = "/moneypuck/simulations/update_date.txt";
const SIMULATIONS_PATH: &str = "/moneypuck/simulations/simulations_recent.csv";

/// Client for MoneyPuck's season simulation files
pub struct MoneyPuckClient {
    client: reqwest::Client,
    base_url: String,
}

impl MoneyPuckClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> BotResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// When the simulations were last run. `None` if the body is not a timestamp.
    pub async fn fetch_update_date(&self) -> BotResult<Option<DateTime<Utc>>> {
        let body = self.get_text(UPDATE_DATE_PATH).await?;
        let updated = parse_update_date(&body);
        if updated.is_none() {
            warn!(body = body.trim(), "unrecognized simulation update date");
        }
        Ok(updated)
    }

    /// Raw simulations csv
    pub async fn fetch_simulations(&self) -> BotResult<String> {
        self.get_text(SIMULATIONS_PATH).await
    }

    async fn get_text(&self, path: &str) -> BotResult<String> {
        let url = format!("{}{}", self.base_url, path);
        get_ok(&self.client, &url)
            .await?
            .text()
            .await
            .map_err(|source| BotError::Http { url, source })
    }
}
