pub mod moneypuck_api;
pub mod nhl_api;

use crate::error::{BotError, BotResult};
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("hockey_bot/", env!("CARGO_PKG_VERSION"));

pub(crate) fn build_client(timeout: Duration) -> BotResult<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(BotError::Client)
}

/// GET a URL and reject non-2xx responses
pub(crate) async fn get_ok(client: &reqwest::Client, url: &str) -> BotResult<reqwest::Response> {
    debug!(url, "fetching");

    let response = client.get(url).send().await.map_err(|source| BotError::Http {
        url: url.to_string(),
        source,
    })?;

    if !response.status().is_success() {
        return Err(BotError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    Ok(response)
}
