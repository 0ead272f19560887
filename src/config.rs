use crate::api::moneypuck_api::MONEYPUCK_BASE_URL;
use crate::api::nhl_api::NHL_API_BASE_URL;
use crate::error::{BotError, BotResult};
use crate::render::Platform;
use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Runtime settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    /// Append P%, L10 and STRK to standings tables
    pub extended_standings: bool,
    /// Never fetch or show MoneyPuck odds
    pub hide_odds: bool,
    pub platform: Platform,
    pub bind_addr: String,
    pub nhl_api_base: String,
    pub moneypuck_base: String,
    pub http_timeout: Duration,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            extended_standings: false,
            hide_odds: false,
            platform: Platform::Plain,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            nhl_api_base: NHL_API_BASE_URL.to_string(),
            moneypuck_base: MONEYPUCK_BASE_URL.to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl BotConfig {
    pub fn from_env() -> BotResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> BotResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        // Toggles also answer to the older HUBOT_-prefixed names
        let toggle = |key: &str| {
            lookup(key)
                .or_else(|| lookup(&format!("HUBOT_{}", key)))
                .is_some_and(|v| is_enabled(&v))
        };

        let platform = match lookup("HOCKEY_PLATFORM") {
            Some(value) => value.parse()?,
            None => defaults.platform,
        };

        let http_timeout = match lookup("HOCKEY_HTTP_TIMEOUT_SECS") {
            Some(value) => {
                let secs: u64 = value.trim().parse().map_err(|_| {
                    BotError::InvalidConfig(format!(
                        "HOCKEY_HTTP_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                        value
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => defaults.http_timeout,
        };

        Ok(Self {
            extended_standings: toggle("HOCKEY_EXT_STANDINGS"),
            hide_odds: toggle("HOCKEY_HIDE_ODDS"),
            platform,
            bind_addr: lookup("HOCKEY_BIND_ADDR").unwrap_or(defaults.bind_addr),
            nhl_api_base: lookup("NHL_API_BASE").unwrap_or(defaults.nhl_api_base),
            moneypuck_base: lookup("MONEYPUCK_BASE").unwrap_or(defaults.moneypuck_base),
            http_timeout,
        })
    }
}

/// Set and not `0`, `false` or `no`
fn is_enabled(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    !value.is_empty() && !matches!(value.as_str(), "0" | "false" | "no")
}
