use crate::api::{build_client, get_ok};
use crate::error::{BotError, BotResult};
use crate::models::{
    null_as_default, GameState, GameType, PeriodDescriptor, ScheduleState, SeriesStatus, Team,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::time::Duration;

pub const NHL_API_BASE_URL: &str = "https://api-web.nhle.com";

/// Standings are keyed by the league's Pacific-time calendar day
const STANDINGS_TIME_ZONE: chrono_tz::Tz = chrono_tz::America::Los_Angeles;

/// `GET /v1/scoreboard/{team}/now`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreboardResponse {
    pub focused_date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub games_by_date: Vec<GameDate>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameDate {
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "null_as_default")]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduledGame {
    pub id: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub game_type: GameType,
    #[serde(deserialize_with = "null_as_default")]
    pub game_state: GameState,
    #[serde(deserialize_with = "null_as_default")]
    pub game_schedule_state: ScheduleState,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: Option<DateTime<Utc>>,
    pub venue: Option<LocalizedName>,
    #[serde(deserialize_with = "null_as_default")]
    pub tv_broadcasts: Vec<Broadcast>,
    pub away_team: Option<GameTeam>,
    pub home_team: Option<GameTeam>,
    pub clock: Option<GameClock>,
    pub period: Option<u8>,
    #[serde(deserialize_with = "null_as_default")]
    pub period_descriptor: PeriodDescriptor,
    pub series_status: Option<SeriesStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    #[serde(deserialize_with = "null_as_default")]
    pub default: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Broadcast {
    #[serde(deserialize_with = "null_as_default")]
    pub network: String,
    #[serde(deserialize_with = "null_as_default")]
    pub market: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GameTeam {
    #[serde(deserialize_with = "null_as_default")]
    pub abbrev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: LocalizedName,
    pub score: Option<u16>,
    /// `W-L-OT`, only present before puck drop
    pub record: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameClock {
    #[serde(deserialize_with = "null_as_default")]
    pub time_remaining: String,
    #[serde(deserialize_with = "null_as_default")]
    pub in_intermission: bool,
}

/// `GET /v1/standings/{date}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StandingsResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub standings: Vec<StandingsEntry>,
}

impl StandingsResponse {
    /// `W-L-OT` for a team abbreviation, if the team is in the table
    pub fn record_for(&self, abbrev: &str) -> Option<String> {
        self.standings
            .iter()
            .find(|entry| entry.team_abbrev.default == abbrev)
            .map(|entry| format!("{}-{}-{}", entry.wins, entry.losses, entry.ot_losses))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StandingsEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub team_name: LocalizedName,
    #[serde(deserialize_with = "null_as_default")]
    pub team_abbrev: LocalizedName,
    #[serde(deserialize_with = "null_as_default")]
    pub division_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub conference_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub conference_abbrev: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
    pub point_pctg: f64,
    pub l10_wins: u32,
    pub l10_losses: u32,
    pub l10_ot_losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub streak_code: String,
    pub streak_count: u32,
    pub wildcard_sequence: u32,
    pub regulation_wins: u32,
    pub regulation_plus_ot_wins: u32,
    pub clinch_indicator: Option<String>,
}

pub struct NhlApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl NhlApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> BotResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the team-scoped scoreboard around today
    pub async fn fetch_scoreboard(&self, team: &Team) -> BotResult<ScoreboardResponse> {
        let url = format!(
            "{}/v1/scoreboard/{}/now",
            self.base_url,
            team.abbreviation.to_lowercase()
        );
        self.get_json(&url).await
    }

    /// Fetch league-wide standings as of a calendar day
    pub async fn fetch_standings(&self, date: NaiveDate) -> BotResult<StandingsResponse> {
        let url = format!("{}/v1/standings/{}", self.base_url, date.format("%Y-%m-%d"));
        self.get_json(&url).await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> BotResult<T> {
        let body = get_ok(&self.client, url)
            .await?
            .text()
            .await
            .map_err(|source| BotError::Http {
                url: url.to_string(),
                source,
            })?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Calendar day used for the standings endpoint
pub fn standings_date(now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&STANDINGS_TIME_ZONE).date_naive()
}
