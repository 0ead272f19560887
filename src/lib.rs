pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod render;
pub mod teams;
pub mod utils;

pub use api::*;
pub use models::*;
pub use utils::*;

use anyhow::{Context, Result};
use api::moneypuck_api::MoneyPuckClient;
use api::nhl_api::{standings_date, NhlApiClient};
use chrono::{DateTime, Utc};
use commands::{Command, CommandRouter};
use config::BotConfig;
use render::{Message, Platform, Renderer};
use teams::TeamDirectory;
use tracing::{debug, error, info, warn};
use utils::odds::extract_odds;
use utils::schedule::normalize_game;
use utils::standings::{build_standings, resolve_filter};

const NO_GAMES_NOTICE: &str = "No games scheduled.";
const NO_STANDINGS_NOTICE: &str = "Standings available when season starts.";

/// Fetches, normalizes and renders replies to chat commands
pub struct HockeyBot {
    router: CommandRouter,
    nhl: NhlApiClient,
    moneypuck: MoneyPuckClient,
    options: StandingsOptions,
    hide_odds: bool,
    platform: Platform,
}

impl HockeyBot {
    pub fn new(config: &BotConfig) -> Result<Self> {
        let teams = TeamDirectory::load().context("Failed to load team table")?;
        Ok(Self {
            router: CommandRouter::new(teams)?,
            nhl: NhlApiClient::new(&config.nhl_api_base, config.http_timeout)?,
            moneypuck: MoneyPuckClient::new(&config.moneypuck_base, config.http_timeout)?,
            options: StandingsOptions {
                extended: config.extended_standings,
            },
            hide_odds: config.hide_odds,
            platform: config.platform,
        })
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn teams(&self) -> &TeamDirectory {
        self.router.teams()
    }

    /// Reply to a chat message on the configured platform
    pub async fn handle(&self, text: &str) -> Result<Vec<Message>> {
        self.handle_as(text, self.platform, Utc::now()).await
    }

    /// Reply to a chat message. Unrecognized messages get no reply.
    pub async fn handle_as(
        &self,
        text: &str,
        platform: Platform,
        now: DateTime<Utc>,
    ) -> Result<Vec<Message>> {
        let renderer = platform.renderer();
        match self.router.route(text) {
            Command::Standings { filter } => {
                self.standings_messages(&filter, renderer.as_ref(), now).await
            }
            Command::Team(team) => self.game_messages(&team, renderer.as_ref(), now).await,
            Command::Unknown => {
                debug!(text, "ignoring message");
                Ok(Vec::new())
            }
        }
    }

    /// Game report for a team, followed by its playoff odds. A scoreboard
    /// failure is logged and skips the game report; odds are still sent.
    pub async fn game_messages(
        &self,
        team: &Team,
        renderer: &dyn Renderer,
        now: DateTime<Utc>,
    ) -> Result<Vec<Message>> {
        info!(team = %team.abbreviation, "building game report");

        let (scoreboard, standings) = tokio::join!(
            self.nhl.fetch_scoreboard(team),
            self.nhl.fetch_standings(standings_date(now))
        );

        let mut messages = match scoreboard {
            Ok(scoreboard) => {
                let standings = match standings {
                    Ok(standings) => Some(standings),
                    Err(e) => {
                        warn!("standings unavailable, showing scores without records: {}", e);
                        None
                    }
                };
                match normalize_game(&scoreboard, team, standings.as_ref(), now) {
                    GameOutcome::Found(view) => renderer.game(team, &view),
                    GameOutcome::NoGames => vec![renderer.notice(NO_GAMES_NOTICE)],
                }
            }
            Err(e) => {
                error!(team = %team.abbreviation, "failed to fetch scoreboard: {:#}", e);
                Vec::new()
            }
        };
        messages.extend(self.odds_messages(team, renderer, now).await);
        Ok(messages)
    }

    /// MoneyPuck odds for a team. Odds are best-effort: failures are logged
    /// and produce no messages.
    pub async fn odds_messages(
        &self,
        team: &Team,
        renderer: &dyn Renderer,
        now: DateTime<Utc>,
    ) -> Vec<Message> {
        if self.hide_odds {
            return Vec::new();
        }

        let updated = match self.moneypuck.fetch_update_date().await {
            Ok(Some(updated)) => updated,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("failed to fetch simulation date: {}", e);
                return Vec::new();
            }
        };
        if utils::odds::is_stale(updated, now) {
            debug!(%updated, "skipping stale odds");
            return Vec::new();
        }

        let simulations = match self.moneypuck.fetch_simulations().await {
            Ok(body) => body,
            Err(e) => {
                error!("failed to fetch simulations: {}", e);
                return Vec::new();
            }
        };

        match extract_odds(&simulations, &team.abbreviation, updated, now) {
            OddsOutcome::Show(view) => renderer.odds(team, &view),
            OddsOutcome::NotFound => vec![renderer.notice(&format!(
                "Could not find your odds for team {}.",
                team.abbreviation
            ))],
            OddsOutcome::Stale | OddsOutcome::NothingToShow => Vec::new(),
        }
    }

    /// Standings table for a free-text filter (`central`, `west`, ...)
    pub async fn standings_messages(
        &self,
        token: &str,
        renderer: &dyn Renderer,
        now: DateTime<Utc>,
    ) -> Result<Vec<Message>> {
        let filter = resolve_filter(token);
        info!(filter = %filter.title(), "building standings");

        let response = self
            .nhl
            .fetch_standings(standings_date(now))
            .await
            .context("Failed to fetch standings")?;

        Ok(match build_standings(&response, filter, self.options) {
            StandingsOutcome::Table(view) => renderer.standings(&view),
            StandingsOutcome::Unavailable => vec![renderer.notice(NO_STANDINGS_NOTICE)],
        })
    }
}
