use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

use crate::utils::table::Cell;

/// Reads an explicit `null` the same as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A club from the static team table
#[derive(Debug, Clone)]
pub struct Team {
    pub abbreviation: String,
    pub name: String,
    pub time_zone: Tz,
    pub pattern: Regex,
    pub primary_color: String,
}

/// Upstream `gameState` codes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GameState {
    Future,
    PreGame,
    Live,
    Critical, // last five minutes
    Over,     // recently completed
    Final,
    Off, // completed, no longer focused
    Unknown(String),
}

impl From<String> for GameState {
    fn from(code: String) -> Self {
        match code.as_str() {
            "FUT" => GameState::Future,
            "PRE" => GameState::PreGame,
            "LIVE" => GameState::Live,
            "CRIT" => GameState::Critical,
            "OVER" => GameState::Over,
            "FINAL" => GameState::Final,
            "OFF" => GameState::Off,
            _ => GameState::Unknown(code),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::Unknown(String::new())
    }
}

impl GameState {
    pub fn is_before_game(&self) -> bool {
        matches!(self, GameState::Future | GameState::PreGame)
    }

    pub fn is_live(&self) -> bool {
        matches!(self, GameState::Live | GameState::Critical)
    }

    pub fn is_after_game(&self) -> bool {
        matches!(self, GameState::Over | GameState::Final | GameState::Off)
    }
}

/// Upstream `gameScheduleState`; only `OK` means the start time is firm.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ScheduleState {
    Confirmed,
    Tentative(String),
}

impl From<String> for ScheduleState {
    fn from(code: String) -> Self {
        if code == "OK" {
            ScheduleState::Confirmed
        } else {
            ScheduleState::Tentative(code)
        }
    }
}

impl Default for ScheduleState {
    fn default() -> Self {
        ScheduleState::Tentative(String::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "u8")]
pub enum GameType {
    Preseason,
    #[default]
    RegularSeason,
    Playoff,
    Other(u8),
}

impl From<u8> for GameType {
    fn from(code: u8) -> Self {
        match code {
            1 => GameType::Preseason,
            2 => GameType::RegularSeason,
            3 => GameType::Playoff,
            other => GameType::Other(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum PeriodPhase {
    #[default]
    Regulation,
    Overtime,
    Shootout,
    Other(String),
}

impl From<String> for PeriodPhase {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "REG" => PeriodPhase::Regulation,
            "OT" => PeriodPhase::Overtime,
            "SO" => PeriodPhase::Shootout,
            _ => PeriodPhase::Other(tag),
        }
    }
}

impl PeriodPhase {
    pub fn tag(&self) -> &str {
        match self {
            PeriodPhase::Regulation => "REG",
            PeriodPhase::Overtime => "OT",
            PeriodPhase::Shootout => "SO",
            PeriodPhase::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PeriodDescriptor {
    #[serde(deserialize_with = "null_as_default")]
    pub number: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub period_type: PeriodPhase,
    pub ot_periods: Option<u8>,
}

/// Best-of-seven state attached to playoff games
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesStatus {
    #[serde(deserialize_with = "null_as_default")]
    pub series_abbrev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub top_seed_team_abbrev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub top_seed_wins: u8,
    #[serde(deserialize_with = "null_as_default")]
    pub bottom_seed_team_abbrev: String,
    #[serde(deserialize_with = "null_as_default")]
    pub bottom_seed_wins: u8,
    pub game: Option<u8>,
    /// Older payloads carry the game number under this key, sometimes
    /// alongside `game`
    pub game_number_of_series: Option<u8>,
}

impl SeriesStatus {
    /// Game number within the series, 0 when upstream omits it
    pub fn game_number(&self) -> u8 {
        self.game.or(self.game_number_of_series).unwrap_or(0)
    }
}

/// One line of the score table: a team label and, once the puck drops, its score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub label: String,
    pub score: Option<u16>,
}

impl ScoreRow {
    pub fn cells(&self) -> Vec<Cell> {
        let mut cells = vec![Cell::text(&self.label)];
        if let Some(score) = self.score {
            cells.push(Cell::text(score.to_string()));
        }
        cells
    }

    /// Row text joined by single spaces
    pub fn joined(&self) -> String {
        match self.score {
            Some(score) => format!("{} {}", self.label, score),
            None => self.label.clone(),
        }
    }
}

/// Presentation record for the selected game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub game_id: u64,
    pub start_time: Option<DateTime<Utc>>,
    /// `M/D/YYYY` in the team's zone
    pub date_label: String,
    pub status_line: String,
    /// Away first, then home
    pub rows: Vec<ScoreRow>,
    pub broadcast_line: String,
    pub permalink: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameOutcome {
    Found(GameView),
    NoGames,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    Atlantic,
    Metropolitan,
    Pacific,
    Central,
}

impl Division {
    pub fn name(&self) -> &'static str {
        match self {
            Division::Atlantic => "Atlantic",
            Division::Metropolitan => "Metropolitan",
            Division::Pacific => "Pacific",
            Division::Central => "Central",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    pub fn name(&self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern",
            Conference::Western => "Western",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandingsFilter {
    #[default]
    DivisionLeaders,
    Division(Division),
    Conference(Conference),
}

impl StandingsFilter {
    pub fn title(&self) -> String {
        match self {
            StandingsFilter::DivisionLeaders => "Division Leaders".to_string(),
            StandingsFilter::Division(division) => {
                format!("{} Division Standings", division.name())
            }
            StandingsFilter::Conference(conference) => {
                format!("{} Conference Standings", conference.name())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingsOptions {
    /// Append P%, L10 and STRK columns
    pub extended: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    pub team_name: String,
    /// `(e)` when eliminated, otherwise the server clinch code in parentheses
    pub marker: Option<String>,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ot_losses: u32,
    pub points: u32,
    pub point_pctg: f64,
    pub last_ten: String,
    pub streak: String,
}

impl StandingsRow {
    pub fn label(&self) -> String {
        match &self.marker {
            Some(marker) => format!("{} {}", self.team_name, marker),
            None => self.team_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsView {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<StandingsRow>,
    pub extended: bool,
}

impl StandingsView {
    pub fn table_rows(&self) -> Vec<Vec<Cell>> {
        self.rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    Cell::text(row.label()),
                    Cell::number(row.games_played),
                    Cell::number(row.wins),
                    Cell::number(row.losses),
                    Cell::number(row.ot_losses),
                    Cell::number(row.points),
                ];
                if self.extended {
                    cells.push(Cell::text(format!("{:.3}", row.point_pctg)));
                    cells.push(Cell::text(&row.last_ten));
                    cells.push(Cell::text(&row.streak));
                }
                cells
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum StandingsOutcome {
    Table(StandingsView),
    Unavailable,
}

/// Raw simulation row for one team, probabilities in [0, 1]
#[derive(Debug, Clone, PartialEq)]
pub struct OddsRecord {
    pub team_key: String,
    pub made_playoffs: f64,
    pub won_cup: f64,
}

/// Percentages worth showing; each is strictly between 0 and 100
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OddsView {
    pub team_key: String,
    pub make_playoffs: Option<f64>,
    pub win_cup: Option<f64>,
}

impl OddsView {
    /// `(title, value)` pairs, e.g. `("Make Playoffs", "67.5%")`
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();
        if let Some(pct) = self.make_playoffs {
            fields.push(("Make Playoffs", format!("{:.1}%", pct)));
        }
        if let Some(pct) = self.win_cup {
            fields.push(("Win Stanley Cup", format!("{:.1}%", pct)));
        }
        fields
    }

    /// e.g. `67.5% to Make Playoffs`
    pub fn lines(&self) -> Vec<String> {
        self.fields()
            .into_iter()
            .map(|(title, value)| format!("{} to {}", value, title))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OddsOutcome {
    Show(OddsView),
    Stale,
    NotFound,
    NothingToShow,
}
