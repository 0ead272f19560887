pub mod discord;
pub mod plain;
pub mod slack;

use crate::error::BotError;
use crate::models::{GameView, OddsView, StandingsView, Team};
use crate::utils::table::AsciiTable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use discord::DiscordRenderer;
pub use plain::PlainRenderer;
pub use slack::{SlackAttachment, SlackField, SlackMessage, SlackRenderer};

/// One outbound chat message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Slack(SlackMessage),
}

impl Message {
    pub fn text(text: impl Into<String>) -> Self {
        Message::Text(text.into())
    }
}

/// Turns views into platform-specific messages
pub trait Renderer: Send + Sync {
    fn game(&self, team: &Team, view: &GameView) -> Vec<Message>;

    fn odds(&self, team: &Team, view: &OddsView) -> Vec<Message>;

    fn standings(&self, view: &StandingsView) -> Vec<Message>;

    fn notice(&self, text: &str) -> Message {
        Message::text(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    #[default]
    Plain,
    Slack,
    Discord,
}

impl Platform {
    pub fn renderer(&self) -> Box<dyn Renderer> {
        match self {
            Platform::Plain => Box::new(PlainRenderer),
            Platform::Slack => Box::new(SlackRenderer),
            Platform::Discord => Box::new(DiscordRenderer),
        }
    }
}

impl FromStr for Platform {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "plain" | "text" | "shell" => Ok(Platform::Plain),
            "slack" => Ok(Platform::Slack),
            "discord" => Ok(Platform::Discord),
            other => Err(BotError::InvalidConfig(format!("unknown platform: {}", other))),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Plain => "plain",
            Platform::Slack => "slack",
            Platform::Discord => "discord",
        };
        f.write_str(name)
    }
}

/// `M/D/YYYY - venue; TV: ...`
pub(crate) fn date_line(view: &GameView) -> String {
    format!("{} - {}", view.date_label, view.broadcast_line)
}

/// `status - https://www.nhl.com/gamecenter/<id>`
pub(crate) fn status_link_line(view: &GameView) -> String {
    format!("{} - {}", view.status_line, view.permalink)
}

pub(crate) fn score_table(view: &GameView) -> String {
    let mut table = AsciiTable::new();
    for row in &view.rows {
        table.add_row(row.cells());
    }
    table.remove_border();
    table.render()
}

pub(crate) fn standings_table(view: &StandingsView) -> String {
    let mut table = AsciiTable::with_title(&view.title);
    table.set_headings(view.columns.iter().cloned());
    for row in view.table_rows() {
        table.add_row(row);
    }
    table.render()
}

pub(crate) fn fenced(text: &str) -> String {
    format!("```\n{}\n```", text)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::models::{GameView, OddsView, ScoreRow, StandingsRow, StandingsView, Team};
    use crate::teams::TeamDirectory;

    pub fn nashville() -> Team {
        TeamDirectory::load()
            .unwrap()
            .find_by_abbreviation("NSH")
            .cloned()
            .unwrap()
    }

    pub fn live_game(with_records: bool) -> GameView {
        let (away, home) = if with_records {
            ("Nashville Predators (5-6-0)", "Calgary Flames (3-7-1)")
        } else {
            ("Nashville Predators", "Calgary Flames")
        };
        GameView {
            game_id: 2023020186,
            start_time: None,
            date_label: "11/7/2023".to_string(),
            status_line: "09:04 3rd".to_string(),
            rows: vec![
                ScoreRow { label: away.to_string(), score: Some(2) },
                ScoreRow { label: home.to_string(), score: Some(3) },
            ],
            broadcast_line: "Scotiabank Saddledome; TV: BSSO (A) | SNW (H)".to_string(),
            permalink: "https://www.nhl.com/gamecenter/2023020186".to_string(),
        }
    }

    pub fn odds() -> OddsView {
        OddsView {
            team_key: "NSH".to_string(),
            make_playoffs: Some(67.5),
            win_cup: Some(4.2),
        }
    }

    pub fn central_leaders() -> StandingsView {
        StandingsView {
            title: "Division Leaders".to_string(),
            columns: ["Team", "GP", "W", "L", "OT", "PTS"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            rows: vec![StandingsRow {
                team_name: "Dallas Stars".to_string(),
                marker: None,
                games_played: 12,
                wins: 8,
                losses: 3,
                ot_losses: 1,
                points: 17,
                point_pctg: 0.708,
                last_ten: "7-2-1".to_string(),
                streak: "W2".to_string(),
            }],
            extended: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_from_str() {
        assert_eq!("Slack".parse::<Platform>().unwrap(), Platform::Slack);
        assert_eq!("discord".parse::<Platform>().unwrap(), Platform::Discord);
        assert_eq!("".parse::<Platform>().unwrap(), Platform::Plain);
        assert!(matches!(
            "irc".parse::<Platform>(),
            Err(BotError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_score_table() {
        assert_eq!(
            score_table(&fixtures::live_game(false)),
            "  Nashville Predators   2  \n  Calgary Flames        3  "
        );
    }

    #[test]
    fn test_standings_table() {
        let table = standings_table(&fixtures::central_leaders());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].contains("Division Leaders"));
        assert!(lines[5].starts_with("| Dallas Stars | "));
    }

    #[test]
    fn test_messages_serialize_for_the_wire() {
        let messages = vec![
            Message::text("hello"),
            Message::Slack(SlackMessage::default()),
        ];
        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            serde_json::json!(["hello", { "attachments": [] }])
        );
    }
}
