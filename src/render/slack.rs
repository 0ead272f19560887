use super::{fenced, score_table, standings_table, Message, Renderer};
use crate::models::{GameView, OddsView, StandingsView, Team};
use serde::Serialize;

const NHL_AUTHOR_NAME: &str = "NHL.com";
const NHL_AUTHOR_LINK: &str = "https://nhl.com";
const NHL_AUTHOR_ICON: &str = "https://github.com/nhl.png";

const MONEYPUCK_AUTHOR_NAME: &str = "MoneyPuck.com";
const MONEYPUCK_AUTHOR_LINK: &str = "https://moneypuck.com";
const MONEYPUCK_LOGOS_URL: &str = "https://peter-tanner.com/moneypuck/logos";

/// Slack `chat.postMessage` body with legacy attachments
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlackMessage {
    pub attachments: Vec<SlackAttachment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlackAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<SlackField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlackField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

pub struct SlackRenderer;

impl SlackRenderer {
    /// `11/7/2023 - Nashville Predators 2, Calgary Flames 3 (09:04 3rd)`
    fn game_fallback(view: &GameView) -> String {
        let rows: Vec<String> = view.rows.iter().map(|row| row.joined()).collect();
        format!("{} - {} ({})", view.date_label, rows.join(", "), view.status_line)
    }
}

impl Renderer for SlackRenderer {
    fn game(&self, team: &Team, view: &GameView) -> Vec<Message> {
        let attachment = SlackAttachment {
            fallback: Some(Self::game_fallback(view)),
            title: Some(format!("{} - {}", view.date_label, view.status_line)),
            title_link: Some(view.permalink.clone()),
            author_name: Some(NHL_AUTHOR_NAME.to_string()),
            author_link: Some(NHL_AUTHOR_LINK.to_string()),
            author_icon: Some(NHL_AUTHOR_ICON.to_string()),
            color: Some(team.primary_color.clone()),
            text: Some(fenced(&score_table(view))),
            footer: Some(view.broadcast_line.clone()),
            mrkdwn_in: vec!["text".to_string(), "pretext".to_string()],
            ..SlackAttachment::default()
        };
        vec![Message::Slack(SlackMessage {
            attachments: vec![attachment],
        })]
    }

    fn odds(&self, team: &Team, view: &OddsView) -> Vec<Message> {
        let attachment = SlackAttachment {
            fallback: Some(format!("MoneyPuck: {}", view.lines().join(" / "))),
            title: Some(team.name.clone()),
            author_name: Some(MONEYPUCK_AUTHOR_NAME.to_string()),
            author_link: Some(MONEYPUCK_AUTHOR_LINK.to_string()),
            author_icon: Some(format!("{}/moneypucklogo.png", MONEYPUCK_LOGOS_URL)),
            thumb_url: Some(format!("{}/{}.png", MONEYPUCK_LOGOS_URL, team.abbreviation)),
            color: Some(team.primary_color.clone()),
            fields: view
                .fields()
                .into_iter()
                .map(|(title, value)| SlackField {
                    title: title.to_string(),
                    value,
                    short: false,
                })
                .collect(),
            ..SlackAttachment::default()
        };
        vec![Message::Slack(SlackMessage {
            attachments: vec![attachment],
        })]
    }

    fn standings(&self, view: &StandingsView) -> Vec<Message> {
        vec![Message::text(fenced(&standings_table(view)))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;
    use serde_json::json;

    #[test]
    fn test_game_attachment() {
        let messages = SlackRenderer.game(&fixtures::nashville(), &fixtures::live_game(false));
        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            json!([{
                "attachments": [{
                    "fallback": "11/7/2023 - Nashville Predators 2, Calgary Flames 3 (09:04 3rd)",
                    "title": "11/7/2023 - 09:04 3rd",
                    "title_link": "https://www.nhl.com/gamecenter/2023020186",
                    "author_name": "NHL.com",
                    "author_link": "https://nhl.com",
                    "author_icon": "https://github.com/nhl.png",
                    "color": "#FFB81C",
                    "text": "```\n  Nashville Predators   2  \n  Calgary Flames        3  \n```",
                    "footer": "Scotiabank Saddledome; TV: BSSO (A) | SNW (H)",
                    "mrkdwn_in": ["text", "pretext"]
                }]
            }])
        );
    }

    #[test]
    fn test_odds_attachment() {
        let messages = SlackRenderer.odds(&fixtures::nashville(), &fixtures::odds());
        assert_eq!(
            serde_json::to_value(&messages).unwrap(),
            json!([{
                "attachments": [{
                    "fallback": "MoneyPuck: 67.5% to Make Playoffs / 4.2% to Win Stanley Cup",
                    "title": "Nashville Predators",
                    "author_name": "MoneyPuck.com",
                    "author_link": "https://moneypuck.com",
                    "author_icon": "https://peter-tanner.com/moneypuck/logos/moneypucklogo.png",
                    "thumb_url": "https://peter-tanner.com/moneypuck/logos/NSH.png",
                    "color": "#FFB81C",
                    "fields": [
                        { "title": "Make Playoffs", "value": "67.5%", "short": false },
                        { "title": "Win Stanley Cup", "value": "4.2%", "short": false }
                    ]
                }]
            }])
        );
    }

    #[test]
    fn test_standings_are_plain_fenced_text() {
        let messages = SlackRenderer.standings(&fixtures::central_leaders());
        assert!(matches!(messages.as_slice(), [Message::Text(text)] if text.starts_with("```\n")));
    }
}
