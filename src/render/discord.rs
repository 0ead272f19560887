use super::{date_line, fenced, score_table, standings_table, status_link_line, Message, Renderer};
use crate::models::{GameView, OddsView, StandingsView, Team};

/// Discord markdown: the whole game report goes out as a single message
pub struct DiscordRenderer;

impl Renderer for DiscordRenderer {
    fn game(&self, _team: &Team, view: &GameView) -> Vec<Message> {
        let lines = [
            date_line(view),
            fenced(&score_table(view)),
            status_link_line(view),
        ];
        vec![Message::text(lines.join("\n"))]
    }

    fn odds(&self, _team: &Team, view: &OddsView) -> Vec<Message> {
        let mut lines = vec!["__**MoneyPuck.com**__".to_string()];
        lines.extend(
            view.fields()
                .into_iter()
                .map(|(title, value)| format!("**{}:** {}", title, value)),
        );
        vec![Message::text(lines.join("\n"))]
    }

    fn standings(&self, view: &StandingsView) -> Vec<Message> {
        vec![Message::text(fenced(&standings_table(view)))]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fixtures;

    #[test]
    fn test_game_with_records() {
        let messages = DiscordRenderer.game(&fixtures::nashville(), &fixtures::live_game(true));
        assert_eq!(
            messages,
            vec![Message::text(
                "11/7/2023 - Scotiabank Saddledome; TV: BSSO (A) | SNW (H)\n\
                 ```\n  \
                 Nashville Predators (5-6-0)   2  \n  \
                 Calgary Flames (3-7-1)        3  \n\
                 ```\n\
                 09:04 3rd - https://www.nhl.com/gamecenter/2023020186"
            )]
        );
    }

    #[test]
    fn test_odds() {
        let messages = DiscordRenderer.odds(&fixtures::nashville(), &fixtures::odds());
        assert_eq!(
            messages,
            vec![Message::text(
                "__**MoneyPuck.com**__\n**Make Playoffs:** 67.5%\n**Win Stanley Cup:** 4.2%"
            )]
        );
    }

    #[test]
    fn test_standings_are_fenced() {
        let messages = DiscordRenderer.standings(&fixtures::central_leaders());
        let [Message::Text(text)] = messages.as_slice() else {
            panic!("expected one text message");
        };
        assert!(text.starts_with("```\n.-"));
        assert!(text.ends_with("'\n```"));
    }
}
