use super::{date_line, score_table, standings_table, status_link_line, Message, Renderer};
use crate::models::{GameView, OddsView, StandingsView, Team};

/// Shell and other text-only adapters: one line per message
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn game(&self, _team: &Team, view: &GameView) -> Vec<Message> {
        vec![
            Message::text(date_line(view)),
            Message::text(score_table(view)),
            Message::text(status_link_line(view)),
        ]
    }

    fn odds(&self, _team: &Team, view: &OddsView) -> Vec<Message> {
        vec![Message::text(format!("MoneyPuck: {}", view.lines().join(" / ")))]
    }

    fn standings(&self, view: &StandingsView) -> Vec<Message> {
        vec![Message::text(standings_table(view))]
    }
}
