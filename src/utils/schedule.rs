use crate::api::nhl_api::{GameDate, GameTeam, ScheduledGame, ScoreboardResponse, StandingsResponse};
use crate::models::{GameOutcome, GameType, GameView, ScheduleState, ScoreRow, Team};
use crate::utils::periods::{period_label, series_suffix};
use chrono::{DateTime, NaiveDate, Utc};

const GAMECENTER_URL: &str = "https://www.nhl.com/gamecenter";
const REGULATION_PERIODS: u8 = 3;

/// Pick the date group to show.
///
/// A group on or before the focused date that still has a game to be played
/// wins (preseason games are listed ahead of the focus window). Otherwise the
/// first group on or after the focused date.
pub fn select_date_group(scoreboard: &ScoreboardResponse, focused: NaiveDate) -> Option<&GameDate> {
    scoreboard
        .games_by_date
        .iter()
        .find(|group| {
            group.date.is_some_and(|date| date <= focused)
                && group.games.iter().any(|g| g.game_state.is_before_game())
        })
        .or_else(|| {
            scoreboard
                .games_by_date
                .iter()
                .find(|group| group.date.is_some_and(|date| date >= focused))
        })
}

/// Build the presentation record for a team's closest game.
///
/// `standings` adds `(W-L-OT)` to the score rows once a game has started.
/// `now` stands in for the focused date when the payload omits it.
pub fn normalize_game(
    scoreboard: &ScoreboardResponse,
    team: &Team,
    standings: Option<&StandingsResponse>,
    now: DateTime<Utc>,
) -> GameOutcome {
    let focused = scoreboard
        .focused_date
        .unwrap_or_else(|| now.with_timezone(&team.time_zone).date_naive());

    let Some(group) = select_date_group(scoreboard, focused) else {
        return GameOutcome::NoGames;
    };

    // Doubleheaders are not handled; the first game of the day is shown.
    let Some(game) = group.games.first() else {
        return GameOutcome::NoGames;
    };

    let (Some(away), Some(home)) = (&game.away_team, &game.home_team) else {
        return GameOutcome::NoGames;
    };

    let date_label = match game.start_time_utc {
        Some(start) => start
            .with_timezone(&team.time_zone)
            .format("%-m/%-d/%Y")
            .to_string(),
        None => group
            .date
            .map(|date| date.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default(),
    };

    GameOutcome::Found(GameView {
        game_id: game.id,
        start_time: game.start_time_utc,
        date_label,
        status_line: status_line(game, team),
        rows: vec![score_row(game, away, standings), score_row(game, home, standings)],
        broadcast_line: broadcast_line(game),
        permalink: format!("{}/{}", GAMECENTER_URL, game.id),
    })
}

/// `Final/OT`, `09:04 3rd Intermission`, `7:00 pm CST - Preseason`, ...
pub fn status_line(game: &ScheduledGame, team: &Team) -> String {
    let state = &game.game_state;
    let mut status = if state.is_after_game() {
        let periods = game.period.unwrap_or(game.period_descriptor.number);
        if periods > REGULATION_PERIODS {
            format!("Final/{}", period_label(&game.period_descriptor))
        } else {
            "Final".to_string()
        }
    } else if state.is_live() {
        let label = period_label(&game.period_descriptor);
        let clock = game.clock.clone().unwrap_or_default();
        let mut live = if clock.time_remaining.is_empty() {
            label
        } else {
            format!("{} {}", clock.time_remaining, label)
        };
        if clock.in_intermission {
            live.push_str(" Intermission");
        }
        live
    } else {
        match (state.is_before_game(), &game.game_schedule_state, game.start_time_utc) {
            (true, ScheduleState::Confirmed, Some(start)) => start
                .with_timezone(&team.time_zone)
                .format("%-I:%M %P %Z")
                .to_string(),
            _ => "TBD".to_string(),
        }
    };

    match game.game_type {
        GameType::Preseason => status.push_str(" - Preseason"),
        GameType::Playoff => {
            if let Some(series) = &game.series_status {
                status.push_str(&series_suffix(series));
            }
        }
        GameType::RegularSeason | GameType::Other(_) => {}
    }

    status
}

fn score_row(game: &ScheduledGame, side: &GameTeam, standings: Option<&StandingsResponse>) -> ScoreRow {
    let name = side.name.default.clone();

    if game.game_state.is_before_game() {
        // Season records drop off once a playoff series starts
        let label = match (&side.record, game.game_type) {
            (_, GameType::Playoff) | (None, _) => name,
            (Some(record), _) => format!("{} ({})", name, record),
        };
        return ScoreRow { label, score: None };
    }

    let label = match standings.and_then(|s| s.record_for(&side.abbrev)) {
        Some(record) => format!("{} ({})", name, record),
        None => name,
    };
    ScoreRow {
        label,
        score: Some(side.score.unwrap_or(0)),
    }
}

/// Venue, plus TV networks while the game is still watchable
pub fn broadcast_line(game: &ScheduledGame) -> String {
    let venue = game
        .venue
        .as_ref()
        .map(|v| v.default.clone())
        .unwrap_or_default();

    if game.game_state.is_after_game() || game.tv_broadcasts.is_empty() {
        return venue;
    }

    let networks: Vec<String> = game
        .tv_broadcasts
        .iter()
        .map(|b| format!("{} ({})", b.network, b.market))
        .collect();
    format!("{}; TV: {}", venue, networks.join(" | "))
}
