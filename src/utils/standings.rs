use crate::api::nhl_api::{StandingsEntry, StandingsResponse};
use crate::models::{
    Conference, Division, StandingsFilter, StandingsOptions, StandingsOutcome, StandingsRow,
    StandingsView,
};

const GAMES_PER_SEASON: i64 = 82;
const POINTS_PER_WIN: i64 = 2;
/// `wildcardSequence` of the last team holding a playoff spot
const LAST_WILDCARD_SEQUENCE: u32 = 2;

const BASE_COLUMNS: [&str; 6] = ["Team", "GP", "W", "L", "OT", "PTS"];
const EXTENDED_COLUMNS: [&str; 3] = ["P%", "L10", "STRK"];

/// Map a free-text filter to a division or conference. Anything unrecognized
/// means division leaders.
pub fn resolve_filter(token: &str) -> StandingsFilter {
    match token.trim().to_lowercase().as_str() {
        "a" | "atlantic" => StandingsFilter::Division(Division::Atlantic),
        "m" | "metro" | "metropolitan" => StandingsFilter::Division(Division::Metropolitan),
        "p" | "pacific" => StandingsFilter::Division(Division::Pacific),
        "c" | "central" => StandingsFilter::Division(Division::Central),
        "w" | "west" | "western" => StandingsFilter::Conference(Conference::Western),
        "e" | "east" | "eastern" => StandingsFilter::Conference(Conference::Eastern),
        _ => StandingsFilter::DivisionLeaders,
    }
}

/// Entries selected by the filter, in payload order.
///
/// Division leaders are the first entry seen per division; the payload is
/// already sorted by points.
pub fn filter_entries(entries: &[StandingsEntry], filter: StandingsFilter) -> Vec<&StandingsEntry> {
    let name = match filter {
        StandingsFilter::DivisionLeaders => {
            let mut seen: Vec<&str> = Vec::new();
            let mut leaders = Vec::new();
            for entry in entries {
                if !seen.contains(&entry.division_name.as_str()) {
                    seen.push(entry.division_name.as_str());
                    leaders.push(entry);
                }
            }
            return leaders;
        }
        StandingsFilter::Division(division) => division.name(),
        StandingsFilter::Conference(conference) => conference.name(),
    };

    entries
        .iter()
        .filter(|entry| entry.division_name == name || entry.conference_name == name)
        .collect()
}

/// True when the team can no longer catch the last wildcard in its conference.
///
/// Ties on points go to the wildcard holder if it has more regulation wins,
/// or more regulation-plus-overtime wins.
pub fn is_eliminated(entry: &StandingsEntry, league: &[StandingsEntry]) -> bool {
    let Some(last_wildcard) = league.iter().find(|other| {
        other.conference_abbrev == entry.conference_abbrev
            && other.wildcard_sequence == LAST_WILDCARD_SEQUENCE
    }) else {
        return false;
    };

    let games_left = GAMES_PER_SEASON - i64::from(entry.games_played);
    let max_points = games_left * POINTS_PER_WIN + i64::from(entry.points);
    let wildcard_points = i64::from(last_wildcard.points);

    if wildcard_points > max_points {
        return true;
    }
    wildcard_points == max_points
        && (last_wildcard.regulation_wins > entry.regulation_wins
            || last_wildcard.regulation_plus_ot_wins > entry.regulation_plus_ot_wins)
}

/// `(e)` beats whatever clinch code the server sent
fn marker(entry: &StandingsEntry, league: &[StandingsEntry]) -> Option<String> {
    if is_eliminated(entry, league) {
        return Some("(e)".to_string());
    }
    entry
        .clinch_indicator
        .as_deref()
        .filter(|code| !code.is_empty())
        .map(|code| format!("({})", code))
}

pub fn columns(options: StandingsOptions) -> Vec<String> {
    let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();
    if options.extended {
        columns.extend(EXTENDED_COLUMNS.iter().map(|c| c.to_string()));
    }
    columns
}

fn standings_row(entry: &StandingsEntry, league: &[StandingsEntry]) -> StandingsRow {
    StandingsRow {
        team_name: entry.team_name.default.clone(),
        marker: marker(entry, league),
        games_played: entry.games_played,
        wins: entry.wins,
        losses: entry.losses,
        ot_losses: entry.ot_losses,
        points: entry.points,
        point_pctg: entry.point_pctg,
        last_ten: format!(
            "{}-{}-{}",
            entry.l10_wins, entry.l10_losses, entry.l10_ot_losses
        ),
        streak: format!("{}{}", entry.streak_code, entry.streak_count),
    }
}

/// Build the standings table for a filter, or `Unavailable` when nothing
/// matches (e.g. before the season starts).
pub fn build_standings(
    response: &StandingsResponse,
    filter: StandingsFilter,
    options: StandingsOptions,
) -> StandingsOutcome {
    let league = &response.standings;
    let selected = filter_entries(league, filter);
    if selected.is_empty() {
        return StandingsOutcome::Unavailable;
    }

    StandingsOutcome::Table(StandingsView {
        title: filter.title(),
        columns: columns(options),
        rows: selected
            .into_iter()
            .map(|entry| standings_row(entry, league))
            .collect(),
        extended: options.extended,
    })
}
