use crate::error::BotResult;
use crate::models::{OddsOutcome, OddsRecord, OddsView};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use tracing::{debug, warn};

/// Scenario value for the all-situations season aggregate
pub const AGGREGATE_SCENARIO: &str = "ALL";
const SCENARIO_COLUMN: usize = 0;
const TEAM_COLUMN: usize = 1;
const MADE_PLAYOFFS_COLUMN: &str = "madePlayoffs";
const WON_CUP_COLUMN: &str = "wonCup";

/// Simulations older than this are not shown
const MAX_AGE_HOURS: i64 = 24;

/// Parse the simulation timestamp, e.g. `2023-11-07 06:52:52.999000-04:00`.
/// A bare `YYYY-MM-DD` is read as midnight UTC.
pub fn parse_update_date(body: &str) -> Option<DateTime<Utc>> {
    let text = body.trim();

    if let Ok(dt) = DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let date_part = text.get(..10).unwrap_or(text);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

pub fn is_stale(updated: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    now.signed_duration_since(updated) > Duration::hours(MAX_AGE_HOURS)
}

/// First all-situations row for the team
pub fn find_odds_record(csv_text: &str, team_key: &str) -> BotResult<Option<OddsRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h == name);
    let (Some(made_playoffs_col), Some(won_cup_col)) =
        (column(MADE_PLAYOFFS_COLUMN), column(WON_CUP_COLUMN))
    else {
        warn!("simulations csv is missing probability columns");
        return Ok(None);
    };

    for record in reader.records() {
        let record = record?;
        if record.get(SCENARIO_COLUMN) != Some(AGGREGATE_SCENARIO)
            || record.get(TEAM_COLUMN) != Some(team_key)
        {
            continue;
        }

        // Unparseable cells count as 0, which is never shown
        let probability = |col: usize| {
            record
                .get(col)
                .and_then(|v| v.parse::<f64>().ok())
                .unwrap_or(0.0)
        };

        return Ok(Some(OddsRecord {
            team_key: team_key.to_string(),
            made_playoffs: probability(made_playoffs_col),
            won_cup: probability(won_cup_col),
        }));
    }

    Ok(None)
}

/// Keep a percentage only when it says something: 0% and 100% are dropped
fn informative(probability: f64) -> Option<f64> {
    let pct = probability * 100.0;
    (pct > 0.0 && pct < 100.0).then_some(pct)
}

pub fn odds_view(record: &OddsRecord) -> Option<OddsView> {
    let view = OddsView {
        team_key: record.team_key.clone(),
        make_playoffs: informative(record.made_playoffs),
        win_cup: informative(record.won_cup),
    };
    if view.make_playoffs.is_none() && view.win_cup.is_none() {
        return None;
    }
    Some(view)
}

/// Turn the simulations csv into what the bot should say for a team
pub fn extract_odds(
    csv_text: &str,
    team_key: &str,
    updated: DateTime<Utc>,
    now: DateTime<Utc>,
) -> OddsOutcome {
    if is_stale(updated, now) {
        debug!(%updated, "simulations are stale");
        return OddsOutcome::Stale;
    }

    let record = match find_odds_record(csv_text, team_key) {
        Ok(Some(record)) => record,
        Ok(None) => return OddsOutcome::NotFound,
        Err(e) => {
            warn!("could not read simulations csv: {}", e);
            return OddsOutcome::NotFound;
        }
    };

    match odds_view(&record) {
        Some(view) => OddsOutcome::Show(view),
        None => {
            debug!(team_key, "no reason to show the odds");
            OddsOutcome::NothingToShow
        }
    }
}
