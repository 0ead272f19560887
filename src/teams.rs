use crate::error::{BotError, BotResult};
use crate::models::Team;
use chrono_tz::Tz;
use regex::Regex;
use serde::Deserialize;

const TEAMS_JSON: &str = include_str!("../data/teams.json");

/// One entry of `data/teams.json`
#[derive(Debug, Deserialize)]
struct TeamRecord {
    abbreviation: String,
    name: String,
    time_zone: Tz,
    regex: String,
    primary_color: String,
}

/// Read-only table of every club the bot answers for
#[derive(Debug, Clone)]
pub struct TeamDirectory {
    teams: Vec<Team>,
}

impl TeamDirectory {
    /// Load the embedded team table
    pub fn load() -> BotResult<Self> {
        Self::from_json(TEAMS_JSON)
    }

    pub fn from_json(json: &str) -> BotResult<Self> {
        let records: Vec<TeamRecord> = serde_json::from_str(json)
            .map_err(|e| BotError::Teams(format!("invalid team table: {}", e)))?;

        let teams = records
            .into_iter()
            .map(|record| {
                let pattern = Regex::new(&format!("(?i)^(?:{})$", record.regex)).map_err(|e| {
                    BotError::Teams(format!("bad pattern for {}: {}", record.abbreviation, e))
                })?;
                Ok(Team {
                    abbreviation: record.abbreviation,
                    name: record.name,
                    time_zone: record.time_zone,
                    pattern,
                    primary_color: record.primary_color,
                })
            })
            .collect::<BotResult<Vec<_>>>()?;

        Ok(Self { teams })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn find_by_abbreviation(&self, abbreviation: &str) -> Option<&Team> {
        self.teams
            .iter()
            .find(|team| team.abbreviation.eq_ignore_ascii_case(abbreviation))
    }

    /// First team whose pattern matches the whole message
    pub fn match_text(&self, text: &str) -> Option<&Team> {
        let text = text.trim();
        self.teams.iter().find(|team| team.pattern.is_match(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_all_clubs() {
        let teams = TeamDirectory::load().unwrap();
        assert_eq!(teams.teams().len(), 32);

        let nsh = teams.find_by_abbreviation("nsh").unwrap();
        assert_eq!(nsh.name, "Nashville Predators");
        assert_eq!(nsh.time_zone, chrono_tz::America::Chicago);
        assert_eq!(nsh.primary_color, "#FFB81C");
    }

    #[test]
    fn test_match_text() {
        let teams = TeamDirectory::load().unwrap();
        let matched = |text: &str| teams.match_text(text).map(|t| t.abbreviation.as_str());

        assert_eq!(matched("preds"), Some("NSH"));
        assert_eq!(matched("Nashville Predators"), Some("NSH"));
        assert_eq!(matched("  PREDATORS "), Some("NSH"));
        assert_eq!(matched("st. louis"), Some("STL"));
        assert_eq!(matched("montréal canadiens"), Some("MTL"));
        assert_eq!(matched("ny rangers"), Some("NYR"));
        // whole-message match only
        assert_eq!(matched("go preds go"), None);
        assert_eq!(matched("nhl"), None);
    }

    #[test]
    fn test_full_names_resolve_to_their_club() {
        let teams = TeamDirectory::load().unwrap();
        for team in teams.teams() {
            let text = team.name.to_lowercase();
            assert_eq!(
                teams.match_text(&text).map(|t| t.abbreviation.as_str()),
                Some(team.abbreviation.as_str()),
                "{} resolved to the wrong club",
                team.name
            );
        }
    }

    #[test]
    fn test_invalid_table() {
        let bad_zone = r##"[{"abbreviation":"XXX","name":"X","time_zone":"Mars/Olympus","regex":"x","primary_color":"#000"}]"##;
        assert!(matches!(TeamDirectory::from_json(bad_zone), Err(BotError::Teams(_))));

        let bad_regex = r##"[{"abbreviation":"XXX","name":"X","time_zone":"UTC","regex":"(x","primary_color":"#000"}]"##;
        assert!(matches!(TeamDirectory::from_json(bad_regex), Err(BotError::Teams(_))));
    }
}
