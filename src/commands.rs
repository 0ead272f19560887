use crate::error::{BotError, BotResult};
use crate::models::Team;
use crate::teams::TeamDirectory;
use regex::Regex;

const STANDINGS_PATTERN: &str = r"(?i)^nhl(?:\s+(.*?))?(?:\s+standings)?$";
const MENTION_PATTERN: &str = r"(?i)^\s*(?:<@\w+>|@?(?:hubot|hockeybot))[:,]?\s*";

/// What a chat message asks for
#[derive(Debug, Clone)]
pub enum Command {
    /// `nhl [filter] [standings]`; an empty filter means division leaders
    Standings { filter: String },
    Team(Team),
    Unknown,
}

pub struct CommandRouter {
    teams: TeamDirectory,
    standings: Regex,
    mention: Regex,
}

impl CommandRouter {
    pub fn new(teams: TeamDirectory) -> BotResult<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| BotError::InvalidConfig(format!("bad command pattern: {}", e)))
        };
        Ok(Self {
            teams,
            standings: compile(STANDINGS_PATTERN)?,
            mention: compile(MENTION_PATTERN)?,
        })
    }

    pub fn teams(&self) -> &TeamDirectory {
        &self.teams
    }

    pub fn route(&self, text: &str) -> Command {
        let text = self.mention.replace(text, "");
        let text = text.trim();

        if let Some(captures) = self.standings.captures(text) {
            let token = captures.get(1).map(|m| m.as_str().trim()).unwrap_or("");
            let filter = if token.eq_ignore_ascii_case("standings") {
                String::new()
            } else {
                token.to_string()
            };
            return Command::Standings { filter };
        }

        match self.teams.match_text(text) {
            Some(team) => Command::Team(team.clone()),
            None => Command::Unknown,
        }
    }
}
