use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use hockey_bot::config::BotConfig;
use hockey_bot::logging::init_logging;
use hockey_bot::render::{Message, Platform};
use hockey_bot::HockeyBot;

#[derive(Parser)]
#[command(name = "hockey-bot")]
#[command(about = "NHL scores, standings and playoff odds from the command line", long_about = None)]
struct Cli {
    /// Output style (plain, slack, discord). Defaults to HOCKEY_PLATFORM.
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Add P%, L10 and STRK columns to standings
    #[arg(long)]
    extended: bool,

    /// Skip MoneyPuck playoff odds
    #[arg(long)]
    hide_odds: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest or next game for a team, e.g. `team preds` or `team NSH`
    Team { name: Vec<String> },
    /// League standings, optionally filtered by division or conference
    Standings { filter: Option<String> },
    /// Treat the text as a chat message
    Say { text: Vec<String> },
}

fn print_messages(messages: &[Message]) -> Result<()> {
    for message in messages {
        match message {
            Message::Text(text) => println!("{}", text),
            Message::Slack(slack) => println!("{}", serde_json::to_string_pretty(slack)?),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging()?;

    let cli = Cli::parse();

    let mut config = BotConfig::from_env().context("Invalid configuration")?;
    if let Some(platform) = cli.platform {
        config.platform = platform;
    }
    config.extended_standings |= cli.extended;
    config.hide_odds |= cli.hide_odds;

    let bot = HockeyBot::new(&config)?;
    let renderer = config.platform.renderer();
    let now = Utc::now();

    let messages = match cli.command {
        Commands::Team { name } => {
            let text = name.join(" ");
            let team = bot
                .teams()
                .find_by_abbreviation(&text)
                .or_else(|| bot.teams().match_text(&text))
                .cloned()
                .with_context(|| format!("No team matches '{}'", text))?;
            bot.game_messages(&team, renderer.as_ref(), now).await?
        }
        Commands::Standings { filter } => {
            let filter = filter.unwrap_or_default();
            bot.standings_messages(&filter, renderer.as_ref(), now).await?
        }
        Commands::Say { text } => bot.handle_as(&text.join(" "), config.platform, now).await?,
    };

    if messages.is_empty() {
        println!("(no reply)");
    }
    print_messages(&messages)
}
