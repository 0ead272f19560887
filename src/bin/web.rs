use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use hockey_bot::config::BotConfig;
use hockey_bot::logging::init_logging;
use hockey_bot::render::{Message, Platform};
use hockey_bot::HockeyBot;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

type SharedBot = Arc<HockeyBot>;

/// Body of `POST /command`
#[derive(Debug, Deserialize)]
struct CommandRequest {
    text: String,
    /// Overrides the configured platform for this reply
    #[serde(default)]
    platform: Option<Platform>,
}

#[derive(Debug, Serialize)]
struct CommandResponse {
    messages: Vec<Message>,
}

async fn health() -> &'static str {
    "ok"
}

async fn command(State(bot): State<SharedBot>, Json(request): Json<CommandRequest>) -> Response {
    let platform = request.platform.unwrap_or(bot.platform());

    match bot.handle_as(&request.text, platform, Utc::now()).await {
        Ok(messages) => Json(CommandResponse { messages }).into_response(),
        Err(e) => {
            error!("command {:?} failed: {:#}", request.text, e);
            (StatusCode::BAD_GATEWAY, format!("Upstream request failed: {}", e)).into_response()
        }
    }
}

fn app(bot: SharedBot) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/command", post(command))
        .layer(TraceLayer::new_for_http())
        .with_state(bot)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    init_logging()?;

    let config = BotConfig::from_env().context("Invalid configuration")?;
    let bot = Arc::new(HockeyBot::new(&config)?);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("listening on http://{} ({} replies)", config.bind_addr, config.platform);

    axum::serve(listener, app(bot)).await.context("Server error")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn bot(nhl_api_base: String) -> SharedBot {
        let config = BotConfig {
            nhl_api_base,
            hide_odds: true,
            ..BotConfig::default()
        };
        Arc::new(HockeyBot::new(&config).unwrap())
    }

    fn command_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/command")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(bot("http://127.0.0.1:9".to_string()))
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_unknown_command_has_no_reply() {
        let response = app(bot("http://127.0.0.1:9".to_string()))
            .oneshot(command_request(json!({ "text": "@hubot hello" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "messages": [] }));
    }

    #[tokio::test]
    async fn test_standings_command() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/v1/standings/\d{4}-\d{2}-\d{2}$".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "standings": [{
                        "teamName": { "default": "Dallas Stars" },
                        "teamAbbrev": { "default": "DAL" },
                        "divisionName": "Central",
                        "conferenceName": "Western",
                        "conferenceAbbrev": "W",
                        "gamesPlayed": 12,
                        "wins": 8,
                        "losses": 3,
                        "otLosses": 1,
                        "points": 17
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let response = app(bot(server.url()))
            .oneshot(command_request(
                json!({ "text": "nhl central standings", "platform": "discord" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let text = body["messages"][0].as_str().unwrap();
        assert!(text.starts_with("```\n"));
        assert!(text.contains("Central Division Standings"));
        assert!(text.contains("Dallas Stars"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/v1/standings/".to_string()),
            )
            .with_status(500)
            .create_async()
            .await;

        let response = app(bot(server.url()))
            .oneshot(command_request(json!({ "text": "nhl" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
