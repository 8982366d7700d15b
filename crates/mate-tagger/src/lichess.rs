use std::time::Duration;

use chess::Color;
use reqwest::Client;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::TaggerConfig;
use crate::error::TaggerError;

/// One finished game from the Lichess export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LichessGame {
    pub id: String,
    /// SAN moves, space separated in the export.
    pub moves: Vec<String>,
    pub winner: Option<Color>,
}

pub struct LichessClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl LichessClient {
    pub fn new(config: &TaggerConfig) -> Result<Self, TaggerError> {
        let client = Client::builder()
            .user_agent("MateTagger/1.0")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.lichess_api_url.clone(),
            token: config.lichess_token.clone(),
        })
    }

    /// Fetch a user's games and keep the standard games that ended in mate.
    pub async fn fetch_mated_games(
        &self,
        username: &str,
        max_games: Option<usize>,
    ) -> Result<Vec<LichessGame>, TaggerError> {
        let url = format!("{}/api/games/user/{}", self.base_url, username);

        let mut params = vec![("moves", "true".to_string()), ("pgnInJson", "false".to_string())];
        if let Some(max) = max_games {
            params.push(("max", max.to_string()));
        }

        let mut request = self
            .client
            .get(&url)
            .query(&params)
            .header("Accept", "application/x-ndjson");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request.send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(TaggerError::Lichess(format!("user '{username}' not found")));
        }

        if !resp.status().is_success() {
            return Err(TaggerError::Lichess(format!("HTTP {}", resp.status())));
        }

        let text = resp.text().await?;
        let games = parse_export(&text);
        info!(username, mated = games.len(), "Fetched Lichess games");
        Ok(games)
    }
}

/// Parse an NDJSON export body, keeping standard games that ended in mate.
/// Unparseable lines are logged and skipped.
pub fn parse_export(text: &str) -> Vec<LichessGame> {
    let mut results = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(line) {
            Ok(game) => {
                if let Some(parsed) = mated_game(&game) {
                    results.push(parsed);
                }
            }
            Err(e) => {
                warn!("Failed to parse Lichess game JSON: {e}");
            }
        }
    }

    results
}

fn mated_game(game: &Value) -> Option<LichessGame> {
    let field = |name: &str| game.get(name).and_then(|v| v.as_str());

    if field("status") != Some("mate") || field("variant") != Some("standard") {
        return None;
    }

    let moves = field("moves")?;
    if moves.is_empty() {
        return None;
    }

    let winner = match field("winner") {
        Some("white") => Some(Color::White),
        Some("black") => Some(Color::Black),
        _ => None,
    };

    Some(LichessGame {
        id: field("id").unwrap_or("").to_string(),
        moves: chess_core::replay::split_moves(moves),
        winner,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = r#"{"id":"q7ZvsdUF","variant":"standard","status":"mate","winner":"white","moves":"e4 e5 Bc4 Nc6 Qh5 Nf6 Qxf7#"}
{"id":"aaaa1111","variant":"standard","status":"resign","winner":"black","moves":"e4 e5 Qh5"}
not json at all
{"id":"bbbb2222","variant":"chess960","status":"mate","winner":"black","moves":"f3 e5 g4 Qh4#"}

{"id":"cccc3333","variant":"standard","status":"mate","winner":"black","moves":"f3 e5 g4 Qh4#"}
"#;

    #[test]
    fn test_parse_export_keeps_standard_mates() {
        let games = parse_export(EXPORT);
        assert_eq!(games.len(), 2);

        assert_eq!(games[0].id, "q7ZvsdUF");
        assert_eq!(games[0].winner, Some(Color::White));
        assert_eq!(games[0].moves.last().map(String::as_str), Some("Qxf7#"));

        assert_eq!(games[1].id, "cccc3333");
        assert_eq!(games[1].winner, Some(Color::Black));
        assert_eq!(games[1].moves.len(), 4);
    }

    #[test]
    fn test_parse_export_empty_body() {
        assert!(parse_export("").is_empty());
    }

    #[test]
    fn test_game_without_moves_is_skipped() {
        let line = r#"{"id":"dddd4444","variant":"standard","status":"mate","winner":"white"}"#;
        assert!(parse_export(line).is_empty());
    }
}
