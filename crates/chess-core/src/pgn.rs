//! PGN parsing utilities: lightweight regex-based parser.

use regex::Regex;

use crate::game_data::{GameData, GameMetadata};

const STANDARD_START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a single-game PGN string into a GameData struct.
/// Returns `None` for games without moves or starting from a custom position.
pub fn parse_pgn(pgn: &str) -> Option<GameData> {
    // Extract headers
    let header_re = Regex::new(r#"\[(\w+)\s+"([^"]*)"\]"#).ok()?;

    let mut metadata = GameMetadata {
        white: "Unknown".to_string(),
        black: "Unknown".to_string(),
        result: "*".to_string(),
        ..Default::default()
    };
    let mut site = None;
    let mut setup = None;
    let mut fen = None;

    for cap in header_re.captures_iter(pgn) {
        let key = &cap[1];
        let value = cap[2].to_string();
        match key {
            "White" => metadata.white = value,
            "Black" => metadata.black = value,
            "Result" => metadata.result = value,
            "Date" | "UTCDate" if metadata.date.is_none() => metadata.date = Some(value),
            "Event" => metadata.event = Some(value),
            "Link" => metadata.link = Some(value),
            "Site" => site = Some(value),
            "Variant" => metadata.variant = Some(value),
            "Termination" => metadata.termination = Some(value),
            "GameId" => metadata.id = Some(value),
            "SetUp" => setup = Some(value),
            "FEN" => fen = Some(value),
            _ => {}
        }
    }

    // Filter non-standard positions
    if setup.as_deref() == Some("1") {
        if let Some(ref f) = fen {
            if f != STANDARD_START_FEN {
                return None;
            }
        }
    }

    if metadata.id.is_none() {
        metadata.id = site
            .as_deref()
            .or(metadata.link.as_deref())
            .and_then(game_id_from_url);
    }
    if metadata.link.is_none() {
        metadata.link = site.filter(|s| s.starts_with("http"));
    }

    let moves = extract_moves(pgn)?;
    if moves.is_empty() {
        return None;
    }

    Some(GameData {
        metadata,
        moves,
        pgn: pgn.to_string(),
    })
}

/// Split a PGN file holding several games into one string per game.
/// A header line that follows movetext starts the next game.
pub fn split_games(text: &str) -> Vec<String> {
    let mut games = Vec::new();
    let mut current = String::new();
    let mut seen_moves = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with('[') && seen_moves {
            games.push(std::mem::take(&mut current));
            seen_moves = false;
        }
        if !trimmed.is_empty() && !trimmed.starts_with('[') {
            seen_moves = true;
        }
        current.push_str(line);
        current.push('\n');
    }
    games.push(current);

    games
        .into_iter()
        .map(|g| g.trim().to_string())
        .filter(|g| !g.is_empty())
        .collect()
}

/// Extract SAN moves from PGN text (after removing headers, comments, variations).
fn extract_moves(pgn: &str) -> Option<Vec<String>> {
    // Remove headers
    let header_re = Regex::new(r"\[[^\]]*\]").ok()?;
    let no_headers = header_re.replace_all(pgn, "");

    // Remove comments
    let comment_re = Regex::new(r"\{[^}]*\}").ok()?;
    let no_comments = comment_re.replace_all(&no_headers, "");

    // Remove variations
    let variation_re = Regex::new(r"\([^)]*\)").ok()?;
    let no_variations = variation_re.replace_all(&no_comments, "");

    // Extract moves
    let move_re =
        Regex::new(r"[KQRBN]?[a-h]?[1-8]?x?[a-h][1-8](?:=[QRBN])?[+#]?|(?:O-O-O|O-O)[+#]?").ok()?;

    Some(
        move_re
            .find_iter(&no_variations)
            .map(|m| m.as_str().to_string())
            .collect(),
    )
}

/// Last path segment of a game URL, e.g. `https://lichess.org/abcd1234`.
fn game_id_from_url(url: &str) -> Option<String> {
    let id = url.trim_end_matches('/').rsplit('/').next()?;
    if id.is_empty() || !id.chars().all(|c| c.is_ascii_alphanumeric()) {
        None
    } else {
        Some(id.to_string())
    }
}

/// Extract a string value from a PGN header (e.g. WhiteTitle, BlackTitle).
pub fn extract_header(pgn: &str, header_name: &str) -> Option<String> {
    let pattern = format!(r#"\[{}\s+"([^"]*)"\]"#, regex::escape(header_name));
    let re = Regex::new(&pattern).ok()?;
    let value = re.captures(pgn)?.get(1)?.as_str().to_string();
    if value.is_empty() { None } else { Some(value) }
}
