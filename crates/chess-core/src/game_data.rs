use serde::{Deserialize, Serialize};
use shakmaty::Color;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2"
    pub date: Option<String>,
    pub event: Option<String>,
    pub link: Option<String>,
    pub variant: Option<String>,
    pub termination: Option<String>,
    /// Lichess game id, from `GameId` or the last segment of `Site`.
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameData {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation
    pub pgn: String,
}

impl GameData {
    /// The last move carries the `#` checkmate marker.
    pub fn ends_in_mate(&self) -> bool {
        self.moves.last().is_some_and(|m| m.ends_with('#'))
    }

    /// No `Variant` header, or an explicit `Standard` one.
    pub fn is_standard(&self) -> bool {
        match self.metadata.variant.as_deref() {
            None => true,
            Some(v) => v.eq_ignore_ascii_case("standard"),
        }
    }

    /// Winning side from the result tag; `None` for draws and unfinished games.
    pub fn winner(&self) -> Option<Color> {
        match self.metadata.result.as_str() {
            "1-0" => Some(Color::White),
            "0-1" => Some(Color::Black),
            _ => None,
        }
    }
}
