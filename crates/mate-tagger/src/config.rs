//! Tagger configuration from environment variables

use std::env;
use std::str::FromStr;

use crate::error::TaggerError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = TaggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(TaggerError::Config(format!(
                "OUTPUT_FORMAT must be 'text' or 'json', got '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TaggerConfig {
    /// Lichess base URL (overridable for a local mirror)
    pub lichess_api_url: String,

    /// Optional personal API token, sent as a bearer token
    pub lichess_token: Option<String>,

    /// Cap on games fetched per user
    pub max_games: Option<usize>,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,

    pub output_format: OutputFormat,
}

impl TaggerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, TaggerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; `load` passes the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, TaggerError> {
        let lichess_api_url = lookup("LICHESS_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| "https://lichess.org".to_string());

        let lichess_token = lookup("LICHESS_TOKEN").filter(|t| !t.is_empty());

        let max_games = lookup("LICHESS_MAX_GAMES")
            .map(|v| {
                v.parse()
                    .map_err(|_| TaggerError::Config(format!("LICHESS_MAX_GAMES is not a number: {v}")))
            })
            .transpose()?;

        let request_timeout_secs = lookup("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.parse().ok())
            .unwrap_or(120);

        let output_format = match lookup("OUTPUT_FORMAT") {
            Some(v) => v.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            lichess_api_url,
            lichess_token,
            max_games,
            request_timeout_secs,
            output_format,
        })
    }
}
