//! Command-line arguments: where the games come from and how to print them.

use std::path::PathBuf;

use crate::config::{OutputFormat, TaggerConfig};
use crate::error::TaggerError;
use crate::source::GameSource;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub user: Option<String>,
    pub pgn: Option<PathBuf>,
    pub fens: Vec<String>,
    pub max: Option<usize>,
    pub json: bool,
}

/// Parse `--user <name>`, `--pgn <path>`, `--fen <fen>` (repeatable),
/// `--max <n>` and `--json`. The first item is the program name.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, TaggerError> {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--user" => parsed.user = Some(value_for(&arg, args.next())?),
            "--pgn" => parsed.pgn = Some(PathBuf::from(value_for(&arg, args.next())?)),
            "--fen" => parsed.fens.push(value_for(&arg, args.next())?),
            "--max" => {
                let value = value_for(&arg, args.next())?;
                let max = value
                    .parse()
                    .map_err(|_| TaggerError::Config(format!("--max expects a number, got '{value}'")))?;
                parsed.max = Some(max);
            }
            "--json" => parsed.json = true,
            other => return Err(TaggerError::Config(format!("unknown argument '{other}'"))),
        }
    }

    Ok(parsed)
}

fn value_for(flag: &str, value: Option<String>) -> Result<String, TaggerError> {
    value.ok_or_else(|| TaggerError::Config(format!("{flag} needs a value")))
}

impl CliArgs {
    /// Exactly one of `--user`, `--pgn`, `--fen` must be given.
    pub fn source(&self, config: &TaggerConfig) -> Result<GameSource, TaggerError> {
        let given = [self.user.is_some(), self.pgn.is_some(), !self.fens.is_empty()]
            .iter()
            .filter(|&&g| g)
            .count();
        if given != 1 {
            return Err(TaggerError::Config(
                "give exactly one of --user, --pgn or --fen".to_string(),
            ));
        }

        if let Some(username) = &self.user {
            return Ok(GameSource::Lichess {
                username: username.clone(),
                max_games: self.max.or(config.max_games),
            });
        }
        if let Some(path) = &self.pgn {
            return Ok(GameSource::PgnFile(path.clone()));
        }
        Ok(GameSource::Fens(self.fens.clone()))
    }

    /// `--json` wins over `OUTPUT_FORMAT`.
    pub fn output_format(&self, config: &TaggerConfig) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            config.output_format
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("mate-tagger")
            .chain(list.iter().copied())
            .map(str::to_string)
            .collect()
    }

    fn config() -> TaggerConfig {
        TaggerConfig::from_lookup(|_| None).unwrap()
    }

    #[test]
    fn test_parse_user_with_max() {
        let parsed = parse_args(args(&["--user", "buenos_dias", "--max", "20", "--json"])).unwrap();
        assert_eq!(parsed.user.as_deref(), Some("buenos_dias"));
        assert_eq!(parsed.max, Some(20));
        assert!(parsed.json);
        assert_eq!(
            parsed.source(&config()).unwrap(),
            GameSource::Lichess {
                username: "buenos_dias".to_string(),
                max_games: Some(20)
            }
        );
        assert_eq!(parsed.output_format(&config()), OutputFormat::Json);
    }

    #[test]
    fn test_repeated_fen() {
        let parsed = parse_args(args(&["--fen", "a", "--fen", "b"])).unwrap();
        assert_eq!(
            parsed.source(&config()).unwrap(),
            GameSource::Fens(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_exactly_one_source() {
        let none = parse_args(args(&[])).unwrap();
        assert!(matches!(none.source(&config()), Err(TaggerError::Config(_))));

        let two = parse_args(args(&["--user", "x", "--pgn", "games.pgn"])).unwrap();
        assert!(matches!(two.source(&config()), Err(TaggerError::Config(_))));
    }

    #[test]
    fn test_missing_value_and_unknown_flag() {
        assert!(matches!(parse_args(args(&["--user"])), Err(TaggerError::Config(_))));
        assert!(matches!(parse_args(args(&["--verbose"])), Err(TaggerError::Config(_))));
        assert!(matches!(parse_args(args(&["--max", "ten"])), Err(TaggerError::Config(_))));
    }
}
