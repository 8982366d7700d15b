//! Mate tagger
//!
//! Names the checkmate patterns in a player's Lichess games, a PGN file or
//! a list of FENs.
//!
//! Usage:
//!   cargo run -p mate-tagger -- --user <name> [--max <n>] [--json]
//!   cargo run -p mate-tagger -- --pgn games.pgn
//!   cargo run -p mate-tagger -- --fen "<fen>" [--fen "<fen>" ...]

use std::io::Write;

use tracing::info;

use mate_tagger::cli::parse_args;
use mate_tagger::report::write_report;
use mate_tagger::{tag_games, TaggerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load .env file for local dev
    let _ = dotenvy::dotenv();

    let config = TaggerConfig::load()?;
    let args = parse_args(std::env::args())?;
    let source = args.source(&config)?;
    info!(?source, "Loading games");

    let games = source.load(&config).await?;
    info!(games = games.len(), "Classifying terminal positions");

    let report = tag_games(&games);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &report, args.output_format(&config))?;
    out.flush()?;

    Ok(())
}
