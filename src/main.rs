use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;
use tracing::{info, warn};

mod config;
mod identity;
mod model;
mod report;
mod stats;

use config::Config;
use identity::IdentityTable;
use model::{dataset, predictor, ModelError};
use stats::{NbaStats, StatsProvider};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // Gather inputs: flags/env first, interactive prompts otherwise.
    let player_name = match &config.player {
        Some(p) => p.clone(),
        None => prompt("Enter player name")?,
    };
    let target: u32 = match config.target {
        Some(t) => t,
        None => prompt("Enter target points")?
            .parse()
            .context("target points must be a whole number")?,
    };
    let opponent = match &config.opponent {
        Some(o) => o.clone(),
        None => prompt("Enter opponent team (3-letter abbreviation)")?,
    }
    .to_uppercase();
    let venue = match &config.venue {
        Some(v) => v.clone(),
        None => prompt("Is it a home game or away? (home/away)")?,
    };
    // Literal comparison: anything that is not exactly "home" counts as away.
    let home = venue == "home";

    // Resolve identities against the bundled static tables. No match is an
    // input error, not something to retry.
    let table = IdentityTable::bundled();
    let player_id = table.player_id(&player_name);
    let team_id = table.team_id(&opponent);
    let (player_id, _team_id) = match (player_id, team_id) {
        (Some(p), Some(t)) => (p, t),
        _ => anyhow::bail!("Invalid player or team. Please check the input."),
    };
    info!(
        "Resolved '{}' (id {}) vs {} ({})",
        player_name,
        player_id,
        opponent,
        table.team_name(&opponent).unwrap_or("unknown")
    );

    let provider = NbaStats::new(
        &config.nba_api_url,
        Duration::from_secs(config.http_timeout_secs),
    )?;

    // Multi-season history: seasons queried in chronological order and
    // concatenated in season order (not globally re-sorted).
    let mut history = Vec::new();
    for season in &config.seasons {
        let log = provider.fetch_game_log(player_id, season).await?;
        info!("Fetched {} games for season {}", log.len(), season);
        history.extend(log);
    }

    // Recent form: the newest N games of the current season.
    let mut current = provider.fetch_game_log(player_id, &config.current_season).await?;
    dataset::sort_newest_first(&mut current);
    current.truncate(config.recent_games);
    let recent_games = current;

    // Head-to-head: newest matchups against the opponent, all-time.
    let mut all_games = provider.fetch_all_games(player_id).await?;
    info!("Fetched {} games from the all-time game finder", all_games.len());
    dataset::sort_newest_first(&mut all_games);
    let mut matchups = dataset::filter_matchups(&all_games, &opponent);
    matchups.truncate(config.matchup_games);

    report::print_average(
        &format!("\nAverage points from the last {} games", recent_games.len()),
        dataset::average_points(&recent_games),
    );
    report::print_games(&format!("Last {} Games", recent_games.len()), &recent_games);
    report::print_games(
        &format!("Last {} Matchups with {}", matchups.len(), opponent),
        &matchups,
    );
    report::print_average(
        &format!("\nAverage points from the last {} matchups", matchups.len()),
        dataset::average_points(&matchups),
    );

    // Aggregate: recent window + head-to-head, then the multi-season history,
    // deduplicated by full-row equality.
    let recent = dataset::dedup_rows(&[&recent_games, &matchups]);
    let combined = dataset::dedup_rows(&[&history, &recent]);
    info!("Aggregated {} unique games for modeling", combined.len());

    match predictor::predict(&combined, target, home, config.cv_folds) {
        Ok(prediction) => report::print_prediction(&player_name, target, &prediction),
        Err(err @ ModelError::InsufficientData { .. }) => {
            warn!("{}", err);
            println!("\nPrediction could not be made due to insufficient data.");
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("failed to read input")?;
    Ok(line.trim().to_string())
}
