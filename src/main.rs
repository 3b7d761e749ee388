use std::process::ExitCode;

use clap::{Parser, Subcommand};
use henrikval_api::{HenrikApiClient, MatchApi, MmrHistoryApi, PremierApi, Region};
use serde::Serialize;
use tracing::{error, info};

use config::Config;
use error::AppError;

mod config;
mod error;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "henrikval")]
#[command(about = "Query the HenrikDev Valorant API", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ranked MMR history of a player
    MmrHistory {
        /// Region code (eu, na, latam, br, ap, kr)
        region: Region,
        /// Player puuid
        puuid: String,
    },
    /// Full details of a match
    Match {
        /// Region code (eu, na, latam, br, ap, kr)
        region: Region,
        match_id: String,
    },
    /// Premier team by name and tag
    Premier { team_name: String, team_tag: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;

    let client =
        HenrikApiClient::new(config.henrik_api_key.clone())?.with_base_url(&config.base_url);
    if let Some(every) = config.metrics_log_interval {
        client.start_metrics_logging(every);
    }

    let res = match args.command {
        Command::MmrHistory { region, puuid } => print_payload(
            client.find_mmr_history_v1(region, &puuid).await,
            || format!("MMR history for {puuid} in {}", region.display_name()),
        ),
        Command::Match { region, match_id } => print_payload(
            client.find_match_v4(region, &match_id).await,
            || format!("match {match_id} in {}", region.display_name()),
        ),
        Command::Premier {
            team_name,
            team_tag,
        } => print_payload(
            client.find_premier_team_v1(&team_name, &team_tag).await,
            || format!("Premier team {team_name}#{team_tag}"),
        ),
    };

    let metrics = client.metrics().snapshot();
    info!(
        "📊 {} requests executed ({} succeeded, {} failed)",
        metrics.total, metrics.succeeded, metrics.failed
    );

    res
}

/// Write a fetched payload to stdout as pretty JSON.
fn print_payload<T: Serialize>(
    payload: Option<T>,
    what: impl FnOnce() -> String,
) -> Result<(), AppError> {
    let payload = payload.ok_or_else(|| AppError::NotFound(what()))?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
