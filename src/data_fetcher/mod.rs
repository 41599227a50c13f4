pub mod api;
pub mod models;
pub mod reconciler;

pub use api::fetch_league_teams;
pub use models::{Coordinates, LocationSource, RawTeamRecord, Team};
pub use reconciler::reconcile_teams;

use crate::config::Config;
use crate::error::AppError;
use reqwest::Client;

/// Fetches a league and reconciles the result in one step.
///
/// This is what a screen calls on entry: a network failure aborts the whole
/// load, while bad records are dropped quietly.
pub async fn load_league_teams(
    client: &Client,
    config: &Config,
    league: &str,
) -> Result<Vec<Team>, AppError> {
    let records = fetch_league_teams(client, config, league).await?;
    Ok(reconcile_teams(&records))
}
