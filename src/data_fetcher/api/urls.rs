//! URL building utilities for API endpoints

use crate::error::AppError;
use reqwest::Url;

/// Path of the "all teams in a league" endpoint, relative to the key segment.
pub const SEARCH_ALL_TEAMS_PATH: &str = "search_all_teams.php";

/// Builds the team search URL for a league.
///
/// The league name is query-encoded, so names with spaces or accents are safe.
///
/// # Example
/// ```
/// use stadium_finder::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com/v1/json", "123", "Spanish La Liga").unwrap();
/// assert_eq!(url, "https://api.example.com/v1/json/123/search_all_teams.php?l=Spanish+La+Liga");
/// ```
pub fn build_teams_url(api_base_url: &str, api_key: &str, league: &str) -> Result<String, AppError> {
    let base = api_base_url.trim_end_matches('/');
    let endpoint = format!("{base}/{api_key}/{SEARCH_ALL_TEAMS_PATH}");
    let url = Url::parse_with_params(&endpoint, &[("l", league)])
        .map_err(|e| AppError::config_error(format!("Invalid API URL '{endpoint}': {e}")))?;
    Ok(url.to_string())
}
