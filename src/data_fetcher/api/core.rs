use crate::config::Config;
use crate::data_fetcher::api::urls::build_teams_url;
use crate::data_fetcher::models::{RawTeamRecord, TeamsResponse};
use crate::error::AppError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

/// Maps a non-success HTTP status to the matching error variant.
fn status_error(status_code: u16, reason: &str, url: &str) -> AppError {
    match status_code {
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(reason, url),
        400..=499 => AppError::api_client_error(status_code, reason, url),
        502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
        _ => AppError::api_server_error(status_code, reason, url),
    }
}

/// Performs exactly one GET and parses the JSON body.
///
/// There is no retry and no cache: every failure goes straight back to the
/// caller.
#[instrument(skip(client))]
pub(crate) async fn fetch<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, AppError> {
    info!("Fetching data from URL: {url}");

    let response = client.get(url).send().await.map_err(|e| {
        error!("Request failed for URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else if e.is_connect() {
            AppError::network_connection(url, e.to_string())
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");
        error!("HTTP {} - {} (URL: {})", status_code, reason, url);
        return Err(status_error(status_code, reason, url));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        if e.is_timeout() {
            AppError::network_timeout(url)
        } else {
            AppError::ApiFetch(e)
        }
    })?;

    debug!("Response length: {} bytes", response_text.len());

    serde_json::from_str::<T>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        let trimmed = response_text.trim_start();
        if trimmed.is_empty() {
            AppError::api_no_data("Response body is empty", url)
        } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
            AppError::api_malformed_json("Response is not valid JSON", url)
        } else {
            AppError::api_unexpected_structure(e.to_string(), url)
        }
    })
}

/// Fetches the raw team records of one league.
///
/// Issues a single request to the team search endpoint. A league the API
/// does not know returns `{"teams": null}`, which yields an empty list.
///
/// # Errors
/// Every failure is network-class (`AppError::is_network_error`): timeouts,
/// connection errors, non-2xx statuses and payloads that are not the
/// expected JSON.
#[instrument(skip(client, config))]
pub async fn fetch_league_teams(
    client: &Client,
    config: &Config,
    league: &str,
) -> Result<Vec<RawTeamRecord>, AppError> {
    let url = build_teams_url(&config.api_base_url, &config.api_key, league)?;
    let response: TeamsResponse = fetch(client, &url).await?;
    let records = response.into_records();
    info!("Fetched {} team records for league {league:?}", records.len());
    Ok(records)
}
