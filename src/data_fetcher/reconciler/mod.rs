//! Turns raw API records into validated [`Team`]s.
//!
//! Records with a null or empty name, or a null stadium, are dropped one by
//! one; a bad record never fails the batch.

pub mod coordinates;
pub mod logo;

pub use coordinates::{known_stadium_count, lookup_coordinates};
pub use logo::normalize_logo_url;

use crate::data_fetcher::models::{RawTeamRecord, Team};
use thiserror::Error;
use tracing::{debug, warn};

/// Why a single record was excluded from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordRejection {
    #[error("team name is missing")]
    MissingName,
    #[error("stadium name is missing")]
    MissingStadium,
}

/// Validates one record and builds its [`Team`].
///
/// The name must be present and non-empty. The stadium only has to be
/// present: an empty stadium string is kept as is.
pub fn validate_record(record: &RawTeamRecord) -> Result<Team, RecordRejection> {
    let name = record
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .ok_or(RecordRejection::MissingName)?;
    let stadium = record
        .stadium
        .as_deref()
        .ok_or(RecordRejection::MissingStadium)?;

    let coordinates = lookup_coordinates(name);
    if coordinates.is_none() {
        debug!("No stadium coordinates for team {name:?}, using sentinel location");
    }

    Ok(Team::new(
        name.to_string(),
        stadium.to_string(),
        normalize_logo_url(record.logo_url.as_deref()),
        coordinates,
        record.website.clone().unwrap_or_default(),
    ))
}

/// Reconciles a batch of records, keeping input order.
///
/// # Example
/// ```
/// use stadium_finder::data_fetcher::models::RawTeamRecord;
/// use stadium_finder::data_fetcher::reconciler::reconcile_teams;
///
/// let records = vec![RawTeamRecord {
///     name: Some("Barcelona".to_string()),
///     stadium: Some("Camp Nou".to_string()),
///     logo_url: Some("http://x/img/preview".to_string()),
///     ..Default::default()
/// }];
/// let teams = reconcile_teams(&records);
/// assert_eq!(teams[0].logo_url(), "http://x/img");
/// assert_eq!(teams[0].latitude(), 41.380896);
/// ```
pub fn reconcile_teams(records: &[RawTeamRecord]) -> Vec<Team> {
    let teams: Vec<Team> = records
        .iter()
        .filter_map(|record| match validate_record(record) {
            Ok(team) => Some(team),
            Err(reason) => {
                warn!(
                    "Skipping team record (id={}): {reason}: {record:?}",
                    record.id_team.as_deref().unwrap_or("?")
                );
                None
            }
        })
        .collect();

    debug!(
        "Reconciled {} of {} team records",
        teams.len(),
        records.len()
    );
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{Coordinates, LocationSource};

    fn record(name: Option<&str>, stadium: Option<&str>) -> RawTeamRecord {
        RawTeamRecord {
            name: name.map(str::to_string),
            stadium: stadium.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_barcelona_scenario() {
        let input = vec![RawTeamRecord {
            name: Some("Barcelona".to_string()),
            stadium: Some("Camp Nou".to_string()),
            logo_url: Some("http://x/img/preview".to_string()),
            website: None,
            ..Default::default()
        }];

        let teams = reconcile_teams(&input);

        assert_eq!(teams.len(), 1);
        let team = &teams[0];
        assert_eq!(team.name(), "Barcelona");
        assert_eq!(team.stadium(), "Camp Nou");
        assert_eq!(team.logo_url(), "http://x/img");
        assert_eq!(team.latitude(), 41.380896);
        assert_eq!(team.longitude(), 2.122820);
        assert_eq!(team.web_url(), "");
        assert_eq!(team.location(), LocationSource::Known);
    }

    #[test]
    fn test_null_name_is_dropped() {
        let teams = reconcile_teams(&[record(None, Some("X"))]);
        assert!(teams.is_empty());
    }

    #[test]
    fn test_null_stadium_is_dropped() {
        let teams = reconcile_teams(&[record(Some("Sevilla"), None)]);
        assert!(teams.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(reconcile_teams(&[]).is_empty());
    }

    #[test]
    fn test_rejection_reasons() {
        assert_eq!(
            validate_record(&record(None, None)).unwrap_err(),
            RecordRejection::MissingName
        );
        assert_eq!(
            validate_record(&record(Some("Getafe"), None)).unwrap_err(),
            RecordRejection::MissingStadium
        );
        assert_eq!(
            validate_record(&record(Some(""), Some("Coliseum"))).unwrap_err(),
            RecordRejection::MissingName
        );
    }

    #[test]
    fn test_empty_stadium_is_kept() {
        let teams = reconcile_teams(&[record(Some("Getafe"), Some(""))]);
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].name(), "Getafe");
        assert_eq!(teams[0].stadium(), "");
        assert!(teams[0].has_known_location());
    }

    #[test]
    fn test_whitespace_name_is_not_empty() {
        let team = validate_record(&record(Some("  "), Some("Coliseum"))).unwrap();
        assert_eq!(team.name(), "  ");
        assert!(!team.has_known_location());
    }

    #[test]
    fn test_order_is_preserved_around_dropped_records() {
        let input = vec![
            record(Some("Valencia"), Some("Mestalla")),
            record(None, Some("Nowhere")),
            record(Some("Leganes"), Some("Butarque")),
            record(Some("Girona"), None),
            record(Some("Real Madrid"), Some("Santiago Bernabéu")),
        ];

        let names: Vec<_> = reconcile_teams(&input)
            .iter()
            .map(|t| t.name().to_string())
            .collect();

        assert_eq!(names, vec!["Valencia", "Leganes", "Real Madrid"]);
    }

    #[test]
    fn test_unknown_team_gets_sentinel() {
        let teams = reconcile_teams(&[record(Some("Leganes"), Some("Butarque"))]);
        assert_eq!(teams[0].coordinates(), Coordinates::new(0.0, 0.0));
        assert!(!teams[0].has_known_location());
    }

    #[test]
    fn test_name_lookup_does_not_fold_case() {
        let teams = reconcile_teams(&[record(Some("real madrid"), Some("Bernabéu"))]);
        assert_eq!(teams[0].coordinates(), Coordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_website_and_logo_defaults() {
        let input = RawTeamRecord {
            name: Some("Osasuna".to_string()),
            stadium: Some("El Sadar".to_string()),
            logo_url: Some("https://img/osasuna.png".to_string()),
            website: Some("www.osasuna.es".to_string()),
            ..Default::default()
        };
        let team = validate_record(&input).unwrap();
        assert_eq!(team.logo_url(), "https://img/osasuna.png");
        assert_eq!(team.web_url(), "www.osasuna.es");

        let bare = validate_record(&record(Some("Osasuna"), Some("El Sadar"))).unwrap();
        assert_eq!(bare.logo_url(), "");
        assert_eq!(bare.web_url(), "");
    }
}
