use serde::{Deserialize, Serialize};

/// One team object as returned by `search_all_teams.php`.
///
/// Every field is nullable upstream, so nothing here is trusted until it has
/// gone through the reconciler.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct RawTeamRecord {
    #[serde(rename = "idTeam", default)]
    pub id_team: Option<String>,
    #[serde(rename = "strTeam", default)]
    pub name: Option<String>,
    #[serde(rename = "strStadium", default)]
    pub stadium: Option<String>,
    #[serde(rename = "strTeamBadge", alias = "strBadge", default)]
    pub logo_url: Option<String>,
    #[serde(rename = "strWebsite", default)]
    pub website: Option<String>,
}

/// Envelope of the team search endpoint.
///
/// An unknown league comes back as `{"teams": null}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Option<Vec<RawTeamRecord>>,
}

impl TeamsResponse {
    /// Unwraps the record list, treating an absent list as empty.
    pub fn into_records(self) -> Vec<RawTeamRecord> {
        self.teams.unwrap_or_default()
    }
}
