use crate::constants::reconcile::SENTINEL_COORDINATES;
use serde::Serialize;

/// A stadium location in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The (0, 0) placeholder used for stadiums missing from the lookup table.
    pub const fn sentinel() -> Self {
        Self::new(SENTINEL_COORDINATES.0, SENTINEL_COORDINATES.1)
    }
}

/// Where a team's coordinates came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    /// Found in the bundled stadium table.
    Known,
    /// Not in the table; coordinates are the sentinel.
    Unresolved,
}

/// A validated team, ready for display.
///
/// Only the reconciler builds these; the UI reads them and hands them between
/// screens unchanged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    name: String,
    stadium: String,
    logo_url: String,
    latitude: f64,
    longitude: f64,
    web_url: String,
    location: LocationSource,
}

impl Team {
    pub(crate) fn new(
        name: String,
        stadium: String,
        logo_url: String,
        coordinates: Option<Coordinates>,
        web_url: String,
    ) -> Self {
        let (location, coordinates) = match coordinates {
            Some(coords) => (LocationSource::Known, coords),
            None => (LocationSource::Unresolved, Coordinates::sentinel()),
        };
        Self {
            name,
            stadium,
            logo_url,
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            web_url,
            location,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stadium(&self) -> &str {
        &self.stadium
    }

    /// Full-resolution logo URL, empty when the API had none.
    pub fn logo_url(&self) -> &str {
        &self.logo_url
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    /// Official website exactly as the API sent it, empty when absent.
    pub fn web_url(&self) -> &str {
        &self.web_url
    }

    pub fn location(&self) -> LocationSource {
        self.location
    }

    pub fn has_known_location(&self) -> bool {
        self.location == LocationSource::Known
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_location() {
        let team = Team::new(
            "Valencia".to_string(),
            "Mestalla".to_string(),
            String::new(),
            Some(Coordinates::new(39.4746, -0.3587)),
            String::new(),
        );
        assert!(team.has_known_location());
        assert_eq!(team.latitude(), 39.4746);
        assert_eq!(team.longitude(), -0.3587);
    }

    #[test]
    fn test_missing_location_uses_sentinel() {
        let team = Team::new(
            "Leganes".to_string(),
            "Butarque".to_string(),
            String::new(),
            None,
            String::new(),
        );
        assert_eq!(team.location(), LocationSource::Unresolved);
        assert_eq!(team.coordinates(), Coordinates::new(0.0, 0.0));
    }

    #[test]
    fn test_serializes_location_tag() {
        let team = Team::new(
            "Leganes".to_string(),
            "Butarque".to_string(),
            String::new(),
            None,
            String::new(),
        );
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["location"], "unresolved");
        assert_eq!(json["latitude"], 0.0);
        assert_eq!(json["web_url"], "");
    }
}
