//! Bundled stadium locations, keyed by the team name TheSportsDB uses.

use crate::data_fetcher::models::Coordinates;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Spanish La Liga stadiums.
const STADIUMS: &[(&str, f64, f64)] = &[
    ("Real Madrid", 40.453054, -3.688344),      // Santiago Bernabéu
    ("Barcelona", 41.380896, 2.122820),         // Spotify Camp Nou
    ("Athletic Bilbao", 43.2641, -2.9493),      // San Mamés
    ("Atletico Madrid", 40.436162, -3.599187),  // Cívitas Metropolitano
    ("Sevilla", 37.3841, -5.9721),              // Ramón Sánchez-Pizjuán
    ("Real Betis", 37.3565, -5.9822),           // Benito Villamarín
    ("Valencia", 39.4746, -0.3587),             // Mestalla
    ("Real Sociedad", 43.3014, -1.9736),        // Reale Arena
    ("Villarreal", 39.9431, -0.1037),           // Estadio de la Cerámica
    ("Celta Vigo", 42.2119, -8.7402),           // Balaídos
    ("Osasuna", 42.8000, -1.6369),              // El Sadar
    ("Getafe", 40.3270, -3.7150),               // Coliseum Alfonso Pérez
    ("Rayo Vallecano", 40.3917, -3.6596),       // Campo de Fútbol de Vallecas
    ("Mallorca", 39.5898, 2.6293),              // Estadi Mallorca Son Moix
    ("Almería", 36.8497, -2.4331),              // Power Horse Stadium
    ("Cádiz", 36.5033, -6.2713),                // Nuevo Mirandilla
    ("Granada", 37.1589, -3.6050),              // Nuevo Los Cármenes
    ("Las Palmas", 28.1006, -15.4566),          // Estadio de Gran Canaria
    ("Deportivo Alavés", 42.8394, -2.6875),     // Mendizorrotza
    ("Girona", 41.9634, 2.8226),                // Estadi de Montilivi
    ("Levante", 39.4946, -0.3586),              // Ciutat de València
];

static COORDINATE_TABLE: Lazy<HashMap<&'static str, Coordinates>> = Lazy::new(|| {
    STADIUMS
        .iter()
        .map(|&(name, lat, lon)| (name, Coordinates::new(lat, lon)))
        .collect()
});

/// Looks up a stadium by exact team name.
///
/// Matching is case- and spelling-sensitive: "barcelona" or "Almeria" do not
/// match.
pub fn lookup_coordinates(team_name: &str) -> Option<Coordinates> {
    COORDINATE_TABLE.get(team_name).copied()
}

/// Number of stadiums in the bundled table.
pub fn known_stadium_count() -> usize {
    COORDINATE_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(
            lookup_coordinates("Barcelona"),
            Some(Coordinates::new(41.380896, 2.122820))
        );
        assert_eq!(
            lookup_coordinates("Las Palmas"),
            Some(Coordinates::new(28.1006, -15.4566))
        );
    }

    #[test]
    fn test_match_is_case_and_spelling_sensitive() {
        assert_eq!(lookup_coordinates("barcelona"), None);
        assert_eq!(lookup_coordinates("Barcelona "), None);
        assert_eq!(lookup_coordinates("Almeria"), None);
        assert!(lookup_coordinates("Almería").is_some());
    }

    #[test]
    fn test_unknown_team() {
        assert_eq!(lookup_coordinates("Leganes"), None);
        assert_eq!(lookup_coordinates(""), None);
    }

    #[test]
    fn test_table_has_no_duplicate_names() {
        assert_eq!(known_stadium_count(), STADIUMS.len());
    }
}
