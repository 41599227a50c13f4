//! Football stadium finder library
//!
//! Fetches a league's teams from TheSportsDB, reconciles the records into
//! validated [`Team`] values with stadium coordinates, and renders them as
//! teletext-style pages.
//!
//! # Examples
//!
//! ```rust,no_run
//! use stadium_finder::config::Config;
//! use stadium_finder::data_fetcher::api::create_http_client_with_timeout;
//! use stadium_finder::data_fetcher::load_league_teams;
//! use stadium_finder::error::AppError;
//! use stadium_finder::ui::{RenderOptions, TeamListScreen, render_team_list};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
//!
//!     let teams = load_league_teams(&client, &config, "Spanish La Liga").await?;
//!
//!     let mut screen = TeamListScreen::new("Spanish La Liga");
//!     screen.load_succeeded(teams);
//!     print!("{}", render_team_list(&mut screen, &RenderOptions::once(true)));
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    Coordinates, LocationSource, RawTeamRecord, Team, fetch_league_teams, load_league_teams,
    reconcile_teams,
};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
