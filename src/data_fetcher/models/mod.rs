pub mod raw;
pub mod team;

pub use raw::{RawTeamRecord, TeamsResponse};
pub use team::{Coordinates, LocationSource, Team};
