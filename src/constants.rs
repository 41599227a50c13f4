//! Application-wide constants and configuration values
//!
//! This module centralizes magic numbers and default settings so the
//! fetcher, reconciler and UI agree on them.

/// Default base URL of the TheSportsDB JSON API (without trailing slash)
pub const DEFAULT_API_BASE_URL: &str = "https://www.thesportsdb.com/api/v1/json";

/// Public test key accepted by the TheSportsDB v1 API
pub const DEFAULT_API_KEY: &str = "123";

/// League fetched when neither the command line nor the config names one
pub const DEFAULT_LEAGUE: &str = "Spanish La Liga";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 4;

/// Name of the directory under the platform config dir
pub const APP_DIR_NAME: &str = "stadium_finder";

/// Default log file name
pub const LOG_FILE_NAME: &str = "stadium_finder.log";

/// Environment variable names that override config file values
pub mod env_vars {
    pub const API_BASE_URL: &str = "STADIUM_API_BASE_URL";
    pub const API_KEY: &str = "STADIUM_API_KEY";
    pub const LEAGUE: &str = "STADIUM_LEAGUE";
    pub const LOG_FILE: &str = "STADIUM_LOG_FILE";
    pub const HTTP_TIMEOUT: &str = "STADIUM_HTTP_TIMEOUT";
}

/// Team reconciliation constants
pub mod reconcile {
    /// Path suffix TheSportsDB appends to badge URLs for the low-resolution variant
    pub const LOGO_PREVIEW_SUFFIX: &str = "/preview";

    /// Placeholder location used when a stadium is not in the coordinate table
    pub const SENTINEL_COORDINATES: (f64, f64) = (0.0, 0.0);
}

/// UI layout and behaviour constants
pub mod ui {
    /// Width of the team name column in the list screen
    pub const NAME_COLUMN_WIDTH: usize = 24;

    /// Width of the stadium column in the list screen
    pub const STADIUM_COLUMN_WIDTH: usize = 34;

    /// Rows reserved for header, subheader and footer
    pub const CHROME_ROWS: u16 = 5;

    /// Fallback page height when the terminal size is unknown
    pub const DEFAULT_VISIBLE_ROWS: usize = 20;

    /// Zoom level used for stadium map links
    pub const MAP_ZOOM: u8 = 17;

    /// Event poll interval for the interactive loop
    pub const POLL_INTERVAL_MS: u64 = 100;

    /// How long a transient notification stays on screen
    pub const NOTIFICATION_SECONDS: u64 = 4;

    /// Teletext page number shown in the header
    pub const PAGE_NUMBER: u16 = 235;
}
