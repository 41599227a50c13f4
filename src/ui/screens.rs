//! Screen state for the list, detail and web-link views.
//!
//! These types hold no terminal handles; rendering lives in
//! [`crate::ui::render`] and input handling in [`crate::ui::interactive`].

use crate::constants::ui::{MAP_ZOOM, NOTIFICATION_SECONDS};
use crate::data_fetcher::{Coordinates, Team};
use crate::ui::teletext::LoadingIndicator;
use std::fmt::Display;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Where the user asked to go next.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    /// Open the detail screen for this team.
    Detail(Team),
    /// Open the web-link screen for this URL.
    Web(String),
}

/// A short message that disappears after a few seconds.
#[derive(Debug, Clone)]
pub struct Notification {
    message: String,
    shown_at: Instant,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= Duration::from_secs(NOTIFICATION_SECONDS)
    }
}

/// Clears a notification once it has been on screen long enough.
/// Returns true when something was cleared.
fn expire(notification: &mut Option<Notification>, now: Instant) -> bool {
    if notification.as_ref().is_some_and(|n| n.is_expired(now)) {
        *notification = None;
        return true;
    }
    false
}

/// OpenStreetMap link centred on a stadium.
pub fn map_url(coordinates: Coordinates) -> String {
    let Coordinates {
        latitude: lat,
        longitude: lon,
    } = coordinates;
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={MAP_ZOOM}/{lat}/{lon}")
}

/// Turns the website value from the API into something a browser can open.
///
/// TheSportsDB usually omits the scheme ("www.realmadrid.com"). Blank values
/// give `None`.
pub fn website_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.contains("://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// The scrollable team list. Entering it starts a load.
#[derive(Debug, Clone)]
pub struct TeamListScreen {
    league: String,
    teams: Vec<Team>,
    loading: bool,
    selected: usize,
    scroll_offset: usize,
    indicator: LoadingIndicator,
    notification: Option<Notification>,
}

impl TeamListScreen {
    /// Creates the screen in its loading state.
    pub fn new(league: impl Into<String>) -> Self {
        Self {
            league: league.into(),
            teams: Vec::new(),
            loading: true,
            selected: 0,
            scroll_offset: 0,
            indicator: LoadingIndicator::default(),
            notification: None,
        }
    }

    pub fn league(&self) -> &str {
        &self.league
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn indicator(&self) -> &LoadingIndicator {
        &self.indicator
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Advances the loading animation.
    pub fn tick(&mut self) {
        if self.loading {
            self.indicator.tick();
        }
    }

    /// Stores the reconciled teams and leaves the loading state.
    pub fn load_succeeded(&mut self, teams: Vec<Team>) {
        info!("Loaded {} teams for {}", teams.len(), self.league);
        if teams.is_empty() {
            self.notification = Some(Notification::new(format!(
                "No teams found for {}",
                self.league
            )));
        }
        self.teams = teams;
        self.loading = false;
        self.selected = 0;
        self.scroll_offset = 0;
    }

    /// Leaves the loading state with an empty list and a notification.
    pub fn load_failed(&mut self, error: &dyn Display) {
        warn!("Failed to load teams for {}: {error}", self.league);
        self.teams.clear();
        self.loading = false;
        self.selected = 0;
        self.scroll_offset = 0;
        self.notification = Some(Notification::new(format!("Failed to load teams: {error}")));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.teams.len() {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self, rows: usize) {
        self.selected = self.selected.saturating_sub(rows.max(1));
    }

    pub fn page_down(&mut self, rows: usize) {
        if !self.teams.is_empty() {
            self.selected = (self.selected + rows.max(1)).min(self.teams.len() - 1);
        }
    }

    /// Adjusts the scroll offset so the selected row is inside a window of
    /// `visible_rows`, and returns the index range to draw.
    pub fn visible_range(&mut self, visible_rows: usize) -> std::ops::Range<usize> {
        let rows = visible_rows.max(1);
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + rows {
            self.scroll_offset = self.selected + 1 - rows;
        }
        let end = (self.scroll_offset + rows).min(self.teams.len());
        self.scroll_offset.min(end)..end
    }

    /// Hands the highlighted team to the detail screen.
    pub fn select(&self) -> Option<Navigation> {
        self.teams
            .get(self.selected)
            .map(|team| Navigation::Detail(team.clone()))
    }

    /// Drops the notification when it has timed out.
    pub fn expire_notification(&mut self, now: Instant) -> bool {
        expire(&mut self.notification, now)
    }
}

/// One team with its stadium location and website.
#[derive(Debug, Clone)]
pub struct DetailScreen {
    team: Team,
    notification: Option<Notification>,
}

impl DetailScreen {
    pub fn new(team: Team) -> Self {
        Self {
            team,
            notification: None,
        }
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Map link for the stadium, or `None` when its location is unknown.
    pub fn map_url(&self) -> Option<String> {
        self.team
            .has_known_location()
            .then(|| map_url(self.team.coordinates()))
    }

    /// Navigates to the website, or shows a notification when there is none.
    pub fn open_website(&mut self) -> Option<Navigation> {
        match website_url(self.team.web_url()) {
            Some(url) => Some(Navigation::Web(url)),
            None => {
                self.notification = Some(Notification::new("No website available"));
                None
            }
        }
    }

    pub fn expire_notification(&mut self, now: Instant) -> bool {
        expire(&mut self.notification, now)
    }
}

/// Shows the team's website as a link the terminal can open.
#[derive(Debug, Clone, PartialEq)]
pub struct WebLinkScreen {
    url: String,
}

impl WebLinkScreen {
    /// Error message for a blank URL.
    pub const INVALID_URL: &'static str = "No valid URL provided";

    pub fn new(url: impl Into<String>) -> Result<Self, &'static str> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(Self::INVALID_URL);
        }
        Ok(Self { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}
