//! Screen stack for the interactive UI.

use super::input_handler::Action;
use crate::ui::render::{RenderOptions, render_detail, render_team_list, render_web_link};
use crate::ui::screens::{DetailScreen, Navigation, TeamListScreen, WebLinkScreen};
use std::time::Instant;
use tracing::{debug, warn};

/// Screens opened on top of the team list.
#[derive(Debug, Clone)]
enum Overlay {
    Detail(DetailScreen),
    Web(WebLinkScreen),
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Nothing,
    Render,
    /// Re-enter the list screen: discard the current list and fetch again.
    Reload,
    Quit,
}

/// The team list plus whatever screens are stacked on it.
#[derive(Debug, Clone)]
pub struct InteractiveState {
    list: TeamListScreen,
    overlays: Vec<Overlay>,
}

impl InteractiveState {
    pub fn new(league: impl Into<String>) -> Self {
        Self {
            list: TeamListScreen::new(league),
            overlays: Vec::new(),
        }
    }

    pub fn list(&self) -> &TeamListScreen {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut TeamListScreen {
        &mut self.list
    }

    /// Number of screens above the list.
    pub fn depth(&self) -> usize {
        self.overlays.len()
    }

    /// Resets the list to its loading state.
    pub fn reload(&mut self) {
        self.overlays.clear();
        self.list = TeamListScreen::new(self.list.league().to_string());
    }

    fn navigate(&mut self, navigation: Navigation) {
        match navigation {
            Navigation::Detail(team) => {
                debug!("Opening detail for {}", team.name());
                self.overlays.push(Overlay::Detail(DetailScreen::new(team)));
            }
            Navigation::Web(url) => match WebLinkScreen::new(url) {
                Ok(screen) => self.overlays.push(Overlay::Web(screen)),
                Err(message) => warn!("Not opening web link: {message}"),
            },
        }
    }

    /// Applies an action to the top-most screen.
    pub fn apply(&mut self, action: Action, page_rows: usize) -> Effect {
        match action {
            Action::Quit => return Effect::Quit,
            Action::Back => {
                return if self.overlays.pop().is_some() {
                    Effect::Render
                } else {
                    Effect::Nothing
                };
            }
            _ => {}
        }

        match self.overlays.last_mut() {
            Some(Overlay::Web(_)) => Effect::Nothing,
            Some(Overlay::Detail(detail)) => {
                if action != Action::OpenWebsite {
                    return Effect::Nothing;
                }
                if let Some(navigation) = detail.open_website() {
                    self.navigate(navigation);
                }
                Effect::Render
            }
            None => {
                if self.list.is_loading() && action != Action::Reload {
                    return Effect::Nothing;
                }
                match action {
                    Action::Up => self.list.move_up(),
                    Action::Down => self.list.move_down(),
                    Action::PageUp => self.list.page_up(page_rows),
                    Action::PageDown => self.list.page_down(page_rows),
                    Action::Select => match self.list.select() {
                        Some(navigation) => self.navigate(navigation),
                        None => return Effect::Nothing,
                    },
                    Action::Reload => return Effect::Reload,
                    _ => return Effect::Nothing,
                }
                Effect::Render
            }
        }
    }

    /// Drops timed-out notifications on every screen; true when any changed.
    pub fn expire_notifications(&mut self, now: Instant) -> bool {
        let mut changed = self.list.expire_notification(now);
        for overlay in &mut self.overlays {
            if let Overlay::Detail(detail) = overlay {
                changed |= detail.expire_notification(now);
            }
        }
        changed
    }

    /// Renders the top-most screen.
    pub fn render(&mut self, options: &RenderOptions) -> String {
        match self.overlays.last() {
            Some(Overlay::Detail(detail)) => render_detail(detail, options),
            Some(Overlay::Web(web)) => render_web_link(web, options),
            None => render_team_list(&mut self.list, options),
        }
    }
}
