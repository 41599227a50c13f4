//! Interactive terminal UI.
//!
//! The team fetch runs on a spawned task; this loop only polls the handle, so
//! keyboard input and the loading spinner stay live while the request is in
//! flight. Quitting aborts the task and its result is dropped.

pub mod input_handler;
pub mod state_manager;
pub mod terminal_manager;

use crate::config::Config;
use crate::constants::ui::{CHROME_ROWS, POLL_INTERVAL_MS};
use crate::data_fetcher::{Team, load_league_teams};
use crate::error::AppError;
use crate::ui::render::RenderOptions;
use crossterm::event::{self, Event};
use input_handler::action_for_key;
use reqwest::Client;
use state_manager::{Effect, InteractiveState};
use std::io::Write;
use std::time::{Duration, Instant};
use terminal_manager::TerminalManager;
use tokio::task::JoinHandle;
use tracing::{debug, info};

type FetchHandle = JoinHandle<Result<Vec<Team>, AppError>>;

fn spawn_fetch(client: &Client, config: &Config, league: &str) -> FetchHandle {
    let client = client.clone();
    let config = config.clone();
    let league = league.to_string();
    tokio::spawn(async move { load_league_teams(&client, &config, &league).await })
}

fn discard(pending: &mut Option<FetchHandle>) {
    if let Some(handle) = pending.take() {
        debug!("Discarding in-flight team fetch");
        handle.abort();
    }
}

/// Runs the list / detail / web-link screens until the user quits.
pub async fn run_interactive_ui(
    client: Client,
    config: Config,
    league: String,
    disable_links: bool,
) -> Result<(), AppError> {
    let terminal = TerminalManager::new();
    let mut out = terminal.setup_terminal()?;

    let result = event_loop(&mut out, &client, &config, &league, disable_links).await;

    terminal.cleanup_terminal(out)?;
    result
}

async fn event_loop(
    out: &mut impl Write,
    client: &Client,
    config: &Config,
    league: &str,
    disable_links: bool,
) -> Result<(), AppError> {
    info!("Entering team list for {league}");
    let mut state = InteractiveState::new(league);
    let mut pending = Some(spawn_fetch(client, config, league));
    let mut needs_render = true;

    loop {
        if let Some(handle) = pending.take_if(|handle| handle.is_finished()) {
            match handle.await {
                Ok(Ok(teams)) => state.list_mut().load_succeeded(teams),
                Ok(Err(error)) => state.list_mut().load_failed(&error),
                Err(join_error) => state.list_mut().load_failed(&join_error),
            }
            needs_render = true;
        }

        if state.list().is_loading() && state.depth() == 0 {
            state.list_mut().tick();
            needs_render = true;
        }

        if state.expire_notifications(Instant::now()) {
            needs_render = true;
        }

        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        if needs_render {
            let options = RenderOptions {
                width,
                height: Some(height),
                disable_links,
                interactive: true,
            };
            out.write_all(state.render(&options).as_bytes())?;
            out.flush()?;
            needs_render = false;
        }

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) => {
                let Some(action) = action_for_key(&key) else {
                    continue;
                };
                let page_rows = height.saturating_sub(CHROME_ROWS).max(1) as usize;
                match state.apply(action, page_rows) {
                    Effect::Nothing => {}
                    Effect::Render => needs_render = true,
                    Effect::Reload => {
                        discard(&mut pending);
                        state.reload();
                        pending = Some(spawn_fetch(client, config, league));
                        needs_render = true;
                    }
                    Effect::Quit => {
                        discard(&mut pending);
                        break;
                    }
                }
            }
            Event::Resize(_, _) => needs_render = true,
            _ => {}
        }
    }

    Ok(())
}
