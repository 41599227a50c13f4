use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::{Team, load_league_teams};
use crate::error::AppError;
use crate::ui::render::{RenderOptions, render_detail, render_team_list};
use crate::ui::screens::{DetailScreen, TeamListScreen};
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use reqwest::Client;
use std::io::{Write, stdout};
use std::path::Path;
use tracing::info;

const TERMINAL_TITLE: &str = "STADIUMS";

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.new_log_file_path.is_some() && args.clear_log_file_path {
        return Err(AppError::config_error(
            "Cannot use both --set-log-file and --clear-log-file",
        ));
    }
    let outputs = [args.once, args.team.is_some(), args.json]
        .iter()
        .filter(|set| **set)
        .count();
    if outputs > 1 {
        return Err(AppError::config_error(
            "Use only one of --once (-o), --team (-t) and --json",
        ));
    }
    if matches!(&args.league, Some(league) if league.trim().is_empty()) {
        return Err(AppError::config_error("League name cannot be empty"));
    }
    Ok(())
}

/// The league to show: the `--league` flag, else the configured default.
pub fn resolve_league(args: &Args, config: &Config) -> String {
    args.league
        .clone()
        .unwrap_or_else(|| config.default_league.clone())
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;
    version::print_logo();
    version::print_version_info();
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(TERMINAL_TITLE))?;

    version::print_logo();
    Config::display().await?;

    Ok(())
}

/// Copies the config flags from the command line onto `config`.
///
/// Returns true when the custom log path was cleared.
fn apply_config_updates(config: &mut Config, args: &Args) -> bool {
    if let Some(url) = &args.new_api_base_url {
        config.api_base_url = url.clone();
    }
    if let Some(key) = &args.new_api_key {
        config.api_key = key.clone();
    }
    if let Some(league) = &args.new_league {
        config.default_league = league.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        return true;
    }
    false
}

/// Applies the config flags to the file at `path` and writes it back.
///
/// Only the file is read: env overrides are not persisted. A file that does
/// not parse is an error rather than being replaced with defaults, and the
/// updated config must validate before anything is written.
async fn update_config_file(path: &str, args: &Args) -> Result<bool, AppError> {
    let mut config = if Path::new(path).exists() {
        Config::load_from_path(path).await?
    } else {
        Config::default()
    };

    let cleared = apply_config_updates(&mut config, args);
    config.validate()?;
    config.save_to_path(path).await?;
    Ok(cleared)
}

/// Handles configuration update commands (--config, --set-api-key,
/// --set-league, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    if update_config_file(&Config::get_config_path(), args).await? {
        println!("Custom log file path cleared. Using default location.");
    }
    println!("Config updated successfully!");

    Ok(())
}

/// Builds the one-shot list page. A failed load becomes a page with the
/// error notification so the output is still a readable page.
pub fn build_once_page(
    league: &str,
    result: Result<Vec<Team>, AppError>,
    disable_links: bool,
) -> String {
    let mut screen = TeamListScreen::new(league);
    match result {
        Ok(teams) => screen.load_succeeded(teams),
        Err(e) => screen.load_failed(&e),
    }
    render_team_list(&mut screen, &RenderOptions::once(disable_links))
}

/// Builds the detail page for the team with exactly this name.
pub fn build_team_page(teams: Vec<Team>, name: &str, disable_links: bool) -> Result<String, AppError> {
    let team = teams
        .into_iter()
        .find(|team| team.name() == name)
        .ok_or_else(|| AppError::team_not_found(name))?;
    Ok(render_detail(
        &DetailScreen::new(team),
        &RenderOptions::once(disable_links),
    ))
}

/// Serializes the reconciled teams for `--json`.
pub fn teams_to_json(teams: &[Team]) -> Result<String, AppError> {
    serde_json::to_string_pretty(teams)
        .map_err(|e| AppError::output_serialize_error(e.to_string()))
}

fn print_page(page: &str) -> Result<(), AppError> {
    let mut out = stdout();
    execute!(out, SetTitle(TERMINAL_TITLE))?;
    out.write_all(page.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Handles the --once command (quick view mode).
///
/// A fetch failure is shown on the page rather than returned, matching what
/// the interactive list does.
pub async fn handle_once_command(
    client: &Client,
    config: &Config,
    league: &str,
    disable_links: bool,
) -> Result<(), AppError> {
    let result = load_league_teams(client, config, league).await;
    if let Ok(teams) = &result {
        info!("Printing {} teams for {league}", teams.len());
    }
    print_page(&build_once_page(league, result, disable_links))
}

/// Handles the --team command.
pub async fn handle_team_command(
    client: &Client,
    config: &Config,
    league: &str,
    name: &str,
    disable_links: bool,
) -> Result<(), AppError> {
    let teams = load_league_teams(client, config, league).await?;
    print_page(&build_team_page(teams, name, disable_links)?)
}

/// Handles the --json command.
pub async fn handle_json_command(
    client: &Client,
    config: &Config,
    league: &str,
) -> Result<(), AppError> {
    let teams = load_league_teams(client, config, league).await?;
    println!("{}", teams_to_json(&teams)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::{RawTeamRecord, reconcile_teams};
    use clap::Parser;
    use tempfile::tempdir;

    fn sample_teams() -> Vec<Team> {
        reconcile_teams(&[
            RawTeamRecord {
                name: Some("Barcelona".to_string()),
                stadium: Some("Camp Nou".to_string()),
                logo_url: Some("https://img/barca.png/preview".to_string()),
                website: Some("www.fcbarcelona.com".to_string()),
                ..Default::default()
            },
            RawTeamRecord {
                name: Some("Leganes".to_string()),
                stadium: Some("Butarque".to_string()),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_validate_args_conflicts() {
        let ok = Args::parse_from(["stadium_finder", "--once", "-L", "Spanish La Liga"]);
        assert!(validate_args(&ok).is_ok());

        let both_outputs = Args::parse_from(["stadium_finder", "--once", "--json"]);
        assert!(validate_args(&both_outputs).is_err());

        let log_conflict =
            Args::parse_from(["stadium_finder", "--set-log-file", "a.log", "--clear-log-file"]);
        assert!(validate_args(&log_conflict).is_err());

        let blank_league = Args::parse_from(["stadium_finder", "-L", " "]);
        assert!(validate_args(&blank_league).is_err());
    }

    #[test]
    fn test_resolve_league() {
        let config = Config::default();
        let args = Args::parse_from(["stadium_finder"]);
        assert_eq!(resolve_league(&args, &config), "Spanish La Liga");

        let args = Args::parse_from(["stadium_finder", "-L", "German Bundesliga"]);
        assert_eq!(resolve_league(&args, &config), "German Bundesliga");
    }

    #[test]
    fn test_apply_config_updates() {
        let mut config = Config {
            log_file_path: Some("/tmp/old.log".to_string()),
            ..Config::default()
        };
        let args = Args::parse_from([
            "stadium_finder",
            "--set-api-key",
            "secret",
            "--set-league",
            "French Ligue 1",
            "--clear-log-file",
        ]);

        assert!(apply_config_updates(&mut config, &args));
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.default_league, "French Ligue 1");
        assert_eq!(config.log_file_path, None);
    }

    #[test]
    fn test_build_once_page_lists_teams() {
        let page = build_once_page("Spanish La Liga", Ok(sample_teams()), true);
        assert!(page.contains("Barcelona"));
        assert!(page.contains("Camp Nou"));
        assert!(page.contains("Leganes"));
        assert!(!page.starts_with("\x1b[H"));
    }

    #[test]
    fn test_build_once_page_shows_failure() {
        let error = AppError::network_timeout("https://example.test/teams");
        let page = build_once_page("Spanish La Liga", Err(error), true);
        assert!(page.contains("Failed to load teams"));
    }

    #[test]
    fn test_build_team_page() {
        let page = build_team_page(sample_teams(), "Barcelona", true).unwrap();
        assert!(page.contains("Camp Nou"));
        assert!(page.contains("https://img/barca.png"));

        let missing = build_team_page(sample_teams(), "barcelona", true);
        assert!(matches!(missing, Err(AppError::TeamNotFound { .. })));
    }

    #[test]
    fn test_teams_to_json() {
        let json = teams_to_json(&sample_teams()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["name"], "Barcelona");
        assert_eq!(value[0]["logo_url"], "https://img/barca.png");
        assert_eq!(value[1]["latitude"], 0.0);
    }

    #[tokio::test]
    async fn test_update_config_file_writes_valid_changes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let args = Args::parse_from(["stadium_finder", "--set-league", "Italian Serie A"]);
        assert!(!update_config_file(path, &args).await.unwrap());

        let saved = Config::load_from_path(path).await.unwrap();
        assert_eq!(saved.default_league, "Italian Serie A");
        assert_eq!(saved.api_key, Config::default().api_key);
    }

    #[tokio::test]
    async fn test_update_config_file_rejects_invalid_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();

        let args = Args::parse_from(["stadium_finder", "--set-api-key", ""]);
        let result = update_config_file(path, &args).await;

        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(!Path::new(path).exists());
    }

    #[tokio::test]
    async fn test_update_config_file_keeps_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "api_key = [broken").await.unwrap();
        let path = path.to_str().unwrap();

        let args = Args::parse_from(["stadium_finder", "--set-league", "French Ligue 1"]);
        let result = update_config_file(path, &args).await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let content = tokio::fs::read_to_string(path).await.unwrap();
        assert_eq!(content, "api_key = [broken");
    }
}
