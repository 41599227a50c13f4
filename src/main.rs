// src/main.rs
mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod data_fetcher;
mod error;
mod logging;
mod ui;
mod version;

use clap::Parser;
use cli::{Args, is_config_operation, is_once_mode};
use config::Config;
use data_fetcher::api::create_http_client_with_timeout;
use error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.version {
        return commands::handle_version_command();
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;
    let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
    let league = commands::resolve_league(&args, &config);

    if let Some(name) = &args.team {
        return commands::handle_team_command(&client, &config, &league, name, args.disable_links)
            .await;
    }

    if args.json {
        return commands::handle_json_command(&client, &config, &league).await;
    }

    if is_once_mode(&args) {
        return commands::handle_once_command(&client, &config, &league, args.disable_links).await;
    }

    app::run_interactive(&args, client, config, league).await
}
