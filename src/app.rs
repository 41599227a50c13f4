use crate::cli::Args;
use crate::config::Config;
use crate::error::AppError;
use crate::ui;
use reqwest::Client;
use tracing::info;

/// Run the interactive application flow.
///
/// The UI sets up and restores the terminal itself; this only wires the
/// command line options into it.
pub async fn run_interactive(
    args: &Args,
    client: Client,
    config: Config,
    league: String,
) -> Result<(), AppError> {
    info!("Starting interactive mode for {league}");
    ui::run_interactive_ui(client, config, league, args.disable_links).await
}
