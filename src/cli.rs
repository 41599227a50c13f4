use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// True when the team list is printed once instead of opening the
/// interactive UI. `--debug` prints once so its stdout logs stay readable.
pub fn is_once_mode(args: &Args) -> bool {
    args.once || args.debug
}

/// True when the arguments ask for a config update rather than team output.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_base_url.is_some()
        || args.new_api_key.is_some()
        || args.new_league.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Football Stadium Finder
///
/// A teletext-style browser for the stadiums of a football league.
/// Fetches the league's teams from TheSportsDB and shows each team's stadium,
/// its location on a map and the club website.
///
/// In interactive mode (default):
/// - Use arrow keys (↑/↓) to pick a team, Enter to open it
/// - Press 'w' on a team to open its website link
/// - Press Esc or Backspace to go back
/// - Press 'r' to reload the list
/// - Press 'q' to quit
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// League to list, as TheSportsDB names it (for example "Spanish La Liga").
    /// Defaults to the league in the config file.
    #[arg(short = 'L', long = "league", help_heading = "Display Options")]
    pub league: Option<String>,

    /// Show the team list once and exit immediately.
    /// The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Show the detail page of one team (exact name) and exit.
    #[arg(short = 't', long = "team", help_heading = "Display Options")]
    pub team: Option<String>,

    /// Disable clickable map and website links in the output.
    /// Useful for terminals that don't support links or for plain text output.
    #[arg(long = "plain", short = 'p', help_heading = "Display Options")]
    pub disable_links: bool,

    /// Print the reconciled teams as JSON and exit.
    #[arg(long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Update the API base URL in config.
    #[arg(long = "config", help_heading = "Configuration", value_name = "API_BASE_URL")]
    pub new_api_base_url: Option<String>,

    /// Update the TheSportsDB API key in config.
    #[arg(long = "set-api-key", help_heading = "Configuration", value_name = "KEY")]
    pub new_api_key: Option<String>,

    /// Update the default league in config.
    #[arg(long = "set-league", help_heading = "Configuration", value_name = "NAME")]
    pub new_league: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: print the team list once, like --once, and write
    /// logs to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_interactive() {
        let args = Args::parse_from(["stadium_finder"]);
        assert!(!is_once_mode(&args));
        assert!(!is_config_operation(&args));
        assert!(args.league.is_none());
    }

    #[test]
    fn test_output_flags_are_not_config_operations() {
        for flags in [
            vec!["stadium_finder", "--once"],
            vec!["stadium_finder", "-t", "Girona"],
            vec!["stadium_finder", "--json"],
            vec!["stadium_finder", "-V"],
            vec!["stadium_finder", "--debug"],
        ] {
            let args = Args::parse_from(&flags);
            assert!(!is_config_operation(&args), "{flags:?}");
        }
    }

    #[test]
    fn test_debug_prints_once() {
        let args = Args::parse_from(["stadium_finder", "--debug"]);
        assert!(is_once_mode(&args));
        assert!(!args.once);

        let args = Args::parse_from(["stadium_finder"]);
        assert!(!is_once_mode(&args));
    }

    #[test]
    fn test_config_flags() {
        let args = Args::parse_from([
            "stadium_finder",
            "--config",
            "localhost:8080",
            "--set-league",
            "English Premier League",
        ]);
        assert!(is_config_operation(&args));
        assert_eq!(args.new_api_base_url.as_deref(), Some("localhost:8080"));
        assert_eq!(args.new_league.as_deref(), Some("English Premier League"));
    }

    #[test]
    fn test_league_and_plain() {
        let args = Args::parse_from(["stadium_finder", "-L", "Italian Serie A", "-p", "-o"]);
        assert_eq!(args.league.as_deref(), Some("Italian Serie A"));
        assert!(args.disable_links);
        assert!(args.once);
    }
}
