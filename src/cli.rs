use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use gridiron_lookup::reference::{Conference, Division};

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

/// True when the invocation only touches the config file.
pub fn is_config_update(args: &Args) -> bool {
    args.new_data_dir.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
}

/// NFL team and player name lookup
///
/// Resolves nicknames, abbreviations and misspelled player names to the
/// canonical identifiers the bot uses to build scrape URLs.
///
/// Examples:
///   gridiron_lookup team pats
///   gridiron_lookup player tom braddy
///   gridiron_lookup player --rid beast mode
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding teams.{toml,json} and players.{toml,json}.
    /// Overrides the configured data directory for this run.
    #[arg(long = "data-dir", global = true, help_heading = "Data")]
    pub data_dir: Option<String>,

    /// Update the data directory in config.
    #[arg(long = "set-data-dir", help_heading = "Configuration")]
    pub new_data_dir: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also write debug logs to the terminal.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve a team code, nickname or alias to its canonical code
    Team {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Resolve a player name (full, partial or misspelled) to an id
    Player {
        /// Return the secondary (RID) identifier instead of the primary one
        #[arg(long)]
        rid: bool,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// List valid team codes
    Teams {
        #[arg(long = "conf")]
        conference: Option<Conference>,
        #[arg(long = "div")]
        division: Option<Division>,
    },
    /// Search players by name
    Players {
        /// Print an id table instead of a name list
        #[arg(long)]
        full: bool,
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Print a team's identifier for one site (full, short, pfr, spotrac, ...)
    Xref { team: String, key: String },
    /// Show reference table sizes
    Stats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_player_with_rid() {
        let args = Args::try_parse_from(["gridiron_lookup", "player", "--rid", "tom", "brady"])
            .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Player {
                rid: true,
                text: vec!["tom".to_string(), "brady".to_string()],
            })
        );
    }

    #[test]
    fn test_parse_teams_filters() {
        let args =
            Args::try_parse_from(["gridiron_lookup", "teams", "--conf", "afc", "--div", "east"])
                .unwrap();
        assert_eq!(
            args.command,
            Some(Command::Teams {
                conference: Some(Conference::Afc),
                division: Some(Division::East),
            })
        );
    }

    #[test]
    fn test_parse_rejects_bad_conference() {
        assert!(Args::try_parse_from(["gridiron_lookup", "teams", "--conf", "xfl"]).is_err());
    }

    #[test]
    fn test_team_requires_text() {
        assert!(Args::try_parse_from(["gridiron_lookup", "team"]).is_err());
    }

    #[test]
    fn test_config_update_detection() {
        let args = Args::try_parse_from(["gridiron_lookup", "--set-data-dir", "/srv/data"]).unwrap();
        assert!(is_config_update(&args));
        let args = Args::try_parse_from(["gridiron_lookup", "stats"]).unwrap();
        assert!(!is_config_update(&args));
    }

    #[test]
    fn test_command_metadata() {
        let command = Args::command();
        assert!(command.get_author().is_none());
        assert_eq!(command.get_name(), "gridiron_lookup");
    }

    #[test]
    fn test_global_data_dir_after_subcommand() {
        let args =
            Args::try_parse_from(["gridiron_lookup", "stats", "--data-dir", "data"]).unwrap();
        assert_eq!(args.data_dir.as_deref(), Some("data"));
    }
}
