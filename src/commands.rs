use crate::cli::{Args, Command};
use gridiron_lookup::config::Config;
use gridiron_lookup::constants::search::MAX_FULL_ROWS;
use gridiron_lookup::error::AppError;
use gridiron_lookup::reference::{Conference, Division, IdField, ReferenceStore};
use gridiron_lookup::resolver::{PlayerResolver, TeamResolver, Thresholds};
use tracing::info;

/// Runs one lookup command against a loaded store and returns the reply lines.
///
/// Resolution failures are replies, not errors: the caller prints them like any
/// other answer.
pub fn run_command(store: &ReferenceStore, thresholds: Thresholds, command: &Command) -> Vec<String> {
    match command {
        Command::Team { text } => handle_team_command(store, &text.join(" ")),
        Command::Player { rid, text } => {
            let field = if *rid { IdField::Secondary } else { IdField::Id };
            handle_player_command(store, thresholds, &text.join(" "), field)
        }
        Command::Teams {
            conference,
            division,
        } => handle_teams_command(store, *conference, *division),
        Command::Players { full, text } => handle_players_command(store, &text.join(" "), *full),
        Command::Xref { team, key } => handle_xref_command(store, team, key),
        Command::Stats => vec![store.stats().to_string()],
    }
}

/// Handles `team <TEXT>`.
pub fn handle_team_command(store: &ReferenceStore, text: &str) -> Vec<String> {
    match TeamResolver::new(store).resolve_team(text) {
        Ok(code) => match store.team(&code) {
            Some(team) => vec![format!("{code} ({} {})", team.conference, team.division)],
            None => vec![code],
        },
        Err(e) => {
            info!("Team lookup failed for '{text}'");
            vec![e.to_string()]
        }
    }
}

/// Handles `player [--rid] <TEXT>`.
pub fn handle_player_command(
    store: &ReferenceStore,
    thresholds: Thresholds,
    text: &str,
    field: IdField,
) -> Vec<String> {
    match PlayerResolver::with_thresholds(store, thresholds).lookup_id(text, field) {
        Ok(id) => vec![format!("{}: {id}", field.label())],
        Err(e) => {
            info!("Player lookup failed for '{text}'");
            vec![e.to_string()]
        }
    }
}

/// Handles `teams [--conf] [--div]`.
pub fn handle_teams_command(
    store: &ReferenceStore,
    conference: Option<Conference>,
    division: Option<Division>,
) -> Vec<String> {
    let codes = store.team_codes(conference, division);
    if codes.is_empty() {
        return vec!["ERROR: No teams match that conference/division.".to_string()];
    }
    vec![codes.join(" | ")]
}

/// Handles `players [--full] <TEXT>`.
pub fn handle_players_command(store: &ReferenceStore, text: &str, full: bool) -> Vec<String> {
    let found = PlayerResolver::new(store).search(text);
    if found.is_empty() {
        return vec![format!(
            "ERROR: Sorry, I did not find any players matching {text}"
        )];
    }

    if !full {
        let mut names: Vec<&str> = found.iter().map(|p| p.fullname.as_str()).collect();
        names.sort_unstable();
        return vec![format!(
            "Matching players found({}): {}",
            found.len(),
            names.join(" | ")
        )];
    }

    let mut lines = vec![
        format!("| {:>6} | {:>6} | {:<30} |", "EID", "RID", "NAME"),
        format!("|{0:-<8}|{0:-<8}|{0:-<32}|", ""),
    ];
    for player in found.iter().take(MAX_FULL_ROWS) {
        lines.push(format!(
            "| {:6} | {:6} | {:30} |",
            player.id,
            player.rid.as_deref().unwrap_or(""),
            player.fullname
        ));
    }
    if found.len() > MAX_FULL_ROWS {
        lines.push(format!(
            "Sorry, I found too many results for '{text}' (Total: {}). Try something more specific.",
            found.len()
        ));
    }
    lines
}

/// Handles `xref <TEAM> <KEY>`.
pub fn handle_xref_command(store: &ReferenceStore, team: &str, key: &str) -> Vec<String> {
    match TeamResolver::new(store).cross_reference(team, key) {
        Ok(value) => vec![value],
        Err(e) => vec![e.to_string()],
    }
}

/// Handles configuration update commands (--set-data-dir, --set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = match Config::load_from_path(&Config::get_config_path()).await {
        Ok(config) => config,
        Err(_) => Config::default(),
    };

    if let Some(new_data_dir) = &args.new_data_dir {
        config.data_dir = new_data_dir.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");
    Ok(())
}
