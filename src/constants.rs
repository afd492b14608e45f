//! Application-wide constants and configuration values
//!
//! This module centralizes the matching thresholds and file names so the
//! resolvers, the config layer and the CLI agree on them.

/// Application name, used for the config directory and log file names
pub const APP_NAME: &str = "gridiron_lookup";

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "gridiron_lookup.log";

/// Reference data file stems. The loader accepts `.toml` and `.json`.
pub mod files {
    /// Teams and team aliases
    pub const TEAMS_STEM: &str = "teams";

    /// Players and player aliases
    pub const PLAYERS_STEM: &str = "players";

    /// Extensions tried in order when looking up a table file
    pub const EXTENSIONS: [&str; 2] = ["toml", "json"];
}

/// Fuzzy matcher tuning
pub mod fuzzy {
    /// Number of entries kept from each metric's ranking
    pub const TOP_N: usize = 5;

    /// Entries taken from each metric when the two top lists share nobody
    pub const FALLBACK_PER_METRIC: usize = 2;

    /// Jaro similarity above which a candidate is accepted
    pub const SIMILARITY_THRESHOLD: f64 = 0.7;

    /// Damerau-Levenshtein distance below which a candidate is accepted
    pub const DISTANCE_THRESHOLD: usize = 7;
}

/// Player search listing limits
pub mod search {
    /// Rows printed by the full player listing before giving up
    pub const MAX_FULL_ROWS: usize = 5;
}

/// Environment variable names that override config file values
pub mod env_vars {
    pub const DATA_DIR: &str = "GRIDIRON_DATA_DIR";
    pub const LOG_FILE: &str = "GRIDIRON_LOG_FILE";
}
