use thiserror::Error;

use crate::resolver::Candidate;

/// Recoverable outcomes of a failed name resolution.
///
/// None of these are fatal: the caller turns them into a reply for the user.
/// The `Display` strings are the replies the bot sends back.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("ERROR: Team not found. Valid teams are: {}", valid.join(" | "))]
    TeamNotFound { input: String, valid: Vec<String> },

    #[error(
        "ERROR: No player found for: '{input}'. Maybe you were looking for: {}",
        format_candidate_names(candidates)
    )]
    PlayerNotFound {
        input: String,
        candidates: Vec<Candidate>,
    },

    #[error("ERROR: I do not have a valid {field} for {entity}. My apologies.")]
    MissingCrossReference { entity: String, field: String },
}

impl ResolveError {
    /// Create a team not found error carrying the valid team list
    pub fn team_not_found(input: impl Into<String>, valid: Vec<String>) -> Self {
        Self::TeamNotFound {
            input: input.into(),
            valid,
        }
    }

    /// Create a player not found error carrying the "did you mean" guesses
    pub fn player_not_found(input: impl Into<String>, candidates: Vec<Candidate>) -> Self {
        Self::PlayerNotFound {
            input: input.into(),
            candidates,
        }
    }

    /// Create a missing cross-reference error
    pub fn missing_cross_reference(entity: impl Into<String>, field: impl Into<String>) -> Self {
        Self::MissingCrossReference {
            entity: entity.into(),
            field: field.into(),
        }
    }

    /// True when the name itself resolved but the requested identifier is absent
    pub fn is_missing_cross_reference(&self) -> bool {
        matches!(self, ResolveError::MissingCrossReference { .. })
    }
}

fn format_candidate_names(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| title_case(&c.fullname))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Capitalizes the first letter of every whitespace separated word.
pub(crate) fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    // Reference data invariants
    #[error("Reference data file not found: {path}")]
    ReferenceFileMissing { path: String },

    #[error("Unsupported reference data format: {path}")]
    ReferenceFormat { path: String },

    #[error("Duplicate team code in reference data: {code}")]
    DuplicateTeamCode { code: String },

    #[error("Duplicate player id in reference data: {id}")]
    DuplicatePlayerId { id: String },

    #[error("Alias '{alias}' points to unknown {kind} '{target}'")]
    UnknownAliasTarget {
        kind: &'static str,
        alias: String,
        target: String,
    },

    #[error("Invalid value '{value}' for {field}")]
    InvalidReferenceValue { field: &'static str, value: String },

    #[error("{0}")]
    Resolve(#[from] ResolveError),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn reference_file_missing(path: impl Into<String>) -> Self {
        Self::ReferenceFileMissing { path: path.into() }
    }

    pub fn reference_format(path: impl Into<String>) -> Self {
        Self::ReferenceFormat { path: path.into() }
    }

    pub fn duplicate_team_code(code: impl Into<String>) -> Self {
        Self::DuplicateTeamCode { code: code.into() }
    }

    pub fn duplicate_player_id(id: impl Into<String>) -> Self {
        Self::DuplicatePlayerId { id: id.into() }
    }

    /// Create an alias error for an alias whose target is not loaded
    pub fn unknown_alias_target(
        kind: &'static str,
        alias: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self::UnknownAliasTarget {
            kind,
            alias: alias.into(),
            target: target.into(),
        }
    }

    pub fn invalid_reference_value(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidReferenceValue {
            field,
            value: value.into(),
        }
    }

    /// Check if error came from the reference data rather than from the user's query
    pub fn is_reference_data_error(&self) -> bool {
        matches!(
            self,
            AppError::ReferenceFileMissing { .. }
                | AppError::ReferenceFormat { .. }
                | AppError::DuplicateTeamCode { .. }
                | AppError::DuplicatePlayerId { .. }
                | AppError::UnknownAliasTarget { .. }
                | AppError::InvalidReferenceValue { .. }
        )
    }

    /// Check if error is a recoverable resolution miss
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Resolve(ResolveError::TeamNotFound { .. })
                | AppError::Resolve(ResolveError::PlayerNotFound { .. })
        )
    }
}
