//! Reading reference tables from disk.
//!
//! The ingestion process writes two files into the data directory:
//! `teams.toml` (or `teams.json`) with `teams` and `team_aliases` arrays, and
//! `players.toml` (or `players.json`) with `players` and `player_aliases`.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, instrument};

use super::models::{PlayerTables, TeamTables};
use super::store::ReferenceStore;
use crate::constants::files;
use crate::error::AppError;

/// Serialization format of a reference file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Toml,
    Json,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Ok(DataFormat::Toml),
            Some("json") => Ok(DataFormat::Json),
            _ => Err(AppError::reference_format(path.display().to_string())),
        }
    }
}

/// Parses a table file's contents.
pub fn parse_tables<T: DeserializeOwned>(content: &str, format: DataFormat) -> Result<T, AppError> {
    match format {
        DataFormat::Toml => Ok(toml::from_str(content)?),
        DataFormat::Json => Ok(serde_json::from_str(content)?),
    }
}

/// Reads and parses a single table file.
#[instrument(skip_all, fields(path = %path.display()))]
pub async fn load_tables<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let format = DataFormat::from_path(path)?;
    let content = fs::read_to_string(path).await?;
    debug!("Read {} bytes of reference data", content.len());
    parse_tables(&content, format)
}

/// Finds `<dir>/<stem>.toml` or `<dir>/<stem>.json`, in that order.
pub async fn find_table_file(dir: &Path, stem: &str) -> Result<PathBuf, AppError> {
    for ext in files::EXTENSIONS {
        let candidate = dir.join(format!("{stem}.{ext}"));
        if fs::try_exists(&candidate).await? {
            return Ok(candidate);
        }
    }
    Err(AppError::reference_file_missing(
        dir.join(format!("{stem}.{{toml,json}}"))
            .display()
            .to_string(),
    ))
}

impl ReferenceStore {
    /// Loads both reference files from a data directory and builds the store.
    ///
    /// # Errors
    /// * `AppError::ReferenceFileMissing` - a table file is absent
    /// * `AppError::TomlDeserialize` / `AppError::Json` - a file does not parse
    /// * any invariant error from [`ReferenceStore::new`]
    pub async fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let dir = dir.as_ref();
        let teams_path = find_table_file(dir, files::TEAMS_STEM).await?;
        let players_path = find_table_file(dir, files::PLAYERS_STEM).await?;

        let teams: TeamTables = load_tables(&teams_path).await?;
        let players: PlayerTables = load_tables(&players_path).await?;

        ReferenceStore::new(teams, players)
    }

    /// Builds a store from in-memory TOML documents.
    pub fn from_toml_strs(teams: &str, players: &str) -> Result<Self, AppError> {
        ReferenceStore::new(
            parse_tables(teams, DataFormat::Toml)?,
            parse_tables(players, DataFormat::Toml)?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TEAMS: &str = r#"
[[teams]]
code = "NE"
conference = "AFC"
division = "East"

[[team_aliases]]
alias = "patriots"
team = "NE"
"#;

    const PLAYERS: &str = r#"
[[players]]
id = "2330"
fullname = "tom brady"
rid = "1163"
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DataFormat::from_path(Path::new("a/teams.toml")).unwrap(),
            DataFormat::Toml
        );
        assert_eq!(
            DataFormat::from_path(Path::new("players.JSON")).unwrap(),
            DataFormat::Json
        );
        assert!(matches!(
            DataFormat::from_path(Path::new("players.csv")),
            Err(AppError::ReferenceFormat { .. })
        ));
    }

    #[test]
    fn test_from_toml_strs() {
        let store = ReferenceStore::from_toml_strs(TEAMS, PLAYERS).unwrap();
        assert_eq!(store.stats().teams, 1);
        assert_eq!(store.stats().players, 1);
    }

    #[test]
    fn test_parse_tables_reports_bad_toml() {
        let result: Result<TeamTables, _> = parse_tables("[[teams]]\ncode = ", DataFormat::Toml);
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_load_from_dir_mixed_formats() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("teams.toml"), TEAMS)
            .await
            .unwrap();
        tokio::fs::write(
            dir.path().join("players.json"),
            r#"{"players": [{"id": "2330", "fullname": "tom brady"}]}"#,
        )
        .await
        .unwrap();

        let store = ReferenceStore::load_from_dir(dir.path()).await.unwrap();
        assert!(store.team("NE").is_some());
        assert!(store.player("2330").is_some());
    }

    #[tokio::test]
    async fn test_load_from_dir_missing_file() {
        let dir = tempdir().unwrap();
        tokio::fs::write(dir.path().join("teams.toml"), TEAMS)
            .await
            .unwrap();
        let error = ReferenceStore::load_from_dir(dir.path()).await.unwrap_err();
        assert!(matches!(error, AppError::ReferenceFileMissing { .. }));
        assert!(error.is_reference_data_error());
    }
}
