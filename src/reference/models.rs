use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::names::{NameKeys, sanitize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conference {
    Afc,
    Nfc,
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conference::Afc => write!(f, "AFC"),
            Conference::Nfc => write!(f, "NFC"),
        }
    }
}

impl FromStr for Conference {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AFC" => Ok(Conference::Afc),
            "NFC" => Ok(Conference::Nfc),
            _ => Err(AppError::invalid_reference_value("conference", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    North,
    South,
    East,
    West,
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Division::North => "North",
            Division::South => "South",
            Division::East => "East",
            Division::West => "West",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Division {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Division::North),
            "south" => Ok(Division::South),
            "east" => Ok(Division::East),
            "west" => Ok(Division::West),
            _ => Err(AppError::invalid_reference_value("division", s)),
        }
    }
}

/// Canonical team record.
///
/// `xref` holds the per-site identifiers scrapers use to build URLs
/// (`full`, `short`, `pfr`, `spotrac`, ...). They are opaque to resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub code: String,
    pub conference: Conference,
    pub division: Division,
    #[serde(default)]
    pub xref: BTreeMap<String, String>,
}

impl Team {
    /// Looks up a site-specific identifier for this team.
    pub fn cross_reference(&self, key: &str) -> Option<&str> {
        self.xref
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Alternate text that maps to a team code. Matched by substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAlias {
    pub alias: String,
    pub team: String,
}

/// Player row as written by the ingestion process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: String,
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rid: Option<String>,
}

/// Alternate text that maps to a player id. Matched by substring containment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAlias {
    pub alias: String,
    pub player: String,
}

/// Which identifier of a resolved player the caller needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdField {
    /// Primary id
    #[default]
    Id,
    /// Secondary id used by the other news site; not every player has one
    Secondary,
}

impl IdField {
    pub fn label(self) -> &'static str {
        match self {
            IdField::Id => "EID",
            IdField::Secondary => "RID",
        }
    }
}

/// Canonical player record with its precomputed phonetic keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub fullname: String,
    pub rid: Option<String>,
    /// Sanitized full name, the text every matching stage compares against
    pub match_name: String,
    pub keys: NameKeys,
}

impl Player {
    pub fn new(id: impl Into<String>, fullname: impl Into<String>, rid: Option<String>) -> Self {
        let fullname = fullname.into();
        let match_name = sanitize(fullname.trim());
        let keys = NameKeys::from_sanitized(&match_name);
        Self {
            id: id.into(),
            fullname,
            rid: rid.filter(|rid| !rid.trim().is_empty()),
            match_name,
            keys,
        }
    }

    /// Returns the requested identifier, or `None` when the player lacks it.
    pub fn identifier(&self, field: IdField) -> Option<&str> {
        match field {
            IdField::Id => Some(self.id.as_str()),
            IdField::Secondary => self.rid.as_deref(),
        }
    }
}

impl From<PlayerRecord> for Player {
    fn from(record: PlayerRecord) -> Self {
        Player::new(record.id, record.fullname, record.rid)
    }
}

/// Contents of a teams reference file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamTables {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub team_aliases: Vec<TeamAlias>,
}

/// Contents of a players reference file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerTables {
    #[serde(default)]
    pub players: Vec<PlayerRecord>,
    #[serde(default)]
    pub player_aliases: Vec<PlayerAlias>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conference_parsing() {
        assert_eq!("afc".parse::<Conference>().unwrap(), Conference::Afc);
        assert_eq!(" NFC ".parse::<Conference>().unwrap(), Conference::Nfc);
        assert!("XFL".parse::<Conference>().is_err());
        assert_eq!(Conference::Afc.to_string(), "AFC");
    }

    #[test]
    fn test_division_parsing() {
        assert_eq!("North".parse::<Division>().unwrap(), Division::North);
        assert_eq!("west".parse::<Division>().unwrap(), Division::West);
        assert!("central".parse::<Division>().is_err());
    }

    #[test]
    fn test_team_deserialization() {
        let team: Team = toml::from_str(
            r#"
code = "NE"
conference = "AFC"
division = "East"

[xref]
full = "New England Patriots"
pfr = "nwe"
"#,
        )
        .unwrap();
        assert_eq!(team.code, "NE");
        assert_eq!(team.conference, Conference::Afc);
        assert_eq!(team.division, Division::East);
        assert_eq!(team.cross_reference("pfr"), Some("nwe"));
        assert_eq!(team.cross_reference("yahoo"), None);
    }

    #[test]
    fn test_empty_cross_reference_counts_as_missing() {
        let mut team = Team {
            code: "NE".to_string(),
            conference: Conference::Afc,
            division: Division::East,
            xref: BTreeMap::new(),
        };
        team.xref.insert("roto".to_string(), String::new());
        assert_eq!(team.cross_reference("roto"), None);
    }

    #[test]
    fn test_player_new_computes_match_name_and_keys() {
        let player = Player::new("2330", "Tom Brady.", Some("1163".to_string()));
        assert_eq!(player.match_name, "tom brady");
        assert!(player.keys.first.is_some());
        assert!(player.keys.last.is_some());
        assert_eq!(player.identifier(IdField::Id), Some("2330"));
        assert_eq!(player.identifier(IdField::Secondary), Some("1163"));
    }

    #[test]
    fn test_player_blank_rid_is_missing() {
        let player = Player::new("1", "Jon Smith", Some("  ".to_string()));
        assert_eq!(player.identifier(IdField::Secondary), None);
    }

    #[test]
    fn test_player_tables_json() {
        let tables: PlayerTables = serde_json::from_str(
            r#"{"players": [{"id": "1", "fullname": "jon smith"}],
                "player_aliases": [{"alias": "smitty", "player": "1"}]}"#,
        )
        .unwrap();
        assert_eq!(tables.players.len(), 1);
        assert_eq!(tables.players[0].rid, None);
        assert_eq!(tables.player_aliases[0].player, "1");
    }

    #[test]
    fn test_id_field_labels() {
        assert_eq!(IdField::Id.label(), "EID");
        assert_eq!(IdField::Secondary.label(), "RID");
        assert_eq!(IdField::default(), IdField::Id);
    }
}
