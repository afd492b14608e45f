use std::collections::HashMap;
use std::fmt;
use tracing::{info, warn};

use super::models::{
    Conference, Division, Player, PlayerAlias, PlayerTables, Team, TeamAlias, TeamTables,
};
use crate::error::AppError;
use crate::names::sanitize;

/// Immutable reference tables the resolvers query.
///
/// Built once from the ingestion output and never mutated afterwards, so a
/// store can be shared between threads freely. Storage order of every table is
/// the order of the input files, and every "first match" rule in the resolvers
/// refers to that order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceStore {
    teams: Vec<Team>,
    team_index: HashMap<String, usize>,
    team_aliases: Vec<TeamAlias>,
    players: Vec<Player>,
    player_index: HashMap<String, usize>,
    player_aliases: Vec<PlayerAlias>,
}

/// Table sizes, reported by the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreStats {
    pub players: usize,
    pub player_aliases: usize,
    pub teams: usize,
    pub team_aliases: usize,
}

impl fmt::Display for StoreStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NFLDB: I know about {} NFL players, {} player aliases, {} teams and {} team aliases.",
            self.players, self.player_aliases, self.teams, self.team_aliases
        )
    }
}

impl ReferenceStore {
    /// Builds a store from loaded tables, checking the reference invariants.
    ///
    /// # Errors
    /// * `AppError::DuplicateTeamCode` - two teams share a code (case-insensitive)
    /// * `AppError::DuplicatePlayerId` - two players share an id
    /// * `AppError::UnknownAliasTarget` - an alias points at a missing team or player
    pub fn new(team_tables: TeamTables, player_tables: PlayerTables) -> Result<Self, AppError> {
        let mut teams = Vec::with_capacity(team_tables.teams.len());
        let mut team_index = HashMap::with_capacity(team_tables.teams.len());
        for mut team in team_tables.teams {
            team.code = team.code.trim().to_uppercase();
            if team_index.insert(team.code.clone(), teams.len()).is_some() {
                return Err(AppError::duplicate_team_code(team.code));
            }
            teams.push(team);
        }

        let mut team_aliases = Vec::with_capacity(team_tables.team_aliases.len());
        for alias in team_tables.team_aliases {
            let target = alias.team.trim().to_uppercase();
            if !team_index.contains_key(&target) {
                return Err(AppError::unknown_alias_target("team", alias.alias, alias.team));
            }
            let text = sanitize(alias.alias.trim());
            if text.is_empty() {
                warn!("Skipping empty team alias for {target}");
                continue;
            }
            team_aliases.push(TeamAlias {
                alias: text,
                team: target,
            });
        }

        let mut players = Vec::with_capacity(player_tables.players.len());
        let mut player_index = HashMap::with_capacity(player_tables.players.len());
        for record in player_tables.players {
            let player = Player::from(record);
            if player_index
                .insert(player.id.clone(), players.len())
                .is_some()
            {
                return Err(AppError::duplicate_player_id(player.id));
            }
            players.push(player);
        }

        let mut player_aliases = Vec::with_capacity(player_tables.player_aliases.len());
        for alias in player_tables.player_aliases {
            if !player_index.contains_key(&alias.player) {
                return Err(AppError::unknown_alias_target(
                    "player",
                    alias.alias,
                    alias.player,
                ));
            }
            let text = sanitize(alias.alias.trim());
            if text.is_empty() {
                warn!("Skipping empty player alias for {}", alias.player);
                continue;
            }
            player_aliases.push(PlayerAlias {
                alias: text,
                player: alias.player,
            });
        }

        let store = Self {
            teams,
            team_index,
            team_aliases,
            players,
            player_index,
            player_aliases,
        };
        let stats = store.stats();
        info!(
            "Reference store ready: {} teams, {} team aliases, {} players, {} player aliases",
            stats.teams, stats.team_aliases, stats.players, stats.player_aliases
        );
        Ok(store)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team_aliases(&self) -> &[TeamAlias] {
        &self.team_aliases
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player_aliases(&self) -> &[PlayerAlias] {
        &self.player_aliases
    }

    /// Exact lookup by canonical code. The code must already be upper-case.
    pub fn team(&self, code: &str) -> Option<&Team> {
        self.team_index.get(code).map(|&index| &self.teams[index])
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.player_index.get(id).map(|&index| &self.players[index])
    }

    /// Sorted team codes, optionally restricted to a conference and/or division.
    pub fn team_codes(
        &self,
        conference: Option<Conference>,
        division: Option<Division>,
    ) -> Vec<String> {
        let mut codes: Vec<String> = self
            .teams
            .iter()
            .filter(|team| conference.is_none_or(|c| team.conference == c))
            .filter(|team| division.is_none_or(|d| team.division == d))
            .map(|team| team.code.clone())
            .collect();
        codes.sort();
        codes
    }

    /// Reverse cross-reference lookup, e.g. a scraped full name back to its team.
    ///
    /// Values are compared case-insensitively.
    pub fn team_by_cross_reference(&self, key: &str, value: &str) -> Option<&Team> {
        let value = value.trim();
        self.teams.iter().find(|team| {
            team.cross_reference(key)
                .is_some_and(|candidate| candidate.eq_ignore_ascii_case(value))
        })
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            players: self.players.len(),
            player_aliases: self.player_aliases.len(),
            teams: self.teams.len(),
            team_aliases: self.team_aliases.len(),
        }
    }
}
