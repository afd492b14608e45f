//! Reference tables: teams, team aliases, players and player aliases.
//!
//! - `models`: the records and the on-disk table layout
//! - `store`: the immutable, validated store the resolvers query
//! - `loader`: reading the tables from TOML or JSON files

mod loader;
mod models;
mod store;

pub use loader::{DataFormat, find_table_file, load_tables, parse_tables};
pub use models::{
    Conference, Division, IdField, Player, PlayerAlias, PlayerRecord, PlayerTables, Team,
    TeamAlias, TeamTables,
};
pub use store::{ReferenceStore, StoreStats};
