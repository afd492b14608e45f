//! NFL team and player name resolution
//!
//! This library turns free text from chat users (team nicknames, abbreviations,
//! partial or misspelled player names) into the canonical identifiers used to
//! build scrape URLs.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gridiron_lookup::error::AppError;
//! use gridiron_lookup::reference::{IdField, ReferenceStore};
//! use gridiron_lookup::resolver::{PlayerResolver, TeamResolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let store = ReferenceStore::load_from_dir("data").await?;
//!
//!     let team = TeamResolver::new(&store).resolve_team("niners")?;
//!     let player = PlayerResolver::new(&store).resolve_player("tom braddy", IdField::Id);
//!
//!     match player {
//!         Ok(id) => println!("{team}: player {id}"),
//!         // "ERROR: No player found for: ... Maybe you were looking for: ..."
//!         Err(reply) => println!("{reply}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod names;
pub mod reference;
pub mod resolver;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, ResolveError};
pub use names::sanitize;
pub use reference::{IdField, ReferenceStore};
pub use resolver::{PlayerResolver, Resolution, TeamResolver, rank};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
