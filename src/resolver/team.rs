use tracing::{debug, instrument};

use super::Resolution;
use crate::error::ResolveError;
use crate::names::sanitize;
use crate::reference::{ReferenceStore, Team};

/// Resolves free text to a canonical team.
///
/// Exact code match first (case-insensitive), then the first alias, in storage
/// order, whose text contains the sanitized input.
#[derive(Debug, Clone, Copy)]
pub struct TeamResolver<'a> {
    store: &'a ReferenceStore,
}

impl<'a> TeamResolver<'a> {
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self { store }
    }

    /// Runs the exact and alias stages. Never returns `Ambiguous`.
    #[instrument(skip(self))]
    pub fn resolve(&self, input: &str) -> Resolution<&'a Team> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Resolution::NotFound;
        }

        if let Some(team) = self.store.team(&trimmed.to_uppercase()) {
            debug!("Exact team code match: {}", team.code);
            return Resolution::Resolved(team);
        }

        let query = sanitize(trimmed);
        if query.trim().is_empty() {
            return Resolution::NotFound;
        }

        let aliased = self
            .store
            .team_aliases()
            .iter()
            .find(|alias| alias.alias.contains(&query))
            .and_then(|alias| self.store.team(&alias.team));

        match aliased {
            Some(team) => {
                debug!("Team alias match: '{query}' -> {}", team.code);
                Resolution::Resolved(team)
            }
            None => {
                debug!("No team found for '{query}'");
                Resolution::NotFound
            }
        }
    }

    /// Resolves to a team code, or a `TeamNotFound` carrying every valid code.
    ///
    /// # Examples
    /// ```
    /// use gridiron_lookup::resolver::TeamResolver;
    /// use gridiron_lookup::testing_utils::TestDataBuilder;
    ///
    /// let store = TestDataBuilder::sample_store();
    /// let teams = TeamResolver::new(&store);
    /// assert_eq!(teams.resolve_team("ne").unwrap(), "NE");
    /// assert_eq!(teams.resolve_team("Patriots").unwrap(), "NE");
    /// assert!(teams.resolve_team("zz").is_err());
    /// ```
    pub fn resolve_team(&self, input: &str) -> Result<String, ResolveError> {
        match self.resolve(input) {
            Resolution::Resolved(team) => Ok(team.code.clone()),
            Resolution::Ambiguous(_) | Resolution::NotFound => Err(ResolveError::team_not_found(
                input,
                self.store.team_codes(None, None),
            )),
        }
    }

    /// Resolves a team and returns one of its site identifiers.
    ///
    /// A resolved team without the requested key is a `MissingCrossReference`,
    /// distinct from the team not being found.
    pub fn cross_reference(&self, input: &str, key: &str) -> Result<String, ResolveError> {
        let code = self.resolve_team(input)?;
        self.store
            .team(&code)
            .and_then(|team| team.cross_reference(key))
            .map(str::to_string)
            .ok_or_else(|| ResolveError::missing_cross_reference(code, key))
    }
}
