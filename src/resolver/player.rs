use tracing::{debug, instrument};

use super::Resolution;
use super::fuzzy::{Candidate, Thresholds, rank};
use crate::error::ResolveError;
use crate::names::{NameKeys, sanitize};
use crate::reference::{IdField, Player, ReferenceStore};

/// One step of the player cascade. Stages run in [`Stage::CASCADE`] order and
/// the first hit wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Alias,
    Substring,
    Phonetic,
    Fuzzy,
}

impl Stage {
    pub const CASCADE: [Stage; 4] = [Stage::Alias, Stage::Substring, Stage::Phonetic, Stage::Fuzzy];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Alias => "alias",
            Stage::Substring => "substring",
            Stage::Phonetic => "phonetic",
            Stage::Fuzzy => "fuzzy",
        }
    }
}

enum StageOutcome<'a> {
    Hit(&'a Player),
    Miss,
    /// Only the fuzzy stage ends the cascade without a player
    Exhausted(Vec<Candidate>),
}

/// Resolves free text to a player through the alias, substring, phonetic and
/// fuzzy stages.
#[derive(Debug, Clone, Copy)]
pub struct PlayerResolver<'a> {
    store: &'a ReferenceStore,
    thresholds: Thresholds,
}

impl<'a> PlayerResolver<'a> {
    pub fn new(store: &'a ReferenceStore) -> Self {
        Self::with_thresholds(store, Thresholds::default())
    }

    pub fn with_thresholds(store: &'a ReferenceStore, thresholds: Thresholds) -> Self {
        Self { store, thresholds }
    }

    /// Runs the cascade and returns the matched player, the fuzzy guesses, or
    /// `NotFound` for blank input.
    #[instrument(skip(self))]
    pub fn resolve(&self, input: &str) -> Resolution<&'a Player> {
        let query = sanitize(input.trim());
        if query.trim().is_empty() {
            return Resolution::NotFound;
        }

        for stage in Stage::CASCADE {
            match self.attempt(stage, &query) {
                StageOutcome::Hit(player) => {
                    debug!("{} stage matched '{query}' -> {}", stage.name(), player.id);
                    return Resolution::Resolved(player);
                }
                StageOutcome::Miss => debug!("{} stage missed '{query}'", stage.name()),
                StageOutcome::Exhausted(candidates) => {
                    debug!(
                        "No confident match for '{query}', {} guesses",
                        candidates.len()
                    );
                    return Resolution::Ambiguous(candidates);
                }
            }
        }
        Resolution::NotFound
    }

    /// Resolves to the requested identifier of the matched player.
    ///
    /// # Examples
    /// ```
    /// use gridiron_lookup::reference::IdField;
    /// use gridiron_lookup::resolver::PlayerResolver;
    /// use gridiron_lookup::testing_utils::TestDataBuilder;
    ///
    /// let store = TestDataBuilder::sample_store();
    /// let players = PlayerResolver::new(&store);
    /// assert_eq!(players.resolve_player("Tom Brady", IdField::Id).unwrap(), "2330");
    /// assert_eq!(players.resolve_player("tb12", IdField::Secondary).unwrap(), "1163");
    /// ```
    pub fn resolve_player(&self, input: &str, field: IdField) -> Result<String, ResolveError> {
        match self.resolve(input) {
            Resolution::Resolved(player) => player
                .identifier(field)
                .map(str::to_string)
                .ok_or_else(|| {
                    ResolveError::missing_cross_reference(player.fullname.clone(), field.label())
                }),
            Resolution::Ambiguous(candidates) => {
                Err(ResolveError::player_not_found(input, candidates))
            }
            Resolution::NotFound => Err(ResolveError::player_not_found(input, Vec::new())),
        }
    }

    /// Like [`resolve_player`](Self::resolve_player), but input made only of
    /// ASCII digits is taken as an id and returned unchanged.
    pub fn lookup_id(&self, input: &str, field: IdField) -> Result<String, ResolveError> {
        let trimmed = input.trim();
        if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Ok(trimmed.to_string());
        }
        self.resolve_player(input, field)
    }

    /// Every player whose name matches the substring stage, ordered by id.
    pub fn search(&self, input: &str) -> Vec<&'a Player> {
        let query = sanitize(input.trim());
        if query.trim().is_empty() {
            return Vec::new();
        }
        let mut found: Vec<&Player> = self
            .store
            .players()
            .iter()
            .filter(|player| wildcard_contains(&player.match_name, &query))
            .collect();
        found.sort_by(|a, b| id_sort_key(&a.id).cmp(&id_sort_key(&b.id)));
        found
    }

    fn attempt(&self, stage: Stage, query: &str) -> StageOutcome<'a> {
        let hit = match stage {
            Stage::Alias => self.by_alias(query),
            Stage::Substring => self.by_substring(query),
            Stage::Phonetic => self.by_phonetic(query),
            Stage::Fuzzy => return self.by_fuzzy(query),
        };
        hit.map_or(StageOutcome::Miss, StageOutcome::Hit)
    }

    fn by_alias(&self, query: &str) -> Option<&'a Player> {
        self.store
            .player_aliases()
            .iter()
            .find(|alias| alias.alias.contains(query))
            .and_then(|alias| self.store.player(&alias.player))
    }

    fn by_substring(&self, query: &str) -> Option<&'a Player> {
        self.store
            .players()
            .iter()
            .find(|player| wildcard_contains(&player.match_name, query))
    }

    fn by_phonetic(&self, query: &str) -> Option<&'a Player> {
        let keys = NameKeys::from_sanitized(query);
        let usable = keys.last.as_ref().is_some_and(|code| !code.is_empty());
        if !usable {
            return None;
        }

        let mut matches = self
            .store
            .players()
            .iter()
            .filter(|player| player.keys.satisfies(&keys));
        let first = matches.next()?;
        if matches.next().is_some() {
            debug!("Phonetic keys for '{query}' match several players, falling through");
            return None;
        }
        Some(first)
    }

    fn by_fuzzy(&self, query: &str) -> StageOutcome<'a> {
        let ranking = rank(query, self.store.players());
        let confident = ranking
            .first_confident(&self.thresholds)
            .and_then(|candidate| self.store.player(&candidate.player_id));
        match confident {
            Some(player) => StageOutcome::Hit(player),
            None => StageOutcome::Exhausted(ranking.candidates),
        }
    }
}

/// `LIKE '%a%b%'` style match: every space separated segment of `pattern`
/// occurs in `haystack`, in order, without overlapping.
fn wildcard_contains(haystack: &str, pattern: &str) -> bool {
    let mut rest = haystack;
    for segment in pattern.split(' ').filter(|segment| !segment.is_empty()) {
        match rest.find(segment) {
            Some(position) => rest = &rest[position + segment.len()..],
            None => return false,
        }
    }
    true
}

fn id_sort_key(id: &str) -> (Option<u64>, &str) {
    (id.parse().ok(), id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_wildcard_contains() {
        assert!(wildcard_contains("tom brady", "tom brady"));
        assert!(wildcard_contains("tom brady", "to bra"));
        assert!(wildcard_contains("odell beckham jr", "odell jr"));
        assert!(!wildcard_contains("tom brady", "brady tom"));
        assert!(!wildcard_contains("tom brady", "tom braddy"));
        assert!(wildcard_contains("anything", ""));
    }

    #[test]
    fn test_alias_stage_wins_first() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve_player("TB12", IdField::Id).unwrap(), "2330");
        assert_eq!(
            resolver.resolve_player("beast mode", IdField::Id).unwrap(),
            "3893"
        );
    }

    #[test]
    fn test_substring_stage() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve_player("Tom Brady", IdField::Id).unwrap(), "2330");
        assert_eq!(resolver.resolve_player("peyton", IdField::Id).unwrap(), "1428");
        assert_eq!(resolver.resolve_player("Beckham", IdField::Id).unwrap(), "16733");
    }

    #[test]
    fn test_misspellings_still_resolve() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve_player("Tom Braddy", IdField::Id).unwrap(), "2330");
        assert_eq!(
            resolver.resolve_player("Peyton Maning", IdField::Id).unwrap(),
            "1428"
        );
    }

    #[test]
    fn test_phonetic_stage_single_token_uses_last_name() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve_player("Braddy", IdField::Id).unwrap(), "2330");
    }

    #[test]
    fn test_missing_secondary_id() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        let error = resolver
            .resolve_player("marshawn lynch", IdField::Secondary)
            .unwrap_err();
        assert!(error.is_missing_cross_reference());
    }

    #[test]
    fn test_blank_input_not_found() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve(""), Resolution::NotFound);
        assert_eq!(resolver.resolve(" '.- "), Resolution::NotFound);
        assert!(matches!(
            resolver.resolve_player("", IdField::Id),
            Err(ResolveError::PlayerNotFound { candidates, .. }) if candidates.is_empty()
        ));
    }

    #[test]
    fn test_non_ascii_input_falls_through_to_guesses() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        for input in ["zz九", "José Núñez", "İstanbul", "九"] {
            // Non-blank input always reaches the fuzzy stage's verdict.
            assert_ne!(resolver.resolve(input), Resolution::NotFound, "input {input:?}");
        }
    }

    #[test]
    fn test_accented_roster_name_resolves_phonetically() {
        let store = TestDataBuilder::new()
            .player("501", "José Núñez", None)
            .player("502", "Tom Brady", None)
            .build();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.resolve_player("José Núñez", IdField::Id).unwrap(), "501");
        assert_eq!(resolver.resolve_player("jose nunez", IdField::Id).unwrap(), "501");
        assert_eq!(resolver.resolve_player("Nuñez", IdField::Id).unwrap(), "501");
    }

    #[test]
    fn test_unresolvable_input_returns_guesses() {
        let store = TestDataBuilder::sample_store();
        let strict = Thresholds {
            similarity: 0.99,
            distance: 1,
        };
        let resolver = PlayerResolver::with_thresholds(&store, strict);
        match resolver.resolve("qqqq xxxx") {
            Resolution::Ambiguous(candidates) => {
                assert!(!candidates.is_empty());
                assert!(candidates.len() <= 5);
            }
            other => panic!("expected guesses, got {other:?}"),
        }
    }

    #[test]
    fn test_lookup_id_passes_numbers_through() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        assert_eq!(resolver.lookup_id(" 99999 ", IdField::Id).unwrap(), "99999");
        assert_eq!(resolver.lookup_id("tom brady", IdField::Id).unwrap(), "2330");
    }

    #[test]
    fn test_search_orders_by_numeric_id() {
        let store = TestDataBuilder::sample_store();
        let resolver = PlayerResolver::new(&store);
        let ids: Vec<&str> = resolver
            .search("smith")
            .iter()
            .map(|player| player.id.as_str())
            .collect();
        assert_eq!(ids, vec!["900", "901"]);
        assert!(resolver.search("").is_empty());
        assert!(resolver.search("nobody here").is_empty());
    }

    #[test]
    fn test_stage_cascade_order() {
        assert_eq!(
            Stage::CASCADE.map(Stage::name),
            ["alias", "substring", "phonetic", "fuzzy"]
        );
    }
}
