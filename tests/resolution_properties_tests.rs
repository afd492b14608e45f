use gridiron_lookup::{
    names::sanitize,
    reference::IdField,
    resolver::{PlayerResolver, Resolution, rank},
    testing_utils::TestDataBuilder,
};

/// Test that sanitizing twice changes nothing
#[test]
fn test_sanitize_is_idempotent() {
    for input in ["  Tom Brady. ", "'Ha-Ha'", "O'Neil-", "...", "", "Odell Beckham Jr."] {
        let once = sanitize(input.trim());
        assert_eq!(sanitize(&once), once, "input {input:?}");
    }
}

/// Test that two near-identical players are either resolved or both offered
#[test]
fn test_close_names_resolve_or_offer_both() {
    let store = TestDataBuilder::sample_store();
    let players = PlayerResolver::new(&store);

    match players.resolve("Jon Smyth") {
        Resolution::Resolved(player) => assert!(["900", "901"].contains(&player.id.as_str())),
        Resolution::Ambiguous(candidates) => {
            let ids: Vec<&str> = candidates.iter().map(|c| c.player_id.as_str()).collect();
            assert!(ids.contains(&"900") && ids.contains(&"901"), "got {ids:?}");
        }
        Resolution::NotFound => panic!("fuzzy stage should always produce guesses"),
    }
}

/// Test that the fuzzy ranking is stable for a fixed table
#[test]
fn test_rank_is_deterministic() {
    let store = TestDataBuilder::sample_store();
    for query in ["jon smyth", "qqqq", "aron rogers", "x"] {
        let first = rank(query, store.players());
        let second = rank(query, store.players());
        assert_eq!(first, second, "query {query:?}");
        assert!(!first.candidates.is_empty());
    }
}

/// Test that a nonsense name yields a "did you mean" reply instead of a guess
#[test]
fn test_nonsense_name_lists_guesses() {
    let store = TestDataBuilder::sample_store();
    let players = PlayerResolver::new(&store);

    let reply = players
        .resolve_player("qqqqqqqqqqqqqqqqqqqqqqqq", IdField::Id)
        .unwrap_err()
        .to_string();
    assert!(
        reply.starts_with("ERROR: No player found for: 'qqqqqqqqqqqqqqqqqqqqqqqq'. Maybe you were looking for: "),
        "got {reply}"
    );
}

/// Test that blank input never matches anything
#[test]
fn test_blank_player_input() {
    let store = TestDataBuilder::sample_store();
    let players = PlayerResolver::new(&store);

    assert_eq!(players.resolve(""), Resolution::NotFound);
    assert_eq!(players.resolve("   "), Resolution::NotFound);
    assert!(players.search("").is_empty());
}

/// Test that every stored full name resolves back to its own player
#[test]
fn test_every_full_name_resolves_to_itself() {
    let store = TestDataBuilder::sample_store();
    let players = PlayerResolver::new(&store);

    for player in store.players() {
        let resolved = players.resolve(&player.fullname).resolved();
        assert_eq!(resolved.map(|p| p.id.as_str()), Some(player.id.as_str()));
    }
}

/// Test lookups against a roster that carries accented names
#[test]
fn test_accented_roster() {
    let teams = r#"
[[teams]]
code = "MIA"
conference = "AFC"
division = "East"
"#;
    let players = r#"
[[players]]
id = "7001"
fullname = "José Núñez"

[[players]]
id = "7002"
fullname = "Zoë Ødegård"
"#;
    let store = gridiron_lookup::ReferenceStore::from_toml_strs(teams, players).unwrap();
    let resolver = PlayerResolver::new(&store);

    assert_eq!(resolver.resolve_player("josé núñez", IdField::Id).unwrap(), "7001");
    assert_eq!(resolver.resolve_player("Jose Nunez", IdField::Id).unwrap(), "7001");
    assert_eq!(resolver.resolve_player("ødegård", IdField::Id).unwrap(), "7002");
    for input in ["zz九", "İstanbul", "Ñandú Pérez"] {
        assert_ne!(resolver.resolve(input), Resolution::NotFound, "input {input:?}");
    }
}
