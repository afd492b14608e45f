use std::collections::BTreeMap;

use crate::reference::{
    Conference, Division, PlayerAlias, PlayerRecord, PlayerTables, ReferenceStore, Team,
    TeamAlias, TeamTables,
};

/// Test utilities for building small reference stores
#[derive(Debug, Clone, Default)]
pub struct TestDataBuilder {
    teams: TeamTables,
    players: PlayerTables,
}

impl TestDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a team with optional cross-reference pairs
    pub fn team(
        mut self,
        code: &str,
        conference: Conference,
        division: Division,
        xref: &[(&str, &str)],
    ) -> Self {
        self.teams.teams.push(Team {
            code: code.to_string(),
            conference,
            division,
            xref: xref
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect::<BTreeMap<_, _>>(),
        });
        self
    }

    pub fn team_alias(mut self, alias: &str, team: &str) -> Self {
        self.teams.team_aliases.push(TeamAlias {
            alias: alias.to_string(),
            team: team.to_string(),
        });
        self
    }

    pub fn player(mut self, id: &str, fullname: &str, rid: Option<&str>) -> Self {
        self.players.players.push(PlayerRecord {
            id: id.to_string(),
            fullname: fullname.to_string(),
            rid: rid.map(str::to_string),
        });
        self
    }

    pub fn player_alias(mut self, alias: &str, player: &str) -> Self {
        self.players.player_aliases.push(PlayerAlias {
            alias: alias.to_string(),
            player: player.to_string(),
        });
        self
    }

    /// Builds the store, panicking on invalid test data
    pub fn build(self) -> ReferenceStore {
        ReferenceStore::new(self.teams, self.players).expect("test reference data is valid")
    }

    /// A handful of teams and players covering every resolution stage
    pub fn sample_store() -> ReferenceStore {
        Self::new()
            .team(
                "NE",
                Conference::Afc,
                Division::East,
                &[("full", "New England Patriots"), ("pfr", "nwe")],
            )
            .team("NYJ", Conference::Afc, Division::East, &[("full", "New York Jets")])
            .team("KC", Conference::Afc, Division::West, &[("full", "Kansas City Chiefs")])
            .team(
                "GB",
                Conference::Nfc,
                Division::North,
                &[("full", "Green Bay Packers"), ("pfr", "gnb")],
            )
            .team("DAL", Conference::Nfc, Division::East, &[("full", "Dallas Cowboys")])
            .team(
                "SF",
                Conference::Nfc,
                Division::West,
                &[("full", "San Francisco 49ers"), ("pfr", "sfo")],
            )
            .team_alias("new england patriots", "NE")
            .team_alias("pats", "NE")
            .team_alias("new york jets", "NYJ")
            .team_alias("kansas city chiefs", "KC")
            .team_alias("green bay packers", "GB")
            .team_alias("cheeseheads", "GB")
            .team_alias("dallas cowboys", "DAL")
            .team_alias("san francisco 49ers", "SF")
            .team_alias("niners", "SF")
            .player("2330", "Tom Brady", Some("1163"))
            .player("1428", "Peyton Manning", Some("1135"))
            .player("2580", "Drew Brees", Some("2219"))
            .player("8439", "Aaron Rodgers", Some("3118"))
            .player("16733", "Odell Beckham Jr", Some("9260"))
            .player("3893", "Marshawn Lynch", None)
            .player("17154", "Ha-Ha Clinton-Dix", Some("9333"))
            .player("900", "John Smith", None)
            .player("901", "Jon Smith", None)
            .player_alias("tb12", "2330")
            .player_alias("the sheriff", "1428")
            .player_alias("beast mode", "3893")
            .player_alias("obj", "16733")
            .build()
    }
}
