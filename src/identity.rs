/// Static identity tables mapping human-readable names to stats.nba.com IDs.
///
/// The NBA stats API addresses players and teams by numeric ID. These tables
/// are a compiled-in snapshot of the league's static registry; lookups are
/// case-insensitive exact matches with no fuzzy fallback. The table is passed
/// by reference to whoever needs resolution — there is no global state.

#[derive(Debug, Clone, Copy)]
pub struct PlayerEntry {
    pub id: u32,
    pub full_name: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamEntry {
    pub id: u32,
    pub abbreviation: &'static str,
    pub name: &'static str,
}

/// Read-only lookup service over the static player and team tables.
pub struct IdentityTable {
    players: &'static [PlayerEntry],
    teams: &'static [TeamEntry],
}

impl IdentityTable {
    /// Table backed by the bundled snapshot below.
    pub fn bundled() -> Self {
        IdentityTable {
            players: PLAYERS,
            teams: TEAMS,
        }
    }

    /// Resolve a player's full name to their NBA person ID.
    /// Case-insensitive exact match; first hit wins; `None` if absent.
    pub fn player_id(&self, full_name: &str) -> Option<u32> {
        self.players
            .iter()
            .find(|p| p.full_name.eq_ignore_ascii_case(full_name))
            .map(|p| p.id)
    }

    /// Resolve a 3-letter team abbreviation to its NBA team ID.
    /// Case-insensitive exact match; `None` if absent.
    pub fn team_id(&self, abbreviation: &str) -> Option<u32> {
        self.teams
            .iter()
            .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
            .map(|t| t.id)
    }

    /// Team display name for an abbreviation, used in printed output.
    pub fn team_name(&self, abbreviation: &str) -> Option<&'static str> {
        self.teams
            .iter()
            .find(|t| t.abbreviation.eq_ignore_ascii_case(abbreviation))
            .map(|t| t.name)
    }
}

macro_rules! player {
    ($id:expr, $name:expr) => {
        PlayerEntry {
            id: $id,
            full_name: $name,
        }
    };
}

macro_rules! team {
    ($id:expr, $abbr:expr, $name:expr) => {
        TeamEntry {
            id: $id,
            abbreviation: $abbr,
            name: $name,
        }
    };
}

/// Snapshot of notable active players (NBA person IDs).
static PLAYERS: &[PlayerEntry] = &[
    player!(2544, "LeBron James"),
    player!(101108, "Chris Paul"),
    player!(201142, "Kevin Durant"),
    player!(201566, "Russell Westbrook"),
    player!(201935, "James Harden"),
    player!(201939, "Stephen Curry"),
    player!(201942, "DeMar DeRozan"),
    player!(202331, "Paul George"),
    player!(202681, "Kyrie Irving"),
    player!(202691, "Klay Thompson"),
    player!(202695, "Kawhi Leonard"),
    player!(202710, "Jimmy Butler"),
    player!(203076, "Anthony Davis"),
    player!(203078, "Bradley Beal"),
    player!(203081, "Damian Lillard"),
    player!(203110, "Draymond Green"),
    player!(203497, "Rudy Gobert"),
    player!(203507, "Giannis Antetokounmpo"),
    player!(203897, "Zach LaVine"),
    player!(203954, "Joel Embiid"),
    player!(203999, "Nikola Jokic"),
    player!(204001, "Kristaps Porzingis"),
    player!(1626157, "Karl-Anthony Towns"),
    player!(1626164, "Devin Booker"),
    player!(1627734, "Domantas Sabonis"),
    player!(1627759, "Jaylen Brown"),
    player!(1627783, "Pascal Siakam"),
    player!(1628368, "De'Aaron Fox"),
    player!(1628369, "Jayson Tatum"),
    player!(1628378, "Donovan Mitchell"),
    player!(1628389, "Bam Adebayo"),
    player!(1628973, "Jalen Brunson"),
    player!(1628983, "Shai Gilgeous-Alexander"),
    player!(1629027, "Trae Young"),
    player!(1629029, "Luka Doncic"),
    player!(1629627, "Zion Williamson"),
    player!(1629630, "Ja Morant"),
    player!(1630162, "Anthony Edwards"),
    player!(1630169, "Tyrese Haliburton"),
    player!(1641705, "Victor Wembanyama"),
];

/// All 30 franchises (NBA team IDs).
static TEAMS: &[TeamEntry] = &[
    team!(1610612737, "ATL", "Atlanta Hawks"),
    team!(1610612738, "BOS", "Boston Celtics"),
    team!(1610612751, "BKN", "Brooklyn Nets"),
    team!(1610612766, "CHA", "Charlotte Hornets"),
    team!(1610612741, "CHI", "Chicago Bulls"),
    team!(1610612739, "CLE", "Cleveland Cavaliers"),
    team!(1610612742, "DAL", "Dallas Mavericks"),
    team!(1610612743, "DEN", "Denver Nuggets"),
    team!(1610612765, "DET", "Detroit Pistons"),
    team!(1610612744, "GSW", "Golden State Warriors"),
    team!(1610612745, "HOU", "Houston Rockets"),
    team!(1610612754, "IND", "Indiana Pacers"),
    team!(1610612746, "LAC", "LA Clippers"),
    team!(1610612747, "LAL", "Los Angeles Lakers"),
    team!(1610612763, "MEM", "Memphis Grizzlies"),
    team!(1610612748, "MIA", "Miami Heat"),
    team!(1610612749, "MIL", "Milwaukee Bucks"),
    team!(1610612750, "MIN", "Minnesota Timberwolves"),
    team!(1610612740, "NOP", "New Orleans Pelicans"),
    team!(1610612752, "NYK", "New York Knicks"),
    team!(1610612760, "OKC", "Oklahoma City Thunder"),
    team!(1610612753, "ORL", "Orlando Magic"),
    team!(1610612755, "PHI", "Philadelphia 76ers"),
    team!(1610612756, "PHX", "Phoenix Suns"),
    team!(1610612757, "POR", "Portland Trail Blazers"),
    team!(1610612758, "SAC", "Sacramento Kings"),
    team!(1610612759, "SAS", "San Antonio Spurs"),
    team!(1610612761, "TOR", "Toronto Raptors"),
    team!(1610612762, "UTA", "Utah Jazz"),
    team!(1610612764, "WAS", "Washington Wizards"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_lookup_is_case_insensitive() {
        let table = IdentityTable::bundled();
        assert_eq!(table.player_id("LeBron James"), Some(2544));
        assert_eq!(table.player_id("lebron james"), Some(2544));
        assert_eq!(table.player_id("LEBRON JAMES"), Some(2544));
    }

    #[test]
    fn unknown_player_is_not_found() {
        let table = IdentityTable::bundled();
        assert_eq!(table.player_id("Not A Real Player"), None);
    }

    #[test]
    fn partial_name_does_not_match() {
        // Exact match only — no fuzzy resolution.
        let table = IdentityTable::bundled();
        assert_eq!(table.player_id("LeBron"), None);
    }

    #[test]
    fn team_lookup_is_case_insensitive() {
        let table = IdentityTable::bundled();
        assert_eq!(table.team_id("BOS"), Some(1610612738));
        assert_eq!(table.team_id("bos"), Some(1610612738));
    }

    #[test]
    fn unknown_team_is_not_found() {
        let table = IdentityTable::bundled();
        assert_eq!(table.team_id("XYZ"), None);
    }

    #[test]
    fn all_thirty_teams_present() {
        let table = IdentityTable::bundled();
        assert_eq!(table.teams.len(), 30);
        assert_eq!(table.team_name("LAL"), Some("Los Angeles Lakers"));
    }
}
