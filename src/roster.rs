use std::collections::{HashMap, HashSet};

/// One franchise row from the league's static team table.
#[derive(Debug, Clone, Copy)]
pub struct TeamEntry {
    pub id: u64,
    pub abbrev: &'static str,
    pub full_name: &'static str,
}

/// The 30 NBA franchises with the ids used by the stats endpoints.
pub const NBA_TEAMS: [TeamEntry; 30] = [
    TeamEntry { id: 1610612737, abbrev: "ATL", full_name: "Atlanta Hawks" },
    TeamEntry { id: 1610612738, abbrev: "BOS", full_name: "Boston Celtics" },
    TeamEntry { id: 1610612751, abbrev: "BKN", full_name: "Brooklyn Nets" },
    TeamEntry { id: 1610612766, abbrev: "CHA", full_name: "Charlotte Hornets" },
    TeamEntry { id: 1610612741, abbrev: "CHI", full_name: "Chicago Bulls" },
    TeamEntry { id: 1610612739, abbrev: "CLE", full_name: "Cleveland Cavaliers" },
    TeamEntry { id: 1610612742, abbrev: "DAL", full_name: "Dallas Mavericks" },
    TeamEntry { id: 1610612743, abbrev: "DEN", full_name: "Denver Nuggets" },
    TeamEntry { id: 1610612765, abbrev: "DET", full_name: "Detroit Pistons" },
    TeamEntry { id: 1610612744, abbrev: "GSW", full_name: "Golden State Warriors" },
    TeamEntry { id: 1610612745, abbrev: "HOU", full_name: "Houston Rockets" },
    TeamEntry { id: 1610612754, abbrev: "IND", full_name: "Indiana Pacers" },
    TeamEntry { id: 1610612746, abbrev: "LAC", full_name: "LA Clippers" },
    TeamEntry { id: 1610612747, abbrev: "LAL", full_name: "Los Angeles Lakers" },
    TeamEntry { id: 1610612763, abbrev: "MEM", full_name: "Memphis Grizzlies" },
    TeamEntry { id: 1610612748, abbrev: "MIA", full_name: "Miami Heat" },
    TeamEntry { id: 1610612749, abbrev: "MIL", full_name: "Milwaukee Bucks" },
    TeamEntry { id: 1610612750, abbrev: "MIN", full_name: "Minnesota Timberwolves" },
    TeamEntry { id: 1610612740, abbrev: "NOP", full_name: "New Orleans Pelicans" },
    TeamEntry { id: 1610612752, abbrev: "NYK", full_name: "New York Knicks" },
    TeamEntry { id: 1610612760, abbrev: "OKC", full_name: "Oklahoma City Thunder" },
    TeamEntry { id: 1610612753, abbrev: "ORL", full_name: "Orlando Magic" },
    TeamEntry { id: 1610612755, abbrev: "PHI", full_name: "Philadelphia 76ers" },
    TeamEntry { id: 1610612756, abbrev: "PHX", full_name: "Phoenix Suns" },
    TeamEntry { id: 1610612757, abbrev: "POR", full_name: "Portland Trail Blazers" },
    TeamEntry { id: 1610612758, abbrev: "SAC", full_name: "Sacramento Kings" },
    TeamEntry { id: 1610612759, abbrev: "SAS", full_name: "San Antonio Spurs" },
    TeamEntry { id: 1610612761, abbrev: "TOR", full_name: "Toronto Raptors" },
    TeamEntry { id: 1610612762, abbrev: "UTA", full_name: "Utah Jazz" },
    TeamEntry { id: 1610612764, abbrev: "WAS", full_name: "Washington Wizards" },
];

/// Canonical team identities plus the lookup maps the fetchers need.
///
/// Built explicitly and passed around rather than living in module globals
/// so tests can construct small rosters.
#[derive(Debug, Clone)]
pub struct Roster {
    by_id: HashMap<u64, String>,
    by_abbrev: HashMap<String, String>,
    canonical: HashSet<String>,
}

impl Roster {
    pub fn nba() -> Self {
        Self::from_entries(&NBA_TEAMS)
    }

    pub fn from_entries(entries: &[TeamEntry]) -> Self {
        let by_id = entries
            .iter()
            .map(|t| (t.id, t.full_name.to_string()))
            .collect();
        let by_abbrev = entries
            .iter()
            .map(|t| (t.abbrev.to_string(), t.full_name.to_string()))
            .collect();
        let canonical = entries.iter().map(|t| t.full_name.to_string()).collect();
        Self {
            by_id,
            by_abbrev,
            canonical,
        }
    }

    pub fn name_for_id(&self, id: u64) -> Option<&str> {
        self.by_id.get(&id).map(String::as_str)
    }

    /// Exact-match normalization: a canonical full name passes through,
    /// an abbreviation maps to its full name, anything else is unknown.
    pub fn canonicalize(&self, name: &str) -> Option<&str> {
        if let Some(full) = self.canonical.get(name) {
            return Some(full.as_str());
        }
        self.by_abbrev.get(name).map(String::as_str)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.canonical.contains(full_name)
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.canonical.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}
