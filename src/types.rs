use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Field position a catalog entry or formation slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MID")]
    Midfielder,
    #[serde(rename = "FWD")]
    Forward,
}

impl Position {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Goalkeeper => "GK",
            Self::Defender => "DEF",
            Self::Midfielder => "MID",
            Self::Forward => "FWD",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Goalkeeper,
            Self::Defender,
            Self::Midfielder,
            Self::Forward,
        ]
    }

    /// Accepted spellings in catalog files.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "GK" | "GOALKEEPER" | "KEEPER" | "G" => Some(Self::Goalkeeper),
            "DEF" | "DEFENDER" | "D" => Some(Self::Defender),
            "MID" | "MIDFIELDER" | "M" => Some(Self::Midfielder),
            "FWD" | "FORWARD" | "ATT" | "F" => Some(Self::Forward),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One eligible player as ingested from the catalog source. `name` is the
/// uniqueness key inside a squad; `club_id` is the grouping key for the
/// per-club cap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub club_id: String,
    pub price: u64,
    pub score: f64,
    pub position: Position,
}

/// Required multiset of position slots a squad must fill. Compared
/// slot-for-slot, so two formations with the same counts but different
/// slot order are distinct shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Formation(Vec<Position>);

impl Formation {
    pub fn new(slots: Vec<Position>) -> Self {
        Self(slots)
    }

    pub fn slots(&self) -> &[Position] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn required_count(&self, position: Position) -> usize {
        self.0.iter().filter(|&&slot| slot == position).count()
    }

    /// Positions in order of first appearance, without repeats.
    pub fn distinct_positions(&self) -> Vec<Position> {
        let mut seen = Vec::new();
        for &position in &self.0 {
            if !seen.contains(&position) {
                seen.push(position);
            }
        }
        seen
    }
}

impl fmt::Display for Formation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: Vec<&str> = self.0.iter().map(Position::code).collect();
        f.write_str(&codes.join("-"))
    }
}

/// Pool of eligible players grouped by position. Read-only for the
/// lifetime of a search run; smaller pools are derived from existing
/// squads for crossover and mutation.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    by_position: HashMap<Position, Vec<PlayerRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, player: PlayerRecord) {
        self.by_position
            .entry(player.position)
            .or_default()
            .push(player);
    }

    pub fn players_at(&self, position: Position) -> Option<&[PlayerRecord]> {
        self.by_position.get(&position).map(Vec::as_slice)
    }

    pub fn total_players(&self) -> usize {
        self.by_position.values().map(Vec::len).sum()
    }

    pub fn position_counts(&self) -> HashMap<Position, usize> {
        self.by_position
            .iter()
            .map(|(&position, players)| (position, players.len()))
            .collect()
    }

    pub fn all_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.by_position.values().flatten()
    }

    /// Pool built from existing assignment maps: union of position keys,
    /// value sequences concatenated.
    pub fn pooled<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = &'a HashMap<Position, Vec<PlayerRecord>>>,
    {
        let mut catalog = Self::default();
        for map in assignments {
            for (&position, players) in map {
                catalog
                    .by_position
                    .entry(position)
                    .or_default()
                    .extend(players.iter().cloned());
            }
        }
        catalog
    }
}
