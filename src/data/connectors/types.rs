use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Required columns of a player catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredColumn {
    Name,
    Club,
    Price,
    Score,
    Position,
}

impl RequiredColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Club => "club",
            Self::Price => "price",
            Self::Score => "score",
            Self::Position => "position",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Name,
            Self::Club,
            Self::Price,
            Self::Score,
            Self::Position,
        ]
    }

    /// Common alternative column names
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Name => vec!["name", "Name", "player", "player_name", "PLAYER_NAME"],
            Self::Club => vec!["club", "Club", "club_id", "team", "team_id", "TEAM_ID"],
            Self::Price => vec!["price", "Price", "current_price", "CURRENT_PRICE", "cost"],
            Self::Score => vec!["score", "Score", "SCORE", "points"],
            Self::Position => vec!["position", "Position", "POSITION", "pos"],
        }
    }
}

/// Summary of an ingested catalog, reported at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub file_path: String,
    pub total_players: usize,
    pub players_per_position: HashMap<Position, usize>,
    pub price_range: (u64, u64),
    pub score_range: (f64, f64),
}
