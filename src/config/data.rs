use super::traits::ConfigSection;
use crate::error::SquadforgeError;
use serde::{Deserialize, Serialize};

/// Where the player catalog comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub input_file: String,
    /// Smallest catalog worth searching over
    pub min_players: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            input_file: "players.csv".to_string(),
            min_players: 5,
        }
    }
}

impl ConfigSection for DataConfig {
    fn section_name() -> &'static str {
        "data"
    }

    fn validate(&self) -> Result<(), SquadforgeError> {
        if self.input_file.trim().is_empty() {
            return Err(SquadforgeError::Configuration(
                "Input file path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
