use super::traits::ConfigSection;
use crate::error::SquadforgeError;
use crate::types::{Formation, Position};
use serde::{Deserialize, Serialize};

/// Shape and budget constraints shared by every squad in a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SquadConfig {
    /// Budget ceiling per squad, in the catalog's price unit
    pub budget: u64,
    /// Candidate formations; one is drawn per squad at construction time
    pub formations: Vec<Formation>,
}

impl Default for SquadConfig {
    fn default() -> Self {
        Self {
            budget: 90_000_000,
            formations: vec![Formation::new(vec![
                Position::Goalkeeper,
                Position::Forward,
                Position::Forward,
                Position::Midfielder,
                Position::Midfielder,
            ])],
        }
    }
}

impl ConfigSection for SquadConfig {
    fn section_name() -> &'static str {
        "squad"
    }

    fn validate(&self) -> Result<(), SquadforgeError> {
        if self.budget == 0 {
            return Err(SquadforgeError::Configuration(
                "Budget must be positive".to_string(),
            ));
        }
        if self.formations.is_empty() {
            return Err(SquadforgeError::Configuration(
                "At least one formation is required".to_string(),
            ));
        }
        if self.formations.iter().any(Formation::is_empty) {
            return Err(SquadforgeError::Configuration(
                "Formations must have at least one slot".to_string(),
            ));
        }
        Ok(())
    }
}
