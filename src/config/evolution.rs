use super::traits::ConfigSection;
use crate::error::SquadforgeError;
use serde::{Deserialize, Serialize};

/// Parameters of the generational search. Every field has a default, so a
/// config file only needs the keys it wants to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Retained population size per generation (mu)
    pub population_size: usize,
    /// Offspring produced per generation (lambda)
    pub offspring_size: usize,
    pub generations: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub hall_of_fame_size: usize,
    /// Fixed RNG seed; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 200,
            offspring_size: 1000,
            generations: 15,
            crossover_rate: 0.7,
            mutation_rate: 0.3,
            hall_of_fame_size: 10,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), SquadforgeError> {
        if self.population_size < 2 {
            return Err(SquadforgeError::Configuration(
                "Population size must be at least 2".to_string(),
            ));
        }
        if self.offspring_size == 0 {
            return Err(SquadforgeError::Configuration(
                "Offspring size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SquadforgeError::Configuration(
                "Crossover rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SquadforgeError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        // Breeding picks exactly one of crossover / mutation / copy per
        // offspring, so the two rates must leave room for the third branch.
        if self.crossover_rate + self.mutation_rate > 1.0 {
            return Err(SquadforgeError::Configuration(
                "Crossover and mutation rates must sum to at most 1".to_string(),
            ));
        }
        if self.hall_of_fame_size == 0 {
            return Err(SquadforgeError::Configuration(
                "Hall of fame size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
