use super::hall_of_fame::HallOfFame;
use super::pareto::{self, ObjectiveDirection};
use super::progress::ProgressCallback;
use super::stats::GenerationStats;
use crate::config::{EvolutionConfig, SquadConfig};
use crate::engines::drafting::{self, fitness, Squad, SquadBuilder};
use crate::error::{Result, SquadforgeError};
use crate::types::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

/// (mu + lambda) generational driver around the drafting engine: breed
/// lambda offspring per generation, evaluate them in parallel, and keep
/// the best mu of parents plus offspring under NSGA-II selection.
pub struct EvolutionEngine {
    evolution: EvolutionConfig,
    squad: SquadConfig,
    catalog: Catalog,
    hall_of_fame: HallOfFame,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(evolution: EvolutionConfig, squad: SquadConfig, catalog: Catalog) -> Self {
        let rng = match evolution.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let hall_of_fame = HallOfFame::new(evolution.hall_of_fame_size);

        Self {
            evolution,
            squad,
            catalog,
            hall_of_fame,
            rng,
        }
    }

    /// Run the full generational loop and return the hall of fame, best
    /// squad first.
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<Vec<Squad>> {
        if self.catalog.total_players() == 0 {
            return Err(SquadforgeError::Evolution(
                "Catalog holds no players".to_string(),
            ));
        }
        if self.squad.formations.is_empty() {
            return Err(SquadforgeError::Evolution(
                "No formations configured".to_string(),
            ));
        }
        if self.evolution.population_size == 0 {
            return Err(SquadforgeError::Evolution(
                "Population size must be positive".to_string(),
            ));
        }

        let config = self.evolution.clone();
        let budget = self.squad.budget;
        let formations = self.squad.formations.clone();

        let builder = SquadBuilder::new(&self.catalog);
        let rng = &mut self.rng;

        // initial population
        let mut population: Vec<Squad> = (0..config.population_size)
            .map(|_| builder.build_squad(budget, &formations, rng))
            .collect();
        Self::evaluate_all(&mut population);
        for squad in &population {
            self.hall_of_fame.try_add(squad);
        }

        for generation in 0..config.generations {
            callback.on_generation_start(generation);

            // var-or breeding: each offspring comes from exactly one of
            // crossover, mutation, or plain reproduction
            let mut offspring: Vec<Squad> = Vec::with_capacity(config.offspring_size);
            for _ in 0..config.offspring_size {
                let roll: f64 = rng.gen();
                if roll < config.crossover_rate {
                    let first = rng.gen_range(0..population.len());
                    let mut second = rng.gen_range(0..population.len());
                    while population.len() > 1 && second == first {
                        second = rng.gen_range(0..population.len());
                    }
                    let (child, _) = drafting::crossover(
                        &population[first],
                        &population[second],
                        budget,
                        rng,
                    );
                    offspring.push(child);
                } else if roll < config.crossover_rate + config.mutation_rate {
                    let parent = population[rng.gen_range(0..population.len())].clone();
                    offspring.push(drafting::mutate(
                        parent,
                        &self.catalog,
                        budget,
                        &formations,
                        rng,
                    ));
                } else {
                    offspring.push(population[rng.gen_range(0..population.len())].clone());
                }
            }

            Self::evaluate_all(&mut offspring);
            for squad in &offspring {
                self.hall_of_fame.try_add(squad);
            }

            // mu + lambda replacement
            let mut combined = population;
            combined.append(&mut offspring);
            let objectives: Vec<Vec<f64>> =
                combined.iter().map(|squad| vec![squad.fitness]).collect();
            let chosen = pareto::select_nsga2(
                &objectives,
                config.population_size,
                &[ObjectiveDirection::Maximize],
            );
            population = chosen.into_iter().map(|index| combined[index].clone()).collect();

            let fitness_values: Vec<f64> = population.iter().map(|squad| squad.fitness).collect();
            let stats = GenerationStats::from_fitness(&fitness_values);
            callback.on_generation_complete(generation, &stats, self.hall_of_fame.len());
        }

        Ok(self.hall_of_fame.all().to_vec())
    }

    /// Squads are owned exclusively by one individual each, so evaluation
    /// fans out without synchronization.
    fn evaluate_all(squads: &mut [Squad]) {
        squads.par_iter_mut().for_each(|squad| {
            fitness::evaluate(squad);
        });
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }
}
