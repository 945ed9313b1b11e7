pub mod engine;
pub mod hall_of_fame;
pub mod pareto;
pub mod progress;
pub mod stats;

pub use engine::EvolutionEngine;
pub use hall_of_fame::{squad_signature, HallOfFame};
pub use pareto::ObjectiveDirection;
pub use progress::{ConsoleProgressCallback, ProgressCallback};
pub use stats::GenerationStats;
