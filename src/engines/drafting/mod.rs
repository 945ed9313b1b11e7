pub mod builder;
pub mod fitness;
pub mod invariants;
pub mod operators;
pub mod squad;

pub use builder::{FillOutcome, PickError, SquadBuilder};
pub use fitness::evaluate;
pub use invariants::{is_dead, MAX_PER_CLUB};
pub use operators::{crossover, mutate};
pub use squad::Squad;
