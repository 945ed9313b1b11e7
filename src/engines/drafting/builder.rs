use super::invariants::{self, MAX_PER_CLUB};
use super::squad::Squad;
use crate::types::{Catalog, Formation, PlayerRecord, Position};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// A constrained random pick found no eligible candidate. Always handled
/// inside the fill loop; it never crosses the engine boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PickError {
    #[error("no eligible candidate for the requested position")]
    NoEligibleCandidate,
    #[error("position not present in the pick pool")]
    UnknownPosition,
}

/// Result of one fill pass over a set of formation slots. A failed pass
/// still carries whatever players it managed to pick.
#[derive(Debug, Default)]
pub struct FillOutcome {
    pub remaining_budget: i64,
    pub failed: bool,
    pub new_players: HashMap<Position, Vec<PlayerRecord>>,
}

/// Constrained random fill over a pick pool: the global catalog, or a
/// smaller pool derived from existing squads.
pub struct SquadBuilder<'c> {
    pool: &'c Catalog,
}

impl<'c> SquadBuilder<'c> {
    pub fn new(pool: &'c Catalog) -> Self {
        Self { pool }
    }

    /// Pick one player of `position`, uniformly at random among candidates
    /// that fit under the budget, are not already picked by name, and do
    /// not belong to a club that already has `MAX_PER_CLUB` picks.
    pub fn pick_one<R: Rng>(
        &self,
        position: Position,
        remaining_budget: i64,
        picked: &[PlayerRecord],
        rng: &mut R,
    ) -> Result<PlayerRecord, PickError> {
        let pool = self
            .pool
            .players_at(position)
            .ok_or(PickError::UnknownPosition)?;

        let mut club_counts: HashMap<&str, usize> = HashMap::new();
        let mut capped_clubs: HashSet<&str> = HashSet::new();
        let mut names: HashSet<&str> = HashSet::new();
        for player in picked {
            let count = club_counts.entry(player.club_id.as_str()).or_insert(0);
            *count += 1;
            if *count >= MAX_PER_CLUB {
                capped_clubs.insert(player.club_id.as_str());
            }
            names.insert(player.name.as_str());
        }

        let candidates: Vec<&PlayerRecord> = pool
            .iter()
            .filter(|candidate| {
                (candidate.price as i64) < remaining_budget
                    && !names.contains(candidate.name.as_str())
                    && !capped_clubs.contains(candidate.club_id.as_str())
            })
            .collect();

        candidates
            .choose(rng)
            .map(|candidate| (*candidate).clone())
            .ok_or(PickError::NoEligibleCandidate)
    }

    /// Fill the given slots in random order, on top of the players already
    /// in `current_squad`. A slot with no eligible candidate flags the
    /// outcome as failed and stays unfilled; the remaining slots are still
    /// attempted. The candidate price filter uses the budget this pass
    /// started with, while the returned budget is decremented per pick;
    /// overspend is left to the invariant check.
    pub fn pick_team<R: Rng>(
        &self,
        slots: &[Position],
        remaining_budget: i64,
        current_squad: Vec<PlayerRecord>,
        rng: &mut R,
    ) -> FillOutcome {
        let mut order: Vec<Position> = slots.to_vec();
        order.shuffle(rng);

        let mut picked = current_squad;
        let mut outcome = FillOutcome {
            remaining_budget,
            failed: false,
            new_players: HashMap::new(),
        };

        while let Some(position) = order.pop() {
            match self.pick_one(position, remaining_budget, &picked, rng) {
                Ok(player) => {
                    outcome.remaining_budget -= player.price as i64;
                    outcome
                        .new_players
                        .entry(position)
                        .or_default()
                        .push(player.clone());
                    picked.push(player);
                }
                Err(_) => outcome.failed = true,
            }
        }

        outcome
    }

    /// Build a fresh squad: draw one formation at random, fill it from the
    /// pool, adopt the fill outcome, then let the invariant check settle
    /// liveness. A failed fill yields a partially assigned, dead squad.
    pub fn build_squad<R: Rng>(
        &self,
        price_limit: u64,
        formations: &[Formation],
        rng: &mut R,
    ) -> Squad {
        let formation = formations.choose(rng).cloned().unwrap_or_default();
        let mut squad = Squad::new(formation, price_limit);

        let slots = squad.formation.slots().to_vec();
        let outcome = self.pick_team(&slots, squad.remaining_budget, Vec::new(), rng);
        squad.dead = outcome.failed;
        squad.remaining_budget = outcome.remaining_budget;
        squad.absorb(outcome.new_players);

        invariants::is_dead(&mut squad);
        squad
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn player(name: &str, club: &str, price: u64, score: f64, position: Position) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            club_id: club.to_string(),
            price,
            score,
            position,
        }
    }

    fn catalog(players: Vec<PlayerRecord>) -> Catalog {
        let mut catalog = Catalog::new();
        for record in players {
            catalog.insert(record);
        }
        catalog
    }

    #[test]
    fn test_pick_one_unknown_position_fails() {
        let pool = catalog(vec![player("a", "1", 10, 1.0, Position::Forward)]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);

        let result = builder.pick_one(Position::Midfielder, 100, &[], &mut rng);
        assert_eq!(result, Err(PickError::UnknownPosition));
    }

    #[test]
    fn test_pick_one_requires_price_strictly_under_budget() {
        let pool = catalog(vec![player("a", "1", 100, 1.0, Position::Forward)]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);

        let result = builder.pick_one(Position::Forward, 100, &[], &mut rng);
        assert_eq!(result, Err(PickError::NoEligibleCandidate));
        let result = builder.pick_one(Position::Forward, 101, &[], &mut rng);
        assert_eq!(result.unwrap().name, "a");
    }

    #[test]
    fn test_pick_one_skips_already_picked_names() {
        let pool = catalog(vec![
            player("a", "1", 10, 1.0, Position::Forward),
            player("b", "2", 10, 1.0, Position::Forward),
        ]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);
        let already = vec![player("a", "1", 10, 1.0, Position::Forward)];

        for _ in 0..20 {
            let picked = builder
                .pick_one(Position::Forward, 100, &already, &mut rng)
                .unwrap();
            assert_eq!(picked.name, "b");
        }
    }

    #[test]
    fn test_pick_one_excludes_capped_clubs() {
        let pool = catalog(vec![
            player("d", "1", 10, 1.0, Position::Forward),
            player("e", "2", 10, 1.0, Position::Forward),
        ]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);
        let already = vec![
            player("a", "1", 10, 1.0, Position::Midfielder),
            player("b", "1", 10, 1.0, Position::Midfielder),
            player("c", "1", 10, 1.0, Position::Defender),
        ];

        for _ in 0..20 {
            let picked = builder
                .pick_one(Position::Forward, 100, &already, &mut rng)
                .unwrap();
            assert_eq!(picked.club_id, "2");
        }
    }

    #[test]
    fn test_pick_one_excludes_every_capped_club() {
        // Two clubs capped at once; neither may supply the next pick.
        let pool = catalog(vec![
            player("x", "1", 10, 1.0, Position::Forward),
            player("y", "2", 10, 1.0, Position::Forward),
            player("z", "3", 10, 1.0, Position::Forward),
        ]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);
        let mut already = Vec::new();
        for i in 0..3 {
            already.push(player(&format!("a{}", i), "1", 10, 1.0, Position::Midfielder));
            already.push(player(&format!("b{}", i), "2", 10, 1.0, Position::Defender));
        }

        for _ in 0..20 {
            let picked = builder
                .pick_one(Position::Forward, 1000, &already, &mut rng)
                .unwrap();
            assert_eq!(picked.club_id, "3");
        }
    }

    #[test]
    fn test_empty_slot_list_returns_clean_outcome() {
        let pool = catalog(vec![player("a", "1", 10, 1.0, Position::Forward)]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);

        let outcome = builder.pick_team(&[], 100, Vec::new(), &mut rng);
        assert!(!outcome.failed);
        assert!(outcome.new_players.is_empty());
        assert_eq!(outcome.remaining_budget, 100);
    }

    #[test]
    fn test_failed_slot_does_not_abort_the_pass() {
        // One forward slot is fillable, the midfielder slots are not: only
        // one midfielder exists for two slots.
        let pool = catalog(vec![
            player("fwd", "1", 10, 1.0, Position::Forward),
            player("mid", "2", 10, 1.0, Position::Midfielder),
        ]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);
        let slots = [Position::Forward, Position::Midfielder, Position::Midfielder];

        let outcome = builder.pick_team(&slots, 100, Vec::new(), &mut rng);
        assert!(outcome.failed);
        assert_eq!(outcome.new_players[&Position::Forward].len(), 1);
        assert_eq!(outcome.new_players[&Position::Midfielder].len(), 1);
    }

    #[test]
    fn test_fill_can_overspend_and_checker_catches_it() {
        // Every slot filters against the starting budget, so the pass can
        // commit to a total above the limit; the squad then dies in the
        // invariant check with fitness zero.
        let pool = catalog(vec![
            player("p1", "src1", 40, 5.0, Position::Forward),
            player("p2", "src1", 30, 3.0, Position::Midfielder),
            player("p3", "src2", 50, 4.0, Position::Midfielder),
        ]);
        let builder = SquadBuilder::new(&pool);
        let mut rng = StdRng::seed_from_u64(7);
        let formation = Formation::new(vec![
            Position::Forward,
            Position::Midfielder,
            Position::Midfielder,
        ]);

        let outcome = builder.pick_team(formation.slots(), 100, Vec::new(), &mut rng);
        assert!(!outcome.failed);
        assert_eq!(outcome.remaining_budget, 100 - 120);

        let mut squad = Squad::new(formation, 100);
        squad.remaining_budget = outcome.remaining_budget;
        squad.absorb(outcome.new_players);
        assert!(invariants::is_dead(&mut squad));
    }

    #[test]
    fn test_build_squad_alive_satisfies_all_invariants() {
        let mut players = Vec::new();
        for i in 0..6 {
            players.push(player(
                &format!("gk{}", i),
                &format!("c{}", i % 4),
                10,
                2.0,
                Position::Goalkeeper,
            ));
            players.push(player(
                &format!("mid{}", i),
                &format!("c{}", i % 4),
                15,
                3.0,
                Position::Midfielder,
            ));
            players.push(player(
                &format!("fwd{}", i),
                &format!("c{}", i % 4),
                20,
                4.0,
                Position::Forward,
            ));
        }
        let pool = catalog(players);
        let builder = SquadBuilder::new(&pool);
        let formations = [Formation::new(vec![
            Position::Goalkeeper,
            Position::Forward,
            Position::Forward,
            Position::Midfielder,
            Position::Midfielder,
        ])];

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut squad = builder.build_squad(100, &formations, &mut rng);
            if squad.dead {
                continue;
            }
            assert_eq!(squad.player_count(), 5);
            assert!(squad.total_price() <= 100);
            assert!(!invariants::is_dead(&mut squad));
        }
    }
}
