use crate::engines::drafting::Squad;
use std::collections::HashSet;

/// Canonical identity of a squad's player set, used for deduplication.
pub fn squad_signature(squad: &Squad) -> String {
    let mut names: Vec<&str> = squad.all_players().map(|p| p.name.as_str()).collect();
    names.sort_unstable();
    names.join("|")
}

/// Bounded best-found retention across the whole run, best squad first.
pub struct HallOfFame {
    squads: Vec<Squad>,
    max_size: usize,
    seen_signatures: HashSet<String>,
}

impl HallOfFame {
    pub fn new(max_size: usize) -> Self {
        Self {
            squads: Vec::new(),
            max_size,
            seen_signatures: HashSet::new(),
        }
    }

    /// Attempt to add a squad. Dead squads and already-seen player sets
    /// are rejected.
    pub fn try_add(&mut self, squad: &Squad) -> bool {
        if squad.dead {
            return false;
        }

        let signature = squad_signature(squad);
        if self.seen_signatures.contains(&signature) {
            return false;
        }

        self.squads.push(squad.clone());
        self.seen_signatures.insert(signature);
        self.sort_and_trim();
        true
    }

    fn sort_and_trim(&mut self) {
        self.squads.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        while self.squads.len() > self.max_size {
            if let Some(removed) = self.squads.pop() {
                self.seen_signatures.remove(&squad_signature(&removed));
            }
        }
    }

    pub fn all(&self) -> &[Squad] {
        &self.squads
    }

    pub fn best(&self) -> Option<&Squad> {
        self.squads.first()
    }

    pub fn len(&self) -> usize {
        self.squads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Formation, PlayerRecord, Position};

    fn squad(names: &[&str], fitness: f64) -> Squad {
        let mut squad = Squad::new(
            Formation::new(vec![Position::Forward; names.len()]),
            1000,
        );
        let players = names
            .iter()
            .enumerate()
            .map(|(i, name)| PlayerRecord {
                name: (*name).to_string(),
                club_id: format!("c{}", i),
                price: 10,
                score: fitness / names.len() as f64,
                position: Position::Forward,
            })
            .collect();
        squad.players.insert(Position::Forward, players);
        squad.fitness = fitness;
        squad
    }

    #[test]
    fn test_keeps_best_first_and_trims() {
        let mut hof = HallOfFame::new(2);
        assert!(hof.try_add(&squad(&["a"], 1.0)));
        assert!(hof.try_add(&squad(&["b"], 3.0)));
        assert!(hof.try_add(&squad(&["c"], 2.0)));

        assert_eq!(hof.len(), 2);
        assert_eq!(hof.best().unwrap().fitness, 3.0);
        assert_eq!(hof.all()[1].fitness, 2.0);
    }

    #[test]
    fn test_rejects_duplicate_player_sets() {
        let mut hof = HallOfFame::new(5);
        assert!(hof.try_add(&squad(&["a", "b"], 2.0)));
        // same players, different order
        assert!(!hof.try_add(&squad(&["b", "a"], 2.0)));
        assert_eq!(hof.len(), 1);
    }

    #[test]
    fn test_rejects_dead_squads() {
        let mut hof = HallOfFame::new(5);
        let mut dead = squad(&["a"], 5.0);
        dead.dead = true;
        assert!(!hof.try_add(&dead));
        assert!(hof.is_empty());
    }

    #[test]
    fn test_trimmed_signature_can_return() {
        let mut hof = HallOfFame::new(1);
        assert!(hof.try_add(&squad(&["a"], 1.0)));
        assert!(hof.try_add(&squad(&["b"], 3.0)));
        // "a" was trimmed, so its signature is free again
        assert!(hof.try_add(&squad(&["a"], 2.0)));
        assert_eq!(hof.len(), 1);
        assert_eq!(hof.best().unwrap().fitness, 3.0);
    }
}
