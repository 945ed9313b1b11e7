use crate::types::{Formation, PlayerRecord, Position};
use std::collections::HashMap;
use std::fmt;

/// One candidate solution: a formation plus the players assigned to it,
/// the budget state of its lineage, and its current legality and fitness.
/// Owned exclusively by one search individual; never shared.
#[derive(Debug, Clone)]
pub struct Squad {
    pub formation: Formation,
    pub players: HashMap<Position, Vec<PlayerRecord>>,
    pub price_limit: u64,
    /// Running budget as of the last fill pass. Decremented per pick but
    /// not re-derived on merges; the invariant check on total price is
    /// the authority.
    pub remaining_budget: i64,
    /// Sticky once set; a dead squad scores zero fitness
    pub dead: bool,
    pub fitness: f64,
}

impl Squad {
    pub fn new(formation: Formation, price_limit: u64) -> Self {
        Self {
            formation,
            players: HashMap::new(),
            price_limit,
            remaining_budget: price_limit as i64,
            dead: false,
            fitness: 0.0,
        }
    }

    /// Merge newly picked players into the assignment map: union of
    /// position keys, value sequences concatenated.
    pub fn absorb(&mut self, new_players: HashMap<Position, Vec<PlayerRecord>>) {
        for (position, mut picked) in new_players {
            self.players.entry(position).or_default().append(&mut picked);
        }
    }

    pub fn all_players(&self) -> impl Iterator<Item = &PlayerRecord> {
        self.players.values().flatten()
    }

    pub fn player_count(&self) -> usize {
        self.players.values().map(Vec::len).sum()
    }

    pub fn total_price(&self) -> u64 {
        self.all_players().map(|player| player.price).sum()
    }

    pub fn total_score(&self) -> f64 {
        self.all_players().map(|player| player.score).sum()
    }
}

impl fmt::Display for Squad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#######")?;
        if self.dead {
            writeln!(f, "!!! DEAD !!!")?;
        }
        writeln!(f, "- formation -")?;
        writeln!(f, "{}", self.formation)?;
        for position in Position::all() {
            let Some(assigned) = self.players.get(&position) else {
                continue;
            };
            if assigned.is_empty() {
                continue;
            }
            writeln!(f, "-- {} --", position)?;
            for player in assigned {
                writeln!(
                    f,
                    "{} (club {}) price {} score {:.2}",
                    player.name, player.club_id, player.price, player.score
                )?;
            }
        }
        writeln!(f, "- score -")?;
        writeln!(f, "{:.2}", self.total_score())?;
        writeln!(f, "- price -")?;
        writeln!(f, "{}", self.total_price())?;
        write!(f, "#######")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, club: &str, price: u64, score: f64, position: Position) -> PlayerRecord {
        PlayerRecord {
            name: name.to_string(),
            club_id: club.to_string(),
            price,
            score,
            position,
        }
    }

    #[test]
    fn test_absorb_unions_keys_and_concatenates() {
        let mut squad = Squad::new(
            Formation::new(vec![Position::Forward, Position::Forward, Position::Goalkeeper]),
            100,
        );
        squad.players.insert(
            Position::Forward,
            vec![player("a", "1", 10, 1.0, Position::Forward)],
        );

        let mut incoming = HashMap::new();
        incoming.insert(
            Position::Forward,
            vec![player("b", "2", 20, 2.0, Position::Forward)],
        );
        incoming.insert(
            Position::Goalkeeper,
            vec![player("c", "3", 30, 3.0, Position::Goalkeeper)],
        );
        squad.absorb(incoming);

        assert_eq!(squad.players[&Position::Forward].len(), 2);
        assert_eq!(squad.players[&Position::Goalkeeper].len(), 1);
        assert_eq!(squad.player_count(), 3);
        assert_eq!(squad.total_price(), 60);
        assert!((squad.total_score() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_report_flags_dead_squad() {
        let mut squad = Squad::new(Formation::new(vec![Position::Forward]), 100);
        squad.dead = true;
        let report = squad.to_string();
        assert!(report.contains("DEAD"));
        assert!(report.contains("- formation -"));
    }
}
