use super::invariants;
use super::squad::Squad;

/// Scalar fitness: zero for a dead squad, otherwise the sum of assigned
/// scores. The value is stored on the squad for the selection stage.
pub fn evaluate(squad: &mut Squad) -> f64 {
    let fitness = if invariants::is_dead(squad) {
        0.0
    } else {
        squad.total_score()
    };
    squad.fitness = fitness;
    fitness
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Formation, PlayerRecord, Position};

    fn squad_with_scores(scores: &[f64], price_limit: u64) -> Squad {
        let mut squad = Squad::new(
            Formation::new(vec![Position::Forward; scores.len()]),
            price_limit,
        );
        let players = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| PlayerRecord {
                name: format!("p{}", i),
                club_id: format!("c{}", i),
                price: 10,
                score,
                position: Position::Forward,
            })
            .collect();
        squad.players.insert(Position::Forward, players);
        squad
    }

    #[test]
    fn test_alive_squad_scores_its_sum() {
        let mut squad = squad_with_scores(&[5.0, 3.0, 4.0], 100);
        assert!((evaluate(&mut squad) - 12.0).abs() < f64::EPSILON);
        assert!((squad.fitness - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_dead_squad_scores_zero() {
        let mut squad = squad_with_scores(&[5.0, 3.0], 100);
        squad.dead = true;
        assert_eq!(evaluate(&mut squad), 0.0);
        assert_eq!(squad.fitness, 0.0);
    }

    #[test]
    fn test_evaluation_kills_overspent_squad() {
        let mut squad = squad_with_scores(&[5.0, 3.0], 5);
        assert_eq!(evaluate(&mut squad), 0.0);
        assert!(squad.dead);
    }
}
