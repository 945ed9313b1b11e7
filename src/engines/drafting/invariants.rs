use super::squad::Squad;
use std::collections::{HashMap, HashSet};

/// Maximum number of squad members drawn from the same club.
pub const MAX_PER_CLUB: usize = 3;

/// Legality check with a sticky verdict: a squad found in violation stays
/// dead for the rest of its life, and re-checking a dead squad is a no-op
/// that returns true immediately.
pub fn is_dead(squad: &mut Squad) -> bool {
    if squad.dead {
        return true;
    }
    if has_violation(squad) {
        squad.dead = true;
    }
    squad.dead
}

fn has_violation(squad: &Squad) -> bool {
    let mut club_counts: HashMap<&str, usize> = HashMap::new();
    for player in squad.all_players() {
        let count = club_counts.entry(player.club_id.as_str()).or_insert(0);
        *count += 1;
        if *count > MAX_PER_CLUB {
            return true;
        }
    }

    let mut names: HashSet<&str> = HashSet::new();
    for player in squad.all_players() {
        if !names.insert(player.name.as_str()) {
            return true;
        }
    }

    squad.total_price() > squad.price_limit
}
