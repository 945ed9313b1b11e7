use super::builder::SquadBuilder;
use super::invariants;
use super::squad::Squad;
use crate::types::{Catalog, Formation, PlayerRecord, Position};
use rand::seq::SliceRandom;
use rand::Rng;

/// Cross two squads: both children are rebuilt from scratch against a pool
/// limited to the union of the parents' players, each drawing its formation
/// from the two parents' formations. Parental substructure is not preserved
/// beyond the pooled candidates.
pub fn crossover<R: Rng>(
    first: &Squad,
    second: &Squad,
    price_limit: u64,
    rng: &mut R,
) -> (Squad, Squad) {
    let pool = Catalog::pooled([&first.players, &second.players]);
    let builder = SquadBuilder::new(&pool);
    let formations = [first.formation.clone(), second.formation.clone()];

    let child_a = builder.build_squad(price_limit, &formations, rng);
    let child_b = builder.build_squad(price_limit, &formations, rng);
    (child_a, child_b)
}

/// Mutate a squad by rebuilding a candidate from the squad's own players
/// over the full formation list. A changed formation gets its missing slots
/// topped up from the catalog; an unchanged one gets a single slot swapped
/// under a local price ceiling. Dead squads come back untouched, as does
/// the original when the rebuilt candidate ends up dead.
pub fn mutate<R: Rng>(
    mut squad: Squad,
    catalog: &Catalog,
    price_limit: u64,
    formations: &[Formation],
    rng: &mut R,
) -> Squad {
    if invariants::is_dead(&mut squad) {
        return squad;
    }

    let pool = Catalog::pooled([&squad.players]);
    let candidate = SquadBuilder::new(&pool).build_squad(price_limit, formations, rng);

    if candidate.formation != squad.formation {
        reroll_formation(squad, candidate, catalog, rng)
    } else {
        swap_one_player(squad, candidate, catalog, rng)
    }
}

/// Formation changed: keep what the pool fill produced, fill the remaining
/// slot deficit from the full catalog, and accept the candidate only if it
/// passes the invariant check.
fn reroll_formation<R: Rng>(
    original: Squad,
    mut candidate: Squad,
    catalog: &Catalog,
    rng: &mut R,
) -> Squad {
    // The pool fill usually comes up short against the new shape; the
    // top-up below decides whether the candidate lives.
    candidate.dead = false;

    let mut missing: Vec<Position> = Vec::new();
    let mut kept: Vec<PlayerRecord> = Vec::new();
    for position in candidate.formation.distinct_positions() {
        let target = candidate.formation.required_count(position);
        let have = match candidate.players.get(&position) {
            Some(assigned) => {
                kept.extend(assigned.iter().cloned());
                assigned.len()
            }
            None => 0,
        };
        missing.extend(std::iter::repeat(position).take(target.saturating_sub(have)));
    }

    let outcome =
        SquadBuilder::new(catalog).pick_team(&missing, candidate.remaining_budget, kept, rng);
    candidate.dead = outcome.failed;
    candidate.remaining_budget = outcome.remaining_budget;
    candidate.absorb(outcome.new_players);

    if invariants::is_dead(&mut candidate) {
        original
    } else {
        candidate
    }
}

/// Formation unchanged: swap one assigned slot for a catalog player under
/// the ceiling freed up by the outgoing pick. Only the price ceiling is
/// enforced here; the next evaluation re-validates the full invariant set.
fn swap_one_player<R: Rng>(
    original: Squad,
    mut candidate: Squad,
    catalog: &Catalog,
    rng: &mut R,
) -> Squad {
    if invariants::is_dead(&mut candidate) {
        return original;
    }

    let occupied: Vec<Position> = candidate
        .players
        .iter()
        .filter(|(_, assigned)| !assigned.is_empty())
        .map(|(&position, _)| position)
        .collect();
    let Some(&position) = occupied.choose(rng) else {
        return candidate;
    };
    let Some(assigned) = candidate.players.get_mut(&position) else {
        return candidate;
    };

    let index = rng.gen_range(0..assigned.len());
    let ceiling = assigned[index].price as i64 + candidate.remaining_budget;

    let replacements: Vec<&PlayerRecord> = catalog
        .players_at(position)
        .unwrap_or(&[])
        .iter()
        .filter(|player| (player.price as i64) < ceiling)
        .collect();
    if let Some(replacement) = replacements.choose(rng) {
        assigned[index] = (*replacement).clone();
    }

    candidate
}
