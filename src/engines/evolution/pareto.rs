//! NSGA-II selection utilities: fast non-dominated sorting, crowding
//! distance, and the mu-selection used for generational replacement.

/// Whether an objective counts up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveDirection {
    Maximize,
    Minimize,
}

/// Candidate position in the scored population, plus NSGA-II bookkeeping.
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub index: usize,
    pub objectives: Vec<f64>,
    /// Pareto front number (0 = best frontier)
    pub rank: usize,
    /// Diversity measure; boundary members get infinity
    pub crowding: f64,
}

/// Check whether objective vector `a` dominates `b`: no worse in every
/// objective and strictly better in at least one.
pub fn dominates(a: &[f64], b: &[f64], directions: &[ObjectiveDirection]) -> bool {
    if a.len() != b.len() || a.len() != directions.len() {
        return false;
    }

    let mut at_least_one_better = false;

    for i in 0..a.len() {
        let (a_better, b_better) = match directions[i] {
            ObjectiveDirection::Maximize => (a[i] > b[i], b[i] > a[i]),
            ObjectiveDirection::Minimize => (a[i] < b[i], b[i] < a[i]),
        };

        if b_better {
            return false;
        }
        if a_better {
            at_least_one_better = true;
        }
    }

    at_least_one_better
}

/// Fast non-dominated sorting. Returns candidate positions grouped by
/// Pareto front (front 0 first) and stamps each candidate's rank.
pub fn non_dominated_fronts(
    candidates: &mut [RankedCandidate],
    directions: &[ObjectiveDirection],
) -> Vec<Vec<usize>> {
    let n = candidates.len();

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut fronts: Vec<Vec<usize>> = Vec::new();

    let mut first_front = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i == j {
                continue;
            }
            if dominates(&candidates[i].objectives, &candidates[j].objectives, directions) {
                dominated[i].push(j);
            } else if dominates(&candidates[j].objectives, &candidates[i].objectives, directions) {
                domination_count[i] += 1;
            }
        }

        if domination_count[i] == 0 {
            candidates[i].rank = 0;
            first_front.push(i);
        }
    }

    fronts.push(first_front);

    let mut front_index = 0;
    while front_index < fronts.len() && !fronts[front_index].is_empty() {
        let mut next_front = Vec::new();
        for &i in &fronts[front_index] {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    candidates[j].rank = front_index + 1;
                    next_front.push(j);
                }
            }
        }
        if !next_front.is_empty() {
            fronts.push(next_front);
        }
        front_index += 1;
    }

    fronts
}

/// Stamp crowding distances for the members of one front. Fronts of one or
/// two members are all boundary and get infinite distance.
pub fn assign_crowding(candidates: &mut [RankedCandidate], front: &[usize]) {
    let front_size = front.len();

    if front_size <= 2 {
        for &i in front {
            candidates[i].crowding = f64::INFINITY;
        }
        return;
    }

    let num_objectives = candidates[front[0]].objectives.len();

    for &i in front {
        candidates[i].crowding = 0.0;
    }

    for objective in 0..num_objectives {
        let mut sorted: Vec<usize> = front.to_vec();
        sorted.sort_by(|&a, &b| {
            candidates[a].objectives[objective]
                .partial_cmp(&candidates[b].objectives[objective])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        candidates[sorted[0]].crowding = f64::INFINITY;
        candidates[sorted[front_size - 1]].crowding = f64::INFINITY;

        let min_val = candidates[sorted[0]].objectives[objective];
        let max_val = candidates[sorted[front_size - 1]].objectives[objective];
        let range = max_val - min_val;
        if range.abs() < 1e-10 {
            continue;
        }

        for i in 1..(front_size - 1) {
            let prev = candidates[sorted[i - 1]].objectives[objective];
            let next = candidates[sorted[i + 1]].objectives[objective];
            candidates[sorted[i]].crowding += (next - prev) / range;
        }
    }
}

/// NSGA-II mu-selection over a scored population: whole fronts while they
/// fit, then the least crowded members of the first front that does not.
/// Returns indices into `objectives`.
pub fn select_nsga2(
    objectives: &[Vec<f64>],
    count: usize,
    directions: &[ObjectiveDirection],
) -> Vec<usize> {
    let mut candidates: Vec<RankedCandidate> = objectives
        .iter()
        .enumerate()
        .map(|(index, obj)| RankedCandidate {
            index,
            objectives: obj.clone(),
            rank: 0,
            crowding: 0.0,
        })
        .collect();

    let fronts = non_dominated_fronts(&mut candidates, directions);
    for front in &fronts {
        assign_crowding(&mut candidates, front);
    }

    let mut selected = Vec::with_capacity(count.min(objectives.len()));
    for front in &fronts {
        if selected.len() >= count {
            break;
        }
        if selected.len() + front.len() <= count {
            selected.extend(front.iter().map(|&i| candidates[i].index));
        } else {
            let mut rest: Vec<usize> = front.clone();
            rest.sort_by(|&a, &b| {
                candidates[b]
                    .crowding
                    .partial_cmp(&candidates[a].crowding)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            for &i in rest.iter().take(count - selected.len()) {
                selected.push(candidates[i].index);
            }
            break;
        }
    }

    selected
}
