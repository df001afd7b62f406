//! Parent selection operators.
//!
//! Every selector clones the chosen individuals out of the population;
//! selecting the same individual twice yields two independent copies.
//! Multi-objective populations are only partially ordered, so the
//! rank-based selectors here degrade to an arbitrary consistent order on
//! incomparable individuals; use
//! [`select_nsga2`](crate::emo::select_nsga2) for a principled
//! multi-objective selection.

use std::cmp::Ordering;

use rand::Rng;

use crate::individual::Individual;

fn by_fitness<I: Individual>(a: &I, b: &I) -> Ordering {
    if a.fitness().less(b.fitness()) {
        Ordering::Less
    } else if b.fitness().less(a.fitness()) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Individuals cloned in best-to-worst order.
fn sorted_best_first<I: Individual>(individuals: &[I]) -> Vec<&I> {
    let mut sorted: Vec<&I> = individuals.iter().collect();
    sorted.sort_by(|a, b| by_fitness(*b, *a));
    sorted
}

/// Selects `k` individuals uniformly at random, with replacement.
///
/// # Panics
///
/// Panics if `individuals` is empty and `k > 0`.
pub fn sel_random<I: Individual, R: Rng>(individuals: &[I], k: usize, rng: &mut R) -> Vec<I> {
    assert!(
        !individuals.is_empty() || k == 0,
        "cannot select from an empty population"
    );
    (0..k)
        .map(|_| individuals[rng.random_range(0..individuals.len())].clone())
        .collect()
}

/// Selects the `k` best individuals, best first.
///
/// Fewer than `k` individuals yield the whole population sorted.
pub fn sel_best<I: Individual>(individuals: &[I], k: usize) -> Vec<I> {
    sorted_best_first(individuals)
        .into_iter()
        .take(k)
        .cloned()
        .collect()
}

/// Selects the `k` worst individuals, worst first.
pub fn sel_worst<I: Individual>(individuals: &[I], k: usize) -> Vec<I> {
    let mut sorted: Vec<&I> = individuals.iter().collect();
    sorted.sort_by(|a, b| by_fitness(*a, *b));
    sorted.into_iter().take(k).cloned().collect()
}

/// Selects `k` individuals by tournament.
///
/// Each pick draws `tournament_size` aspirants uniformly with replacement
/// and keeps the best; the earliest aspirant wins ties.
///
/// # Panics
///
/// Panics if `individuals` is empty with `k > 0`, or if `tournament_size`
/// is zero.
pub fn sel_tournament<I: Individual, R: Rng>(
    individuals: &[I],
    k: usize,
    tournament_size: usize,
    rng: &mut R,
) -> Vec<I> {
    assert!(tournament_size > 0, "tournament size must be at least 1");
    let mut chosen = Vec::with_capacity(k);
    for _ in 0..k {
        let aspirants = sel_random(individuals, tournament_size, rng);
        let mut winner = &aspirants[0];
        for aspirant in &aspirants[1..] {
            if winner.fitness().less(aspirant.fitness()) {
                winner = aspirant;
            }
        }
        chosen.push(winner.clone());
    }
    chosen
}

/// Selects `k` individuals by roulette on the first raw objective.
///
/// Each spin lands proportionally to `fitness().values()[0]`, so the
/// operator only makes sense for maximization over positive values.
///
/// # Panics
///
/// Panics if `individuals` is empty with `k > 0`, or if the first
/// objectives do not sum to a positive value.
pub fn sel_roulette<I: Individual, R: Rng>(individuals: &[I], k: usize, rng: &mut R) -> Vec<I> {
    if k == 0 {
        return Vec::new();
    }
    let sorted = sorted_best_first(individuals);
    let total: f64 = sorted.iter().map(|i| i.fitness().values()[0]).sum();
    assert!(
        total > 0.0,
        "roulette selection needs positive first-objective values"
    );

    let mut chosen = Vec::with_capacity(k);
    for _ in 0..k {
        let spin = rng.random::<f64>() * total;
        let mut accumulated = 0.0;
        let mut picked = None;
        for individual in &sorted {
            accumulated += individual.fitness().values()[0];
            if accumulated > spin {
                picked = Some(*individual);
                break;
            }
        }
        // Rounding can leave the walk just short of the spin; the last
        // individual absorbs it.
        chosen.push(picked.unwrap_or(sorted[sorted.len() - 1]).clone());
    }
    chosen
}

/// Selects `k` individuals by stochastic universal sampling on the first
/// raw objective.
///
/// A single random offset places `k` equally spaced pointers over the
/// cumulative fitness wheel, giving each individual a selection count
/// within one of its expectation. Same positivity requirement as
/// [`sel_roulette`].
///
/// # Panics
///
/// Panics if `individuals` is empty with `k > 0`, or if the first
/// objectives do not sum to a positive value.
pub fn sel_stochastic_universal_sampling<I: Individual, R: Rng>(
    individuals: &[I],
    k: usize,
    rng: &mut R,
) -> Vec<I> {
    if k == 0 {
        return Vec::new();
    }
    let sorted = sorted_best_first(individuals);
    let total: f64 = sorted.iter().map(|i| i.fitness().values()[0]).sum();
    assert!(
        total > 0.0,
        "stochastic universal sampling needs positive first-objective values"
    );

    let distance = total / k as f64;
    let start = rng.random::<f64>() * distance;
    let mut chosen = Vec::with_capacity(k);
    let mut index = 0;
    let mut accumulated = sorted[0].fitness().values()[0];
    for pointer in 0..k {
        let point = start + pointer as f64 * distance;
        while accumulated < point && index + 1 < sorted.len() {
            index += 1;
            accumulated += sorted[index].fitness().values()[0];
        }
        chosen.push(sorted[index].clone());
    }
    chosen
}

// ============================================================================
// Tests
// ============================================================================
