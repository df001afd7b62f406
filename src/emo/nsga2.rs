//! Crowding distance and NSGA-II selection.

use super::sorting::sort_nondominated;
use crate::error::EvoError;
use crate::individual::Individual;
use std::cmp::Ordering;

/// Assigns crowding distances to one front.
///
/// Returns one density score per front member, in front order. Higher means
/// more isolated and therefore preferred as a tie-break. Both extremes of
/// every objective receive `+∞`; interior members accumulate the normalized
/// gap between their neighbors. Distances operate on the *raw* objective
/// values, not the weighted ones, so the score is independent of the
/// optimization direction.
///
/// # Algorithm (Deb et al., 2002)
///
/// Per objective `m` of `M`: sort the front by the raw value of `m`, mark
/// the two extremes infinite, and add
/// `(value[i+1] - value[i-1]) / (M * (value[last] - value[first]))` to each
/// interior member. Objectives with zero spread are skipped.
///
/// # Complexity
///
/// O(m·f·log f) for a front of size `f`.
///
/// # Panics
///
/// Panics if a front index is out of range or an indexed individual has an
/// unevaluated fitness.
pub fn assign_crowding_distance<I: Individual>(individuals: &[I], front: &[usize]) -> Vec<f64> {
    if front.is_empty() {
        return Vec::new();
    }
    let objective_count = individuals[front[0]].fitness().values().len();
    let mut distances = vec![0.0f64; front.len()];

    // Positions into `front`, re-sorted per objective.
    let mut order: Vec<usize> = (0..front.len()).collect();
    let value_of =
        |position: usize, objective: usize| individuals[front[position]].fitness().values()[objective];

    for objective in 0..objective_count {
        order.sort_unstable_by(|&a, &b| {
            value_of(a, objective)
                .partial_cmp(&value_of(b, objective))
                .unwrap_or(Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[order.len() - 1]] = f64::INFINITY;

        let spread = value_of(order[order.len() - 1], objective) - value_of(order[0], objective);
        if spread == 0.0 {
            continue;
        }
        let norm = objective_count as f64 * spread;
        for i in 1..order.len() - 1 {
            distances[order[i]] +=
                (value_of(order[i + 1], objective) - value_of(order[i - 1], objective)) / norm;
        }
    }
    distances
}

/// NSGA-II environmental selection: `k` survivors by Pareto rank, then
/// crowding distance.
///
/// Fronts before the last needed one are taken whole; the front that crosses
/// `k` is sorted by descending crowding distance (stable, so front order
/// breaks exact ties) and truncated. Returns exactly
/// `min(k, individuals.len())` clones, deterministically for a given input
/// order.
///
/// # Examples
///
/// ```
/// use evokit::emo::select_nsga2;
/// use evokit::{Individual, RealVector};
///
/// let population: Vec<RealVector> = [[1.0, 5.0], [2.0, 3.0], [4.0, 4.0], [6.0, 6.0]]
///     .iter()
///     .map(|values| {
///         let mut ind = RealVector::new(values.to_vec(), vec![-1.0, -1.0]);
///         ind.fitness_mut().set_values(values);
///         ind
///     })
///     .collect();
///
/// let survivors = select_nsga2(&population, 2).unwrap();
/// assert_eq!(survivors.len(), 2);
/// // Front 0 covers k: the two incomparable leaders survive.
/// assert!(survivors.iter().all(|s| s.fitness().values()[0] < 4.0));
/// ```
///
/// # References
///
/// Deb, Pratap, Agarwal & Meyarivan (2002), "A Fast and Elitist
/// Multiobjective Genetic Algorithm: NSGA-II"
pub fn select_nsga2<I: Individual>(individuals: &[I], k: usize) -> Result<Vec<I>, EvoError> {
    if k == 0 {
        return Ok(Vec::new());
    }
    let fronts = sort_nondominated(individuals, k, false)?;
    if fronts.is_empty() {
        return Ok(Vec::new());
    }

    let mut chosen: Vec<I> = Vec::with_capacity(k.min(individuals.len()));
    for front in &fronts[..fronts.len() - 1] {
        chosen.extend(front.iter().map(|&index| individuals[index].clone()));
    }

    let remaining = k.saturating_sub(chosen.len());
    if remaining > 0 {
        let last = &fronts[fronts.len() - 1];
        let distances = assign_crowding_distance(individuals, last);
        let mut by_crowding: Vec<usize> = (0..last.len()).collect();
        by_crowding.sort_by(|&a, &b| {
            distances[b]
                .partial_cmp(&distances[a])
                .unwrap_or(Ordering::Equal)
        });
        chosen.extend(
            by_crowding
                .iter()
                .take(remaining)
                .map(|&position| individuals[last[position]].clone()),
        );
    }
    Ok(chosen)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::RealVector;

    fn ind(values: &[f64]) -> RealVector {
        let weights = vec![-1.0; values.len()];
        let mut individual = RealVector::new(values.to_vec(), weights);
        individual.fitness_mut().set_values(values);
        individual
    }

    // ---- Crowding distance ----

    #[test]
    fn test_crowding_boundaries_are_infinite() {
        let population = vec![ind(&[1.0, 5.0]), ind(&[3.0, 3.0]), ind(&[5.0, 1.0])];
        let front = [0, 1, 2];
        let distances = assign_crowding_distance(&population, &front);

        assert!(distances[0].is_infinite());
        assert!(distances[2].is_infinite());
        assert!(distances[1].is_finite());
        assert!(distances[1] > 0.0);
    }

    #[test]
    fn test_crowding_interior_formula() {
        // Objective 0 spans [0, 4], objective 1 spans [0, 4]; with M = 2 the
        // interior members each accumulate (2/(2*4)) * 2 objectives = 0.5.
        let population = vec![
            ind(&[0.0, 4.0]),
            ind(&[1.0, 3.0]),
            ind(&[2.0, 2.0]),
            ind(&[3.0, 1.0]),
            ind(&[4.0, 0.0]),
        ];
        let front = [0, 1, 2, 3, 4];
        let distances = assign_crowding_distance(&population, &front);

        assert!(distances[0].is_infinite());
        assert!(distances[4].is_infinite());
        for &interior in &distances[1..4] {
            assert!(
                (interior - 0.5).abs() < 1e-12,
                "expected 0.5 for evenly spaced interior, got {interior}"
            );
        }
    }

    #[test]
    fn test_crowding_singleton_and_pair() {
        let population = vec![ind(&[1.0, 2.0]), ind(&[2.0, 1.0])];
        assert_eq!(assign_crowding_distance(&population, &[0]), vec![f64::INFINITY]);
        let pair = assign_crowding_distance(&population, &[0, 1]);
        assert!(pair.iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_crowding_zero_spread_objective_skipped() {
        let population = vec![ind(&[1.0, 5.0]), ind(&[2.0, 5.0]), ind(&[3.0, 5.0])];
        let distances = assign_crowding_distance(&population, &[0, 1, 2]);
        assert!(distances[0].is_infinite());
        assert!(distances[2].is_infinite());
        assert!(distances[1].is_finite(), "flat objective must not divide by zero");
    }

    #[test]
    fn test_crowding_uses_raw_values() {
        // Maximization weights flip the weighted values; raw-value crowding
        // must come out the same either way.
        let raw = [[0.0, 4.0], [1.0, 3.0], [4.0, 0.0]];
        let build = |weights: Vec<f64>| -> Vec<RealVector> {
            raw.iter()
                .map(|values| {
                    let mut individual = RealVector::new(values.to_vec(), weights.clone());
                    individual.fitness_mut().set_values(values);
                    individual
                })
                .collect()
        };
        let minimized = build(vec![-1.0, -1.0]);
        let maximized = build(vec![1.0, 1.0]);
        let front = [0, 1, 2];
        assert_eq!(
            assign_crowding_distance(&minimized, &front),
            assign_crowding_distance(&maximized, &front)
        );
    }

    #[test]
    fn test_crowding_empty_front() {
        let population = vec![ind(&[1.0])];
        assert!(assign_crowding_distance(&population, &[]).is_empty());
    }

    // ---- NSGA-II selection ----

    #[test]
    fn test_select_size_contract() {
        let population = vec![
            ind(&[1.0, 5.0]),
            ind(&[2.0, 3.0]),
            ind(&[4.0, 4.0]),
            ind(&[6.0, 6.0]),
        ];
        for k in 0..=6 {
            let survivors = select_nsga2(&population, k).unwrap();
            assert_eq!(survivors.len(), k.min(population.len()), "k = {k}");
        }
    }

    #[test]
    fn test_select_prefers_earlier_fronts() {
        let population = vec![
            ind(&[5.0, 5.0]), // front 1
            ind(&[1.0, 3.0]), // front 0
            ind(&[3.0, 1.0]), // front 0
            ind(&[9.0, 9.0]), // front 2
        ];
        let survivors = select_nsga2(&population, 2).unwrap();
        let sums: Vec<f64> = survivors
            .iter()
            .map(|s| s.fitness().values().iter().sum())
            .collect();
        assert!(sums.iter().all(|&s| (s - 4.0).abs() < 1e-12), "front 0 only: {sums:?}");
    }

    #[test]
    fn test_select_truncates_last_front_by_crowding() {
        // Front 0 holds four members; k = 3 must keep both extremes (infinite
        // crowding) and the more isolated interior point.
        let population = vec![
            ind(&[0.0, 10.0]),
            ind(&[1.0, 8.9]), // close to the left extreme
            ind(&[6.0, 2.0]), // isolated interior
            ind(&[10.0, 0.0]),
        ];
        let survivors = select_nsga2(&population, 3).unwrap();
        let firsts: Vec<f64> = survivors.iter().map(|s| s.fitness().values()[0]).collect();
        assert!(firsts.contains(&0.0));
        assert!(firsts.contains(&10.0));
        assert!(firsts.contains(&6.0), "expected the isolated point, got {firsts:?}");
    }

    #[test]
    fn test_select_k_zero() {
        let population = vec![ind(&[1.0])];
        assert!(select_nsga2(&population, 0).unwrap().is_empty());
    }

    #[test]
    fn test_select_empty_population() {
        let population: Vec<RealVector> = Vec::new();
        assert!(select_nsga2(&population, 3).unwrap().is_empty());
    }

    #[test]
    fn test_select_whole_population_keeps_everyone() {
        let population = vec![ind(&[1.0, 5.0]), ind(&[2.0, 3.0]), ind(&[4.0, 4.0])];
        let survivors = select_nsga2(&population, 3).unwrap();
        assert_eq!(survivors.len(), 3);
    }

    #[test]
    fn test_select_is_deterministic() {
        let population = vec![
            ind(&[1.0, 5.0]),
            ind(&[2.0, 3.0]),
            ind(&[4.0, 4.0]),
            ind(&[6.0, 6.0]),
        ];
        let a = select_nsga2(&population, 3).unwrap();
        let b = select_nsga2(&population, 3).unwrap();
        let values = |survivors: &[RealVector]| -> Vec<Vec<f64>> {
            survivors.iter().map(|s| s.fitness().values().to_vec()).collect()
        };
        assert_eq!(values(&a), values(&b));
    }
}
