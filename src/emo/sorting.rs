//! Fast non-dominated sorting.

use super::bucket_list::BucketList;
use crate::error::EvoError;
use crate::individual::Individual;
use std::cmp::Ordering;

/// Lexicographic order on weighted-value slices.
///
/// Objective values are finite by contract; a NaN comparison falls back to
/// `Equal` rather than poisoning the sort.
fn lex_cmp(a: &[f64], b: &[f64]) -> Ordering {
    for (x, y) in a.iter().zip(b) {
        match x.partial_cmp(y).unwrap_or(Ordering::Equal) {
            Ordering::Equal => continue,
            order => return order,
        }
    }
    Ordering::Equal
}

/// Groups individuals by exact fitness equality.
///
/// Returns one representative index per unique fitness (in lexicographic
/// weighted-value order) and a bucket list mapping each unique-fitness index
/// to all population indices sharing it.
fn group_by_fitness<I: Individual>(
    individuals: &[I],
) -> Result<(Vec<usize>, BucketList<usize>), EvoError> {
    let mut order: Vec<usize> = (0..individuals.len()).collect();
    order.sort_by(|&a, &b| {
        lex_cmp(
            individuals[a].fitness().weighted_values(),
            individuals[b].fitness().weighted_values(),
        )
    });

    let mut representatives: Vec<usize> = Vec::new();
    let mut groups = BucketList::new(individuals.len());
    for &index in &order {
        let starts_new_group = match representatives.last() {
            Some(&rep) => individuals[rep]
                .fitness()
                .not_equal(individuals[index].fitness()),
            None => true,
        };
        if starts_new_group {
            representatives.push(index);
        }
        groups.add(representatives.len() - 1, index)?;
    }
    Ok((representatives, groups))
}

/// Sorts a population into Pareto fronts until at least `k` individuals are
/// covered.
///
/// Returns fronts as index lists into `individuals`: front 0 is strictly
/// non-dominated, and every later front is dominated only by members of
/// earlier fronts. Front 0 is always complete; sorting stops once the
/// cumulative size reaches `k` (the front that crosses `k` is included
/// whole), so pass `k >= individuals.len()` for a full partition. With
/// `first_front_only` the peeling is skipped and only front 0 is returned.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. Deduplicate the population by exact fitness equality; all subsequent
///    work runs on unique fitnesses only.
/// 2. For every unique pair, record domination counts and `i` dominates `j`
///    edges in a [`BucketList`] pre-sized to the worst-case pair count.
/// 3. Unique fitnesses with no dominators seed front 0; each peel pass
///    walks the dominated-edge chains, decrements counts, and opens the
///    next front from the counts that reach zero.
/// 4. Each unique-fitness front expands back to all individuals sharing the
///    fitness before it is returned.
///
/// # Complexity
///
/// O(m·u²) dominance comparisons where `u` is the number of *unique*
/// fitnesses, plus O(m·n·log n) for the grouping sort. Populations that
/// converge to few distinct fitnesses sort much faster than their raw size
/// suggests.
///
/// # Errors
///
/// [`EvoError::CapacityExceeded`] cannot occur with the pre-sized edge
/// arena; it is still propagated rather than unwrapped.
///
/// # Panics
///
/// Panics if the individuals carry fitnesses of different arities.
///
/// # Examples
///
/// ```
/// use evokit::emo::sort_nondominated;
/// use evokit::{Fitness, Individual, RealVector};
///
/// let population: Vec<RealVector> = [[1.0, 5.0], [2.0, 3.0], [4.0, 4.0]]
///     .iter()
///     .map(|values| {
///         let mut ind = RealVector::new(values.to_vec(), vec![-1.0, -1.0]);
///         ind.fitness_mut().set_values(values);
///         ind
///     })
///     .collect();
///
/// let fronts = sort_nondominated(&population, population.len(), false).unwrap();
/// assert_eq!(fronts.len(), 2);
/// assert_eq!(fronts[0].len(), 2); // (1,5) and (2,3) are incomparable
/// assert_eq!(fronts[1], vec![2]); // (4,4) is dominated by (2,3)
/// ```
///
/// # References
///
/// Deb, Pratap, Agarwal & Meyarivan (2002), "A Fast and Elitist
/// Multiobjective Genetic Algorithm: NSGA-II"
pub fn sort_nondominated<I: Individual>(
    individuals: &[I],
    k: usize,
    first_front_only: bool,
) -> Result<Vec<Vec<usize>>, EvoError> {
    if k == 0 || individuals.is_empty() {
        return Ok(Vec::new());
    }

    let (representatives, groups) = group_by_fitness(individuals)?;
    let unique_count = representatives.len();

    let max_edges = unique_count * unique_count.saturating_sub(1) / 2;
    let mut dominated_edges: BucketList<usize> = BucketList::new(max_edges);
    let mut domination_counts = vec![0usize; unique_count];
    for i in 0..unique_count {
        for j in (i + 1)..unique_count {
            let fit_i = individuals[representatives[i]].fitness();
            let fit_j = individuals[representatives[j]].fitness();
            if fit_i.dominates(fit_j, None) {
                domination_counts[j] += 1;
                dominated_edges.add(i, j)?;
            } else if fit_j.dominates(fit_i, None) {
                domination_counts[i] += 1;
                dominated_edges.add(j, i)?;
            }
        }
    }

    let expand = |front_unique: &[usize]| -> Vec<usize> {
        front_unique
            .iter()
            .flat_map(|unique_index| groups.bucket(unique_index))
            .collect()
    };

    let mut current: Vec<usize> = (0..unique_count)
        .filter(|&unique_index| domination_counts[unique_index] == 0)
        .collect();
    let mut fronts = vec![expand(&current)];

    if first_front_only {
        return Ok(fronts);
    }

    let target = k.min(individuals.len());
    let mut sorted_count = fronts[0].len();
    while sorted_count < target {
        let mut next: Vec<usize> = Vec::new();
        for &unique_index in &current {
            for dominated in dominated_edges.bucket(&unique_index) {
                domination_counts[dominated] -= 1;
                if domination_counts[dominated] == 0 {
                    next.push(dominated);
                }
            }
        }
        if next.is_empty() {
            break; // counts stuck above zero, only possible with NaN objectives
        }
        let front = expand(&next);
        sorted_count += front.len();
        fronts.push(front);
        current = next;
    }

    Ok(fronts)
}

// ============================================================================
// Tests
// ============================================================================
