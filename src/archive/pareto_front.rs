//! Unbounded non-dominated archive.

use crate::archive::HallOfFame;
use crate::individual::Individual;

fn default_similar<I: Individual>(a: &I, b: &I) -> bool {
    a.is_similar(b)
}

/// All non-dominated individuals ever seen, sorted like a [`HallOfFame`].
///
/// [`update`](Self::update) admits an individual unless a current member
/// dominates it or a member with equal fitness is similar to it, and drops
/// every member the newcomer dominates. Equal-fitness members with distinct
/// genomes coexist.
///
/// Membership is screened per individual in one pass over the sorted
/// members, stopping at the first member that dominates the newcomer. A
/// rejected newcomer removes nothing, so a dominated individual slipped in
/// through [`insert`](Self::insert) lingers until a surviving newcomer
/// dominates it.
///
/// # Examples
///
/// ```
/// use evokit::archive::ParetoFront;
/// use evokit::{Individual, RealVector};
///
/// let mut front: ParetoFront<RealVector> = ParetoFront::new();
/// let population: Vec<RealVector> = [[1.0, 4.0], [4.0, 1.0], [5.0, 5.0]]
///     .iter()
///     .map(|values| {
///         let mut ind = RealVector::new(values.to_vec(), vec![-1.0, -1.0]);
///         ind.fitness_mut().set_values(values);
///         ind
///     })
///     .collect();
///
/// front.update(&population);
/// assert_eq!(front.len(), 2); // (5, 5) is dominated by both others
/// ```
#[derive(Debug, Clone)]
pub struct ParetoFront<I: Individual> {
    archive: HallOfFame<I>,
    similar: fn(&I, &I) -> bool,
}

impl<I: Individual> ParetoFront<I> {
    /// Creates an empty front deduplicated with [`Individual::is_similar`].
    pub fn new() -> Self {
        Self::with_similar(default_similar::<I>)
    }

    /// Creates an empty front with an explicit similarity predicate for
    /// equal-fitness candidates.
    pub fn with_similar(similar: fn(&I, &I) -> bool) -> Self {
        Self {
            archive: HallOfFame::new(0),
            similar,
        }
    }

    /// Screens each individual against the current members and keeps the
    /// front mutually non-dominated, up to the single-pass rule described
    /// on the type.
    pub fn update(&mut self, population: &[I]) {
        for individual in population {
            let fitness = individual.fitness();
            let mut to_remove: Vec<usize> = Vec::new();
            let mut is_dominated = false;
            let mut dominates_one = false;
            let mut has_twin = false;
            for (index, member) in self.archive.iter().enumerate() {
                let member_fitness = member.fitness();
                if !dominates_one && member_fitness.dominates(fitness, None) {
                    is_dominated = true;
                    break;
                } else if fitness.dominates(member_fitness, None) {
                    dominates_one = true;
                    to_remove.push(index);
                } else if fitness.equal(member_fitness) && (self.similar)(individual, member) {
                    has_twin = true;
                    break;
                }
            }
            for &index in to_remove.iter().rev() {
                self.archive.remove(index);
            }
            if !is_dominated && !has_twin {
                self.archive.insert(individual);
            }
        }
    }

    /// Inserts a clone of `individual` at its sorted position without any
    /// dominance screening.
    pub fn insert(&mut self, individual: &I) {
        self.archive.insert(individual);
    }

    /// Removes the member at `index`. A no-op on an empty front.
    ///
    /// # Panics
    ///
    /// Panics if the front is non-empty and `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        self.archive.remove(index);
    }

    /// Drops every member.
    pub fn clear(&mut self) {
        self.archive.clear();
    }

    /// The member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &I {
        self.archive.get(index)
    }

    /// Number of members held.
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// True when no member is held.
    pub fn is_empty(&self) -> bool {
        self.archive.is_empty()
    }

    /// Members cloned in reverse order.
    pub fn reversed(&self) -> Vec<I> {
        self.archive.reversed()
    }

    /// Iterates the members in archive order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.archive.iter()
    }

    /// Members as a slice.
    pub fn as_slice(&self) -> &[I] {
        self.archive.as_slice()
    }
}

impl<I: Individual> Default for ParetoFront<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I: Individual> IntoIterator for &'a ParetoFront<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
