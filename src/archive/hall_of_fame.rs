//! Bounded best-so-far archive.

use crate::individual::Individual;
use log::trace;

fn default_similar<I: Individual>(a: &I, b: &I) -> bool {
    a.is_similar(b)
}

/// The best individuals ever seen, sorted best to worst.
///
/// [`update`](Self::update) feeds a whole generation through the archive and
/// enforces both the capacity bound and the similarity filter. The lower
/// level [`insert`](Self::insert)/[`remove`](Self::remove) operations enforce
/// neither; `insert` always inserts at the sorted position, past `maxsize` if
/// the archive is full.
///
/// The similarity predicate is a plain function pointer
/// (default: [`Individual::is_similar`]) so the archive stays `Clone`.
///
/// # Examples
///
/// ```
/// use evokit::archive::HallOfFame;
/// use evokit::{Individual, RealVector};
///
/// let mut hof: HallOfFame<RealVector> = HallOfFame::new(1);
/// let population: Vec<RealVector> = [3.0, 1.0, 2.0]
///     .iter()
///     .enumerate()
///     .map(|(i, &value)| {
///         let mut ind = RealVector::new(vec![i as f64], vec![-1.0]);
///         ind.fitness_mut().set_values(&[value]);
///         ind
///     })
///     .collect();
///
/// hof.update(&population);
/// assert_eq!(hof.len(), 1);
/// assert_eq!(hof.get(0).fitness().values(), &[1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct HallOfFame<I: Individual> {
    maxsize: usize,
    items: Vec<I>,
    similar: fn(&I, &I) -> bool,
}

impl<I: Individual> HallOfFame<I> {
    /// Creates an empty archive holding at most `maxsize` members, deduplicated
    /// with [`Individual::is_similar`].
    pub fn new(maxsize: usize) -> Self {
        Self::with_similar(maxsize, default_similar::<I>)
    }

    /// Creates an empty archive with an explicit similarity predicate.
    pub fn with_similar(maxsize: usize, similar: fn(&I, &I) -> bool) -> Self {
        Self {
            maxsize,
            items: Vec::new(),
            similar,
        }
    }

    /// Feeds one generation through the archive.
    ///
    /// Seeds an empty archive with the first individual, then admits every
    /// individual that beats the current worst member or fits under the
    /// capacity, unless a member is similar to it. Admitting into a full
    /// archive evicts the worst member first. A no-op when the archive has
    /// zero capacity or the population is empty.
    pub fn update(&mut self, population: &[I]) {
        if self.maxsize == 0 || population.is_empty() {
            return;
        }
        if self.items.is_empty() {
            self.insert(&population[0]);
        }
        for individual in population {
            let admissible = self.items.len() < self.maxsize
                || individual
                    .fitness()
                    .greater(self.items[self.items.len() - 1].fitness());
            if !admissible {
                continue;
            }
            if self.items.iter().any(|member| (self.similar)(individual, member)) {
                continue;
            }
            if self.items.len() >= self.maxsize {
                self.items.pop();
            }
            self.insert(individual);
            trace!("archive admitted individual ({} held)", self.items.len());
        }
    }

    /// Inserts a clone of `individual` at its sorted position.
    ///
    /// An individual with fitness equal to existing members lands to the
    /// right of its equals. Neither the capacity bound nor the similarity
    /// filter applies here; the archive may grow past `maxsize`.
    pub fn insert(&mut self, individual: &I) {
        let item = individual.clone();
        let index = self
            .items
            .partition_point(|member| !member.fitness().less(item.fitness()));
        self.items.insert(index, item);
    }

    /// Removes the member at `index`, shifting later members left. A no-op
    /// on an empty archive.
    ///
    /// # Panics
    ///
    /// Panics if the archive is non-empty and `index` is out of range.
    pub fn remove(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.items.remove(index);
    }

    /// Drops every member. The backing storage is kept for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The member at `index`; index 0 is the best ever seen.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, index: usize) -> &I {
        &self.items[index]
    }

    /// Number of members held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no member is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The capacity bound enforced by [`update`](Self::update).
    pub fn maxsize(&self) -> usize {
        self.maxsize
    }

    /// Members cloned in worst-to-best order.
    pub fn reversed(&self) -> Vec<I> {
        self.items.iter().rev().cloned().collect()
    }

    /// Iterates members best to worst.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.items.iter()
    }

    /// Members as a slice, best to worst.
    pub fn as_slice(&self) -> &[I] {
        &self.items
    }
}

impl<'a, I: Individual> IntoIterator for &'a HallOfFame<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
