//! Individuals: a chromosome paired with a [`Fitness`].
//!
//! The [`Individual`] trait is the seam between the generic machinery
//! (sorting, archives, the evolution loop) and concrete representations.
//! Five stock representations are provided: [`RealVector`], [`IntVector`],
//! [`BitVector`], [`Permutation`], and the self-adaptive [`EsVector`].

use crate::fitness::Fitness;
use rand::seq::SliceRandom;
use rand::Rng;

/// Gene tolerance used by the floating-point similarity checks.
const GENE_TOLERANCE: f64 = 1e-14;

/// A candidate solution owning its fitness.
///
/// Archives and selection operators clone individuals freely, and
/// parallel evaluation moves them across threads, hence the bounds.
///
/// # Examples
///
/// ```
/// use evokit::{Fitness, Individual};
///
/// #[derive(Clone)]
/// struct Tour {
///     stops: Vec<usize>,
///     fitness: Fitness,
/// }
///
/// impl Individual for Tour {
///     fn fitness(&self) -> &Fitness { &self.fitness }
///     fn fitness_mut(&mut self) -> &mut Fitness { &mut self.fitness }
///     fn is_similar(&self, other: &Self) -> bool { self.stops == other.stops }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// The individual's fitness.
    fn fitness(&self) -> &Fitness;

    /// Mutable access for evaluation and invalidation.
    fn fitness_mut(&mut self) -> &mut Fitness;

    /// Representation equality, used by archives to reject duplicates.
    ///
    /// Floating-point representations compare genes within `1e-14`;
    /// discrete representations compare exactly.
    fn is_similar(&self, other: &Self) -> bool;
}

pub(crate) fn floats_similar(a: &[f64], b: &[f64]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| (x - y).abs() <= GENE_TOLERANCE)
}

// ===== Real-valued =====

/// Real-valued chromosome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RealVector {
    genes: Vec<f64>,
    fitness: Fitness,
}

impl RealVector {
    /// Creates an individual with the given genes and an unevaluated fitness.
    pub fn new(genes: Vec<f64>, weights: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: Fitness::new(weights),
        }
    }

    /// Creates an individual with `len` genes drawn uniformly from `[low, high)`.
    pub fn random<R: Rng>(
        len: usize,
        low: f64,
        high: f64,
        weights: Vec<f64>,
        rng: &mut R,
    ) -> Self {
        let genes = (0..len).map(|_| rng.random_range(low..high)).collect();
        Self::new(genes, weights)
    }

    /// The gene slice.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable genes; length-changing operators take the `Vec` directly.
    pub fn genes_mut(&mut self) -> &mut Vec<f64> {
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for RealVector {
    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    fn is_similar(&self, other: &Self) -> bool {
        floats_similar(&self.genes, &other.genes)
    }
}

// ===== Integer-valued =====

/// Integer chromosome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntVector {
    genes: Vec<i64>,
    fitness: Fitness,
}

impl IntVector {
    /// Creates an individual with the given genes and an unevaluated fitness.
    pub fn new(genes: Vec<i64>, weights: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: Fitness::new(weights),
        }
    }

    /// Creates an individual with `len` genes drawn uniformly from `[low, high]`.
    pub fn random<R: Rng>(
        len: usize,
        low: i64,
        high: i64,
        weights: Vec<f64>,
        rng: &mut R,
    ) -> Self {
        let genes = (0..len).map(|_| rng.random_range(low..=high)).collect();
        Self::new(genes, weights)
    }

    /// The gene slice.
    pub fn genes(&self) -> &[i64] {
        &self.genes
    }

    /// Mutable genes.
    pub fn genes_mut(&mut self) -> &mut Vec<i64> {
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for IntVector {
    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

// ===== Bit string =====

/// Boolean chromosome.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BitVector {
    genes: Vec<bool>,
    fitness: Fitness,
}

impl BitVector {
    /// Creates an individual with the given genes and an unevaluated fitness.
    pub fn new(genes: Vec<bool>, weights: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: Fitness::new(weights),
        }
    }

    /// Creates an individual with `len` fair-coin genes.
    pub fn random<R: Rng>(len: usize, weights: Vec<f64>, rng: &mut R) -> Self {
        let genes = (0..len).map(|_| rng.random_bool(0.5)).collect();
        Self::new(genes, weights)
    }

    /// The gene slice.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Mutable genes.
    pub fn genes_mut(&mut self) -> &mut Vec<bool> {
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for BitVector {
    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

// ===== Index permutation =====

/// Permutation chromosome over `0..len`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Permutation {
    genes: Vec<usize>,
    fitness: Fitness,
}

impl Permutation {
    /// Creates an individual from an explicit index ordering.
    pub fn new(genes: Vec<usize>, weights: Vec<f64>) -> Self {
        Self {
            genes,
            fitness: Fitness::new(weights),
        }
    }

    /// Creates a uniformly random permutation of `0..len`.
    pub fn random<R: Rng>(len: usize, weights: Vec<f64>, rng: &mut R) -> Self {
        let mut genes: Vec<usize> = (0..len).collect();
        genes.shuffle(rng);
        Self::new(genes, weights)
    }

    /// The index slice.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Mutable indices.
    pub fn genes_mut(&mut self) -> &mut Vec<usize> {
        &mut self.genes
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the permutation is empty.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for Permutation {
    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    fn is_similar(&self, other: &Self) -> bool {
        self.genes == other.genes
    }
}

// ===== Evolution strategy =====

/// Real-valued chromosome with a self-adaptive strategy vector.
///
/// The strategies hold per-gene mutation step sizes, adapted alongside the
/// genes by the ES operators. Similarity is judged on the genes alone.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EsVector {
    genes: Vec<f64>,
    strategies: Vec<f64>,
    fitness: Fitness,
}

impl EsVector {
    /// Creates an individual from explicit genes and strategies.
    ///
    /// # Panics
    ///
    /// Panics if the strategy vector length differs from the gene count.
    pub fn new(genes: Vec<f64>, strategies: Vec<f64>, weights: Vec<f64>) -> Self {
        assert_eq!(
            genes.len(),
            strategies.len(),
            "strategy vector length {} does not match gene count {}",
            strategies.len(),
            genes.len()
        );
        Self {
            genes,
            strategies,
            fitness: Fitness::new(weights),
        }
    }

    /// Creates an individual with genes uniform in `[low, high)` and
    /// strategies uniform in `[smin, smax)`.
    #[allow(clippy::too_many_arguments)]
    pub fn random<R: Rng>(
        len: usize,
        low: f64,
        high: f64,
        smin: f64,
        smax: f64,
        weights: Vec<f64>,
        rng: &mut R,
    ) -> Self {
        let genes = (0..len).map(|_| rng.random_range(low..high)).collect();
        let strategies = (0..len).map(|_| rng.random_range(smin..smax)).collect();
        Self::new(genes, strategies, weights)
    }

    /// The gene slice.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable genes.
    pub fn genes_mut(&mut self) -> &mut Vec<f64> {
        &mut self.genes
    }

    /// The strategy slice.
    pub fn strategies(&self) -> &[f64] {
        &self.strategies
    }

    /// Mutable strategies.
    pub fn strategies_mut(&mut self) -> &mut Vec<f64> {
        &mut self.strategies
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the chromosome has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for EsVector {
    fn fitness(&self) -> &Fitness {
        &self.fitness
    }

    fn fitness_mut(&mut self) -> &mut Fitness {
        &mut self.fitness
    }

    fn is_similar(&self, other: &Self) -> bool {
        floats_similar(&self.genes, &other.genes)
    }
}
