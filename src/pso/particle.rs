//! Swarm member: a position, a speed, and the particle's own memory.

use rand::Rng;

use crate::fitness::Fitness;
use crate::individual::{floats_similar, Individual};

/// A particle tracking position, speed, and its personal best.
///
/// Speeds are clamped into `[smin, smax]` whenever they are stored
/// through [`set_speed`](Self::set_speed); the position itself is
/// unbounded.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    genes: Vec<f64>,
    speed: Vec<f64>,
    smin: f64,
    smax: f64,
    best_genes: Vec<f64>,
    best_fitness: Fitness,
    fitness: Fitness,
}

impl Particle {
    /// Creates a particle at the given position with the given speed.
    ///
    /// The personal best starts at the initial position with an
    /// unevaluated fitness.
    ///
    /// # Panics
    ///
    /// Panics if the speed vector length differs from the gene count.
    pub fn new(genes: Vec<f64>, speed: Vec<f64>, smin: f64, smax: f64, weights: Vec<f64>) -> Self {
        assert_eq!(
            genes.len(),
            speed.len(),
            "speed vector length {} does not match gene count {}",
            speed.len(),
            genes.len()
        );
        let best_genes = genes.clone();
        Self {
            genes,
            speed,
            smin,
            smax,
            best_genes,
            best_fitness: Fitness::new(weights.clone()),
            fitness: Fitness::new(weights),
        }
    }

    /// Creates a particle with position uniform in `[low, high)` and
    /// speed uniform in `[smin, smax)`.
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
        let speed = (0..len).map(|_| rng.random_range(smin..smax)).collect();
        Self::new(genes, speed, smin, smax, weights)
    }

    /// The position slice.
    pub fn genes(&self) -> &[f64] {
        &self.genes
    }

    /// Mutable position.
    pub fn genes_mut(&mut self) -> &mut Vec<f64> {
        &mut self.genes
    }

    /// The speed slice.
    pub fn speed(&self) -> &[f64] {
        &self.speed
    }

    /// Stores a new speed, clamping every component into `[smin, smax]`.
    ///
    /// # Panics
    ///
    /// Panics if the speed vector length differs from the gene count.
    pub fn set_speed(&mut self, speed: &[f64]) {
        assert_eq!(
            speed.len(),
            self.genes.len(),
            "speed vector length {} does not match gene count {}",
            speed.len(),
            self.genes.len()
        );
        self.speed.clear();
        self.speed
            .extend(speed.iter().map(|s| s.clamp(self.smin, self.smax)));
    }

    /// Lower speed bound.
    pub fn speed_min(&self) -> f64 {
        self.smin
    }

    /// Upper speed bound.
    pub fn speed_max(&self) -> f64 {
        self.smax
    }

    /// Snapshots the current position and fitness as the personal best.
    pub fn record_personal_best(&mut self) {
        self.best_genes.clear();
        self.best_genes.extend_from_slice(&self.genes);
        self.best_fitness = self.fitness.clone();
    }

    /// The best position this particle has recorded.
    pub fn personal_best_genes(&self) -> &[f64] {
        &self.best_genes
    }

    /// The fitness recorded at the personal best position.
    pub fn personal_best_fitness(&self) -> &Fitness {
        &self.best_fitness
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// True if the particle has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl Individual for Particle {
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

// ============================================================================
// Tests
// ============================================================================
