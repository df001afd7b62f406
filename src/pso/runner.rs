//! Particle swarm loop execution.
//!
//! [`ParticleSwarm`] moves every particle toward a blend of its personal
//! best and the swarm best, then keeps the better of the old and the
//! moved particle.

use log::info;
use rand::rngs::StdRng;
use rand::Rng;

use crate::archive::HallOfFame;
use crate::error::EvoError;
use crate::evolution::{evaluate_population, Evaluator, Evolution, LoopState};
use crate::individual::Individual;
use crate::pso::config::PsoConfig;
use crate::pso::particle::Particle;
use crate::random::create_rng;
use crate::stats::{Logbook, Statistics};

/// Particle Swarm Optimization with greedy replacement.
///
/// Kennedy and Eberhart's velocity update drives the swarm; unlike the
/// textbook scheme a moved particle only replaces its predecessor when
/// the new position evaluates strictly better, so the swarm never loses
/// ground. Call [`init`](Evolution::init) with a starting swarm, then
/// step with [`evolve`](Evolution::evolve) or drain the loop with
/// [`run`](Evolution::run).
///
/// # Usage
///
/// ```
/// use evokit::evolution::Evolution;
/// use evokit::pso::{Particle, ParticleSwarm, PsoConfig};
/// use evokit::random::create_rng;
///
/// let sphere = |p: &Particle| vec![p.genes().iter().map(|x| x * x).sum::<f64>()];
/// let config = PsoConfig::default().with_max_generations(40).with_seed(5);
/// let mut swarm = ParticleSwarm::new(config, sphere)?;
///
/// let mut rng = create_rng(5);
/// let particles: Vec<Particle> = (0..20)
///     .map(|_| Particle::random(2, -6.0, 6.0, -3.0, 3.0, vec![-1.0], &mut rng))
///     .collect();
/// swarm.init(particles)?;
/// swarm.run()?;
/// assert_eq!(swarm.generation(), 40);
/// # Ok::<(), evokit::EvoError>(())
/// ```
///
/// # References
///
/// - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
/// - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
pub struct ParticleSwarm<E: Evaluator<Particle>> {
    config: PsoConfig,
    evaluator: E,
    state: LoopState<Particle>,
    rng: StdRng,
}

impl<E: Evaluator<Particle>> ParticleSwarm<E> {
    /// Creates a runner for the given configuration and evaluator.
    ///
    /// Fails when the configuration does not [`validate`](PsoConfig::validate).
    pub fn new(config: PsoConfig, evaluator: E) -> Result<Self, EvoError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let state = LoopState::new(config.max_generations, config.max_evaluations);
        Ok(Self {
            config,
            evaluator,
            state,
            rng,
        })
    }

    /// Replaces the default single-slot elite archive.
    ///
    /// The swarm best is read from slot 0, so the archive must keep at
    /// least one member.
    pub fn with_hall_of_fame(mut self, hall_of_fame: HallOfFame<Particle>) -> Self {
        self.state.hall_of_fame = hall_of_fame;
        self
    }

    /// Attaches statistics compiled into the logbook every generation.
    pub fn with_statistics(mut self, statistics: Statistics<Particle>) -> Self {
        self.state.statistics = Some(statistics);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &PsoConfig {
        &self.config
    }
}

impl<E: Evaluator<Particle>> Evolution for ParticleSwarm<E> {
    type Individual = Particle;

    fn init(&mut self, population: Vec<Particle>) -> Result<(), EvoError> {
        if population.is_empty() {
            return Err(EvoError::InvalidConfig(
                "swarm must hold at least one particle".into(),
            ));
        }
        let gene_count = population[0].genes().len();
        if population.iter().any(|p| p.genes().len() != gene_count) {
            return Err(EvoError::InvalidConfig(
                "all particles must have the same number of genes".into(),
            ));
        }

        self.state.reset(population);
        if !self.state.is_terminated() {
            self.state.evaluate(&self.evaluator, self.config.parallel);
            for particle in &mut self.state.population {
                particle.record_personal_best();
            }
            self.state.record_generation();
        }
        info!(
            "particle swarm initialized ({} particles, {} genes)",
            self.state.population.len(),
            gene_count
        );
        Ok(())
    }

    fn is_terminated(&self) -> bool {
        self.state.is_terminated()
    }

    fn evolve(&mut self) -> Result<usize, EvoError> {
        self.state.generation += 1;
        if self.state.is_terminated() {
            return Ok(self.state.generation);
        }

        // Every move of this generation chases the same swarm best.
        let swarm_best = self.state.hall_of_fame.get(0).genes().to_vec();

        let size = self.state.population.len();
        let mut moved = Vec::with_capacity(size);
        for particle in &self.state.population {
            moved.push(move_particle(
                &mut self.rng,
                particle,
                &swarm_best,
                &self.config,
            ));
        }

        evaluate_population(&self.evaluator, &mut moved, self.config.parallel);

        // A particle keeps its old position, speed, and memory unless
        // the move strictly improved it.
        let survivors = self
            .state
            .population
            .iter()
            .zip(moved)
            .map(|(current, mut candidate)| {
                if candidate.fitness().greater(current.fitness()) {
                    if candidate
                        .fitness()
                        .greater(candidate.personal_best_fitness())
                    {
                        candidate.record_personal_best();
                    }
                    candidate
                } else {
                    current.clone()
                }
            })
            .collect();
        self.state.population = survivors;
        self.state.evaluations += size;
        self.state.record_generation();
        Ok(self.state.generation)
    }

    fn population(&self) -> &[Particle] {
        &self.state.population
    }

    fn hall_of_fame(&self) -> &HallOfFame<Particle> {
        &self.state.hall_of_fame
    }

    fn logbook(&self) -> &Logbook {
        &self.state.logbook
    }

    fn generation(&self) -> usize {
        self.state.generation
    }

    fn evaluations(&self) -> usize {
        self.state.evaluations
    }
}

/// Move one particle: velocity update toward the two attractors, then an
/// unclamped position step. Only the stored speed is clamped afterwards.
fn move_particle<R: Rng>(
    rng: &mut R,
    particle: &Particle,
    swarm_best: &[f64],
    config: &PsoConfig,
) -> Particle {
    let mut candidate = particle.clone();
    let mut speed = candidate.speed().to_vec();
    for j in 0..speed.len() {
        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let position = candidate.genes()[j];
        let pull = config.cognitive * r1 * (candidate.personal_best_genes()[j] - position)
            + config.social * r2 * (swarm_best[j] - position);
        speed[j] += pull;
        candidate.genes_mut()[j] += speed[j];
    }
    candidate.set_speed(&speed);
    candidate
}

// ============================================================================
// Tests
// ============================================================================
