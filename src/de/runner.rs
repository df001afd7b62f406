//! Differential evolution loop execution.
//!
//! [`DifferentialEvolution`] drives a population of [`RealVector`] agents:
//! every generation each agent is challenged by a trial vector assembled
//! from a donor and binomial crossover, and the better of the two survives.

use log::info;
use rand::rngs::StdRng;
use rand::seq::index;
use rand::Rng;

use crate::archive::HallOfFame;
use crate::de::config::{DeConfig, DeVariant};
use crate::error::EvoError;
use crate::evolution::{evaluate_population, Evaluator, Evolution, LoopState};
use crate::individual::{Individual, RealVector};
use crate::random::create_rng;
use crate::stats::{Logbook, Statistics};

/// Differential Evolution over real-valued chromosomes.
///
/// Implements Storn and Price's generational scheme with greedy
/// one-to-one replacement. Call [`init`](Evolution::init) with a starting
/// population, then step with [`evolve`](Evolution::evolve) or drain the
/// loop with [`run`](Evolution::run).
///
/// # Usage
///
/// ```
/// use evokit::de::{DeConfig, DifferentialEvolution};
/// use evokit::evolution::Evolution;
/// use evokit::random::create_rng;
/// use evokit::RealVector;
///
/// let sphere = |agent: &RealVector| vec![agent.genes().iter().map(|x| x * x).sum::<f64>()];
/// let config = DeConfig::default().with_max_generations(30).with_seed(7);
/// let mut de = DifferentialEvolution::new(config, sphere)?;
///
/// let mut rng = create_rng(7);
/// let population: Vec<RealVector> = (0..20)
///     .map(|_| RealVector::random(3, -5.0, 5.0, vec![-1.0], &mut rng))
///     .collect();
/// de.init(population)?;
/// de.run()?;
/// assert_eq!(de.generation(), 30);
/// # Ok::<(), evokit::EvoError>(())
/// ```
///
/// # References
///
/// - Storn & Price (1997), "Differential Evolution: A Simple and Efficient
///   Heuristic for Global Optimization over Continuous Spaces"
pub struct DifferentialEvolution<E: Evaluator<RealVector>> {
    config: DeConfig,
    evaluator: E,
    state: LoopState<RealVector>,
    rng: StdRng,
}

impl<E: Evaluator<RealVector>> DifferentialEvolution<E> {
    /// Creates a runner for the given configuration and evaluator.
    ///
    /// Fails when the configuration does not [`validate`](DeConfig::validate).
    pub fn new(config: DeConfig, evaluator: E) -> Result<Self, EvoError> {
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
    /// [`DeVariant::Best1`] reads its donor base from slot 0, so the
    /// archive must keep at least one member.
    pub fn with_hall_of_fame(mut self, hall_of_fame: HallOfFame<RealVector>) -> Self {
        self.state.hall_of_fame = hall_of_fame;
        self
    }

    /// Attaches statistics compiled into the logbook every generation.
    pub fn with_statistics(mut self, statistics: Statistics<RealVector>) -> Self {
        self.state.statistics = Some(statistics);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &DeConfig {
        &self.config
    }
}

impl<E: Evaluator<RealVector>> Evolution for DifferentialEvolution<E> {
    type Individual = RealVector;

    fn init(&mut self, population: Vec<RealVector>) -> Result<(), EvoError> {
        let minimum = self.config.variant.minimum_population();
        if population.len() < minimum {
            return Err(EvoError::InvalidConfig(format!(
                "population of {} is too small: {:?} needs at least {}",
                population.len(),
                self.config.variant,
                minimum
            )));
        }
        let gene_count = population[0].genes().len();
        if gene_count == 0 {
            return Err(EvoError::InvalidConfig(
                "agents need at least one gene".into(),
            ));
        }
        if population.iter().any(|agent| agent.genes().len() != gene_count) {
            return Err(EvoError::InvalidConfig(
                "all agents must have the same number of genes".into(),
            ));
        }

        self.state.reset(population);
        if !self.state.is_terminated() {
            self.state.evaluate(&self.evaluator, self.config.parallel);
            self.state.record_generation();
        }
        info!(
            "differential evolution initialized ({} agents, {} genes, {:?})",
            self.state.population.len(),
            gene_count,
            self.config.variant
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

        // Best/1 anchors every donor of this generation at the same base.
        let base = match self.config.variant {
            DeVariant::Best1 => Some(self.state.hall_of_fame.get(0).genes().to_vec()),
            DeVariant::Rand1 => None,
        };

        // Build all trials against the unchanged parent generation.
        let size = self.state.population.len();
        let mut offspring = Vec::with_capacity(size);
        for agent_index in 0..size {
            offspring.push(build_trial(
                &mut self.rng,
                &self.state.population,
                agent_index,
                base.as_deref(),
                &self.config,
            ));
        }

        evaluate_population(&self.evaluator, &mut offspring, self.config.parallel);

        // Greedy one-to-one replacement.
        let survivors = self
            .state
            .population
            .iter()
            .zip(offspring)
            .map(|(agent, trial)| {
                if trial.fitness().greater(agent.fitness()) {
                    trial
                } else {
                    agent.clone()
                }
            })
            .collect();
        self.state.population = survivors;
        self.state.evaluations += size;
        self.state.record_generation();
        Ok(self.state.generation)
    }

    fn population(&self) -> &[RealVector] {
        &self.state.population
    }

    fn hall_of_fame(&self) -> &HallOfFame<RealVector> {
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

/// Pick `amount` distinct companion indices, none equal to `agent_index`.
fn pick_companions<R: Rng>(
    rng: &mut R,
    size: usize,
    agent_index: usize,
    amount: usize,
) -> Vec<usize> {
    index::sample(rng, size, size)
        .into_iter()
        .filter(|&candidate| candidate != agent_index)
        .take(amount)
        .collect()
}

/// Build one trial vector for the agent at `agent_index`.
///
/// The donor is `base + F·(r0 − r1)` when a base is given (best/1) and
/// `r0 + F·(r1 − r2)` otherwise (rand/1). Binomial crossover keeps each
/// parent gene with probability `crossover_rate`; one pinned position
/// always stays with the parent.
fn build_trial<R: Rng>(
    rng: &mut R,
    population: &[RealVector],
    agent_index: usize,
    base: Option<&[f64]>,
    config: &DeConfig,
) -> RealVector {
    let companions = pick_companions(
        rng,
        population.len(),
        agent_index,
        config.variant.companions(),
    );
    let mut trial = population[agent_index].clone();
    let gene_count = trial.genes().len();
    let pinned = rng.random_range(0..gene_count);
    for j in 0..gene_count {
        if j == pinned || rng.random::<f64>() < config.crossover_rate {
            continue;
        }
        let donor = match base {
            Some(best) => {
                let r0 = population[companions[0]].genes()[j];
                let r1 = population[companions[1]].genes()[j];
                best[j] + config.scale_factor * (r0 - r1)
            }
            None => {
                let r0 = population[companions[0]].genes()[j];
                let r1 = population[companions[1]].genes()[j];
                let r2 = population[companions[2]].genes()[j];
                r0 + config.scale_factor * (r1 - r2)
            }
        };
        trial.genes_mut()[j] = donor;
    }
    trial
}

// ============================================================================
// Tests
// ============================================================================
