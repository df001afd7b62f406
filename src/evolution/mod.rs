//! Generational control loop shared by the concrete algorithms.
//!
//! [`Evolution`] is the driver-facing contract: seed with
//! [`init`](Evolution::init), step with [`evolve`](Evolution::evolve) or
//! drain with [`run`](Evolution::run), inspect the rest through the
//! accessors. [`LoopState`]
//! carries the bookkeeping every implementation shares: population,
//! counters, hall of fame, statistics and logbook.

use log::debug;
use rayon::prelude::*;

use crate::archive::HallOfFame;
use crate::error::EvoError;
use crate::individual::Individual;
use crate::stats::{Logbook, Record, Statistics};

/// First-objective value below which a run counts as solved.
pub const SOLVED_THRESHOLD: f64 = 1e-14;

/// Computes raw objective values for one individual.
///
/// The blanket implementation lets any `Fn(&I) -> Vec<f64>` closure serve
/// as an evaluator.
///
/// # Thread Safety
///
/// Evaluators must be `Send + Sync` because the control loop may evaluate
/// individuals in parallel using rayon.
pub trait Evaluator<I>: Send + Sync {
    /// Returns one value per objective, in weight order.
    fn evaluate(&self, individual: &I) -> Vec<f64>;
}

impl<I, F> Evaluator<I> for F
where
    F: Fn(&I) -> Vec<f64> + Send + Sync,
{
    fn evaluate(&self, individual: &I) -> Vec<f64> {
        self(individual)
    }
}

/// Evaluates every individual and stores the values in its fitness.
///
/// With `parallel` set the population is evaluated with rayon; results are
/// identical either way since evaluators are pure.
pub fn evaluate_population<I, E>(evaluator: &E, individuals: &mut [I], parallel: bool)
where
    I: Individual,
    E: Evaluator<I>,
{
    if parallel {
        individuals.par_iter_mut().for_each(|individual| {
            let values = evaluator.evaluate(individual);
            individual.fitness_mut().set_values(&values);
        });
    } else {
        for individual in individuals.iter_mut() {
            let values = evaluator.evaluate(individual);
            individual.fitness_mut().set_values(&values);
        }
    }
}

/// Shared bookkeeping for a generational run.
///
/// Concrete algorithms own one of these and drive it from their
/// [`Evolution`] implementation. Fields are public so custom algorithms
/// can reach everything the built-in ones can.
#[derive(Debug, Clone)]
pub struct LoopState<I: Individual> {
    /// The individuals of the current generation.
    pub population: Vec<I>,
    /// Generations completed; counts up even on a terminated step.
    pub generation: usize,
    /// Inclusive generation bound.
    pub max_generations: usize,
    /// Total evaluations consumed so far.
    pub evaluations: usize,
    /// Evaluation budget; 0 means unbounded.
    pub max_evaluations: usize,
    /// Best-so-far archive, persisted across [`reset`](Self::reset).
    pub hall_of_fame: HallOfFame<I>,
    /// Per-generation statistics, if any.
    pub statistics: Option<Statistics<I>>,
    /// Chronological record of the run.
    pub logbook: Logbook,
}

impl<I: Individual> LoopState<I> {
    /// Creates an empty state with a size-1 hall of fame.
    pub fn new(max_generations: usize, max_evaluations: usize) -> Self {
        Self {
            population: Vec::new(),
            generation: 0,
            max_generations,
            evaluations: 0,
            max_evaluations,
            hall_of_fame: HallOfFame::new(1),
            statistics: None,
            logbook: Logbook::new(),
        }
    }

    /// Installs a fresh population and zeroes the counters and logbook.
    ///
    /// The hall of fame is deliberately left alone so restarts keep the
    /// best-so-far across populations.
    pub fn reset(&mut self, population: Vec<I>) {
        self.population = population;
        self.generation = 0;
        self.evaluations = 0;
        self.logbook.clear();
    }

    /// Whether any termination condition holds: the generation bound, the
    /// evaluation budget (counting the upcoming generation), or a
    /// hall-of-fame best whose first raw objective is below
    /// [`SOLVED_THRESHOLD`].
    pub fn is_terminated(&self) -> bool {
        if self.generation >= self.max_generations {
            return true;
        }
        if self.max_evaluations > 0
            && self.evaluations + self.population.len() > self.max_evaluations
        {
            return true;
        }
        if !self.hall_of_fame.is_empty()
            && self.hall_of_fame.get(0).fitness().values()[0] < SOLVED_THRESHOLD
        {
            return true;
        }
        false
    }

    /// Evaluates the current population and charges it to the budget.
    pub fn evaluate<E: Evaluator<I>>(&mut self, evaluator: &E, parallel: bool) {
        evaluate_population(evaluator, &mut self.population, parallel);
        self.evaluations += self.population.len();
    }

    /// Closes out a generation: compiles statistics into the logbook,
    /// feeds the population to the hall of fame and emits a debug line.
    pub fn record_generation(&mut self) {
        let entries = match &self.statistics {
            Some(statistics) => statistics.compile(&self.population),
            None => Vec::new(),
        };
        self.logbook.record(Record {
            generation: self.generation,
            evaluations: self.population.len(),
            entries,
        });
        self.hall_of_fame.update(&self.population);
        debug!(
            "generation {} closed ({} evaluations total)",
            self.generation, self.evaluations
        );
    }
}

/// A generational algorithm driven from outside.
///
/// The lifecycle is `init` once, then `evolve` until
/// [`is_terminated`](Self::is_terminated), which [`run`](Self::run) does in
/// a loop. `evolve` advances the generation counter even when called on a
/// terminated state, but skips the work.
pub trait Evolution {
    type Individual: Individual;

    /// Seeds the algorithm with a starting population, evaluates it and
    /// records generation 0, unless the state is already terminated.
    fn init(&mut self, population: Vec<Self::Individual>) -> Result<(), EvoError>;

    /// Whether the run is over.
    fn is_terminated(&self) -> bool;

    /// Advances one generation and returns the new generation number.
    fn evolve(&mut self) -> Result<usize, EvoError>;

    /// Steps [`evolve`](Self::evolve) until terminated. Does not
    /// re-initialize.
    fn run(&mut self) -> Result<(), EvoError> {
        while !self.is_terminated() {
            self.evolve()?;
        }
        Ok(())
    }

    /// The current population.
    fn population(&self) -> &[Self::Individual];

    /// The best-so-far archive.
    fn hall_of_fame(&self) -> &HallOfFame<Self::Individual>;

    /// The run history.
    fn logbook(&self) -> &Logbook;

    /// Generations completed.
    fn generation(&self) -> usize;

    /// Evaluations consumed.
    fn evaluations(&self) -> usize;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::individual::RealVector;
    use crate::stats::stat_min;

    fn population(values: &[f64]) -> Vec<RealVector> {
        values
            .iter()
            .map(|&value| RealVector::new(vec![value], vec![-1.0]))
            .collect()
    }

    fn sphere_eval(individual: &RealVector) -> Vec<f64> {
        vec![individual.genes().iter().map(|g| g * g).sum()]
    }

    // ---- evaluate_population ----

    #[test]
    fn test_evaluate_population_sets_fitness() {
        let mut individuals = population(&[2.0, -3.0]);
        evaluate_population(&sphere_eval, &mut individuals, false);
        assert_eq!(individuals[0].fitness().values(), &[4.0]);
        assert_eq!(individuals[1].fitness().values(), &[9.0]);
        assert!(individuals.iter().all(|i| i.fitness().valid()));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut sequential = population(&[1.0, 2.0, 3.0, 4.0]);
        let mut parallel = sequential.clone();
        evaluate_population(&sphere_eval, &mut sequential, false);
        evaluate_population(&sphere_eval, &mut parallel, true);
        for (a, b) in sequential.iter().zip(&parallel) {
            assert_eq!(a.fitness().values(), b.fitness().values());
        }
    }

    // ---- LoopState ----

    #[test]
    fn test_termination_by_generations() {
        let mut state: LoopState<RealVector> = LoopState::new(3, 0);
        state.reset(population(&[1.0]));
        assert!(!state.is_terminated());
        state.generation = 3;
        assert!(state.is_terminated());
    }

    #[test]
    fn test_termination_by_evaluation_budget_counts_next_generation() {
        let mut state: LoopState<RealVector> = LoopState::new(100, 25);
        state.reset(population(&[0.0; 10]));
        state.evaluations = 10;
        assert!(!state.is_terminated(), "10 + 10 <= 25 still fits");
        state.evaluations = 16;
        assert!(state.is_terminated(), "16 + 10 > 25 would overrun");
    }

    #[test]
    fn test_termination_by_solved_best() {
        let mut state: LoopState<RealVector> = LoopState::new(100, 0);
        state.reset(population(&[0.0]));
        state.evaluate(&sphere_eval, false);
        assert!(!state.is_terminated(), "hall of fame still empty");
        state.record_generation();
        assert!(state.is_terminated(), "best is 0.0, below the threshold");
    }

    #[test]
    fn test_evaluate_charges_budget() {
        let mut state: LoopState<RealVector> = LoopState::new(10, 0);
        state.reset(population(&[1.0, 2.0, 3.0]));
        state.evaluate(&sphere_eval, false);
        assert_eq!(state.evaluations, 3);
        state.evaluate(&sphere_eval, false);
        assert_eq!(state.evaluations, 6);
    }

    #[test]
    fn test_record_generation_fills_logbook_and_archive() {
        let mut state: LoopState<RealVector> = LoopState::new(10, 0);
        let mut statistics = Statistics::new("fitness");
        statistics.register("min", stat_min);
        state.statistics = Some(statistics);

        state.reset(population(&[2.0, 5.0]));
        state.evaluate(&sphere_eval, false);
        state.record_generation();

        assert_eq!(state.logbook.len(), 1);
        let record = state.logbook.last().unwrap();
        assert_eq!(record.generation, 0);
        assert_eq!(record.evaluations, 2);
        assert_eq!(record.get("min"), Some([4.0].as_slice()));
        assert_eq!(state.hall_of_fame.get(0).fitness().values(), &[4.0]);
    }

    #[test]
    fn test_reset_preserves_hall_of_fame() {
        let mut state: LoopState<RealVector> = LoopState::new(10, 0);
        state.reset(population(&[3.0]));
        state.evaluate(&sphere_eval, false);
        state.record_generation();
        assert_eq!(state.hall_of_fame.len(), 1);

        state.reset(population(&[5.0]));
        assert_eq!(state.generation, 0);
        assert_eq!(state.evaluations, 0);
        assert!(state.logbook.is_empty());
        assert_eq!(
            state.hall_of_fame.len(),
            1,
            "archive survives re-initialization"
        );
    }

    #[test]
    fn test_struct_evaluator_impl() {
        struct Offset(f64);
        impl Evaluator<RealVector> for Offset {
            fn evaluate(&self, individual: &RealVector) -> Vec<f64> {
                vec![individual.genes()[0] + self.0]
            }
        }

        let mut individuals = population(&[1.0]);
        evaluate_population(&Offset(10.0), &mut individuals, false);
        assert_eq!(individuals[0].fitness().values(), &[11.0]);
    }
}
