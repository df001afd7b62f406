//! Constraint handling through repair-based penalties.

use crate::evolution::Evaluator;
use crate::individual::Individual;

/// Wraps an evaluator with a closest-valid penalty.
///
/// Feasible individuals evaluate as usual. An infeasible individual is
/// repaired to its closest valid counterpart, the counterpart is
/// evaluated, and each objective is then pushed away from optimal by
/// `alpha` times the distance between the two, so the search still feels
/// a gradient back toward the feasible region. Without a distance
/// function the individual simply inherits its repaired evaluation.
///
/// # Examples
///
/// ```
/// use evokit::evolution::Evaluator;
/// use evokit::ops::ClosestValidPenalty;
/// use evokit::{Individual, RealVector};
///
/// let sphere = |ind: &RealVector| vec![ind.genes().iter().map(|g| g * g).sum()];
/// let penalized = ClosestValidPenalty::new(
///     sphere,
///     |ind: &RealVector| ind.genes().iter().all(|g| g.abs() <= 1.0),
///     |ind: &RealVector| {
///         let clamped = ind.genes().iter().map(|g| g.clamp(-1.0, 1.0)).collect();
///         RealVector::new(clamped, ind.fitness().weights().to_vec())
///     },
///     2.0,
/// )
/// .with_distance(|repaired: &RealVector, original: &RealVector| {
///     repaired
///         .genes()
///         .iter()
///         .zip(original.genes())
///         .map(|(a, b)| (a - b).powi(2))
///         .sum::<f64>()
///         .sqrt()
/// });
///
/// let inside = RealVector::new(vec![0.5], vec![-1.0]);
/// assert_eq!(penalized.evaluate(&inside), vec![0.25]);
///
/// // 3.0 repairs to 1.0 at distance 2: value 1.0 plus 2.0 * 2.
/// let outside = RealVector::new(vec![3.0], vec![-1.0]);
/// assert_eq!(penalized.evaluate(&outside), vec![5.0]);
/// ```
pub struct ClosestValidPenalty<I, E> {
    evaluator: E,
    feasible: Box<dyn Fn(&I) -> bool + Send + Sync>,
    repair: Box<dyn Fn(&I) -> I + Send + Sync>,
    alpha: f64,
    distance: Option<Box<dyn Fn(&I, &I) -> f64 + Send + Sync>>,
}

impl<I, E> ClosestValidPenalty<I, E> {
    /// Wraps `evaluator`; `feasible` screens individuals and `repair` maps
    /// an infeasible one to its closest valid counterpart.
    pub fn new<F, A>(evaluator: E, feasible: F, repair: A, alpha: f64) -> Self
    where
        F: Fn(&I) -> bool + Send + Sync + 'static,
        A: Fn(&I) -> I + Send + Sync + 'static,
    {
        Self {
            evaluator,
            feasible: Box::new(feasible),
            repair: Box::new(repair),
            alpha,
            distance: None,
        }
    }

    /// Sets the distance measure between the repaired individual and the
    /// original, scaling the penalty.
    pub fn with_distance<D>(mut self, distance: D) -> Self
    where
        D: Fn(&I, &I) -> f64 + Send + Sync + 'static,
    {
        self.distance = Some(Box::new(distance));
        self
    }
}

impl<I, E> Evaluator<I> for ClosestValidPenalty<I, E>
where
    I: Individual,
    E: Evaluator<I>,
{
    fn evaluate(&self, individual: &I) -> Vec<f64> {
        if (self.feasible)(individual) {
            return self.evaluator.evaluate(individual);
        }
        let repaired = (self.repair)(individual);
        let mut values = self.evaluator.evaluate(&repaired);
        let weights = individual.fitness().weights();
        assert_eq!(
            values.len(),
            weights.len(),
            "evaluator returned {} values for {} objectives",
            values.len(),
            weights.len()
        );
        let distance = self
            .distance
            .as_ref()
            .map_or(0.0, |distance| distance(&repaired, individual));
        for (value, weight) in values.iter_mut().zip(weights) {
            // Penalties push against the optimization direction: down for
            // maximized objectives, up for minimized ones.
            let direction = if *weight >= 0.0 { 1.0 } else { -1.0 };
            *value -= direction * self.alpha * distance;
        }
        values
    }
}
