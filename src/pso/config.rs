//! Particle swarm configuration.
//!
//! [`PsoConfig`] holds all parameters that control the swarm loop.

use crate::error::EvoError;

/// Configuration for Particle Swarm Optimization.
///
/// Controls the attraction coefficients, termination conditions, and
/// parallelism. Speed bounds live on each [`Particle`](super::Particle),
/// not here, so mixed swarms are possible.
///
/// # Defaults
///
/// ```
/// use evokit::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.max_generations, 200);
/// assert!((config.cognitive - 2.0).abs() < 1e-10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evokit::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_cognitive(1.5)
///     .with_social(2.5)
///     .with_max_generations(500)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct PsoConfig {
    /// Cognitive coefficient `c1` (0.0 disables the component).
    ///
    /// Scales the pull toward the particle's personal best. Each
    /// dimension draws a fresh factor uniform in `[0, c1)`.
    pub cognitive: f64,

    /// Social coefficient `c2` (0.0 disables the component).
    ///
    /// Scales the pull toward the best position the swarm has recorded.
    pub social: f64,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Maximum number of fitness evaluations.
    ///
    /// The loop stops before starting a generation whose evaluations
    /// would exceed this budget. Set to 0 to disable (the default).
    pub max_evaluations: usize,

    /// Whether to evaluate particles in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            cognitive: 2.0,
            social: 2.0,
            max_generations: 200,
            max_evaluations: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the cognitive coefficient `c1`.
    pub fn with_cognitive(mut self, c1: f64) -> Self {
        self.cognitive = c1;
        self
    }

    /// Sets the social coefficient `c2`.
    pub fn with_social(mut self, c2: f64) -> Self {
        self.social = c2;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the evaluation budget (0 to disable).
    pub fn with_max_evaluations(mut self, n: usize) -> Self {
        self.max_evaluations = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), EvoError> {
        if !self.cognitive.is_finite() || self.cognitive < 0.0 {
            return Err(EvoError::InvalidConfig(
                "cognitive coefficient must be non-negative and finite".into(),
            ));
        }
        if !self.social.is_finite() || self.social < 0.0 {
            return Err(EvoError::InvalidConfig(
                "social coefficient must be non-negative and finite".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(EvoError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PsoConfig::default();
        assert!((config.cognitive - 2.0).abs() < 1e-10);
        assert!((config.social - 2.0).abs() < 1e-10);
        assert_eq!(config.max_generations, 200);
        assert_eq!(config.max_evaluations, 0);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PsoConfig::default()
            .with_cognitive(1.5)
            .with_social(2.5)
            .with_max_generations(1000)
            .with_max_evaluations(50_000)
            .with_parallel(true)
            .with_seed(42);

        assert!((config.cognitive - 1.5).abs() < 1e-10);
        assert!((config.social - 2.5).abs() < 1e-10);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.max_evaluations, 50_000);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(PsoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_coefficients_allowed() {
        let config = PsoConfig::default().with_cognitive(0.0).with_social(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_cognitive() {
        let config = PsoConfig::default().with_cognitive(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_nan_social() {
        let config = PsoConfig::default().with_social(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = PsoConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }
}
