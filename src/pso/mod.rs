//! Particle Swarm Optimization (PSO).
//!
//! A population-based metaheuristic for continuous optimization. Each
//! [`Particle`] carries a position, a speed, and a memory of its own best
//! position; the velocity update blends the pull toward that memory with
//! the pull toward the best position the swarm has recorded. Replacement
//! is greedy: a particle only moves when the new position evaluates
//! strictly better.
//!
//! # Key Types
//!
//! - [`Particle`]: Position, speed, and personal-best memory
//! - [`PsoConfig`]: Algorithm parameters (coefficients, termination)
//! - [`ParticleSwarm`]: Executes the swarm loop
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Poli, Kennedy & Blackwell (2007), "Particle Swarm Optimization:
//!   An Overview"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::ParticleSwarm;
