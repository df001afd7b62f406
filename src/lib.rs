//! Evolutionary-computation toolkit.
//!
//! Provides the building blocks of multi-objective evolutionary
//! optimization and two ready-made algorithms on top of them:
//!
//! - **Fitness algebra**: Weighted objective vectors where the weight sign
//!   encodes the optimization direction, compared elementwise.
//! - **Non-dominated ranking**: Deb's fast non-dominated sorter over a
//!   fixed-capacity bucketed adjacency list, crowding-distance density
//!   estimation, and NSGA-II environmental selection.
//! - **Archives**: A bounded, sorted Hall of Fame and an unbounded Pareto
//!   front that stay consistent under population turnover.
//! - **Evolution loop**: The generic init/evolve/run state machine with
//!   termination bookkeeping, statistics, and logbook recording.
//! - **Differential Evolution (DE)**: `rand/1` and `best/1` donor
//!   strategies with greedy trial acceptance.
//! - **Particle Swarm Optimization (PSO)**: Personal/global best tracking
//!   with clamped velocities and greedy move acceptance.
//! - **Operator toolbox**: Crossover, mutation, and selection free
//!   functions plus a feasibility penalty wrapper, mixed freely by user
//!   code and the stock algorithms.
//! - **Benchmarks**: The classic single-, multi-objective, and boolean
//!   test functions for exercising all of the above.
//!
//! # Architecture
//!
//! The crate layers strictly: [`Fitness`] and the [`Individual`]
//! representations sit at the bottom; [`emo`] ranks populations over them;
//! [`archive`] and [`stats`] observe populations; [`evolution`] drives the
//! generational loop against an [`evolution::Evaluator`]; [`de`] and
//! [`pso`] are thin algorithm heads on that loop. Nothing here knows about
//! any concrete problem domain — objectives enter exclusively through
//! evaluator closures.

pub mod archive;
pub mod benchmarks;
pub mod de;
pub mod emo;
pub mod evolution;
pub mod ops;
pub mod pso;
pub mod random;
pub mod stats;

mod error;
mod fitness;
mod individual;

pub use error::EvoError;
pub use fitness::Fitness;
pub use individual::{BitVector, EsVector, Individual, IntVector, Permutation, RealVector};
