//! Differential Evolution (DE).
//!
//! A population-based metaheuristic for continuous optimization. Each
//! agent is challenged every generation by a trial vector built from
//! scaled differences between population members; the better of agent
//! and trial survives. Two donor strategies are provided through
//! [`DeVariant`]: the exploratory `DE/rand/1` and the greedy `DE/best/1`.
//!
//! # Key Types
//!
//! - [`DeConfig`]: Algorithm parameters (weights, variant, termination)
//! - [`DifferentialEvolution`]: Executes the generational loop
//!
//! # References
//!
//! - Storn & Price (1997), "Differential Evolution: A Simple and Efficient
//!   Heuristic for Global Optimization over Continuous Spaces"
//! - Price, Storn & Lampinen (2005), *Differential Evolution: A Practical
//!   Approach to Global Optimization*

mod config;
mod runner;

pub use config::{DeConfig, DeVariant};
pub use runner::DifferentialEvolution;
