//! Archives that track the best individuals across generations.
//!
//! [`HallOfFame`] keeps a bounded, sorted list of the best individuals ever
//! seen. [`ParetoFront`] keeps every non-dominated individual instead, for
//! multi-objective runs where no single "best" exists.

mod hall_of_fame;
mod pareto_front;

pub use hall_of_fame::HallOfFame;
pub use pareto_front::ParetoFront;
