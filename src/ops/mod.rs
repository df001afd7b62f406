//! Variation and selection operators in the composable toolbox style:
//! free functions over gene slices plus an evaluator decorator for
//! constraints. Algorithms and user code mix these freely.

mod constraint;
mod crossover;
mod mutation;
mod selection;

pub use constraint::ClosestValidPenalty;
pub use crossover::{
    cx_blend, cx_es_blend, cx_es_two_point, cx_messy_one_point, cx_one_point, cx_ordered,
    cx_partially_matched, cx_simulated_binary, cx_simulated_binary_bounded, cx_two_point,
    cx_uniform, cx_uniform_partially_matched,
};
pub use mutation::{
    mut_es_log_normal, mut_flip_bit, mut_gaussian, mut_polynomial_bounded, mut_shuffle_indexes,
    mut_uniform_int,
};
pub use selection::{
    sel_best, sel_random, sel_roulette, sel_stochastic_universal_sampling, sel_tournament,
    sel_worst,
};
