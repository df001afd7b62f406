//! Multi-objective ranking.
//!
//! The NSGA-II toolchain: [`sort_nondominated`] partitions a population into
//! Pareto fronts over its unique fitnesses, [`assign_crowding_distance`]
//! scores diversity within a front, and [`select_nsga2`] combines the two
//! into environmental selection. [`BucketList`] is the allocation-free
//! adjacency structure backing the sorter.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II"

mod bucket_list;
mod nsga2;
mod sorting;

pub use bucket_list::{BucketIter, BucketList};
pub use nsga2::{assign_crowding_distance, select_nsga2};
pub use sorting::sort_nondominated;
