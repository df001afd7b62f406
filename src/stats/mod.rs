//! Run reporting: per-generation statistics and their history.

mod logbook;
mod statistics;

pub use logbook::{Logbook, Record};
pub use statistics::{
    stat_avg, stat_max, stat_min, stat_std, Aggregate, MultiStatistics, Statistics,
};
