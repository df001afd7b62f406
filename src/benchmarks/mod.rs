//! Standard objective functions for exercising algorithms and archives.
//!
//! Three suites of pure functions from gene slices to objective vectors:
//! continuous single-objective landscapes, the multi-objective ZDT/DTLZ
//! families plus the two-objective classics, and boolean trap and royal
//! road problems. Formulas follow the literature; pair them with the
//! matching weight signs (most are minimized, [`h1`] and [`shekel`] are
//! maximized).
//!
//! # Examples
//!
//! ```
//! use evokit::benchmarks;
//!
//! assert_eq!(benchmarks::sphere(&[0.0, 0.0]), vec![0.0]);
//! assert_eq!(benchmarks::schaffer_mo(&[1.0]), vec![1.0, 1.0]);
//! ```
//!
//! # References
//!
//! - Zitzler, Deb & Thiele (2000), "Comparison of Multiobjective
//!   Evolutionary Algorithms: Empirical Results"
//! - Deb, Thiele, Laumanns & Zitzler (2002), "Scalable Multi-Objective
//!   Optimization Test Problems"
//! - Mitchell, Forrest & Holland (1992), "The Royal Road for Genetic
//!   Algorithms: Fitness Landscapes and GA Performance"

mod binary;
mod multi;
mod single;

pub use binary::{chuang_f1, inv_trap, royal_road1, royal_road2, trap};
pub use multi::{
    dent, dent_with_lambda, dtlz1, dtlz2, fonseca, kursawe, poloni, schaffer_mo, zdt1, zdt2, zdt3,
    zdt4, zdt6,
};
pub use single::{
    ackley, bohachevsky, cigar, h1, himmelblau, plane, rastrigin, rastrigin_scaled, rastrigin_skew,
    rosenbrock, schaffer, schwefel, shekel, sphere,
};
