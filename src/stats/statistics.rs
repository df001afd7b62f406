//! Per-generation population statistics.

use crate::individual::Individual;

/// Column-wise aggregate over one extracted sample per individual.
///
/// Samples are rectangular: one row per individual, one column per
/// objective (or per gene, depending on the extractor).
pub type Aggregate = fn(&[Vec<f64>]) -> Vec<f64>;

/// Column-wise minimum.
pub fn stat_min(samples: &[Vec<f64>]) -> Vec<f64> {
    fold_columns(samples, f64::INFINITY, |acc, x| acc.min(x))
}

/// Column-wise maximum.
pub fn stat_max(samples: &[Vec<f64>]) -> Vec<f64> {
    fold_columns(samples, f64::NEG_INFINITY, |acc, x| acc.max(x))
}

/// Column-wise arithmetic mean.
pub fn stat_avg(samples: &[Vec<f64>]) -> Vec<f64> {
    let count = samples.len() as f64;
    fold_columns(samples, 0.0, |acc, x| acc + x)
        .into_iter()
        .map(|sum| sum / count)
        .collect()
}

/// Column-wise population standard deviation.
pub fn stat_std(samples: &[Vec<f64>]) -> Vec<f64> {
    let count = samples.len() as f64;
    let means = stat_avg(samples);
    means
        .iter()
        .enumerate()
        .map(|(column, mean)| {
            let variance = samples
                .iter()
                .map(|row| (row[column] - mean).powi(2))
                .sum::<f64>()
                / count;
            variance.sqrt()
        })
        .collect()
}

fn fold_columns(samples: &[Vec<f64>], init: f64, fold: fn(f64, f64) -> f64) -> Vec<f64> {
    if samples.is_empty() {
        return Vec::new();
    }
    let mut columns = vec![init; samples[0].len()];
    for row in samples {
        for (column, value) in columns.iter_mut().zip(row) {
            *column = fold(*column, *value);
        }
    }
    columns
}

fn fitness_values<I: Individual>(individual: &I) -> Vec<f64> {
    individual.fitness().values().to_vec()
}

/// Named aggregates compiled over a population each generation.
///
/// Extracts one sample per individual (raw fitness values unless an
/// extractor is given) and applies each registered aggregate column-wise.
/// Aggregates run in registration order so logbook columns stay stable.
///
/// # Examples
///
/// ```
/// use evokit::stats::{stat_avg, stat_min, Statistics};
/// use evokit::{Individual, RealVector};
///
/// let mut stats: Statistics<RealVector> = Statistics::new("fitness");
/// stats.register("min", stat_min);
/// stats.register("avg", stat_avg);
///
/// let population: Vec<RealVector> = [2.0, 4.0]
///     .iter()
///     .map(|&value| {
///         let mut ind = RealVector::new(vec![value], vec![-1.0]);
///         ind.fitness_mut().set_values(&[value]);
///         ind
///     })
///     .collect();
///
/// let compiled = stats.compile(&population);
/// assert_eq!(compiled[0], ("min".to_string(), vec![2.0]));
/// assert_eq!(compiled[1], ("avg".to_string(), vec![3.0]));
/// ```
#[derive(Debug, Clone)]
pub struct Statistics<I: Individual> {
    name: String,
    extract: fn(&I) -> Vec<f64>,
    entries: Vec<(String, Aggregate)>,
}

impl<I: Individual> Statistics<I> {
    /// Creates an empty set of aggregates over raw fitness values.
    pub fn new(name: &str) -> Self {
        Self::with_extractor(name, fitness_values::<I>)
    }

    /// Creates an empty set of aggregates over a custom per-individual
    /// sample.
    pub fn with_extractor(name: &str, extract: fn(&I) -> Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            extract,
            entries: Vec::new(),
        }
    }

    /// The usual fitness summary: min, max, avg and std.
    pub fn common(name: &str) -> Self {
        let mut stats = Self::new(name);
        stats.register("min", stat_min);
        stats.register("max", stat_max);
        stats.register("avg", stat_avg);
        stats.register("std", stat_std);
        stats
    }

    /// Name used to prefix entries inside a [`MultiStatistics`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers an aggregate under `name`.
    pub fn register(&mut self, name: &str, aggregate: Aggregate) {
        self.entries.push((name.to_string(), aggregate));
    }

    /// Compiles every registered aggregate over `individuals`.
    ///
    /// An empty population compiles to no entries.
    pub fn compile(&self, individuals: &[I]) -> Vec<(String, Vec<f64>)> {
        if individuals.is_empty() {
            return Vec::new();
        }
        let samples: Vec<Vec<f64>> = individuals.iter().map(|i| (self.extract)(i)).collect();
        self.entries
            .iter()
            .map(|(name, aggregate)| (name.clone(), aggregate(&samples)))
            .collect()
    }
}

/// Several [`Statistics`] chapters compiled together.
///
/// Entry names are prefixed with the chapter name, `fitness.min` style, so
/// chapters with identical aggregate names stay distinguishable in one
/// logbook.
#[derive(Debug, Clone, Default)]
pub struct MultiStatistics<I: Individual> {
    chapters: Vec<Statistics<I>>,
}

impl<I: Individual> MultiStatistics<I> {
    pub fn new() -> Self {
        Self {
            chapters: Vec::new(),
        }
    }

    /// Adds a chapter; compilation order follows insertion order.
    pub fn with_chapter(mut self, chapter: Statistics<I>) -> Self {
        self.chapters.push(chapter);
        self
    }

    /// Compiles every chapter, prefixing entry names with the chapter name.
    pub fn compile(&self, individuals: &[I]) -> Vec<(String, Vec<f64>)> {
        let mut entries = Vec::new();
        for chapter in &self.chapters {
            for (name, values) in chapter.compile(individuals) {
                entries.push((format!("{}.{}", chapter.name(), name), values));
            }
        }
        entries
    }
}
