//! Weighted multi-objective fitness.
//!
//! [`Fitness`] pairs raw objective values with a fixed weight vector whose
//! sign encodes the optimization direction: positive weights maximize,
//! negative weights minimize. Every comparison operates on the *weighted*
//! values `v[i] * w[i]`, so a greater weighted value is always better
//! regardless of direction.

/// A weighted multi-objective fitness.
///
/// Constructed with weights only (invalid until evaluated) or with weights
/// and values. [`set_values`](Self::set_values) may be called repeatedly as
/// the owning individual is re-evaluated; the weighted values are recomputed
/// each time.
///
/// # Ordering
///
/// [`less`](Self::less) and [`less_equal`](Self::less_equal) compare
/// *elementwise* over all weighted values. [`greater`](Self::greater) is
/// defined as the negation of `less_equal` (and `greater_equal` as the
/// negation of `less`), **not** as a flipped elementwise comparison. For an
/// incomparable pair of multi-objective fitnesses both `a.greater(b)` and
/// `b.greater(a)` hold. Single-objective selection and the Hall of Fame rely
/// on exactly this ordering; do not "fix" the asymmetry.
///
/// # Examples
///
/// ```
/// use evokit::Fitness;
///
/// // Single objective, minimized.
/// let f = Fitness::with_values(vec![-1.0], &[3.0]);
/// let g = Fitness::with_values(vec![-1.0], &[1.0]);
/// assert!(g.greater(&f));
/// assert!(g.dominates(&f, None));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fitness {
    weights: Vec<f64>,
    values: Vec<f64>,
    wvalues: Vec<f64>,
    valid: bool,
}

impl Fitness {
    /// Creates an invalid fitness with the given weights.
    ///
    /// # Panics
    ///
    /// Panics if `weights` is empty.
    pub fn new(weights: Vec<f64>) -> Self {
        assert!(!weights.is_empty(), "fitness requires at least one weight");
        Self {
            weights,
            values: Vec::new(),
            wvalues: Vec::new(),
            valid: false,
        }
    }

    /// Creates a valid fitness with the given weights and raw values.
    ///
    /// # Panics
    ///
    /// Panics if `weights` is empty or `values.len() != weights.len()`.
    pub fn with_values(weights: Vec<f64>, values: &[f64]) -> Self {
        let mut fitness = Self::new(weights);
        fitness.set_values(values);
        fitness
    }

    /// Overwrites the raw values, recomputes the weighted values, and marks
    /// the fitness valid.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the number of weights.
    pub fn set_values(&mut self, values: &[f64]) {
        assert_eq!(
            values.len(),
            self.weights.len(),
            "fitness arity mismatch: {} values for {} weights",
            values.len(),
            self.weights.len()
        );
        self.values.clear();
        self.values.extend_from_slice(values);
        self.wvalues.clear();
        self.wvalues
            .extend(values.iter().zip(&self.weights).map(|(v, w)| v * w));
        self.valid = true;
    }

    /// Clears the values and marks the fitness invalid. The weights are kept.
    pub fn invalidate(&mut self) {
        self.values.clear();
        self.wvalues.clear();
        self.valid = false;
    }

    /// Raw objective values. Empty while invalid.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Weighted objective values (`values[i] * weights[i]`). Empty while invalid.
    pub fn weighted_values(&self) -> &[f64] {
        &self.wvalues
    }

    /// The weight vector.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// True once values have been assigned and not since invalidated.
    pub fn valid(&self) -> bool {
        self.valid && !self.wvalues.is_empty()
    }

    /// Number of objectives.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// True if there are no objectives. Unreachable for constructed values
    /// ([`new`](Self::new) rejects empty weights) but kept for `Default`.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Pareto dominance over the given objective indices (all when `None`).
    ///
    /// `self` dominates `other` when no selected weighted value is worse and
    /// at least one is strictly better. Equal fitnesses never dominate.
    ///
    /// # Panics
    ///
    /// Panics if the arities differ or an objective index is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use evokit::Fitness;
    ///
    /// let a = Fitness::with_values(vec![-1.0, -1.0], &[1.0, 5.0]);
    /// let c = Fitness::with_values(vec![-1.0, -1.0], &[4.0, 4.0]);
    /// assert!(!a.dominates(&c, None));      // incomparable over both
    /// assert!(a.dominates(&c, Some(&[0]))); // dominant on the first alone
    /// ```
    pub fn dominates(&self, other: &Fitness, objectives: Option<&[usize]>) -> bool {
        self.assert_same_arity(other);
        let mut not_equal = false;
        match objectives {
            Some(objectives) => {
                for &i in objectives {
                    if self.wvalues[i] > other.wvalues[i] {
                        not_equal = true;
                    } else if self.wvalues[i] < other.wvalues[i] {
                        return false;
                    }
                }
            }
            None => {
                for (own, theirs) in self.wvalues.iter().zip(&other.wvalues) {
                    if own > theirs {
                        not_equal = true;
                    } else if own < theirs {
                        return false;
                    }
                }
            }
        }
        not_equal
    }

    /// Elementwise strict comparison: every weighted value of `self` is less
    /// than the corresponding one of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the arities differ.
    pub fn less(&self, other: &Fitness) -> bool {
        self.assert_same_arity(other);
        self.wvalues
            .iter()
            .zip(&other.wvalues)
            .all(|(own, theirs)| own < theirs)
    }

    /// Elementwise comparison: every weighted value of `self` is less than or
    /// equal to the corresponding one of `other`.
    ///
    /// # Panics
    ///
    /// Panics if the arities differ.
    pub fn less_equal(&self, other: &Fitness) -> bool {
        self.assert_same_arity(other);
        self.wvalues
            .iter()
            .zip(&other.wvalues)
            .all(|(own, theirs)| own <= theirs)
    }

    /// Negation of [`less_equal`](Self::less_equal). See the type-level note
    /// on ordering.
    pub fn greater(&self, other: &Fitness) -> bool {
        !self.less_equal(other)
    }

    /// Negation of [`less`](Self::less). See the type-level note on ordering.
    pub fn greater_equal(&self, other: &Fitness) -> bool {
        !self.less(other)
    }

    /// Exact elementwise equality of the weighted values. No tolerance.
    ///
    /// # Panics
    ///
    /// Panics if the arities differ.
    pub fn equal(&self, other: &Fitness) -> bool {
        self.assert_same_arity(other);
        self.wvalues == other.wvalues
    }

    /// Negation of [`equal`](Self::equal).
    pub fn not_equal(&self, other: &Fitness) -> bool {
        !self.equal(other)
    }

    fn assert_same_arity(&self, other: &Fitness) {
        assert_eq!(
            self.wvalues.len(),
            other.wvalues.len(),
            "cannot compare fitnesses of arity {} and {}",
            self.wvalues.len(),
            other.wvalues.len()
        );
    }
}
