//! Crossover operators.
//!
//! All operators recombine two parents in place. Generic operators work on
//! any gene type, the blend/simulated-binary family on real genes, the
//! matched/ordered family on permutations of `0..len`, and the ES variants
//! on [`EsVector`] gene/strategy pairs.

use std::mem;

use rand::seq::index;
use rand::Rng;

use crate::individual::EsVector;

/// Swaps the tails of two parents after a common cut point.
///
/// The cut point falls in `1..min_len`, so each child keeps at least one
/// gene from its own parent. Parents of different lengths exchange tail
/// lengths as well.
///
/// # Panics
///
/// Panics if either parent has fewer than two genes.
pub fn cx_one_point<T, R: Rng>(a: &mut Vec<T>, b: &mut Vec<T>, rng: &mut R) {
    let size = a.len().min(b.len());
    assert!(size >= 2, "one-point crossover needs at least two genes");
    let point = rng.random_range(1..size);
    let tail_a = a.split_off(point);
    let tail_b = b.split_off(point);
    a.extend(tail_b);
    b.extend(tail_a);
}

/// Swaps the genes between two cut points.
///
/// The points satisfy `0 < point1 < point2 <= min_len`, so the exchanged
/// segment is never empty and never the whole genome.
///
/// # Panics
///
/// Panics if either parent has fewer than two genes.
pub fn cx_two_point<T, R: Rng>(a: &mut [T], b: &mut [T], rng: &mut R) {
    let size = a.len().min(b.len());
    assert!(size >= 2, "two-point crossover needs at least two genes");
    let mut point1 = rng.random_range(1..=size);
    let mut point2 = rng.random_range(1..size);
    if point2 >= point1 {
        point2 += 1;
    } else {
        mem::swap(&mut point1, &mut point2);
    }
    for i in point1..point2 {
        mem::swap(&mut a[i], &mut b[i]);
    }
}

/// Swaps each gene independently with probability `indpb`.
pub fn cx_uniform<T, R: Rng>(a: &mut [T], b: &mut [T], indpb: f64, rng: &mut R) {
    let size = a.len().min(b.len());
    for i in 0..size {
        if rng.random::<f64>() < indpb {
            mem::swap(&mut a[i], &mut b[i]);
        }
    }
}

/// Crosses two parents at independent cut points, exchanging the tails.
///
/// Each parent draws its own point in `0..=len`, so children may shrink
/// to nothing or absorb both genomes. Useful for variable-length
/// representations.
pub fn cx_messy_one_point<T, R: Rng>(a: &mut Vec<T>, b: &mut Vec<T>, rng: &mut R) {
    let point_a = rng.random_range(0..=a.len());
    let point_b = rng.random_range(0..=b.len());
    let tail_a = a.split_off(point_a);
    let tail_b = b.split_off(point_b);
    a.extend(tail_b);
    b.extend(tail_a);
}

/// Blends each pair of genes by a random amount around the segment between
/// them.
///
/// With `gamma` drawn per gene from `[-alpha, 1 + alpha)`, the children are
/// the two affine combinations `(1 - gamma) * x1 + gamma * x2` and its
/// mirror. `alpha = 0` keeps children inside the parents' interval;
/// `alpha = 0.5` explores an equally wide margin on both sides.
pub fn cx_blend<R: Rng>(a: &mut [f64], b: &mut [f64], alpha: f64, rng: &mut R) {
    let size = a.len().min(b.len());
    for i in 0..size {
        let (x1, x2) = (a[i], b[i]);
        let gamma = (1.0 + 2.0 * alpha) * rng.random::<f64>() - alpha;
        a[i] = (1.0 - gamma) * x1 + gamma * x2;
        b[i] = gamma * x1 + (1.0 - gamma) * x2;
    }
}

/// Simulated binary crossover on every gene pair.
///
/// The spread factor `beta` is drawn so that the children's spread around
/// the parents' midpoint follows the polynomial distribution of index
/// `eta`: large `eta` keeps children near the parents, small `eta` lets
/// them roam.
pub fn cx_simulated_binary<R: Rng>(a: &mut [f64], b: &mut [f64], eta: f64, rng: &mut R) {
    let size = a.len().min(b.len());
    for i in 0..size {
        let ran = rng.random::<f64>();
        let beta = if ran <= 0.5 {
            2.0 * ran
        } else {
            1.0 / (2.0 * (1.0 - ran))
        };
        let beta = beta.powf(1.0 / (eta + 1.0));
        let (x1, x2) = (a[i], b[i]);
        a[i] = 0.5 * ((1.0 + beta) * x1 + (1.0 - beta) * x2);
        b[i] = 0.5 * ((1.0 - beta) * x1 + (1.0 + beta) * x2);
    }
}

/// Bounded simulated binary crossover.
///
/// Each gene pair participates with probability one half. A participating
/// pair draws one spread sample and maps it through two bound-aware
/// polynomial distributions, one anchored at the lower bound for the first
/// child, one at the upper bound for the second, then clamps into
/// `[low, up]` and assigns the two children in random order. Gene pairs
/// closer together than 1e-14 are left untouched.
///
/// # Panics
///
/// Panics if the bound slices are shorter than the gene slices.
pub fn cx_simulated_binary_bounded<R: Rng>(
    a: &mut [f64],
    b: &mut [f64],
    eta: f64,
    low: &[f64],
    up: &[f64],
    rng: &mut R,
) {
    let size = a.len().min(b.len());
    assert!(
        low.len() >= size && up.len() >= size,
        "bound slices shorter than the genomes"
    );
    for i in 0..size {
        if rng.random::<f64>() > 0.5 {
            continue;
        }
        if (a[i] - b[i]).abs() <= 1e-14 {
            continue;
        }
        let x1 = a[i].min(b[i]);
        let x2 = a[i].max(b[i]);
        let (xl, xu) = (low[i], up[i]);
        let ran = rng.random::<f64>();

        let beta = 1.0 + (2.0 * (x1 - xl) / (x2 - x1));
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        let beta_q = if ran <= 1.0 / alpha {
            (ran * alpha).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 - ran * alpha)).powf(1.0 / (eta + 1.0))
        };
        let c1 = 0.5 * (x1 + x2 - beta_q * (x2 - x1));

        let beta = 1.0 + (2.0 * (xu - x2) / (x2 - x1));
        let alpha = 2.0 - beta.powf(-(eta + 1.0));
        let beta_q = if ran <= 1.0 / alpha {
            (ran * alpha).powf(1.0 / (eta + 1.0))
        } else {
            (1.0 / (2.0 - ran * alpha)).powf(1.0 / (eta + 1.0))
        };
        let c2 = 0.5 * (x1 + x2 + beta_q * (x2 - x1));

        let c1 = c1.clamp(xl, xu);
        let c2 = c2.clamp(xl, xu);

        if rng.random::<f64>() <= 0.5 {
            a[i] = c2;
            b[i] = c1;
        } else {
            a[i] = c1;
            b[i] = c2;
        }
    }
}

/// Partially matched crossover between two permutations of `0..len`.
///
/// Exchanges the segment between two random cut points and repairs the
/// rest of each child through the induced value matching, so both children
/// stay valid permutations.
///
/// # Panics
///
/// Panics if the parents are empty or of different lengths.
pub fn cx_partially_matched<R: Rng>(a: &mut [usize], b: &mut [usize], rng: &mut R) {
    assert_eq!(a.len(), b.len(), "parents must have the same length");
    assert!(!a.is_empty(), "cannot cross empty permutations");
    let size = a.len();
    let mut point1 = rng.random_range(0..=size);
    let mut point2 = rng.random_range(0..size);
    if point2 >= point1 {
        point2 += 1;
    } else {
        mem::swap(&mut point1, &mut point2);
    }
    partially_matched_in_window(a, b, point1, point2);
}

/// Uniform variant of [`cx_partially_matched`]: each position is matched
/// and swapped independently with probability `indpb` instead of inside a
/// contiguous window.
///
/// # Panics
///
/// Panics if the parents are empty or of different lengths.
pub fn cx_uniform_partially_matched<R: Rng>(
    a: &mut [usize],
    b: &mut [usize],
    indpb: f64,
    rng: &mut R,
) {
    assert_eq!(a.len(), b.len(), "parents must have the same length");
    assert!(!a.is_empty(), "cannot cross empty permutations");
    let size = a.len();
    let mut position_a = positions_of(a);
    let mut position_b = positions_of(b);
    for i in 0..size {
        if rng.random::<f64>() < indpb {
            matched_swap(a, b, &mut position_a, &mut position_b, i);
        }
    }
}

/// Ordered crossover between two permutations of `0..len`.
///
/// Each child keeps the other parent's segment between two random
/// positions and fills the remaining slots with its own genes in original
/// cyclic order, starting after the segment.
///
/// # Panics
///
/// Panics if the parents have fewer than two genes or different lengths.
pub fn cx_ordered<R: Rng>(a: &mut [usize], b: &mut [usize], rng: &mut R) {
    assert_eq!(a.len(), b.len(), "parents must have the same length");
    assert!(a.len() >= 2, "ordered crossover needs at least two genes");
    let size = a.len();
    let picked = index::sample(rng, size, 2);
    let mut start = picked.index(0);
    let mut end = picked.index(1);
    if start > end {
        mem::swap(&mut start, &mut end);
    }
    ordered_in_window(a, b, start, end);
}

/// Blend crossover on an evolution-strategy pair; genes and strategies
/// blend with independently drawn amounts.
pub fn cx_es_blend<R: Rng>(a: &mut EsVector, b: &mut EsVector, alpha: f64, rng: &mut R) {
    let size = a.len().min(b.len());
    for i in 0..size {
        let (x1, x2) = (a.genes()[i], b.genes()[i]);
        let gamma = (1.0 + 2.0 * alpha) * rng.random::<f64>() - alpha;
        a.genes_mut()[i] = (1.0 - gamma) * x1 + gamma * x2;
        b.genes_mut()[i] = gamma * x1 + (1.0 - gamma) * x2;

        let (s1, s2) = (a.strategies()[i], b.strategies()[i]);
        let gamma = (1.0 + 2.0 * alpha) * rng.random::<f64>() - alpha;
        a.strategies_mut()[i] = (1.0 - gamma) * s1 + gamma * s2;
        b.strategies_mut()[i] = gamma * s1 + (1.0 - gamma) * s2;
    }
}

/// Two-point crossover on an evolution-strategy pair; genes and strategies
/// exchange the same segment so each gene travels with its step size.
///
/// # Panics
///
/// Panics if either parent has fewer than two genes.
pub fn cx_es_two_point<R: Rng>(a: &mut EsVector, b: &mut EsVector, rng: &mut R) {
    let size = a.len().min(b.len());
    assert!(size >= 2, "two-point crossover needs at least two genes");
    let mut point1 = rng.random_range(1..=size);
    let mut point2 = rng.random_range(1..size);
    if point2 >= point1 {
        point2 += 1;
    } else {
        mem::swap(&mut point1, &mut point2);
    }
    for i in point1..point2 {
        mem::swap(&mut a.genes_mut()[i], &mut b.genes_mut()[i]);
        mem::swap(&mut a.strategies_mut()[i], &mut b.strategies_mut()[i]);
    }
}

/// Index of each value in a permutation of `0..len`.
fn positions_of(permutation: &[usize]) -> Vec<usize> {
    let mut positions = vec![0; permutation.len()];
    for (index, &value) in permutation.iter().enumerate() {
        positions[value] = index;
    }
    positions
}

/// Exchanges `a[i]` and `b[i]` across the parents, relocating the
/// displaced values through the position tables so both stay permutations.
fn matched_swap(
    a: &mut [usize],
    b: &mut [usize],
    position_a: &mut [usize],
    position_b: &mut [usize],
    i: usize,
) {
    let value_a = a[i];
    let value_b = b[i];
    a.swap(i, position_a[value_b]);
    b.swap(i, position_b[value_a]);
    position_a.swap(value_a, value_b);
    position_b.swap(value_a, value_b);
}

fn partially_matched_in_window(a: &mut [usize], b: &mut [usize], point1: usize, point2: usize) {
    let mut position_a = positions_of(a);
    let mut position_b = positions_of(b);
    for i in point1..point2 {
        matched_swap(a, b, &mut position_a, &mut position_b, i);
    }
}

fn ordered_in_window(a: &mut [usize], b: &mut [usize], start: usize, end: usize) {
    let size = a.len();
    // keep1[v] marks values b carries outside the window; child a keeps
    // exactly those and receives the rest through the window swap below.
    let mut keep1 = vec![false; size];
    let mut keep2 = vec![false; size];
    for i in 0..size {
        if i < start || i > end {
            keep1[b[i]] = true;
            keep2[a[i]] = true;
        }
    }

    let original_a = a.to_vec();
    let original_b = b.to_vec();
    let mut k1 = end + 1;
    let mut k2 = end + 1;
    for i in 0..size {
        let from_a = original_a[(i + end + 1) % size];
        if keep1[from_a] {
            a[k1 % size] = from_a;
            k1 += 1;
        }
        let from_b = original_b[(i + end + 1) % size];
        if keep2[from_b] {
            b[k2 % size] = from_b;
            k2 += 1;
        }
    }

    for i in start..=end {
        mem::swap(&mut a[i], &mut b[i]);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn is_valid_permutation(genes: &[usize]) -> bool {
        let mut seen = vec![false; genes.len()];
        for &value in genes {
            if value >= genes.len() || seen[value] {
                return false;
            }
            seen[value] = true;
        }
        true
    }

    // ---- generic operators ----

    #[test]
    fn test_one_point_preserves_multiset() {
        let mut a = vec![1, 2, 3, 4, 5];
        let mut b = vec![6, 7, 8, 9, 10];
        let mut rng = create_rng(1);
        cx_one_point(&mut a, &mut b, &mut rng);

        let mut combined: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
        combined.sort_unstable();
        assert_eq!(combined, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
        // Heads stay with their own parent.
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 6);
    }

    #[test]
    fn test_one_point_unequal_lengths_swap_tails() {
        let mut a = vec![1, 1, 1, 1, 1, 1];
        let mut b = vec![2, 2, 2];
        let mut rng = create_rng(3);
        cx_one_point(&mut a, &mut b, &mut rng);
        assert_eq!(a.len() + b.len(), 9);
        // The cut is below min_len, so both children are non-empty.
        assert!(!a.is_empty() && !b.is_empty());
    }

    #[test]
    fn test_two_point_swaps_contiguous_segment() {
        for seed in 0..20 {
            let mut a = vec![0; 8];
            let mut b = vec![1; 8];
            let mut rng = create_rng(seed);
            cx_two_point(&mut a, &mut b, &mut rng);

            let swapped: Vec<usize> = (0..8).filter(|&i| a[i] == 1).collect();
            assert!(!swapped.is_empty(), "segment is never empty");
            assert!(swapped.len() < 8, "segment is never the whole genome");
            let contiguous =
                swapped.windows(2).all(|pair| pair[1] == pair[0] + 1);
            assert!(contiguous, "swapped positions not contiguous: {swapped:?}");
            // The exchange is symmetric.
            for i in 0..8 {
                assert_ne!(a[i], b[i]);
            }
        }
    }

    #[test]
    fn test_uniform_extreme_probabilities() {
        let mut a = vec![0; 6];
        let mut b = vec![1; 6];
        let mut rng = create_rng(5);
        cx_uniform(&mut a, &mut b, 0.0, &mut rng);
        assert_eq!(a, vec![0; 6]);

        cx_uniform(&mut a, &mut b, 1.0, &mut rng);
        assert_eq!(a, vec![1; 6]);
        assert_eq!(b, vec![0; 6]);
    }

    #[test]
    fn test_messy_preserves_multiset_and_allows_resize() {
        let mut resized = false;
        for seed in 0..30 {
            let mut a = vec![1, 2, 3, 4];
            let mut b = vec![5, 6, 7];
            let mut rng = create_rng(seed);
            cx_messy_one_point(&mut a, &mut b, &mut rng);

            let mut combined: Vec<i32> = a.iter().chain(b.iter()).copied().collect();
            combined.sort_unstable();
            assert_eq!(combined, vec![1, 2, 3, 4, 5, 6, 7]);
            if a.len() != 4 {
                resized = true;
            }
        }
        assert!(resized, "independent cut points should change lengths");
    }

    // ---- real-valued operators ----

    #[test]
    fn test_blend_zero_alpha_stays_in_hull() {
        let mut rng = create_rng(2);
        for _ in 0..50 {
            let mut a = vec![1.0, -3.0];
            let mut b = vec![2.0, 5.0];
            cx_blend(&mut a, &mut b, 0.0, &mut rng);
            for child in [&a, &b] {
                assert!((1.0..=2.0).contains(&child[0]));
                assert!((-3.0..=5.0).contains(&child[1]));
            }
        }
    }

    #[test]
    fn test_blend_conserves_gene_sums() {
        // gamma * x1 + (1 - gamma) * x2 pairs sum to x1 + x2.
        let mut a = vec![1.5, -2.0, 0.25];
        let mut b = vec![4.5, 3.0, -1.25];
        let mut rng = create_rng(8);
        cx_blend(&mut a, &mut b, 0.5, &mut rng);
        for i in 0..3 {
            let sum = a[i] + b[i];
            let expected = [6.0, 1.0, -1.0][i];
            assert!((sum - expected).abs() < 1e-9, "sum drifted: {sum}");
        }
    }

    #[test]
    fn test_simulated_binary_symmetric_about_midpoint() {
        let mut a = vec![1.0, 10.0];
        let mut b = vec![3.0, 20.0];
        let mut rng = create_rng(4);
        cx_simulated_binary(&mut a, &mut b, 15.0, &mut rng);
        assert!((a[0] + b[0] - 4.0).abs() < 1e-9);
        assert!((a[1] + b[1] - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulated_binary_bounded_respects_bounds() {
        let low = vec![-1.0; 4];
        let up = vec![1.0; 4];
        let mut rng = create_rng(6);
        for _ in 0..100 {
            let mut a = vec![-0.9, -0.2, 0.4, 0.99];
            let mut b = vec![0.8, -0.1, -0.4, 0.98];
            cx_simulated_binary_bounded(&mut a, &mut b, 20.0, &low, &up, &mut rng);
            for child in [&a, &b] {
                for &gene in child.iter() {
                    assert!((-1.0..=1.0).contains(&gene), "gene escaped bounds: {gene}");
                }
            }
        }
    }

    #[test]
    fn test_simulated_binary_bounded_skips_coincident_genes() {
        let low = vec![0.0; 2];
        let up = vec![1.0; 2];
        let mut a = vec![0.5, 0.5];
        let mut b = vec![0.5, 0.5];
        let mut rng = create_rng(7);
        cx_simulated_binary_bounded(&mut a, &mut b, 20.0, &low, &up, &mut rng);
        assert_eq!(a, vec![0.5, 0.5]);
        assert_eq!(b, vec![0.5, 0.5]);
    }

    // ---- permutation operators ----

    #[test]
    fn test_partially_matched_window_semantics() {
        let mut a = vec![0, 1, 2, 3, 4];
        let mut b = vec![2, 4, 0, 1, 3];
        partially_matched_in_window(&mut a, &mut b, 1, 3);
        assert_eq!(a, vec![2, 4, 0, 3, 1]);
        assert_eq!(b, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn test_partially_matched_always_valid() {
        for seed in 0..40 {
            let mut rng = create_rng(seed);
            let mut a: Vec<usize> = (0..9).collect();
            let mut b: Vec<usize> = (0..9).rev().collect();
            cx_partially_matched(&mut a, &mut b, &mut rng);
            assert!(is_valid_permutation(&a), "invalid child: {a:?}");
            assert!(is_valid_permutation(&b), "invalid child: {b:?}");
        }
    }

    #[test]
    fn test_uniform_partially_matched_always_valid() {
        for seed in 0..40 {
            let mut rng = create_rng(seed);
            let mut a: Vec<usize> = (0..9).collect();
            let mut b = vec![3, 1, 4, 0, 8, 2, 6, 7, 5];
            cx_uniform_partially_matched(&mut a, &mut b, 0.5, &mut rng);
            assert!(is_valid_permutation(&a), "invalid child: {a:?}");
            assert!(is_valid_permutation(&b), "invalid child: {b:?}");
        }
    }

    #[test]
    fn test_uniform_partially_matched_zero_probability_is_identity() {
        let mut a: Vec<usize> = (0..6).collect();
        let mut b = vec![5, 3, 1, 0, 4, 2];
        let mut rng = create_rng(1);
        cx_uniform_partially_matched(&mut a, &mut b, 0.0, &mut rng);
        assert_eq!(a, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(b, vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_ordered_window_semantics() {
        let mut a = vec![0, 1, 2, 3, 4];
        let mut b = vec![1, 4, 2, 0, 3];
        ordered_in_window(&mut a, &mut b, 1, 2);
        assert_eq!(a, vec![1, 4, 2, 3, 0]);
        assert_eq!(b, vec![4, 1, 2, 0, 3]);
    }

    #[test]
    fn test_ordered_always_valid() {
        for seed in 0..40 {
            let mut rng = create_rng(seed);
            let mut a: Vec<usize> = (0..10).collect();
            let mut b = vec![9, 4, 7, 1, 0, 3, 8, 6, 2, 5];
            cx_ordered(&mut a, &mut b, &mut rng);
            assert!(is_valid_permutation(&a), "invalid child: {a:?}");
            assert!(is_valid_permutation(&b), "invalid child: {b:?}");
        }
    }

    #[test]
    fn test_ordered_keeps_other_parents_window() {
        let mut a = vec![0, 1, 2, 3, 4, 5];
        let mut b = vec![5, 4, 3, 2, 1, 0];
        ordered_in_window(&mut a, &mut b, 2, 3);
        assert_eq!(&a[2..=3], &[3, 2], "window taken from the other parent");
        assert_eq!(&b[2..=3], &[2, 3]);
        assert!(is_valid_permutation(&a));
        assert!(is_valid_permutation(&b));
    }

    // ---- evolution-strategy operators ----

    fn es_pair() -> (EsVector, EsVector) {
        let a = EsVector::new(vec![1.0, 2.0, 3.0], vec![0.1, 0.2, 0.3], vec![-1.0]);
        let b = EsVector::new(vec![4.0, 5.0, 6.0], vec![0.4, 0.5, 0.6], vec![-1.0]);
        (a, b)
    }

    #[test]
    fn test_es_blend_conserves_pair_sums() {
        let (mut a, mut b) = es_pair();
        let mut rng = create_rng(12);
        cx_es_blend(&mut a, &mut b, 0.5, &mut rng);
        for i in 0..3 {
            let gene_sum = a.genes()[i] + b.genes()[i];
            assert!((gene_sum - (i as f64 * 2.0 + 5.0)).abs() < 1e-9);
            let strategy_sum = a.strategies()[i] + b.strategies()[i];
            assert!((strategy_sum - (i as f64 * 0.2 + 0.5)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_es_two_point_moves_gene_with_strategy() {
        for seed in 0..20 {
            let (mut a, mut b) = es_pair();
            let mut rng = create_rng(seed);
            cx_es_two_point(&mut a, &mut b, &mut rng);
            // Wherever a gene came from, its strategy came along.
            for i in 0..3 {
                let from_b = a.genes()[i] >= 4.0;
                let strategy_from_b = a.strategies()[i] >= 0.4 - 1e-12;
                assert_eq!(from_b, strategy_from_b, "gene and strategy split at {i}");
            }
        }
    }
}
