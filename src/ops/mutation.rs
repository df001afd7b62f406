//! Mutation operators.
//!
//! All operators mutate genes in place. `indpb` is always the independent
//! per-gene mutation probability, not the per-individual one.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::individual::EsVector;

/// Adds Gaussian noise with mean `mu` and deviation `sigma` to each gene
/// with probability `indpb`.
pub fn mut_gaussian<R: Rng>(genes: &mut [f64], mu: f64, sigma: f64, indpb: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < indpb {
            let noise: f64 = rng.sample(StandardNormal);
            *gene += noise * sigma + mu;
        }
    }
}

/// Polynomial mutation within `[low, up]`, as used alongside simulated
/// binary crossover.
///
/// Each gene mutates with probability `indpb`. The perturbation follows a
/// polynomial distribution of index `eta` shaped by the gene's distance to
/// its bounds; large `eta` keeps mutants close to the parent. Results are
/// clamped into the bounds.
///
/// # Panics
///
/// Panics if the bound slices are shorter than the genome or if any lower
/// bound is not strictly below its upper bound.
pub fn mut_polynomial_bounded<R: Rng>(
    genes: &mut [f64],
    eta: f64,
    low: &[f64],
    up: &[f64],
    indpb: f64,
    rng: &mut R,
) {
    assert!(
        low.len() >= genes.len() && up.len() >= genes.len(),
        "bound slices shorter than the genome"
    );
    assert!(
        low.iter().zip(up).take(genes.len()).all(|(l, u)| l < u),
        "polynomial mutation needs low < up on every gene"
    );
    let mut_pow = 1.0 / (eta + 1.0);
    for (i, gene) in genes.iter_mut().enumerate() {
        if rng.random::<f64>() > indpb {
            continue;
        }
        let (xl, xu) = (low[i], up[i]);
        let x = *gene;
        let delta1 = (x - xl) / (xu - xl);
        let delta2 = (xu - x) / (xu - xl);
        let ran = rng.random::<f64>();

        let delta_q = if ran < 0.5 {
            let xy = 1.0 - delta1;
            let val = 2.0 * ran + (1.0 - 2.0 * ran) * xy.powf(eta + 1.0);
            val.powf(mut_pow) - 1.0
        } else {
            let xy = 1.0 - delta2;
            let val = 2.0 * (1.0 - ran) + 2.0 * (ran - 0.5) * xy.powf(eta + 1.0);
            1.0 - val.powf(mut_pow)
        };

        *gene = (x + delta_q * (xu - xl)).clamp(xl, xu);
    }
}

/// Swaps each gene with another uniformly chosen position with probability
/// `indpb`.
///
/// The partner index is drawn among the other positions, so a triggered
/// swap always moves the gene. Keeps permutations valid.
///
/// # Panics
///
/// Panics if the genome has fewer than two genes.
pub fn mut_shuffle_indexes<T, R: Rng>(genes: &mut [T], indpb: f64, rng: &mut R) {
    let size = genes.len();
    assert!(size >= 2, "shuffle mutation needs at least two genes");
    for i in 0..size {
        if rng.random::<f64>() < indpb {
            let mut swap_index = rng.random_range(0..size - 1);
            if swap_index >= i {
                swap_index += 1;
            }
            genes.swap(i, swap_index);
        }
    }
}

/// Flips each bit with probability `indpb`.
pub fn mut_flip_bit<R: Rng>(genes: &mut [bool], indpb: f64, rng: &mut R) {
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < indpb {
            *gene = !*gene;
        }
    }
}

/// Replaces each gene with a uniform draw from `low..=up` with probability
/// `indpb`. Both bounds are attainable.
///
/// # Panics
///
/// Panics if `low > up`.
pub fn mut_uniform_int<R: Rng>(genes: &mut [i64], low: i64, up: i64, indpb: f64, rng: &mut R) {
    assert!(low <= up, "uniform int mutation needs low <= up");
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < indpb {
            *gene = rng.random_range(low..=up);
        }
    }
}

/// Log-normal self-adaptive mutation for evolution strategies.
///
/// Each selected gene first rescales its strategy by
/// `exp(t0 * n + t * n_i)`, where `n` is one normal draw shared by the
/// whole call and `n_i` is drawn per gene, with learning rates
/// `t = c / sqrt(2 * sqrt(n_genes))` and `t0 = c / sqrt(2 * n_genes)`.
/// The gene then moves by its updated strategy times a third normal draw.
pub fn mut_es_log_normal<R: Rng>(individual: &mut EsVector, c: f64, indpb: f64, rng: &mut R) {
    let size = individual.len() as f64;
    let t = c / (2.0 * size.sqrt()).sqrt();
    let t0 = c / (2.0 * size).sqrt();
    let shared: f64 = rng.sample(StandardNormal);
    let common = t0 * shared;

    for i in 0..individual.len() {
        if rng.random::<f64>() < indpb {
            let strategy_noise: f64 = rng.sample(StandardNormal);
            individual.strategies_mut()[i] *= (common + t * strategy_noise).exp();
            let gene_noise: f64 = rng.sample(StandardNormal);
            let step = individual.strategies()[i] * gene_noise;
            individual.genes_mut()[i] += step;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    // ---- gaussian ----

    #[test]
    fn test_gaussian_zero_probability_is_identity() {
        let mut genes = vec![1.0, 2.0, 3.0];
        let mut rng = create_rng(1);
        mut_gaussian(&mut genes, 0.0, 1.0, 0.0, &mut rng);
        assert_eq!(genes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_gaussian_mean_shift() {
        let mut genes = vec![0.0; 1000];
        let mut rng = create_rng(2);
        mut_gaussian(&mut genes, 5.0, 0.1, 1.0, &mut rng);
        let mean = genes.iter().sum::<f64>() / genes.len() as f64;
        assert!((mean - 5.0).abs() < 0.05, "mean drifted to {mean}");
    }

    #[test]
    fn test_gaussian_sigma_scales_spread() {
        let mut narrow = vec![0.0; 500];
        let mut wide = vec![0.0; 500];
        let mut rng = create_rng(3);
        mut_gaussian(&mut narrow, 0.0, 0.1, 1.0, &mut rng);
        mut_gaussian(&mut wide, 0.0, 10.0, 1.0, &mut rng);
        let spread = |genes: &[f64]| genes.iter().map(|g| g * g).sum::<f64>();
        assert!(spread(&wide) > spread(&narrow) * 100.0);
    }

    // ---- polynomial bounded ----

    #[test]
    fn test_polynomial_bounded_respects_bounds() {
        let low = vec![-1.0; 5];
        let up = vec![1.0; 5];
        let mut rng = create_rng(4);
        for _ in 0..200 {
            let mut genes = vec![-0.99, -0.5, 0.0, 0.5, 0.99];
            mut_polynomial_bounded(&mut genes, 20.0, &low, &up, 1.0, &mut rng);
            for &gene in &genes {
                assert!((-1.0..=1.0).contains(&gene), "gene escaped: {gene}");
            }
        }
    }

    #[test]
    fn test_polynomial_bounded_mutates_something() {
        let low = vec![0.0; 4];
        let up = vec![10.0; 4];
        let mut genes = vec![5.0; 4];
        let mut rng = create_rng(5);
        mut_polynomial_bounded(&mut genes, 20.0, &low, &up, 1.0, &mut rng);
        assert!(genes.iter().any(|&g| g != 5.0));
    }

    #[test]
    fn test_polynomial_bounded_large_eta_stays_close() {
        let low = vec![0.0];
        let up = vec![1.0];
        let mut rng = create_rng(6);
        for _ in 0..100 {
            let mut genes = vec![0.5];
            mut_polynomial_bounded(&mut genes, 1000.0, &low, &up, 1.0, &mut rng);
            assert!((genes[0] - 0.5).abs() < 0.2, "eta=1000 moved to {}", genes[0]);
        }
    }

    #[test]
    #[should_panic(expected = "low < up")]
    fn test_polynomial_bounded_rejects_degenerate_bounds() {
        let mut genes = vec![1.0];
        let mut rng = create_rng(7);
        mut_polynomial_bounded(&mut genes, 20.0, &[1.0], &[1.0], 1.0, &mut rng);
    }

    // ---- discrete ----

    #[test]
    fn test_shuffle_preserves_multiset() {
        for seed in 0..30 {
            let mut rng = create_rng(seed);
            let mut genes: Vec<usize> = (0..10).collect();
            mut_shuffle_indexes(&mut genes, 0.5, &mut rng);
            let mut sorted = genes.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, (0..10).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_shuffle_triggered_swap_moves_the_gene() {
        // With two genes, any triggered swap must exchange them.
        let mut rng = create_rng(8);
        let mut swaps = 0;
        for _ in 0..100 {
            let mut genes = vec![0, 1];
            mut_shuffle_indexes(&mut genes, 0.5, &mut rng);
            if genes == vec![1, 0] {
                swaps += 1;
            }
        }
        assert!(swaps > 20, "expected frequent swaps, got {swaps}");
    }

    #[test]
    fn test_flip_bit_extremes() {
        let mut genes = vec![true, false, true, false];
        let mut rng = create_rng(9);
        mut_flip_bit(&mut genes, 0.0, &mut rng);
        assert_eq!(genes, vec![true, false, true, false]);
        mut_flip_bit(&mut genes, 1.0, &mut rng);
        assert_eq!(genes, vec![false, true, false, true]);
    }

    #[test]
    fn test_uniform_int_bounds_inclusive() {
        let mut rng = create_rng(10);
        let mut seen_low = false;
        let mut seen_up = false;
        for _ in 0..200 {
            let mut genes = vec![5i64];
            mut_uniform_int(&mut genes, 0, 1, 1.0, &mut rng);
            assert!(genes[0] == 0 || genes[0] == 1);
            seen_low |= genes[0] == 0;
            seen_up |= genes[0] == 1;
        }
        assert!(seen_low && seen_up, "both bounds should be attainable");
    }

    #[test]
    fn test_uniform_int_range() {
        let mut genes = vec![0i64; 100];
        let mut rng = create_rng(11);
        mut_uniform_int(&mut genes, -3, 7, 1.0, &mut rng);
        assert!(genes.iter().all(|&g| (-3..=7).contains(&g)));
    }

    // ---- evolution strategies ----

    #[test]
    fn test_es_log_normal_keeps_strategies_positive() {
        let mut rng = create_rng(12);
        for _ in 0..50 {
            let mut individual =
                EsVector::new(vec![0.0; 6], vec![0.5; 6], vec![-1.0]);
            mut_es_log_normal(&mut individual, 1.0, 1.0, &mut rng);
            assert!(individual.strategies().iter().all(|&s| s > 0.0));
        }
    }

    #[test]
    fn test_es_log_normal_moves_genes_and_strategies() {
        let mut individual = EsVector::new(vec![1.0; 8], vec![0.5; 8], vec![-1.0]);
        let mut rng = create_rng(13);
        mut_es_log_normal(&mut individual, 1.0, 1.0, &mut rng);
        assert!(individual.genes().iter().any(|&g| g != 1.0));
        assert!(individual.strategies().iter().any(|&s| s != 0.5));
    }

    #[test]
    fn test_es_log_normal_zero_probability_is_identity() {
        let mut individual = EsVector::new(vec![1.0, 2.0], vec![0.1, 0.2], vec![-1.0]);
        let mut rng = create_rng(14);
        mut_es_log_normal(&mut individual, 1.0, 0.0, &mut rng);
        assert_eq!(individual.genes(), &[1.0, 2.0]);
        assert_eq!(individual.strategies(), &[0.1, 0.2]);
    }
}
