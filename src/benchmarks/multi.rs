//! Multi-objective test suites.
//!
//! The ZDT family shares a common shape: the first gene spans the Pareto
//! front while the remaining "tail" genes feed a distance term `g` that is
//! 1 on the front itself. DTLZ generalizes the idea to any objective
//! count. The rest are classic two-objective problems. All objectives are
//! minimized.

use std::f64::consts::PI;

/// Kursawe's non-convex, disconnected two-objective problem, usually run
/// on three genes in `[-5, 5]`.
pub fn kursawe(genes: &[f64]) -> Vec<f64> {
    let f1 = genes
        .windows(2)
        .map(|pair| -10.0 * (-0.2 * (pair[0] * pair[0] + pair[1] * pair[1]).sqrt()).exp())
        .sum();
    let f2 = genes
        .iter()
        .map(|&x| x.abs().powf(0.8) + 5.0 * (x * x * x).sin())
        .sum();
    vec![f1, f2]
}

/// Schaffer's single-gene problem `[x^2, (x - 2)^2]`; the Pareto set is
/// the segment `x in [0, 2]`.
pub fn schaffer_mo(genes: &[f64]) -> Vec<f64> {
    let x = genes[0];
    vec![x * x, (x - 2.0).powi(2)]
}

// Distance term shared by ZDT1-ZDT3.
fn zdt_linear_g(genes: &[f64]) -> f64 {
    let tail: f64 = genes[1..].iter().sum();
    1.0 + 9.0 * tail / (genes.len() as f64 - 1.0)
}

/// ZDT1, the convex-front baseline of the suite. On a zero tail the front
/// is `f2 = 1 - sqrt(f1)`.
pub fn zdt1(genes: &[f64]) -> Vec<f64> {
    let g = zdt_linear_g(genes);
    let f1 = genes[0];
    vec![f1, g * (1.0 - (f1 / g).sqrt())]
}

/// ZDT2, the concave counterpart of [`zdt1`]: `f2 = 1 - f1^2` on the
/// front.
pub fn zdt2(genes: &[f64]) -> Vec<f64> {
    let g = zdt_linear_g(genes);
    let f1 = genes[0];
    vec![f1, g * (1.0 - (f1 / g).powi(2))]
}

/// ZDT3, whose sine term cuts the front into disconnected pieces.
pub fn zdt3(genes: &[f64]) -> Vec<f64> {
    let g = zdt_linear_g(genes);
    let f1 = genes[0];
    let ratio = f1 / g;
    vec![f1, g * (1.0 - ratio.sqrt() - ratio * (10.0 * PI * f1).sin())]
}

/// ZDT4, which layers 21^9 local fronts between a solver and the global
/// one by running Rastrigin in the tail genes.
pub fn zdt4(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let g = 1.0
        + 10.0 * (n - 1.0)
        + genes[1..]
            .iter()
            .map(|&x| x * x - 10.0 * (4.0 * PI * x).cos())
            .sum::<f64>();
    let f1 = genes[0];
    vec![f1, g * (1.0 - (f1 / g).sqrt())]
}

/// ZDT6, with a non-uniform density of solutions along a concave front.
pub fn zdt6(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let f1 = 1.0 - (-4.0 * genes[0]).exp() * (6.0 * PI * genes[0]).sin().powi(6);
    let tail: f64 = genes[1..].iter().sum();
    let g = 1.0 + 9.0 * (tail / (n - 1.0)).powf(0.25);
    vec![f1, g * (1.0 - (f1 / g).powi(2))]
}

/// DTLZ1 with `objectives` objectives: a linear Pareto front on the plane
/// `sum(f) = 0.5`, reached when every tail gene equals one half.
///
/// The first `objectives - 1` genes position a solution on the front; the
/// rest feed the multimodal distance term.
///
/// # Panics
///
/// Panics when the genome holds fewer genes than objectives, or when
/// `objectives` is zero.
pub fn dtlz1(genes: &[f64], objectives: usize) -> Vec<f64> {
    assert!(
        objectives >= 1 && genes.len() >= objectives,
        "dtlz1 needs at least as many genes as objectives"
    );
    let (position, tail) = genes.split_at(objectives - 1);
    let g = 100.0
        * (tail.len() as f64
            + tail
                .iter()
                .map(|&x| (x - 0.5).powi(2) - (20.0 * PI * (x - 0.5)).cos())
                .sum::<f64>());
    let mut front = Vec::with_capacity(objectives);
    front.push(0.5 * product(position) * (1.0 + g));
    for m in (0..objectives - 1).rev() {
        front.push(0.5 * product(&position[..m]) * (1.0 - position[m]) * (1.0 + g));
    }
    front
}

/// DTLZ2 with `objectives` objectives: a spherical Pareto front on the
/// unit hypersphere `sum(f^2) = 1`, reached when every tail gene equals
/// one half. Gene layout matches [`dtlz1`].
///
/// # Panics
///
/// Panics when the genome holds fewer genes than objectives, or when
/// `objectives` is zero.
pub fn dtlz2(genes: &[f64], objectives: usize) -> Vec<f64> {
    assert!(
        objectives >= 1 && genes.len() >= objectives,
        "dtlz2 needs at least as many genes as objectives"
    );
    let (position, tail) = genes.split_at(objectives - 1);
    let g: f64 = tail.iter().map(|&x| (x - 0.5).powi(2)).sum();
    let mut front = Vec::with_capacity(objectives);
    front.push((1.0 + g) * position.iter().map(|&x| (0.5 * x * PI).cos()).product::<f64>());
    for m in (0..objectives - 1).rev() {
        let partial: f64 = position[..m].iter().map(|&x| (0.5 * x * PI).cos()).product();
        front.push((1.0 + g) * partial * (0.5 * position[m] * PI).sin());
    }
    front
}

fn product(genes: &[f64]) -> f64 {
    genes.iter().product()
}

/// Fonseca and Fleming's problem over the first three genes, with a
/// concave front reached on the diagonal segment between the two optima
/// `(±1/sqrt(3), ...)`.
pub fn fonseca(genes: &[f64]) -> Vec<f64> {
    let c = 1.0 / 3f64.sqrt();
    let near: f64 = genes[..3].iter().map(|&x| (x - c).powi(2)).sum();
    let far: f64 = genes[..3].iter().map(|&x| (x + c).powi(2)).sum();
    vec![1.0 - (-near).exp(), 1.0 - (-far).exp()]
}

/// Poloni's two-gene maximization problem restated for minimization, as
/// is conventional.
pub fn poloni(genes: &[f64]) -> Vec<f64> {
    let (x, y) = (genes[0], genes[1]);
    let a1 = 0.5 * 1f64.sin() - 2.0 * 1f64.cos() + 2f64.sin() - 1.5 * 2f64.cos();
    let a2 = 1.5 * 1f64.sin() - 1f64.cos() + 2.0 * 2f64.sin() - 0.5 * 2f64.cos();
    let b1 = 0.5 * x.sin() - 2.0 * x.cos() + y.sin() - 1.5 * y.cos();
    let b2 = 1.5 * x.sin() - x.cos() + 2.0 * y.sin() - 0.5 * y.cos();
    vec![
        1.0 + (a1 - b1).powi(2) + (a2 - b2).powi(2),
        (x + 3.0).powi(2) + (y + 1.0).powi(2),
    ]
}

/// The dent problem with the standard bump height of 0.85.
pub fn dent(genes: &[f64]) -> Vec<f64> {
    dent_with_lambda(genes, 0.85)
}

/// Two-gene problem whose convex front carries a dent of depth `lambda`
/// in the middle, the usual stress test for decomposition weights.
pub fn dent_with_lambda(genes: &[f64], lambda: f64) -> Vec<f64> {
    let (x, y) = (genes[0], genes[1]);
    let diff = x - y;
    let shared = (1.0 + (x + y).powi(2)).sqrt() + (1.0 + diff * diff).sqrt();
    let bump = lambda * (-diff * diff).exp();
    vec![0.5 * (shared + diff) + bump, 0.5 * (shared - diff) + bump]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(value: f64, target: f64, eps: f64) {
        assert!(
            (value - target).abs() < eps,
            "expected {target}, got {value}"
        );
    }

    // ---- zdt ----

    #[test]
    fn test_zdt1_front_on_zero_tail() {
        for x in [0.0, 0.25, 0.49, 1.0] {
            let f = zdt1(&[x, 0.0, 0.0, 0.0]);
            assert_close(f[0], x, 1e-12);
            assert_close(f[1], 1.0 - x.sqrt(), 1e-12);
        }
    }

    #[test]
    fn test_zdt1_tail_raises_distance() {
        // A full-ones tail pushes g to 10.
        let f = zdt1(&[0.0, 1.0, 1.0]);
        assert_close(f[0], 0.0, 1e-12);
        assert_close(f[1], 10.0, 1e-12);
    }

    #[test]
    fn test_zdt2_front_on_zero_tail() {
        for x in [0.0, 0.5, 1.0] {
            let f = zdt2(&[x, 0.0, 0.0]);
            assert_close(f[1], 1.0 - x * x, 1e-12);
        }
    }

    #[test]
    fn test_zdt3_extremes() {
        let f = zdt3(&[0.0, 0.0, 0.0]);
        assert_close(f[0], 0.0, 1e-12);
        assert_close(f[1], 1.0, 1e-12);
    }

    #[test]
    fn test_zdt4_origin_is_on_the_front() {
        let f = zdt4(&[0.0; 10]);
        assert_close(f[0], 0.0, 1e-12);
        assert_close(f[1], 1.0, 1e-12);
    }

    #[test]
    fn test_zdt6_known_point() {
        let f = zdt6(&[0.0, 0.0, 0.0]);
        assert_close(f[0], 1.0, 1e-12);
        assert_close(f[1], 0.0, 1e-12);
    }

    // ---- dtlz ----

    #[test]
    fn test_dtlz1_ideal_point() {
        let front = dtlz1(&[0.5; 6], 3);
        assert_eq!(front, vec![0.125, 0.125, 0.25]);
    }

    #[test]
    fn test_dtlz1_front_sums_to_half() {
        // Position genes only steer along the plane sum(f) = 0.5.
        let front = dtlz1(&[0.2, 0.8, 0.5, 0.5, 0.5], 3);
        assert_close(front.iter().sum::<f64>(), 0.5, 1e-12);
    }

    #[test]
    fn test_dtlz2_front_on_unit_sphere() {
        let front = dtlz2(&[0.3, 0.7, 0.5, 0.5, 0.5], 3);
        let radius: f64 = front.iter().map(|f| f * f).sum();
        assert_close(radius, 1.0, 1e-12);
    }

    #[test]
    fn test_dtlz2_off_front_scales_radius() {
        let front = dtlz2(&[0.3, 0.7, 1.0, 1.0], 3);
        let radius: f64 = front.iter().map(|f| f * f).sum::<f64>();
        assert_close(radius.sqrt(), 1.5, 1e-12);
    }

    #[test]
    fn test_dtlz_objective_counts() {
        assert_eq!(dtlz1(&[0.5; 7], 2).len(), 2);
        assert_eq!(dtlz1(&[0.5; 7], 5).len(), 5);
        assert_eq!(dtlz2(&[0.5; 7], 4).len(), 4);
    }

    #[test]
    #[should_panic(expected = "at least as many genes")]
    fn test_dtlz_rejects_short_genome() {
        dtlz1(&[0.5], 3);
    }

    // ---- two-objective classics ----

    #[test]
    fn test_kursawe_origin() {
        let f = kursawe(&[0.0, 0.0, 0.0]);
        assert_close(f[0], -20.0, 1e-12);
        assert_close(f[1], 0.0, 1e-12);
    }

    #[test]
    fn test_schaffer_mo_endpoints() {
        assert_eq!(schaffer_mo(&[0.0]), vec![0.0, 4.0]);
        assert_eq!(schaffer_mo(&[2.0]), vec![4.0, 0.0]);
        assert_eq!(schaffer_mo(&[1.0]), vec![1.0, 1.0]);
    }

    #[test]
    fn test_fonseca_first_optimum() {
        let c = 1.0 / 3f64.sqrt();
        let f = fonseca(&[c, c, c]);
        assert_close(f[0], 0.0, 1e-12);
        assert_close(f[1], 1.0 - (-4.0f64).exp(), 1e-12);
    }

    #[test]
    fn test_poloni_reference_point() {
        // At (1, 2) both squared terms vanish exactly.
        assert_eq!(poloni(&[1.0, 2.0]), vec![1.0, 25.0]);
    }

    #[test]
    fn test_dent_symmetric_origin() {
        let f = dent(&[0.0, 0.0]);
        assert_close(f[0], 1.85, 1e-12);
        assert_eq!(f[0], f[1]);
    }

    #[test]
    fn test_dent_lambda_scales_bump() {
        assert_eq!(dent_with_lambda(&[0.0, 0.0], 0.0), vec![1.0, 1.0]);
        assert_eq!(dent(&[0.0, 0.0]), dent_with_lambda(&[0.0, 0.0], 0.85));
    }
}
