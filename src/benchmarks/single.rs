//! Single-objective test functions.
//!
//! Each function maps a gene slice to a one-element objective vector so it
//! drops straight into an evaluator closure. All problems are minimized
//! except [`h1`] and [`shekel`], which are maximized.

use std::f64::consts::{E, PI};

/// First gene, untouched. The simplest possible landscape.
pub fn plane(genes: &[f64]) -> Vec<f64> {
    vec![genes[0]]
}

/// Sum of squares. Global minimum `f(0, ..., 0) = 0`.
pub fn sphere(genes: &[f64]) -> Vec<f64> {
    vec![genes.iter().map(|x| x * x).sum()]
}

/// Sphere with every axis after the first stretched by `10^6`, which
/// forces progress along a narrow valley. Global minimum at the origin.
pub fn cigar(genes: &[f64]) -> Vec<f64> {
    let tail: f64 = genes[1..].iter().map(|x| x * x).sum();
    vec![genes[0] * genes[0] + 1e6 * tail]
}

/// Rosenbrock's banana valley over consecutive gene pairs. Global minimum
/// `f(1, ..., 1) = 0`.
pub fn rosenbrock(genes: &[f64]) -> Vec<f64> {
    let value = genes
        .windows(2)
        .map(|pair| {
            let (x, y) = (pair[0], pair[1]);
            100.0 * (x * x - y).powi(2) + (1.0 - x).powi(2)
        })
        .sum();
    vec![value]
}

/// Two-dimensional maximization problem with a single sharp peak of height
/// 2 near `(8.6998, 6.7665)` surrounded by sine ripples.
pub fn h1(genes: &[f64]) -> Vec<f64> {
    let (x, y) = (genes[0], genes[1]);
    let ripples = (x - y / 8.0).sin().powi(2) + (y + x / 8.0).sin().powi(2);
    let distance = ((x - 8.6998).powi(2) + (y - 6.7665).powi(2)).sqrt() + 1.0;
    vec![ripples / distance]
}

/// Ackley's function: a nearly flat outer region riddled with local minima
/// and a deep hole at the origin, where `f = 0`.
pub fn ackley(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let square_sum: f64 = genes.iter().map(|x| x * x).sum();
    let cos_sum: f64 = genes.iter().map(|x| (2.0 * PI * x).cos()).sum();
    let value = 20.0 - 20.0 * (-0.2 * (square_sum / n).sqrt()).exp() + E - (cos_sum / n).exp();
    vec![value]
}

/// Bohachevsky's function over consecutive gene pairs. Global minimum at
/// the origin.
pub fn bohachevsky(genes: &[f64]) -> Vec<f64> {
    let value = genes
        .windows(2)
        .map(|pair| {
            let (x, y) = (pair[0], pair[1]);
            x * x + 2.0 * y * y - 0.3 * (3.0 * PI * x).cos() - 0.4 * (4.0 * PI * y).cos() + 0.7
        })
        .sum();
    vec![value]
}

/// Rastrigin's function: a parabola modulated by a cosine grid, giving a
/// regular lattice of local minima. Global minimum `f(0, ..., 0) = 0`.
pub fn rastrigin(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let value = genes
        .iter()
        .map(|&x| x * x - 10.0 * (2.0 * PI * x).cos())
        .sum::<f64>();
    vec![10.0 * n + value]
}

/// Rastrigin with axis `i` scaled by `10^(i / (n - 1))`, which breaks the
/// symmetry between dimensions. The optimum stays at the origin.
///
/// # Panics
///
/// Panics on genomes shorter than two genes, since the scaling exponent
/// divides by `n - 1`.
pub fn rastrigin_scaled(genes: &[f64]) -> Vec<f64> {
    assert!(genes.len() >= 2, "scaled rastrigin needs at least two genes");
    let n = genes.len() as f64;
    let value = genes
        .iter()
        .enumerate()
        .map(|(i, &x)| {
            let scaled = 10f64.powf(i as f64 / (n - 1.0)) * x;
            scaled * scaled - 10.0 * (2.0 * PI * scaled).cos()
        })
        .sum::<f64>();
    vec![10.0 * n + value]
}

/// Rastrigin with positive genes magnified tenfold before evaluation,
/// skewing the basin shapes on one side of every axis.
pub fn rastrigin_skew(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let value = genes
        .iter()
        .map(|&x| {
            let y = if x > 0.0 { 10.0 * x } else { x };
            y * y - 10.0 * (2.0 * PI * y).cos()
        })
        .sum::<f64>();
    vec![10.0 * n + value]
}

/// Schaffer's multimodal function over consecutive gene pairs. Global
/// minimum at the origin.
pub fn schaffer(genes: &[f64]) -> Vec<f64> {
    let value = genes
        .windows(2)
        .map(|pair| {
            let s = pair[0] * pair[0] + pair[1] * pair[1];
            s.powf(0.25) * ((50.0 * s.powf(0.1)).sin().powi(2) + 1.0)
        })
        .sum();
    vec![value]
}

/// Schwefel's deceptive function, whose global minimum sits near the edge
/// of the usual `[-500, 500]` box at `x_i = 420.96874636`, far from the
/// second-best region.
pub fn schwefel(genes: &[f64]) -> Vec<f64> {
    let n = genes.len() as f64;
    let value = genes.iter().map(|&x| x * x.abs().sqrt().sin()).sum::<f64>();
    vec![418.9828872724339 * n - value]
}

/// Himmelblau's two-dimensional function with four global minima of value
/// zero, one in each quadrant.
pub fn himmelblau(genes: &[f64]) -> Vec<f64> {
    let (x, y) = (genes[0], genes[1]);
    vec![(x * x + y - 11.0).powi(2) + (x + y * y - 7.0).powi(2)]
}

/// The Shekel foxholes, maximized. Row `i` of `a` places a hole and `c[i]`
/// controls its width; each hole contributes `1 / (c_i + ||x - a_i||^2)`.
/// Extra rows beyond `c.len()` are ignored.
pub fn shekel(genes: &[f64], a: &[Vec<f64>], c: &[f64]) -> Vec<f64> {
    let value = a
        .iter()
        .zip(c)
        .map(|(hole, &width)| {
            let squared_distance: f64 = genes
                .iter()
                .zip(hole)
                .map(|(x, center)| (x - center).powi(2))
                .sum();
            1.0 / (width + squared_distance)
        })
        .sum();
    vec![value]
}

// ============================================================================
// Tests
// ============================================================================
