//! Boolean-genome objectives: deceptive traps and royal roads.

fn ones(bits: &[bool]) -> usize {
    bits.iter().filter(|&&bit| bit).count()
}

/// The fully deceptive trap of order `k = bits.len()`. All ones scores
/// `k`, but every other bitstring rewards *fewer* ones, so hill climbers
/// are led to the all-zeros trap at `k - 1`.
pub fn trap(bits: &[bool]) -> Vec<f64> {
    let k = bits.len();
    let u = ones(bits);
    let value = if u == k { k } else { k - 1 - u };
    vec![value as f64]
}

/// Mirror image of [`trap`]: all zeros scores `k`, everything else
/// rewards more ones up to `k - 1`.
pub fn inv_trap(bits: &[bool]) -> Vec<f64> {
    let k = bits.len();
    let u = ones(bits);
    let value = if u == 0 { k } else { u - 1 };
    vec![value as f64]
}

/// Chuang's F1: the last bit selects whether the remaining genome is
/// scored as order-4 [`trap`] or [`inv_trap`] blocks, usually on 40 + 1
/// bits.
///
/// # Panics
///
/// Panics on an empty genome.
pub fn chuang_f1(bits: &[bool]) -> Vec<f64> {
    assert!(!bits.is_empty(), "chuang f1 needs a selector bit");
    let selector = bits[bits.len() - 1];
    let score = bits[..bits.len() - 1]
        .chunks(4)
        .map(|block| {
            if selector {
                trap(block)[0]
            } else {
                inv_trap(block)[0]
            }
        })
        .sum();
    vec![score]
}

/// Mitchell's royal road R1: each complete all-ones block of `order` bits
/// is worth `order` points; partial blocks and the ragged tail score
/// nothing.
///
/// # Panics
///
/// Panics when `order` is zero.
pub fn royal_road1(bits: &[bool], order: usize) -> Vec<f64> {
    assert!(order >= 1, "royal road needs a positive block order");
    let complete = bits
        .chunks_exact(order)
        .filter(|block| block.iter().all(|&bit| bit))
        .count();
    vec![(complete * order) as f64]
}

/// Royal road R2: sums [`royal_road1`] over block sizes `order`,
/// `2 * order`, `4 * order`, ... while they stay below the genome length,
/// rewarding the assembly of ever larger schemata.
///
/// # Panics
///
/// Panics when `order` is zero.
pub fn royal_road2(bits: &[bool], order: usize) -> Vec<f64> {
    assert!(order >= 1, "royal road needs a positive block order");
    let mut total = 0.0;
    let mut block = order;
    while block < bits.len() {
        total += royal_road1(bits, block)[0];
        block *= 2;
    }
    vec![total]
}

// ============================================================================
// Tests
// ============================================================================
