//! Discrete probability distributions and information-theoretic divergences

use std::f64::consts::LN_2;

/// Normalize raw counts into a probability distribution
///
/// Returns `None` when the counts sum to zero.
pub fn normalize(counts: &[usize]) -> Option<Vec<f64>> {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return None;
    }

    let total = total as f64;
    Some(counts.iter().map(|&c| c as f64 / total).collect())
}

/// Kullback-Leibler divergence `KL(p || q)` in nats
///
/// Bins where `p` is zero contribute nothing, whatever `q` holds there.
/// A bin where `p` is positive and `q` is zero yields infinity.
pub fn kl_divergence(p: &[f64], q: &[f64]) -> f64 {
    p.iter()
        .zip(q.iter())
        .map(|(&p_i, &q_i)| {
            if p_i <= 0.0 {
                0.0
            } else if q_i <= 0.0 {
                f64::INFINITY
            } else {
                p_i * (p_i / q_i).ln()
            }
        })
        .sum()
}

/// Jensen-Shannon divergence between two probability distributions
///
/// Averages the KL divergence of each distribution to their mixture. The
/// mixture is positive wherever either input is, so the result is always
/// finite and lies in `[0, ln 2]`.
pub fn jensen_shannon(p: &[f64], q: &[f64]) -> f64 {
    let mixture: Vec<f64> = p
        .iter()
        .zip(q.iter())
        .map(|(&p_i, &q_i)| 0.5 * (p_i + q_i))
        .collect();

    // Summing before scaling keeps the result exactly symmetric in p and q
    let divergence = 0.5 * (kl_divergence(p, &mixture) + kl_divergence(q, &mixture));

    // Rounding can push identical or disjoint inputs just past the bounds
    divergence.clamp(0.0, LN_2)
}
