//! Jensen-Shannon divergence between multipoint histograms
//!
//! Histograms hold raw counts; each is normalized into a probability
//! distribution before comparison. The divergence is symmetric, bounded by
//! `ln 2`, and zero exactly when the normalized distributions coincide.

use crate::io::error::{AnodiError, Result};
use crate::math::probability::{jensen_shannon, normalize};
use ndarray::{Array1, Array2};

fn distribution(histogram: &Array1<usize>, index: usize) -> Result<Vec<f64>> {
    normalize(&histogram.to_vec()).ok_or(AnodiError::DegenerateHistogram {
        index,
        length: histogram.len(),
    })
}

fn check_lengths(histograms: &[Array1<usize>]) -> Result<()> {
    let Some(expected) = histograms.first().map(Array1::len) else {
        return Ok(());
    };

    histograms
        .iter()
        .map(Array1::len)
        .find(|&found| found != expected)
        .map_or(Ok(()), |found| {
            Err(AnodiError::LengthMismatch { expected, found })
        })
}

/// Divergence between two count histograms
///
/// # Errors
///
/// Returns an error if:
/// - The histograms have different lengths (`LengthMismatch`)
/// - Either histogram sums to zero (`DegenerateHistogram`)
pub fn divergence(first: &Array1<usize>, second: &Array1<usize>) -> Result<f64> {
    if first.len() != second.len() {
        return Err(AnodiError::LengthMismatch {
            expected: first.len(),
            found: second.len(),
        });
    }

    let p = distribution(first, 0)?;
    let q = distribution(second, 1)?;
    Ok(jensen_shannon(&p, &q))
}

/// Symmetric zero-diagonal matrix of pairwise divergences
///
/// Each unordered pair is computed once and mirrored. Every histogram is
/// normalized a single time up front.
///
/// # Errors
///
/// Returns an error if:
/// - The histograms do not all share one length (`LengthMismatch`)
/// - Any histogram sums to zero (`DegenerateHistogram`)
pub fn dissimilarity_matrix(histograms: &[Array1<usize>]) -> Result<Array2<f64>> {
    check_lengths(histograms)?;

    let distributions = histograms
        .iter()
        .enumerate()
        .map(|(index, histogram)| distribution(histogram, index))
        .collect::<Result<Vec<_>>>()?;

    let n = distributions.len();
    let mut matrix = Array2::zeros((n, n));

    for (i, p) in distributions.iter().enumerate() {
        for (j, q) in distributions.iter().enumerate().skip(i + 1) {
            let value = jensen_shannon(p, q);
            if let Some(cell) = matrix.get_mut((i, j)) {
                *cell = value;
            }
            if let Some(cell) = matrix.get_mut((j, i)) {
                *cell = value;
            }
        }
    }

    Ok(matrix)
}

/// Mean divergence over all unordered pairs of histograms
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two histograms are given (`InsufficientSamples`)
/// - The histograms differ in length or any of them sums to zero
pub fn mean_pairwise_divergence(histograms: &[Array1<usize>]) -> Result<f64> {
    if histograms.len() < 2 {
        return Err(AnodiError::InsufficientSamples {
            required: 2,
            provided: histograms.len(),
        });
    }

    let matrix = dissimilarity_matrix(histograms)?;
    let n = histograms.len();
    let pair_count = n * (n - 1) / 2;

    // Symmetric with zero diagonal, so the full sum counts each pair twice
    Ok(matrix.sum() / 2.0 / pair_count as f64)
}
