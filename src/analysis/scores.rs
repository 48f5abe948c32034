//! Inconsistency and diversity scores and 2D embeddings of binary images
//!
//! The distance between two images is the divergence between their
//! multipoint histograms. A candidate set is summarized by:
//!
//! - Inconsistency: mean distance from each candidate to the reference
//! - Diversity: mean distance between the candidates themselves
//!
//! Embeddings place each image in the plane so that Euclidean distances
//! approximate the pairwise divergences.

use crate::analysis::divergence::{dissimilarity_matrix, divergence, mean_pairwise_divergence};
use crate::analysis::patterns::multipoint_histogram;
use crate::io::error::{AnodiError, Result};
use crate::math::scaling::{ScalingConfig, smacof};
use ndarray::{Array1, Array2};
use std::fmt;

/// Summary scores of a candidate set against a reference
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnodiScores {
    /// Mean divergence between the reference and each candidate
    pub inconsistency: f64,
    /// Mean divergence over all unordered pairs of candidates
    pub diversity: f64,
}

impl fmt::Display for AnodiScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inconsistency: {:.4} | diversity: {:.4}",
            self.inconsistency, self.diversity
        )
    }
}

/// Histograms of every image, in input order
///
/// # Errors
///
/// Returns `InvalidPatchSize` for the first image the patch size does not fit
pub fn histograms(images: &[Array2<u8>], patch_size: usize) -> Result<Vec<Array1<usize>>> {
    images
        .iter()
        .map(|image| multipoint_histogram(image, patch_size))
        .collect()
}

/// Scores from precomputed histograms
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two candidates are given (`InsufficientSamples`)
/// - Histogram lengths differ (`LengthMismatch`)
/// - Any histogram sums to zero (`DegenerateHistogram`)
pub fn scores_from_histograms(
    reference: &Array1<usize>,
    candidates: &[Array1<usize>],
) -> Result<AnodiScores> {
    if candidates.len() < 2 {
        return Err(AnodiError::InsufficientSamples {
            required: 2,
            provided: candidates.len(),
        });
    }

    let to_reference = candidates
        .iter()
        .map(|candidate| divergence(reference, candidate))
        .collect::<Result<Vec<f64>>>()?;
    let inconsistency = to_reference.iter().sum::<f64>() / to_reference.len() as f64;

    let diversity = mean_pairwise_divergence(candidates)?;

    Ok(AnodiScores {
        inconsistency,
        diversity,
    })
}

/// Inconsistency and diversity of binary candidates relative to a reference
///
/// # Errors
///
/// Returns an error if:
/// - Fewer than two candidates are given (`InsufficientSamples`)
/// - The patch size does not fit the reference or a candidate (`InvalidPatchSize`)
pub fn anodi(
    reference: &Array2<u8>,
    candidates: &[Array2<u8>],
    patch_size: usize,
) -> Result<AnodiScores> {
    if candidates.len() < 2 {
        return Err(AnodiError::InsufficientSamples {
            required: 2,
            provided: candidates.len(),
        });
    }

    let reference_histogram = multipoint_histogram(reference, patch_size)?;
    let candidate_histograms = histograms(candidates, patch_size)?;
    scores_from_histograms(&reference_histogram, &candidate_histograms)
}

/// Embed precomputed histograms with the given scaling configuration
///
/// # Errors
///
/// Returns an error if the histograms cannot form a dissimilarity matrix or
/// the scaling configuration is invalid
pub fn embed_histograms(
    histograms: &[Array1<usize>],
    config: &ScalingConfig,
) -> Result<Array2<f64>> {
    let matrix = dissimilarity_matrix(histograms)?;
    Ok(smacof(&matrix, config)?.coordinates)
}

/// Embed binary images with an explicit scaling configuration
///
/// # Errors
///
/// Returns an error if the patch size does not fit an image or the scaling
/// configuration is invalid
pub fn embed_with(
    images: &[Array2<u8>],
    patch_size: usize,
    config: &ScalingConfig,
) -> Result<Array2<f64>> {
    embed_histograms(&histograms(images, patch_size)?, config)
}

/// Two-dimensional coordinates for each binary image
///
/// Only relative positions are meaningful. Uses the default seeded optimizer,
/// so repeated calls return identical coordinates.
///
/// # Errors
///
/// Returns `InvalidPatchSize` if the patch size does not fit an image
pub fn embed(images: &[Array2<u8>], patch_size: usize) -> Result<Array2<f64>> {
    embed_with(images, patch_size, &ScalingConfig::default())
}
