//! Analysis modules for binary pattern statistics and image comparison

/// Otsu thresholding of grayscale images
pub mod binarize;
/// Histogram divergences and dissimilarity matrices
pub mod divergence;
/// Pattern encoding and multipoint histograms
pub mod patterns;
/// Inconsistency, diversity and embedding of image sets
pub mod scores;
