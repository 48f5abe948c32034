//! Mathematical utilities for the analysis

/// Probability distributions and divergence measures
pub mod probability;
/// Stress-minimizing multidimensional scaling
pub mod scaling;
