//! Inconsistency and diversity scores for binary images from multipoint statistics
//!
//! Every small square window of a binary image is encoded as an integer
//! pattern ID, and the counts of all IDs form the image's multipoint
//! histogram. Images are compared through the Jensen-Shannon divergence of
//! their histograms, which yields mean-distance scores for candidate sets and
//! planar embeddings of image collections.

#![forbid(unsafe_code)]

/// Pattern histograms, divergences, thresholding and summary scores
pub mod analysis;
/// Input/output operations and error handling
pub mod io;
/// Probability and multidimensional scaling utilities
pub mod math;
/// Window extraction and rotation
pub mod spatial;

pub use analysis::binarize::binarize;
pub use analysis::divergence::{dissimilarity_matrix, divergence};
pub use analysis::patterns::{encode_patterns, multipoint_histogram};
pub use analysis::scores::{AnodiScores, anodi, embed};
pub use io::error::{AnodiError, Result};
