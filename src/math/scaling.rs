//! Metric multidimensional scaling by stress majorization (SMACOF)
//!
//! Places `n` points in a low-dimensional space so that their Euclidean
//! distances approximate a precomputed dissimilarity matrix. Each run starts
//! from random coordinates and repeatedly applies the Guttman transform until
//! the normalized stress stops improving; the best of several restarts wins.

use crate::io::configuration::{
    DEFAULT_SEED, MDS_COMPONENTS, MDS_INITIALIZATIONS, MDS_MAX_ITERATIONS, MDS_MIN_DISTANCE,
    MDS_TOLERANCE,
};
use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, Axis, Zip};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Optimizer parameters for multidimensional scaling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalingConfig {
    /// Dimension of the embedding space
    pub components: usize,
    /// Number of random restarts
    pub initializations: usize,
    /// Iteration cap per restart
    pub max_iterations: usize,
    /// Convergence threshold on the normalized stress improvement
    pub tolerance: f64,
    /// Seed for the random initial coordinates
    pub seed: u64,
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            components: MDS_COMPONENTS,
            initializations: MDS_INITIALIZATIONS,
            max_iterations: MDS_MAX_ITERATIONS,
            tolerance: MDS_TOLERANCE,
            seed: DEFAULT_SEED,
        }
    }
}

impl ScalingConfig {
    /// Default configuration with a different seed
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}

/// Result of the best scaling run
#[derive(Clone, Debug)]
pub struct ScalingOutcome {
    /// One row of coordinates per input item
    pub coordinates: Array2<f64>,
    /// Raw stress `sum((d_ij - delta_ij)^2) / 2` of the returned configuration
    pub stress: f64,
    /// Iterations performed by the winning run
    pub iterations: usize,
}

/// Embed a precomputed dissimilarity matrix
///
/// # Errors
///
/// Returns an error if:
/// - The dissimilarity matrix is not square
/// - The configuration asks for zero components or zero restarts
pub fn smacof(dissimilarities: &Array2<f64>, config: &ScalingConfig) -> Result<ScalingOutcome> {
    let (rows, cols) = dissimilarities.dim();
    if rows != cols {
        return Err(invalid_parameter(
            "dissimilarities",
            &format!("{rows}x{cols}"),
            &"matrix must be square",
        ));
    }
    if config.components == 0 {
        return Err(invalid_parameter(
            "components",
            &config.components,
            &"must be positive",
        ));
    }
    if config.initializations == 0 {
        return Err(invalid_parameter(
            "initializations",
            &config.initializations,
            &"must be positive",
        ));
    }

    if rows == 0 {
        return Ok(ScalingOutcome {
            coordinates: Array2::zeros((0, config.components)),
            stress: 0.0,
            iterations: 0,
        });
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut run = || {
        let initial = Array2::from_shape_fn((rows, config.components), |_| rng.random::<f64>());
        smacof_single(dissimilarities, initial, config)
    };

    let first = run();
    Ok((1..config.initializations).fold(first, |best, _| {
        let outcome = run();
        if outcome.stress < best.stress {
            outcome
        } else {
            best
        }
    }))
}

fn smacof_single(
    dissimilarities: &Array2<f64>,
    mut coordinates: Array2<f64>,
    config: &ScalingConfig,
) -> ScalingOutcome {
    let n = dissimilarities.nrows();
    let mut previous_stress: Option<f64> = None;
    let mut stress = 0.0;
    let mut iterations = 0;

    for iteration in 1..=config.max_iterations {
        iterations = iteration;

        let mut distances = euclidean_distances(&coordinates);
        stress = distances
            .iter()
            .zip(dissimilarities.iter())
            .map(|(&d, &delta)| (d - delta).powi(2))
            .sum::<f64>()
            / 2.0;

        distances.mapv_inplace(|d| if d == 0.0 { MDS_MIN_DISTANCE } else { d });

        // Guttman transform: B(X) has -delta/d off the diagonal and row sums of zero
        let mut guttman = Array2::<f64>::zeros((n, n));
        Zip::from(&mut guttman)
            .and(dissimilarities)
            .and(&distances)
            .for_each(|b, &delta, &d| *b = -delta / d);
        let row_sums = guttman.sum_axis(Axis(1));
        for (i, &row_sum) in row_sums.iter().enumerate() {
            if let Some(diagonal) = guttman.get_mut((i, i)) {
                *diagonal -= row_sum;
            }
        }

        coordinates = guttman.dot(&coordinates) / n as f64;

        let spread: f64 = coordinates
            .rows()
            .into_iter()
            .map(|row| row.dot(&row).sqrt())
            .sum();
        if spread <= 0.0 {
            break;
        }

        let normalized_stress = stress / spread;
        if previous_stress.is_some_and(|previous| previous - normalized_stress < config.tolerance)
        {
            break;
        }
        previous_stress = Some(normalized_stress);
    }

    ScalingOutcome {
        coordinates,
        stress,
        iterations,
    }
}

/// Pairwise Euclidean distances between the rows of `points`
pub fn euclidean_distances(points: &Array2<f64>) -> Array2<f64> {
    let n = points.nrows();
    Array2::from_shape_fn((n, n), |(i, j)| {
        points
            .row(i)
            .iter()
            .zip(points.row(j).iter())
            .map(|(&a, &b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    })
}
