//! Sliding-window patch extraction and quarter-turn rotation
//!
//! Produces candidate image sets from a single exemplar: every window of a
//! given size, a random sample of windows, or the exemplar rotated by
//! multiples of 90 degrees.

use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, Axis, Slice};
use rand::{Rng, rngs::StdRng};

fn validate_window(dims: (usize, usize), window: (usize, usize)) -> Result<()> {
    let (rows, cols) = dims;
    let (window_rows, window_cols) = window;

    if window_rows == 0 || window_cols == 0 {
        return Err(invalid_parameter(
            "window",
            &format!("{window_rows}x{window_cols}"),
            &"window dimensions must be positive",
        ));
    }
    if window_rows > rows || window_cols > cols {
        return Err(invalid_parameter(
            "window",
            &format!("{window_rows}x{window_cols}"),
            &format!("window does not fit inside {rows}x{cols} image"),
        ));
    }
    Ok(())
}

/// Extract every stride-1 window of the given size
///
/// Windows are ordered by top-left position, row-major.
///
/// # Errors
///
/// Returns an error if the window is empty or larger than the image
pub fn extract_patches<T: Clone>(
    image: &Array2<T>,
    window: (usize, usize),
) -> Result<Vec<Array2<T>>> {
    validate_window(image.dim(), window)?;

    Ok(image
        .windows(window)
        .into_iter()
        .map(|patch| patch.to_owned())
        .collect())
}

/// Sample windows at uniformly random top-left positions
///
/// Positions are drawn with replacement, so the same window can appear
/// more than once.
///
/// # Errors
///
/// Returns an error if the window is empty or larger than the image
pub fn sample_patches<T: Clone>(
    image: &Array2<T>,
    window: (usize, usize),
    max_patches: usize,
    rng: &mut StdRng,
) -> Result<Vec<Array2<T>>> {
    validate_window(image.dim(), window)?;

    let (rows, cols) = image.dim();
    let (window_rows, window_cols) = window;
    let row_positions = rows - window_rows + 1;
    let col_positions = cols - window_cols + 1;

    Ok((0..max_patches)
        .map(|_| {
            let top = rng.random_range(0..row_positions);
            let left = rng.random_range(0..col_positions);
            let mut patch = image.view();
            patch.slice_axis_inplace(Axis(0), Slice::from(top..top + window_rows));
            patch.slice_axis_inplace(Axis(1), Slice::from(left..left + window_cols));
            patch.to_owned()
        })
        .collect())
}

/// Rotate an image counter-clockwise by `turns` quarter turns
///
/// Rotations are exact; odd turn counts swap the image dimensions.
pub fn rotate_quarter_turns<T: Clone>(image: &Array2<T>, turns: usize) -> Array2<T> {
    let quarter = turns % 4;
    if quarter == 0 {
        return image.clone();
    }

    let mut rotated = if quarter == 2 { image.view() } else { image.t() };
    if quarter != 3 {
        rotated.invert_axis(Axis(0));
    }
    if quarter != 1 {
        rotated.invert_axis(Axis(1));
    }
    rotated.to_owned()
}
