//! Binary pattern encoding and multipoint histogram construction
//!
//! Every `k x k` window of a binary image is flattened row-major into `k*k`
//! bits and read as a big-endian integer, giving each of the `2^(k*k)`
//! possible patterns a unique ID. For example, with 2x2 windows:
//!
//! - `[[0,0],[0,0]] -> 0000 -> 0`
//! - `[[0,1],[0,0]] -> 0100 -> 4`
//! - `[[1,0],[1,1]] -> 1011 -> 11`
//!
//! The multipoint histogram counts how often each ID occurs. Its length is
//! always `2^(k*k)` so histograms of different images line up bin for bin.

use crate::io::configuration::MAX_HISTOGRAM_BITS;
use crate::io::error::{AnodiError, Result};
use ndarray::{Array1, Array2};

/// Interpret a bit sequence as a big-endian binary number
///
/// The first bit is the most significant, so `[0, 1, 1]` encodes to 3.
/// Any nonzero value counts as a set bit.
///
/// Sequences must hold at most `usize::BITS` bits. Longer sequences lose
/// their leading bits and yield IDs that do not identify the pattern.
pub fn encode_pattern<'a, I>(bits: I) -> usize
where
    I: IntoIterator<Item = &'a u8>,
{
    bits.into_iter()
        .fold(0, |id, &bit| (id << 1) | usize::from(bit != 0))
}

/// Encode each row of a bit matrix independently
///
/// Rows must hold at most `usize::BITS` bits, as for [`encode_pattern`].
/// Rows produced by [`flatten_windows`] always satisfy this.
pub fn encode_patterns(bit_rows: &Array2<u8>) -> Array1<usize> {
    bit_rows
        .rows()
        .into_iter()
        .map(|row| encode_pattern(row.iter()))
        .collect()
}

/// Number of distinct patterns for a patch size, `2^(patch_size^2)`
///
/// Only meaningful for patch sizes accepted by [`validate_patch_size`].
pub const fn histogram_length(patch_size: usize) -> usize {
    1 << (patch_size * patch_size)
}

/// Check that square patches of `patch_size` can be counted on an image of `dims`
///
/// # Errors
///
/// Returns `InvalidPatchSize` if:
/// - The patch size is zero
/// - The patch size exceeds either image dimension
/// - The histogram would need more than `2^MAX_HISTOGRAM_BITS` bins
pub fn validate_patch_size(dims: (usize, usize), patch_size: usize) -> Result<()> {
    let (rows, cols) = dims;
    let reason = if patch_size == 0 {
        Some("patch size must be positive")
    } else if patch_size > rows || patch_size > cols {
        Some("patch size exceeds image dimensions")
    } else if patch_size * patch_size > MAX_HISTOGRAM_BITS {
        Some("pattern histogram would be too large to allocate")
    } else {
        None
    };

    reason.map_or(Ok(()), |reason| {
        Err(AnodiError::InvalidPatchSize {
            patch_size,
            rows,
            cols,
            reason,
        })
    })
}

/// Flatten every stride-1 `patch_size x patch_size` window into one row of bits
///
/// Rows follow the top-left position of each window in row-major order; the
/// bits of a row follow the window in row-major order.
///
/// # Errors
///
/// Returns `InvalidPatchSize` if the patch size is unusable for this image
pub fn flatten_windows(image: &Array2<u8>, patch_size: usize) -> Result<Array2<u8>> {
    validate_patch_size(image.dim(), patch_size)?;

    let (rows, cols) = image.dim();
    let window_count = (rows - patch_size + 1) * (cols - patch_size + 1);
    let mut bit_rows = Array2::zeros((window_count, patch_size * patch_size));

    for (mut bits, window) in bit_rows
        .rows_mut()
        .into_iter()
        .zip(image.windows((patch_size, patch_size)))
    {
        bits.iter_mut()
            .zip(window.iter())
            .for_each(|(bit, &value)| *bit = value);
    }

    Ok(bit_rows)
}

/// Count every pattern of a binary image into a full-length histogram
///
/// The counts sum to `(H - k + 1) * (W - k + 1)` for an `H x W` image.
/// Bin `id` holds the number of windows encoding to `id`; patterns that never
/// occur keep a zero count.
///
/// # Errors
///
/// Returns `InvalidPatchSize` if the patch size is zero, larger than the
/// image, or would produce an unmanageably large histogram
pub fn multipoint_histogram(image: &Array2<u8>, patch_size: usize) -> Result<Array1<usize>> {
    let bit_rows = flatten_windows(image, patch_size)?;
    let ids = encode_patterns(&bit_rows);

    let mut histogram = Array1::zeros(histogram_length(patch_size));
    for &id in &ids {
        if let Some(count) = histogram.get_mut(id) {
            *count += 1;
        }
    }

    Ok(histogram)
}
