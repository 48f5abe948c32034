//! Global thresholding of grayscale images with Otsu's method

use crate::io::configuration::{OTSU_BIN_COUNT, OTSU_MAX_INTEGER_BINS};
use ndarray::Array2;
use num_traits::ToPrimitive;

/// Intensity histogram as (counts, bin centers)
type IntensityHistogram = (Vec<f64>, Vec<f64>);

// One bin per integer between min and max, centered on the integer itself
fn integer_histogram(values: &[f64], min: f64, max: f64) -> IntensityHistogram {
    let bin_count = (max - min) as usize + 1;
    let mut counts = vec![0.0; bin_count];
    for &value in values {
        if let Some(count) = counts.get_mut((value - min) as usize) {
            *count += 1.0;
        }
    }
    let centers = (0..bin_count).map(|i| min + i as f64).collect();
    (counts, centers)
}

// Equal-width bins over [min, max], last edge inclusive
fn binned_histogram(values: &[f64], min: f64, max: f64) -> IntensityHistogram {
    let width = (max - min) / OTSU_BIN_COUNT as f64;
    let mut counts = vec![0.0; OTSU_BIN_COUNT];
    for &value in values {
        let bin = (((value - min) / width) as usize).min(OTSU_BIN_COUNT - 1);
        if let Some(count) = counts.get_mut(bin) {
            *count += 1.0;
        }
    }
    let centers = (0..OTSU_BIN_COUNT)
        .map(|i| width.mul_add(i as f64 + 0.5, min))
        .collect();
    (counts, centers)
}

fn cumulative_sum(values: &[f64]) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |total, &value| {
            *total += value;
            Some(*total)
        })
        .collect()
}

/// Split point maximizing the between-class variance of a histogram
///
/// Returns the center of the last bin in the lower class. The first maximum
/// wins ties.
fn otsu_from_histogram(counts: &[f64], centers: &[f64]) -> Option<f64> {
    let weighted: Vec<f64> = counts.iter().zip(centers).map(|(&c, &x)| c * x).collect();
    let weight_below = cumulative_sum(counts);
    let mass_below = cumulative_sum(&weighted);
    let total_weight = weight_below.last().copied()?;
    let total_mass = mass_below.last().copied()?;

    let mut best: Option<(usize, f64)> = None;
    for (split, (&w0, &m0)) in weight_below
        .iter()
        .zip(mass_below.iter())
        .take(counts.len().saturating_sub(1))
        .enumerate()
    {
        let w1 = total_weight - w0;
        if w0 <= 0.0 || w1 <= 0.0 {
            continue;
        }

        let mean_below = m0 / w0;
        let mean_above = (total_mass - m0) / w1;
        let variance = w0 * w1 * (mean_below - mean_above).powi(2);

        if best.is_none_or(|(_, best_variance)| variance > best_variance) {
            best = Some((split, variance));
        }
    }

    best.and_then(|(split, _)| centers.get(split).copied())
}

/// Otsu threshold of a grayscale image
///
/// Integer-valued images get one histogram bin per intensity level; other
/// images use equal-width bins. A constant image returns its only value.
/// Non-finite and non-numeric pixels are ignored, and an image without any
/// usable pixel has no threshold.
pub fn otsu_threshold<A: ToPrimitive>(image: &Array2<A>) -> Option<f64> {
    let values: Vec<f64> = image
        .iter()
        .filter_map(ToPrimitive::to_f64)
        .filter(|value| value.is_finite())
        .collect();

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &value| {
            (lo.min(value), hi.max(value))
        });

    if values.is_empty() {
        return None;
    }
    if max <= min {
        return Some(min);
    }

    let integral = values.iter().all(|value| value.fract() == 0.0);
    let (counts, centers) = if integral && max - min < OTSU_MAX_INTEGER_BINS as f64 {
        integer_histogram(&values, min, max)
    } else {
        binned_histogram(&values, min, max)
    };

    otsu_from_histogram(&counts, &centers)
}

/// Binarize against a fixed threshold
///
/// Pixels strictly above the threshold become 1, everything else 0.
pub fn binarize_with_threshold<A: ToPrimitive>(image: &Array2<A>, threshold: f64) -> Array2<u8> {
    image.map(|value| u8::from(value.to_f64().is_some_and(|v| v > threshold)))
}

/// Binarize a grayscale image with its Otsu threshold
///
/// An image with no usable threshold binarizes to all zeros.
pub fn binarize<A: ToPrimitive>(image: &Array2<A>) -> Array2<u8> {
    otsu_threshold(image).map_or_else(
        || Array2::zeros(image.dim()),
        |threshold| binarize_with_threshold(image, threshold),
    )
}
