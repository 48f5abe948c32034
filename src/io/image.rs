//! Grayscale PNG loading and scatter-plot export of embeddings

use crate::io::configuration::{PLOT_GROUP_COLORS, PLOT_MARGIN, PLOT_MARKER_RADIUS, PLOT_SIZE};
use crate::io::error::{AnodiError, Result, invalid_parameter};
use image::{Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

/// Load an image file as grayscale intensities in `[0, 1]`
///
/// The array is indexed `(row, column)`; alpha is discarded.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f32>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| AnodiError::ImageLoad {
        path: path_buf,
        source: e,
    })?;
    let luma = img.to_luma32f();

    let (width, height) = (luma.width() as usize, luma.height() as usize);
    let mut intensities = Array2::zeros((height, width));
    for (x, y, pixel) in luma.enumerate_pixels() {
        let [value] = pixel.0;
        if let Some(cell) = intensities.get_mut((y as usize, x as usize)) {
            *cell = value;
        }
    }

    Ok(intensities)
}

// Maps a coordinate range onto the drawable span of the plot
fn scale_axis(values: impl Iterator<Item = f64>) -> impl Fn(f64) -> u32 {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = f64::from(PLOT_SIZE - 2 * PLOT_MARGIN);
    let range = hi - lo;

    move |value| {
        let fraction = if range > 0.0 {
            (value - lo) / range
        } else {
            0.5
        };
        PLOT_MARGIN + (fraction * span).round() as u32
    }
}

/// Render embedding coordinates as a scatter plot PNG
///
/// Each row of `coordinates` is drawn as a square marker colored by its
/// entry in `groups`. The y axis points up.
///
/// # Errors
///
/// Returns an error if:
/// - `coordinates` has fewer than two columns
/// - `groups` does not have one entry per row
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_embedding_as_png(
    coordinates: &Array2<f64>,
    groups: &[usize],
    output_path: &Path,
) -> Result<()> {
    if coordinates.ncols() < 2 {
        return Err(invalid_parameter(
            "coordinates",
            &coordinates.ncols(),
            &"at least two columns are needed for a plot",
        ));
    }
    if groups.len() != coordinates.nrows() {
        return Err(invalid_parameter(
            "groups",
            &groups.len(),
            &format!("expected one group per point ({})", coordinates.nrows()),
        ));
    }

    let xs = coordinates.column(0);
    let ys = coordinates.column(1);
    let to_px = scale_axis(xs.iter().copied());
    let to_py = scale_axis(ys.iter().copied());

    let mut img = RgbaImage::from_pixel(PLOT_SIZE, PLOT_SIZE, Rgba([255, 255, 255, 255]));
    let fallback = PLOT_GROUP_COLORS.last().copied().unwrap_or([0, 0, 0, 255]);

    for ((&x, &y), &group) in xs.iter().zip(ys.iter()).zip(groups) {
        let color = Rgba(PLOT_GROUP_COLORS.get(group).copied().unwrap_or(fallback));
        let center_x = to_px(x);
        let center_y = PLOT_SIZE - 1 - to_py(y);

        for px in center_x.saturating_sub(PLOT_MARKER_RADIUS)..=center_x + PLOT_MARKER_RADIUS {
            for py in center_y.saturating_sub(PLOT_MARKER_RADIUS)..=center_y + PLOT_MARKER_RADIUS {
                if px < PLOT_SIZE && py < PLOT_SIZE {
                    img.put_pixel(px, py, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnodiError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AnodiError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
