//! Plain-text reporting of scores and embedding coordinates

use crate::analysis::scores::AnodiScores;
use crate::io::configuration::ROTATIONS;
use crate::io::error::{AnodiError, Result, invalid_parameter};
use ndarray::Array2;
use std::path::Path;

/// Scores of the windows sampled from one rotation of the reference
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationReport {
    /// Counter-clockwise rotation of the reference in degrees
    pub degrees: usize,
    /// Scores of the sampled windows against the unrotated reference
    pub scores: AnodiScores,
}

impl RotationReport {
    /// Single report line, e.g. `[ 90 rotation] inconsistency: 0.0123 | diversity: 0.0045`
    pub fn line(&self) -> String {
        format!("[{:>3} rotation] {}", self.degrees, self.scores)
    }
}

/// Label of an embedding group: the rotation in degrees, or `reference`
pub fn group_label(group: usize) -> String {
    ROTATIONS
        .get(group)
        .map_or_else(|| "reference".to_string(), |turns| (turns * 90).to_string())
}

/// Render coordinates as CSV with a `group,x,y` header
///
/// # Errors
///
/// Returns an error if `groups` does not have one entry per row or the
/// coordinates have fewer than two columns
pub fn embedding_csv(coordinates: &Array2<f64>, groups: &[usize]) -> Result<String> {
    if coordinates.ncols() < 2 {
        return Err(invalid_parameter(
            "coordinates",
            &coordinates.ncols(),
            &"at least two columns are needed",
        ));
    }
    if groups.len() != coordinates.nrows() {
        return Err(invalid_parameter(
            "groups",
            &groups.len(),
            &format!("expected one group per point ({})", coordinates.nrows()),
        ));
    }

    let mut lines = vec!["group,x,y".to_string()];
    lines.extend(
        coordinates
            .rows()
            .into_iter()
            .zip(groups)
            .map(|(row, &group)| {
                let x = row.get(0).copied().unwrap_or_default();
                let y = row.get(1).copied().unwrap_or_default();
                format!("{},{x},{y}", group_label(group))
            }),
    );

    let mut csv = lines.join("\n");
    csv.push('\n');
    Ok(csv)
}

/// Write embedding coordinates to a CSV file
///
/// # Errors
///
/// Returns an error if the CSV cannot be rendered or the file cannot be written
pub fn write_embedding_csv(
    coordinates: &Array2<f64>,
    groups: &[usize],
    output_path: &Path,
) -> Result<()> {
    let csv = embedding_csv(coordinates, groups)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AnodiError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    std::fs::write(output_path, csv).map_err(|e| AnodiError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "write",
        source: e,
    })
}
