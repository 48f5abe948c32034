//! Tests for score lines and embedding CSV output

#[cfg(test)]
mod tests {
    use anodi::AnodiScores;
    use anodi::io::report::{RotationReport, embedding_csv, group_label, write_embedding_csv};
    use ndarray::{Array2, array};
    use std::fs;
    use tempfile::TempDir;

    // Tests the rotation line pads degrees to three characters
    // Verified by removing the width specifier
    #[test]
    fn test_rotation_line() {
        let report = RotationReport {
            degrees: 90,
            scores: AnodiScores {
                inconsistency: 0.01234,
                diversity: 0.1,
            },
        };
        assert_eq!(
            report.line(),
            "[ 90 rotation] inconsistency: 0.0123 | diversity: 0.1000"
        );
    }

    // Tests group labels for rotations and the reference
    // Verified by labelling by group index instead of degrees
    #[test]
    fn test_group_labels() {
        assert_eq!(group_label(0), "0");
        assert_eq!(group_label(1), "90");
        assert_eq!(group_label(2), "180");
        assert_eq!(group_label(3), "reference");
    }

    // Tests CSV header and rows
    // Verified by swapping x and y columns
    #[test]
    fn test_embedding_csv() {
        let coordinates = array![[0.5, -1.0], [2.0, 0.25]];
        let csv = embedding_csv(&coordinates, &[1, 3]);

        assert_eq!(
            csv.ok().as_deref(),
            Some("group,x,y\n90,0.5,-1\nreference,2,0.25\n")
        );
    }

    // Tests mismatched groups and narrow coordinates are rejected
    // Verified by zipping silently over the shorter input
    #[test]
    fn test_embedding_csv_errors() {
        let coordinates = array![[0.0, 1.0], [1.0, 0.0]];
        assert!(embedding_csv(&coordinates, &[0]).is_err());
        assert!(embedding_csv(&Array2::zeros((2, 1)), &[0, 1]).is_err());
    }

    // Tests the CSV is written to disk, creating parent directories
    // Verified by skipping directory creation
    #[test]
    fn test_write_embedding_csv() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory should be creatable");
        };
        let path = dir.path().join("nested").join("out_mds.csv");
        let coordinates = array![[1.0, 2.0]];

        assert!(write_embedding_csv(&coordinates, &[0], &path).is_ok());
        let written = fs::read_to_string(&path).unwrap_or_default();
        assert!(written.starts_with("group,x,y\n0,1,2"));
    }
}
