//! Tests for configuration constants and their mutual consistency

#[cfg(test)]
mod tests {
    use anodi::analysis::patterns::validate_patch_size;
    use anodi::io::configuration::{
        DEFAULT_PATCH_SIZE, DEFAULT_SAMPLE_COUNT, DEFAULT_WINDOW_SIZE, EMBEDDING_CSV_SUFFIX,
        EMBEDDING_PLOT_SUFFIX, MAX_HISTOGRAM_BITS, PLOT_GROUP_COLORS, PLOT_MARGIN,
        PLOT_MARKER_RADIUS, PLOT_SIZE, ROTATIONS,
    };

    // Tests the default patch size fits the default window and histogram limit
    // Verified by raising the default patch size to 6
    #[test]
    fn test_default_patch_size_is_usable() {
        assert!(DEFAULT_PATCH_SIZE * DEFAULT_PATCH_SIZE <= MAX_HISTOGRAM_BITS);
        assert!(
            validate_patch_size((DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE), DEFAULT_PATCH_SIZE)
                .is_ok()
        );
    }

    // Tests diversity is defined for the default sample count
    // Verified by setting the default to one sample
    #[test]
    fn test_default_sample_count_supports_diversity() {
        assert!(DEFAULT_SAMPLE_COUNT >= 2);
    }

    // Tests every rotation group and the reference have a plot color
    // Verified by removing the reference color
    #[test]
    fn test_plot_colors_cover_groups() {
        assert_eq!(PLOT_GROUP_COLORS.len(), ROTATIONS.len() + 1);
        assert!(ROTATIONS.iter().all(|&turns| turns < 4));
    }

    // Tests the drawable area is non-empty after margins
    // Verified by making the margin exceed half the plot
    #[test]
    fn test_plot_geometry() {
        assert!(2 * PLOT_MARGIN < PLOT_SIZE);
        assert!(PLOT_MARKER_RADIUS < PLOT_MARGIN);
    }

    // Tests output suffixes cannot collide
    // Verified by giving both outputs the same suffix
    #[test]
    fn test_output_suffixes_differ() {
        assert_ne!(EMBEDDING_CSV_SUFFIX, EMBEDDING_PLOT_SUFFIX);
        assert!(EMBEDDING_PLOT_SUFFIX.ends_with(".png"));
    }
}
