//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use anodi::AnodiError;
    use anodi::io::error::invalid_parameter;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AnodiError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests InvalidPatchSize names the patch size and image dimensions
    // Verified by omitting dimensions from message
    #[test]
    fn test_invalid_patch_size_error() {
        let error = AnodiError::InvalidPatchSize {
            patch_size: 5,
            rows: 3,
            cols: 8,
            reason: "patch size exceeds image dimensions",
        };

        let message = error.to_string();
        assert!(message.contains("patch size 5"));
        assert!(message.contains("3x8"));
        assert!(message.contains("exceeds"));
        assert!(error.source().is_none());
    }

    // Tests histogram errors report indices and lengths
    // Verified by swapping expected and found in the message
    #[test]
    fn test_histogram_errors() {
        let degenerate = AnodiError::DegenerateHistogram {
            index: 2,
            length: 16,
        };
        assert!(degenerate.to_string().contains("Histogram 2 (16 bins)"));

        let mismatch = AnodiError::LengthMismatch {
            expected: 16,
            found: 512,
        };
        assert!(mismatch.to_string().contains("expected 16 bins, found 512"));

        let insufficient = AnodiError::InsufficientSamples {
            required: 2,
            provided: 1,
        };
        assert!(insufficient.to_string().contains("1 provided"));
        assert!(insufficient.to_string().contains("at least 2"));
    }

    // Tests InvalidParameter helper carries all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("window", &"0x4", &"window dimensions must be positive");

        let message = error.to_string();
        assert!(message.contains("window"));
        assert!(message.contains("0x4"));
        assert!(message.contains("must be positive"));
    }

    // Tests conversions from foreign error types keep their source
    // Verified by dropping the wrapped error
    #[test]
    fn test_from_conversions() {
        let from_io = AnodiError::from(std::io::Error::other("disk full"));
        assert!(matches!(from_io, AnodiError::FileSystem { .. }));
        assert!(from_io.source().is_some());

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let from_image = AnodiError::from(image_error);
        assert!(matches!(from_image, AnodiError::ImageLoad { .. }));
        assert!(from_image.to_string().contains("access denied"));
    }
}
