//! Tests for pattern encoding and multipoint histogram construction

#[cfg(test)]
mod tests {
    use anodi::AnodiError;
    use anodi::io::configuration::MAX_HISTOGRAM_BITS;
    use anodi::analysis::patterns::{
        encode_pattern, encode_patterns, flatten_windows, histogram_length, multipoint_histogram,
        validate_patch_size,
    };
    use ndarray::{Array2, array};
    use std::collections::HashSet;

    fn all_bit_patterns(bits: usize) -> Array2<u8> {
        Array2::from_shape_fn((1 << bits, bits), |(id, position)| {
            u8::from((id >> (bits - 1 - position)) & 1 == 1)
        })
    }

    // Tests big-endian interpretation with the first bit most significant
    // Verified by reversing the fold order
    #[test]
    fn test_encode_three_bit_examples() {
        assert_eq!(encode_pattern(&[0, 0, 1]), 1);
        assert_eq!(encode_pattern(&[1, 0, 0]), 4);
        assert_eq!(encode_pattern(&[0, 1, 1]), 3);
        assert_eq!(encode_pattern(&[]), 0);
    }

    // Tests that every k x k pattern maps to a distinct ID covering the whole range
    // Verified by dropping the lowest bit during encoding
    #[test]
    fn test_encoding_is_a_bijection() {
        for patch_size in 1..=3 {
            let bits = patch_size * patch_size;
            let ids = encode_patterns(&all_bit_patterns(bits));

            let unique: HashSet<usize> = ids.iter().copied().collect();
            assert_eq!(unique.len(), histogram_length(patch_size));
            assert!(ids.iter().all(|&id| id < histogram_length(patch_size)));

            for (row, &id) in ids.iter().enumerate() {
                assert_eq!(id, row, "pattern {row} encoded to {id}");
            }
        }
    }

    // Tests batch encoding treats rows independently
    // Verified by carrying the accumulator across rows
    #[test]
    fn test_encode_patterns_rows_are_independent() {
        let rows = array![[1u8, 1, 1, 1], [0, 0, 0, 1], [1, 0, 1, 1]];
        let ids = encode_patterns(&rows);

        assert_eq!(ids.to_vec(), vec![15, 1, 11]);
    }

    // Tests rows as wide as usize keep every bit, including the leading one
    // Verified by starting the fold from a shifted accumulator
    #[test]
    fn test_encode_full_width_rows() {
        let width = usize::BITS as usize;
        let mut rows = Array2::<u8>::ones((2, width));
        rows.row_mut(1).iter_mut().skip(1).for_each(|bit| *bit = 0);

        let ids = encode_patterns(&rows);
        assert_eq!(ids.to_vec(), vec![usize::MAX, 1 << (width - 1)]);

        // Every patch size accepted for histograms flattens to a row that fits
        assert!(MAX_HISTOGRAM_BITS <= width);
    }

    // Tests window flattening order and count
    // Verified by transposing windows before flattening
    #[test]
    fn test_flatten_windows_row_major() {
        let image = array![[1u8, 0, 0], [0, 1, 1]];
        let Ok(bits) = flatten_windows(&image, 2) else {
            unreachable!("2x2 windows fit a 2x3 image");
        };

        assert_eq!(bits.dim(), (2, 4));
        assert_eq!(bits.row(0).to_vec(), vec![1, 0, 0, 1]);
        assert_eq!(bits.row(1).to_vec(), vec![0, 0, 1, 1]);
    }

    // Tests the all-zero image puts every window in bin 0
    // Verified by omitting the minimum histogram length
    #[test]
    fn test_all_zero_image_histogram() {
        let image = Array2::<u8>::zeros((4, 4));
        let Ok(histogram) = multipoint_histogram(&image, 2) else {
            unreachable!("2x2 patches fit a 4x4 image");
        };

        assert_eq!(histogram.len(), 16);
        assert_eq!(histogram.get(0).copied(), Some(9));
        assert_eq!(histogram.iter().skip(1).sum::<usize>(), 0);
    }

    // Tests a checkerboard produces exactly two alternating patterns
    // Verified by encoding windows column-major
    #[test]
    fn test_checkerboard_histogram() {
        let image = Array2::from_shape_fn((3, 3), |(i, j)| u8::from((i + j) % 2 == 0));
        let Ok(histogram) = multipoint_histogram(&image, 2) else {
            unreachable!("2x2 patches fit a 3x3 image");
        };

        // [[1,0],[0,1]] -> 1001 and [[0,1],[1,0]] -> 0110
        assert_eq!(histogram.get(9).copied(), Some(2));
        assert_eq!(histogram.get(6).copied(), Some(2));
        assert_eq!(histogram.sum(), 4);
    }

    // Tests single pattern IDs from the module documentation
    // Verified by flipping the bit order
    #[test]
    fn test_documented_pattern_ids() {
        let cases = [
            (array![[0u8, 0], [0, 0]], 0),
            (array![[0u8, 1], [0, 0]], 4),
            (array![[1u8, 0], [1, 1]], 11),
        ];

        for (image, expected) in cases {
            let Ok(histogram) = multipoint_histogram(&image, 2) else {
                unreachable!("2x2 patch fits a 2x2 image");
            };
            assert_eq!(histogram.get(expected).copied(), Some(1));
            assert_eq!(histogram.sum(), 1);
        }
    }

    // Tests histogram totals equal the number of window positions
    // Verified by using stride 2
    #[test]
    fn test_histogram_total_matches_window_count() {
        let image = Array2::from_shape_fn((7, 9), |(i, j)| u8::from((i * 3 + j * 5) % 7 < 3));

        for patch_size in 1..=4 {
            let Ok(histogram) = multipoint_histogram(&image, patch_size) else {
                unreachable!("patch size {patch_size} fits a 7x9 image");
            };
            assert_eq!(histogram.len(), histogram_length(patch_size));
            assert_eq!(histogram.sum(), (7 - patch_size + 1) * (9 - patch_size + 1));
        }
    }

    // Tests rejection of zero, oversized and unallocatable patch sizes
    // Verified by removing each validation branch
    #[test]
    fn test_invalid_patch_sizes() {
        let image = Array2::<u8>::zeros((3, 10));

        for patch_size in [0, 4] {
            match multipoint_histogram(&image, patch_size) {
                Err(AnodiError::InvalidPatchSize {
                    patch_size: reported,
                    rows,
                    cols,
                    ..
                }) => {
                    assert_eq!(reported, patch_size);
                    assert_eq!((rows, cols), (3, 10));
                }
                other => unreachable!("Expected InvalidPatchSize, got {other:?}"),
            }
        }

        assert!(validate_patch_size((10, 10), 5).is_ok());
        assert!(matches!(
            validate_patch_size((10, 10), 6),
            Err(AnodiError::InvalidPatchSize { patch_size: 6, .. })
        ));
    }
}
