#[cfg(test)]
mod tests {
    use trapped_material::{peak, trapped_volume, MaterialError};

    #[test]
    fn test_regression_set() {
        let cases: [(&[i32], u64); 7] = [
            (&[0, 1, 0, 2, 1, 0, 3, 1, 2, 0], 5),
            (&[0, 3, 2, 0, 3, 2, 0, 4, 2, 0], 8),
            (&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1], 6),
            (&[0, 1, 0, 2, 1, 0, 3, 1, 0, 1, 2], 8),
            (&[4, 2, 0, 3, 2, 5], 9),
            (&[6, 4, 2, 0, 3, 2, 0, 3, 1, 4, 5, 3, 2, 7, 5, 3, 0, 1, 2, 1, 3, 4, 6, 8, 1, 3], 83),
            (&[6, 2, 1, 1, 8, 0, 5, 5, 0, 1, 8, 9, 6, 9, 4, 8, 0, 0], 50),
        ];
        for (heights, expected) in cases {
            assert_eq!(trapped_volume(heights), Ok(expected), "heights {:?}", heights);
        }
    }

    #[test]
    fn test_single() {
        assert_eq!(trapped_volume(&[7u8]), Ok(0));
    }

    #[test]
    fn test_two_bars() {
        assert_eq!(trapped_volume(&[2, 5]), Ok(0));
        assert_eq!(trapped_volume(&[5, 2]), Ok(0));
    }

    #[test]
    fn test_monotone() {
        assert_eq!(trapped_volume(&[0, 1, 1, 2, 3, 8]), Ok(0));
        assert_eq!(trapped_volume(&[9, 7, 7, 3, 0]), Ok(0));
        assert_eq!(trapped_volume(&[4, 4, 4, 4]), Ok(0));
    }

    #[test]
    fn test_simple_pool() {
        assert_eq!(trapped_volume(&[5u16, 1, 5]), Ok(4));
        assert_eq!(trapped_volume(&[1, 0, 3, 0, 1]), Ok(2));
    }

    #[test]
    fn test_pool_against_the_right_wall() {
        // the left wall is higher, so the right wall sets the level
        assert_eq!(trapped_volume(&[4, 1, 1, 0, 2, 3]), Ok(8));
    }

    #[test]
    fn test_tied_peaks() {
        assert_eq!(trapped_volume(&[2, 0, 5, 0, 5, 0, 2]), Ok(9));
    }

    #[test]
    fn test_empty() {
        assert_eq!(trapped_volume::<i32>(&[]), Err(MaterialError::EmptyProfile));
    }

    #[test]
    fn test_negative_height() {
        assert_eq!(
            trapped_volume(&[3, 1, -2, 4]),
            Err(MaterialError::NegativeHeight { index: 2 })
        );
    }

    #[test]
    fn test_height_too_large() {
        let heights = [1u128, u128::from(u64::MAX) + 1, 1];
        assert_eq!(trapped_volume(&heights), Err(MaterialError::Overflow));
    }

    #[test]
    fn test_largest_volume_that_fits() {
        assert_eq!(trapped_volume(&[u64::MAX, 0, u64::MAX]), Ok(u64::MAX));
    }

    #[test]
    fn test_tall_walls_small_pool() {
        let heights = [u64::MAX, u64::MAX - 1, u64::MAX - 1, u64::MAX];
        assert_eq!(trapped_volume(&heights), Ok(2));
    }

    #[test]
    fn test_volume_overflow() {
        assert_eq!(
            trapped_volume(&[u64::MAX, 0, 0, u64::MAX]),
            Err(MaterialError::Overflow)
        );
    }

    #[test]
    fn test_repeat_calls() {
        let heights = vec![0, 3, 2, 0, 3, 2, 0, 4, 2, 0];
        let first = trapped_volume(&heights);
        assert_eq!(first, trapped_volume(&heights));
        assert_eq!(heights, vec![0, 3, 2, 0, 3, 2, 0, 4, 2, 0]);
    }

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[0, 3, 2, 0, 3, 2, 0, 4, 2, 0]), Some((7, 4)));
        assert_eq!(peak(&[5, 1, 5]), Some((0, 5)));
        assert_eq!(peak(&[0, 0, 0]), Some((0, 0)));
        assert_eq!(peak::<u8>(&[]), None);
    }

    #[test]
    fn test_error_messages() {
        let err = MaterialError::NegativeHeight { index: 4 }.to_string();
        assert_eq!(err, "negative height at index 4");
        assert_eq!(MaterialError::EmptyProfile.to_string(), "height profile is empty");
    }

    #[test]
    fn test_result_compared_twice() {
        let result = trapped_volume::<i32>(&[]);
        assert_eq!(result.clone(), Err(MaterialError::EmptyProfile));
        assert_eq!(result, trapped_volume::<i32>(&[]));

        let err = MaterialError::Row { row: 1, source: Box::new(MaterialError::Overflow) };
        assert_eq!(err.clone(), err);
    }
}
