extern crate ndarr;

#[cfg(test)]
mod subscripts {
    use ndarr::arrays::dimensions::{compute_strides, linear_index};
    use ndarr::arrays::indexing::Subscripts;

    // Resolves the cursor's current position to a linear index of a base
    // array of the given shape, to compare walks against flat positions.
    fn position(cursor: &Subscripts, dims: &[i64]) -> i64 {
        linear_index(0, &compute_strides(dims), dims, cursor.subscripts())
    }

    #[test]
    fn forward_then_backward() {
        let dims = [3, 1, 2];
        let expected = [0, 1, 2, 3, 4, 5];
        let mut cursor = Subscripts::over(&dims);
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(expected[generated], position(&cursor, &dims));
            generated += 1;
            cursor.advance();
        }
        assert_eq!(6, generated);
        cursor.retreat();
        while cursor.is_valid() {
            generated -= 1;
            assert_eq!(expected[generated], position(&cursor, &dims));
            cursor.retreat();
        }
        assert_eq!(0, generated);
    }

    #[test]
    fn stepping_with_counts_bigger_than_one() {
        let dims = [3, 1, 2];
        let expected = [0, 2, 4];
        let mut cursor = Subscripts::over(&dims);
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(expected[generated], position(&cursor, &dims));
            generated += 1;
            cursor.advance_by(2);
        }
        assert_eq!(3, generated);
        cursor.retreat_by(2);
        while cursor.is_valid() {
            generated -= 1;
            assert_eq!(expected[generated], position(&cursor, &dims));
            cursor.retreat_by(2);
        }
        assert_eq!(0, generated);
    }

    #[test]
    fn walking_in_an_explicit_axis_order() {
        let dims = [3, 1, 2];
        // the first entry of the order is the major axis, the last varies
        // fastest
        let expected = [0, 2, 4, 1, 3, 5];
        let mut cursor = Subscripts::ordered(&dims, &[2, 0, 1]);
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(expected[generated], position(&cursor, &dims));
            generated += 1;
            cursor.advance();
        }
        assert_eq!(6, generated);
        cursor.retreat();
        while cursor.is_valid() {
            generated -= 1;
            assert_eq!(expected[generated], position(&cursor, &dims));
            cursor.retreat();
        }
        assert_eq!(0, generated);
    }

    #[test]
    fn walking_with_one_axis_varying_fastest() {
        let dims = [3, 1, 2];
        // the requested axis varies fastest; a walk along axis 0 sees each
        // column of the flat layout consecutively
        let expected_by_axis = [
            [0, 2, 4, 1, 3, 5],
            [0, 1, 2, 3, 4, 5],
            [0, 1, 2, 3, 4, 5],
        ];
        for axis in 0..3 {
            let mut cursor = Subscripts::along(&dims, axis as i64);
            let mut generated = 0;
            while cursor.is_valid() {
                assert_eq!(expected_by_axis[axis][generated], position(&cursor, &dims));
                generated += 1;
                cursor.advance();
            }
            assert_eq!(6, generated);
        }
    }

    #[test]
    fn axes_wrap_against_the_rank() {
        let dims = [3, 1, 2];
        let mut negative = Subscripts::along(&dims, -3);
        let mut explicit = Subscripts::along(&dims, 0);
        while explicit.is_valid() {
            assert!(negative.is_valid());
            assert_eq!(explicit.subscripts(), negative.subscripts());
            explicit.advance();
            negative.advance();
        }
        assert!(!negative.is_valid());
    }

    #[test]
    fn an_order_shorter_than_the_rank_falls_back_to_row_major() {
        let dims = [2, 2];
        let mut short = Subscripts::ordered(&dims, &[1]);
        let mut row_major = Subscripts::over(&dims);
        while row_major.is_valid() {
            assert!(short.is_valid());
            assert_eq!(row_major.subscripts(), short.subscripts());
            short.advance();
            row_major.advance();
        }
        assert!(!short.is_valid());
    }

    // The walk-terminating major axis is auto-selected. These pin its exact
    // behaviour for the subtle cases: single axis walks, walks where the
    // fastest varying axis is axis 0, and leading axes with no room.

    #[test]
    fn major_axis_for_a_single_axis_walk() {
        let mut cursor = Subscripts::over(&[4]);
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(&[generated], cursor.subscripts());
            generated += 1;
            cursor.advance();
        }
        assert_eq!(4, generated);
        // the axis parameter makes no difference at rank 1, however wrapped
        let mut cursor = Subscripts::along(&[4], 5);
        let mut generated = 0;
        while cursor.is_valid() {
            generated += 1;
            cursor.advance();
        }
        assert_eq!(4, generated);
    }

    #[test]
    fn major_axis_when_axis_zero_varies_fastest() {
        // walking along axis 0 terminates on axis 1 instead
        let dims = [2, 3];
        let mut cursor = Subscripts::along(&dims, 0);
        let expected = [
            [0, 0],
            [1, 0],
            [0, 1],
            [1, 1],
            [0, 2],
            [1, 2],
        ];
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(&expected[generated], cursor.subscripts());
            generated += 1;
            cursor.advance();
        }
        assert_eq!(6, generated);
    }

    #[test]
    fn major_axis_skips_a_degenerate_leading_axis() {
        // axis 0 has an upper bound of 0 so it can never hold a valid
        // position; the walk terminates on the first axis with room
        let dims = [0, 2];
        let mut cursor = Subscripts::over(&dims);
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(&[0, generated], cursor.subscripts());
            generated += 1;
            cursor.advance();
        }
        assert_eq!(2, generated);
    }

    #[test]
    fn default_bounds_hold_a_single_position() {
        // omitted bounds default to an exclusive 1 per axis, so the walk
        // visits exactly the all zeros position
        let mut cursor = Subscripts::bounded(&[0, 0], &[], &[], 0);
        assert!(cursor.is_valid());
        assert_eq!(&[0, 0], cursor.subscripts());
        cursor.advance();
        assert!(!cursor.is_valid());
    }

    #[test]
    fn bounded_walks_start_where_told() {
        let mut cursor = Subscripts::bounded(&[1, 0], &[0, -1], &[3, 2], 1);
        let expected = [
            [1, 0],
            [1, 1],
            [2, 0],
            [2, 1],
        ];
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(&expected[generated], cursor.subscripts());
            generated += 1;
            cursor.advance();
        }
        assert_eq!(4, generated);
        cursor.reset();
        assert_eq!(&[1, 0], cursor.subscripts());
        assert!(cursor.is_valid());
    }

    #[test]
    fn bounded_walks_can_carry_in_an_explicit_order() {
        // axis 0 varies fastest and axis 1 terminates the walk, within the
        // requested bounds
        let mut cursor = Subscripts::bounded_ordered(&[0, 1], &[-1, 0], &[2, 3], &[1, 0]);
        let expected = [
            [0, 1],
            [1, 1],
            [0, 2],
            [1, 2],
        ];
        let mut generated = 0;
        while cursor.is_valid() {
            assert_eq!(&expected[generated], cursor.subscripts());
            generated += 1;
            cursor.advance();
        }
        assert_eq!(4, generated);
    }

    #[test]
    fn cloning_snapshots_a_walk() {
        let mut cursor = Subscripts::over(&[2, 2]);
        cursor.advance();
        let snapshot = cursor.clone();
        cursor.advance();
        cursor.advance();
        assert_eq!(&[0, 1], snapshot.subscripts());
        assert_eq!(&[1, 1], cursor.subscripts());
    }
}
