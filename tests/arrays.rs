extern crate ndarr;

#[cfg(test)]
mod arrays {
    use ndarr::arrays::{Array, Interval};

    use rand::Rng;
    use rand::SeedableRng;

    #[test]
    fn construction_and_shape() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(&[3, 1, 2], array.dims());
        assert_eq!(&[2, 2, 1], array.header().strides());
        assert_eq!(6, array.count());
        assert!(!array.is_empty());
        assert!(!array.is_view());
    }

    #[test]
    fn read_write_access_wraps() {
        let data = vec![1, 2, 3, 4, 5, 6];

        let mut one_dimensional = Array::from(&[6], data.clone());
        for i in 0..6 {
            assert_eq!(data[i as usize], one_dimensional.get(&[i]));
        }
        assert_eq!(1, one_dimensional.get(&[6]));
        assert_eq!(6, one_dimensional.get(&[-1]));
        for i in 0..6 {
            one_dimensional.set(&[i], 0);
            assert_eq!(0, one_dimensional.get(&[i]));
        }

        let two_dimensional = Array::from(&[3, 2], data.clone());
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(data[(i * 2 + j) as usize], two_dimensional.get(&[i, j]));
            }
        }
        assert_eq!(1, two_dimensional.get(&[3, 2]));
        assert_eq!(6, two_dimensional.get(&[-1, -1]));

        let three_dimensional = Array::from(&[3, 1, 2], data.clone());
        assert_eq!(1, three_dimensional.get(&[3, 1, 2]));
        assert_eq!(6, three_dimensional.get(&[-1, -1, -1]));
    }

    #[test]
    fn partial_subscripts_address_the_trailing_axes() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(array.get(&[0, 0, 0]), array.get(&[0]));
        assert_eq!(array.get(&[0, 0, 1]), array.get(&[1]));
        assert_eq!(array.get(&[0, 0, 0]), array.get(&[0, 0]));
        assert_eq!(array.get(&[0, 0, 1]), array.get(&[0, 1]));
        // subscripts beyond the rank are ignored
        assert_eq!(array.get(&[0, 0, 0]), array.get(&[0, 0, 0, 10]));
        assert_eq!(array.get(&[2, 0, 1]), array.get(&[2, 0, 1, 10]));
    }

    #[test]
    fn filled_arrays() {
        let array = Array::filled(&[2, 2], 7);
        assert_eq!(vec![7, 7, 7, 7], array.to_vec());
    }

    #[test]
    fn degenerate_shapes_are_empty_not_errors() {
        let array: Array<i32> = Array::from(&[3, 0, 2], vec![]);
        assert!(array.is_empty());
        let array: Array<i32> = Array::from(&[-1], vec![]);
        assert!(array.is_empty());
        let array: Array<i32> = Array::empty();
        assert!(array.is_empty());
        assert_eq!(0, array.count());
    }

    #[test]
    fn mismatched_data_length_is_an_error() {
        assert!(Array::try_from(&[3, 1, 2], vec![1, 2, 3]).is_err());
        assert!(Array::try_from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]).is_ok());
    }

    #[test]
    fn slicing_shares_storage() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        let view = array.slice(&[
            Interval::new(0, 2, 2),
            Interval::at(0),
            Interval::at(0),
        ]);
        assert_eq!(&[2, 1, 1], view.dims());
        assert_eq!(vec![1, 5], view.to_vec());
        assert!(view.is_view());
        assert!(view.shares_storage_with(&array));
    }

    #[test]
    fn slicing_reads_the_selected_region() {
        let mut data = Vec::new();
        for value in 1..=36 {
            data.push(value);
        }
        let array = Array::from(&[2, 2, 3, 3], data);
        let view = array.slice(&[
            Interval::span(0, 1),
            Interval::at(1),
            Interval::span(0, 1),
            Interval::new(1, 2, 2),
        ]);
        assert_eq!(&[2, 1, 2, 1], view.dims());
        assert_eq!(vec![11, 14, 29, 32], view.to_vec());
    }

    #[test]
    fn descending_intervals_are_normalized() {
        let array = Array::from(&[6], vec![1, 2, 3, 4, 5, 6]);
        let view = array.slice(&[Interval::new(4, 1, -1)]);
        assert_eq!(&[4], view.dims());
        assert_eq!(vec![2, 3, 4, 5], view.to_vec());
    }

    #[test]
    fn negative_interval_positions_wrap() {
        let array = Array::from(&[6], vec![1, 2, 3, 4, 5, 6]);
        let view = array.slice(&[Interval::span(-3, -1)]);
        assert_eq!(vec![4, 5, 6], view.to_vec());
    }

    #[test]
    fn an_empty_interval_list_selects_the_whole_array() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        let view = array.slice(&[]);
        assert_eq!(array.dims(), view.dims());
        assert!(view.shares_storage_with(&array));
    }

    #[test]
    fn malformed_intervals_produce_an_empty_array() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        assert!(array.slice(&[Interval::span(2, 1)]).is_empty());
        assert!(array.slice(&[Interval::new(0, 2, 0)]).is_empty());
    }

    #[test]
    fn writing_through_a_view_mutates_the_parent() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        let mut view = array.slice(&[
            Interval::span(1, 2),
            Interval::at(0),
            Interval::at(1),
        ]);
        let dims_before = view.dims().to_vec();
        view.fill(100);
        assert_eq!(vec![1, 2, 3, 100, 5, 100], array.to_vec());
        // the view's own header is unchanged by the write
        assert_eq!(dims_before, view.dims());
        assert_eq!(vec![100, 100], view.to_vec());
    }

    #[test]
    fn setting_elements_through_a_view() {
        let array = Array::from(&[3, 2], vec![1, 2, 3, 4, 5, 6]);
        let mut view = array.slice(&[Interval::at(1)]);
        view.set(&[0, 0], 30);
        view.set(&[0, 1], 40);
        assert_eq!(vec![1, 2, 30, 40, 5, 6], array.to_vec());
    }

    #[test]
    fn assigning_into_a_view_writes_through() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        let mut view = array.slice(&[
            Interval::span(1, 2),
            Interval::at(0),
            Interval::at(1),
        ]);
        let replacement = Array::from(&[2, 1, 1], vec![70, 80]);
        view.assign(&replacement);
        assert_eq!(vec![1, 2, 3, 70, 5, 80], array.to_vec());
        assert!(view.shares_storage_with(&array));
    }

    #[test]
    fn assigning_to_a_non_view_rebinds() {
        let array = Array::from(&[2, 2], vec![1, 2, 3, 4]);
        let mut other = Array::from(&[2, 2], vec![5, 6, 7, 8]);
        other.assign(&array);
        assert!(other.shares_storage_with(&array));
        assert_eq!(vec![1, 2, 3, 4], other.to_vec());
    }

    #[test]
    fn assigning_a_mismatched_shape_to_a_view_rebinds() {
        let array = Array::from(&[3, 2], vec![1, 2, 3, 4, 5, 6]);
        let mut view = array.slice(&[Interval::at(0)]);
        let other = Array::from(&[3], vec![9, 9, 9]);
        view.assign(&other);
        assert!(view.shares_storage_with(&other));
        assert!(!view.shares_storage_with(&array));
        assert_eq!(vec![1, 2, 3, 4, 5, 6], array.to_vec());
    }

    #[test]
    fn sharing_is_shallow() {
        let array = Array::from(&[2, 2], vec![1, 2, 3, 4]);
        let mut shared = array.share();
        shared.set(&[0, 0], 100);
        assert_eq!(100, array.get(&[0, 0]));
        assert!(shared.shares_storage_with(&array));
    }

    #[test]
    fn gathering_by_storage_index() {
        let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
        let indices = Array::from(&[2, 2], vec![0, 2, 4, 5]);
        let gathered = array.gather(&indices);
        assert_eq!(&[2, 2], gathered.dims());
        assert_eq!(vec![1, 3, 5, 6], gathered.to_vec());
        assert!(array.gather(&Array::empty()).is_empty());
    }

    #[test]
    fn filling_an_empty_array_does_nothing() {
        let mut array: Array<i32> = Array::empty();
        array.fill(1);
        assert!(array.is_empty());
    }

    #[test]
    fn randomized_wrap_around_addressing() {
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(16);
        for _ in 0..100 {
            let length = random.random_range(1..10);
            let data = (0..length).collect::<Vec<i64>>();
            let array = Array::from(&[length], data);
            let subscript = random.random_range(-100..100);
            let wrapped = ((subscript % length) + length) % length;
            assert_eq!(array.get(&[wrapped]), array.get(&[subscript]));
        }
    }

    #[test]
    fn randomized_stride_law() {
        use ndarr::arrays::dimensions::compute_strides;
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(25);
        for _ in 0..100 {
            let rank = random.random_range(1..5);
            let dims = (0..rank)
                .map(|_| random.random_range(1..6))
                .collect::<Vec<i64>>();
            let strides = compute_strides(&dims);
            assert_eq!(1, strides[rank - 1]);
            for i in 0..rank - 1 {
                assert_eq!(strides[i], strides[i + 1] * dims[i + 1]);
            }
        }
    }

    #[test]
    fn randomized_round_trip_slicing() {
        use ndarr::arrays::indexing::Subscripts;
        let mut random = rand_chacha::ChaCha8Rng::seed_from_u64(37);
        for _ in 0..100 {
            let rank = random.random_range(1..4);
            let dims = (0..rank)
                .map(|_| random.random_range(1..6))
                .collect::<Vec<i64>>();
            let count = dims.iter().product::<i64>();
            let array = Array::from(&dims, (0..count).collect());
            let intervals = dims
                .iter()
                .map(|&length| {
                    let start = random.random_range(0..length);
                    let stop = random.random_range(start..length);
                    Interval::new(start, stop, random.random_range(1..3))
                })
                .collect::<Vec<Interval>>();
            let view = array.slice(&intervals);
            assert!(!view.is_empty());
            // every view subscript resolves to the composed parent subscript
            let mut cursor = Subscripts::over(view.dims());
            while cursor.is_valid() {
                let absolute = cursor
                    .subscripts()
                    .iter()
                    .zip(&intervals)
                    .map(|(&subscript, interval)| interval.start + subscript * interval.step)
                    .collect::<Vec<i64>>();
                assert_eq!(array.get(&absolute), view.get(cursor.subscripts()));
                cursor.advance();
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serialization_round_trip() {
        let array = Array::from(&[2, 3], vec![1, 2, 3, 4, 5, 6]);
        let serialized = toml::to_string(&array).unwrap();
        let deserialized: Array<i32> = toml::from_str(&serialized).unwrap();
        assert_eq!(array.dims(), deserialized.dims());
        assert_eq!(array.to_vec(), deserialized.to_vec());
        // a view serializes as its own logical contents
        let view = array.slice(&[Interval::at(1)]);
        let serialized = toml::to_string(&view).unwrap();
        let deserialized: Array<i32> = toml::from_str(&serialized).unwrap();
        assert_eq!(&[1, 3], deserialized.dims());
        assert_eq!(vec![4, 5, 6], deserialized.to_vec());
    }
}
