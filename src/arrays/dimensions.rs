/*!
 * Utilities to manipulate dimensions, strides and subscripts.
 *
 * # Terminology
 *
 * Arrays in ndarr have a **shape** of type `&[i64]`, a list of dimension
 * lengths ordered most significant first (row-major). The **strides** of a
 * shape give the number of elements to skip in the flat backing buffer to
 * advance one step along each axis. A position in an array is addressed by
 * **subscripts**, one per axis, and resolves to a single index into the flat
 * backing buffer.
 *
 * All shape arithmetic is performed in `i64`. None of these functions guard
 * against overflow; element counts that exceed `i64` are outside the
 * supported domain.
 */

use crate::arrays::intervals::Interval;

/**
 * Returns the product of the provided dimension lengths.
 *
 * This is equal to the number of elements that will be stored for these
 * dimensions. An empty list of dimensions, or any dimension length of zero
 * or less, yields a count of 0: such a shape holds no elements and is
 * degenerate rather than invalid.
 */
pub fn elements(dims: &[i64]) -> i64 {
    if dims.is_empty() {
        return 0;
    }
    let mut count = 1;
    for &length in dims {
        if length <= 0 {
            return 0;
        }
        count *= length;
    }
    count
}

/**
 * Wraps a subscript into `[0, length)` using floor modulo, so `-1` addresses
 * the last position along an axis of any length.
 *
 * `length` must be positive.
 */
pub fn wrap(value: i64, length: i64) -> i64 {
    ((value % length) + length) % length
}

/**
 * Computes the row-major strides of a shape: the last axis has stride 1 and
 * each preceding axis has the stride of the next axis times that axis'
 * length.
 */
pub fn compute_strides(dims: &[i64]) -> Vec<i64> {
    let mut strides = vec![0; dims.len()];
    if dims.is_empty() {
        return strides;
    }
    let last = dims.len() - 1;
    strides[last] = 1;
    for i in (0..last).rev() {
        strides[i] = strides[i + 1] * dims[i + 1];
    }
    strides
}

// Strides of a slice: each sliced axis multiplies the parent stride by the
// interval step. Axes beyond the supplied intervals get canonical strides
// recomputed from the parent dimension suffix.
pub(crate) fn strides_from_intervals(
    previous_dims: &[i64],
    previous_strides: &[i64],
    intervals: &[Interval],
) -> Vec<i64> {
    let mut strides = vec![0; previous_strides.len()];
    if previous_strides.is_empty() {
        return strides;
    }
    for i in 0..intervals.len().min(previous_strides.len()) {
        strides[i] = previous_strides[i] * intervals[i].forward().step;
    }
    if intervals.len() < previous_dims.len() && strides.len() >= previous_dims.len() {
        let last = previous_dims.len() - 1;
        strides[last] = 1;
        for i in (intervals.len()..last).rev() {
            strides[i] = strides[i + 1] * previous_dims[i + 1];
        }
    }
    strides
}

// Dimensions of a slice: each sliced axis spans ceil((stop - start + 1) / step)
// positions after wrap-around normalization against the parent axis length.
// Axes beyond the supplied intervals keep the parent length. Returns None when
// any normalized interval is malformed, making the whole slice empty.
pub(crate) fn dims_from_intervals(previous_dims: &[i64], intervals: &[Interval]) -> Option<Vec<i64>> {
    if previous_dims.is_empty() {
        return None;
    }
    let mut dims = vec![0; previous_dims.len()];
    let computed = previous_dims.len().min(intervals.len());
    for i in 0..computed {
        let interval = intervals[i].wrapped(previous_dims[i]).forward();
        if interval.start > interval.stop || interval.step <= 0 {
            return None;
        }
        dims[i] = (interval.stop - interval.start + interval.step) / interval.step;
    }
    dims[computed..].copy_from_slice(&previous_dims[computed..]);
    Some(dims)
}

// Offset of a slice: the parent offset plus the dot product of the parent
// strides with the normalized interval starts.
pub(crate) fn offset_from_intervals(
    previous_dims: &[i64],
    previous_offset: i64,
    previous_strides: &[i64],
    intervals: &[Interval],
) -> i64 {
    let mut offset = previous_offset;
    let computed = previous_dims
        .len()
        .min(previous_strides.len())
        .min(intervals.len());
    for i in 0..computed {
        offset += previous_strides[i] * intervals[i].wrapped(previous_dims[i]).forward().start;
    }
    offset
}

/**
 * Resolves subscripts to an index into the flat backing buffer:
 * `offset + sum(strides[i] * wrap(subscripts[i], dims[i]))`.
 *
 * Fewer subscripts than axes address the least significant (trailing) axes,
 * with the omitted leading axes at position 0; subscripts beyond the number
 * of axes are dropped from the end. Every used subscript is wrapped, so
 * negative and out of range positions are defined rather than errors.
 */
pub fn linear_index(offset: i64, strides: &[i64], dims: &[i64], subscripts: &[i64]) -> i64 {
    let mut index = offset;
    if strides.is_empty() || dims.is_empty() || subscripts.is_empty() {
        return index;
    }
    let used = strides.len().min(dims.len()).min(subscripts.len());
    let ignored = strides.len() - used;
    for i in ignored..strides.len() {
        index += strides[i] * wrap(subscripts[i - ignored], dims[i]);
    }
    index
}

/**
 * Returns true if the first shape fits inside the second once both are
 * right-aligned: the shorter shape's lengths are compared against the
 * trailing lengths of the longer one.
 */
pub fn is_contained_in(sub_dims: &[i64], dims: &[i64]) -> bool {
    if sub_dims.len() > dims.len() {
        return false;
    }
    let leading = dims.len() - sub_dims.len();
    for i in leading..dims.len() {
        if sub_dims[i - leading] > dims[i] {
            return false;
        }
    }
    true
}

#[test]
fn element_counts() {
    assert_eq!(6, elements(&[3, 1, 2]));
    assert_eq!(48, elements(&[2, 2, 2, 2, 3]));
    assert_eq!(0, elements(&[]));
    assert_eq!(0, elements(&[3, 0, 2]));
    assert_eq!(0, elements(&[3, -1, 2]));
}

#[test]
fn stride_law() {
    assert_eq!(vec![2, 2, 1], compute_strides(&[3, 1, 2]));
    assert_eq!(vec![24, 12, 6, 3, 1], compute_strides(&[2, 2, 2, 2, 3]));
    assert_eq!(vec![1], compute_strides(&[7]));
}

#[test]
fn floor_modulo_wrap() {
    assert_eq!(0, wrap(0, 5));
    assert_eq!(1, wrap(1, 5));
    assert_eq!(1, wrap(26, 5));
    assert_eq!(4, wrap(-1, 5));
    assert_eq!(4, wrap(-26, 5));
}

#[test]
fn partial_subscripts_address_trailing_axes() {
    let dims = [3, 1, 2];
    let strides = compute_strides(&dims);
    assert_eq!(0, linear_index(0, &strides, &dims, &[0, 0, 0]));
    assert_eq!(1, linear_index(0, &strides, &dims, &[1]));
    assert_eq!(1, linear_index(0, &strides, &dims, &[0, 1]));
    // subscripts beyond the rank are dropped from the end
    assert_eq!(5, linear_index(0, &strides, &dims, &[2, 0, 1, 10]));
    // every subscript wraps
    assert_eq!(5, linear_index(0, &strides, &dims, &[-1, -1, -1]));
}

#[test]
fn right_aligned_containment() {
    assert!(is_contained_in(&[1, 2], &[3, 1, 2]));
    assert!(is_contained_in(&[3, 1, 2], &[3, 1, 2]));
    assert!(!is_contained_in(&[2, 2], &[3, 1, 2]));
    assert!(!is_contained_in(&[1, 3, 1, 2], &[3, 1, 2]));
    assert!(is_contained_in(&[], &[3, 1, 2]));
}
