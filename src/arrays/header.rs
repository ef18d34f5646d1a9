/*!
 * The metadata describing the logical shape of an array or view.
 */

use crate::arrays::dimensions::{
    compute_strides, dims_from_intervals, elements, offset_from_intervals, strides_from_intervals,
    wrap,
};
use crate::arrays::intervals::Interval;

/**
 * The logical shape of an array or view: dimension lengths (most significant
 * first), strides into the flat backing buffer, the buffer position where
 * subscript 0 along every axis begins, and the total element count.
 *
 * Every constructor degrades to the default empty header when given a
 * degenerate input (a shape holding no elements, a malformed interval, a
 * non-permutation axis order). Structural misuse is the caller's concern;
 * a header is never an error value.
 *
 * Headers are value types over their own metadata, independent of any
 * element storage. A moved-from header (via [std::mem::take]) is left in the
 * default empty state.
 */
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    dims: Vec<i64>,
    strides: Vec<i64>,
    offset: i64,
    count: i64,
    sliced: bool,
}

impl Header {
    /**
     * The header of a freshly allocated array: canonical row-major strides,
     * offset 0. Degrades to empty if the shape holds no elements.
     */
    pub fn of(dims: &[i64]) -> Header {
        let count = elements(dims);
        if count <= 0 {
            return Header::default();
        }
        Header {
            strides: compute_strides(dims),
            dims: dims.to_vec(),
            offset: 0,
            count,
            sliced: false,
        }
    }

    /**
     * The header of a view created by interval-slicing `previous`. Marked as
     * sliced; strides multiply by the interval steps and the offset advances
     * to the interval starts. Degrades to empty (but still marked sliced) if
     * the parent is empty or any normalized interval is malformed.
     */
    pub fn sliced(previous: &Header, intervals: &[Interval]) -> Header {
        let empty = Header {
            sliced: true,
            ..Header::default()
        };
        if previous.count <= 0 {
            return empty;
        }
        let dims = match dims_from_intervals(&previous.dims, intervals) {
            Some(dims) => dims,
            None => return empty,
        };
        let count = elements(&dims);
        let strides = strides_from_intervals(&previous.dims, &previous.strides, intervals);
        let offset =
            offset_from_intervals(&previous.dims, previous.offset, &previous.strides, intervals);
        Header {
            dims,
            strides,
            offset,
            count,
            sliced: true,
        }
    }

    /**
     * The header of `previous_dims` with one axis removed, or collapsed to a
     * single position when the shape only has one axis. The axis wraps
     * against the number of axes. Used by per-axis reduction.
     */
    pub fn without_axis(previous_dims: &[i64], axis: i64) -> Header {
        if elements(previous_dims) <= 0 {
            return Header::default();
        }
        let rank = previous_dims.len();
        let axis = wrap(axis, rank as i64) as usize;
        let dims = if rank > 1 {
            let mut dims = Vec::with_capacity(rank - 1);
            dims.extend_from_slice(&previous_dims[..axis]);
            dims.extend_from_slice(&previous_dims[axis + 1..]);
            dims
        } else {
            vec![1]
        };
        Header::of(&dims)
    }

    /**
     * The header of `previous_dims` with the axes permuted according to
     * `order`. Order entries wrap against the number of axes. Degrades to
     * empty unless the reordered shape holds exactly as many elements as the
     * original, which rejects orders that repeat or drop an axis.
     */
    pub fn reordered(previous_dims: &[i64], order: &[i64]) -> Header {
        if elements(previous_dims) <= 0 {
            return Header::default();
        }
        let rank = previous_dims.len();
        if order.len() != rank {
            return Header::default();
        }
        let mut dims = Vec::with_capacity(rank);
        for &position in order {
            dims.push(previous_dims[wrap(position, rank as i64) as usize]);
        }
        if elements(previous_dims) != elements(&dims) {
            return Header::default();
        }
        Header::of(&dims)
    }

    /**
     * The header of `previous_dims` with one axis grown (positive `delta`)
     * or shrunk (negative `delta`). The axis wraps against the number of
     * axes. Used by append, insert and remove. Degrades to empty if the
     * adjusted shape holds no elements.
     */
    pub fn with_resized_axis(previous_dims: &[i64], delta: i64, axis: i64) -> Header {
        if elements(previous_dims) <= 0 {
            return Header::default();
        }
        let rank = previous_dims.len();
        let axis = wrap(axis, rank as i64) as usize;
        let mut dims = previous_dims.to_vec();
        dims[axis] += delta;
        Header::of(&dims)
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn dims(&self) -> &[i64] {
        &self.dims
    }

    pub fn strides(&self) -> &[i64] {
        &self.strides
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /**
     * True when this header was derived by interval-slicing another header.
     * Axis removal, reordering and resizing produce regular headers instead.
     */
    pub fn is_sliced(&self) -> bool {
        self.sliced
    }

    /**
     * True when this header addresses no elements.
     */
    pub fn is_empty(&self) -> bool {
        self.count <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::Header;
    use crate::arrays::intervals::Interval;

    #[test]
    fn base_headers() {
        let header = Header::of(&[3, 1, 2]);
        assert_eq!(6, header.count());
        assert_eq!(&[3, 1, 2], header.dims());
        assert_eq!(&[2, 2, 1], header.strides());
        assert_eq!(0, header.offset());
        assert!(!header.is_sliced());
        assert!(Header::of(&[3, 0, 2]).is_empty());
        assert!(Header::of(&[]).is_empty());
    }

    #[test]
    fn sliced_headers() {
        let base = Header::of(&[3, 1, 2]);
        let slice = Header::sliced(
            &base,
            &[Interval::new(0, 2, 2), Interval::at(0), Interval::at(0)],
        );
        assert_eq!(&[2, 1, 1], slice.dims());
        assert_eq!(&[4, 2, 1], slice.strides());
        assert_eq!(0, slice.offset());
        assert_eq!(2, slice.count());
        assert!(slice.is_sliced());

        // a descending interval is normalized before the shape is derived
        let descending = Header::sliced(&base, &[Interval::new(2, 0, -1)]);
        assert_eq!(&[3, 1, 2], descending.dims());

        // start beyond stop after normalization empties the whole slice
        let malformed = Header::sliced(&base, &[Interval::span(2, 1)]);
        assert!(malformed.is_empty());
        assert!(malformed.is_sliced());
    }

    #[test]
    fn slice_of_slice_composes_offsets() {
        // worked example: a 5 dimensional array sliced twice
        let base = Header::of(&[2, 2, 2, 2, 3]);
        assert_eq!(&[24, 12, 6, 3, 1], base.strides());
        let first = Header::sliced(
            &base,
            &[
                Interval::at(1),
                Interval::span(0, 1),
                Interval::at(0),
                Interval::span(0, 1),
                Interval::new(1, 2, 2),
            ],
        );
        assert_eq!(&[1, 2, 1, 2, 1], first.dims());
        assert_eq!(&[24, 12, 6, 3, 2], first.strides());
        assert_eq!(25, first.offset());
        let second = Header::sliced(
            &first,
            &[
                Interval::at(0),
                Interval::at(0),
                Interval::at(0),
                Interval::new(1, 1, 2),
                Interval::at(0),
            ],
        );
        assert_eq!(&[1, 1, 1, 1, 1], second.dims());
        assert_eq!(28, second.offset());
    }

    #[test]
    fn axis_removal() {
        assert_eq!(&[3, 2], Header::without_axis(&[3, 1, 2], 1).dims());
        assert_eq!(&[1, 2], Header::without_axis(&[3, 1, 2], 0).dims());
        assert_eq!(&[3, 1], Header::without_axis(&[3, 1, 2], 2).dims());
        // the axis wraps against the number of axes
        assert_eq!(&[1, 2], Header::without_axis(&[3, 1, 2], 3).dims());
        // a single axis collapses rather than disappearing
        assert_eq!(&[1], Header::without_axis(&[6], 0).dims());
    }

    #[test]
    fn axis_reordering() {
        assert_eq!(&[3, 4, 2, 2], Header::reordered(&[4, 2, 3, 2], &[2, 0, 1, 3]).dims());
        assert_eq!(&[2, 3, 1], Header::reordered(&[3, 1, 2], &[2, 0, 1]).dims());
        // repeated axes change the element count and are rejected
        assert!(Header::reordered(&[3, 1, 2], &[0, 0, 2]).is_empty());
        assert!(Header::reordered(&[3, 1, 2], &[0, 1]).is_empty());
    }

    #[test]
    fn axis_resizing() {
        assert_eq!(&[3, 1, 5], Header::with_resized_axis(&[3, 1, 2], 3, 2).dims());
        assert_eq!(&[2, 1, 2], Header::with_resized_axis(&[3, 1, 2], -1, 0).dims());
        assert_eq!(&[3, 1, 1], Header::with_resized_axis(&[3, 1, 2], -1, -1).dims());
        assert!(Header::with_resized_axis(&[3, 1, 2], -2, 2).is_empty());
    }
}
