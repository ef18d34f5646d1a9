use std::error::Error;
use std::fmt;

/**
 * An error indicating that a shape and an element count disagree: either an
 * array was constructed from data whose length does not match the shape, or
 * a reshape asked for a shape holding a different number of elements.
 */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct InvalidShapeError {
    dims: Vec<i64>,
    expected: i64,
    provided: i64,
}

impl InvalidShapeError {
    pub(crate) fn new(dims: Vec<i64>, expected: i64, provided: i64) -> InvalidShapeError {
        InvalidShapeError {
            dims,
            expected,
            provided,
        }
    }
}

impl Error for InvalidShapeError {}

impl fmt::Display for InvalidShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dimensions {:?} hold {} elements but {} elements were provided",
            &self.dims, self.expected, self.provided
        )
    }
}

/**
 * An error indicating two structurally incompatible operands: a binary
 * element-wise operation over arrays with different dimensions, or an
 * append/insert whose operands disagree in rank or in the length of an axis
 * other than the target one.
 */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ShapeMismatchError {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl ShapeMismatchError {
    pub(crate) fn new(left: Vec<i64>, right: Vec<i64>) -> ShapeMismatchError {
        ShapeMismatchError { left, right }
    }
}

impl Error for ShapeMismatchError {}

impl fmt::Display for ShapeMismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dimensions of left and right arrays are not compatible: (left: {:?}, right: {:?})",
            &self.left, &self.right
        )
    }
}

/**
 * An error indicating that a flattened splice position lies outside an
 * array's element count, from the position based forms of insert and
 * remove.
 */
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct IndexOutOfRangeError {
    index: i64,
    count: i64,
    available: i64,
}

impl IndexOutOfRangeError {
    pub(crate) fn new(index: i64, count: i64, available: i64) -> IndexOutOfRangeError {
        IndexOutOfRangeError {
            index,
            count,
            available,
        }
    }
}

impl Error for IndexOutOfRangeError {}

impl fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {} with count {} is not in the range of the {} flattened elements",
            self.index, self.count, self.available
        )
    }
}

#[test]
fn test_sync() {
    fn assert_sync<T: Sync>() {}
    assert_sync::<InvalidShapeError>();
    assert_sync::<ShapeMismatchError>();
    assert_sync::<IndexOutOfRangeError>();
}

#[test]
fn test_send() {
    fn assert_send<T: Send>() {}
    assert_send::<InvalidShapeError>();
    assert_send::<ShapeMismatchError>();
    assert_send::<IndexOutOfRangeError>();
}
