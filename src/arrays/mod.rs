/*!
 * N dimensional arrays with strided views.
 *
 * An [Array] pairs a [Header](header::Header) describing its logical shape
 * with reference counted backing storage holding its elements in row-major
 * order. [Slicing](Array::slice) derives a new header over the same storage,
 * so a slice is a **view**: writing through it mutates the parent's elements
 * and is visible to every other array sharing that storage. Deep copies are
 * always explicit, via [operations::clone].
 *
 * Element access wraps: subscripts are normalized into range by floor
 * modulo, so `-1` addresses the last position along an axis, and a partial
 * subscript list addresses the trailing axes. Degenerate shapes (any axis of
 * length zero or less) construct valid but empty arrays rather than failing.
 *
 * Storage is not thread safe by design; arrays are intended for single
 * threaded use and do not implement Send or Sync.
 */

use std::cell::RefCell;
use std::rc::Rc;

pub mod dimensions;
mod display;
pub mod errors;
pub mod header;
pub mod indexing;
pub mod intervals;
pub mod operations;
#[cfg(feature = "serde")]
mod serialization;

pub use header::Header;
pub use intervals::Interval;

use crate::arrays::dimensions::linear_index;
use crate::arrays::errors::InvalidShapeError;
use crate::arrays::indexing::Subscripts;

/**
 * An N dimensional array of elements of type T, with the number of
 * dimensions chosen at runtime.
 *
 * An array either owns its backing storage or shares it with the arrays it
 * was sliced from. The [header](Array::header) records which: sliced views
 * answer true to [is_view](Array::is_view), and
 * [assign](Array::assign) writes through a view into the shared storage
 * instead of rebinding it.
 */
pub struct Array<T> {
    header: Header,
    data: Option<Rc<RefCell<Vec<T>>>>,
}

impl<T> Array<T> {
    /**
     * An array holding no elements.
     */
    pub fn empty() -> Array<T> {
        Array {
            header: Header::default(),
            data: None,
        }
    }

    /**
     * Creates an array of the given shape from elements listed in row-major
     * order (the last axis varies fastest).
     *
     * A shape holding no elements (empty, or any axis of length zero or
     * less) creates an empty array and the data is discarded. Otherwise the
     * data length must match the shape's element count.
     *
     * ```
     * use ndarr::arrays::Array;
     * let array = Array::from(&[3, 1, 2], vec![
     *     1, 2,
     *     3, 4,
     *     5, 6,
     * ]);
     * assert_eq!(2, array.get(&[0, 0, 1]));
     * ```
     */
    #[track_caller]
    pub fn from(dims: &[i64], data: Vec<T>) -> Array<T> {
        match Array::try_from(dims, data) {
            Ok(array) => array,
            Err(error) => panic!("{}", error),
        }
    }

    /**
     * Creates an array of the given shape from elements listed in row-major
     * order, returning the Err variant if the data length does not match the
     * shape's element count.
     */
    pub fn try_from(dims: &[i64], data: Vec<T>) -> Result<Array<T>, InvalidShapeError> {
        let header = Header::of(dims);
        if header.is_empty() {
            return Ok(Array::empty());
        }
        if data.len() as i64 != header.count() {
            return Err(InvalidShapeError::new(
                dims.to_vec(),
                header.count(),
                data.len() as i64,
            ));
        }
        Ok(Array {
            header,
            data: Some(Rc::new(RefCell::new(data))),
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    /**
     * The length of each axis, most significant first.
     */
    pub fn dims(&self) -> &[i64] {
        self.header.dims()
    }

    /**
     * The total number of elements addressable through this array.
     */
    pub fn count(&self) -> i64 {
        self.header.count()
    }

    /**
     * True when this array holds no elements. Operations over degenerate
     * inputs produce empty arrays rather than failing, so emptiness checks
     * are the way to detect "no result".
     */
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    /**
     * True when this array is an interval slice of another array, sharing
     * that array's backing storage.
     */
    pub fn is_view(&self) -> bool {
        self.header.is_sliced()
    }

    /**
     * Writes one element. Subscripts wrap exactly as for
     * [get](Array::get).
     *
     * # Panics
     *
     * If the array is empty.
     */
    #[track_caller]
    pub fn set(&mut self, subscripts: &[i64], value: T) {
        if self.is_empty() {
            panic!("Unable to index with {:?}, the array is empty", subscripts);
        }
        let index = self.storage_index(subscripts);
        let Some(data) = &self.data else {
            panic!("Unable to index with {:?}, the array is empty", subscripts);
        };
        data.borrow_mut()[index] = value;
    }

    /**
     * Returns a new array sharing this array's storage and header. The
     * shallow counterpart of [operations::clone].
     */
    pub fn share(&self) -> Array<T> {
        Array {
            header: self.header.clone(),
            data: self.data.clone(),
        }
    }

    /**
     * Returns a view over the region selected by the intervals, sharing this
     * array's backing storage: reads see the parent's elements and writes
     * mutate them.
     *
     * An empty interval list selects the whole array. Axes beyond the listed
     * intervals are kept in full. A malformed interval (start beyond stop,
     * or a step of zero or less, after wrap-around normalization) produces
     * an empty array.
     *
     * ```
     * use ndarr::arrays::{Array, Interval};
     * let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
     * let view = array.slice(&[Interval::new(0, 2, 2), Interval::at(0), Interval::at(0)]);
     * assert_eq!(&[2, 1, 1], view.dims());
     * assert_eq!(vec![1, 5], view.to_vec());
     * assert!(view.shares_storage_with(&array));
     * ```
     */
    pub fn slice(&self, intervals: &[intervals::Interval]) -> Array<T> {
        if intervals.is_empty() || self.is_empty() {
            return self.share();
        }
        Array {
            header: Header::sliced(&self.header, intervals),
            data: self.data.clone(),
        }
    }

    /**
     * True when both arrays are backed by the same storage, regardless of
     * their headers.
     */
    pub fn shares_storage_with(&self, other: &Array<T>) -> bool {
        match (&self.data, &other.data) {
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    // The flat buffer position a subscript list resolves to.
    fn storage_index(&self, subscripts: &[i64]) -> usize {
        linear_index(
            self.header.offset(),
            self.header.strides(),
            self.header.dims(),
            subscripts,
        ) as usize
    }

    pub(crate) fn storage(&self) -> Option<Rc<RefCell<Vec<T>>>> {
        self.data.clone()
    }

    pub(crate) fn from_parts(header: Header, data: Option<Rc<RefCell<Vec<T>>>>) -> Array<T> {
        Array { header, data }
    }
}

impl<T: Clone> Array<T> {
    /**
     * Creates an array of the given shape with every element set to the
     * given value. A shape holding no elements creates an empty array.
     */
    pub fn filled(dims: &[i64], value: T) -> Array<T> {
        let header = Header::of(dims);
        if header.is_empty() {
            return Array::empty();
        }
        let count = header.count() as usize;
        Array {
            header,
            data: Some(Rc::new(RefCell::new(vec![value; count]))),
        }
    }

    /**
     * Reads one element. Subscripts wrap by floor modulo, so negative and
     * out of range positions are defined rather than errors; fewer
     * subscripts than axes address the trailing axes with the leading axes
     * at position 0, and subscripts beyond the number of axes are dropped
     * from the end.
     *
     * ```
     * use ndarr::arrays::Array;
     * let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
     * assert_eq!(6, array.get(&[-1, -1, -1]));
     * assert_eq!(2, array.get(&[1]));
     * ```
     *
     * # Panics
     *
     * If the array is empty.
     */
    #[track_caller]
    pub fn get(&self, subscripts: &[i64]) -> T {
        if self.is_empty() {
            panic!("Unable to index with {:?}, the array is empty", subscripts);
        }
        let index = self.storage_index(subscripts);
        let Some(data) = &self.data else {
            panic!("Unable to index with {:?}, the array is empty", subscripts);
        };
        data.borrow()[index].clone()
    }

    /**
     * Sets every element addressable through this array to the given value,
     * in place. Broadcasting into a view writes through to the shared
     * storage. Does nothing when the array is empty.
     */
    pub fn fill(&mut self, value: T) {
        if self.is_empty() {
            return;
        }
        let mut cursor = Subscripts::over(self.dims());
        let Some(data) = &self.data else {
            return;
        };
        let mut elements = data.borrow_mut();
        while cursor.is_valid() {
            let index = linear_index(
                self.header.offset(),
                self.header.strides(),
                self.header.dims(),
                cursor.subscripts(),
            ) as usize;
            elements[index] = value.clone();
            cursor.advance();
        }
    }

    /**
     * Assigns another array's elements to this one.
     *
     * When this array is a view whose dimensions match the source, the
     * elements are written through into the shared storage, one by one, so
     * the parent array sees the new values; the view's own header is
     * unchanged. Otherwise this array is rebound to share the source's
     * header and storage, like a plain `=` of a [share](Array::share).
     */
    pub fn assign(&mut self, other: &Array<T>) {
        if self.is_view() && self.dims() == other.dims() {
            if self.is_empty() {
                return;
            }
            let mut cursor = Subscripts::over(other.dims());
            while cursor.is_valid() {
                let value = other.get(cursor.subscripts());
                self.set(cursor.subscripts(), value);
                cursor.advance();
            }
        } else {
            *self = other.share();
        }
    }

    /**
     * Gathers elements by linear position in the backing storage: the result
     * has the shape of the index array and holds, at each subscript, the
     * element of this array's storage at the index recorded there.
     *
     * The indices are absolute positions in the backing buffer, which is
     * exactly what [operations::find] produces, so a find result can be used
     * directly to gather the matching elements even from a view.
     *
     * Returns an empty array when either array is empty.
     *
     * # Panics
     *
     * If an index lies outside the backing storage.
     */
    #[track_caller]
    pub fn gather(&self, indices: &Array<i64>) -> Array<T> {
        if self.is_empty() || indices.is_empty() {
            return Array::empty();
        }
        let Some(data) = &self.data else {
            return Array::empty();
        };
        let elements = data.borrow();
        let mut gathered = Vec::with_capacity(indices.count() as usize);
        let mut cursor = Subscripts::over(indices.dims());
        while cursor.is_valid() {
            let index = indices.get(cursor.subscripts());
            gathered.push(elements[index as usize].clone());
            cursor.advance();
        }
        Array::from(indices.dims(), gathered)
    }

    /**
     * The elements addressable through this array, in row-major traversal
     * order.
     */
    pub fn to_vec(&self) -> Vec<T> {
        if self.is_empty() {
            return Vec::new();
        }
        let mut values = Vec::with_capacity(self.count() as usize);
        let mut cursor = Subscripts::over(self.dims());
        while cursor.is_valid() {
            values.push(self.get(cursor.subscripts()));
            cursor.advance();
        }
        values
    }
}

impl<T> Default for Array<T> {
    fn default() -> Array<T> {
        Array::empty()
    }
}

#[test]
fn degenerate_shapes_construct_empty_arrays() {
    let array: Array<i32> = Array::from(&[3, 0, 2], vec![]);
    assert!(array.is_empty());
    assert_eq!(0, array.count());
    let array: Array<i32> = Array::from(&[], vec![]);
    assert!(array.is_empty());
    let array = Array::filled(&[0], 1.0);
    assert!(array.is_empty());
}

#[test]
#[should_panic]
fn wrong_size() {
    Array::from(&[3, 1, 2], vec![1, 2, 3, 4]);
}

#[test]
#[should_panic]
fn empty_arrays_cannot_be_indexed() {
    let array: Array<i32> = Array::empty();
    array.get(&[0]);
}
