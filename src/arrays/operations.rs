/*!
 * Array operations
 *
 * The algorithms in this module are free functions over [Array]s. They
 * share one control flow: derive the result's [Header](crate::arrays::Header)
 * from the input's, then walk source and destination index spaces in
 * lockstep with [Subscripts] cursors, reading through whatever strides and
 * offset each header carries. This is what makes every operation work
 * identically on owned arrays and on views.
 *
 * Failure falls into two classes, deliberately kept apart. Structurally
 * impossible requests (reshaping to a different element count, appending
 * arrays of different rank, transforming arrays of different dimensions)
 * panic, with `try_` variants returning the error value instead. Degenerate
 * inputs (empty operands, zero length axes, wrapped positions) are
 * normalized or produce an empty result; callers are expected to check
 * [is_empty](Array::is_empty) rather than handle errors on those paths.
 */

use crate::arrays::Array;
use crate::arrays::dimensions::{elements, is_contained_in, linear_index, wrap};
use crate::arrays::errors::{IndexOutOfRangeError, InvalidShapeError, ShapeMismatchError};
use crate::arrays::header::Header;
use crate::arrays::indexing::Subscripts;
use crate::numeric::{Tolerance, Truthy, close_with};

use num_traits::{Float, NumCast, ToPrimitive};

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div, DivAssign,
    Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

/**
 * Copies elements from the source into the destination, in place, wherever
 * the source's shape fits inside the destination's (right-aligned). Does
 * nothing when either array is empty or the source does not fit.
 */
pub fn copy_into<T: Clone>(source: &Array<T>, destination: &mut Array<T>) {
    if source.is_empty() || destination.is_empty() {
        return;
    }
    if !is_contained_in(source.dims(), destination.dims()) {
        return;
    }
    let mut cursor = Subscripts::over(source.dims());
    while cursor.is_valid() {
        destination.set(cursor.subscripts(), source.get(cursor.subscripts()));
        cursor.advance();
    }
}

/**
 * Deep copies an array: the result always owns fresh storage holding every
 * element, whether or not the input was a view.
 */
pub fn clone<T: Clone>(array: &Array<T>) -> Array<T> {
    if array.is_empty() {
        return Array::empty();
    }
    Array::from(array.dims(), array.to_vec())
}

/**
 * Reinterprets an array under a new shape holding the same number of
 * elements.
 *
 * Reshaping to the identical shape returns an alias of the input. A view
 * cannot generally alias a reshaped header, so reshaping a view copies its
 * elements into fresh storage; reshaping an owned array rebinds the header
 * over the same storage without copying.
 *
 * # Panics
 *
 * If the new shape holds a different number of elements.
 */
#[track_caller]
pub fn reshape<T: Clone>(array: &Array<T>, new_dims: &[i64]) -> Array<T> {
    match try_reshape(array, new_dims) {
        Ok(reshaped) => reshaped,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Reshapes, returning the Err variant if the new shape holds a different
 * number of elements.
 */
pub fn try_reshape<T: Clone>(
    array: &Array<T>,
    new_dims: &[i64],
) -> Result<Array<T>, InvalidShapeError> {
    if array.is_empty() {
        return Ok(Array::empty());
    }
    if array.count() != elements(new_dims) {
        return Err(InvalidShapeError::new(
            new_dims.to_vec(),
            elements(new_dims),
            array.count(),
        ));
    }
    if array.dims() == new_dims {
        return Ok(array.share());
    }
    if array.is_view() {
        return Ok(Array::from(new_dims, array.to_vec()));
    }
    Ok(Array::from_parts(Header::of(new_dims), array.storage()))
}

/**
 * Creates an array of the new shape, copying elements in traversal order up
 * to the smaller of the two element counts and filling any remaining cells
 * with the default value. Never aliases the input.
 */
pub fn resize<T: Clone + Default>(array: &Array<T>, new_dims: &[i64]) -> Array<T> {
    if new_dims.is_empty() {
        return Array::empty();
    }
    if array.is_empty() {
        return Array::filled(new_dims, T::default());
    }
    if array.dims() == new_dims {
        return clone(array);
    }
    let header = Header::of(new_dims);
    if header.is_empty() {
        return Array::empty();
    }
    let count = header.count() as usize;
    let mut values = Vec::with_capacity(count);
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() && values.len() < count {
        values.push(array.get(cursor.subscripts()));
        cursor.advance();
    }
    values.resize_with(count, T::default);
    Array::from(new_dims, values)
}

/**
 * Flattens both arrays to one dimension and concatenates them, preserving
 * both operands' traversal order. An empty operand yields a deep copy of
 * the other.
 */
pub fn append<T: Clone>(lhs: &Array<T>, rhs: &Array<T>) -> Array<T> {
    if lhs.is_empty() {
        return clone(rhs);
    }
    if rhs.is_empty() {
        return clone(lhs);
    }
    let mut values = lhs.to_vec();
    values.extend(rhs.to_vec());
    let total = values.len() as i64;
    Array::from(&[total], values)
}

/**
 * Appends the right operand after the left along the given axis. Both
 * operands must have the same rank and equal lengths on every other axis.
 * The axis wraps against the rank. An empty operand yields a deep copy of
 * the other.
 *
 * # Panics
 *
 * If the operands' ranks differ or any non-target axis length differs.
 */
#[track_caller]
pub fn append_along<T: Clone>(lhs: &Array<T>, rhs: &Array<T>, axis: i64) -> Array<T> {
    match try_append_along(lhs, rhs, axis) {
        Ok(appended) => appended,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Appends along an axis, returning the Err variant if the operands' ranks
 * differ or any non-target axis length differs.
 */
pub fn try_append_along<T: Clone>(
    lhs: &Array<T>,
    rhs: &Array<T>,
    axis: i64,
) -> Result<Array<T>, ShapeMismatchError> {
    if lhs.is_empty() {
        return Ok(clone(rhs));
    }
    if rhs.is_empty() {
        return Ok(clone(lhs));
    }
    let target = compatible_axis(lhs, rhs, axis)?;
    let boundary = lhs.dims()[target];
    let header = Header::with_resized_axis(lhs.dims(), rhs.dims()[target], target as i64);
    if header.is_empty() {
        return Ok(Array::empty());
    }
    Ok(interleave(lhs, rhs, &header, target, boundary))
}

/**
 * Flattens both arrays to one dimension and splices the second into the
 * first at the given position. An empty operand yields a deep copy of the
 * other.
 *
 * # Panics
 *
 * If the position lies outside the first array's flattened element range.
 */
#[track_caller]
pub fn insert<T: Clone>(array: &Array<T>, values: &Array<T>, index: i64) -> Array<T> {
    match try_insert(array, values, index) {
        Ok(inserted) => inserted,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Splices into the flattened array, returning the Err variant if the
 * position lies outside the flattened element range.
 */
pub fn try_insert<T: Clone>(
    array: &Array<T>,
    values: &Array<T>,
    index: i64,
) -> Result<Array<T>, IndexOutOfRangeError> {
    if array.is_empty() {
        return Ok(clone(values));
    }
    if values.is_empty() {
        return Ok(clone(array));
    }
    if index < 0 || index > array.count() {
        return Err(IndexOutOfRangeError::new(
            index,
            values.count(),
            array.count(),
        ));
    }
    let flattened = array.to_vec();
    let mut spliced = Vec::with_capacity(flattened.len() + values.count() as usize);
    spliced.extend_from_slice(&flattened[..index as usize]);
    spliced.extend(values.to_vec());
    spliced.extend_from_slice(&flattened[index as usize..]);
    let total = spliced.len() as i64;
    Ok(Array::from(&[total], spliced))
}

/**
 * Inserts the right operand into the left at the given position along the
 * given axis. Both operands must have the same rank and equal lengths on
 * every other axis. The axis wraps against the rank and the position wraps
 * against the target axis length. An empty operand yields a deep copy of
 * the other.
 *
 * # Panics
 *
 * If the operands' ranks differ or any non-target axis length differs.
 */
#[track_caller]
pub fn insert_along<T: Clone>(lhs: &Array<T>, rhs: &Array<T>, index: i64, axis: i64) -> Array<T> {
    match try_insert_along(lhs, rhs, index, axis) {
        Ok(inserted) => inserted,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Inserts along an axis, returning the Err variant if the operands' ranks
 * differ or any non-target axis length differs.
 */
pub fn try_insert_along<T: Clone>(
    lhs: &Array<T>,
    rhs: &Array<T>,
    index: i64,
    axis: i64,
) -> Result<Array<T>, ShapeMismatchError> {
    if lhs.is_empty() {
        return Ok(clone(rhs));
    }
    if rhs.is_empty() {
        return Ok(clone(lhs));
    }
    let target = compatible_axis(lhs, rhs, axis)?;
    let position = wrap(index, lhs.dims()[target]);
    let header = Header::with_resized_axis(lhs.dims(), rhs.dims()[target], target as i64);
    if header.is_empty() {
        return Ok(Array::empty());
    }
    Ok(interleave(lhs, rhs, &header, target, position))
}

/**
 * Flattens the array to one dimension and removes `count` elements starting
 * at the given position.
 *
 * # Panics
 *
 * If the positions to remove extend outside the flattened element range.
 */
#[track_caller]
pub fn remove<T: Clone>(array: &Array<T>, index: i64, count: i64) -> Array<T> {
    match try_remove(array, index, count) {
        Ok(removed) => removed,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Removes from the flattened array, returning the Err variant if the
 * positions to remove extend outside the flattened element range.
 */
pub fn try_remove<T: Clone>(
    array: &Array<T>,
    index: i64,
    count: i64,
) -> Result<Array<T>, IndexOutOfRangeError> {
    if array.is_empty() {
        return Ok(Array::empty());
    }
    if index < 0 || count < 0 || index + count > array.count() {
        return Err(IndexOutOfRangeError::new(index, count, array.count()));
    }
    let flattened = array.to_vec();
    let mut kept = Vec::with_capacity((array.count() - count) as usize);
    kept.extend_from_slice(&flattened[..index as usize]);
    kept.extend_from_slice(&flattened[(index + count) as usize..]);
    if kept.is_empty() {
        return Ok(Array::empty());
    }
    let total = kept.len() as i64;
    Ok(Array::from(&[total], kept))
}

/**
 * Removes `count` positions along the given axis starting at the given
 * position. The axis wraps against the rank, the position wraps against the
 * axis length, and the count is clamped to the positions remaining after
 * the start. Removing every position along the axis yields an empty array.
 */
pub fn remove_along<T: Clone>(array: &Array<T>, index: i64, count: i64, axis: i64) -> Array<T> {
    if array.is_empty() {
        return Array::empty();
    }
    let rank = array.dims().len() as i64;
    let target = wrap(axis, rank) as usize;
    let length = array.dims()[target];
    let position = wrap(index, length);
    let removed = count.clamp(0, length - position);
    let header = Header::with_resized_axis(array.dims(), -removed, target as i64);
    if header.is_empty() {
        return Array::empty();
    }
    let mut values = Vec::with_capacity(header.count() as usize);
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        let coordinate = cursor.subscripts()[target];
        if coordinate < position || coordinate >= position + removed {
            values.push(array.get(cursor.subscripts()));
        }
        cursor.advance();
    }
    Array::from(header.dims(), values)
}

// Validates that two operands agree in rank and in every axis length except
// the target axis, returning the wrapped target axis.
fn compatible_axis<T: Clone>(
    lhs: &Array<T>,
    rhs: &Array<T>,
    axis: i64,
) -> Result<usize, ShapeMismatchError> {
    if lhs.dims().len() != rhs.dims().len() {
        return Err(ShapeMismatchError::new(
            lhs.dims().to_vec(),
            rhs.dims().to_vec(),
        ));
    }
    let target = wrap(axis, lhs.dims().len() as i64) as usize;
    for i in 0..lhs.dims().len() {
        if i != target && lhs.dims()[i] != rhs.dims()[i] {
            return Err(ShapeMismatchError::new(
                lhs.dims().to_vec(),
                rhs.dims().to_vec(),
            ));
        }
    }
    Ok(target)
}

// Walks the grown result shape in row-major order, taking the next element
// from the left operand while the target axis coordinate lies outside
// [position, position + rhs length) and from the right operand inside it.
fn interleave<T: Clone>(
    lhs: &Array<T>,
    rhs: &Array<T>,
    header: &Header,
    target: usize,
    position: i64,
) -> Array<T> {
    let inserted = rhs.dims()[target];
    let mut lhs_cursor = Subscripts::over(lhs.dims());
    let mut rhs_cursor = Subscripts::over(rhs.dims());
    let mut result_cursor = Subscripts::over(header.dims());
    let mut values = Vec::with_capacity(header.count() as usize);
    while result_cursor.is_valid() {
        let coordinate = result_cursor.subscripts()[target];
        if coordinate < position || coordinate >= position + inserted {
            values.push(lhs.get(lhs_cursor.subscripts()));
            lhs_cursor.advance();
        } else {
            values.push(rhs.get(rhs_cursor.subscripts()));
            rhs_cursor.advance();
        }
        result_cursor.advance();
    }
    Array::from(header.dims(), values)
}

/**
 * Applies a function to every element, producing a new array of the same
 * shape holding the results. An empty input produces an empty output.
 *
 * Scalar broadcasting is done by capturing the scalar:
 * `transform(&array, |x| x + 1)`.
 */
pub fn transform<T, U, F>(array: &Array<T>, mut f: F) -> Array<U>
where
    T: Clone,
    F: FnMut(T) -> U,
{
    if array.is_empty() {
        return Array::empty();
    }
    let mut values = Vec::with_capacity(array.count() as usize);
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        values.push(f(array.get(cursor.subscripts())));
        cursor.advance();
    }
    Array::from(array.dims(), values)
}

/**
 * Applies a function to every pair of elements from two arrays of identical
 * dimensions, producing a new array of that shape holding the results.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn transform_with<T, U, V, F>(lhs: &Array<T>, rhs: &Array<U>, f: F) -> Array<V>
where
    T: Clone,
    U: Clone,
    F: FnMut(T, U) -> V,
{
    match try_transform_with(lhs, rhs, f) {
        Ok(transformed) => transformed,
        Err(error) => panic!("{}", error),
    }
}

/**
 * Binary element-wise transformation, returning the Err variant if the
 * arrays' dimensions differ.
 */
pub fn try_transform_with<T, U, V, F>(
    lhs: &Array<T>,
    rhs: &Array<U>,
    mut f: F,
) -> Result<Array<V>, ShapeMismatchError>
where
    T: Clone,
    U: Clone,
    F: FnMut(T, U) -> V,
{
    if lhs.dims() != rhs.dims() {
        return Err(ShapeMismatchError::new(
            lhs.dims().to_vec(),
            rhs.dims().to_vec(),
        ));
    }
    if lhs.is_empty() {
        return Ok(Array::empty());
    }
    let mut values = Vec::with_capacity(lhs.count() as usize);
    let mut cursor = Subscripts::over(lhs.dims());
    while cursor.is_valid() {
        values.push(f(
            lhs.get(cursor.subscripts()),
            rhs.get(cursor.subscripts()),
        ));
        cursor.advance();
    }
    Ok(Array::from(lhs.dims(), values))
}

/**
 * Converts every element to another numeric type, producing a new array of
 * the same shape. Conversion between numeric types is always this explicit
 * element-by-element copy, never a reinterpretation.
 *
 * # Panics
 *
 * If an element cannot be represented in the target type.
 */
#[track_caller]
pub fn convert<T, U>(array: &Array<T>) -> Array<U>
where
    T: ToPrimitive + Clone,
    U: NumCast,
{
    transform(array, |value| match <U as NumCast>::from(value) {
        Some(converted) => converted,
        None => panic!("Unable to represent an element in the target type"),
    })
}

/**
 * Folds every element in traversal order into an accumulator seeded with
 * the first element, returning None when the array is empty.
 *
 * ```
 * use ndarr::arrays::Array;
 * use ndarr::arrays::operations::reduce;
 * let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
 * assert_eq!(Some(21), reduce(&array, |sum: i32, value| sum + value));
 * ```
 */
pub fn reduce<T, A, F>(array: &Array<T>, mut f: F) -> Option<A>
where
    T: Clone,
    A: From<T>,
    F: FnMut(A, T) -> A,
{
    if array.is_empty() {
        return None;
    }
    let mut cursor = Subscripts::over(array.dims());
    let mut accumulator = A::from(array.get(cursor.subscripts()));
    cursor.advance();
    while cursor.is_valid() {
        accumulator = f(accumulator, array.get(cursor.subscripts()));
        cursor.advance();
    }
    Some(accumulator)
}

/**
 * Folds runs of elements along one axis, producing an array with that axis
 * removed (or collapsed to a single position for one dimensional input).
 * Each output cell folds the axis-length many elements of its run, seeded
 * with the first. The axis wraps against the rank.
 *
 * ```
 * use ndarr::arrays::Array;
 * use ndarr::arrays::operations::reduce_along;
 * let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
 * let sums = reduce_along(&array, |sum: i32, value| sum + value, 2);
 * assert_eq!(&[3, 1], sums.dims());
 * assert_eq!(vec![3, 7, 11], sums.to_vec());
 * ```
 */
pub fn reduce_along<T, A, F>(array: &Array<T>, mut f: F, axis: i64) -> Array<A>
where
    T: Clone,
    A: From<T> + Clone,
    F: FnMut(A, T) -> A,
{
    if array.is_empty() {
        return Array::empty();
    }
    let header = Header::without_axis(array.dims(), axis);
    if header.is_empty() {
        return Array::empty();
    }
    let rank = array.dims().len() as i64;
    let run = array.dims()[wrap(axis, rank) as usize];
    let mut source = Subscripts::along(array.dims(), axis);
    let mut values = Vec::with_capacity(header.count() as usize);
    while source.is_valid() && (values.len() as i64) < header.count() {
        let mut accumulator = A::from(array.get(source.subscripts()));
        source.advance();
        for _ in 0..run - 1 {
            accumulator = f(accumulator, array.get(source.subscripts()));
            source.advance();
        }
        values.push(accumulator);
    }
    Array::from(header.dims(), values)
}

/**
 * True when every element is truthy. An empty array is not considered to
 * satisfy anything, so this returns false for one.
 */
pub fn all<T: Truthy + Clone>(array: &Array<T>) -> bool {
    if array.is_empty() {
        return false;
    }
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if !array.get(cursor.subscripts()).is_truthy() {
            return false;
        }
        cursor.advance();
    }
    true
}

/**
 * True when at least one element is truthy. Returns false for an empty
 * array.
 */
pub fn any<T: Truthy + Clone>(array: &Array<T>) -> bool {
    if array.is_empty() {
        return false;
    }
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if array.get(cursor.subscripts()).is_truthy() {
            return true;
        }
        cursor.advance();
    }
    false
}

/**
 * Per-axis [all]: folds truthiness along the given axis, producing an array
 * of booleans with that axis removed.
 */
pub fn all_along<T: Truthy + Clone>(array: &Array<T>, axis: i64) -> Array<bool> {
    reduce_along(
        &transform(array, |value| value.is_truthy()),
        |accumulated, value| accumulated && value,
        axis,
    )
}

/**
 * Per-axis [any]: folds truthiness along the given axis, producing an array
 * of booleans with that axis removed.
 */
pub fn any_along<T: Truthy + Clone>(array: &Array<T>, axis: i64) -> Array<bool> {
    reduce_along(
        &transform(array, |value| value.is_truthy()),
        |accumulated, value| accumulated || value,
        axis,
    )
}

/**
 * Collects the elements passing the predicate into a one dimensional array,
 * preserving traversal order. Produces an empty array when nothing passes.
 */
pub fn filter<T, F>(array: &Array<T>, mut predicate: F) -> Array<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if array.is_empty() {
        return Array::empty();
    }
    let mut values = Vec::new();
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        let value = array.get(cursor.subscripts());
        if predicate(&value) {
            values.push(value);
        }
        cursor.advance();
    }
    if values.is_empty() {
        return Array::empty();
    }
    let total = values.len() as i64;
    Array::from(&[total], values)
}

/**
 * Collects the elements whose corresponding mask entry is truthy into a one
 * dimensional array, preserving traversal order. An empty mask produces an
 * empty result.
 *
 * # Panics
 *
 * If the mask is non-empty with dimensions differing from the array's.
 */
#[track_caller]
pub fn filter_mask<T, M>(array: &Array<T>, mask: &Array<M>) -> Array<T>
where
    T: Clone,
    M: Truthy + Clone,
{
    if array.is_empty() || mask.is_empty() {
        return Array::empty();
    }
    if array.dims() != mask.dims() {
        panic!(
            "{}",
            ShapeMismatchError::new(array.dims().to_vec(), mask.dims().to_vec())
        );
    }
    let mut values = Vec::new();
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if mask.get(cursor.subscripts()).is_truthy() {
            values.push(array.get(cursor.subscripts()));
        }
        cursor.advance();
    }
    if values.is_empty() {
        return Array::empty();
    }
    let total = values.len() as i64;
    Array::from(&[total], values)
}

/**
 * Collects the linear storage indices of the elements passing the
 * predicate, in traversal order, as a one dimensional array. The indices
 * are absolute positions in the backing buffer, so the result can be fed to
 * [gather](Array::gather) to select the matching elements, even from a
 * view. Produces an empty array when nothing passes.
 */
pub fn find<T, F>(array: &Array<T>, mut predicate: F) -> Array<i64>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    if array.is_empty() {
        return Array::empty();
    }
    let mut indices = Vec::new();
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if predicate(&array.get(cursor.subscripts())) {
            indices.push(linear_index(
                array.header().offset(),
                array.header().strides(),
                array.header().dims(),
                cursor.subscripts(),
            ));
        }
        cursor.advance();
    }
    if indices.is_empty() {
        return Array::empty();
    }
    let total = indices.len() as i64;
    Array::from(&[total], indices)
}

/**
 * Collects the linear storage indices of the elements whose corresponding
 * mask entry is truthy, like [find] with a mask instead of a predicate. An
 * empty mask produces an empty result.
 *
 * # Panics
 *
 * If the mask is non-empty with dimensions differing from the array's.
 */
#[track_caller]
pub fn find_mask<T, M>(array: &Array<T>, mask: &Array<M>) -> Array<i64>
where
    T: Clone,
    M: Truthy + Clone,
{
    if array.is_empty() || mask.is_empty() {
        return Array::empty();
    }
    if array.dims() != mask.dims() {
        panic!(
            "{}",
            ShapeMismatchError::new(array.dims().to_vec(), mask.dims().to_vec())
        );
    }
    let mut indices = Vec::new();
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if mask.get(cursor.subscripts()).is_truthy() {
            indices.push(linear_index(
                array.header().offset(),
                array.header().strides(),
                array.header().dims(),
                cursor.subscripts(),
            ));
        }
        cursor.advance();
    }
    if indices.is_empty() {
        return Array::empty();
    }
    let total = indices.len() as i64;
    Array::from(&[total], indices)
}

/**
 * Materializes a new array with the axes permuted according to the order:
 * axis `i` of the result is axis `order[i]` of the input. Order entries
 * wrap against the rank; an order that repeats or drops an axis produces an
 * empty array.
 *
 * ```
 * use ndarr::arrays::Array;
 * use ndarr::arrays::operations::transpose;
 * let array = Array::from(&[3, 1, 2], vec![1, 2, 3, 4, 5, 6]);
 * let transposed = transpose(&array, &[2, 0, 1]);
 * assert_eq!(&[2, 3, 1], transposed.dims());
 * assert_eq!(vec![1, 3, 5, 2, 4, 6], transposed.to_vec());
 * ```
 */
pub fn transpose<T: Clone>(array: &Array<T>, order: &[i64]) -> Array<T> {
    if array.is_empty() {
        return Array::empty();
    }
    let header = Header::reordered(array.dims(), order);
    if header.is_empty() {
        return Array::empty();
    }
    let mut source = Subscripts::ordered(array.dims(), order);
    let mut values = Vec::with_capacity(header.count() as usize);
    while source.is_valid() && (values.len() as i64) < header.count() {
        values.push(array.get(source.subscripts()));
        source.advance();
    }
    Array::from(header.dims(), values)
}

/**
 * Element-wise equality of two arrays of identical dimensions, as an array
 * of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn equal<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialEq<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left == right)
}

/**
 * Element-wise inequality, the complement of [equal].
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn not_equal<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialEq<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left != right)
}

/**
 * Element-wise greater-than comparison as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn greater<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialOrd<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left > right)
}

/**
 * Element-wise greater-or-equal comparison as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn greater_equal<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialOrd<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left >= right)
}

/**
 * Element-wise less-than comparison as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn less<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialOrd<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left < right)
}

/**
 * Element-wise less-or-equal comparison as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn less_equal<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: PartialOrd<U> + Clone,
    U: Clone,
{
    transform_with(lhs, rhs, |left, right| left <= right)
}

/**
 * Element-wise logical and of two arrays' truthiness, as an array of
 * booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn and<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: Truthy + Clone,
    U: Truthy + Clone,
{
    transform_with(lhs, rhs, |left, right| {
        left.is_truthy() && right.is_truthy()
    })
}

/**
 * Element-wise logical or of two arrays' truthiness, as an array of
 * booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn or<T, U>(lhs: &Array<T>, rhs: &Array<U>) -> Array<bool>
where
    T: Truthy + Clone,
    U: Truthy + Clone,
{
    transform_with(lhs, rhs, |left, right| {
        left.is_truthy() || right.is_truthy()
    })
}

/**
 * Element-wise approximate equality within the default tolerances for the
 * element type, as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn close<T: Tolerance + Clone>(lhs: &Array<T>, rhs: &Array<T>) -> Array<bool> {
    close_within(lhs, rhs, T::default_atol(), T::default_rtol())
}

/**
 * Element-wise approximate equality within the given absolute and relative
 * tolerances, as an array of booleans.
 *
 * # Panics
 *
 * If the arrays' dimensions differ.
 */
#[track_caller]
pub fn close_within<T: Float + Clone>(
    lhs: &Array<T>,
    rhs: &Array<T>,
    atol: T,
    rtol: T,
) -> Array<bool> {
    transform_with(lhs, rhs, |left, right| close_with(left, right, atol, rtol))
}

/**
 * True when the two arrays are matchable and the predicate holds for every
 * pair of elements. Two arrays are matchable when both are empty (trivially
 * true) or both have identical dimensions; anything else is false. Short
 * circuits on the first failing pair.
 */
pub fn all_match<T, U, F>(lhs: &Array<T>, rhs: &Array<U>, mut f: F) -> bool
where
    T: Clone,
    U: Clone,
    F: FnMut(T, U) -> bool,
{
    if lhs.is_empty() && rhs.is_empty() {
        return true;
    }
    if lhs.is_empty() || rhs.is_empty() {
        return false;
    }
    if lhs.dims() != rhs.dims() {
        return false;
    }
    let mut cursor = Subscripts::over(lhs.dims());
    while cursor.is_valid() {
        if !f(
            lhs.get(cursor.subscripts()),
            rhs.get(cursor.subscripts()),
        ) {
            return false;
        }
        cursor.advance();
    }
    true
}

/**
 * True when the two arrays have identical dimensions and the predicate
 * holds for at least one pair of elements. Empty or mismatched operands are
 * false. Short circuits on the first passing pair.
 */
pub fn any_match<T, U, F>(lhs: &Array<T>, rhs: &Array<U>, mut f: F) -> bool
where
    T: Clone,
    U: Clone,
    F: FnMut(T, U) -> bool,
{
    if lhs.is_empty() || rhs.is_empty() {
        return false;
    }
    if lhs.dims() != rhs.dims() {
        return false;
    }
    let mut cursor = Subscripts::over(lhs.dims());
    while cursor.is_valid() {
        if f(
            lhs.get(cursor.subscripts()),
            rhs.get(cursor.subscripts()),
        ) {
            return true;
        }
        cursor.advance();
    }
    false
}

/**
 * True when the two arrays are matchable and every pair of elements is
 * equal. The element-wise companion of [equal] that folds to a single
 * answer.
 */
pub fn all_equal<T: PartialEq + Clone>(lhs: &Array<T>, rhs: &Array<T>) -> bool {
    all_match(lhs, rhs, |left, right| left == right)
}

/**
 * True when every element equals the given value. Trivially true for an
 * empty array.
 */
pub fn all_equal_to<T: PartialEq + Clone>(array: &Array<T>, value: T) -> bool {
    if array.is_empty() {
        return true;
    }
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if array.get(cursor.subscripts()) != value {
            return false;
        }
        cursor.advance();
    }
    true
}

/**
 * True when the two arrays are matchable and every pair of elements is
 * approximately equal within the default tolerances.
 */
pub fn all_close<T: Tolerance + Clone>(lhs: &Array<T>, rhs: &Array<T>) -> bool {
    all_close_within(lhs, rhs, T::default_atol(), T::default_rtol())
}

/**
 * True when the two arrays are matchable and every pair of elements is
 * approximately equal within the given tolerances.
 */
pub fn all_close_within<T: Float + Clone>(lhs: &Array<T>, rhs: &Array<T>, atol: T, rtol: T) -> bool {
    all_match(lhs, rhs, |left, right| close_with(left, right, atol, rtol))
}

/**
 * True when every element is approximately equal to the given value within
 * the default tolerances. Trivially true for an empty array.
 */
pub fn all_close_to<T: Tolerance + Clone>(array: &Array<T>, value: T) -> bool {
    if array.is_empty() {
        return true;
    }
    let mut cursor = Subscripts::over(array.dims());
    while cursor.is_valid() {
        if !close_with(
            array.get(cursor.subscripts()),
            value,
            T::default_atol(),
            T::default_rtol(),
        ) {
            return false;
        }
        cursor.advance();
    }
    true
}

macro_rules! float_transform {
    ($name:ident) => {
        #[doc = concat!("Element-wise `", stringify!($name), "` of a floating point array.")]
        pub fn $name<T: Float + Clone>(array: &Array<T>) -> Array<T> {
            transform(array, |value| value.$name())
        }
    };
}

float_transform!(abs);
float_transform!(sqrt);
float_transform!(exp);
float_transform!(ln);
float_transform!(log10);
float_transform!(sin);
float_transform!(cos);
float_transform!(tan);
float_transform!(asin);
float_transform!(acos);
float_transform!(atan);
float_transform!(sinh);
float_transform!(cosh);
float_transform!(tanh);
float_transform!(asinh);
float_transform!(acosh);
float_transform!(atanh);

/**
 * Element-wise `powf` of a floating point array: every element raised to
 * the given exponent.
 */
pub fn powf<T: Float + Clone>(array: &Array<T>, exponent: T) -> Array<T> {
    transform(array, |value| value.powf(exponent))
}

// Binary element-wise operators in the four value/reference combinations.
// The referenced form does the work, the other three delegate to it.
macro_rules! elementwise_operator {
    ($trait:ident, $method:ident, $doc:literal) => {
        #[doc = $doc]
        impl<T, U, O> $trait<&Array<U>> for &Array<T>
        where
            T: $trait<U, Output = O> + Clone,
            U: Clone,
        {
            type Output = Array<O>;
            #[track_caller]
            fn $method(self, rhs: &Array<U>) -> Array<O> {
                transform_with(self, rhs, |left, right| left.$method(right))
            }
        }

        #[doc = $doc]
        impl<T, U, O> $trait<Array<U>> for Array<T>
        where
            T: $trait<U, Output = O> + Clone,
            U: Clone,
        {
            type Output = Array<O>;
            #[track_caller]
            fn $method(self, rhs: Array<U>) -> Array<O> {
                (&self).$method(&rhs)
            }
        }

        #[doc = $doc]
        impl<T, U, O> $trait<&Array<U>> for Array<T>
        where
            T: $trait<U, Output = O> + Clone,
            U: Clone,
        {
            type Output = Array<O>;
            #[track_caller]
            fn $method(self, rhs: &Array<U>) -> Array<O> {
                (&self).$method(rhs)
            }
        }

        #[doc = $doc]
        impl<T, U, O> $trait<Array<U>> for &Array<T>
        where
            T: $trait<U, Output = O> + Clone,
            U: Clone,
        {
            type Output = Array<O>;
            #[track_caller]
            fn $method(self, rhs: Array<U>) -> Array<O> {
                self.$method(&rhs)
            }
        }
    };
}

elementwise_operator!(Add, add, "Element-wise addition for two arrays of identical dimensions.");
elementwise_operator!(Sub, sub, "Element-wise subtraction for two arrays of identical dimensions.");
elementwise_operator!(Mul, mul, "Element-wise multiplication for two arrays of identical dimensions.");
elementwise_operator!(Div, div, "Element-wise division for two arrays of identical dimensions.");
elementwise_operator!(Rem, rem, "Element-wise remainder for two arrays of identical dimensions.");
elementwise_operator!(BitAnd, bitand, "Element-wise bitwise and for two arrays of identical dimensions.");
elementwise_operator!(BitOr, bitor, "Element-wise bitwise or for two arrays of identical dimensions.");
elementwise_operator!(BitXor, bitxor, "Element-wise bitwise xor for two arrays of identical dimensions.");
elementwise_operator!(Shl, shl, "Element-wise left shift for two arrays of identical dimensions.");
elementwise_operator!(Shr, shr, "Element-wise right shift for two arrays of identical dimensions.");

// Compound assignment operators route the transformed result through
// assign, so a view destination receives the new elements in place while an
// owned destination is rebound.
macro_rules! elementwise_assign_operator {
    ($trait:ident, $method:ident, $op_trait:ident, $op_method:ident, $doc:literal) => {
        #[doc = $doc]
        impl<T, U> $trait<&Array<U>> for Array<T>
        where
            T: $op_trait<U, Output = T> + Clone,
            U: Clone,
        {
            #[track_caller]
            fn $method(&mut self, rhs: &Array<U>) {
                let result = transform_with(&*self, rhs, |left, right| left.$op_method(right));
                self.assign(&result);
            }
        }

        #[doc = $doc]
        impl<T, U> $trait<Array<U>> for Array<T>
        where
            T: $op_trait<U, Output = T> + Clone,
            U: Clone,
        {
            #[track_caller]
            fn $method(&mut self, rhs: Array<U>) {
                self.$method(&rhs);
            }
        }
    };
}

elementwise_assign_operator!(AddAssign, add_assign, Add, add, "Element-wise addition in place, writing through when the receiver is a view.");
elementwise_assign_operator!(SubAssign, sub_assign, Sub, sub, "Element-wise subtraction in place, writing through when the receiver is a view.");
elementwise_assign_operator!(MulAssign, mul_assign, Mul, mul, "Element-wise multiplication in place, writing through when the receiver is a view.");
elementwise_assign_operator!(DivAssign, div_assign, Div, div, "Element-wise division in place, writing through when the receiver is a view.");
elementwise_assign_operator!(RemAssign, rem_assign, Rem, rem, "Element-wise remainder in place, writing through when the receiver is a view.");
elementwise_assign_operator!(BitAndAssign, bitand_assign, BitAnd, bitand, "Element-wise bitwise and in place, writing through when the receiver is a view.");
elementwise_assign_operator!(BitOrAssign, bitor_assign, BitOr, bitor, "Element-wise bitwise or in place, writing through when the receiver is a view.");
elementwise_assign_operator!(BitXorAssign, bitxor_assign, BitXor, bitxor, "Element-wise bitwise xor in place, writing through when the receiver is a view.");
elementwise_assign_operator!(ShlAssign, shl_assign, Shl, shl, "Element-wise left shift in place, writing through when the receiver is a view.");
elementwise_assign_operator!(ShrAssign, shr_assign, Shr, shr, "Element-wise right shift in place, writing through when the receiver is a view.");

// Scalar broadcast forms for one concrete scalar type: array op scalar,
// scalar op array, and the compound assignment, for one operator.
macro_rules! scalar_operator {
    ($S:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl<T, O> $trait<$S> for &Array<T>
        where
            T: $trait<$S, Output = O> + Clone,
        {
            type Output = Array<O>;
            fn $method(self, rhs: $S) -> Array<O> {
                transform(self, |value| value.$method(rhs))
            }
        }

        impl<T, O> $trait<$S> for Array<T>
        where
            T: $trait<$S, Output = O> + Clone,
        {
            type Output = Array<O>;
            fn $method(self, rhs: $S) -> Array<O> {
                (&self).$method(rhs)
            }
        }

        impl<T, O> $trait<&Array<T>> for $S
        where
            $S: $trait<T, Output = O>,
            T: Clone,
        {
            type Output = Array<O>;
            fn $method(self, rhs: &Array<T>) -> Array<O> {
                transform(rhs, |value| self.$method(value))
            }
        }

        impl<T, O> $trait<Array<T>> for $S
        where
            $S: $trait<T, Output = O>,
            T: Clone,
        {
            type Output = Array<O>;
            fn $method(self, rhs: Array<T>) -> Array<O> {
                <$S as $trait<&Array<T>>>::$method(self, &rhs)
            }
        }

        impl<T> $assign_trait<$S> for Array<T>
        where
            T: $trait<$S, Output = T> + Clone,
        {
            fn $assign_method(&mut self, rhs: $S) {
                let result = transform(&*self, |value| value.$method(rhs));
                self.assign(&result);
            }
        }
    };
}

// The arithmetic operators broadcast against every primitive numeric
// scalar, the bitwise and shift operators against the integer ones.
macro_rules! scalar_arithmetic {
    ($S:ty) => {
        scalar_operator!($S, Add, add, AddAssign, add_assign);
        scalar_operator!($S, Sub, sub, SubAssign, sub_assign);
        scalar_operator!($S, Mul, mul, MulAssign, mul_assign);
        scalar_operator!($S, Div, div, DivAssign, div_assign);
        scalar_operator!($S, Rem, rem, RemAssign, rem_assign);
    };
}

macro_rules! scalar_bitwise {
    ($S:ty) => {
        scalar_operator!($S, BitAnd, bitand, BitAndAssign, bitand_assign);
        scalar_operator!($S, BitOr, bitor, BitOrAssign, bitor_assign);
        scalar_operator!($S, BitXor, bitxor, BitXorAssign, bitxor_assign);
        scalar_operator!($S, Shl, shl, ShlAssign, shl_assign);
        scalar_operator!($S, Shr, shr, ShrAssign, shr_assign);
    };
}

scalar_arithmetic!(u8);
scalar_arithmetic!(i8);
scalar_arithmetic!(u16);
scalar_arithmetic!(i16);
scalar_arithmetic!(u32);
scalar_arithmetic!(i32);
scalar_arithmetic!(u64);
scalar_arithmetic!(i64);
scalar_arithmetic!(usize);
scalar_arithmetic!(isize);
scalar_arithmetic!(f32);
scalar_arithmetic!(f64);
scalar_bitwise!(u8);
scalar_bitwise!(i8);
scalar_bitwise!(u16);
scalar_bitwise!(i16);
scalar_bitwise!(u32);
scalar_bitwise!(i32);
scalar_bitwise!(u64);
scalar_bitwise!(i64);
scalar_bitwise!(usize);
scalar_bitwise!(isize);

/**
 * Element-wise negation for a referenced array.
 */
impl<T, O> Neg for &Array<T>
where
    T: Neg<Output = O> + Clone,
{
    type Output = Array<O>;
    fn neg(self) -> Array<O> {
        transform(self, |value| -value)
    }
}

/**
 * Element-wise negation for an array.
 */
impl<T, O> Neg for Array<T>
where
    T: Neg<Output = O> + Clone,
{
    type Output = Array<O>;
    fn neg(self) -> Array<O> {
        -&self
    }
}

/**
 * Element-wise not for a referenced array. For booleans this is logical
 * negation and for integers it is bitwise complement.
 */
impl<T, O> Not for &Array<T>
where
    T: Not<Output = O> + Clone,
{
    type Output = Array<O>;
    fn not(self) -> Array<O> {
        transform(self, |value| !value)
    }
}

/**
 * Element-wise not for an array.
 */
impl<T, O> Not for Array<T>
where
    T: Not<Output = O> + Clone,
{
    type Output = Array<O>;
    fn not(self) -> Array<O> {
        !&self
    }
}
