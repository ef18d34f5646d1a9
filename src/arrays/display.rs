use crate::arrays::Array;

use std::fmt;

/**
 * Any array of a Displayable type can be formatted. The rank and dimensions
 * are printed on a banner line, then the elements as nested brackets with
 * the last axis laid out horizontally. The formatter's precision is applied
 * to each element, defaulting to 3.
 */
impl<T: fmt::Display + Clone> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D = {}", self.dims().len())?;
        writeln!(f)?;
        if self.is_empty() {
            return write!(f, "[ ]");
        }
        writeln!(f, "{:?}", self.dims())?;
        let mut subscripts = vec![0; self.dims().len()];
        format_axis(self, f, &mut subscripts, 0)
    }
}

// Formats one axis of the array, recursing until the last axis which is
// written as a horizontal run of elements.
fn format_axis<T: fmt::Display + Clone>(
    array: &Array<T>,
    f: &mut fmt::Formatter<'_>,
    subscripts: &mut Vec<i64>,
    axis: usize,
) -> fmt::Result {
    let dims = array.dims();
    let length = dims[axis];
    if axis == dims.len() - 1 {
        write!(f, "[ ")?;
        for i in 0..length {
            subscripts[axis] = i;
            write!(f, "{:.*}", f.precision().unwrap_or(3), array.get(subscripts))?;
            if i < length - 1 {
                write!(f, ", ")?;
            }
        }
        write!(f, " ]")
    } else {
        writeln!(f, "[")?;
        for i in 0..length {
            subscripts[axis] = i;
            format_axis(array, f, subscripts, axis + 1)?;
            if i < length - 1 {
                writeln!(f)?;
            }
        }
        writeln!(f)?;
        write!(f, "]")
    }
}

#[test]
fn formatting_a_matrix() {
    let array = Array::from(&[2, 3], vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(
        "D = 2\n[2, 3]\n[\n[ 1, 2, 3 ]\n[ 4, 5, 6 ]\n]",
        array.to_string()
    );
}

#[test]
fn formatting_an_empty_array() {
    let array: Array<f64> = Array::empty();
    assert_eq!("D = 0\n[ ]", array.to_string());
}
