/*!
 * Numerical type definitions
 *
 * Boolean reductions and masks work on any element type with a notion of
 * truthiness, defined by [Truthy]. Approximate comparisons use per-type
 * default tolerances, defined by [Tolerance].
 */

use num_traits::Float;

/**
 * A type which can be interpreted as true or false.
 *
 * This is what `all`, `any`, the logical operations and mask based filtering
 * use to decide whether an element counts. Numbers are truthy when non zero,
 * matching the common convention for mask arrays.
 *
 * The boilerplate implementations for primitives are performed with a macro.
 * If a primitive type is missing from this list, please open an issue to add
 * it in.
 */
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! truthy_integral {
    ($T:ty) => {
        impl Truthy for $T {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0
            }
        }
    };
}

macro_rules! truthy_float {
    ($T:ty) => {
        impl Truthy for $T {
            #[inline]
            fn is_truthy(&self) -> bool {
                *self != 0.0
            }
        }
    };
}

truthy_integral!(u8);
truthy_integral!(i8);
truthy_integral!(u16);
truthy_integral!(i16);
truthy_integral!(u32);
truthy_integral!(i32);
truthy_integral!(u64);
truthy_integral!(i64);
truthy_integral!(u128);
truthy_integral!(i128);
truthy_integral!(usize);
truthy_integral!(isize);
truthy_float!(f32);
truthy_float!(f64);

/**
 * A floating point type with default tolerances for approximate comparison.
 *
 * The defaults match the widely used convention of a relative tolerance of
 * `1e-5` and an absolute tolerance of `1e-8`.
 */
pub trait Tolerance: Float {
    fn default_atol() -> Self;
    fn default_rtol() -> Self;
}

macro_rules! tolerance_float {
    ($T:ty) => {
        impl Tolerance for $T {
            #[inline]
            fn default_atol() -> $T {
                1e-8
            }
            #[inline]
            fn default_rtol() -> $T {
                1e-5
            }
        }
    };
}

tolerance_float!(f32);
tolerance_float!(f64);

/**
 * Returns true if the two values are equal within the given absolute and
 * relative tolerances: `|a - b| <= atol + rtol * |b|`.
 */
pub fn close_with<T: Float>(a: T, b: T, atol: T, rtol: T) -> bool {
    (a - b).abs() <= atol + rtol * b.abs()
}

/**
 * Returns true if the two values are equal within the default tolerances
 * for their type.
 */
pub fn close<T: Tolerance>(a: T, b: T) -> bool {
    close_with(a, b, T::default_atol(), T::default_rtol())
}

#[test]
fn close_comparisons() {
    assert!(close(1e10, 1.00001e10));
    assert!(close(1e-8, 1e-9));
    assert!(close(1.0, 1.0));
    assert!(close(1e-8, 0.0));
    assert!(close(1e-10, 1e-20));
    assert!(!close(1e-7, 1e-8));
    assert!(!close(1e10, 1.0001e10));
    assert!(!close(1e-7, 0.0));
    assert!(!close_with(1e-100, 0.0, 0.0, 0.0));
    assert!(!close_with(1e-10, 1e-20, 0.0, f64::default_rtol()));
    assert!(close_with(1e-10, 0.999999e-10, 0.0, f64::default_rtol()));
}

#[test]
fn truthiness() {
    assert!(1i32.is_truthy());
    assert!((-3i64).is_truthy());
    assert!(!0u8.is_truthy());
    assert!(0.5f64.is_truthy());
    assert!(!0.0f32.is_truthy());
    assert!(true.is_truthy());
    assert!(!false.is_truthy());
}
