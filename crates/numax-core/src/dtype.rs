//! Numeric trait seam for generic array code.
//!
//! Bounds are delegated to `num-traits`; the two aliases here keep
//! signatures short and give the linear algebra layer a single place to
//! require floating-point semantics:
//!
//! - [`Scalar`] — anything storable in an [`NdArray`](crate::array::NdArray).
//! - [`Float`] — the element types the decomposition routines accept
//!   (`f32`, `f64`).

use core::fmt;
use core::iter::Sum;

use num_traits::{FromPrimitive, NumAssign};

/// Base trait for all numeric types storable in an array.
///
/// Deliberately does *not* require floating-point operations so that index
/// arrays (`NdArray<usize>`, produced by `argmin_axis`/`argmax_axis`)
/// remain first-class citizens.
pub trait Scalar:
    Copy + fmt::Debug + fmt::Display + PartialOrd + NumAssign + Sum + Send + Sync + 'static
{
}

impl<T> Scalar for T where
    T: Copy + fmt::Debug + fmt::Display + PartialOrd + NumAssign + Sum + Send + Sync + 'static
{
}

/// Trait for floating-point element types (`f32`, `f64`).
pub trait Float: Scalar + num_traits::Float + FromPrimitive {}

impl<T> Float for T where T: Scalar + num_traits::Float + FromPrimitive {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_generic<T: Scalar>(xs: &[T]) -> T {
        xs.iter().copied().sum()
    }

    fn mean_generic<T: Float>(xs: &[T]) -> T {
        sum_generic(xs) / T::from_usize(xs.len()).unwrap()
    }

    #[test]
    fn test_scalar_admits_floats_and_indices() {
        assert_eq!(sum_generic(&[1.0_f64, 2.0, 3.0]), 6.0);
        assert_eq!(sum_generic(&[1_usize, 2, 3]), 6);
    }

    #[test]
    fn test_float_ops_available() {
        assert!((mean_generic(&[1.0_f32, 2.0, 3.0]) - 2.0).abs() < f32::EPSILON);
        assert_eq!(num_traits::Float::abs(-3.0_f64), 3.0);
    }
}
