//! Element-wise arithmetic for [`NdArray`].
//!
//! Operators (`Add`, `Sub`, scalar `Mul`, `Neg`) panic on shape mismatch
//! like the stdlib's slice indexing does; the `*_checked` methods and
//! [`hadamard`](NdArray::hadamard) return `Result` instead. The in-place
//! mutators (`scale`, `negate`, `raise`) modify the receiver directly.

use core::ops::{Add, Mul, Neg, Sub};

use crate::{Float, Scalar};

use super::NdArray;

// ======================================================================
// NdArray + NdArray  (element-wise, same shape — panics on mismatch)
// ======================================================================

macro_rules! impl_array_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for NdArray<T> {
            type Output = NdArray<T>;

            fn $method(self, rhs: NdArray<T>) -> NdArray<T> {
                assert_eq!(
                    self.shape, rhs.shape,
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape, rhs.shape,
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                NdArray {
                    data,
                    shape: self.shape,
                    strides: self.strides,
                }
            }
        }

        impl<T: Scalar> $trait for &NdArray<T> {
            type Output = NdArray<T>;

            fn $method(self, rhs: &NdArray<T>) -> NdArray<T> {
                assert_eq!(
                    self.shape, rhs.shape,
                    "shape mismatch in element-wise {}: {:?} vs {:?}",
                    stringify!($method), self.shape, rhs.shape,
                );
                let data = self.data.iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect();
                NdArray {
                    data,
                    shape: self.shape.clone(),
                    strides: self.strides.clone(),
                }
            }
        }
    };
}

impl_array_binop!(Add, add, +);
impl_array_binop!(Sub, sub, -);

// ======================================================================
// NdArray * scalar  (broadcast the scalar to every element)
// ======================================================================

impl<T: Scalar> Mul<T> for NdArray<T> {
    type Output = NdArray<T>;

    fn mul(self, rhs: T) -> NdArray<T> {
        let data = self.data.iter().map(|&a| a * rhs).collect();
        NdArray {
            data,
            shape: self.shape,
            strides: self.strides,
        }
    }
}

impl<T: Scalar> Mul<T> for &NdArray<T> {
    type Output = NdArray<T>;

    fn mul(self, rhs: T) -> NdArray<T> {
        let data = self.data.iter().map(|&a| a * rhs).collect();
        NdArray {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }
}

// ======================================================================
// Negation
// ======================================================================

impl<T: Float> Neg for NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        let data = self.data.iter().map(|&a| -a).collect();
        NdArray {
            data,
            shape: self.shape,
            strides: self.strides,
        }
    }
}

impl<T: Float> Neg for &NdArray<T> {
    type Output = NdArray<T>;

    fn neg(self) -> NdArray<T> {
        let data = self.data.iter().map(|&a| -a).collect();
        NdArray {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }
}

// ======================================================================
// Fallible (Result-returning) arithmetic for non-panicking callers
// ======================================================================

impl<T: Scalar> NdArray<T> {
    /// Element-wise addition, returning `Err` on shape mismatch.
    pub fn add_checked(&self, other: &NdArray<T>) -> crate::Result<NdArray<T>> {
        self.zip_map(other, |a, b| a + b)
    }

    /// Element-wise subtraction, returning `Err` on shape mismatch.
    pub fn sub_checked(&self, other: &NdArray<T>) -> crate::Result<NdArray<T>> {
        self.zip_map(other, |a, b| a - b)
    }

    /// Hadamard (element-wise) product, returning `Err` on shape mismatch.
    ///
    /// Not to be confused with [`matmul`](NdArray::matmul), the matrix
    /// product.
    pub fn hadamard(&self, other: &NdArray<T>) -> crate::Result<NdArray<T>> {
        self.zip_map(other, |a, b| a * b)
    }

    /// Multiply every element by `alpha` in place.
    pub fn scale(&mut self, alpha: T) {
        for x in &mut self.data {
            *x *= alpha;
        }
    }
}

impl<T: Float> NdArray<T> {
    /// Negate every element in place.
    pub fn negate(&mut self) {
        for x in &mut self.data {
            *x = -*x;
        }
    }

    /// Raise every element to `power` in place.
    pub fn raise(&mut self, power: T) {
        for x in &mut self.data {
            *x = x.powf(power);
        }
    }
}
