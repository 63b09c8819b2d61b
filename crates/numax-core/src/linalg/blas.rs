//! Basic dense products: dot product and matrix multiplication.

use crate::Scalar;
use crate::array::NdArray;
use crate::error::{CoreError, Result};

/// Inner product of two 1-D arrays of equal length.
pub fn dot<T: Scalar>(a: &NdArray<T>, b: &NdArray<T>) -> Result<T> {
    if a.ndim() != 1 || b.ndim() != 1 {
        return Err(CoreError::InvalidArgument {
            reason: "dot requires 1-D arrays",
        });
    }
    if a.numel() != b.numel() {
        return Err(CoreError::DimensionMismatch {
            expected: a.shape().to_vec(),
            got: b.shape().to_vec(),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

impl<T: Scalar> NdArray<T> {
    /// Inner product with another 1-D array.
    pub fn dot(&self, other: &NdArray<T>) -> Result<T> {
        dot(self, other)
    }

    /// Matrix product of two 2-D arrays.
    ///
    /// `self` must be `[m, k]` and `other` `[k, n]`; the result is `[m, n]`.
    pub fn matmul(&self, other: &NdArray<T>) -> Result<NdArray<T>> {
        if self.ndim() != 2 || other.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "matmul requires 2-D arrays",
            });
        }
        let (m, k) = (self.shape()[0], self.shape()[1]);
        let (k2, n) = (other.shape()[0], other.shape()[1]);
        if k != k2 {
            return Err(CoreError::DimensionMismatch {
                expected: vec![k, n],
                got: other.shape().to_vec(),
            });
        }

        let a = self.as_slice();
        let b = other.as_slice();
        let mut out = vec![T::zero(); m * n];

        // ikj loop order keeps the inner loop contiguous in both `b` and
        // `out`.
        for i in 0..m {
            for p in 0..k {
                let a_ip = a[i * k + p];
                for j in 0..n {
                    out[i * n + j] += a_ip * b[p * n + j];
                }
            }
        }

        NdArray::from_vec(out, vec![m, n])
    }
}
