//! Linear algebra on 2-D arrays.
//!
//! The entry points are free functions ([`det`], [`inv`], [`solve`],
//! [`is_invertible`], [`is_symmetric`]) plus convenience methods on
//! [`NdArray`]. Everything here is backed by [`LuDecomposition`]; callers
//! that need several of these for the same matrix should decompose once
//! and reuse the factors.

mod blas;
mod decomp;

pub use blas::dot;
pub use decomp::LuDecomposition;

use crate::Float;
use crate::array::NdArray;
use crate::error::{CoreError, Result};

/// Determinants with magnitude below this are treated as zero by
/// [`is_invertible`].
const DET_EPSILON: f64 = 1e-12;

/// Determinant of a square matrix.
///
/// A singular matrix is not an error here: its determinant is zero.
/// Non-square input still fails.
pub fn det<T: Float>(a: &NdArray<T>) -> Result<T> {
    match LuDecomposition::decompose(a) {
        Ok(lu) => Ok(lu.det()),
        Err(CoreError::Singular) => Ok(T::zero()),
        Err(e) => Err(e),
    }
}

/// Inverse of a square matrix.
pub fn inv<T: Float>(a: &NdArray<T>) -> Result<NdArray<T>> {
    LuDecomposition::decompose(a)?.inverse()
}

/// Solve the linear system `Ax = b` for a square `A` and 1-D `b`.
pub fn solve<T: Float>(a: &NdArray<T>, b: &NdArray<T>) -> Result<NdArray<T>> {
    LuDecomposition::decompose(a)?.solve(b)
}

/// Whether a square matrix has a determinant of magnitude above `1e-12`.
pub fn is_invertible<T: Float>(a: &NdArray<T>) -> Result<bool> {
    let d = det(a)?;
    Ok(d.abs() > T::from_f64(DET_EPSILON).unwrap())
}

/// Whether a matrix equals its own transpose.
///
/// Requires a 2-D input; a non-square matrix is simply not symmetric.
pub fn is_symmetric<T: Float>(a: &NdArray<T>) -> Result<bool> {
    if a.ndim() != 2 {
        return Err(CoreError::InvalidArgument {
            reason: "is_symmetric requires a 2-D array",
        });
    }
    let (rows, cols) = (a.shape()[0], a.shape()[1]);
    if rows != cols {
        return Ok(false);
    }
    for i in 0..rows {
        for j in (i + 1)..cols {
            if a.as_slice()[i * cols + j] != a.as_slice()[j * cols + i] {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

impl<T: Float> NdArray<T> {
    /// LU-decompose this matrix with partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T>> {
        LuDecomposition::decompose(self)
    }

    /// Determinant. See [`det`].
    pub fn det(&self) -> Result<T> {
        det(self)
    }

    /// Inverse. See [`inv`].
    pub fn inv(&self) -> Result<NdArray<T>> {
        inv(self)
    }

    /// Solve `Ax = b` with `self` as `A`. See [`solve`].
    pub fn solve(&self, b: &NdArray<T>) -> Result<NdArray<T>> {
        solve(self, b)
    }

    /// Whether this matrix is invertible. See [`is_invertible`].
    pub fn is_invertible(&self) -> Result<bool> {
        is_invertible(self)
    }

    /// Whether this matrix is symmetric. See [`is_symmetric`].
    pub fn is_symmetric(&self) -> Result<bool> {
        is_symmetric(self)
    }
}
