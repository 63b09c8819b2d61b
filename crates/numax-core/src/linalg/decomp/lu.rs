//! LU decomposition with partial pivoting.
//!
//! Decomposes a square matrix `A` into `PA = LU` where:
//! - `P` is a permutation matrix (stored as a pivot vector)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! The pivot at each elimination step is the largest-magnitude candidate
//! in the remaining column; only an *exactly* zero pivot is treated as
//! singular. Near-zero pivots are accepted and yield large but finite
//! factors, so results for near-singular inputs are numerically degraded
//! rather than errors.

use crate::Float;
use crate::array::NdArray;
use crate::error::{CoreError, Result};

/// Result of an LU decomposition with partial pivoting.
///
/// Owns fresh `L` and `U` matrices (never views into the input), the pivot
/// permutation, and the number of row swaps performed. The input matrix is
/// never mutated: elimination and row swaps happen in a private working
/// copy. `pivots[i]` is the original row index that ended up at row `i` of
/// the permuted matrix, so `(P·A)[i] == A[pivots[i]]`.
#[derive(Debug, Clone)]
pub struct LuDecomposition<T: Float> {
    l: NdArray<T>,
    u: NdArray<T>,
    pivots: Vec<usize>,
    swaps: usize,
}

/// Check that `a` is a square matrix and return its order.
pub(crate) fn check_square<T: Float>(a: &NdArray<T>) -> Result<usize> {
    let shape = a.shape();
    if shape.len() != 2 || shape[0] != shape[1] {
        return Err(CoreError::NotSquare {
            shape: shape.to_vec(),
        });
    }
    Ok(shape[0])
}

impl<T: Float> LuDecomposition<T> {
    /// Perform LU decomposition with partial pivoting on a square matrix.
    ///
    /// Fails with [`CoreError::NotSquare`] for inputs that are not 2-D with
    /// equal sides, and with [`CoreError::Singular`] when the best
    /// remaining pivot in some column is exactly zero.
    ///
    /// ```
    /// # use numax_core::array::NdArray;
    /// # use numax_core::linalg::LuDecomposition;
    /// let a = NdArray::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert!((lu.det() - 7.0).abs() < 1e-10);
    /// ```
    pub fn decompose(a: &NdArray<T>) -> Result<Self> {
        let n = check_square(a)?;

        // Private working copy; the caller's matrix is untouched.
        let mut work: Vec<T> = a.as_slice().to_vec();
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut swaps = 0usize;

        for i in 0..n {
            // Pivot scan over the current (partially eliminated) column.
            // Strict `>` on an ascending scan keeps the first occurrence
            // on ties.
            let mut max_row = i;
            let mut max_val = work[i * n + i].abs();
            for r in (i + 1)..n {
                let v = work[r * n + i].abs();
                if v > max_val {
                    max_val = v;
                    max_row = r;
                }
            }

            // Exact-zero test only: no tolerance, no perturbation.
            if max_val == T::zero() {
                return Err(CoreError::Singular);
            }

            if max_row != i {
                for j in 0..n {
                    work.swap(i * n + j, max_row * n + j);
                }
                pivots.swap(i, max_row);
                swaps += 1;
            }

            // Eliminate below the pivot, storing the multipliers where the
            // eliminated entries were (Doolittle, packed in `work`).
            let pivot = work[i * n + i];
            for r in (i + 1)..n {
                let factor = work[r * n + i] / pivot;
                work[r * n + i] = factor;
                for j in (i + 1)..n {
                    let u_ij = work[i * n + j];
                    work[r * n + j] = work[r * n + j] - factor * u_ij;
                }
            }
        }

        // Unpack into independent factors.
        let mut l = vec![T::zero(); n * n];
        let mut u = vec![T::zero(); n * n];
        for i in 0..n {
            l[i * n + i] = T::one();
            for j in 0..i {
                l[i * n + j] = work[i * n + j];
            }
            for j in i..n {
                u[i * n + j] = work[i * n + j];
            }
        }

        // Infallible: both buffers are n*n by construction.
        let l = NdArray::from_vec(l, vec![n, n]).unwrap();
        let u = NdArray::from_vec(u, vec![n, n]).unwrap();

        Ok(Self {
            l,
            u,
            pivots,
            swaps,
        })
    }

    /// The matrix order `n`.
    #[inline]
    pub fn order(&self) -> usize {
        self.pivots.len()
    }

    /// The unit lower-triangular factor `L`.
    pub fn l(&self) -> &NdArray<T> {
        &self.l
    }

    /// The upper-triangular factor `U`.
    pub fn u(&self) -> &NdArray<T> {
        &self.u
    }

    /// The pivot vector: row `i` of the permuted matrix is row
    /// `pivots()[i]` of the original.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// The number of row swaps performed during pivoting.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// The permutation matrix `P` as a dense array.
    pub fn p(&self) -> NdArray<T> {
        let n = self.order();
        let mut data = vec![T::zero(); n * n];
        for (i, &pi) in self.pivots.iter().enumerate() {
            data[i * n + pi] = T::one();
        }
        NdArray::from_vec(data, vec![n, n]).unwrap()
    }

    /// Consume the decomposition, returning `(L, U, pivots, swaps)`.
    pub fn into_parts(self) -> (NdArray<T>, NdArray<T>, Vec<usize>, usize) {
        (self.l, self.u, self.pivots, self.swaps)
    }

    /// Compute the determinant of the decomposed matrix.
    ///
    /// `det(A) = (-1)^swaps * product(diag(U))`. A diagonal entry with
    /// magnitude below `1e-12` short-circuits the product to zero.
    pub fn det(&self) -> T {
        let n = self.order();
        let u = self.u.as_slice();
        let near_zero = T::from_f64(1e-12).unwrap();

        let mut det = T::one();
        for i in 0..n {
            let diag = u[i * n + i];
            if diag.abs() < near_zero {
                return T::zero();
            }
            det = det * diag;
        }

        if self.swaps % 2 != 0 { -det } else { det }
    }

    /// Solve the linear system `Ax = b` using the precomputed factors.
    ///
    /// `b` must be a 1-D array of length `n`. Applies the pivot
    /// permutation to `b`, then runs forward substitution through `L`
    /// (unit diagonal) and back substitution through `U`. Division by
    /// `U`'s diagonal is unguarded beyond the singularity check performed
    /// during decomposition.
    pub fn solve(&self, b: &NdArray<T>) -> Result<NdArray<T>> {
        if b.ndim() != 1 {
            return Err(CoreError::InvalidArgument {
                reason: "solve: `b` must be a 1-D array",
            });
        }
        let n = self.order();
        if b.numel() != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n],
                got: b.shape().to_vec(),
            });
        }

        let b_data = b.as_slice();
        let l = self.l.as_slice();
        let u = self.u.as_slice();

        // Apply the permutation: (Pb)[i] = b[pivots[i]].
        let mut x: Vec<T> = vec![T::zero(); n];
        for (i, &pi) in self.pivots.iter().enumerate() {
            x[i] = b_data[pi];
        }

        // Forward substitution: Ly = Pb (unit diagonal, no division).
        for i in 1..n {
            for j in 0..i {
                let lij_xj = l[i * n + j] * x[j];
                x[i] = x[i] - lij_xj;
            }
        }

        // Back substitution: Ux = y.
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij_xj = u[i * n + j] * x[j];
                x[i] = x[i] - uij_xj;
            }
            x[i] = x[i] / u[i * n + i];
        }

        NdArray::from_vec(x, vec![n])
    }

    /// Compute the inverse of the decomposed matrix.
    ///
    /// Solves `AX = I` column by column via [`solve`](Self::solve).
    pub fn inverse(&self) -> Result<NdArray<T>> {
        let n = self.order();
        let mut inv = vec![T::zero(); n * n];

        for col in 0..n {
            let mut e = vec![T::zero(); n];
            e[col] = T::one();
            let x = self.solve(&NdArray::from_vec(e, vec![n])?)?;
            let x = x.as_slice();
            for row in 0..n {
                inv[row * n + col] = x[row];
            }
        }

        NdArray::from_vec(inv, vec![n, n])
    }
}
