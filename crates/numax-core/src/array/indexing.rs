//! Row and column access for 2-D matrices.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::NdArray;

impl<T: Scalar> NdArray<T> {
    /// Swap two rows of a 2-D matrix in place.
    pub fn swap_rows(&mut self, r1: usize, r2: usize) -> Result<()> {
        if self.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "swap_rows requires a 2-D array",
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        for &r in &[r1, r2] {
            if r >= rows {
                return Err(CoreError::IndexOutOfBounds {
                    index: vec![r],
                    shape: self.shape.clone(),
                });
            }
        }
        if r1 == r2 {
            return Ok(());
        }
        for j in 0..cols {
            self.data.swap(r1 * cols + j, r2 * cols + j);
        }
        Ok(())
    }

    /// Extract row `i` of a 2-D matrix as a 1-D array (copies the data).
    pub fn row(&self, i: usize) -> Result<NdArray<T>> {
        if self.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "row requires a 2-D array",
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        if i >= rows {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![i],
                shape: self.shape.clone(),
            });
        }
        NdArray::from_slice(&self.data[i * cols..(i + 1) * cols], vec![cols])
    }

    /// Extract column `j` of a 2-D matrix as a 1-D array (copies the data).
    pub fn col(&self, j: usize) -> Result<NdArray<T>> {
        if self.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "col requires a 2-D array",
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        if j >= cols {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![j],
                shape: self.shape.clone(),
            });
        }
        let data: Vec<T> = (0..rows).map(|i| self.data[i * cols + j]).collect();
        NdArray::from_vec(data, vec![rows])
    }
}
