//! Shape manipulation: reshape and 2-D transpose.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{NdArray, compute_strides};

impl<T: Scalar> NdArray<T> {
    /// Reshape the array to a new shape without copying data.
    ///
    /// The total number of elements must remain the same.
    pub fn reshape(mut self, new_shape: Vec<usize>) -> Result<Self> {
        let new_numel: usize = new_shape.iter().product();
        if new_numel != self.numel() {
            return Err(CoreError::InvalidShape {
                shape: new_shape,
                reason: "new shape has different number of elements",
            });
        }
        self.strides = compute_strides(&new_shape);
        self.shape = new_shape;
        Ok(self)
    }

    /// Transpose a 2-D matrix. Returns a new array with copied data.
    pub fn transpose(&self) -> Result<Self> {
        if self.ndim() != 2 {
            return Err(CoreError::InvalidArgument {
                reason: "transpose requires a 2-D array",
            });
        }
        let (rows, cols) = (self.shape[0], self.shape[1]);
        let mut data = vec![T::zero(); self.numel()];

        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }

        NdArray::from_vec(data, vec![cols, rows])
    }
}
