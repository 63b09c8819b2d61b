//! Reductions: whole-array aggregates and per-axis reductions.
//!
//! Axis reductions remove the reduced axis from the shape, so reducing a
//! `[2, 3]` matrix along axis 0 yields a `[3]` vector and reducing a 1-D
//! vector yields a 0-dimensional (scalar) array.

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

use super::NdArray;

impl<T: Scalar> NdArray<T> {
    /// Sum of all elements.
    pub fn sum(&self) -> T {
        self.data.iter().copied().sum()
    }

    /// Product of all elements.
    pub fn product(&self) -> T {
        self.data.iter().copied().fold(T::one(), |acc, x| acc * x)
    }

    /// Minimum element. Returns `None` for empty arrays.
    pub fn min_element(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b < a { b } else { a })
    }

    /// Maximum element. Returns `None` for empty arrays.
    pub fn max_element(&self) -> Option<T> {
        self.data
            .iter()
            .copied()
            .reduce(|a, b| if b > a { b } else { a })
    }

    /// Split the shape around `axis` into `(outer, axis_len, inner, out_shape)`.
    ///
    /// Flat offsets then decompose as `(o * axis_len + k) * inner + i`.
    fn axis_parts(&self, axis: usize) -> Result<(usize, usize, usize, Vec<usize>)> {
        if axis >= self.ndim() {
            return Err(CoreError::AxisOutOfBounds {
                axis,
                ndim: self.ndim(),
            });
        }
        let outer: usize = self.shape[..axis].iter().product();
        let axis_len = self.shape[axis];
        let inner: usize = self.shape[axis + 1..].iter().product();
        let mut out_shape = self.shape.clone();
        out_shape.remove(axis);
        Ok((outer, axis_len, inner, out_shape))
    }

    /// Sum along a given axis, producing an array with that axis removed.
    pub fn sum_axis(&self, axis: usize) -> Result<NdArray<T>> {
        let (outer, axis_len, inner, out_shape) = self.axis_parts(axis)?;
        let mut result = vec![T::zero(); outer * inner];

        for o in 0..outer {
            for k in 0..axis_len {
                let src = (o * axis_len + k) * inner;
                let dst = o * inner;
                for i in 0..inner {
                    result[dst + i] += self.data[src + i];
                }
            }
        }

        NdArray::from_vec(result, out_shape)
    }

    /// Minimum along a given axis.
    pub fn min_axis(&self, axis: usize) -> Result<NdArray<T>> {
        self.extremum_axis(axis, |candidate, best| candidate < best)
    }

    /// Maximum along a given axis.
    pub fn max_axis(&self, axis: usize) -> Result<NdArray<T>> {
        self.extremum_axis(axis, |candidate, best| candidate > best)
    }

    fn extremum_axis<F>(&self, axis: usize, better: F) -> Result<NdArray<T>>
    where
        F: Fn(T, T) -> bool,
    {
        let (outer, axis_len, inner, out_shape) = self.axis_parts(axis)?;
        if axis_len == 0 {
            return Err(CoreError::InvalidArgument {
                reason: "cannot reduce an empty axis",
            });
        }
        let mut result = vec![T::zero(); outer * inner];

        for o in 0..outer {
            for i in 0..inner {
                let mut best = self.data[o * axis_len * inner + i];
                for k in 1..axis_len {
                    let v = self.data[(o * axis_len + k) * inner + i];
                    if better(v, best) {
                        best = v;
                    }
                }
                result[o * inner + i] = best;
            }
        }

        NdArray::from_vec(result, out_shape)
    }

    /// Index of the minimum along a given axis (first occurrence on ties).
    pub fn argmin_axis(&self, axis: usize) -> Result<NdArray<usize>> {
        self.arg_extremum_axis(axis, |candidate, best| candidate < best)
    }

    /// Index of the maximum along a given axis (first occurrence on ties).
    pub fn argmax_axis(&self, axis: usize) -> Result<NdArray<usize>> {
        self.arg_extremum_axis(axis, |candidate, best| candidate > best)
    }

    fn arg_extremum_axis<F>(&self, axis: usize, better: F) -> Result<NdArray<usize>>
    where
        F: Fn(T, T) -> bool,
    {
        let (outer, axis_len, inner, out_shape) = self.axis_parts(axis)?;
        if axis_len == 0 {
            return Err(CoreError::InvalidArgument {
                reason: "cannot reduce an empty axis",
            });
        }
        let mut result = vec![0usize; outer * inner];

        for o in 0..outer {
            for i in 0..inner {
                let mut best = self.data[o * axis_len * inner + i];
                let mut best_k = 0;
                for k in 1..axis_len {
                    let v = self.data[(o * axis_len + k) * inner + i];
                    // Strict comparison keeps the first occurrence on ties.
                    if better(v, best) {
                        best = v;
                        best_k = k;
                    }
                }
                result[o * inner + i] = best_k;
            }
        }

        NdArray::from_vec(result, out_shape)
    }

    /// Reverse the array along one axis, returning a new array.
    pub fn reverse_axis(&self, axis: usize) -> Result<NdArray<T>> {
        let (outer, axis_len, inner, _) = self.axis_parts(axis)?;
        let mut result = self.data.clone();

        for o in 0..outer {
            for k in 0..axis_len {
                let src = (o * axis_len + k) * inner;
                let dst = (o * axis_len + (axis_len - 1 - k)) * inner;
                result[dst..dst + inner].copy_from_slice(&self.data[src..src + inner]);
            }
        }

        NdArray::from_vec(result, self.shape.clone())
    }
}

impl<T: Float> NdArray<T> {
    /// Mean of all elements.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.numel()).unwrap()
    }

    /// Mean along a given axis, producing an array with that axis removed.
    pub fn mean_axis(&self, axis: usize) -> Result<NdArray<T>> {
        let axis_len = *self.shape.get(axis).ok_or(CoreError::AxisOutOfBounds {
            axis,
            ndim: self.ndim(),
        })?;
        let mut out = self.sum_axis(axis)?;
        let inv = T::from_usize(axis_len).unwrap().recip();
        out.scale(inv);
        Ok(out)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn mat23() -> NdArray<f64> {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], vec![2, 3]).unwrap()
    }

    #[test]
    fn test_sum_product() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], vec![4]).unwrap();
        assert_eq!(a.sum(), 10);
        assert_eq!(a.product(), 24);
    }

    #[test]
    fn test_min_max_element() {
        let a = NdArray::from_vec(vec![3, 1, 4, 1, 5, 9], vec![6]).unwrap();
        assert_eq!(a.min_element(), Some(1));
        assert_eq!(a.max_element(), Some(9));
        let empty = NdArray::<i32>::zeros(vec![0]);
        assert_eq!(empty.min_element(), None);
    }

    #[test]
    fn test_mean() {
        let a = NdArray::from_vec(vec![1.0, 2.0, 3.0, 4.0], vec![4]).unwrap();
        assert_eq!(a.mean(), 2.5);
    }

    #[test]
    fn test_sum_axis() {
        let a = mat23();
        let s0 = a.sum_axis(0).unwrap();
        assert_eq!(s0.shape(), &[3]);
        assert_eq!(s0.as_slice(), &[5.0, 7.0, 9.0]);

        let s1 = a.sum_axis(1).unwrap();
        assert_eq!(s1.shape(), &[2]);
        assert_eq!(s1.as_slice(), &[6.0, 15.0]);
    }

    #[test]
    fn test_sum_axis_to_scalar() {
        let v = NdArray::from_vec(vec![1.0, 2.0, 3.0], vec![3]).unwrap();
        let s = v.sum_axis(0).unwrap();
        assert_eq!(s.ndim(), 0);
        assert_eq!(s.as_slice(), &[6.0]);
    }

    #[test]
    fn test_mean_axis() {
        let a = mat23();
        let m0 = a.mean_axis(0).unwrap();
        assert_eq!(m0.as_slice(), &[2.5, 3.5, 4.5]);
        let m1 = a.mean_axis(1).unwrap();
        assert_eq!(m1.as_slice(), &[2.0, 5.0]);
    }

    #[test]
    fn test_min_max_axis() {
        let a = mat23();
        assert_eq!(a.min_axis(0).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(a.max_axis(0).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(a.min_axis(1).unwrap().as_slice(), &[1.0, 4.0]);
        assert_eq!(a.max_axis(1).unwrap().as_slice(), &[3.0, 6.0]);
    }

    #[test]
    fn test_argmin_argmax_axis() {
        let a = NdArray::from_vec(vec![3.0, 9.0, 5.0, 7.0, 2.0, 8.0], vec![2, 3]).unwrap();
        assert_eq!(a.argmax_axis(1).unwrap().as_slice(), &[1, 2]);
        assert_eq!(a.argmin_axis(1).unwrap().as_slice(), &[0, 1]);
        assert_eq!(a.argmax_axis(0).unwrap().as_slice(), &[1, 0, 1]);
    }

    #[test]
    fn test_argmax_tie_keeps_first() {
        let a = NdArray::from_vec(vec![4.0, 1.0, 4.0], vec![3]).unwrap();
        let am = a.argmax_axis(0).unwrap();
        assert_eq!(am.as_slice(), &[0]);
    }

    #[test]
    fn test_reduce_3d() {
        let a = NdArray::from_vec((1..=8).map(f64::from).collect(), vec![2, 2, 2]).unwrap();
        let s1 = a.sum_axis(1).unwrap();
        assert_eq!(s1.shape(), &[2, 2]);
        assert_eq!(s1.as_slice(), &[4.0, 6.0, 12.0, 14.0]);
    }

    #[test]
    fn test_reverse_axis() {
        let a = mat23();
        let r0 = a.reverse_axis(0).unwrap();
        assert_eq!(r0.as_slice(), &[4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
        let r1 = a.reverse_axis(1).unwrap();
        assert_eq!(r1.as_slice(), &[3.0, 2.0, 1.0, 6.0, 5.0, 4.0]);
    }

    #[test]
    fn test_axis_out_of_bounds() {
        let a = mat23();
        assert!(matches!(
            a.sum_axis(2),
            Err(CoreError::AxisOutOfBounds { .. })
        ));
        assert!(a.argmax_axis(5).is_err());
        assert!(a.mean_axis(2).is_err());
        assert!(a.reverse_axis(2).is_err());
    }
}
