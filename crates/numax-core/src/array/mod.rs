//! N-dimensional array type with dynamic shape and contiguous storage.
//!
//! [`NdArray`] owns a flat buffer of elements in row-major (C) order plus
//! the shape describing how that buffer is indexed. It is generic over any
//! type implementing [`Scalar`]; the linear algebra layer narrows this to
//! [`Float`](crate::Float).

mod create;
mod display;
mod indexing;
mod ops;
mod reduce;
mod reshape;

use crate::Scalar;
use crate::error::{CoreError, Result};

/// An N-dimensional array with dynamic shape.
///
/// Data is stored contiguously in row-major (C) order: the last shape
/// dimension varies fastest. The array owns its data; cloning performs a
/// deep copy. The central invariant, enforced by every constructor, is
/// `data.len() == shape.iter().product()`.
#[derive(Debug, Clone)]
pub struct NdArray<T: Scalar> {
    data: Vec<T>,
    shape: Vec<usize>,
    strides: Vec<usize>,
}

impl<T: Scalar> NdArray<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Create an array from a flat data vector and a shape.
    ///
    /// Returns an error if the product of `shape` does not equal
    /// `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: Vec<usize>) -> Result<Self> {
        let numel: usize = shape.iter().product();
        if numel != data.len() {
            return Err(CoreError::InvalidShape {
                shape: shape.clone(),
                reason: "shape product does not match data length",
            });
        }
        let strides = compute_strides(&shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }

    /// Create an array from a flat slice and a shape (copies the data).
    pub fn from_slice(data: &[T], shape: Vec<usize>) -> Result<Self> {
        Self::from_vec(data.to_vec(), shape)
    }

    /// Create a scalar (0-dimensional) array.
    pub fn scalar(value: T) -> Self {
        Self {
            data: vec![value],
            shape: vec![],
            strides: vec![],
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The shape of the array as a slice.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The row-major strides of the array (in number of elements).
    #[inline]
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// The number of dimensions (rank) of the array.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// The total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in storage order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the array and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    /// Compute the flat offset for a multi-dimensional index.
    fn flat_index(&self, index: &[usize]) -> Result<usize> {
        if index.len() != self.ndim() {
            return Err(CoreError::IndexOutOfBounds {
                index: index.to_vec(),
                shape: self.shape.clone(),
            });
        }
        let mut flat = 0;
        for (i, (&idx, &dim)) in index.iter().zip(self.shape.iter()).enumerate() {
            if idx >= dim {
                return Err(CoreError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.clone(),
                });
            }
            flat += idx * self.strides[i];
        }
        Ok(flat)
    }

    /// Get a reference to the element at the given multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Result<&T> {
        let flat = self.flat_index(index)?;
        Ok(&self.data[flat])
    }

    /// Get a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: &[usize]) -> Result<&mut T> {
        let flat = self.flat_index(index)?;
        Ok(&mut self.data[flat])
    }

    /// Set the element at the given multi-dimensional index.
    pub fn set(&mut self, index: &[usize], value: T) -> Result<()> {
        let flat = self.flat_index(index)?;
        self.data[flat] = value;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Iterators
    // ------------------------------------------------------------------

    /// Iterate over all elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to every element, returning a new array.
    pub fn map<F>(&self, f: F) -> NdArray<T>
    where
        F: Fn(T) -> T,
    {
        NdArray {
            data: self.data.iter().map(|&x| f(x)).collect(),
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        }
    }

    /// Apply a function element-wise to two arrays of the same shape.
    pub fn zip_map<F>(&self, other: &NdArray<T>, f: F) -> Result<NdArray<T>>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape != other.shape {
            return Err(CoreError::DimensionMismatch {
                expected: self.shape.clone(),
                got: other.shape.clone(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(NdArray {
            data,
            shape: self.shape.clone(),
            strides: self.strides.clone(),
        })
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }
}

impl<T: Scalar> PartialEq for NdArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

// ======================================================================
// Utility functions
// ======================================================================

/// Compute row-major (C-order) strides from a shape.
pub(crate) fn compute_strides(shape: &[usize]) -> Vec<usize> {
    let ndim = shape.len();
    if ndim == 0 {
        return vec![];
    }
    let mut strides = vec![1usize; ndim];
    for i in (0..ndim - 1).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    /// A 3x2 matrix of measurement-like values, reused across tests.
    fn readings() -> NdArray<f64> {
        NdArray::from_vec(vec![0.5, 1.25, -3.0, 7.5, 0.0, 2.75], vec![3, 2]).unwrap()
    }

    #[test]
    fn test_from_vec_invariant() {
        let a = readings();
        assert_eq!(a.shape(), &[3, 2]);
        assert_eq!(a.strides(), &[2, 1]);
        assert_eq!(a.numel(), 6);
        assert!(!a.is_empty());

        // Too few and too many elements are both rejected.
        assert!(matches!(
            NdArray::from_vec(vec![0.5; 5], vec![3, 2]),
            Err(CoreError::InvalidShape { .. })
        ));
        assert!(matches!(
            NdArray::from_vec(vec![0.5; 7], vec![3, 2]),
            Err(CoreError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_from_slice_copies() {
        let src = [10_usize, 20, 30];
        let a = NdArray::from_slice(&src, vec![3]).unwrap();
        assert_eq!(a.as_slice(), &src);
    }

    #[test]
    fn test_scalar_has_rank_zero() {
        let a = NdArray::scalar(-1.5_f64);
        assert_eq!(a.ndim(), 0);
        assert_eq!(a.strides(), &[] as &[usize]);
        // A rank-0 array is indexed by the empty coordinate list.
        assert_eq!(*a.get(&[]).unwrap(), -1.5);
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut a = readings();
        assert_eq!(*a.get(&[2, 1]).unwrap(), 2.75);
        a.set(&[1, 0], -3.5).unwrap();
        assert_eq!(*a.get(&[1, 0]).unwrap(), -3.5);
        *a.get_mut(&[0, 0]).unwrap() += 0.5;
        assert_eq!(*a.get(&[0, 0]).unwrap(), 1.0);
    }

    #[test]
    fn test_index_errors_carry_context() {
        let a = readings();
        // Out of range on the first coordinate.
        match a.get(&[3, 0]) {
            Err(CoreError::IndexOutOfBounds { index, shape }) => {
                assert_eq!(index, vec![3, 0]);
                assert_eq!(shape, vec![3, 2]);
            }
            other => panic!("expected IndexOutOfBounds, got {other:?}"),
        }
        // Wrong arity is the same error class.
        assert!(a.get(&[1]).is_err());
        assert!(a.get(&[1, 0, 0]).is_err());

        let mut b = readings();
        assert!(b.set(&[0, 2], 0.0).is_err());
    }

    #[test]
    fn test_row_major_offsets() {
        // Last dimension varies fastest.
        let a = NdArray::from_vec((0..24).collect(), vec![2, 3, 4]).unwrap();
        assert_eq!(*a.get(&[0, 0, 1]).unwrap(), 1);
        assert_eq!(*a.get(&[0, 1, 0]).unwrap(), 4);
        assert_eq!(*a.get(&[1, 0, 0]).unwrap(), 12);
        assert_eq!(*a.get(&[1, 2, 3]).unwrap(), 23);
    }

    #[test]
    fn test_compute_strides() {
        assert_eq!(compute_strides(&[2, 3, 4]), vec![12, 4, 1]);
        assert_eq!(compute_strides(&[5]), vec![1]);
        assert_eq!(compute_strides(&[]), Vec::<usize>::new());
    }

    #[test]
    fn test_map_and_apply_agree() {
        let a = readings();
        let doubled = a.map(|x| x * 2.0);

        let mut b = readings();
        b.apply(|x| x * 2.0);

        assert_eq!(doubled, b);
        assert_eq!(*doubled.get(&[0, 1]).unwrap(), 2.5);
    }

    #[test]
    fn test_zip_map_shapes_must_match() {
        let a = readings();
        let ones = NdArray::<f64>::ones(vec![3, 2]);
        let summed = a.zip_map(&ones, |x, y| x + y).unwrap();
        assert_eq!(*summed.get(&[1, 1]).unwrap(), 8.5);

        let wide = NdArray::<f64>::ones(vec![2, 3]);
        assert!(matches!(
            a.zip_map(&wide, |x, y| x + y),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_iter_mut_writes_through() {
        let mut a = readings();
        for x in a.iter_mut() {
            *x = x.abs();
        }
        assert!(a.iter().all(|&x| x >= 0.0));
    }

    #[test]
    fn test_into_vec_is_storage_order() {
        let a = readings();
        assert_eq!(a.into_vec(), vec![0.5, 1.25, -3.0, 7.5, 0.0, 2.75]);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = readings();
        let mut b = a.clone();
        b.set(&[0, 0], 99.0).unwrap();
        assert_eq!(*a.get(&[0, 0]).unwrap(), 0.5);
        assert_ne!(a, b);
    }

    #[test]
    fn test_same_data_different_shape_not_equal() {
        let a = NdArray::from_vec(vec![1, 2, 3, 4], vec![2, 2]).unwrap();
        let b = NdArray::from_vec(vec![1, 2, 3, 4], vec![4]).unwrap();
        assert_ne!(a, b);
    }
}
