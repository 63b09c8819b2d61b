//! Array creation helpers: `zeros`, `ones`, `full`, `eye`, `random`.

use rand::Rng;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform};

use crate::error::{CoreError, Result};
use crate::{Float, Scalar};

use super::{NdArray, compute_strides};

impl<T: Scalar> NdArray<T> {
    /// Create an array filled with zeros.
    ///
    /// ```
    /// # use numax_core::array::NdArray;
    /// let a = NdArray::<f64>::zeros(vec![2, 3]);
    /// assert_eq!(a.shape(), &[2, 3]);
    /// assert!(a.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: Vec<usize>) -> Self {
        let numel: usize = shape.iter().product();
        let strides = compute_strides(&shape);
        Self {
            data: vec![T::zero(); numel],
            shape,
            strides,
        }
    }

    /// Create an array filled with ones.
    pub fn ones(shape: Vec<usize>) -> Self {
        let numel: usize = shape.iter().product();
        let strides = compute_strides(&shape);
        Self {
            data: vec![T::one(); numel],
            shape,
            strides,
        }
    }

    /// Create an array filled with a constant value.
    pub fn full(shape: Vec<usize>, value: T) -> Self {
        let numel: usize = shape.iter().product();
        let strides = compute_strides(&shape);
        Self {
            data: vec![value; numel],
            shape,
            strides,
        }
    }

    /// Create an identity matrix of size `n x n`.
    ///
    /// ```
    /// # use numax_core::array::NdArray;
    /// let eye = NdArray::<f64>::eye(3);
    /// assert_eq!(eye.shape(), &[3, 3]);
    /// assert_eq!(*eye.get(&[1, 1]).unwrap(), 1.0);
    /// assert_eq!(*eye.get(&[0, 1]).unwrap(), 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut data = vec![T::zero(); n * n];
        for i in 0..n {
            data[i * n + i] = T::one();
        }
        let strides = compute_strides(&[n, n]);
        Self {
            data,
            shape: vec![n, n],
            strides,
        }
    }
}

impl<T: Float + SampleUniform> NdArray<T> {
    /// Create an array with elements drawn uniformly from `[lo, hi)`.
    ///
    /// The caller supplies the generator; there is no hidden global state,
    /// so results are reproducible from a seeded RNG.
    ///
    /// Returns an error if `lo >= hi`.
    ///
    /// ```
    /// # use numax_core::array::NdArray;
    /// use rand::SeedableRng;
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let a = NdArray::<f64>::random(vec![3, 3], 0.0, 1.0, &mut rng).unwrap();
    /// assert!(a.iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random<R: Rng + ?Sized>(
        shape: Vec<usize>,
        lo: T,
        hi: T,
        rng: &mut R,
    ) -> Result<Self> {
        if lo >= hi {
            return Err(CoreError::InvalidArgument {
                reason: "random requires lo < hi",
            });
        }
        let numel: usize = shape.iter().product();
        let dist = Uniform::new(lo, hi);
        let data: Vec<T> = (0..numel).map(|_| dist.sample(rng)).collect();
        let strides = compute_strides(&shape);
        Ok(Self {
            data,
            shape,
            strides,
        })
    }
}
