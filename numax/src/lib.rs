//! numax: dense n-dimensional arrays and linear algebra.
//!
//! This facade re-exports [`numax_core`]; depend on it for a stable,
//! single-import surface.
//!
//! ```
//! use numax::prelude::*;
//!
//! let a = NdArray::from_vec(vec![4.0, 7.0, 2.0, 6.0], vec![2, 2])?;
//! assert!(a.is_invertible()?);
//! # Ok::<(), CoreError>(())
//! ```

pub use numax_core as core;

pub use numax_core::{CoreError, Float, NdArray, Result, Scalar};

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use numax_core::prelude::*;
}
