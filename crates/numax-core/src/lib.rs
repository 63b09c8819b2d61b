//! Core n-dimensional array and linear algebra routines for numax.
//!
//! The central type is [`NdArray`], a dense row-major array of any rank
//! backed by a flat `Vec`. On top of it sit elementwise arithmetic, axis
//! reductions, and square-matrix linear algebra built on LU decomposition
//! with partial pivoting.
//!
//! # Example
//!
//! ```
//! use numax_core::prelude::*;
//!
//! let a = NdArray::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], vec![2, 2])?;
//! let d = a.det()?;
//! assert!((d - 7.0).abs() < 1e-10);
//! # Ok::<(), numax_core::CoreError>(())
//! ```

pub mod array;
pub mod dtype;
pub mod error;
pub mod linalg;

pub use array::NdArray;
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};

/// Commonly used items, importable in one line.
pub mod prelude {
    pub use crate::array::NdArray;
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{LuDecomposition, det, dot, inv, is_invertible, is_symmetric, solve};
}
