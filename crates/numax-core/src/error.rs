use thiserror::Error;

/// All errors returned by `numax-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// A shape specification is inconsistent with the data it describes.
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// An axis index is out of bounds for the array's rank.
    #[error("axis {axis} out of bounds for array with {ndim} dimensions")]
    AxisOutOfBounds { axis: usize, ndim: usize },

    /// A multi-dimensional index is out of bounds, or has the wrong
    /// number of coordinates for the array's rank.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: Vec<usize>,
        shape: Vec<usize>,
    },

    /// A linear-algebra routine was given a matrix that is not square.
    #[error("matrix is not square: shape {shape:?}")]
    NotSquare { shape: Vec<usize> },

    /// A zero pivot was found during elimination; the matrix has no
    /// LU factorization with partial pivoting.
    #[error("matrix is singular")]
    Singular,

    /// The operation is not supported for the given input.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },
}

/// Convenience alias used throughout `numax-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
