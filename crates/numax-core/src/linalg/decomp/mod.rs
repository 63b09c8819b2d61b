//! Matrix decompositions.

mod lu;

pub use lu::LuDecomposition;
