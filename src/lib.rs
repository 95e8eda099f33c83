//! # dynalg
//!
//! Dense vector and square matrix primitives with strict size checking.
//!
//! This crate provides:
//! - [`DenseVector`]: an owning, fixed-length, generic vector with
//!   elementwise and scalar arithmetic, dot product, and text I/O
//! - [`SquareMatrix`]: a square matrix composed of independently owned
//!   row vectors, with matrix-scalar, matrix-vector, and matrix-matrix
//!   arithmetic
//! - A closed [`Error`] taxonomy so callers can branch on the exact
//!   violated precondition
//!
//! Every size- or shape-sensitive operation checks its preconditions up
//! front and fails without touching the receiver. Elements are generic;
//! arithmetic is whatever the element type itself provides.
//!
//! ## Quick Start
//!
//! ```rust
//! use dynalg::{DenseVector, SquareMatrix};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let a = DenseVector::from_slice(&[4, 0, 1, -1])?;
//! let b = DenseVector::from_slice(&[6, 9, -6, 5])?;
//! assert_eq!(a.dot(&b)?, 13);
//!
//! let m: SquareMatrix<i32> = SquareMatrix::identity(3)?;
//! assert_eq!(m.mul_vector(&DenseVector::from_slice(&[7, 8, 9])?)?,
//!            DenseVector::from_slice(&[7, 8, 9])?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod dense_vector;
pub mod error;
pub mod square_matrix;
pub mod text;

pub use dense_vector::DenseVector;
pub use error::{Error, Result};
pub use square_matrix::SquareMatrix;
pub use text::ReadError;

/// Maximum element count accepted by [`DenseVector::new`].
///
/// A sanity ceiling rather than a practical target. Callers that need a
/// different bound pass their own to [`DenseVector::with_limit`].
pub const MAX_VECTOR_LEN: usize = 100_000_000;

/// Maximum side length accepted by [`SquareMatrix::new`].
///
/// Much smaller than [`MAX_VECTOR_LEN`]: a matrix of side `n` owns `n²`
/// elements. Overridable per call via [`SquareMatrix::with_limit`].
pub const MAX_MATRIX_SIDE: usize = 10_000;

#[cfg(test)]
mod proptests;
