//! Square matrix composed of independently owned row vectors.
//!
//! A matrix of side `n` is a [`DenseVector`] of `n` rows, each itself a
//! `DenseVector<T>` of length `n`. Every row owns its storage, so cloning
//! a matrix deep-copies every row and no row is ever shared between two
//! matrices. Row and column indices are bounds-checked independently:
//! `m[i]` checks the row index against the side, and the returned row
//! checks the column index against its own length.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::dense_vector::DenseVector;
use crate::error::{check_same_size, check_size, Error, Result};
use crate::text::ReadError;
use crate::MAX_MATRIX_SIDE;

/// A square matrix of generic elements, stored row by row.
///
/// Equality delegates to row-wise comparison; matrices of different
/// sides compare unequal rather than erroring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareMatrix<T> {
    /// Row storage; every row has length `rows.len()`.
    rows: DenseVector<DenseVector<T>>,
}

impl<T: Clone + Default> SquareMatrix<T> {
    /// Creates a matrix of side `side` with default-valued elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when `side` is zero or exceeds
    /// [`MAX_MATRIX_SIDE`].
    pub fn new(side: usize) -> Result<Self> {
        Self::with_limit(side, MAX_MATRIX_SIDE)
    }

    /// Like [`new`](Self::new), but checks `side` against a caller-chosen
    /// ceiling instead of [`MAX_MATRIX_SIDE`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when `side` is zero or exceeds
    /// `limit`.
    pub fn with_limit(side: usize, limit: usize) -> Result<Self> {
        check_size(side, limit)?;
        let rows = (0..side)
            .map(|_| DenseVector::new(side))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }
}

impl<T: Clone + Zero + One> SquareMatrix<T> {
    /// Creates the identity matrix of side `side`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] when `side` is zero or exceeds
    /// [`MAX_MATRIX_SIDE`].
    pub fn identity(side: usize) -> Result<Self> {
        check_size(side, MAX_MATRIX_SIDE)?;
        let rows = (0..side).map(|i| {
            DenseVector::collect_unchecked(
                (0..side).map(|j| if i == j { T::one() } else { T::zero() }),
            )
        });
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }
}

impl<T> SquareMatrix<T> {
    /// Builds a matrix from a list of row vectors, taking ownership.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `rows` is empty, and
    /// [`Error::SizeMismatch`] when any row's length differs from the
    /// row count.
    pub fn from_rows(rows: Vec<DenseVector<T>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::InvalidArgument("row list is empty"));
        }
        let side = rows.len();
        for row in &rows {
            check_same_size(side, row.len())?;
        }
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }

    /// Returns the side length (row count = column count).
    #[must_use]
    pub fn side(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at `index`, or `None` if out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&DenseVector<T>> {
        self.rows.get(index)
    }

    /// Returns the row at `index` mutably, or `None` if out of range.
    pub fn row_mut(&mut self, index: usize) -> Option<&mut DenseVector<T>> {
        self.rows.get_mut(index)
    }

    /// Returns the row at `index`.
    ///
    /// Chain with the row's own checked index for an element:
    /// `m.at(i)?.at(j)?`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= side`.
    pub fn at(&self, index: usize) -> Result<&DenseVector<T>> {
        self.rows.at(index)
    }

    /// Returns the row at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] when `index >= side`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut DenseVector<T>> {
        self.rows.at_mut(index)
    }

    /// Returns the element at `(row, col)`, or `None` if either index is
    /// out of range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Returns the element at `(row, col)` mutably, or `None` if either
    /// index is out of range.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }
}

impl<T: Clone + Mul<Output = T>> SquareMatrix<T> {
    /// Scales every element by a scalar, as a new matrix. Never fails.
    #[must_use]
    pub fn scale(&self, value: &T) -> Self {
        Self {
            rows: DenseVector::collect_unchecked(
                self.rows.as_slice().iter().map(|row| row.scale(value)),
            ),
        }
    }
}

impl<T: Clone + Zero + Mul<Output = T>> SquareMatrix<T> {
    /// Matrix-vector product: slot `i` of the result is row `i` ⋅ `vector`.
    ///
    /// The vector's length is checked against the side before any row
    /// work, so a mismatch is reported once, at the matrix level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when `vector.len() != side`.
    pub fn mul_vector(&self, vector: &DenseVector<T>) -> Result<DenseVector<T>> {
        check_same_size(self.side(), vector.len())?;
        let slots = self
            .rows
            .as_slice()
            .iter()
            .map(|row| row.dot(vector))
            .collect::<Result<Vec<_>>>()?;
        Ok(DenseVector::collect_unchecked(slots))
    }

    /// Matrix product: `result[i][j] = Σ_k self[i][k] · other[k][j]`.
    ///
    /// Each entry accumulates from `T::zero()`, the additive identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the sides differ.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        check_same_size(self.side(), other.side())?;
        let n = self.side();
        let rows = (0..n).map(|i| {
            DenseVector::collect_unchecked((0..n).map(|j| {
                (0..n).fold(T::zero(), |acc, k| {
                    acc + self[i][k].clone() * other[k][j].clone()
                })
            }))
        });
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }
}

impl<T: Clone + Add<Output = T>> SquareMatrix<T> {
    /// Elementwise sum of two matrices, as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the sides differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        check_same_size(self.side(), other.side())?;
        let rows = self
            .rows
            .as_slice()
            .iter()
            .zip(other.rows.as_slice())
            .map(|(a, b)| a.checked_add(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }
}

impl<T: Clone + Sub<Output = T>> SquareMatrix<T> {
    /// Elementwise difference of two matrices, as a new matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SizeMismatch`] when the sides differ.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        check_same_size(self.side(), other.side())?;
        let rows = self
            .rows
            .as_slice()
            .iter()
            .zip(other.rows.as_slice())
            .map(|(a, b)| a.checked_sub(b))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rows: DenseVector::collect_unchecked(rows),
        })
    }
}

impl<T> SquareMatrix<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    /// Reads the matrix contents row by row, each row consuming `side`
    /// whitespace-delimited tokens. The side never changes.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Io`] when the stream fails or ends early, and
    /// [`ReadError::Parse`] when a token does not parse as `T`. Rows
    /// before the failure point have already been overwritten.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> std::result::Result<(), ReadError> {
        for row in self.rows.as_mut_slice() {
            row.read_from(reader)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> SquareMatrix<T> {
    /// Writes the matrix row by row in vector format, each row terminated
    /// by a line break. The inverse of [`read_from`](Self::read_from).
    ///
    /// # Errors
    ///
    /// Propagates failures of the underlying writer.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for row in self.rows.as_slice() {
            row.write_to(writer)?;
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows.as_slice() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

impl<T> Index<usize> for SquareMatrix<T> {
    type Output = DenseVector<T>;

    fn index(&self, index: usize) -> &DenseVector<T> {
        &self.rows[index]
    }
}

impl<T> IndexMut<usize> for SquareMatrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut DenseVector<T> {
        &mut self.rows[index]
    }
}

impl<T: Clone + Add<Output = T>> Add for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn add(self, other: Self) -> SquareMatrix<T> {
        assert_eq!(self.side(), other.side(), "matrix side mismatch");
        SquareMatrix {
            rows: DenseVector::collect_unchecked(
                self.rows
                    .as_slice()
                    .iter()
                    .zip(other.rows.as_slice())
                    .map(|(a, b)| a + b),
            ),
        }
    }
}

impl<T: Clone + Sub<Output = T>> Sub for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn sub(self, other: Self) -> SquareMatrix<T> {
        assert_eq!(self.side(), other.side(), "matrix side mismatch");
        SquareMatrix {
            rows: DenseVector::collect_unchecked(
                self.rows
                    .as_slice()
                    .iter()
                    .zip(other.rows.as_slice())
                    .map(|(a, b)| a - b),
            ),
        }
    }
}

impl<T: Clone + Zero + Mul<Output = T>> Mul for &SquareMatrix<T> {
    type Output = SquareMatrix<T>;

    fn mul(self, other: Self) -> SquareMatrix<T> {
        assert_eq!(self.side(), other.side(), "matrix side mismatch");
        let n = self.side();
        let rows = (0..n).map(|i| {
            DenseVector::collect_unchecked((0..n).map(|j| {
                (0..n).fold(T::zero(), |acc, k| {
                    acc + self[i][k].clone() * other[k][j].clone()
                })
            }))
        });
        SquareMatrix {
            rows: DenseVector::collect_unchecked(rows),
        }
    }
}
