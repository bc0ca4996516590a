use crate::{complex::ComplexNumber, error::SolveError, solver::SolveResult};

/// A square matrix of complex coefficients.
///
/// The constructor is the only way to build a `Matrix` from raw rows, and it
/// rejects empty, ragged, and non-square input, so every `Matrix` in
/// circulation is a true n×n matrix with n ≥ 1. The derived matrices
/// ([`Matrix::minor`], [`Matrix::with_column_replaced`]) are fresh copies
/// that share no storage with the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<ComplexNumber>>,
}

impl Matrix {
    /// Builds a matrix from row-major coefficient rows.
    ///
    /// # Errors
    /// - `SolveError::Empty` when `rows` is empty.
    /// - `SolveError::NotSquare` when any row's length differs from the row
    ///   count. Ragged input is reported with the first offending row's
    ///   length.
    ///
    /// # Example
    /// ```
    /// use lineq::{complex::ComplexNumber, matrix::Matrix};
    ///
    /// let c = |re, im| ComplexNumber::new(re, im);
    /// let m = Matrix::new(vec![vec![c(1.0, 0.0), c(2.0, 0.0)],
    ///                          vec![c(3.0, 0.0), c(4.0, 0.0)]]).unwrap();
    /// assert_eq!(m.dimension(), 2);
    ///
    /// // A 2×3 input is rejected.
    /// assert!(Matrix::new(vec![vec![c(1.0, 0.0); 3], vec![c(1.0, 0.0); 3]]).is_err());
    /// ```
    pub fn new(rows: Vec<Vec<ComplexNumber>>) -> SolveResult<Self> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(SolveError::Empty);
        }

        for row in &rows {
            if row.len() != dimension {
                return Err(SolveError::NotSquare { rows:    dimension,
                                                   columns: row.len(), });
            }
        }

        Ok(Self { rows })
    }

    /// Returns the dimension n of this n×n matrix.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Returns the entry at `(row, column)`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[must_use]
    pub fn entry(&self, row: usize, column: usize) -> ComplexNumber {
        self.rows[row][column]
    }

    /// Builds the minor obtained by deleting `row` and `column`.
    ///
    /// The result is a freshly allocated (n−1)×(n−1) matrix; nothing is
    /// shared with `self`, so sibling recursive calls in the determinant
    /// never alias each other's storage.
    ///
    /// # Panics
    /// Panics if either index is out of bounds, or if the matrix is 1×1 (the
    /// minor would be empty).
    #[must_use]
    pub fn minor(&self, row: usize, column: usize) -> Self {
        assert!(self.dimension() > 1, "a 1x1 matrix has no minors");

        let rows = self.rows
                       .iter()
                       .enumerate()
                       .filter(|(i, _)| *i != row)
                       .map(|(_, r)| {
                           r.iter()
                            .enumerate()
                            .filter(|(j, _)| *j != column)
                            .map(|(_, &value)| value)
                            .collect()
                       })
                       .collect();

        // Deleting one row and one column from a validated square matrix
        // keeps it square, so the constructor's checks are already satisfied.
        Self { rows }
    }

    /// Returns a copy of the matrix with column `index` replaced by `column`.
    ///
    /// This is the substitution step of Cramer's rule: `Ai` is `A` with its
    /// i-th column swapped for the constant terms.
    ///
    /// # Errors
    /// Returns `SolveError::DimensionMismatch` when `column` does not have
    /// exactly n entries.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn with_column_replaced(&self, index: usize, column: &[ComplexNumber]) -> SolveResult<Self> {
        let dimension = self.dimension();
        if column.len() != dimension {
            return Err(SolveError::DimensionMismatch { dimension,
                                                       terms: column.len() });
        }

        let mut rows = self.rows.clone();
        for (row, &value) in rows.iter_mut().zip(column) {
            row[index] = value;
        }

        Ok(Self { rows })
    }
}
