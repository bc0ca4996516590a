use crate::{
    complex::ComplexNumber,
    error::SolveError,
    matrix::Matrix,
    solver::{determinant, SolveResult},
};

/// Solves linear systems `A·X = B` by Cramer's rule.
///
/// The solver carries a single piece of state: the singularity `tolerance`
/// applied to the determinant of `A`. The default is `0.0`, which makes the
/// check an exact comparison against zero — a determinant of `1e-300` still
/// counts as non-singular. [`Solver::with_tolerance`] widens the check for
/// callers that prefer to reject near-singular systems.
#[derive(Debug, Clone, Copy)]
pub struct Solver {
    /// Absolute tolerance applied to both determinant components when
    /// deciding singularity.
    pub tolerance: f64,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Creates a solver with the exact-zero singularity check.
    #[must_use]
    pub const fn new() -> Self {
        Self { tolerance: 0.0 }
    }

    /// Creates a solver that treats a determinant as zero when both of its
    /// components are within `tolerance` of zero.
    #[must_use]
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    fn is_singular(&self, det: ComplexNumber) -> bool {
        det.real.abs() <= self.tolerance && det.imaginary.abs() <= self.tolerance
    }

    /// Solves `A·X = B` and returns the solution vector.
    ///
    /// For each unknown `i`, the matrix `Ai` is `A` with column `i` replaced
    /// by `terms`, and `X[i] = det(Ai) / det(A)`. The solution has the same
    /// length and ordering as `terms`. Each solve walks the system once;
    /// there is no retry and no partial result on failure.
    ///
    /// # Errors
    /// - `SolveError::DimensionMismatch` when `terms` does not have exactly
    ///   n entries.
    /// - `SolveError::SingularMatrix` when `det(A)` fails the singularity
    ///   check.
    /// - `SolveError::DivisionByZero` is propagated from the division step,
    ///   though the singularity check fires first for every zero determinant.
    ///
    /// # Example
    /// ```
    /// use lineq::{complex::ComplexNumber, matrix::Matrix, solver::Solver};
    ///
    /// let c = |re, im| ComplexNumber::new(re, im);
    /// // The identity system returns B unchanged.
    /// let a = Matrix::new(vec![vec![c(1.0, 0.0), c(0.0, 0.0)],
    ///                          vec![c(0.0, 0.0), c(1.0, 0.0)]]).unwrap();
    /// let b = [c(5.0, 2.0), c(-1.0, 3.0)];
    ///
    /// let x = Solver::new().solve(&a, &b).unwrap();
    /// assert_eq!(x, vec![c(5.0, 2.0), c(-1.0, 3.0)]);
    /// ```
    pub fn solve(&self,
                 matrix: &Matrix,
                 terms: &[ComplexNumber])
                 -> SolveResult<Vec<ComplexNumber>> {
        let n = matrix.dimension();
        if terms.len() != n {
            return Err(SolveError::DimensionMismatch { dimension: n,
                                                       terms:     terms.len(), });
        }

        let det_a = determinant(matrix);
        if self.is_singular(det_a) {
            return Err(SolveError::SingularMatrix);
        }

        let mut solution = Vec::with_capacity(n);
        for index in 0..n {
            let det_ai = determinant(&matrix.with_column_replaced(index, terms)?);
            solution.push(det_ai.checked_div(det_a)?);
        }

        Ok(solution)
    }
}
