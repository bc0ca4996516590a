use crate::{
    complex::{self, ComplexNumber},
    matrix::Matrix,
};

/// Computes the determinant of a square complex matrix by cofactor
/// expansion along the first row.
///
/// A 1×1 matrix is its own determinant and a 2×2 matrix uses the `ad − bc`
/// closed form. Larger matrices expand along row 0: the cofactor for column
/// `c` is the entry times the determinant of the minor with row 0 and column
/// `c` deleted, added for even `c` and subtracted for odd `c`.
///
/// Every recursive call builds its minor as a fresh copy, so there is no
/// sharing between sibling calls. The recursion depth is n and the total
/// work is O(n!); callers are expected to keep n small.
///
/// # Example
/// ```
/// use lineq::{complex::ComplexNumber, matrix::Matrix, solver::determinant};
///
/// let c = |re| ComplexNumber::new(re, 0.0);
/// let m = Matrix::new(vec![vec![c(1.0), c(2.0)], vec![c(3.0), c(4.0)]]).unwrap();
/// assert_eq!(determinant(&m), ComplexNumber::new(-2.0, 0.0));
/// ```
#[must_use]
pub fn determinant(matrix: &Matrix) -> ComplexNumber {
    let n = matrix.dimension();

    if n == 1 {
        return matrix.entry(0, 0);
    }

    if n == 2 {
        return matrix.entry(0, 0) * matrix.entry(1, 1) - matrix.entry(0, 1) * matrix.entry(1, 0);
    }

    let mut det = complex::ZERO;
    for column in 0..n {
        let cofactor = matrix.entry(0, column) * determinant(&matrix.minor(0, column));
        if column % 2 == 0 {
            det += cofactor;
        } else {
            det -= cofactor;
        }
    }

    det
}
