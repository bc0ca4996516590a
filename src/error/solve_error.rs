#[derive(Debug, PartialEq, Eq)]
/// Represents all errors that can occur while validating or solving a
/// linear system.
pub enum SolveError {
    /// The coefficient matrix has a zero determinant, so the system has no
    /// unique solution.
    SingularMatrix,
    /// Attempted to divide by a complex number with zero magnitude.
    DivisionByZero,
    /// The coefficient rows do not form a square matrix.
    NotSquare {
        /// The number of rows supplied.
        rows:    usize,
        /// The length of the first row that does not match it.
        columns: usize,
    },
    /// The coefficient matrix has no rows at all.
    Empty,
    /// The constant-term vector's length does not match the matrix dimension.
    DimensionMismatch {
        /// The matrix dimension n.
        dimension: usize,
        /// The number of constant terms supplied.
        terms:     usize,
    },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SingularMatrix => write!(f,
                                           "The determinant of matrix A is zero. The system has no unique solution."),
            Self::DivisionByZero => write!(f, "Division by a zero complex number."),
            Self::NotSquare { rows, columns } => write!(f,
                                                        "Matrix A is not square: {rows} rows but a row of length {columns}."),
            Self::Empty => write!(f, "Matrix A has no rows; the dimension must be at least 1."),
            Self::DimensionMismatch { dimension, terms } => write!(f,
                                                                   "Vector B has {terms} terms but matrix A has dimension {dimension}."),
        }
    }
}

impl std::error::Error for SolveError {}
