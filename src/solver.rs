use crate::error::SolveError;

/// Result type used by the solver.
///
/// All solving functions return either a value of type `T` or a
/// `SolveError` describing the failure.
pub type SolveResult<T> = Result<T, SolveError>;

/// Recursive determinant computation.
///
/// Computes determinants of square complex matrices by cofactor expansion
/// along the first row. The cost grows factorially with the dimension, so
/// this is only suitable for small systems.
pub mod determinant;

/// The Cramer's-rule solver.
///
/// Solves `A·X = B` by dividing column-substituted determinants by the
/// determinant of the coefficient matrix. Exposes a singularity tolerance
/// that defaults to the exact-zero check.
pub mod cramer;

pub use cramer::Solver;
pub use determinant::determinant;
