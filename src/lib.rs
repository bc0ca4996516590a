//! # lineq
//!
//! lineq solves linear equation systems with complex coefficients using
//! Cramer's rule, with determinants computed by recursive cofactor
//! expansion. Correctness, not speed, is the target: the determinant costs
//! O(n!) and there is no pivoting, so keep the dimension small.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{matrix::Matrix, solver::Solver};

/// The complex-number value type.
///
/// Declares `ComplexNumber`, an immutable value with real and imaginary
/// parts, together with its arithmetic operators, fallible division, the
/// exact zero check, and the `a + bi` text rendering.
///
/// # Responsibilities
/// - Implements addition, subtraction, multiplication, and negation as pure
///   operator impls.
/// - Guards division behind a zero-divisor check.
/// - Provides the literal `"<real> + <imaginary>i"` display format.
pub mod complex;
/// The interactive console driver.
///
/// Collects a full system from a reader/writer pair: the dimension, the
/// matrix coefficients, and the constant terms, re-prompting on malformed
/// input. Also formats the solution vector for display.
///
/// # Responsibilities
/// - Prompts for and validates every entry before the solver runs.
/// - Recovers from parse errors locally by re-prompting.
/// - Stays generic over I/O so tests can drive it with strings.
pub mod console;
/// Provides unified error types for parsing and solving.
///
/// This module defines all errors that can be raised while reading input or
/// solving a system. Parse errors stay in the console layer; solver errors
/// are terminal for the current solve attempt.
///
/// # Responsibilities
/// - Defines error enums for the parser and the solver.
/// - Attaches offending payloads (tokens, shapes, lengths) for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The square-matrix type.
///
/// Declares `Matrix`, which validates squareness at construction and
/// provides the derived matrices the solver needs: minors and
/// column-substituted copies, both built as fresh allocations.
///
/// # Responsibilities
/// - Rejects empty, ragged, and non-square coefficient rows.
/// - Builds minors for cofactor expansion without sharing storage.
/// - Builds the column-substituted matrices for Cramer's rule.
pub mod matrix;
/// The complex-literal parser.
///
/// Tokenizes and parses text of the form `<real> + <imaginary>i` into a
/// `ComplexNumber`, reporting a `ParseError` for anything outside the
/// grammar.
///
/// # Responsibilities
/// - Lexes numeric literals, signs, and the imaginary unit.
/// - Assembles signed real and imaginary parts into a value.
/// - Reports malformed input with the offending token.
pub mod parser;
/// The determinant and Cramer's-rule solver.
///
/// Computes determinants by recursive cofactor expansion and solves
/// `A·X = B` by dividing column-substituted determinants by `det(A)`,
/// failing on singular matrices.
///
/// # Responsibilities
/// - Implements the recursive determinant with fresh minors per call.
/// - Applies the singularity check (exact zero by default).
/// - Produces the ordered solution vector.
pub mod solver;

/// Solves `A·X = B` from raw rows and returns the solution vector.
///
/// This is the one-call entry point: it validates the rows into a
/// [`Matrix`], builds a [`Solver`] with the given singularity `tolerance`
/// (use `0.0` for the exact-zero check), and runs the Cramer solve.
///
/// # Errors
/// Returns a `SolveError` when the rows are not square, the term count does
/// not match the dimension, or the coefficient matrix is singular.
///
/// # Examples
/// ```
/// use lineq::{complex::ComplexNumber, solve_system};
///
/// let c = |re, im| ComplexNumber::new(re, im);
///
/// // x + y = 3, x - y = 1  =>  x = 2, y = 1
/// let rows = vec![vec![c(1.0, 0.0), c(1.0, 0.0)], vec![c(1.0, 0.0), c(-1.0, 0.0)]];
/// let x = solve_system(rows, &[c(3.0, 0.0), c(1.0, 0.0)], 0.0).unwrap();
/// assert_eq!(x, vec![c(2.0, 0.0), c(1.0, 0.0)]);
///
/// // A singular matrix is rejected.
/// let rows = vec![vec![c(1.0, 0.0), c(2.0, 0.0)], vec![c(2.0, 0.0), c(4.0, 0.0)]];
/// assert!(solve_system(rows, &[c(1.0, 0.0), c(1.0, 0.0)], 0.0).is_err());
/// ```
pub fn solve_system(rows: Vec<Vec<complex::ComplexNumber>>,
                    terms: &[complex::ComplexNumber],
                    tolerance: f64)
                    -> solver::SolveResult<Vec<complex::ComplexNumber>> {
    let matrix = Matrix::new(rows)?;
    Solver::with_tolerance(tolerance).solve(&matrix, terms)
}
