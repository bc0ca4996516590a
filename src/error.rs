/// Parsing errors.
///
/// Defines all error types that can occur while reading complex-number text
/// input. Parse errors are recovered locally by the console layer through
/// re-prompting and never reach the solver.
pub mod parse_error;
/// Solver errors.
///
/// Contains all error types that can be raised while validating a system or
/// solving it: shape violations, singular coefficient matrices, and division
/// by a zero complex number.
pub mod solve_error;

pub use parse_error::ParseError;
pub use solve_error::SolveError;
