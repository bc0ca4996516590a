use std::io::Cursor;

use lineq::{
    complex::{ComplexNumber, ONE, ZERO},
    console::read_system,
    error::{ParseError, SolveError},
    matrix::Matrix,
    parser::parse_complex,
    solve_system,
    solver::{determinant, Solver},
};

fn c(real: f64, imaginary: f64) -> ComplexNumber {
    ComplexNumber::new(real, imaginary)
}

fn square(rows: Vec<Vec<ComplexNumber>>) -> Matrix {
    Matrix::new(rows).expect("rows should form a square matrix")
}

fn assert_approx(left: ComplexNumber, right: ComplexNumber) {
    let delta = 1e-10;
    assert!((left.real - right.real).abs() < delta
            && (left.imaginary - right.imaginary).abs() < delta,
            "{left} is not approximately {right}");
}

#[test]
fn add_then_subtract_round_trips() {
    let a = c(1.25, -7.5);
    let b = c(-3.0, 0.125);

    assert_approx(a + b - b, a);
    assert_approx(b + a - a, b);
}

#[test]
fn divide_then_multiply_is_identity() {
    let a = c(3.0, -2.0);
    let b = c(0.5, 4.0);

    let quotient = a.checked_div(b).unwrap();
    assert_approx(quotient * b, a);
}

#[test]
fn division_by_zero_magnitude_fails() {
    let a = c(3.0, -2.0);

    assert_eq!(a.checked_div(ZERO).unwrap_err(), SolveError::DivisionByZero);
    assert_eq!(a.checked_div(c(0.0, 0.0)).unwrap_err(), SolveError::DivisionByZero);
}

#[test]
fn display_is_the_literal_two_part_form() {
    assert_eq!(c(3.0, -2.0).to_string(), "3 + -2i");
    assert_eq!(c(-1.5, 0.0).to_string(), "-1.5 + 0i");
    assert_eq!(ZERO.to_string(), "0 + 0i");
}

#[test]
fn determinant_of_1x1_is_the_entry() {
    let m = square(vec![vec![c(3.0, 0.0)]]);
    assert_eq!(determinant(&m), c(3.0, 0.0));
}

#[test]
fn determinant_of_2x2_is_ad_minus_bc() {
    let m = square(vec![vec![c(1.0, 0.0), c(2.0, 0.0)],
                        vec![c(3.0, 0.0), c(4.0, 0.0)]]);
    assert_eq!(determinant(&m), c(-2.0, 0.0));
}

#[test]
fn determinant_of_3x3_identity_is_one() {
    let m = square(vec![vec![ONE, ZERO, ZERO],
                        vec![ZERO, ONE, ZERO],
                        vec![ZERO, ZERO, ONE]]);
    assert_eq!(determinant(&m), ONE);
}

#[test]
fn determinant_with_complex_entries() {
    // det([[i, -1], [1, i]]) = i*i - (-1)*1 = 0
    let m = square(vec![vec![c(0.0, 1.0), c(-1.0, 0.0)],
                        vec![c(1.0, 0.0), c(0.0, 1.0)]]);
    assert!(determinant(&m).is_zero());
}

#[test]
fn identity_system_returns_the_constant_terms_exactly() {
    let a = square(vec![vec![ONE, ZERO], vec![ZERO, ONE]]);
    let b = [c(5.0, 2.0), c(-1.0, 3.0)];

    let x = Solver::new().solve(&a, &b).unwrap();
    assert_eq!(x, vec![c(5.0, 2.0), c(-1.0, 3.0)]);
}

#[test]
fn three_by_three_real_system() {
    // 2x = 2, 2y = 4, 2z = 6
    let a = square(vec![vec![c(2.0, 0.0), ZERO, ZERO],
                        vec![ZERO, c(2.0, 0.0), ZERO],
                        vec![ZERO, ZERO, c(2.0, 0.0)]]);
    let b = [c(2.0, 0.0), c(4.0, 0.0), c(6.0, 0.0)];

    let x = Solver::new().solve(&a, &b).unwrap();
    assert_eq!(x, vec![ONE, c(2.0, 0.0), c(3.0, 0.0)]);
}

#[test]
fn complex_coefficient_system() {
    // i*x = 1  =>  x = -i; y = 2
    let a = square(vec![vec![c(0.0, 1.0), ZERO], vec![ZERO, ONE]]);
    let b = [ONE, c(2.0, 0.0)];

    let x = Solver::new().solve(&a, &b).unwrap();
    assert_eq!(x, vec![c(0.0, -1.0), c(2.0, 0.0)]);
}

#[test]
fn singular_matrix_is_rejected_for_any_terms() {
    let a = square(vec![vec![c(1.0, 0.0), c(2.0, 0.0)],
                        vec![c(2.0, 0.0), c(4.0, 0.0)]]);

    for b in [[ZERO, ZERO], [ONE, ONE], [c(5.0, -3.0), c(0.25, 8.0)]] {
        assert_eq!(Solver::new().solve(&a, &b).unwrap_err(), SolveError::SingularMatrix);
    }
}

#[test]
fn exact_zero_check_lets_near_singular_systems_through() {
    // det(A) is roughly 1e-13: exactly zero it is not, so the default
    // solver produces a (huge) solution, while a widened tolerance rejects.
    let a = square(vec![vec![c(1.0, 0.0), c(2.0, 0.0)],
                        vec![c(2.0, 0.0), c(4.0 + 1e-13, 0.0)]]);
    let b = [ONE, ONE];

    assert!(Solver::new().solve(&a, &b).is_ok());
    assert_eq!(Solver::with_tolerance(1e-9).solve(&a, &b).unwrap_err(),
               SolveError::SingularMatrix);
}

#[test]
fn shape_violations_are_rejected() {
    assert_eq!(Matrix::new(vec![]).unwrap_err(), SolveError::Empty);

    let ragged = Matrix::new(vec![vec![ONE, ZERO], vec![ONE]]).unwrap_err();
    assert_eq!(ragged, SolveError::NotSquare { rows: 2, columns: 1 });

    let wide = Matrix::new(vec![vec![ONE; 3], vec![ONE; 3]]).unwrap_err();
    assert_eq!(wide, SolveError::NotSquare { rows: 2, columns: 3 });
}

#[test]
fn mismatched_term_count_is_rejected() {
    let a = square(vec![vec![ONE, ZERO], vec![ZERO, ONE]]);

    let err = Solver::new().solve(&a, &[ONE]).unwrap_err();
    assert_eq!(err, SolveError::DimensionMismatch { dimension: 2, terms: 1 });
}

#[test]
fn solve_system_validates_and_solves_in_one_call() {
    // x + y = 3, x - y = 1
    let rows = vec![vec![ONE, ONE], vec![ONE, c(-1.0, 0.0)]];
    let x = solve_system(rows, &[c(3.0, 0.0), ONE], 0.0).unwrap();
    assert_eq!(x, vec![c(2.0, 0.0), ONE]);

    let ragged = vec![vec![ONE, ZERO], vec![ONE]];
    assert!(solve_system(ragged, &[ONE, ONE], 0.0).is_err());
}

#[test]
fn parser_accepts_the_literal_grammar() {
    assert_eq!(parse_complex("3 + 2i").unwrap(), c(3.0, 2.0));
    assert_eq!(parse_complex("3 + -2i").unwrap(), c(3.0, -2.0));
    assert_eq!(parse_complex("3+-2i").unwrap(), c(3.0, -2.0));
    assert_eq!(parse_complex("-1.5 - 2i").unwrap(), c(-1.5, -2.0));
    assert_eq!(parse_complex(".5 + 2e3i").unwrap(), c(0.5, 2000.0));
}

#[test]
fn parser_rejects_malformed_literals() {
    assert!(matches!(parse_complex("hello").unwrap_err(),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_complex("3 +").unwrap_err(), ParseError::UnexpectedEndOfInput));
    assert!(matches!(parse_complex("3 + 2").unwrap_err(), ParseError::MissingImaginaryUnit));
    assert!(matches!(parse_complex("3 + 2i 4").unwrap_err(),
                     ParseError::TrailingInput { .. }));
    assert!(matches!(parse_complex("").unwrap_err(), ParseError::UnexpectedEndOfInput));
}

#[test]
fn console_collects_a_full_system() {
    let input = "2\n1 + 0i\n0 + 0i\n0 + 0i\n1 + 0i\n5 + 2i\n-1 + 3i\n";
    let mut reader = Cursor::new(input);
    let mut output = Vec::new();

    let (rows, terms) = read_system(&mut reader, &mut output, None).unwrap();

    assert_eq!(rows, vec![vec![ONE, ZERO], vec![ZERO, ONE]]);
    assert_eq!(terms, vec![c(5.0, 2.0), c(-1.0, 3.0)]);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("A[2][1]: "));
    assert!(transcript.contains("B[2]: "));
}

#[test]
fn console_reprompts_on_malformed_entries() {
    // The bad dimension and the bad coefficient are each retried once.
    let input = "zero\n1\nnot a number\n4 + 0i\n7 + 0i\n";
    let mut reader = Cursor::new(input);
    let mut output = Vec::new();

    let (rows, terms) = read_system(&mut reader, &mut output, None).unwrap();

    assert_eq!(rows, vec![vec![c(4.0, 0.0)]]);
    assert_eq!(terms, vec![c(7.0, 0.0)]);

    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("at least 1"));
    assert!(transcript.contains("Please enter the number as 'a + bi'."));
}

#[test]
fn console_preset_size_skips_the_dimension_prompt() {
    let input = "2 + 0i\n9 + 9i\n";
    let mut reader = Cursor::new(input);
    let mut output = Vec::new();

    let (rows, terms) = read_system(&mut reader, &mut output, Some(1)).unwrap();

    assert_eq!(rows, vec![vec![c(2.0, 0.0)]]);
    assert_eq!(terms, vec![c(9.0, 9.0)]);
    assert!(!String::from_utf8(output).unwrap().contains("dimension"));
}

#[test]
fn console_fails_on_exhausted_input() {
    let mut reader = Cursor::new("2\n1 + 0i\n");
    let mut output = Vec::new();

    let err = read_system(&mut reader, &mut output, None).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
}
