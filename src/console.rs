use std::io::{self, BufRead, Write};

use crate::{complex::ComplexNumber, parser::parse_complex};

/// Reads a full system interactively: the dimension n, the n² coefficients
/// of matrix A (row-major, prompted as `A[i][j]:` with 1-based indices), and
/// the n constant terms of vector B.
///
/// Malformed entries are recovered locally: the parse error is printed and
/// the same entry is prompted again, so the returned rows always contain
/// well-formed values. When `size` is preset to a positive value the
/// dimension prompt is skipped.
///
/// The reader and writer are generic so tests can drive the driver with
/// in-memory buffers instead of a terminal.
///
/// # Errors
/// Returns an `io::Error` when reading or writing fails, including an
/// `UnexpectedEof` when the input ends before the system is complete.
pub fn read_system<R, W>(reader: &mut R,
                         writer: &mut W,
                         size: Option<usize>)
                         -> io::Result<(Vec<Vec<ComplexNumber>>, Vec<ComplexNumber>)>
    where R: BufRead,
          W: Write
{
    let n = match size {
        Some(n) if n >= 1 => n,
        _ => read_dimension(reader, writer)?,
    };

    writeln!(writer, "Enter the coefficients of matrix A (as 'a + bi'):")?;
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let mut row = Vec::with_capacity(n);
        for j in 0..n {
            row.push(prompt_complex(reader, writer, &format!("A[{}][{}]: ", i + 1, j + 1))?);
        }
        rows.push(row);
    }

    writeln!(writer, "Enter the constant terms B (as 'a + bi'):")?;
    let mut terms = Vec::with_capacity(n);
    for i in 0..n {
        terms.push(prompt_complex(reader, writer, &format!("B[{}]: ", i + 1))?);
    }

    Ok((rows, terms))
}

/// Writes the solution vector, one `x[i] = <value>` line per unknown.
///
/// Indices are 1-based to match the input prompts.
///
/// # Errors
/// Returns an `io::Error` when writing fails.
pub fn print_solution<W: Write>(writer: &mut W, solution: &[ComplexNumber]) -> io::Result<()> {
    for (i, value) in solution.iter().enumerate() {
        writeln!(writer, "x[{}] = {value}", i + 1)?;
    }

    Ok(())
}

/// Prompts for the system dimension until a positive integer is supplied.
fn read_dimension<R, W>(reader: &mut R, writer: &mut W) -> io::Result<usize>
    where R: BufRead,
          W: Write
{
    loop {
        let line = prompt_line(reader, writer, "Enter the system dimension (n): ")?;
        match line.trim().parse::<usize>() {
            Ok(n) if n >= 1 => return Ok(n),
            _ => writeln!(writer, "The dimension must be a whole number of at least 1.")?,
        }
    }
}

/// Prompts for a single complex number until a well-formed literal is
/// supplied, reporting each parse error before re-prompting.
fn prompt_complex<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<ComplexNumber>
    where R: BufRead,
          W: Write
{
    loop {
        let line = prompt_line(reader, writer, prompt)?;
        match parse_complex(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(writer, "{e} Please enter the number as 'a + bi'.")?,
        }
    }
}

/// Writes a prompt and reads one line, failing with `UnexpectedEof` when the
/// input is exhausted.
fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> io::Result<String>
    where R: BufRead,
          W: Write
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof,
                                  "input ended before the system was complete"));
    }

    Ok(line)
}
