use logos::{Lexer, Logos};

use crate::{complex::ComplexNumber, error::ParseError};

/// Represents a lexical token in a complex-number literal.
/// A token is a minimal but meaningful unit of text produced by the lexer.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t]+")]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// The imaginary unit suffix `i`.
    #[token("i")]
    ImaginaryUnit,
}

fn parse_float(lex: &mut Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::ImaginaryUnit => write!(f, "i"),
        }
    }
}

/// Parses a complex-number literal of the form `<real> + <imaginary>i`.
///
/// Both parts may carry their own sign, and the separator may be `+` or `-`
/// (a `-` separator negates the imaginary part). The trailing `i` on the
/// imaginary term is required. Whitespace between tokens is ignored, so
/// `3 + -2i`, `3+-2i` and `-1.5 - 2e3i` are all accepted.
///
/// # Errors
/// - `ParseError::UnexpectedToken` for input outside the literal grammar.
/// - `ParseError::UnexpectedEndOfInput` when the literal stops short.
/// - `ParseError::MissingImaginaryUnit` when the trailing `i` is absent.
/// - `ParseError::TrailingInput` when tokens follow a complete literal.
///
/// # Example
/// ```
/// use lineq::{complex::ComplexNumber, parser::parse_complex};
///
/// assert_eq!(parse_complex("3 + -2i").unwrap(), ComplexNumber::new(3.0, -2.0));
/// assert_eq!(parse_complex("-1.5 - 2i").unwrap(), ComplexNumber::new(-1.5, -2.0));
/// assert!(parse_complex("3 + 2").is_err());
/// ```
pub fn parse_complex(input: &str) -> Result<ComplexNumber, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(input);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push(tok),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string() })
            },
        }
    }

    let mut iter = tokens.iter().peekable();

    let real = parse_signed_number(&mut iter)?;

    let separator_negates = match iter.next() {
        Some(Token::Plus) => false,
        Some(Token::Minus) => true,
        Some(token) => return Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => return Err(ParseError::UnexpectedEndOfInput),
    };

    let mut imaginary = parse_signed_number(&mut iter)?;
    if separator_negates {
        imaginary = -imaginary;
    }

    match iter.next() {
        Some(Token::ImaginaryUnit) => {},
        Some(_) | None => return Err(ParseError::MissingImaginaryUnit),
    }

    if let Some(extra) = iter.next() {
        return Err(ParseError::TrailingInput { token: extra.to_string() });
    }

    Ok(ComplexNumber::new(real, imaginary))
}

/// Parses an optionally signed numeric literal from the token stream.
fn parse_signed_number<'a, I>(iter: &mut std::iter::Peekable<I>) -> Result<f64, ParseError>
    where I: Iterator<Item = &'a Token>
{
    let negate = match iter.peek() {
        Some(Token::Minus) => {
            iter.next();
            true
        },
        Some(Token::Plus) => {
            iter.next();
            false
        },
        _ => false,
    };

    match iter.next() {
        Some(Token::Number(value)) => Ok(if negate { -value } else { *value }),
        Some(token) => Err(ParseError::UnexpectedToken { token: token.to_string() }),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}
