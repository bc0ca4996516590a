#[derive(Debug)]
/// Represents all errors that can occur while parsing a complex-number
/// literal such as `3 + -2i`.
pub enum ParseError {
    /// Found a character sequence that is not part of the literal grammar.
    UnexpectedToken {
        /// The offending slice of input.
        token: String,
    },
    /// Reached the end of input before the literal was complete.
    UnexpectedEndOfInput,
    /// The imaginary term was not followed by the `i` unit.
    MissingImaginaryUnit,
    /// Found extra tokens after a complete literal.
    TrailingInput {
        /// The first extra token.
        token: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),
            Self::UnexpectedEndOfInput => write!(f, "Unexpected end of input."),
            Self::MissingImaginaryUnit => {
                write!(f, "Expected 'i' after the imaginary part but none found.")
            },
            Self::TrailingInput { token } => {
                write!(f, "Extra input after the complex number: {token}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
