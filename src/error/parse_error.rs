use thiserror::Error;

/// Represents all errors that can occur while reading a value expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found extra tokens after the expression should have ended.
    #[error("Error on line {line}: Extra tokens after expression. Check your input: {token}")]
    UnexpectedTrailingTokens {
        /// The extra token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A `#` color literal did not have 3 or 6 hex digits.
    #[error("Error on line {line}: Invalid color literal '{literal}'.")]
    InvalidColor {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
