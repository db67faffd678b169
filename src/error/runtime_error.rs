use thiserror::Error;

use crate::interpreter::value::{core::Value, origin::Origin};

/// Represents all errors that can occur while evaluating a builtin call.
///
/// Every variant carries the [`Origin`] it should be reported against. A
/// builtin never recovers from one of these; it propagates to whoever
/// invoked the call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// An operand had a variant the operation cannot work with.
    #[error("Error on {origin}: Type mismatch: {details}.")]
    TypeMismatch {
        /// What was expected.
        details: String,
        /// Where the offending operand came from.
        origin:  Origin,
    },
    /// A list index fell outside the list.
    #[error("Error on {origin}: Index out of bounds. List has {len} elements, but found index {found}.")]
    IndexOutOfBounds {
        /// Length of the list being indexed.
        len:    usize,
        /// The 1-based index that was requested.
        found:  i64,
        /// Where the index came from.
        origin: Origin,
    },
    /// An argument had the right variant but an unusable value.
    #[error("Error on {origin}: Invalid argument: {details}.")]
    InvalidArgument {
        /// Why the argument is invalid.
        details: String,
        /// Where the argument came from.
        origin:  Origin,
    },
    /// A declared parameter had no binding.
    #[error("Error on {origin}: Missing argument '{name}'.")]
    MissingArgument {
        /// The declared parameter name.
        name:   String,
        /// The call site.
        origin: Origin,
    },
    /// No builtin has this name.
    #[error("Error on {origin}: Unknown function '{name}'.")]
    UnknownFunction {
        /// The name that was called.
        name:   String,
        /// The call site.
        origin: Origin,
    },
    /// The builtin exists but takes a different number of arguments.
    #[error("Error on {origin}: Argument count mismatch: '{name}' does not take {found} arguments.")]
    ArgumentCountMismatch {
        /// The name that was called.
        name:   String,
        /// How many arguments were supplied.
        found:  usize,
        /// The call site.
        origin: Origin,
    },
}

impl RuntimeError {
    /// Raises a type mismatch against the operand that caused it.
    ///
    /// # Example
    /// ```
    /// use stylefn::{
    ///     error::RuntimeError,
    ///     interpreter::value::{core::Value, origin::Origin},
    /// };
    ///
    /// let operand = Value::boolean(true, Origin::at_line(7));
    /// let err = RuntimeError::type_mismatch("argument to red must be a color", &operand);
    ///
    /// assert_eq!(err.line(), 7);
    /// assert_eq!(err.to_string(),
    ///            "Error on line 7: Type mismatch: argument to red must be a color.");
    /// ```
    #[must_use]
    pub fn type_mismatch(details: impl Into<String>, operand: &Value) -> Self {
        Self::TypeMismatch { details: details.into(),
                             origin:  operand.origin.clone(), }
    }

    /// Raises an invalid-argument error against `operand`.
    #[must_use]
    pub fn invalid_argument(details: impl Into<String>, operand: &Value) -> Self {
        Self::InvalidArgument { details: details.into(),
                                origin:  operand.origin.clone(), }
    }

    /// Where the error should be reported.
    #[must_use]
    pub const fn origin(&self) -> &Origin {
        match self {
            Self::TypeMismatch { origin, .. }
            | Self::IndexOutOfBounds { origin, .. }
            | Self::InvalidArgument { origin, .. }
            | Self::MissingArgument { origin, .. }
            | Self::UnknownFunction { origin, .. }
            | Self::ArgumentCountMismatch { origin, .. } => origin,
        }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.origin().line
    }

    #[must_use]
    pub fn file(&self) -> Option<&str> {
        self.origin().file.as_deref()
    }
}
