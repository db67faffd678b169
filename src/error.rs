/// Parsing errors.
///
/// Defines the errors the expression reader can raise: unexpected tokens,
/// unbalanced parentheses, malformed color literals and the like. These are
/// detected before any builtin runs.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all errors a builtin call can raise: type mismatches, bad list
/// indices, invalid arguments, and binding failures such as unknown
/// functions or missing parameters.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
