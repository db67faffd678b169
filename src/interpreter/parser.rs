/// Core expression parsing.
///
/// Parses comma lists, space lists, parenthesized groups, literals and
/// builtin calls into AST nodes.
pub mod core;

/// Utility functions for the parser.
///
/// Provides argument-list parsing and color-literal decoding.
pub mod utils;
