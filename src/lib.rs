//! # stylefn
//!
//! stylefn is the builtin function layer of a CSS preprocessor. It models
//! the preprocessor's value types (numbers with units, colors, strings,
//! lists) and implements the standard library of color, string, number,
//! list and introspection functions over them.
//!
//! A small reader is included so single value expressions such as
//! `mix(#f00, #00f, 25%)` can be evaluated directly.

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

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::Context,
        lexer::{LexerExtras, Token},
        parser::core::parse_expression,
        value::core::Value,
    },
};

/// Defines the structure of parsed value expressions.
///
/// This module declares the `Expr` enum and related types that represent a
/// value expression as a tree of literals, lists and builtin calls. The AST
/// is built by the parser and walked by the evaluator.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading an
/// expression or running a builtin. Every error carries the source location
/// of the value that caused it.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, builtins).
/// - Attaches line numbers, and file names where known, for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together value types, builtins and the expression reader.
///
/// # Responsibilities
/// - Defines the runtime value model.
/// - Registers and dispatches builtin functions.
/// - Provides the lexer, parser and evaluator used by [`evaluate`].
pub mod interpreter;
/// General utilities for safe numeric conversion.
///
/// Converting between `usize`, `i64` and `f64` without silent data loss is
/// needed wherever list lengths and indices cross into numbers.
pub mod util;

/// Reads a single value expression and evaluates it.
///
/// `file` names the source in error messages and value origins. The whole
/// input must form one expression; anything left over is an error.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if a builtin raises a
/// runtime error.
///
/// # Examples
/// ```
/// use stylefn::evaluate;
///
/// let value = evaluate("mix(#f00, #00f)", None).unwrap();
/// assert_eq!(value.to_string(), "rgb(127.5, 0, 127.5)");
///
/// // Unknown builtin.
/// let res = evaluate("lighten(#f00, 10%)", Some("theme.scss"));
/// assert!(res.is_err());
/// ```
pub fn evaluate(source: &str, file: Option<&str>) -> Result<Value, Box<dyn std::error::Error>> {
    let context = file.map_or_else(Context::new, Context::with_file);

    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.extras.line));
        } else {
            let slice = lexer.slice();
            return Err(Box::new(ParseError::UnexpectedToken { token: slice.to_string(),
                                                              line:  lexer.extras.line, }));
        }
    }

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((token, line)) = iter.next() {
        return Err(Box::new(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                                   line:  *line, }));
    }

    log::debug!("evaluating expression starting on line {}", expr.line());

    Ok(context.eval(&expr)?)
}
