/// The evaluator module runs builtins over values.
///
/// It walks the AST, binds call arguments to builtin parameters, and
/// dispatches to the builtin registry.
///
/// # Responsibilities
/// - Evaluates literals, lists and calls.
/// - Resolves overloads and aliases by name and argument count.
/// - Reports runtime errors such as type mismatches or bad indices.
pub mod evaluator;
/// The lexer module tokenizes value expressions.
///
/// # Responsibilities
/// - Converts the input into numbers, dimensions, colors, strings and
///   punctuation, each tagged with its source line.
/// - Reports lexical errors for invalid input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser groups primaries into space and comma lists and reads builtin
/// calls with positional and `$name:` arguments.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares every value a builtin can receive or return:
/// nil, numbers, dimensions, percentages, colors, strings, booleans and
/// lists. It also defines where each value came from and how units group
/// into comparable classes.
pub mod value;
