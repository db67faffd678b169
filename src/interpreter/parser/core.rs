use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::utils::{decode_hex_color, parse_arguments},
        value::core::Separator,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing. Commas bind loosest, so
/// `a b, c` is a comma list whose first item is the space list `a b`.
/// A single item is returned as-is rather than wrapped in a list.
///
/// Grammar: `expression := space_list ("," space_list)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_space_list(tokens)?;
    let line = first.line();
    let mut items = vec![first];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        items.push(parse_space_list(tokens)?);
    }

    Ok(collapse(items, Separator::Comma, line))
}

/// Parses whitespace-separated primaries up to a `,`, a `)` or the end of
/// input.
///
/// Grammar: `space_list := primary+`
pub(in crate::interpreter::parser) fn parse_space_list<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let first = parse_primary(tokens)?;
    let line = first.line();
    let mut items = vec![first];

    while let Some((tok, _)) = tokens.peek() {
        if matches!(tok, Token::Comma | Token::RParen) {
            break;
        }
        items.push(parse_primary(tokens)?);
    }

    Ok(collapse(items, Separator::Space, line))
}

fn collapse(mut items: Vec<Expr>, separator: Separator, line: usize) -> Expr {
    if items.len() == 1
       && let Some(only) = items.pop()
    {
        return only;
    }

    Expr::List { items,
                 separator,
                 line }
}

/// Parses a primary expression.
///
/// Grammar:
/// ```text
///     primary := number | dimension | percentage | "#" hex | string
///              | identifier "(" arguments
///              | identifier
///              | "(" ")"
///              | "(" expression ")"
/// ```
///
/// The identifiers `null`, `true` and `false` are nil and the two booleans;
/// every other bare identifier is an unquoted string.
///
/// # Errors
/// - `UnexpectedToken` for tokens that cannot start a value.
/// - `ExpectedClosingParen` when a group is not closed.
/// - `InvalidColor` for malformed `#` literals.
pub(in crate::interpreter::parser) fn parse_primary<'a, I>(tokens: &mut Peekable<I>)
                                                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next()
                              .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;
    let line = *line;
    let literal = |value| -> ParseResult<Expr> { Ok(Expr::Literal { value, line }) };

    match token {
        Token::Number(n) => literal(LiteralValue::Number(*n)),
        Token::Dimension((n, unit)) => literal(LiteralValue::Dimension(*n, unit.clone())),
        Token::Percentage(p) => literal(LiteralValue::Percentage(*p)),
        Token::Hash(digits) => literal(LiteralValue::Color(decode_hex_color(digits, line)?)),
        Token::Quoted(text) => literal(LiteralValue::String { text:   text.clone(),
                                                              quoted: true, }),
        Token::Identifier(name) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let args = parse_arguments(tokens)?;
                return Ok(Expr::Call { name: name.clone(),
                                       args,
                                       line });
            }

            match name.as_str() {
                "null" => literal(LiteralValue::Nil),
                "true" => literal(LiteralValue::Bool(true)),
                "false" => literal(LiteralValue::Bool(false)),
                _ => literal(LiteralValue::String { text:   name.clone(),
                                                    quoted: false, }),
            }
        },
        Token::LParen => parse_grouping(tokens, line),
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                 line }),
    }
}

/// Parses the rest of a parenthesized group after `(`.
///
/// `()` is the empty list. Otherwise the group holds a full expression, so
/// parentheses are how a comma list is nested inside another list or passed
/// as a single argument.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::RParen, _)) = tokens.peek() {
        tokens.next();
        return Ok(Expr::Literal { value: LiteralValue::Nil,
                                  line });
    }

    let inner = parse_expression(tokens)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        _ => Err(ParseError::ExpectedClosingParen { line }),
    }
}
