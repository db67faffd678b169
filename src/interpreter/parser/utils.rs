use std::iter::Peekable;

use crate::{
    ast::Argument,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_space_list},
        value::core::Color,
    },
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token)
    -> Result<Vec<T>, ParseError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, line)) => {
                return Err(ParseError::UnexpectedToken { token: format!("Expected ',' or {closing:?}, found {tok:?}"),
                                                         line:  *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        }
    }
    Ok(items)
}

/// Parses the arguments of a call, after the opening `(`.
///
/// Each argument is a space list, optionally preceded by `$name:`. A comma
/// list can be passed by wrapping it in parentheses.
///
/// Grammar: `arguments := (argument ("," argument)*)? ")"`
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<Vec<Argument>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comma_separated(tokens, parse_argument, &Token::RParen)
}

fn parse_argument<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Argument>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let name = match tokens.peek() {
        Some((Token::Variable(name), _)) => {
            tokens.next();
            match tokens.next() {
                Some((Token::Colon, _)) => Some(name.clone()),
                Some((tok, line)) => {
                    return Err(ParseError::UnexpectedToken { token: format!("Expected ':' after {name}, found {tok:?}"),
                                                             line:  *line, });
                },
                None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
            }
        },
        _ => None,
    };

    Ok(Argument { name,
                  value: parse_space_list(tokens)? })
}

/// Decodes the digits of a `#rgb` or `#rrggbb` literal.
///
/// Each short-form digit is doubled, so `#fa0` is `rgb(255, 170, 0)`.
///
/// # Errors
/// `InvalidColor` if `digits` is not three or six hex digits.
pub(in crate::interpreter::parser) fn decode_hex_color(digits: &str,
                                                       line: usize)
                                                       -> ParseResult<Color> {
    let invalid = || ParseError::InvalidColor { literal: format!("#{digits}"),
                                                line };

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |hex: &str| u8::from_str_radix(hex, 16).map(f64::from).map_err(|_| invalid());

    match digits.len() {
        3 => {
            let short = |i: usize| channel(&digits[i..=i]).map(|d| d * 17.0);
            Ok(Color::rgb(short(0)?, short(1)?, short(2)?))
        },
        6 => Ok(Color::rgb(channel(&digits[0..2])?, channel(&digits[2..4])?, channel(&digits[4..6])?)),
        _ => Err(invalid()),
    }
}
