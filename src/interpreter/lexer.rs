use logos::Logos;

/// Represents a lexical token in a value expression.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Percentage literal tokens, such as `50%` or `-12.5%`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)%", parse_percentage)]
    Percentage(f64),
    /// Number-with-unit tokens, such as `10px` or `.5em`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)[a-zA-Z]+", parse_dimension)]
    Dimension((f64, String)),
    /// Unitless number tokens, such as `3`, `-1.5` or `.5`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)", parse_number)]
    Number(f64),
    /// `#` followed by hex digits; the digits without the `#`.
    #[regex(r"#[0-9a-zA-Z]+", |lex| lex.slice()[1..].to_string())]
    Hash(String),
    /// Quoted strings, with the quotes removed and escapes resolved.
    #[regex(r#""([^"\\\n]|\\.)*""#, parse_quoted)]
    #[regex(r"'([^'\\\n]|\\.)*'", parse_quoted)]
    Quoted(String),
    /// Bare words such as `solid`, `fade-in` or `-webkit-box`.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Keyword argument names such as `$weight`.
    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_-]*", |lex| lex.slice().to_string())]
    Variable(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `/* Block comments, possibly spanning lines. */`
    #[regex(r"/\*([^*]|\*[^/])*\*/", |lex| {
        let comment      = lex.slice();
        let newlines     = comment.chars().filter(|&c| c == '\n').count();
        lex.extras.line += newlines;
        logos::Skip
    })]
    BlockComment,
    /// Newlines only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_percentage(lex: &logos::Lexer<Token>) -> Option<f64> {
    let slice = lex.slice();
    slice[..slice.len() - 1].parse().ok()
}

/// Splits `10px` into `(10.0, "px")`.
fn parse_dimension(lex: &logos::Lexer<Token>) -> Option<(f64, String)> {
    let slice = lex.slice();
    let split = slice.find(|c: char| c.is_ascii_alphabetic())?;

    Some((slice[..split].parse().ok()?, slice[split..].to_string()))
}

/// Strips the surrounding quotes and drops the backslash from escapes.
fn parse_quoted(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    let mut text = String::with_capacity(slice.len());
    let mut chars = slice[1..slice.len() - 1].chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                text.push(escaped);
            }
        } else {
            text.push(c);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use logos::Logos;

    use super::{LexerExtras, Token};

    fn lex(source: &str) -> Vec<(Token, usize)> {
        let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            tokens.push((token.expect("valid token"), lexer.extras.line));
        }
        tokens
    }

    #[test]
    fn numbers_with_and_without_units() {
        let tokens = lex("10px -1.5 .5em 50%");
        let kinds = tokens.into_iter().map(|(t, _)| t).collect::<Vec<_>>();

        assert_eq!(kinds,
                   vec![Token::Dimension((10.0, "px".to_string())),
                        Token::Number(-1.5),
                        Token::Dimension((0.5, "em".to_string())),
                        Token::Percentage(50.0)]);
    }

    #[test]
    fn strings_identifiers_and_keywords() {
        let kinds = lex(r#"fade-in("a\"b", 'c', $weight: 1)"#).into_iter()
                                                                 .map(|(t, _)| t)
                                                                 .collect::<Vec<_>>();

        assert_eq!(kinds,
                   vec![Token::Identifier("fade-in".to_string()),
                        Token::LParen,
                        Token::Quoted("a\"b".to_string()),
                        Token::Comma,
                        Token::Quoted("c".to_string()),
                        Token::Comma,
                        Token::Variable("$weight".to_string()),
                        Token::Colon,
                        Token::Number(1.0),
                        Token::RParen]);
    }

    #[test]
    fn newlines_advance_the_line() {
        let tokens = lex("a\n\nb");
        assert_eq!(tokens[0].1, 1);
        assert_eq!(tokens[1].1, 3);
    }

    #[test]
    fn comments_are_skipped_but_counted() {
        let tokens = lex("a /* one\ntwo */ b // trailing");
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".to_string()), 1),
                        (Token::Identifier("b".to_string()), 2)]);
    }

    #[test]
    fn hash_colors() {
        assert_eq!(lex("#fa0")[0].0, Token::Hash("fa0".to_string()));
    }
}
