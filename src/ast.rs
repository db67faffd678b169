use crate::interpreter::value::core::{Color, Separator};

/// Represents a literal value as written in an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// `()` or `null`.
    Nil,
    /// A unitless number literal.
    Number(f64),
    /// A number with a unit, such as `10px`.
    Dimension(f64, String),
    /// A percentage literal; `50%` is `Percentage(50.0)`.
    Percentage(f64),
    /// A `#rgb` or `#rrggbb` color literal.
    Color(Color),
    /// A quoted string or a bare identifier.
    String {
        /// The text without quotes.
        text:   String,
        /// Whether the literal was quoted.
        quoted: bool,
    },
    /// `true` or `false`.
    Bool(bool),
}

/// An argument at a call site, either positional or named.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    /// The parameter name for `$name: value` arguments, including the `$`.
    pub name:  Option<String>,
    /// The argument expression.
    pub value: Expr,
}

/// An abstract syntax tree (AST) node representing a value expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// A space- or comma-separated list of expressions.
    List {
        /// The list elements.
        items:     Vec<Expr>,
        /// How the elements were separated.
        separator: Separator,
        /// Line number in the source code.
        line:      usize,
    },
    /// A call to a builtin such as `mix(red, blue)`.
    Call {
        /// The function name as written.
        name: String,
        /// The call-site arguments in order.
        args: Vec<Argument>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// The line the expression starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::List { line, .. } | Self::Call { line, .. } => *line,
        }
    }
}
