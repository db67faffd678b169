use std::{fmt, rc::Rc};

/// Where a value came from in the stylesheet source.
///
/// Set when a value is read or produced and carried along unchanged by
/// every builtin that derives a new value from it. The file name is already
/// decoded by whoever constructs the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Origin {
    /// 1-based source line, or `0` for values with no source position.
    pub line: usize,
    /// File the value was read from, if known.
    pub file: Option<Rc<str>>,
}

impl Origin {
    /// Creates an origin for `line` in `file`.
    #[must_use]
    pub fn new(line: usize, file: Option<Rc<str>>) -> Self {
        Self { line, file }
    }

    /// Creates an origin that only knows its line.
    #[must_use]
    pub const fn at_line(line: usize) -> Self {
        Self { line, file: None }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "line {} of {file}", self.line),
            None => write!(f, "line {}", self.line),
        }
    }
}
