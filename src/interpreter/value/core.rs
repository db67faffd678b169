use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{origin::Origin, unit::UnitClass},
    },
};

/// How the items of a list are rendered and joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `1px 2px 3px`
    Space,
    /// `a, b, c`
    Comma,
}

impl Separator {
    /// The text placed between two rendered items.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ", ",
        }
    }
}

/// An RGBA color with exactly four ordered channels.
///
/// Red, green and blue are conventionally in `0..=255` and alpha in `0..=1`,
/// but construction never clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    channels: [f64; 4],
}

impl Color {
    /// Creates a color from its four channels.
    #[must_use]
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { channels: [red, green, blue, alpha] }
    }

    /// Creates an opaque color.
    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn red(self) -> f64 {
        self.channels[0]
    }

    #[must_use]
    pub const fn green(self) -> f64 {
        self.channels[1]
    }

    #[must_use]
    pub const fn blue(self) -> f64 {
        self.channels[2]
    }

    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.channels[3]
    }

    /// All four channels in `[r, g, b, a]` order.
    #[must_use]
    pub const fn channels(self) -> [f64; 4] {
        self.channels
    }

    /// Returns a copy of this color with its alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.red(), self.green(), self.blue(), alpha)
    }
}

/// The payload of a runtime value.
///
/// Text and list items sit behind `Rc`, so cloning a value shares them and
/// nothing hands out mutable access. A builtin that wants a changed value
/// builds a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// The empty list.
    Nil,
    /// A unitless number.
    Number(f64),
    /// A number paired with a unit token such as `px`.
    Dimension {
        /// The numeric part.
        magnitude: f64,
        /// The unit token, without the number.
        unit:      Rc<str>,
    },
    /// A percentage; `50%` is stored as `50.0`.
    Percentage(f64),
    /// An RGBA color.
    Color(Color),
    /// A string, either quoted (`"a"`) or bare (`a`).
    String {
        /// The text, without quotes.
        text:   Rc<str>,
        /// Whether the string renders with quotes.
        quoted: bool,
    },
    /// `true` or `false`.
    Bool(bool),
    /// An ordered list of values.
    List {
        /// The elements in order.
        items:     Rc<[Value]>,
        /// How the elements are separated.
        separator: Separator,
    },
}

/// The variant of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Nil,
    Number,
    Dimension,
    Percentage,
    Color,
    String,
    Bool,
    List,
}

impl Tag {
    /// The name `type-of` reports for this variant.
    ///
    /// # Example
    /// ```
    /// use stylefn::interpreter::value::core::Tag;
    ///
    /// assert_eq!(Tag::Dimension.type_name(), "number");
    /// assert_eq!(Tag::Nil.type_name(), "list");
    /// ```
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Number | Self::Dimension | Self::Percentage => "number",
            Self::Bool => "bool",
            Self::String => "string",
            Self::Color => "color",
            Self::List | Self::Nil => "list",
        }
    }
}

/// A runtime value together with the source position it came from.
///
/// Two values are equal when their payloads are equal; where they came from
/// does not matter.
#[derive(Debug, Clone)]
pub struct Value {
    /// What the value is.
    pub kind:   ValueKind,
    /// Where the value came from.
    pub origin: Origin,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Value {
    #[must_use]
    pub const fn new(kind: ValueKind, origin: Origin) -> Self {
        Self { kind, origin }
    }

    #[must_use]
    pub const fn nil(origin: Origin) -> Self {
        Self::new(ValueKind::Nil, origin)
    }

    #[must_use]
    pub const fn number(magnitude: f64, origin: Origin) -> Self {
        Self::new(ValueKind::Number(magnitude), origin)
    }

    #[must_use]
    pub fn dimension(magnitude: f64, unit: impl Into<Rc<str>>, origin: Origin) -> Self {
        Self::new(ValueKind::Dimension { magnitude,
                                         unit: unit.into() },
                  origin)
    }

    #[must_use]
    pub const fn percentage(magnitude: f64, origin: Origin) -> Self {
        Self::new(ValueKind::Percentage(magnitude), origin)
    }

    #[must_use]
    pub const fn color(color: Color, origin: Origin) -> Self {
        Self::new(ValueKind::Color(color), origin)
    }

    #[must_use]
    pub fn string(text: impl Into<Rc<str>>, quoted: bool, origin: Origin) -> Self {
        Self::new(ValueKind::String { text: text.into(),
                                      quoted },
                  origin)
    }

    #[must_use]
    pub const fn boolean(value: bool, origin: Origin) -> Self {
        Self::new(ValueKind::Bool(value), origin)
    }

    #[must_use]
    pub fn list(items: impl Into<Rc<[Self]>>, separator: Separator, origin: Origin) -> Self {
        Self::new(ValueKind::List { items: items.into(),
                                    separator },
                  origin)
    }

    /// The variant of this value.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match &self.kind {
            ValueKind::Nil => Tag::Nil,
            ValueKind::Number(_) => Tag::Number,
            ValueKind::Dimension { .. } => Tag::Dimension,
            ValueKind::Percentage(_) => Tag::Percentage,
            ValueKind::Color(_) => Tag::Color,
            ValueKind::String { .. } => Tag::String,
            ValueKind::Bool(_) => Tag::Bool,
            ValueKind::List { .. } => Tag::List,
        }
    }

    /// Returns `true` for numbers, dimensions and percentages.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self.kind,
                 ValueKind::Number(_) | ValueKind::Dimension { .. } | ValueKind::Percentage(_))
    }

    /// The numeric part of a number, dimension or percentage.
    #[must_use]
    pub const fn magnitude(&self) -> Option<f64> {
        match &self.kind {
            ValueKind::Number(m) | ValueKind::Percentage(m) => Some(*m),
            ValueKind::Dimension { magnitude, .. } => Some(*magnitude),
            _ => None,
        }
    }

    /// Applies `op` to the numeric part, keeping the variant, unit and
    /// origin.
    ///
    /// Returns `None` for non-numeric values.
    ///
    /// # Example
    /// ```
    /// use stylefn::interpreter::value::{core::Value, origin::Origin};
    ///
    /// let width = Value::dimension(-1.2, "px", Origin::default());
    /// let floored = width.map_magnitude(f64::floor).unwrap();
    ///
    /// assert_eq!(floored, Value::dimension(-2.0, "px", Origin::default()));
    /// ```
    #[must_use]
    pub fn map_magnitude(&self, op: impl Fn(f64) -> f64) -> Option<Self> {
        let kind = match &self.kind {
            ValueKind::Number(m) => ValueKind::Number(op(*m)),
            ValueKind::Percentage(m) => ValueKind::Percentage(op(*m)),
            ValueKind::Dimension { magnitude, unit } => {
                ValueKind::Dimension { magnitude: op(*magnitude),
                                       unit:      Rc::clone(unit), }
            },
            _ => return None,
        };
        Some(Self::new(kind, self.origin.clone()))
    }

    /// The unit text of a numeric value: `""`, `"%"` or the dimension's
    /// token.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Number(_) => Some(""),
            ValueKind::Percentage(_) => Some("%"),
            ValueKind::Dimension { unit, .. } => Some(&unit[..]),
            _ => None,
        }
    }

    /// Whether two values can be compared or combined arithmetically.
    ///
    /// A unitless number is comparable with any numeric value, two
    /// percentages are comparable, and two dimensions are comparable when
    /// their units share a [`UnitClass`]. Nothing else is comparable.
    #[must_use]
    pub fn is_comparable(&self, other: &Self) -> bool {
        match (&self.kind, &other.kind) {
            (ValueKind::Number(_), _) => other.is_numeric(),
            (_, ValueKind::Number(_)) => self.is_numeric(),
            (ValueKind::Percentage(_), ValueKind::Percentage(_)) => true,
            (ValueKind::Dimension { unit: left, .. }, ValueKind::Dimension { unit: right, .. }) => {
                UnitClass::compatible(left, right)
            },
            _ => false,
        }
    }

    /// Views the value as a list.
    ///
    /// Lists yield their items, nil yields nothing, and any other value is a
    /// one-element list of itself.
    #[must_use]
    pub fn list_items(&self) -> &[Self] {
        match &self.kind {
            ValueKind::List { items, .. } => &items[..],
            ValueKind::Nil => &[],
            _ => std::slice::from_ref(self),
        }
    }

    /// The separator of a real list. Nil and scalars have none of their own.
    #[must_use]
    pub const fn separator(&self) -> Option<Separator> {
        match &self.kind {
            ValueKind::List { separator, .. } => Some(*separator),
            _ => None,
        }
    }

    /// Returns `true` for lists and nil.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self.kind, ValueKind::List { .. } | ValueKind::Nil)
    }

    /// Reads a unitless number, or raises a type mismatch described by
    /// `details`.
    pub fn expect_number(&self, details: &str) -> EvalResult<f64> {
        match self.kind {
            ValueKind::Number(n) => Ok(n),
            _ => Err(RuntimeError::type_mismatch(details, self)),
        }
    }

    /// Reads the numeric part of a number, dimension or percentage.
    pub fn expect_numeric(&self, details: &str) -> EvalResult<f64> {
        self.magnitude()
            .ok_or_else(|| RuntimeError::type_mismatch(details, self))
    }

    /// Reads a color.
    pub fn expect_color(&self, details: &str) -> EvalResult<Color> {
        match self.kind {
            ValueKind::Color(c) => Ok(c),
            _ => Err(RuntimeError::type_mismatch(details, self)),
        }
    }

    /// Compares two values, allowing numeric payloads to differ within a
    /// tolerance.
    ///
    /// `|a − b| ≤ max(abs_tol, rel_tol * max(|a|, |b|))`
    ///
    /// Colors compare channel by channel and lists item by item; every other
    /// payload uses exact equality.
    #[must_use]
    pub fn is_close(&self, other: &Self, rel_tol: f64, abs_tol: f64) -> bool {
        let close = |a: f64, b: f64| (a - b).abs() <= abs_tol.max(rel_tol * a.abs().max(b.abs()));

        match (&self.kind, &other.kind) {
            (ValueKind::Number(a), ValueKind::Number(b))
            | (ValueKind::Percentage(a), ValueKind::Percentage(b)) => close(*a, *b),
            (ValueKind::Dimension { magnitude: a, unit: u1 },
             ValueKind::Dimension { magnitude: b, unit: u2 }) => u1 == u2 && close(*a, *b),
            (ValueKind::Color(a), ValueKind::Color(b)) => {
                a.channels()
                 .iter()
                 .zip(b.channels().iter())
                 .all(|(x, y)| close(*x, *y))
            },
            (ValueKind::List { items: a, separator: s1 },
             ValueKind::List { items: b, separator: s2 }) => {
                s1 == s2
                && a.len() == b.len()
                && a.iter().zip(b.iter()).all(|(x, y)| x.is_close(y, rel_tol, abs_tol))
            },
            _ => self == other,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Nil => write!(f, "()"),
            ValueKind::Number(n) => write!(f, "{n}"),
            ValueKind::Dimension { magnitude, unit } => write!(f, "{magnitude}{unit}"),
            ValueKind::Percentage(p) => write!(f, "{p}%"),
            ValueKind::Color(c) => {
                if c.alpha() == 1.0 {
                    write!(f, "rgb({}, {}, {})", c.red(), c.green(), c.blue())
                } else {
                    write!(f, "rgba({}, {}, {}, {})", c.red(), c.green(), c.blue(), c.alpha())
                }
            },
            ValueKind::String { text, quoted: true } => write!(f, "\"{text}\""),
            ValueKind::String { text, quoted: false } => write!(f, "{text}"),
            ValueKind::Bool(b) => write!(f, "{b}"),
            ValueKind::List { items, separator } => {
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, "{}", separator.as_str())?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(line: usize) -> Origin {
        Origin::at_line(line)
    }

    #[test]
    fn equality_ignores_origin() {
        assert_eq!(Value::number(1.0, at(1)), Value::number(1.0, at(9)));
        assert_ne!(Value::number(1.0, at(1)), Value::percentage(1.0, at(1)));
    }

    #[test]
    fn scalars_view_as_single_element_lists() {
        let n = Value::number(3.0, at(1));
        assert_eq!(n.list_items(), &[n.clone()]);
        assert!(Value::nil(at(1)).list_items().is_empty());
    }

    #[test]
    fn comparability_rules() {
        let five = Value::number(5.0, at(1));
        let half = Value::percentage(50.0, at(1));
        let px = Value::dimension(5.0, "px", at(1));
        let em = Value::dimension(5.0, "em", at(1));
        let pt = Value::dimension(5.0, "pt", at(1));
        let mm = Value::dimension(5.0, "mm", at(1));
        let text = Value::string("x", true, at(1));

        assert!(five.is_comparable(&half));
        assert!(half.is_comparable(&five));
        assert!(half.is_comparable(&half));
        assert!(!px.is_comparable(&em));
        assert!(pt.is_comparable(&mm));
        assert!(!half.is_comparable(&pt));
        assert!(!five.is_comparable(&text));
        assert!(!text.is_comparable(&text));
    }

    #[test]
    fn map_magnitude_keeps_origin_and_unit() {
        let v = Value::dimension(1.5, "em", at(4));
        let doubled = v.map_magnitude(|m| m * 2.0).unwrap();

        assert_eq!(doubled, Value::dimension(3.0, "em", at(0)));
        assert_eq!(doubled.origin.line, 4);
        assert!(Value::boolean(true, at(1)).map_magnitude(f64::abs).is_none());
    }

    #[test]
    fn display_renders_lists_and_colors() {
        let list = Value::list(vec![Value::dimension(1.0, "px", at(1)),
                                    Value::string("solid", false, at(1)),
                                    Value::color(Color::rgb(255.0, 0.0, 0.0), at(1))],
                               Separator::Space,
                               at(1));
        assert_eq!(list.to_string(), "1px solid rgb(255, 0, 0)");

        let faded = Value::color(Color::new(0.0, 0.0, 0.0, 0.5), at(1));
        assert_eq!(faded.to_string(), "rgba(0, 0, 0, 0.5)");
    }
}
