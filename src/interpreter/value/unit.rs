/// Groups unit tokens whose magnitudes can be converted into one another.
///
/// `em` and `ex` are font-relative and only match themselves. The physical
/// units `in`, `cm`, `mm`, `pt` and `pc` interconvert. Every other token
/// belongs to no class and is never comparable, not even with itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// `em`
    Em,
    /// `ex`
    Ex,
    /// `in`, `cm`, `mm`, `pt`, `pc`
    Absolute,
}

impl UnitClass {
    /// Classifies a unit token, or `None` if it belongs to no class.
    ///
    /// # Example
    /// ```
    /// use stylefn::interpreter::value::unit::UnitClass;
    ///
    /// assert_eq!(UnitClass::of("pt"), UnitClass::of("mm"));
    /// assert_ne!(UnitClass::of("em"), UnitClass::of("ex"));
    /// assert_eq!(UnitClass::of("px"), None);
    /// ```
    #[must_use]
    pub fn of(unit: &str) -> Option<Self> {
        match unit {
            "em" => Some(Self::Em),
            "ex" => Some(Self::Ex),
            "in" | "cm" | "mm" | "pt" | "pc" => Some(Self::Absolute),
            _ => None,
        }
    }

    /// Whether magnitudes in `left` and `right` can be compared.
    #[must_use]
    pub fn compatible(left: &str, right: &str) -> bool {
        matches!((Self::of(left), Self::of(right)), (Some(l), Some(r)) if l == r)
    }
}

#[cfg(test)]
mod tests {
    use super::UnitClass;

    #[test]
    fn absolute_units_interconvert() {
        for left in ["in", "cm", "mm", "pt", "pc"] {
            for right in ["in", "cm", "mm", "pt", "pc"] {
                assert!(UnitClass::compatible(left, right), "{left} vs {right}");
            }
        }
    }

    #[test]
    fn font_relative_units_only_match_themselves() {
        assert!(UnitClass::compatible("em", "em"));
        assert!(UnitClass::compatible("ex", "ex"));
        assert!(!UnitClass::compatible("em", "ex"));
        assert!(!UnitClass::compatible("em", "pt"));
    }

    #[test]
    fn unclassified_units_are_never_compatible() {
        assert!(!UnitClass::compatible("px", "px"));
        assert!(!UnitClass::compatible("deg", "deg"));
        assert!(!UnitClass::compatible("px", "pt"));
        assert!(!UnitClass::compatible("px", "deg"));
    }
}
