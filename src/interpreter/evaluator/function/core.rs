use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::{boolean, color, hsl, introspection, list, number, opacity, string},
        },
        value::{core::Value, origin::Origin},
    },
};

/// The caller-owned map from declared parameter name to bound value.
///
/// The same value may sit under several names, so builtins only ever read
/// from it.
pub type Bindings = HashMap<String, Value>;

/// Type alias for builtin function handlers.
///
/// A builtin reads its arguments through the [`Call`] and returns exactly one
/// value or raises an error.
type BuiltinFn = fn(&Call<'_>) -> EvalResult<Value>;

/// A builtin's name, its declared parameters, and its implementation.
///
/// The caller uses `params` to bind call-site arguments by position or by
/// name before invoking the builtin.
pub struct Descriptor {
    /// Canonical name, using `-` between words.
    pub name:   &'static str,
    /// Declared parameter names in order, each starting with `$`.
    pub params: &'static [&'static str],
    func:       BuiltinFn,
}

impl Descriptor {
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// One invocation of a builtin: the descriptor that was resolved, the
/// caller's bindings, and the call site.
pub struct Call<'a> {
    descriptor: &'static Descriptor,
    bindings:   &'a Bindings,
    origin:     &'a Origin,
}

impl<'a> Call<'a> {
    /// Returns the value bound to the `index`th declared parameter.
    ///
    /// # Errors
    /// `MissingArgument` if the caller bound nothing under that name.
    pub fn arg(&self, index: usize) -> EvalResult<&'a Value> {
        let name = self.descriptor.params[index];
        self.bindings
            .get(name)
            .ok_or_else(|| RuntimeError::MissingArgument { name:   name.to_string(),
                                                           origin: self.origin.clone(), })
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }
}

/// Defines builtin functions by generating the descriptor table.
///
/// Each entry provides:
/// - a name,
/// - the declared parameter names,
/// - a function pointer implementing the builtin.
///
/// A name may appear more than once with different parameter counts; each
/// entry is a separate overload.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                params: [$($param:literal),* $(,)?],
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every builtin descriptor, overloads adjacent to one another.
        pub static DESCRIPTORS: &[Descriptor] = &[
            $(
                Descriptor { name: $name, params: &[$($param),*], func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "rgb"            => { params: ["$red", "$green", "$blue"], func: color::rgb },
    "rgba"           => { params: ["$red", "$green", "$blue", "$alpha"], func: color::rgba },
    "rgba"           => { params: ["$color", "$alpha"], func: color::rgba_with_color },
    "red"            => { params: ["$color"], func: color::red },
    "green"          => { params: ["$color"], func: color::green },
    "blue"           => { params: ["$color"], func: color::blue },
    "mix"            => { params: ["$color1", "$color2"], func: color::mix },
    "mix"            => { params: ["$color1", "$color2", "$weight"], func: color::mix_with_weight },
    "invert"         => { params: ["$color"], func: color::invert },
    "hsl"            => { params: ["$hue", "$saturation", "$lightness"], func: hsl::hsl },
    "hsla"           => { params: ["$hue", "$saturation", "$lightness", "$alpha"], func: hsl::hsla },
    "alpha"          => { params: ["$color"], func: opacity::alpha },
    "opacity"        => { params: ["$color"], func: opacity::alpha },
    "opacify"        => { params: ["$color", "$amount"], func: opacity::opacify },
    "fade-in"        => { params: ["$color", "$amount"], func: opacity::opacify },
    "transparentize" => { params: ["$color", "$amount"], func: opacity::transparentize },
    "fade-out"       => { params: ["$color", "$amount"], func: opacity::transparentize },
    "unquote"        => { params: ["$string"], func: string::unquote },
    "quote"          => { params: ["$string"], func: string::quote },
    "percentage"     => { params: ["$value"], func: number::percentage },
    "round"          => { params: ["$value"], func: number::round },
    "ceil"           => { params: ["$value"], func: number::ceil },
    "floor"          => { params: ["$value"], func: number::floor },
    "abs"            => { params: ["$value"], func: number::abs },
    "length"         => { params: ["$list"], func: list::length },
    "nth"            => { params: ["$list", "$n"], func: list::nth },
    "join"           => { params: ["$list1", "$list2"], func: list::join },
    "join"           => { params: ["$list1", "$list2", "$separator"], func: list::join_with_separator },
    "type-of"        => { params: ["$value"], func: introspection::type_of },
    "unit"           => { params: ["$number"], func: introspection::unit },
    "unitless"       => { params: ["$number"], func: introspection::unitless },
    "comparable"     => { params: ["$number1", "$number2"], func: introspection::comparable },
    "not"            => { params: ["$value"], func: boolean::not },
}

/// Canonical spelling of a function name: `_` and `-` are interchangeable.
///
/// # Example
/// ```
/// use stylefn::interpreter::evaluator::function::core::normalize_name;
///
/// assert_eq!(normalize_name("fade_in"), "fade-in");
/// assert_eq!(normalize_name("type-of"), "type-of");
/// ```
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.replace('_', "-")
}

/// Every distinct builtin name, in table order.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter()
               .enumerate()
               .filter(|(i, d)| *i == 0 || DESCRIPTORS[i - 1].name != d.name)
               .map(|(_, d)| d.name)
}

/// Returns `true` if any overload of `name` exists.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    let name = normalize_name(name);
    DESCRIPTORS.iter().any(|d| d.name == name)
}

/// Resolves the overload of `name` that takes `arity` arguments.
///
/// # Errors
/// - `UnknownFunction` if no builtin has this name.
/// - `ArgumentCountMismatch` if the name exists but no overload takes
///   `arity` arguments.
pub fn lookup(name: &str, arity: usize, origin: &Origin) -> EvalResult<&'static Descriptor> {
    if !is_builtin(name) {
        return Err(RuntimeError::UnknownFunction { name:   name.to_string(),
                                                   origin: origin.clone(), });
    }

    let canonical = normalize_name(name);
    DESCRIPTORS.iter()
               .find(|d| d.name == canonical && d.arity() == arity)
               .ok_or_else(|| RuntimeError::ArgumentCountMismatch { name:   name.to_string(),
                                                                    found:  arity,
                                                                    origin: origin.clone(), })
}

/// Runs a builtin against bindings the caller has already built.
///
/// # Errors
/// Whatever the builtin raises, or `MissingArgument` if a declared
/// parameter is unbound.
pub fn invoke(descriptor: &'static Descriptor,
              bindings: &Bindings,
              origin: &Origin)
              -> EvalResult<Value> {
    log::trace!("invoking {}/{} at {origin}", descriptor.name, descriptor.arity());

    (descriptor.func)(&Call { descriptor,
                              bindings,
                              origin })
}

/// Binds `args` to the declared parameters in order and invokes the
/// matching overload of `name`.
///
/// # Example
/// ```
/// use stylefn::interpreter::{
///     evaluator::function::core::call,
///     value::{core::Value, origin::Origin},
/// };
///
/// let origin = Origin::at_line(1);
/// let args = vec![Value::number(1.5, origin.clone())];
///
/// assert_eq!(call("round", args, &origin).unwrap(), Value::number(2.0, origin));
/// ```
pub fn call(name: &str, args: Vec<Value>, origin: &Origin) -> EvalResult<Value> {
    let descriptor = lookup(name, args.len(), origin)?;
    let bindings = descriptor.params
                             .iter()
                             .map(|param| (*param).to_string())
                             .zip(args)
                             .collect::<Bindings>();

    invoke(descriptor, &bindings, origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overloads_resolve_by_arity() {
        let origin = Origin::default();
        assert_eq!(lookup("rgba", 4, &origin).unwrap().params[0], "$red");
        assert_eq!(lookup("rgba", 2, &origin).unwrap().params[0], "$color");
        assert_eq!(lookup("mix", 3, &origin).unwrap().params[2], "$weight");
    }

    #[test]
    fn names_accept_underscores() {
        let origin = Origin::default();
        assert_eq!(lookup("fade_in", 2, &origin).unwrap().name, "fade-in");
        assert_eq!(lookup("type_of", 1, &origin).unwrap().name, "type-of");
        assert!(is_builtin("fade_out"));
        assert!(!is_builtin("lighten"));
    }

    #[test]
    fn unknown_name_and_wrong_arity_are_distinguished() {
        let origin = Origin::at_line(2);
        assert!(matches!(lookup("lighten", 2, &origin),
                         Err(RuntimeError::UnknownFunction { .. })));
        assert!(matches!(lookup("rgb", 2, &origin),
                         Err(RuntimeError::ArgumentCountMismatch { found: 2, .. })));
        assert!(matches!(lookup("fade_in", 3, &origin),
                         Err(RuntimeError::ArgumentCountMismatch { found: 3, .. })));
    }

    #[test]
    fn builtin_names_are_distinct() {
        let names = builtin_names().collect::<Vec<_>>();
        let mut deduped = names.clone();
        deduped.sort_unstable();
        deduped.dedup();

        assert_eq!(names.len(), deduped.len());
        assert!(names.contains(&"rgba"));
        assert!(names.contains(&"not"));
    }

    #[test]
    fn missing_binding_is_reported_at_call_site() {
        let origin = Origin::at_line(12);
        let descriptor = lookup("red", 1, &origin).unwrap();
        let err = invoke(descriptor, &Bindings::new(), &origin).unwrap_err();

        assert_eq!(err,
                   RuntimeError::MissingArgument { name:   "$color".to_string(),
                                                   origin: Origin::at_line(12), });
    }

    #[test]
    fn every_descriptor_declares_dollar_parameters() {
        for descriptor in DESCRIPTORS {
            assert!(descriptor.params.iter().all(|p| p.starts_with('$')),
                    "{} has a parameter without `$`",
                    descriptor.name);
        }
    }
}
