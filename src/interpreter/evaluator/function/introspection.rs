use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Call},
        value::core::{Value, ValueKind},
    },
};

/// The type name of a value as an unquoted string.
///
/// Numbers, percentages and dimensions are all `number`; nil is a `list`.
pub fn type_of(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;

    Ok(Value::string(value.tag().type_name(), false, value.origin.clone()))
}

/// The unit of a number as a quoted string: `""`, `"%"` or e.g. `"px"`.
pub fn unit(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let unit = value.unit()
                    .ok_or_else(|| RuntimeError::type_mismatch("argument to unit must be numeric", value))?;

    Ok(Value::string(unit, true, value.origin.clone()))
}

pub fn unitless(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let unitless = match value.kind {
        ValueKind::Number(_) => true,
        ValueKind::Percentage(_) | ValueKind::Dimension { .. } => false,
        _ => return Err(RuntimeError::type_mismatch("argument to unitless must be numeric", value)),
    };

    Ok(Value::boolean(unitless, value.origin.clone()))
}

/// Whether two numbers can be added, subtracted or compared.
///
/// Never fails; values that are not numbers are simply not comparable.
pub fn comparable(call: &Call<'_>) -> EvalResult<Value> {
    let first = call.arg(0)?;
    let second = call.arg(1)?;

    Ok(Value::boolean(first.is_comparable(second), first.origin.clone()))
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{
            evaluator::function::core::call,
            value::{
                core::{Color, Separator, Value},
                origin::Origin,
            },
        },
    };

    fn o() -> Origin {
        Origin::at_line(1)
    }

    fn run(name: &str, args: Vec<Value>) -> Result<Value, RuntimeError> {
        call(name, args, &o())
    }

    fn word(s: &str) -> Value {
        Value::string(s, false, o())
    }

    fn quoted(s: &str) -> Value {
        Value::string(s, true, o())
    }

    fn boolean(b: bool) -> Value {
        Value::boolean(b, o())
    }

    #[test]
    fn type_of_every_variant() {
        let cases = [(Value::number(1.0, o()), "number"),
                     (Value::dimension(1.0, "px", o()), "number"),
                     (Value::percentage(1.0, o()), "number"),
                     (boolean(false), "bool"),
                     (quoted("x"), "string"),
                     (word("x"), "string"),
                     (Value::color(Color::rgb(0.0, 0.0, 0.0), o()), "color"),
                     (Value::list(vec![word("a"), word("b")], Separator::Space, o()), "list"),
                     (Value::nil(o()), "list")];

        for (value, expected) in cases {
            assert_eq!(run("type-of", vec![value]).unwrap(), word(expected));
        }
    }

    #[test]
    fn unit_of_numbers() {
        assert_eq!(run("unit", vec![Value::number(1.0, o())]).unwrap(), quoted(""));
        assert_eq!(run("unit", vec![Value::percentage(1.0, o())]).unwrap(), quoted("%"));
        assert_eq!(run("unit", vec![Value::dimension(1.0, "em", o())]).unwrap(), quoted("em"));
        assert!(matches!(run("unit", vec![word("px")]), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn unitless_of_numbers() {
        assert_eq!(run("unitless", vec![Value::number(1.0, o())]).unwrap(), boolean(true));
        assert_eq!(run("unitless", vec![Value::percentage(1.0, o())]).unwrap(), boolean(false));
        assert_eq!(run("unitless", vec![Value::dimension(1.0, "px", o())]).unwrap(),
                   boolean(false));
        assert!(matches!(run("unitless", vec![Value::nil(o())]),
                         Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn comparable_follows_unit_classes() {
        let pair = |a: Value, b: Value| run("comparable", vec![a, b]).unwrap();

        assert_eq!(pair(Value::number(5.0, o()), Value::percentage(50.0, o())), boolean(true));
        assert_eq!(pair(Value::dimension(5.0, "px", o()), Value::dimension(5.0, "em", o())),
                   boolean(false));
        assert_eq!(pair(Value::dimension(5.0, "pt", o()), Value::dimension(5.0, "mm", o())),
                   boolean(true));
        assert_eq!(pair(Value::number(5.0, o()), quoted("5")), boolean(false));
        assert_eq!(pair(Value::dimension(5.0, "px", o()), Value::dimension(5.0, "px", o())),
                   boolean(false));
    }
}
