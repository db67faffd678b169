use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Call},
    value::core::{Value, ValueKind},
};

/// Logical negation that never fails.
///
/// Only `false` negates to `true`. Every other value, booleans and
/// non-booleans alike, gives `false`.
///
/// # Example
/// ```
/// use stylefn::interpreter::{
///     evaluator::function::core::call,
///     value::{core::Value, origin::Origin},
/// };
///
/// let o = Origin::default();
/// let negated = call("not", vec![Value::string("x", true, o.clone())], &o).unwrap();
///
/// assert_eq!(negated, Value::boolean(false, o));
/// ```
pub fn not(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;

    Ok(Value::boolean(matches!(value.kind, ValueKind::Bool(false)), value.origin.clone()))
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{
        evaluator::function::core::call,
        value::{core::Value, origin::Origin},
    };

    fn not(value: Value) -> Value {
        call("not", vec![value], &Origin::at_line(1)).unwrap()
    }

    #[test]
    fn negates_booleans() {
        let o = Origin::at_line(1);
        assert_eq!(not(Value::boolean(false, o.clone())), Value::boolean(true, o.clone()));
        assert_eq!(not(Value::boolean(true, o.clone())), Value::boolean(false, o));
    }

    #[test]
    fn everything_else_is_false() {
        let o = Origin::at_line(1);
        for value in [Value::nil(o.clone()),
                      Value::number(0.0, o.clone()),
                      Value::string("false", false, o.clone())]
        {
            assert_eq!(not(value), Value::boolean(false, o.clone()));
        }
    }
}
