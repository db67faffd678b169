use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Call},
    value::core::{Value, ValueKind},
};

/// Drops the quotes from a string. Any other value comes back as it is.
pub fn unquote(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;

    Ok(match &value.kind {
        ValueKind::String { text, .. } => Value::string(text.clone(), false, value.origin.clone()),
        _ => value.clone(),
    })
}

/// Turns any value into a quoted string.
///
/// Non-strings are accepted and quoted as they render, so
/// `quote(10px)` is `"10px"`.
pub fn quote(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;

    Ok(match &value.kind {
        ValueKind::String { text, .. } => Value::string(text.clone(), true, value.origin.clone()),
        _ => Value::string(value.to_string(), true, value.origin.clone()),
    })
}

#[cfg(test)]
mod tests {
    use crate::interpreter::{
        evaluator::function::core::call,
        value::{core::Value, origin::Origin},
    };

    fn run(name: &str, arg: Value) -> Value {
        call(name, vec![arg], &Origin::at_line(1)).unwrap()
    }

    fn text(s: &str, quoted: bool) -> Value {
        Value::string(s, quoted, Origin::at_line(1))
    }

    #[test]
    fn unquote_and_quote_toggle_the_flag() {
        assert_eq!(run("unquote", text("Helvetica", true)), text("Helvetica", false));
        assert_eq!(run("quote", text("Helvetica", false)), text("Helvetica", true));
        assert_eq!(run("quote", text("a b", true)), text("a b", true));
    }

    #[test]
    fn unquote_leaves_other_values_alone() {
        let n = Value::number(3.0, Origin::at_line(1));
        assert_eq!(run("unquote", n.clone()), n);
    }

    #[test]
    fn quote_accepts_non_strings() {
        let px = Value::dimension(10.0, "px", Origin::at_line(1));
        assert_eq!(run("quote", px), text("10px", true));
        assert_eq!(run("quote", Value::boolean(true, Origin::at_line(1))), text("true", true));
    }
}
