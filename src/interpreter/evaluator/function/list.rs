use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Call},
        value::core::{Separator, Value, ValueKind},
    },
    util::num::{f64_to_i64_checked, usize_to_f64_checked},
};

/// Number of elements: a list's item count, `0` for nil and `1` for any
/// other value.
pub fn length(call: &Call<'_>) -> EvalResult<Value> {
    let list = call.arg(0)?;
    let count = usize_to_f64_checked(list.list_items().len(), &list.origin)?;

    Ok(Value::number(count, list.origin.clone()))
}

/// Returns the `$n`th element of a list, counting from 1.
///
/// A negative `$n` counts back from the end, so `-1` is the last element.
/// Non-list values act as one-element lists.
///
/// # Errors
/// - `TypeMismatch` if `$n` is not a unitless number.
/// - `InvalidArgument` if `$n` is not an integer.
/// - `IndexOutOfBounds` if `$n` is `0` or points past either end.
///
/// # Example
/// ```
/// use stylefn::interpreter::{
///     evaluator::function::core::call,
///     value::{
///         core::{Separator, Value},
///         origin::Origin,
///     },
/// };
///
/// let o = Origin::default();
/// let list = Value::list(vec![Value::string("a", false, o.clone()),
///                             Value::string("b", false, o.clone())],
///                        Separator::Comma,
///                        o.clone());
///
/// let last = call("nth", vec![list, Value::number(-1.0, o.clone())], &o).unwrap();
/// assert_eq!(last, Value::string("b", false, o));
/// ```
pub fn nth(call: &Call<'_>) -> EvalResult<Value> {
    let list = call.arg(0)?;
    let n = call.arg(1)?;

    let index = f64_to_i64_checked(n.expect_number("second argument to nth must be a number")?,
                                   &n.origin)?;
    let items = list.list_items();

    resolve_index(items.len(), index).and_then(|position| items.get(position))
                                     .cloned()
                                     .ok_or_else(|| RuntimeError::IndexOutOfBounds { len:    items.len(),
                                                                                     found:  index,
                                                                                     origin: n.origin.clone(), })
}

/// Maps a 1-based (or negative, from the end) index to a 0-based position.
fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let magnitude = usize::try_from(index.unsigned_abs()).ok()?;

    match index {
        0 => None,
        i if i > 0 => Some(magnitude - 1).filter(|position| *position < len),
        _ => len.checked_sub(magnitude),
    }
}

/// Concatenates two lists, keeping the separator of the first non-nil one.
pub fn join(call: &Call<'_>) -> EvalResult<Value> {
    join_lists(call.arg(0)?, call.arg(1)?, None)
}

/// Concatenates two lists with an explicit `$separator`: `comma`, `space`,
/// or `auto` to behave like the two-argument form.
pub fn join_with_separator(call: &Call<'_>) -> EvalResult<Value> {
    let separator = requested_separator(call.arg(2)?)?;

    join_lists(call.arg(0)?, call.arg(1)?, separator)
}

fn requested_separator(value: &Value) -> EvalResult<Option<Separator>> {
    match &value.kind {
        ValueKind::String { text, .. } => match &**text {
            "comma" => Ok(Some(Separator::Comma)),
            "space" => Ok(Some(Separator::Space)),
            "auto" => Ok(None),
            other => {
                Err(RuntimeError::invalid_argument(format!("separator for join must be \"comma\", \"space\" or \"auto\", found \"{other}\""),
                                                   value))
            },
        },
        _ => Err(RuntimeError::type_mismatch("separator for join must be a string", value)),
    }
}

fn join_lists(first: &Value,
              second: &Value,
              requested: Option<Separator>)
              -> EvalResult<Value> {
    for operand in [first, second] {
        if !operand.is_list() {
            log::debug!("join: listified singleton {operand} at {}", operand.origin);
        }
    }

    if matches!(first.kind, ValueKind::Nil) && matches!(second.kind, ValueKind::Nil) {
        return Ok(Value::nil(first.origin.clone()));
    }

    // a non-nil scalar counts as a space-separated list
    let own_separator = |v: &Value| match v.kind {
        ValueKind::Nil => None,
        _ => Some(v.separator().unwrap_or(Separator::Space)),
    };
    let separator = requested.or_else(|| own_separator(first))
                             .or_else(|| own_separator(second))
                             .unwrap_or(Separator::Space);

    let items = first.list_items()
                     .iter()
                     .chain(second.list_items())
                     .cloned()
                     .collect::<Vec<_>>();

    Ok(Value::list(items, separator, first.origin.clone()))
}
