use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Call},
        value::core::Value,
    },
};

/// Multiplies the magnitude of a number by 100 and makes it a percentage.
///
/// `percentage(0.5)` is `50%`. Any numeric variant is accepted and its unit
/// dropped, so `percentage(50%)` is `5000%` and `percentage(2px)` is `200%`.
pub fn percentage(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let n = value.expect_numeric("argument to percentage must be numeric")?;

    Ok(Value::percentage(n * 100.0, value.origin.clone()))
}

/// Applies a function to the numeric part of a value.
///
/// The generated builtins accept numbers, percentages and dimensions and
/// return the same variant with the same unit. Anything else raises a type
/// mismatch.
macro_rules! magnitude_builtin {
    ($(#[$meta:meta])* $fname:ident, $op:expr) => {
        $(#[$meta])*
        pub fn $fname(call: &Call<'_>) -> EvalResult<Value> {
            let value = call.arg(0)?;

            value.map_magnitude($op).ok_or_else(|| {
                RuntimeError::type_mismatch(concat!("argument to ", stringify!($fname), " must be numeric"),
                                            value)
            })
        }
    };
}

magnitude_builtin!(
    /// Rounds half up: `round(1.5)` is `2` and `round(-1.5)` is `-1`.
    round,
    |m: f64| (m + 0.5).floor()
);
magnitude_builtin!(ceil, f64::ceil);
magnitude_builtin!(floor, f64::floor);
magnitude_builtin!(abs, f64::abs);
