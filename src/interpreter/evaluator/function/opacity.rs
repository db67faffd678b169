use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Call},
    value::core::{Color, Value},
};

/// Returns the alpha channel of a color. Also registered as `opacity`.
pub fn alpha(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let color = value.expect_color(&format!("argument to {} must be a color", call.name()))?;

    Ok(Value::number(color.alpha(), value.origin.clone()))
}

/// Makes a color more opaque by adding `$amount` to its alpha.
///
/// The result alpha is capped at `1`. There is no lower bound, so a
/// negative amount can push it below `0`.
pub fn opacify(call: &Call<'_>) -> EvalResult<Value> {
    adjust_alpha(call, |alpha, amount| (alpha + amount).min(1.0))
}

/// Makes a color more transparent by subtracting `$amount` from its alpha.
///
/// The result alpha never drops below `0`; there is no upper bound.
pub fn transparentize(call: &Call<'_>) -> EvalResult<Value> {
    adjust_alpha(call, |alpha, amount| (alpha - amount).max(0.0))
}

fn adjust_alpha(call: &Call<'_>, adjust: fn(f64, f64) -> f64) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let color: Color =
        value.expect_color(&format!("first argument to {} must be a color", call.name()))?;
    let amount =
        call.arg(1)?
            .expect_number(&format!("amount for {} must be a number", call.name()))?;

    Ok(Value::color(color.with_alpha(adjust(color.alpha(), amount)), value.origin.clone()))
}
