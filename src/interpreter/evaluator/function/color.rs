use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Call},
    value::core::{Color, Value},
};

/// Builds an opaque color from three channel numbers.
///
/// Channels are taken as given; nothing is clamped.
///
/// # Example
/// ```
/// use stylefn::interpreter::{
///     evaluator::function::core::call,
///     value::{
///         core::{Color, Value},
///         origin::Origin,
///     },
/// };
///
/// let o = Origin::default();
/// let args = vec![Value::number(10.0, o.clone()),
///                 Value::number(20.0, o.clone()),
///                 Value::number(30.0, o.clone())];
///
/// assert_eq!(call("rgb", args, &o).unwrap(),
///            Value::color(Color::new(10.0, 20.0, 30.0, 1.0), o));
/// ```
pub fn rgb(call: &Call<'_>) -> EvalResult<Value> {
    const DETAILS: &str = "arguments for rgb must be numbers";

    let red = call.arg(0)?;
    let color = Color::rgb(red.expect_number(DETAILS)?,
                           call.arg(1)?.expect_number(DETAILS)?,
                           call.arg(2)?.expect_number(DETAILS)?);

    Ok(Value::color(color, red.origin.clone()))
}

/// Builds a color from four channel numbers.
pub fn rgba(call: &Call<'_>) -> EvalResult<Value> {
    const DETAILS: &str = "arguments for rgba must be numbers";

    let red = call.arg(0)?;
    let color = Color::new(red.expect_number(DETAILS)?,
                           call.arg(1)?.expect_number(DETAILS)?,
                           call.arg(2)?.expect_number(DETAILS)?,
                           call.arg(3)?.expect_number(DETAILS)?);

    Ok(Value::color(color, red.origin.clone()))
}

/// Replaces the alpha channel of an existing color.
///
/// Both the color and the alpha are checked.
pub fn rgba_with_color(call: &Call<'_>) -> EvalResult<Value> {
    let base = call.arg(0)?;
    let color = base.expect_color("first argument to rgba must be a color")?;
    let alpha = call.arg(1)?.expect_number("alpha for rgba must be a number")?;

    Ok(Value::color(color.with_alpha(alpha), base.origin.clone()))
}

fn channel(call: &Call<'_>, read: fn(Color) -> f64) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let color = value.expect_color(&format!("argument to {} must be a color", call.name()))?;

    Ok(Value::number(read(color), value.origin.clone()))
}

pub fn red(call: &Call<'_>) -> EvalResult<Value> {
    channel(call, Color::red)
}

pub fn green(call: &Call<'_>) -> EvalResult<Value> {
    channel(call, Color::green)
}

pub fn blue(call: &Call<'_>) -> EvalResult<Value> {
    channel(call, Color::blue)
}

/// Mixes two colors evenly.
pub fn mix(call: &Call<'_>) -> EvalResult<Value> {
    mix_weighted(call.arg(0)?, call.arg(1)?, 50.0)
}

/// Mixes two colors, taking `$weight` percent of the first.
///
/// The weight may be a number, a percentage or a dimension; only its
/// magnitude is used.
pub fn mix_with_weight(call: &Call<'_>) -> EvalResult<Value> {
    let weight = call.arg(2)?
                     .expect_numeric("third argument to mix must be numeric")?;

    mix_weighted(call.arg(0)?, call.arg(1)?, weight)
}

/// Alpha-aware weighted interpolation between two colors.
///
/// With `p = weight / 100`, `w = 2p - 1` and `a` the difference of the two
/// alphas, the first color's share of each RGB channel is
/// `((w·a == -1 ? w : (w + a) / (1 + w·a)) + 1) / 2`. The result alpha is
/// interpolated linearly by `p`.
#[allow(clippy::float_cmp)]
fn mix_weighted(first: &Value, second: &Value, weight: f64) -> EvalResult<Value> {
    const DETAILS: &str = "first two arguments to mix must be colors";

    let left = first.expect_color(DETAILS)?;
    let right = second.expect_color(DETAILS)?;

    let p = weight / 100.0;
    let w = 2.0 * p - 1.0;
    let a = left.alpha() - right.alpha();

    let scaled = if w * a == -1.0 { w } else { (w + a) / (1.0 + w * a) };
    let w1 = (scaled + 1.0) / 2.0;
    let w2 = 1.0 - w1;

    let mixed = Color::new(w1 * left.red() + w2 * right.red(),
                           w1 * left.green() + w2 * right.green(),
                           w1 * left.blue() + w2 * right.blue(),
                           left.alpha() * p + right.alpha() * (1.0 - p));

    Ok(Value::color(mixed, first.origin.clone()))
}

/// Inverts the RGB channels of a color, keeping its alpha.
pub fn invert(call: &Call<'_>) -> EvalResult<Value> {
    let value = call.arg(0)?;
    let color = value.expect_color("argument to invert must be a color")?;

    let inverted = Color::new(255.0 - color.red(),
                              255.0 - color.green(),
                              255.0 - color.blue(),
                              color.alpha());

    Ok(Value::color(inverted, value.origin.clone()))
}
