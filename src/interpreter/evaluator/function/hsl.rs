use crate::interpreter::{
    evaluator::{core::EvalResult, function::core::Call},
    value::core::{Color, Value},
};

/// Converts an HSL color with alpha into an RGB color.
///
/// `hue` is in degrees and is first floored and wrapped into `[0, 360)`.
/// `saturation` and `lightness` are percentages in `0..=100`. The RGB
/// channels come out in `0..=255`.
///
/// # Example
/// ```
/// use stylefn::interpreter::evaluator::function::hsl::hsla_to_color;
///
/// let green = hsla_to_color(120.0, 100.0, 50.0, 1.0);
///
/// assert!(green.red().abs() < 1e-9);
/// assert!((green.green() - 255.0).abs() < 1e-9);
/// assert!(green.blue().abs() < 1e-9);
/// ```
#[must_use]
pub fn hsla_to_color(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Color {
    let h = hue.floor().rem_euclid(360.0) / 360.0;
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;

    Color::new(hue_to_channel(m1, m2, h + 1.0 / 3.0) * 255.0,
               hue_to_channel(m1, m2, h) * 255.0,
               hue_to_channel(m1, m2, h - 1.0 / 3.0) * 255.0,
               alpha)
}

fn hue_to_channel(m1: f64, m2: f64, mut h: f64) -> f64 {
    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

pub fn hsl(call: &Call<'_>) -> EvalResult<Value> {
    const DETAILS: &str = "arguments to hsl must be numeric";

    let hue = call.arg(0)?;
    let color = hsla_to_color(hue.expect_numeric(DETAILS)?,
                              call.arg(1)?.expect_numeric(DETAILS)?,
                              call.arg(2)?.expect_numeric(DETAILS)?,
                              1.0);

    Ok(Value::color(color, hue.origin.clone()))
}

pub fn hsla(call: &Call<'_>) -> EvalResult<Value> {
    const DETAILS: &str = "arguments to hsla must be numeric";

    let hue = call.arg(0)?;
    let color = hsla_to_color(hue.expect_numeric(DETAILS)?,
                              call.arg(1)?.expect_numeric(DETAILS)?,
                              call.arg(2)?.expect_numeric(DETAILS)?,
                              call.arg(3)?.expect_numeric(DETAILS)?);

    Ok(Value::color(color, hue.origin.clone()))
}

#[cfg(test)]
mod tests {
    use super::hsla_to_color;
    use crate::interpreter::{
        evaluator::{
            core::{ABS_TOLERANCE, REL_TOLERANCE},
            function::core::call,
        },
        value::{
            core::{Color, Value},
            origin::Origin,
        },
    };

    fn assert_close(actual: Color, expected: Color) {
        let o = Origin::default();
        assert!(Value::color(actual, o.clone()).is_close(&Value::color(expected, o),
                                                          REL_TOLERANCE,
                                                          ABS_TOLERANCE),
                "{actual:?} != {expected:?}");
    }

    #[test]
    fn primary_hues() {
        assert_close(hsla_to_color(0.0, 100.0, 50.0, 1.0), Color::rgb(255.0, 0.0, 0.0));
        assert_close(hsla_to_color(120.0, 100.0, 50.0, 1.0), Color::rgb(0.0, 255.0, 0.0));
        assert_close(hsla_to_color(240.0, 100.0, 50.0, 1.0), Color::rgb(0.0, 0.0, 255.0));
    }

    #[test]
    fn hue_wraps_around_the_circle() {
        assert_close(hsla_to_color(360.0, 100.0, 50.0, 1.0), hsla_to_color(0.0, 100.0, 50.0, 1.0));
        assert_close(hsla_to_color(-120.0, 100.0, 50.0, 1.0),
                     hsla_to_color(240.0, 100.0, 50.0, 1.0));
        assert_close(hsla_to_color(480.5, 100.0, 50.0, 1.0),
                     hsla_to_color(120.0, 100.0, 50.0, 1.0));
    }

    #[test]
    fn lightness_extremes_and_grey() {
        assert_close(hsla_to_color(200.0, 80.0, 0.0, 1.0), Color::rgb(0.0, 0.0, 0.0));
        assert_close(hsla_to_color(200.0, 80.0, 100.0, 1.0), Color::rgb(255.0, 255.0, 255.0));
        assert_close(hsla_to_color(30.0, 0.0, 50.0, 1.0), Color::rgb(127.5, 127.5, 127.5));
    }

    #[test]
    fn hsla_keeps_alpha_and_hsl_is_opaque() {
        let o = Origin::at_line(3);
        let n = |v: f64| Value::number(v, o.clone());

        let with_alpha = call("hsla", vec![n(0.0), n(100.0), n(50.0), n(0.25)], &o).unwrap();
        let opaque = call("hsl", vec![n(0.0), n(100.0), n(50.0)], &o).unwrap();

        assert!(with_alpha.is_close(&Value::color(Color::new(255.0, 0.0, 0.0, 0.25), o.clone()),
                                    REL_TOLERANCE,
                                    ABS_TOLERANCE));
        assert!(opaque.is_close(&Value::color(Color::rgb(255.0, 0.0, 0.0), o),
                                REL_TOLERANCE,
                                ABS_TOLERANCE));
        assert_eq!(opaque.origin.line, 3);
    }

    #[test]
    fn accepts_percentages_and_rejects_strings() {
        let o = Origin::default();
        let args = vec![Value::dimension(120.0, "deg", o.clone()),
                        Value::percentage(100.0, o.clone()),
                        Value::percentage(50.0, o.clone())];
        assert!(call("hsl", args, &o).is_ok());

        let args = vec![Value::string("red", false, o.clone()),
                        Value::number(1.0, o.clone()),
                        Value::number(1.0, o.clone())];
        assert!(call("hsl", args, &o).is_err());
    }
}
