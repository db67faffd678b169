use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::origin::Origin},
};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `InvalidArgument` if the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use stylefn::{interpreter::value::origin::Origin, util::num::usize_to_f64_checked};
///
/// let val = usize_to_f64_checked(100, &Origin::default()).unwrap();
/// assert_eq!(val, 100.0);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize, origin: &Origin) -> EvalResult<f64> {
    if value as u64 > MAX_SAFE_U64_INT {
        return Err(RuntimeError::InvalidArgument { details: format!("{value} is too large to be a number"),
                                                   origin:  origin.clone(), });
    }

    Ok(value as f64)
}

/// Safely converts an `f64` to `i64` if the value is finite, within range,
/// and not fractional.
///
/// ## Errors
/// Returns `InvalidArgument` for non-finite, out-of-range, or fractional
/// values.
///
/// ## Example
/// ```
/// use stylefn::{
///     error::RuntimeError,
///     interpreter::value::origin::Origin,
///     util::num::f64_to_i64_checked,
/// };
///
/// let origin = Origin::at_line(3);
///
/// assert_eq!(f64_to_i64_checked(-2.0, &origin).unwrap(), -2);
///
/// let err = f64_to_i64_checked(1.5, &origin).unwrap_err();
/// assert!(matches!(err, RuntimeError::InvalidArgument { .. }));
/// assert_eq!(err.line(), 3);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_to_i64_checked(value: f64, origin: &Origin) -> EvalResult<i64> {
    let reject = |why: &str| {
        Err(RuntimeError::InvalidArgument { details: format!("{value} {why}"),
                                            origin:  origin.clone(), })
    };

    if !value.is_finite() {
        return reject("is not a finite number");
    }
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return reject("is out of range");
    }
    if value.fract() != 0.0 {
        return reject("is not an integer");
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite_and_huge_values() {
        let origin = Origin::at_line(1);
        assert!(f64_to_i64_checked(f64::NAN, &origin).is_err());
        assert!(f64_to_i64_checked(f64::INFINITY, &origin).is_err());
        assert!(f64_to_i64_checked(1e30, &origin).is_err());
        assert!(f64_to_i64_checked(9_223_372_036_854_775_808.0, &origin).is_err());
        assert_eq!(f64_to_i64_checked(-9_223_372_036_854_775_808.0, &origin), Ok(i64::MIN));
        assert_eq!(f64_to_i64_checked(0.0, &origin), Ok(0));
    }
}
