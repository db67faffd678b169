/// Numeric conversion helpers.
///
/// Converts between `usize`, `i64` and `f64` without silent data loss. Every
/// helper returns an `EvalResult` that fails with `InvalidArgument` when the
/// conversion would round, truncate or overflow.
pub mod num;
