/// Core evaluation logic and context management.
///
/// Contains the evaluation engine, the runtime context, argument binding,
/// and the tolerances used for approximate comparisons.
pub mod core;

/// Function evaluation.
///
/// Holds the builtin registry, overload resolution, and every builtin
/// grouped by family.
pub mod function;
