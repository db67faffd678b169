/// Source provenance.
///
/// Defines `Origin`, the line and file a value was read from. Builtins copy
/// the origin of the operand they derive a result from so that errors raised
/// further along still point at the right place in the stylesheet.
pub mod origin;
/// Unit compatibility classes.
///
/// Decides which dimension units can be compared or converted into one
/// another.
pub mod unit;

pub mod core;
