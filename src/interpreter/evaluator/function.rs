/// Boolean builtins.
///
/// Implements `not`.
pub mod boolean;
/// RGB color builtins.
///
/// Builds colors from channels, reads channels back out, mixes two colors
/// and inverts one.
pub mod color;
/// HSL color builtins.
///
/// Converts hue, saturation and lightness into an RGB color.
pub mod hsl;
/// Type introspection builtins.
///
/// `type-of`, `unit`, `unitless` and `comparable`.
pub mod introspection;
/// List builtins.
///
/// `length`, `nth` and `join`. Any value that is not a list is treated as a
/// one-element space-separated list.
pub mod list;
/// Numeric builtins.
///
/// Rounding, absolute value and conversion to a percentage.
pub mod number;
/// Opacity builtins.
///
/// Reads and adjusts the alpha channel of a color.
pub mod opacity;
/// String builtins.
///
/// `quote` and `unquote`.
pub mod string;

pub mod core;
