/// Floating-point helpers for display.
///
/// This module provides the rounding and tolerance checks the formatter uses
/// to decide whether a component is zero or integer-valued once it has been
/// rounded to the configured precision.
pub mod num;
