/// Function and constant registry.
///
/// Maps case-insensitive names to the closed set of constants and unary
/// functions. The parser consults it to classify identifiers and the
/// evaluator consults it to execute them.
pub mod core;
/// Built-in constant values and function implementations.
///
/// Every function takes exactly one complex argument and returns the
/// principal value of the result.
pub mod builtin;
