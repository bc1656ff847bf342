/// Core parsing logic.
///
/// Contains the shunting-yard state machine that turns an infix token stream
/// into a postfix queue, and the parser's result type.
pub mod core;

/// Utility functions for the parser.
///
/// Provides the operator precedence and associativity tables and the checks
/// used to decide where a multiplication is implied.
pub mod utils;
