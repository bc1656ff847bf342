/// The evaluator module executes postfix token queues over complex numbers.
///
/// The evaluator walks the RPN queue produced by the parser with a value
/// stack, applying operators, resolving constants and calling built-in
/// functions. It is the semantic stage of the pipeline.
///
/// # Responsibilities
/// - Parses number literals and pushes constants.
/// - Applies the arithmetic operators, including Gaussian-integer modulo.
/// - Reports semantic errors such as insufficient operands, a zero modulo
///   divisor or a malformed final stack.
pub mod evaluator;
/// The formatter module renders complex results as display strings.
///
/// It reads an explicit [`DisplayConfig`](crate::config::DisplayConfig) on
/// every call and never keeps state of its own.
pub mod formatter;
/// The lexer module tokenizes expressions for further parsing.
///
/// The lexer reads the raw expression and produces a stream of tokens, each
/// corresponding to a number, identifier, operator, grouping symbol or comma,
/// tagged with its byte offset. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input into positioned tokens terminated by `Eof`.
/// - Handles number literals with optional fraction and exponent.
/// - Reports the first illegal character.
pub mod lexer;
/// The parser module linearizes infix tokens into postfix order.
///
/// The parser runs a shunting-yard pass over the lexer's tokens, resolving
/// precedence and associativity, telling prefix signs from binary ones and
/// inserting the multiplications implied by juxtaposition.
///
/// # Responsibilities
/// - Produces an RPN queue for the evaluator.
/// - Checks that `()`, `[]` and `{}` pair up by kind.
/// - Reports sequencing errors with the offending token's position.
pub mod parser;
/// The value module holds helpers for the complex values the evaluator
/// computes with.
pub mod value;
