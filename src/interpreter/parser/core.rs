use tracing::{debug, trace};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::function::core::Builtin,
        lexer::{Token, TokenKind},
        parser::utils::{can_start_operand, is_operator, should_pop},
    },
};

pub type ParseResult<T> = Result<T, EvalError>;

/// Shunting-yard state for one token stream.
///
/// Operators, pending function names and opening delimiters wait on
/// `operators` until their operands have been emitted to `output`.
/// `expect_operand` is `true` at the start of an expression and after an
/// operator, opening delimiter or comma; it is `false` after a number,
/// constant or closing delimiter.
struct Parser<'a> {
    tokens:         &'a [Token],
    output:         Vec<Token>,
    operators:      Vec<Token>,
    expect_operand: bool,
}

/// Converts an infix token stream into postfix order.
///
/// This is the entry point for parsing. It resolves precedence and
/// associativity, turns prefix `-` into `UnaryMinus`, drops prefix `+`,
/// inserts the multiplications implied by juxtaposition (`2pi`, `3(4)`) and
/// checks that grouping symbols pair up by kind.
///
/// The resulting queue is not checked for stack balance; that is left to the
/// evaluator.
///
/// # Parameters
/// - `tokens`: Lexer output, normally terminated by `Eof`.
///
/// # Errors
/// - `EmptyExpression` for an empty stream or one holding only `Eof`.
/// - `UnexpectedOperator` / `UnexpectedComma` where an operand is required.
/// - `UnknownIdentifier` for unregistered names.
/// - `MissingArgument` for a function name not followed by an opener.
/// - `MissingOperand` for `()` and similar.
/// - `MismatchedDelimiter`, `UnclosedDelimiter`, `MismatchedComma` for
///   unbalanced grouping.
///
/// # Example
/// ```
/// use toycalc::interpreter::{lexer::lex, parser::core::parse_to_rpn};
///
/// let rpn = parse_to_rpn(&lex("1 + 2 * 3").unwrap()).unwrap();
/// let text: Vec<_> = rpn.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(text, ["1", "2", "3", "*", "+"]);
///
/// let rpn = parse_to_rpn(&lex("2(3)").unwrap()).unwrap();
/// let text: Vec<_> = rpn.iter().map(|t| t.text.as_str()).collect();
/// assert_eq!(text, ["2", "3", "*"]);
/// ```
pub fn parse_to_rpn(tokens: &[Token]) -> ParseResult<Vec<Token>> {
    if tokens.iter().all(|token| token.kind == TokenKind::Eof) {
        return Err(EvalError::EmptyExpression);
    }

    let mut parser = Parser { tokens,
                              output: Vec::with_capacity(tokens.len()),
                              operators: Vec::new(),
                              expect_operand: true };
    parser.run()?;

    debug!(tokens = tokens.len(), rpn = parser.output.len(), "parsed to postfix");
    Ok(parser.output)
}

impl Parser<'_> {
    fn run(&mut self) -> ParseResult<()> {
        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            if token.kind == TokenKind::Eof {
                break;
            }

            // Two phases: an operand arriving where an operator belongs first
            // pushes an implied `*`, then the same token is handled below with
            // `expect_operand` set.
            if !self.expect_operand && can_start_operand(token) {
                trace!(position = token.position, "implied multiplication");
                self.push_operator(Token::synthetic(TokenKind::Star, token.position));
                self.expect_operand = true;
            }

            match token.kind {
                TokenKind::Number => self.number(token)?,
                TokenKind::Ident => self.identifier(token, tokens.get(index + 1))?,
                TokenKind::Plus | TokenKind::Minus => self.additive(token),
                TokenKind::Star | TokenKind::Slash | TokenKind::Percent | TokenKind::Caret => {
                    self.multiplicative(token)?;
                },
                TokenKind::Comma => self.comma(token)?,
                kind if kind.is_left_grouping() => self.open(token)?,
                kind if kind.is_right_grouping() => self.close(token)?,
                _ => {
                    return Err(EvalError::UnexpectedToken { token:    token.text.clone(),
                                                            position: token.position, });
                },
            }
        }

        self.drain()
    }

    fn number(&mut self, token: &Token) -> ParseResult<()> {
        if !self.expect_operand {
            return Err(EvalError::UnexpectedNumber { literal:  token.text.clone(),
                                                     position: token.position, });
        }
        self.output.push(token.clone());
        self.expect_operand = false;
        Ok(())
    }

    /// Constants go straight to the output. Function names wait on the
    /// operator stack for their closing delimiter, and must be followed by an
    /// opening one.
    fn identifier(&mut self, token: &Token, next: Option<&Token>) -> ParseResult<()> {
        match Builtin::lookup(&token.text) {
            Some(Builtin::Constant(_)) => {
                self.output.push(token.clone());
                self.expect_operand = false;
                Ok(())
            },
            Some(Builtin::Function(_)) => {
                if !next.is_some_and(|next| next.kind.is_left_grouping()) {
                    return Err(EvalError::MissingArgument { name:     token.text.clone(),
                                                            position: token.position, });
                }
                self.operators.push(token.clone());
                Ok(())
            },
            None => Err(EvalError::UnknownIdentifier { name:     token.text.clone(),
                                                       position: token.position, }),
        }
    }

    /// `+` and `-` are binary after an operand and prefix otherwise. A prefix
    /// `+` is dropped; a prefix `-` becomes `UnaryMinus`, which has no left
    /// operand and so is pushed without popping anything.
    ///
    /// This departs from the usual right-associative reduction, which would
    /// pop a stacked `^` here and turn `2^-3` into `2 ^ 3 neg`. Skipping it
    /// keeps the negation inside the exponent: `2 3 neg ^`.
    fn additive(&mut self, token: &Token) {
        if self.expect_operand {
            if token.kind == TokenKind::Minus {
                self.operators
                    .push(Token::synthetic(TokenKind::UnaryMinus, token.position));
            }
            return;
        }
        self.push_operator(token.clone());
        self.expect_operand = true;
    }

    fn multiplicative(&mut self, token: &Token) -> ParseResult<()> {
        if self.expect_operand {
            return Err(EvalError::UnexpectedOperator { operator: token.text.clone(),
                                                       position: token.position, });
        }
        self.push_operator(token.clone());
        self.expect_operand = true;
        Ok(())
    }

    fn comma(&mut self, token: &Token) -> ParseResult<()> {
        if self.expect_operand {
            return Err(EvalError::UnexpectedComma { position: token.position });
        }
        loop {
            match self.top_kind() {
                Some(kind) if kind.is_left_grouping() => break,
                Some(_) => self.emit_top(),
                None => return Err(EvalError::MismatchedComma { position: token.position }),
            }
        }
        self.expect_operand = true;
        Ok(())
    }

    fn open(&mut self, token: &Token) -> ParseResult<()> {
        let confirms_call = self.top_kind() == Some(TokenKind::Ident);
        if !confirms_call && !self.expect_operand {
            return Err(EvalError::UnexpectedDelimiter { delimiter: token.text.clone(),
                                                        position:  token.position, });
        }
        self.operators.push(token.clone());
        self.expect_operand = true;
        Ok(())
    }

    /// Pops operators until the opener of the same kind, then emits the
    /// function name waiting beneath it, if any.
    fn close(&mut self, token: &Token) -> ParseResult<()> {
        if self.expect_operand {
            return Err(EvalError::MissingOperand { delimiter: token.text.clone(),
                                                   position:  token.position, });
        }

        let opener = token.kind.matching_opener();
        loop {
            match self.top_kind() {
                Some(kind) if Some(kind) == opener => {
                    self.operators.pop();
                    break;
                },
                Some(kind) if !kind.is_left_grouping() => self.emit_top(),
                _ => {
                    return Err(EvalError::MismatchedDelimiter { delimiter: token.text.clone(),
                                                                position:  token.position, });
                },
            }
        }

        if self.top_kind() == Some(TokenKind::Ident) {
            self.emit_top();
        }
        self.expect_operand = false;
        Ok(())
    }

    fn drain(&mut self) -> ParseResult<()> {
        while let Some(top) = self.operators.pop() {
            if top.kind.is_left_grouping() {
                return Err(EvalError::UnclosedDelimiter { delimiter: top.text,
                                                          position:  top.position, });
            }
            self.output.push(top);
        }
        Ok(())
    }

    /// Pops every stacked operator that binds at least as tightly as
    /// `operator`, then pushes it.
    fn push_operator(&mut self, operator: Token) {
        while let Some(kind) = self.top_kind()
              && is_operator(kind)
              && should_pop(operator.kind, kind)
        {
            self.emit_top();
        }
        self.operators.push(operator);
    }

    fn top_kind(&self) -> Option<TokenKind> {
        self.operators.last().map(|top| top.kind)
    }

    fn emit_top(&mut self) {
        if let Some(top) = self.operators.pop() {
            self.output.push(top);
        }
    }
}
