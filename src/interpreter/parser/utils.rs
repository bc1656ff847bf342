use crate::interpreter::{
    evaluator::function::core::Builtin,
    lexer::{Token, TokenKind},
};

/// How operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// Returns the binding strength of an operator, or `None` for any other
/// token.
///
/// | operator        | precedence |
/// |-----------------|------------|
/// | `+` `-`         | 2          |
/// | `*` `/` `%`     | 3          |
/// | prefix `-`      | 4          |
/// | `^`             | 5          |
///
/// # Example
/// ```
/// use toycalc::interpreter::{lexer::TokenKind, parser::utils::precedence};
///
/// assert!(precedence(TokenKind::Caret) > precedence(TokenKind::UnaryMinus));
/// assert_eq!(precedence(TokenKind::LParen), None);
/// ```
#[must_use]
pub const fn precedence(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(2),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some(3),
        TokenKind::UnaryMinus => Some(4),
        TokenKind::Caret => Some(5),
        _ => None,
    }
}

/// Returns how an operator groups with operators of equal precedence.
#[must_use]
pub const fn associativity(kind: TokenKind) -> Associativity {
    match kind {
        TokenKind::Caret | TokenKind::UnaryMinus => Associativity::Right,
        _ => Associativity::Left,
    }
}

/// Returns `true` if `kind` is an operator that can sit on the operator
/// stack.
#[must_use]
pub const fn is_operator(kind: TokenKind) -> bool {
    precedence(kind).is_some()
}

/// Decides whether `incoming` must pop `stacked` before being pushed.
///
/// Left-associative operators pop anything of equal or higher precedence;
/// right-associative ones only pop strictly higher precedence.
#[must_use]
pub fn should_pop(incoming: TokenKind, stacked: TokenKind) -> bool {
    let (Some(incoming_prec), Some(stacked_prec)) = (precedence(incoming), precedence(stacked))
    else {
        return false;
    };

    match associativity(incoming) {
        Associativity::Left => stacked_prec >= incoming_prec,
        Associativity::Right => stacked_prec > incoming_prec,
    }
}

/// Returns `true` if `token` can begin an operand: a number, an opening
/// grouping token, or a registered constant or function name.
///
/// When such a token follows a complete operand, a multiplication is
/// implied, as in `2(3+4)`, `3i` or `(1+2)sqrt(4)`.
///
/// # Example
/// ```
/// use toycalc::interpreter::{
///     lexer::{Token, TokenKind},
///     parser::utils::can_start_operand,
/// };
///
/// assert!(can_start_operand(&Token::new(TokenKind::Ident, "pi", 0)));
/// assert!(can_start_operand(&Token::new(TokenKind::LBrace, "{", 0)));
/// assert!(!can_start_operand(&Token::new(TokenKind::Ident, "x", 0)));
/// assert!(!can_start_operand(&Token::new(TokenKind::Minus, "-", 0)));
/// ```
#[must_use]
pub fn can_start_operand(token: &Token) -> bool {
    match token.kind {
        TokenKind::Number => true,
        TokenKind::Ident => Builtin::lookup(&token.text).is_some(),
        kind => kind.is_left_grouping(),
    }
}
