use logos::Logos;
use tracing::trace;

use crate::error::EvalError;

/// The kind of a lexical token.
///
/// The lexer never produces `UnaryMinus`, `Illegal` or `Eof` through its
/// rules: `UnaryMinus` is synthesised by the parser, `Illegal` marks a
/// character no rule accepts and `Eof` is appended once the input is
/// exhausted.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.`, `2.5` or `1.2e-3`.
    #[regex(r"[0-9]+(\.[0-9]*)?", lex_exponent)]
    Number,
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    /// A character that starts no token.
    Illegal,
    /// End of input.
    Eof,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// Prefix `-`.
    UnaryMinus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
}

impl TokenKind {
    /// Returns `true` for `(`, `[` and `{`.
    #[must_use]
    pub const fn is_left_grouping(self) -> bool {
        matches!(self, Self::LParen | Self::LBracket | Self::LBrace)
    }

    /// Returns `true` for `)`, `]` and `}`.
    #[must_use]
    pub const fn is_right_grouping(self) -> bool {
        matches!(self, Self::RParen | Self::RBracket | Self::RBrace)
    }

    /// Returns the opener a closing delimiter must match.
    ///
    /// # Example
    /// ```
    /// use toycalc::interpreter::lexer::TokenKind;
    ///
    /// assert_eq!(TokenKind::RBracket.matching_opener(), Some(TokenKind::LBracket));
    /// assert_eq!(TokenKind::Plus.matching_opener(), None);
    /// ```
    #[must_use]
    pub const fn matching_opener(self) -> Option<Self> {
        match self {
            Self::RParen => Some(Self::LParen),
            Self::RBracket => Some(Self::LBracket),
            Self::RBrace => Some(Self::LBrace),
            _ => None,
        }
    }

    /// The canonical text of tokens the parser synthesises.
    const fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus | Self::UnaryMinus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Comma => ",",
            Self::Number | Self::Ident | Self::Illegal | Self::Eof => "",
        }
    }
}

/// A token together with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What the token is.
    pub kind:     TokenKind,
    /// The exact source slice (empty for `Eof`).
    pub text:     String,
    /// Byte offset of the token's first character.
    pub position: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self { kind,
               text: text.into(),
               position }
    }

    /// Creates a token that has no source text of its own, such as the `*`
    /// implied by `2(3)` or the prefix minus in `-x`.
    ///
    /// # Example
    /// ```
    /// use toycalc::interpreter::lexer::{Token, TokenKind};
    ///
    /// let star = Token::synthetic(TokenKind::Star, 1);
    /// assert_eq!(star.text, "*");
    /// assert_eq!(star.position, 1);
    /// ```
    #[must_use]
    pub fn synthetic(kind: TokenKind, position: usize) -> Self {
        Self::new(kind, kind.symbol(), position)
    }
}

/// Converts an expression into positioned tokens.
///
/// Whitespace between tokens is skipped. On success the returned stream ends
/// with exactly one `Eof` token positioned at `input.len()`. Lexing stops at
/// the first character that starts no token.
///
/// Number literals are only delimited here; whether they parse as floats is
/// checked by the evaluator, so `1.2e-` is a single (invalid) literal.
///
/// # Errors
/// Returns [`EvalError::IllegalCharacter`] for the first illegal character.
///
/// # Example
/// ```
/// use toycalc::interpreter::lexer::{TokenKind, lex};
///
/// let tokens = lex("2 * pi").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Number, TokenKind::Star, TokenKind::Ident, TokenKind::Eof]);
/// assert_eq!(tokens[3].position, 6);
///
/// assert!(lex("2 $ 3").is_err());
/// ```
pub fn lex(input: &str) -> Result<Vec<Token>, EvalError> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(kind) = lexer.next() {
        let position = lexer.span().start;
        if let Ok(kind) = kind {
            tokens.push(Token::new(kind, lexer.slice(), position));
        } else {
            let character = input.get(position..)
                                 .and_then(|rest| rest.chars().next())
                                 .unwrap_or(char::REPLACEMENT_CHARACTER);
            trace!(%character, position, "illegal character");
            return Err(EvalError::IllegalCharacter { character, position });
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", input.len()));
    Ok(tokens)
}

/// Extends a matched number with an exponent suffix.
///
/// Once `e`/`E` follows the digits, the marker and an optional sign are
/// always consumed, and any digits after them. An incomplete suffix such as
/// `2e` or `1.2e-` therefore stays inside the literal and is rejected when
/// the evaluator parses it.
///
/// Always accepts the token.
fn lex_exponent(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let rest = lex.remainder().as_bytes();
    if !matches!(rest.first(), Some(b'e' | b'E')) {
        return true;
    }

    let mut marker = 1;
    if matches!(rest.get(1), Some(b'+' | b'-')) {
        marker += 1;
    }

    let digits = rest.get(marker..)
                     .map_or(0, |tail| tail.iter().take_while(|b| b.is_ascii_digit()).count());
    lex.bump(marker + digits);
    true
}
