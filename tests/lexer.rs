use toycalc::{
    error::EvalError,
    interpreter::lexer::{Token, TokenKind, lex},
};

fn kinds(input: &str) -> Vec<TokenKind> {
    lex(input).unwrap().into_iter().map(|token| token.kind).collect()
}

fn texts(input: &str) -> Vec<String> {
    lex(input).unwrap().into_iter().map(|token| token.text).collect()
}

#[test]
fn operators_and_grouping_symbols() {
    use TokenKind::*;

    assert_eq!(kinds("+-*/%^()[]{},"),
               [Plus, Minus, Star, Slash, Percent, Caret, LParen, RParen, LBracket, RBracket,
                LBrace, RBrace, Comma, Eof]);
}

#[test]
fn number_literals() {
    assert_eq!(texts("42 3. 2.5 1.2e-3 7E+2 6e4"),
               ["42", "3.", "2.5", "1.2e-3", "7E+2", "6e4", ""]);
}

#[test]
fn incomplete_exponent_stays_in_the_literal() {
    let tokens = lex("2e").unwrap();
    assert_eq!(tokens[0], Token::new(TokenKind::Number, "2e", 0));
    assert_eq!(tokens[1], Token::new(TokenKind::Eof, "", 2));

    assert_eq!(texts("1.2e-"), ["1.2e-", ""]);
    assert_eq!(texts("3e+ 1"), ["3e+", "1", ""]);
    assert_eq!(texts("3E-x"), ["3E-", "x", ""]);
}

#[test]
fn euler_constant_needs_a_separator_after_a_number() {
    assert_eq!(kinds("2 e"), [TokenKind::Number, TokenKind::Ident, TokenKind::Eof]);
    assert_eq!(texts("2*e"), ["2", "*", "e", ""]);
}

#[test]
fn identifiers_keep_their_case() {
    assert_eq!(texts("degToRad(_x1)"), ["degToRad", "(", "_x1", ")", ""]);
    assert_eq!(kinds("2pi"), [TokenKind::Number, TokenKind::Ident, TokenKind::Eof]);
}

#[test]
fn positions_are_byte_offsets() {
    let tokens = lex("  12 +\tsin( x )").unwrap();
    let positions: Vec<_> = tokens.iter().map(|token| token.position).collect();
    assert_eq!(positions, [2, 5, 7, 10, 12, 14, 15]);
}

#[test]
fn positions_never_decrease_and_eof_sits_at_the_end() {
    for input in ["", "   ", "1+2", "2(3+4i)^2 % 5", "exp ( i * pi )  ", "{[()]}"] {
        let tokens = lex(input).unwrap();
        assert!(tokens.windows(2).all(|pair| pair[0].position <= pair[1].position),
                "positions decrease in {input:?}");

        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Eof);
        assert_eq!(last.position, input.len());
        assert_eq!(tokens.iter().filter(|token| token.kind == TokenKind::Eof).count(), 1);
    }
}

#[test]
fn empty_input_is_just_eof() {
    assert_eq!(lex("").unwrap(), [Token::new(TokenKind::Eof, "", 0)]);
    assert_eq!(lex(" \t ").unwrap(), [Token::new(TokenKind::Eof, "", 3)]);
}

#[test]
fn illegal_character_stops_lexing() {
    assert_eq!(lex("2 $ 3 # 4"),
               Err(EvalError::IllegalCharacter { character: '$',
                                                 position:  2, }));

    let error = lex("1 + 2 & 3").unwrap_err();
    assert_eq!(error.to_string(), "illegal character '&' found at position 6");
    assert_eq!(error.position(), Some(6));
}

#[test]
fn non_ascii_character_is_reported_whole() {
    let error = lex("3 × 4").unwrap_err();
    assert_eq!(error,
               EvalError::IllegalCharacter { character: '×',
                                             position:  2, });
}
