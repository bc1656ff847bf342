use std::f64::consts::PI;

use toycalc::{
    Complex64, calculate,
    error::{ErrorLayer, EvalError},
    interpreter::{
        evaluator::{
            core::{Evaluator, evaluate_rpn},
            function::core::{Builtin, Constant, Function},
        },
        lexer::{Token, TokenKind},
        value::complex::ComplexExt,
    },
};

fn value(input: &str) -> Complex64 {
    calculate(input).unwrap_or_else(|e| panic!("{input:?} failed: {e}"))
}

fn assert_close(input: &str, expected: Complex64) {
    let actual = value(input);
    assert!((actual - expected).norm() < 1e-9, "{input:?} gave {actual}, expected {expected}");
}

fn number(text: &str, position: usize) -> Token {
    Token::new(TokenKind::Number, text, position)
}

#[test]
fn arithmetic_on_reals() {
    assert_eq!(value("7"), Complex64::new(7.0, 0.0));
    assert_eq!(value("1 + 2 * 3"), Complex64::new(7.0, 0.0));
    assert_eq!(value("2^3^2"), Complex64::new(512.0, 0.0));
    assert_eq!(value("(1+2)*3"), Complex64::new(9.0, 0.0));
    assert_eq!(value("10 / 4"), Complex64::new(2.5, 0.0));
    assert_eq!(value("2^-3"), Complex64::new(0.125, 0.0));
    assert_eq!(value("-2^2"), Complex64::new(-4.0, 0.0));
}

#[test]
fn arithmetic_on_complex_values() {
    assert_eq!(value("3i"), Complex64::new(0.0, 3.0));
    assert_eq!(value("(1+2i)*(3-i)"), Complex64::new(5.0, 5.0));
    assert_close("i^2", Complex64::new(-1.0, 0.0));
    assert_close("(1+i)/(1-i)", Complex64::new(0.0, 1.0));
    assert_close("(-4)^0.5", Complex64::new(0.0, 2.0));
    assert_close("exp(i*pi)", Complex64::new(-1.0, 0.0));
}

#[test]
fn zero_base_powers() {
    assert_eq!(value("0^0"), Complex64::new(1.0, 0.0));
    assert_eq!(value("0^2"), Complex64::new(0.0, 0.0));
    assert_eq!(value("0^(2+3i)"), Complex64::new(0.0, 0.0));

    let reciprocal = value("0^-1");
    assert!(reciprocal.re.is_infinite() && reciprocal.re > 0.0);
    assert_eq!(reciprocal.im, 0.0);
}

#[test]
fn gaussian_modulo() {
    assert_eq!(value("10 % 3"), Complex64::new(1.0, 0.0));
    assert_eq!(value("-10 % 3"), Complex64::new(-1.0, 0.0));
    assert_eq!(value("7 % -2"), Complex64::new(-1.0, 0.0));
    assert_eq!(value("(5+3i) % 2"), Complex64::new(1.0, -1.0));
    assert_eq!(value("(4+5i) % (1+i)"), Complex64::new(0.0, 1.0));
}

#[test]
fn modulo_rounds_quotient_ties_to_even() {
    // 5 / 2 = 2.5 rounds to 2, leaving 1; 7 / 2 = 3.5 rounds to 4, leaving -1.
    assert_eq!(value("5 % 2"), Complex64::new(1.0, 0.0));
    assert_eq!(value("7 % 2"), Complex64::new(-1.0, 0.0));
}

#[test]
fn modulo_by_zero() {
    let error = calculate("5 % 0").unwrap_err();
    assert_eq!(error, EvalError::ModuloByZero { position: 2 });
    assert!(error.to_string().contains("divisor is zero"));
    assert_eq!(error.layer(), ErrorLayer::Semantic);

    assert_eq!(calculate("(1+i) % (0i)"), Err(EvalError::ModuloByZero { position: 6 }));
}

#[test]
fn division_by_zero_is_not_an_error() {
    let quotient = value("1/0");
    assert!(quotient.re.is_nan() || quotient.re.is_infinite());
}

#[test]
fn constants_and_functions() {
    assert_eq!(value("i"), Complex64::new(0.0, 1.0));
    assert_close("pi", Complex64::new(PI, 0.0));
    assert_close("log(e)", Complex64::new(1.0, 0.0));
    assert_close("log2(8)", Complex64::new(3.0, 0.0));
    assert_close("log10(1000)", Complex64::new(3.0, 0.0));
    assert_close("sqrt(-9)", Complex64::new(0.0, 3.0));
    assert_close("sin(pi/2)", Complex64::new(1.0, 0.0));
    assert_close("cosh(0)", Complex64::new(1.0, 0.0));
    assert_close("abs(3+4i)", Complex64::new(5.0, 0.0));
    assert_close("phase(i)", Complex64::new(PI / 2.0, 0.0));
    assert_close("degToRad(180)", Complex64::new(PI, 0.0));
    assert_close("RADTODEG(pi)", Complex64::new(180.0, 0.0));
    assert_eq!(value("conj(1+2i)"), Complex64::new(1.0, -2.0));
    assert_eq!(value("real(1+2i)"), Complex64::new(1.0, 0.0));
    assert_eq!(value("imag(1+2i)"), Complex64::new(2.0, 0.0));
}

#[test]
fn rounding_functions_work_per_component() {
    assert_eq!(value("floor(1.5-2.5i)"), Complex64::new(1.0, -3.0));
    assert_eq!(value("ceil(1.5-2.5i)"), Complex64::new(2.0, -2.0));
    assert_eq!(value("trunc(1.5-2.5i)"), Complex64::new(1.0, -2.0));
    assert_eq!(value("round(0.5+1.5i)"), Complex64::new(0.0, 2.0));
    assert_eq!(value("round(2.5-3.5i)"), Complex64::new(2.0, -4.0));
}

#[test]
fn negation_clears_signed_zeros() {
    let negated = value("-4");
    assert_eq!(negated, Complex64::new(-4.0, 0.0));
    assert!(negated.im.is_sign_positive());

    assert_eq!(value("-(0)").re.to_bits(), 0.0f64.to_bits());
}

#[test]
fn stack_errors() {
    let mut evaluator = Evaluator::new();
    let plus = Token::new(TokenKind::Plus, "+", 3);
    evaluator.step(&number("1", 0)).unwrap();
    assert_eq!(evaluator.step(&plus),
               Err(EvalError::InsufficientOperands { token:    "+".to_string(),
                                                     position: 3, }));

    assert_eq!(evaluate_rpn(&[]), Err(EvalError::NoResult));
    assert_eq!(evaluate_rpn(&[number("1", 0), number("2", 2)]),
               Err(EvalError::ValuesLeftOnStack { count: 2 }));

    let error = calculate("(1, 2)").unwrap_err();
    assert_eq!(error.to_string(), "invalid expression: 2 values left on stack, expected 1");
}

#[test]
fn function_without_operand() {
    let sin = Token::new(TokenKind::Ident, "sin", 0);
    assert_eq!(evaluate_rpn(&[sin]),
               Err(EvalError::InsufficientOperands { token:    "sin".to_string(),
                                                     position: 0, }));
}

#[test]
fn incomplete_exponent_fails_the_float_parse() {
    assert_eq!(calculate("1.2e-"),
               Err(EvalError::InvalidNumber { literal:  "1.2e-".to_string(),
                                              position: 0, }));
    assert_eq!(calculate("1 + 2e"),
               Err(EvalError::InvalidNumber { literal:  "2e".to_string(),
                                              position: 4, }));
    assert_eq!(calculate("1 + 2e").unwrap_err().layer(), ErrorLayer::Semantic);
    assert_close("2 e", Complex64::new(2.0 * std::f64::consts::E, 0.0));
}

#[test]
fn malformed_number_literal() {
    assert_eq!(evaluate_rpn(&[number("1.2.3", 0)]),
               Err(EvalError::InvalidNumber { literal:  "1.2.3".to_string(),
                                              position: 0, }));
}

#[test]
fn grouping_tokens_are_not_executable() {
    let paren = Token::new(TokenKind::LParen, "(", 0);
    assert!(matches!(evaluate_rpn(&[paren]), Err(EvalError::UnexpectedToken { .. })));
}

#[test]
fn principal_pow_of_reals_stays_exact() {
    let two = Complex64::new(2.0, 0.0);
    assert_eq!(two.principal_pow(Complex64::new(10.0, 0.0)), Complex64::new(1024.0, 0.0));
    assert_eq!(Complex64::new(9.0, 0.0).principal_pow(Complex64::new(0.5, 0.0)),
               Complex64::new(3.0, 0.0));
}

#[test]
fn registry_lookup_ignores_case() {
    assert_eq!(Builtin::lookup("Pi"), Some(Builtin::Constant(Constant::Pi)));
    assert_eq!(Builtin::lookup("I"), Some(Builtin::Constant(Constant::I)));
    assert_eq!(Builtin::lookup("DEGTORAD"), Some(Builtin::Function(Function::DegToRad)));
    assert_eq!(Builtin::lookup("radToDeg"), Some(Builtin::Function(Function::RadToDeg)));
    assert_eq!(Builtin::lookup("Log10"), Some(Builtin::Function(Function::Log10)));
    assert_eq!(Builtin::lookup("x"), None);
    assert_eq!(Builtin::lookup("sine"), None);
}
