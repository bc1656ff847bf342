use std::fs;

use toycalc::{config::DisplayConfig, evaluate, evaluate_with};
use walkdir::WalkDir;

/// Runs every line of every `tests/cases/*.txt` file.
///
/// A line is either `expression => expected output` or
/// `expression !! error message fragment`. Blank lines and lines starting
/// with `#` are skipped.
#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            check_case(line, &format!("{}:{}", path.display(), number + 1));
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn check_case(line: &str, location: &str) {
    if let Some((expression, expected)) = line.split_once("=>") {
        let (expression, expected) = (expression.trim(), expected.trim());
        match evaluate(expression) {
            Ok(actual) => {
                assert_eq!(actual, expected, "{location}: {expression:?} rendered unexpectedly");
            },
            Err(e) => panic!("{location}: {expression:?} failed: {e}"),
        }
    } else if let Some((expression, fragment)) = line.split_once("!!") {
        let (expression, fragment) = (expression.trim(), fragment.trim());
        match evaluate(expression) {
            Ok(actual) => {
                panic!("{location}: {expression:?} gave {actual:?} but was expected to fail")
            },
            Err(e) => assert!(e.to_string().contains(fragment),
                              "{location}: {expression:?} failed with {e:?}, expected {fragment:?}"),
        }
    } else {
        panic!("{location}: malformed case line {line:?}");
    }
}

#[test]
fn errors_carry_positions() {
    let error = evaluate("1 + 2 * foo").unwrap_err();
    assert_eq!(error.position(), Some(8));
    assert!(error.to_string().contains("foo"));

    let dangling = evaluate("1 +").unwrap_err();
    assert_eq!(dangling.position(), Some(2));
    assert!(dangling.to_string().contains("insufficient operands"));

    assert_eq!(evaluate("(1, 2)").unwrap_err().position(), None);
}

#[test]
fn evaluation_is_repeatable() {
    let config = DisplayConfig::default();
    for _ in 0..3 {
        assert_eq!(evaluate_with("2(3+4i)^2 % 5", &config).unwrap(),
                   evaluate("2(3+4i)^2 % 5").unwrap());
    }
}
