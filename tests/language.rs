use std::fs;

use calcline::{
    ast::{BinaryOperator, Expr},
    error::{Error, LexError, ParseError},
    evaluate, parse,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (source, expected)) in extract_cases(&content).into_iter().enumerate() {
            count += 1;
            check_case(&source, &expected).unwrap_or_else(|e| {
                                              panic!("Case {} in {:?} failed:\n{}\n{}",
                                                     i + 1,
                                                     path,
                                                     source,
                                                     e)
                                          });
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .map(str::trim)
           .filter(|line| !line.is_empty() && !line.starts_with('#'))
           .filter_map(|line| line.rsplit_once("=>"))
           .map(|(source, expected)| (source.trim().to_string(), expected.trim().to_string()))
           .collect()
}

fn check_case(source: &str, expected: &str) -> Result<(), String> {
    let result = evaluate(source);

    match (expected, result) {
        ("error", Err(_)) => Ok(()),
        ("error", Ok(v)) => Err(format!("expected an error, got {v}")),
        (_, Err(e)) => Err(format!("expected {expected}, got error: {e}")),
        ("NaN", Ok(v)) if v.is_nan() => Ok(()),
        ("inf", Ok(v)) if v == f64::INFINITY => Ok(()),
        (approx, Ok(v)) if approx.starts_with('~') => {
            let want: f64 = approx[1..].parse().map_err(|e| format!("bad expectation: {e}"))?;
            if (v - want).abs() <= 1e-12 {
                Ok(())
            } else {
                Err(format!("expected about {want}, got {v}"))
            }
        },
        (exact, Ok(v)) => {
            let want: f64 = exact.parse().map_err(|e| format!("bad expectation: {e}"))?;
            if v == want { Ok(()) } else { Err(format!("expected {want}, got {v}")) }
        },
    }
}

fn assert_value(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(v) => assert_eq!(v, expected, "wrong value for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if let Ok(v) = evaluate(src) {
        panic!("Expression {src:?} evaluated to {v} but was expected to fail")
    }
}

#[test]
fn single_numbers() {
    assert_value("42", 42.0);
    assert_value("0", 0.0);
    assert_value("123", 123.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("3 + 5", 8.0);
    assert_value("10 - 3", 7.0);
    assert_value("1 - 2", -1.0);
    assert_value("7 * 8", 56.0);
    assert_value("1 / 2", 0.5);
    assert_value("2 ** 3", 8.0);
    assert_value("99 ** 2", 9801.0);
}

#[test]
fn left_associativity() {
    assert_value("10 - 4 - 3", 3.0);
    assert_value("7 - 5 - 1", 1.0);
    assert_value("20 / 4 / 2", 2.5);
    assert_value("8 / 2 / 2", 2.0);
    assert_value("100 - 20 - 10 - 5", 65.0);
}

#[test]
fn exponent_chains_group_right() {
    assert_value("2 ** 3 ** 2", 512.0);
    assert_eq!(parse("2 ** 3 ** 2").unwrap().to_string(), "(2 ** (3 ** 2))");
}

#[test]
fn precedence() {
    assert_value("2 * 3 - 10", -4.0);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("2 * 3 ** 2", 18.0);
    assert_value("18 / 3 ** 2", 2.0);
    assert_eq!(parse("1 + 2 * 3 ** 2 - 4 / 2").unwrap().to_string(),
               "((1 + (2 * (3 ** 2))) - (4 / 2))");
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("3 + 5", 8.0);
    assert_value("  3   +   5  ", 8.0);
    assert_value("3+5", 8.0);
    assert_value("\t2\t*\t4\t", 8.0);
    assert_value("2**3", 8.0);
}

#[test]
fn ieee_edge_cases() {
    assert_value("5 / 0", f64::INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
    assert_value("5 ** 0", 1.0);
    assert_value("0 ** 0", 1.0);
    assert_value("1e308 * 10", f64::INFINITY);
    assert!(evaluate("5 / 0 - 5 / 0").unwrap().is_nan());
}

#[test]
fn scientific_and_decimal_literals() {
    assert_value("2.35", 2.35);
    assert_value("0.001", 0.001);
    assert_value("2.35e-3", 0.00235);
    assert_value("2.35E-3", 0.00235);
    assert_value("2.35e+3", 2350.0);
    assert_value("5e2", 500.0);
    assert_value("10E3", 10000.0);
    assert_value("2.35e-3 + 1", 1.00235);
    assert_value("10.5 * 2", 21.0);
    assert_value("1.5e2 / 2", 75.0);
}

#[test]
fn one_third_is_close() {
    let v = evaluate("1 / 3").unwrap();
    assert!((v - 0.333_333_333_333_333_3).abs() < 1e-15);
}

#[test]
fn evaluation_is_repeatable() {
    for src in ["10 - 4 - 3", "2.35e-3 + 1", "2 ** 3 ** 2", "5 / 0"] {
        assert_eq!(evaluate(src).unwrap(), evaluate(src).unwrap());
    }
}

#[test]
fn malformed_input_is_rejected() {
    for src in ["", "abc", "3 +", "+ 3", "3 + + 4", "* 5", "3 4", "   ", "-5 + 3", "(1 + 2)",
                "1.", "2e", "3 ** ", "3 *** 2"]
    {
        assert_failure(src);
    }
}

#[test]
fn empty_input_is_a_parse_error() {
    assert_eq!(evaluate(""), Err(Error::Parse(ParseError::EmptyInput)));
    assert_eq!(evaluate(" \t "), Err(Error::Parse(ParseError::EmptyInput)));
}

#[test]
fn unknown_characters_are_lex_errors() {
    assert_eq!(evaluate("abc"),
               Err(Error::Lex(LexError::UnexpectedCharacter { character: 'a',
                                                              column:    1, })));
    assert_eq!(evaluate("5 % 2"),
               Err(Error::Lex(LexError::UnexpectedCharacter { character: '%',
                                                              column:    3, })));
    assert!(matches!(evaluate("1."), Err(Error::Lex(_))));
}

#[test]
fn missing_operand_is_reported() {
    assert_eq!(evaluate("3 +"),
               Err(Error::Parse(ParseError::UnexpectedEndOfInput { column: 4 })));
    assert_eq!(evaluate("+ 3"),
               Err(Error::Parse(ParseError::ExpectedNumber { found:  "'+'".to_string(),
                                                             column: 1, })));
    assert_eq!(evaluate("3 + + 4"),
               Err(Error::Parse(ParseError::ExpectedNumber { found:  "'+'".to_string(),
                                                             column: 5, })));
    assert_eq!(evaluate("3 *** 2"),
               Err(Error::Parse(ParseError::ExpectedNumber { found:  "'*'".to_string(),
                                                             column: 5, })));
}

#[test]
fn missing_operator_is_reported() {
    assert_eq!(evaluate("3 4"),
               Err(Error::Parse(ParseError::ExpectedOperator { found:  "number 4".to_string(),
                                                               column: 3, })));
    assert_eq!(evaluate("1 + 2 3"),
               Err(Error::Parse(ParseError::ExpectedOperator { found:  "number 3".to_string(),
                                                               column: 7, })));
}

#[test]
fn unary_minus_is_unsupported() {
    assert!(matches!(evaluate("-5 + 3"),
                     Err(Error::Parse(ParseError::ExpectedNumber { column: 1, .. }))));
}

#[test]
fn tree_records_operator_columns() {
    let expr = parse("1 + 2 * 3").unwrap();

    let Expr::BinaryOp { op, right, column, .. } = &expr else {
        panic!("expected a binary operation, got {expr:?}");
    };
    assert_eq!(*op, BinaryOperator::Add);
    assert_eq!(*column, 3);
    assert_eq!(right.column(), 7);
    assert_eq!(expr.operator_count(), 2);
    assert_eq!(expr.eval(), 7.0);
}

#[test]
fn error_messages_name_the_problem() {
    let msg = evaluate("3 4").unwrap_err().to_string();
    assert!(msg.contains("column 3"), "{msg}");
    assert!(msg.contains("Expected an operator"), "{msg}");

    let msg = evaluate("3 $ 4").unwrap_err().to_string();
    assert!(msg.contains("Unexpected character '$'"), "{msg}");
}

#[test]
fn long_left_chains_do_not_exhaust_the_stack() {
    let terms = 50_000;

    assert_value(&format!("1{}", " + 1".repeat(terms)), 50_001.0);
    assert_value(&format!("2{}", " - 1".repeat(terms)), -49_998.0);
    assert_value(&format!("3{}", " * 1 / 1".repeat(terms)), 3.0);
}

#[test]
fn long_exponent_chains_do_not_exhaust_the_stack() {
    let source = format!("1{}", " ** 2".repeat(50_000));
    assert_value(&source, 1.0);

    let expr = parse(&source).unwrap();
    assert_eq!(expr.operator_count(), 50_000);
    assert!(matches!(&expr, Expr::BinaryOp { op: BinaryOperator::Pow, column: 3, .. }));
}

#[test]
fn long_trees_render_and_drop() {
    let expr = parse(&format!("1{}", " + 1".repeat(50_000))).unwrap();

    let rendered = expr.to_string();
    assert!(rendered.starts_with("((((1 + 1) + 1)"), "{}", &rendered[..40]);
    assert!(rendered.ends_with(" + 1)"));
    assert_eq!(expr.operator_count(), 50_000);
    drop(expr);
}

#[test]
fn line_breaks_are_not_whitespace() {
    assert_eq!(evaluate("3\n+\n4"),
               Err(Error::Lex(LexError::UnexpectedCharacter { character: '\n',
                                                              column:    2, })));
    assert!(matches!(evaluate("3 + 4\r"), Err(Error::Lex(_))));
}

#[test]
fn lex_and_parse_columns_agree() {
    assert!(matches!(evaluate("\t\t1 2"),
                     Err(Error::Parse(ParseError::ExpectedOperator { column: 5, .. }))));
    assert!(matches!(evaluate("\t\t1 $"),
                     Err(Error::Lex(LexError::UnexpectedCharacter { column: 5, .. }))));
}
