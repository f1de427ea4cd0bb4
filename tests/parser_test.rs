// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/parser_test.rs
// Integration tests for the shell parser and pretty-printer

use primrec_calculus::*;

#[test]
fn test_parse_and_print_roundtrip() {
    let examples = vec![
        "42",
        "-7",
        "add",
        "add(3, 4)",
        "add(3, mult(2, 2))",
        "compose(succ, zero)()",
        "prim_rec(proj(0), compose(succ, proj(1)))(2, 5)",
        "is_zero(0)",
        "_hidden(x1)",
    ];

    for input in examples {
        println!("\n=== Testing: {} ===", input);
        match parse_line(input) {
            Ok(expr) => {
                let output = format!("{}", expr);
                println!("  Output: '{}'", output);
                assert_eq!(output, input);
                assert_eq!(parse_line(&output), Ok(expr), "Roundtrip failed for: {}", input);
            }
            Err(e) => {
                panic!("Failed to parse '{}': {}", input, e);
            }
        }
    }
}

#[test]
fn test_whitespace_is_normalized() {
    let examples = vec![
        ("  add ( 1 ,2 ) ", "add(1, 2)"),
        ("(add)(1, 2)", "add(1, 2)"),
        ("((7))", "7"),
        ("f( )", "f()"),
    ];

    for (input, expected) in examples {
        let expr = parse_line(input).unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
        assert_eq!(expr.to_pretty_string(), expected);
    }
}

#[test]
fn test_call_structure() {
    let expr = parse_line("f(1)(2, x)").unwrap();
    let expected = Expr::call(
        Expr::call(Expr::name("f"), vec![Expr::int(1)]),
        vec![Expr::int(2), Expr::name("x")],
    );
    assert_eq!(expr, expected);
}

#[test]
fn test_large_literal() {
    let expr = parse_line("succ(123456789012345678901234567890)").unwrap();
    match expr {
        Expr::Call(_, args) => {
            assert_eq!(args[0], Expr::Int("123456789012345678901234567890".parse().unwrap()));
        }
        other => panic!("expected a call, got {}", other),
    }
}

#[test]
fn test_parse_errors() {
    let bad = vec!["", "add(1,", "1 2", "add(1))", "@", "add(,)", "- 3"];
    for input in bad {
        assert!(parse_line(input).is_err(), "'{}' should not parse", input);
    }
}
