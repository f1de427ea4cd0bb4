// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/end_to_end_test.rs
// Tests from parsing to output

use primrec_calculus::*;

#[test]
fn test_parse_and_evaluate() {
    let examples = vec![
        ("add(3, 4)", "7"),
        ("mult(6, 7)", "42"),
        ("monus(10, 3)", "7"),
        ("monus(3, 10)", "0"),
        ("pred(0)", "0"),
        ("factorial(7)", "5040"),
        ("exp(3, 2)", "8"),
        ("tri(4)", "10"),
        ("double(square(3))", "18"),
        ("div(7, 0)", "0"),
        ("rem(7, 0)", "7"),
        ("divides(0, 0)", "1"),
        ("eq(add(2, 2), square(2))", "1"),
        ("lt(5, 5)", "0"),
        ("pair(1, 1)", "4"),
        ("fst(pair(12, 7))", "12"),
        ("compose(add, proj(0), proj(0))(7)", "14"),
        ("compose(one)(9, 9)", "1"),
        ("prim_rec(zero, proj(0))(10)", "9"),
        ("search(compose(lt, proj(1), proj(0)))(10, 3)", "4"),
        ("bmin(is_zero, 10)", "0"),
        ("succ(18446744073709551615)", "18446744073709551616"),
    ];

    let shell = Shell::default();
    for (input, output) in examples {
        println!("\n=== Testing: {} -> {} ===", input, output);
        let expr = match parse_line(input) {
            Ok(expr) => expr,
            Err(e) => panic!("Failed to parse '{}': {}", input, e),
        };
        println!("Parsed as {} {:?}", expr, expr);
        match evaluate(&expr, shell.registry()) {
            Ok(value) => assert_eq!(value.to_string(), output, "{}", input),
            Err(e) => panic!("Failed to evaluate '{}': {}", input, e),
        }
    }
}
