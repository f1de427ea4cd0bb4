// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/prim_rec_test.rs
// Tests for primitive recursion

use primrec_calculus::*;
use std::thread;

#[test]
fn test_base_case() {
    // h(0, x) = x
    let h = Func::prim_rec(Func::proj(0), Func::proj(2));
    assert_eq!(h.call(&[0, 7]), Ok(nat(7)));
}

#[test]
fn test_step_receives_counter_accumulator_and_parameters() {
    // step returns the trailing parameter
    let h = Func::prim_rec(Func::zero(), Func::proj(2));
    assert_eq!(h.call(&[3, 7]), Ok(nat(7)));

    // step returns the counter, so h(n) = n - 1
    let h = Func::prim_rec(Func::zero(), Func::proj(0));
    assert_eq!(h.call(&[10]), Ok(nat(9)));

    // sum of counters 0 + 1 + ... + (n - 1)
    let h = Func::prim_rec(
        Func::zero(),
        Func::compose(add(), [Func::proj(0), Func::proj(1)]),
    );
    assert_eq!(h.call(&[5]), Ok(nat(10)));
}

#[test]
fn test_missing_recursion_argument() {
    let h = Func::prim_rec(Func::zero(), Func::proj(0));
    assert_eq!(
        h.call(&[]),
        Err(EvalError::arity("prim_rec", Expected::AtLeast(1), 0))
    );
}

#[test]
fn test_base_arity_error_propagates() {
    // base is succ, so it needs exactly one parameter
    let h = Func::prim_rec(Func::succ(), Func::proj(1));
    assert_eq!(h.call(&[2, 4]), Ok(nat(5)));
    assert!(h.call(&[2]).unwrap_err().is_arity());
}

#[test]
fn test_step_error_stops_iteration() {
    // step needs a fourth argument that is never supplied
    let h = Func::prim_rec(Func::proj(0), Func::proj(3));
    assert_eq!(h.call(&[0, 1]), Ok(nat(1)));
    assert_eq!(
        h.call(&[1, 1]),
        Err(EvalError::arity("proj(3)", Expected::AtLeast(4), 3))
    );
}

#[test]
fn test_negative_recursion_argument() {
    let err = add()
        .apply_signed(&[IntLit::from(-3), IntLit::from(1)])
        .unwrap_err();
    assert!(err.is_domain());
}

#[test]
fn test_large_recursion_argument() {
    assert_eq!(add().call(&[1_000_000, 0]), Ok(nat(1_000_000)));
}

#[test]
fn test_large_recursion_argument_on_small_stack() {
    let handle = thread::Builder::new()
        .stack_size(256 * 1024)
        .spawn(|| add().call(&[200_000, 3]))
        .unwrap();
    assert_eq!(handle.join().unwrap(), Ok(nat(200_003)));
}
