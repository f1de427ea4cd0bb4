// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/cantor.rs
// Cantor pairing, its inverses, and Fibonacci over encoded pairs

use crate::ast::*;
use crate::core::{bounded_min, from_bool};
use crate::error::EvalResult;
use crate::library::arithmetic::{add, tri};
use crate::library::Derived;
use num_traits::Zero;

// ============================================================================
// Pairing
// ============================================================================

shared! {
    /// pair(a, b) = tri(a + b) + b
    pub fn pair() = Func::compose(
        add(),
        [Func::compose(tri(), [add()]), Func::proj(1)],
    );
}

/// n * (n + 1) / 2 in host arithmetic
fn triangle(n: &Nat) -> Nat {
    (n * (n + 1u32)) >> 1
}

/// Diagonal of the enumeration holding `p`: the largest `w` with
/// `tri(w) <= p`, found as the least `w` with `tri(w + 1) > p`.
pub fn diagonal(p: &Nat) -> EvalResult<Nat> {
    bounded_min(&(p + 1u32), |w| Ok(from_bool(triangle(&(w + 1u32)) > *p)))
}

/// Host form of `pair`
fn encode(a: &Nat, b: &Nat) -> Nat {
    triangle(&(a + b)) + b
}

/// Inverse of `pair`
pub fn unpair(p: &Nat) -> EvalResult<(Nat, Nat)> {
    let w = diagonal(p)?;
    // tri(w) <= p < tri(w + 1) = tri(w) + w + 1, so 0 <= b <= w
    let b = p - triangle(&w);
    let a = &w - &b;
    Ok((a, b))
}

fn first(args: &[Nat]) -> EvalResult<Nat> {
    Ok(unpair(&args[0])?.0)
}

fn second(args: &[Nat]) -> EvalResult<Nat> {
    Ok(unpair(&args[0])?.1)
}

pub static FST: Derived = Derived::new("fst", 1, first);

pub static SND: Derived = Derived::new("snd", 1, second);

// ============================================================================
// Fibonacci
// ============================================================================

/// fib(n) via the state pair(fib(k), fib(k+1)), stepping
/// (a, b) -> (b, a + b) n times from pair(0, 1)
fn fibonacci(args: &[Nat]) -> EvalResult<Nat> {
    let mut state = encode(&Nat::zero(), &nat(1));
    let mut k = Nat::zero();
    while k < args[0] {
        let (a, b) = unpair(&state)?;
        let sum = &a + &b;
        state = encode(&b, &sum);
        k += 1u32;
    }
    Ok(unpair(&state)?.0)
}

pub static FIB: Derived = Derived::new("fib", 1, fibonacci);
