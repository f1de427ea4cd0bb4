// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/arithmetic.rs
// Arithmetic built from the generators

use crate::ast::Func;

// ============================================================================
// Constants
// ============================================================================

shared! {
    /// one() = succ(zero())
    pub fn one() = Func::compose(Func::succ(), [Func::zero()]);
}

shared! {
    /// 1 for any number of arguments
    pub fn const_one() = Func::constant(one());
}

// ============================================================================
// Addition and Multiplication
// ============================================================================

shared! {
    /// add(a, b) = a + b
    ///
    /// add(0, b) = b, add(k+1, b) = succ(add(k, b))
    pub fn add() = Func::prim_rec(
        Func::proj(0),
        Func::compose(Func::succ(), [Func::proj(1)]),
    );
}

shared! {
    /// mult(a, b) = a * b
    ///
    /// mult(0, b) = 0, mult(k+1, b) = add(b, mult(k, b)).
    /// Adding `b` onto the accumulator (not the reverse) keeps the inner
    /// recursion over `b` instead of over the growing product.
    pub fn mult() = Func::prim_rec(
        Func::constant(Func::zero()),
        Func::compose(add(), [Func::proj(2), Func::proj(1)]),
    );
}

// ============================================================================
// Subtraction
// ============================================================================

shared! {
    /// pred(n) = max(0, n - 1)
    ///
    /// The step returns the loop counter, which trails the result by one.
    pub fn pred() = Func::prim_rec(Func::zero(), Func::proj(0));
}

shared! {
    /// h(b, a) = max(0, a - b), recursing on the subtrahend
    fn monus_swapped() = Func::prim_rec(
        Func::proj(0),
        Func::compose(pred(), [Func::proj(1)]),
    );
}

shared! {
    /// monus(a, b) = max(0, a - b)
    pub fn monus() = Func::compose(monus_swapped(), [Func::proj(1), Func::proj(0)]);
}

// ============================================================================
// Products and Sums
// ============================================================================

shared! {
    /// factorial(n) = n!
    ///
    /// factorial(0) = 1, factorial(k+1) = (k+1) * factorial(k)
    pub fn factorial() = Func::prim_rec(
        one(),
        Func::compose(
            mult(),
            [Func::compose(Func::succ(), [Func::proj(0)]), Func::proj(1)],
        ),
    );
}

shared! {
    /// exp(n, b) = b^n; the exponent comes first because it is recursed on
    pub fn exp() = Func::prim_rec(
        const_one(),
        Func::compose(mult(), [Func::proj(2), Func::proj(1)]),
    );
}

shared! {
    pub fn double() = Func::compose(add(), [Func::proj(0), Func::proj(0)]);
}

shared! {
    pub fn square() = Func::compose(mult(), [Func::proj(0), Func::proj(0)]);
}

shared! {
    /// tri(n) = 0 + 1 + ... + n
    ///
    /// tri(0) = 0, tri(k+1) = add(k+1, tri(k))
    pub fn tri() = Func::prim_rec(
        Func::zero(),
        Func::compose(
            add(),
            [Func::compose(Func::succ(), [Func::proj(0)]), Func::proj(1)],
        ),
    );
}
