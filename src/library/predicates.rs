// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/predicates.rs
// Predicates returning 0 or 1

use crate::ast::Func;
use crate::library::arithmetic::{add, const_one, monus};

shared! {
    /// sg(0) = 0, sg(n) = 1 for n > 0
    pub fn sg() = Func::prim_rec(Func::zero(), const_one());
}

shared! {
    /// sg_bar(n) = 1 - sg(n)
    pub fn sg_bar() = Func::compose(monus(), [const_one(), sg()]);
}

pub fn is_zero() -> Func {
    sg_bar()
}

shared! {
    /// |a - b| = monus(a, b) + monus(b, a)
    fn abs_diff() = Func::compose(
        add(),
        [monus(), Func::compose(monus(), [Func::proj(1), Func::proj(0)])],
    );
}

shared! {
    pub fn eq() = Func::compose(is_zero(), [abs_diff()]);
}

shared! {
    /// a <= b iff monus(a, b) = 0
    pub fn leq() = Func::compose(is_zero(), [monus()]);
}

shared! {
    /// a < b iff a + 1 <= b
    pub fn lt() = Func::compose(
        leq(),
        [Func::compose(Func::succ(), [Func::proj(0)]), Func::proj(1)],
    );
}
