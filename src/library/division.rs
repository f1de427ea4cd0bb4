// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/division.rs
// Division and remainder via bounded search

use crate::ast::Func;
use crate::library::arithmetic::{monus, mult};
use crate::library::predicates::{is_zero, lt, sg};

shared! {
    /// exceeds(q, a, b) = 1 iff a < b * (q + 1)
    fn exceeds() = Func::compose(
        lt(),
        [
            Func::proj(1),
            Func::compose(
                mult(),
                [Func::proj(2), Func::compose(Func::succ(), [Func::proj(0)])],
            ),
        ],
    );
}

shared! {
    /// Least q <= a with b * (q + 1) > a; this is a + 1 when b = 0
    fn quotient_search() = Func::compose(
        Func::search(exceeds()),
        [
            Func::compose(Func::succ(), [Func::proj(0)]),
            Func::proj(0),
            Func::proj(1),
        ],
    );
}

shared! {
    /// div(a, b) = floor(a / b), with div(a, 0) = 0
    ///
    /// Multiplying by sg(b) maps the b = 0 search result to 0.
    pub fn div() = Func::compose(
        mult(),
        [Func::compose(sg(), [Func::proj(1)]), quotient_search()],
    );
}

shared! {
    /// rem(a, b) = a - b * div(a, b), so rem(a, 0) = a
    pub fn rem() = Func::compose(
        monus(),
        [Func::proj(0), Func::compose(mult(), [Func::proj(1), div()])],
    );
}

shared! {
    /// divides(d, n) = 1 iff rem(n, d) = 0; divides(0, n) = 1 only for n = 0
    pub fn divides() = Func::compose(
        is_zero(),
        [Func::compose(rem(), [Func::proj(1), Func::proj(0)])],
    );
}
