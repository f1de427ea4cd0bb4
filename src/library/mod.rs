// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/library/mod.rs
// Catalog of derived functions

use crate::ast::*;
use crate::error::{EvalError, EvalResult, Expected};
use std::fmt;

/// Define a catalog entry whose tree is built once and then shared by every
/// definition that embeds it.
macro_rules! shared {
    ($(#[$meta:meta])* $vis:vis fn $name:ident() = $body:expr;) => {
        $(#[$meta])*
        $vis fn $name() -> Func {
            static CELL: std::sync::OnceLock<Func> = std::sync::OnceLock::new();
            CELL.get_or_init(|| $body).clone()
        }
    };
}

pub mod arithmetic;
pub mod cantor;
pub mod division;
pub mod predicates;

pub use arithmetic::*;
pub use cantor::*;
pub use division::*;
pub use predicates::*;

// ============================================================================
// Derived Functions
// ============================================================================

/// A named function computed by host code on top of `apply` and
/// `bounded_min`, for definitions whose pure tree would be impractically
/// slow. It cannot be embedded in a `Func`.
#[derive(Clone, Copy)]
pub struct Derived {
    name: &'static str,
    arity: usize,
    body: fn(&[Nat]) -> EvalResult<Nat>,
}

impl Derived {
    pub const fn new(name: &'static str, arity: usize, body: fn(&[Nat]) -> EvalResult<Nat>) -> Self {
        Derived { name, arity, body }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn apply(&self, args: &[Nat]) -> EvalResult<Nat> {
        if args.len() != self.arity {
            return Err(EvalError::arity(self.name, Expected::Exactly(self.arity), args.len()));
        }
        (self.body)(args)
    }

    pub fn call(&self, args: &[u64]) -> EvalResult<Nat> {
        let args: Vec<Nat> = args.iter().copied().map(nat).collect();
        self.apply(&args)
    }
}

impl fmt::Debug for Derived {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Derived({}/{})", self.name, self.arity)
    }
}

// ============================================================================
// Catalog
// ============================================================================

#[derive(Debug, Clone)]
pub enum Definition {
    Func(Func),
    Derived(&'static Derived),
}

/// Every catalog entry under the name the shell knows it by
pub fn catalog() -> Vec<(&'static str, Definition)> {
    let funcs = [
        ("one", one()),
        ("const_one", const_one()),
        ("add", add()),
        ("mult", mult()),
        ("pred", pred()),
        ("monus", monus()),
        ("factorial", factorial()),
        ("exp", exp()),
        ("double", double()),
        ("square", square()),
        ("tri", tri()),
        ("sg", sg()),
        ("sg_bar", sg_bar()),
        ("is_zero", is_zero()),
        ("eq", eq()),
        ("leq", leq()),
        ("lt", lt()),
        ("div", div()),
        ("rem", rem()),
        ("divides", divides()),
        ("pair", pair()),
    ];
    let derived: [&'static Derived; 3] = [&FST, &SND, &FIB];

    funcs
        .into_iter()
        .map(|(name, f)| (name, Definition::Func(f)))
        .chain(derived.into_iter().map(|d| (d.name(), Definition::Derived(d))))
        .collect()
}
