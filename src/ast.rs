// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Function trees and shell expressions

use num_bigint::{BigInt, BigUint};
use std::sync::Arc;

// ============================================================================
// Core Types
// ============================================================================

/// Natural numbers, the only value domain of the calculus
pub type Nat = BigUint;

/// Integer literals as written at the shell; may be negative
pub type IntLit = BigInt;

pub fn nat(n: u64) -> Nat {
    Nat::from(n)
}

/// A function value: an immutable node of a function tree.
///
/// Children are reference counted, so the same subtree (say `add`) can be
/// embedded in any number of larger definitions. Trees are never cyclic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Func {
    /// Z() = 0
    Zero,
    /// S(n) = n + 1
    Succ,
    /// P_i(x_0, ..., x_n) = x_i, 0-indexed
    Proj(usize),
    /// h(xs) = outer(inner_1(xs), ..., inner_m(xs))
    Compose {
        outer: Arc<Func>,
        inners: Arc<[Func]>,
    },
    /// h(0, xs) = base(xs), h(k+1, xs) = step(k, h(k, xs), xs)
    PrimRec { base: Arc<Func>, step: Arc<Func> },
    /// h(n, xs) = least k < n with pred(k, xs) = 1, or n
    Search { pred: Arc<Func> },
}

// ============================================================================
// Shell Expressions
// ============================================================================

/// Surface syntax accepted by the shell: literals, names and calls
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(IntLit),
    Name(String),
    Call(Box<Expr>, Vec<Expr>),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Func {
    pub fn zero() -> Self {
        Func::Zero
    }

    pub fn succ() -> Self {
        Func::Succ
    }

    pub fn proj(index: usize) -> Self {
        Func::Proj(index)
    }

    /// `compose(f)` with no inner functions lifts the constant `f()` to a
    /// function that ignores its arguments.
    pub fn compose(outer: Func, inners: impl IntoIterator<Item = Func>) -> Self {
        Func::Compose {
            outer: Arc::new(outer),
            inners: inners.into_iter().collect(),
        }
    }

    /// `compose(f)`: ignore the arguments and return `f()`
    pub fn constant(outer: Func) -> Self {
        Func::Compose {
            outer: Arc::new(outer),
            inners: Arc::from(Vec::new()),
        }
    }

    pub fn prim_rec(base: Func, step: Func) -> Self {
        Func::PrimRec {
            base: Arc::new(base),
            step: Arc::new(step),
        }
    }

    pub fn search(pred: Func) -> Self {
        Func::Search {
            pred: Arc::new(pred),
        }
    }
}

impl Expr {
    pub fn int(n: i64) -> Self {
        Expr::Int(IntLit::from(n))
    }

    pub fn name(s: impl Into<String>) -> Self {
        Expr::Name(s.into())
    }

    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call(Box::new(callee), args)
    }
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Func {
    /// Short name of the node kind, used in error messages
    pub fn label(&self) -> String {
        match self {
            Func::Zero => "zero".to_string(),
            Func::Succ => "succ".to_string(),
            Func::Proj(i) => format!("proj({})", i),
            Func::Compose { .. } => "compose".to_string(),
            Func::PrimRec { .. } => "prim_rec".to_string(),
            Func::Search { .. } => "search".to_string(),
        }
    }

    /// Smallest argument count the tree can be applied to without an
    /// arity error from a projection, successor, or recursion argument.
    ///
    /// This is a static bound only. Composition can still fail at call time
    /// when an outer function rejects the number of inner results.
    pub fn min_arity(&self) -> usize {
        match self {
            Func::Zero => 0,
            Func::Succ => 1,
            Func::Proj(i) => i + 1,
            Func::Compose { inners, .. } => {
                inners.iter().map(Func::min_arity).max().unwrap_or(0)
            }
            Func::PrimRec { base, step } => {
                let params = base.min_arity().max(step.min_arity().saturating_sub(2));
                params + 1
            }
            Func::Search { pred } => pred.min_arity().max(1),
        }
    }

    /// Number of nodes, counting shared subtrees once per occurrence
    pub fn size(&self) -> usize {
        1 + match self {
            Func::Zero | Func::Succ | Func::Proj(_) => 0,
            Func::Compose { outer, inners } => {
                outer.size() + inners.iter().map(Func::size).sum::<usize>()
            }
            Func::PrimRec { base, step } => base.size() + step.size(),
            Func::Search { pred } => pred.size(),
        }
    }
}
