// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/search.rs
// Bounded minimization

use crate::ast::*;
use crate::error::{EvalError, EvalResult, Expected};
use num_traits::{One, Zero};
use tracing::trace;

// ============================================================================
// Scan
// ============================================================================

/// Least `k` in `[0, bound)` with `pred(k) = 1`, or `bound` if there is none.
///
/// Candidates are tried in increasing order and the scan stops at the first
/// hit. Division, remainder and the Cantor inverses all depend on getting
/// the smallest witness. A predicate answer other than 0 or 1 aborts the
/// scan with a domain error.
pub fn bounded_min<P>(bound: &Nat, mut pred: P) -> EvalResult<Nat>
where
    P: FnMut(&Nat) -> EvalResult<Nat>,
{
    trace!(%bound, "bounded search");

    let mut k = Nat::zero();
    while k < *bound {
        let verdict = pred(&k)?;
        if verdict.is_one() {
            return Ok(k);
        }
        if !verdict.is_zero() {
            return Err(EvalError::domain(format!(
                "search predicate returned {} at {}, expected 0 or 1",
                verdict, k
            )));
        }
        k += 1u32;
    }
    Ok(bound.clone())
}

/// `bmin(p, n)`: bounded search with a unary function value as predicate
pub fn bmin(pred: &Func, bound: &Nat) -> EvalResult<Nat> {
    bounded_min(bound, |k| pred.apply(std::slice::from_ref(k)))
}

// ============================================================================
// Search Node
// ============================================================================

/// Evaluate `search(pred)` at `(n, xs...)`, trying `pred(k, xs...)`
pub(crate) fn search_node(pred: &Func, args: &[Nat]) -> EvalResult<Nat> {
    let (n, xs) = args
        .split_first()
        .ok_or_else(|| EvalError::arity("search", Expected::AtLeast(1), 0))?;

    let mut frame = Vec::with_capacity(xs.len() + 1);
    frame.push(Nat::zero());
    frame.extend_from_slice(xs);

    bounded_min(n, |k| {
        frame[0] = k.clone();
        pred.apply(&frame)
    })
}
