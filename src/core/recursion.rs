// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/recursion.rs
// Iterative primitive recursion

use crate::ast::*;
use crate::error::{EvalError, EvalResult, Expected};
use num_traits::Zero;
use tracing::trace;

/// Evaluate `prim_rec(base, step)` at `(n, xs...)`:
///
/// ```text
/// acc = base(xs)
/// for k in 0..n: acc = step(k, acc, xs)
/// ```
///
/// The loop runs on the heap-allocated frame `[k, acc, xs...]`, so stack
/// usage does not grow with `n`.
pub(crate) fn iterate(base: &Func, step: &Func, args: &[Nat]) -> EvalResult<Nat> {
    let (n, xs) = args
        .split_first()
        .ok_or_else(|| EvalError::arity("prim_rec", Expected::AtLeast(1), 0))?;

    trace!(%n, params = xs.len(), "primitive recursion");

    let mut acc = base.apply(xs)?;

    let mut frame = Vec::with_capacity(xs.len() + 2);
    frame.push(Nat::zero());
    frame.push(Nat::zero());
    frame.extend_from_slice(xs);

    while frame[0] < *n {
        frame[1] = acc;
        acc = step.apply(&frame)?;
        frame[0] += 1u32;
    }

    Ok(acc)
}
