// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/eval.rs
// Applying function trees to arguments

use crate::ast::*;
use crate::core::recursion::iterate;
use crate::core::search::search_node;
use crate::error::{EvalError, EvalResult, Expected};
use num_bigint::Sign;
use num_traits::Zero;

// ============================================================================
// Application
// ============================================================================

impl Func {
    /// Apply the function to a tuple of natural numbers.
    ///
    /// Recursion depth follows the shape of the tree only; primitive
    /// recursion and search loop over their numeric argument.
    pub fn apply(&self, args: &[Nat]) -> EvalResult<Nat> {
        match self {
            Func::Zero => {
                expect_exactly(self, 0, args)?;
                Ok(Nat::zero())
            }

            Func::Succ => {
                expect_exactly(self, 1, args)?;
                Ok(&args[0] + 1u32)
            }

            Func::Proj(i) => args
                .get(*i)
                .cloned()
                .ok_or_else(|| EvalError::arity(self.label(), Expected::AtLeast(i + 1), args.len())),

            Func::Compose { outer, inners } => {
                // With no inner functions the supplied arguments are dropped
                let values = inners
                    .iter()
                    .map(|g| g.apply(args))
                    .collect::<EvalResult<Vec<Nat>>>()?;
                outer.apply(&values)
            }

            Func::PrimRec { base, step } => iterate(base, step, args),

            Func::Search { pred } => search_node(pred, args),
        }
    }

    /// Apply to machine integers; handy in tests and examples
    pub fn call(&self, args: &[u64]) -> EvalResult<Nat> {
        let args: Vec<Nat> = args.iter().copied().map(nat).collect();
        self.apply(&args)
    }

    /// Apply to signed integers, rejecting negatives with a domain error
    pub fn apply_signed(&self, args: &[IntLit]) -> EvalResult<Nat> {
        let args = args
            .iter()
            .map(to_nat)
            .collect::<EvalResult<Vec<Nat>>>()?;
        self.apply(&args)
    }
}

fn expect_exactly(func: &Func, n: usize, args: &[Nat]) -> EvalResult<()> {
    if args.len() == n {
        Ok(())
    } else {
        Err(EvalError::arity(func.label(), Expected::Exactly(n), args.len()))
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert a signed literal into a natural number
pub fn to_nat(n: &IntLit) -> EvalResult<Nat> {
    match n.sign() {
        Sign::Minus => Err(EvalError::domain(format!(
            "negative argument {} is not a natural number",
            n
        ))),
        Sign::NoSign | Sign::Plus => Ok(n.magnitude().clone()),
    }
}

/// Map a truth value onto the 0/1 encoding used by predicates
pub fn from_bool(b: bool) -> Nat {
    if b {
        nat(1)
    } else {
        Nat::zero()
    }
}
