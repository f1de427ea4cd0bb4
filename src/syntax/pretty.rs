// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Pretty printing for function trees and shell expressions

use crate::ast::*;
use std::fmt;

// ============================================================================
// Function Trees
// ============================================================================

/// Prints a tree in the same call syntax the shell builds it with, e.g.
/// `prim_rec(proj(0), compose(succ, proj(1)))`.
impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Func::Zero => write!(f, "zero"),
            Func::Succ => write!(f, "succ"),
            Func::Proj(i) => write!(f, "proj({})", i),
            Func::Compose { outer, inners } => {
                write!(f, "compose({}", outer)?;
                for g in inners.iter() {
                    write!(f, ", {}", g)?;
                }
                write!(f, ")")
            }
            Func::PrimRec { base, step } => write!(f, "prim_rec({}, {})", base, step),
            Func::Search { pred } => write!(f, "search({})", pred),
        }
    }
}

// ============================================================================
// Shell Expressions
// ============================================================================

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Int(n) => write!(f, "{}", n),
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Call(callee, args) => {
                write!(f, "{}(", callee)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl Expr {
    pub fn to_pretty_string(&self) -> String {
        format!("{}", self)
    }
}
