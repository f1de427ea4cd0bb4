// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/lib.rs
// Primitive recursive functions library

pub mod ast;
pub mod core;
pub mod error;
pub mod library;
pub mod shell;
pub mod syntax;

// Re-export commonly used items
pub use ast::{nat, Expr, Func, IntLit, Nat};
pub use crate::core::{bmin, bounded_min, from_bool, to_nat};
pub use error::{EvalError, EvalResult, Expected};
pub use library::*;
pub use shell::{evaluate, Binding, Builtin, Registry, Shell, ShellError, Value};
pub use syntax::parse_line;
