// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/core/mod.rs
// Evaluation of function trees

pub mod eval;
pub mod recursion;
pub mod search;

pub use eval::{from_bool, to_nat};
pub use search::{bmin, bounded_min};
