// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/error.rs
// Evaluation errors

use std::fmt;
use thiserror::Error;

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;

/// How many arguments a function wanted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expected::Exactly(1) => write!(f, "1 argument"),
            Expected::Exactly(n) => write!(f, "{} arguments", n),
            Expected::AtLeast(1) => write!(f, "at least 1 argument"),
            Expected::AtLeast(n) => write!(f, "at least {} arguments", n),
        }
    }
}

/// Errors raised while applying a function. Evaluation never recovers from
/// these; they reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Wrong number of positional arguments
    #[error("arity error: {func} expects {expected}, got {got}")]
    Arity {
        func: String,
        expected: Expected,
        got: usize,
    },

    /// Argument or intermediate result outside the function's domain
    #[error("domain error: {message}")]
    Domain { message: String },
}

impl EvalError {
    pub fn arity(func: impl Into<String>, expected: Expected, got: usize) -> Self {
        EvalError::Arity {
            func: func.into(),
            expected,
            got,
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        EvalError::Domain {
            message: message.into(),
        }
    }

    pub fn is_arity(&self) -> bool {
        matches!(self, EvalError::Arity { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, EvalError::Domain { .. })
    }
}
