// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/shell/mod.rs
// Line-oriented shell over the function registry

pub mod interp;
pub mod registry;

pub use interp::{evaluate, Value};
pub use registry::{Binding, Builtin, Registry};

use crate::error::EvalError;
use crate::syntax::parse_line;
use std::io::{self, BufRead, Write};
use thiserror::Error;
use tracing::{debug, info};

/// Errors reported for a single shell line. None of them ends the session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("unknown name '{0}'")]
    UnknownName(String),

    #[error("{0} is not callable")]
    NotCallable(String),

    #[error("{callee} expects a number as argument {position}, got {found}")]
    ExpectedNumber {
        callee: String,
        position: usize,
        found: String,
    },

    #[error("{callee} expects a function tree as argument {position}, got {found}")]
    ExpectedFunction {
        callee: String,
        position: usize,
        found: String,
    },

    #[error(transparent)]
    Eval(#[from] EvalError),
}

const EXAMPLES: &[(&str, &str)] = &[
    ("add(3, 4)", "7"),
    ("mult(6, 7)", "42"),
    ("factorial(5)", "120"),
    ("monus(10, 3)", "7"),
    ("add(3, mult(2, 2))", "7"),
    ("compose(succ, zero)()", "1"),
    ("prim_rec(proj(0), compose(succ, proj(1)))(2, 5)", "7"),
    ("bmin(sg, 5)", "1"),
];

pub struct Shell {
    registry: Registry,
}

impl Shell {
    pub fn new(registry: Registry) -> Self {
        Shell { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Parse and evaluate one expression
    pub fn eval_line(&self, line: &str) -> Result<Value, ShellError> {
        let expr = parse_line(line).map_err(ShellError::Parse)?;
        debug!(%expr, "parsed");
        let value = evaluate(&expr, &self.registry)?;
        debug!(%value, "evaluated");
        Ok(value)
    }

    /// Read lines until EOF or `quit`, printing each result or error
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> io::Result<()> {
        info!(names = self.registry.len(), "shell session started");

        loop {
            write!(out, ">>> ")?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            match line.trim() {
                "" => continue,
                "quit" | "exit" | "q" => break,
                "help" => self.write_help(&mut out)?,
                trimmed => match self.eval_line(trimmed) {
                    Ok(value) => writeln!(out, "{}", value)?,
                    Err(e) => writeln!(out, "error: {}", e)?,
                },
            }
        }

        Ok(())
    }

    pub fn write_help<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (input, output) in EXAMPLES {
            writeln!(out, "  {:<50} => {}", input, output)?;
        }
        writeln!(out)?;
        self.write_listing(out)
    }

    pub fn write_listing<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (name, binding) in self.registry.entries() {
            writeln!(out, "  {}", binding.signature(name))?;
        }
        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Shell::new(Registry::standard())
    }
}
