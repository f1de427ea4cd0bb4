// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/shell/interp.rs
// Evaluating parsed shell expressions against the registry

use crate::ast::*;
use crate::core::{bmin, bounded_min, to_nat};
use crate::error::{EvalError, Expected};
use crate::library::Derived;
use crate::shell::registry::{Binding, Builtin, Registry};
use crate::shell::ShellError;
use num_traits::ToPrimitive;
use std::fmt;

type InterpResult<T> = Result<T, ShellError>;

// ============================================================================
// Values
// ============================================================================

#[derive(Debug, Clone)]
pub enum Value {
    Num(IntLit),
    Func(Func),
    Derived(&'static Derived),
    Builtin(Builtin),
}

impl Value {
    pub fn as_num(&self) -> Option<&IntLit> {
        match self {
            Value::Num(n) => Some(n),
            _ => None,
        }
    }

    fn describe(&self) -> String {
        match self {
            Value::Num(n) => format!("number {}", n),
            Value::Func(f) => format!("function {}", f.label()),
            Value::Derived(d) => format!("host-defined function {}", d.name()),
            Value::Builtin(b) => format!("builtin {}", b),
        }
    }
}

impl From<Nat> for Value {
    fn from(n: Nat) -> Self {
        Value::Num(IntLit::from(n))
    }
}

impl From<&Binding> for Value {
    fn from(binding: &Binding) -> Self {
        match binding {
            Binding::Func(f) => Value::Func(f.clone()),
            Binding::Derived(d) => Value::Derived(*d),
            Binding::Builtin(b) => Value::Builtin(*b),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{}", n),
            Value::Func(func) => write!(f, "[function: {}]", func),
            Value::Derived(d) => write!(f, "[function: {}]", d.name()),
            Value::Builtin(b) => write!(f, "[builtin: {}]", b),
        }
    }
}

// ============================================================================
// Evaluation
// ============================================================================

pub fn evaluate(expr: &Expr, registry: &Registry) -> InterpResult<Value> {
    match expr {
        Expr::Int(n) => Ok(Value::Num(n.clone())),

        Expr::Name(name) => registry
            .lookup(name)
            .map(Value::from)
            .ok_or_else(|| ShellError::UnknownName(name.clone())),

        Expr::Call(callee, args) => {
            let callee = evaluate(callee, registry)?;
            let args = args
                .iter()
                .map(|arg| evaluate(arg, registry))
                .collect::<InterpResult<Vec<Value>>>()?;
            call(callee, args)
        }
    }
}

fn call(callee: Value, args: Vec<Value>) -> InterpResult<Value> {
    match callee {
        Value::Num(n) => Err(ShellError::NotCallable(n.to_string())),

        Value::Func(f) => {
            let args = numbers(&f.label(), &args)?;
            Ok(f.apply_signed(&args)?.into())
        }

        Value::Derived(d) => {
            let args = numbers(d.name(), &args)?;
            let args = args.iter().map(to_nat).collect::<Result<Vec<Nat>, EvalError>>()?;
            Ok(d.apply(&args)?.into())
        }

        Value::Builtin(b) => call_builtin(b, args),
    }
}

fn call_builtin(builtin: Builtin, args: Vec<Value>) -> InterpResult<Value> {
    let name = builtin.name();
    match builtin {
        Builtin::Proj => {
            expect_count(name, Expected::Exactly(1), &args)?;
            let index = number(name, 1, &args[0])?;
            let index = to_nat(&index)?;
            let index = index.to_usize().ok_or_else(|| {
                EvalError::domain(format!("projection index {} is too large", index))
            })?;
            Ok(Value::Func(Func::proj(index)))
        }

        Builtin::Compose => {
            expect_count(name, Expected::AtLeast(1), &args)?;
            let mut funcs = functions(name, &args)?.into_iter();
            let outer = funcs.next().ok_or_else(|| EvalError::arity(name, Expected::AtLeast(1), 0))?;
            Ok(Value::Func(Func::compose(outer, funcs)))
        }

        Builtin::PrimRec => {
            expect_count(name, Expected::Exactly(2), &args)?;
            let base = function(name, 1, &args[0])?;
            let step = function(name, 2, &args[1])?;
            Ok(Value::Func(Func::prim_rec(base, step)))
        }

        Builtin::Search => {
            expect_count(name, Expected::Exactly(1), &args)?;
            let pred = function(name, 1, &args[0])?;
            Ok(Value::Func(Func::search(pred)))
        }

        Builtin::Bmin => {
            expect_count(name, Expected::Exactly(2), &args)?;
            let bound = to_nat(&number(name, 2, &args[1])?)?;
            let found = match &args[0] {
                Value::Func(pred) => bmin(pred, &bound)?,
                Value::Derived(pred) => {
                    bounded_min(&bound, |k| pred.apply(std::slice::from_ref(k)))?
                }
                other => {
                    return Err(ShellError::ExpectedFunction {
                        callee: name.to_string(),
                        position: 1,
                        found: other.describe(),
                    })
                }
            };
            Ok(found.into())
        }
    }
}

// ============================================================================
// Argument Checks
// ============================================================================

fn expect_count(callee: &str, expected: Expected, args: &[Value]) -> InterpResult<()> {
    let ok = match expected {
        Expected::Exactly(n) => args.len() == n,
        Expected::AtLeast(n) => args.len() >= n,
    };
    if ok {
        Ok(())
    } else {
        Err(EvalError::arity(callee, expected, args.len()).into())
    }
}

fn number(callee: &str, position: usize, value: &Value) -> InterpResult<IntLit> {
    value.as_num().cloned().ok_or_else(|| ShellError::ExpectedNumber {
        callee: callee.to_string(),
        position,
        found: value.describe(),
    })
}

fn numbers(callee: &str, args: &[Value]) -> InterpResult<Vec<IntLit>> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| number(callee, i + 1, arg))
        .collect()
}

/// Only trees can be embedded in new trees; host-defined functions cannot.
fn function(callee: &str, position: usize, value: &Value) -> InterpResult<Func> {
    match value {
        Value::Func(f) => Ok(f.clone()),
        other => Err(ShellError::ExpectedFunction {
            callee: callee.to_string(),
            position,
            found: other.describe(),
        }),
    }
}

fn functions(callee: &str, args: &[Value]) -> InterpResult<Vec<Func>> {
    args.iter()
        .enumerate()
        .map(|(i, arg)| function(callee, i + 1, arg))
        .collect()
}
