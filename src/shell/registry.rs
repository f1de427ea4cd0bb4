// Primitive Recursive Functions
//
// Based on the classical presentation of the primitive recursive functions:
// zero, successor and projection, closed under composition and primitive
// recursion, extended with bounded minimization.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/shell/registry.rs
// Fixed mapping from shell names to functions

use crate::ast::Func;
use crate::library::{catalog, Definition, Derived};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Constructors and searches the shell offers on top of plain functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Proj,
    Compose,
    PrimRec,
    Search,
    Bmin,
}

impl Builtin {
    pub const ALL: [Builtin; 5] = [
        Builtin::Proj,
        Builtin::Compose,
        Builtin::PrimRec,
        Builtin::Search,
        Builtin::Bmin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Proj => "proj",
            Builtin::Compose => "compose",
            Builtin::PrimRec => "prim_rec",
            Builtin::Search => "search",
            Builtin::Bmin => "bmin",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Builtin::Proj => "proj(i)",
            Builtin::Compose => "compose(f, g1, ..., gm)",
            Builtin::PrimRec => "prim_rec(base, step)",
            Builtin::Search => "search(p)",
            Builtin::Bmin => "bmin(p, n)",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub enum Binding {
    Func(Func),
    Derived(&'static Derived),
    Builtin(Builtin),
}

impl Binding {
    /// One-line summary for listings, e.g. `add/2` or `bmin(p, n)`
    pub fn signature(&self, name: &str) -> String {
        match self {
            Binding::Func(f) => format!("{}/{}", name, f.min_arity()),
            Binding::Derived(d) => format!("{}/{}", name, d.arity()),
            Binding::Builtin(b) => b.usage().to_string(),
        }
    }
}

impl From<Definition> for Binding {
    fn from(def: Definition) -> Self {
        match def {
            Definition::Func(f) => Binding::Func(f),
            Definition::Derived(d) => Binding::Derived(d),
        }
    }
}

/// Names are resolved only here; nothing else is reachable from the shell.
#[derive(Debug, Clone)]
pub struct Registry {
    names: BTreeMap<&'static str, Binding>,
}

impl Registry {
    pub fn empty() -> Self {
        Registry {
            names: BTreeMap::new(),
        }
    }

    /// Generators, builtins and the whole catalog
    pub fn standard() -> Self {
        let mut registry = Registry::empty();
        registry.insert("zero", Binding::Func(Func::zero()));
        registry.insert("succ", Binding::Func(Func::succ()));
        for builtin in Builtin::ALL {
            registry.insert(builtin.name(), Binding::Builtin(builtin));
        }
        for (name, def) in catalog() {
            registry.insert(name, def.into());
        }
        debug!(names = registry.len(), "registry ready");
        registry
    }

    pub fn insert(&mut self, name: &'static str, binding: Binding) {
        self.names.insert(name, binding);
    }

    pub fn lookup(&self, name: &str) -> Option<&Binding> {
        self.names.get(name)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &Binding)> {
        self.names.iter().map(|(name, binding)| (*name, binding))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::standard()
    }
}
