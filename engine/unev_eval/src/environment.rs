//! Dynamic environment.
//!
//! An `Environment` is an ordered sequence of name/value bindings with
//! persistent value semantics: `set` and `erase` return a new environment and
//! leave the old one valid and unchanged, so multiple what-if environments
//! can share a base without synchronization.
//!
//! Invariant: at most one binding per name is ever visible. Re-binding a name
//! removes the old entry and appends the new one, so the binding moves to the
//! logical end of the sequence, observable through `iter` and invisible to
//! `get`.
//!
//! Environments are expected to stay small, so bindings live inline in a
//! `SmallVec` and every update is a copy, not a structural-sharing map.

use smallvec::SmallVec;

use unev_ir::Name;
use unev_value::{undefined_variable, EvalError, Value};

/// A single (name, value) pair. Immutable once created.
#[derive(Clone, Debug, PartialEq)]
pub struct Binding {
    name: Name,
    value: Value,
}

impl Binding {
    /// The bound name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The bound value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An ordered, persistent collection of bindings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Environment {
    bindings: SmallVec<[Binding; 8]>,
}

impl Environment {
    /// The environment with no bindings.
    pub fn empty() -> Self {
        Environment::default()
    }

    /// Whether `name` has an active binding.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.bindings.iter().any(|b| b.name == *name)
    }

    /// Look up the value bound to `name`.
    ///
    /// Fails with `UndefinedVariable` if there is no active binding.
    pub fn get(&self, name: impl AsRef<str>) -> Result<&Value, EvalError> {
        let name = name.as_ref();
        self.bindings
            .iter()
            .find(|b| b.name == *name)
            .map(Binding::value)
            .ok_or_else(|| undefined_variable(name))
    }

    /// Bind `name` to `value`, returning the extended environment.
    ///
    /// If `name` was already bound, the old entry is removed first and the
    /// new binding is appended, so it moves to the end of iteration order.
    #[must_use]
    pub fn set(&self, name: impl Into<Name>, value: impl Into<Value>) -> Environment {
        let name = name.into();
        let mut bindings: SmallVec<[Binding; 8]> = self
            .bindings
            .iter()
            .filter(|b| b.name != name)
            .cloned()
            .collect();
        bindings.push(Binding {
            name,
            value: value.into(),
        });
        Environment { bindings }
    }

    /// Remove the binding for `name`, returning the shrunk environment.
    ///
    /// Fails with `UndefinedVariable` if there is no active binding.
    pub fn erase(&self, name: impl AsRef<str>) -> Result<Environment, EvalError> {
        let name = name.as_ref();
        if !self.contains(name) {
            return Err(undefined_variable(name));
        }
        let bindings = self
            .bindings
            .iter()
            .filter(|b| b.name != *name)
            .cloned()
            .collect();
        Ok(Environment { bindings })
    }

    /// Number of active bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the environment has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings in order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }
}

impl<N: Into<Name>, V: Into<Value>> FromIterator<(N, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Environment::empty(), |env, (name, value)| {
                env.set(name, value)
            })
    }
}
