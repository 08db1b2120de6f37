//! Instance-bound closures and named predicate accessors generated from constants.

use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BindError {
    #[error("accessor '{0}' is generated more than once")]
    DuplicateName(String),

    #[error("accessor '{0}' collides with an existing name")]
    ReservedName(String),
}

/// Partially apply `f` with `instance` as its first argument.
///
/// The returned closure shares `instance`; clones of the `Rc` held elsewhere observe the
/// same value.
pub fn bind<S, A, R, F>(instance: Rc<S>, f: F) -> impl Fn(A) -> R
where
    F: Fn(&S, A) -> R,
{
    move |arg| f(&instance, arg)
}

/// A set of named predicates over `S`, one per constant: `is_draft`, `is_normal`, ...
///
/// Every accessor calls the same check function with the instance and its constant's
/// value. Build one with [`AccessorsBuilder`].
pub struct Accessors<S, V> {
    entries: BTreeMap<String, V>,
    check: Rc<dyn Fn(&S, &V) -> bool>,
}

pub struct AccessorsBuilder<V> {
    prefix: String,
    reserved: BTreeSet<String>,
    constants: Vec<(String, V)>,
}

impl<V> Default for AccessorsBuilder<V> {
    fn default() -> Self {
        Self {
            prefix: "is_".to_string(),
            reserved: BTreeSet::new(),
            constants: Vec::new(),
        }
    }
}

impl<V> AccessorsBuilder<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix prepended to each lowercased constant name. Defaults to `is_`.
    pub fn prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Names that already exist on the target and must not be generated.
    pub fn reserved<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.reserved.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn constant(mut self, name: &str, value: V) -> Self {
        self.constants.push((name.to_string(), value));
        self
    }

    pub fn constants<'a, I>(mut self, constants: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, V)>,
    {
        self.constants
            .extend(constants.into_iter().map(|(n, v)| (n.to_string(), v)));
        self
    }

    pub fn build<S, F>(self, check: F) -> Result<Accessors<S, V>, BindError>
    where
        F: Fn(&S, &V) -> bool + 'static,
    {
        let mut entries = BTreeMap::new();

        for (name, value) in self.constants {
            let accessor = format!("{}{}", self.prefix, name.to_lowercase());
            if self.reserved.contains(&accessor) {
                return Err(BindError::ReservedName(accessor));
            }
            if entries.contains_key(&accessor) {
                return Err(BindError::DuplicateName(accessor));
            }
            entries.insert(accessor, value);
        }

        Ok(Accessors {
            entries,
            check: Rc::new(check),
        })
    }
}

impl<S: 'static, V: Clone + 'static> Accessors<S, V> {
    /// Generated accessor names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Evaluate accessor `name` against `instance`; `None` if no such accessor exists.
    pub fn get(&self, name: &str, instance: &S) -> Option<bool> {
        self.entries
            .get(name)
            .map(|value| (self.check)(instance, value))
    }

    /// Accessor `name` bound to `instance`, callable without arguments.
    pub fn bound(&self, name: &str, instance: Rc<S>) -> Option<impl Fn() -> bool + use<S, V>> {
        let value = self.entries.get(name)?.clone();
        let check = Rc::clone(&self.check);
        let f = bind(instance, move |s: &S, ()| check(s, &value));
        Some(move || f(()))
    }
}
