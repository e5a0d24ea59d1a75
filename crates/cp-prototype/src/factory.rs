//! Registry of prototypes keyed by kind.
//!
//! [`PrototypeFactory`] owns one exemplar per [`PrototypeKind`] and answers
//! [`create`](PrototypeFactory::create) with a fresh clone of it.

use std::collections::HashMap;
use std::fmt;

use cp_core::{Error, Result};

use crate::prototype::{ConcretePrototype1, ConcretePrototype2, Prototype};

/// Kinds of prototype the factory knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrototypeKind {
    /// Backed by [`ConcretePrototype1`] by default.
    Prototype1,
    /// Backed by [`ConcretePrototype2`] by default.
    Prototype2,
}

impl fmt::Display for PrototypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrototypeKind::Prototype1 => f.write_str("PROTOTYPE_1"),
            PrototypeKind::Prototype2 => f.write_str("PROTOTYPE_2"),
        }
    }
}

/// Clones registered exemplars on demand.
#[derive(Debug, Clone)]
pub struct PrototypeFactory {
    prototypes: HashMap<PrototypeKind, Box<dyn Prototype>>,
}

impl Default for PrototypeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl PrototypeFactory {
    /// Factory preloaded with `PROTOTYPE_1` (50.0) and `PROTOTYPE_2` (60.0).
    pub fn new() -> Self {
        let mut factory = Self::empty();
        factory.register(
            PrototypeKind::Prototype1,
            Box::new(ConcretePrototype1::new(
                PrototypeKind::Prototype1.to_string(),
                50.0,
            )),
        );
        factory.register(
            PrototypeKind::Prototype2,
            Box::new(ConcretePrototype2::new(
                PrototypeKind::Prototype2.to_string(),
                60.0,
            )),
        );
        factory
    }

    /// Factory with nothing registered.
    pub fn empty() -> Self {
        Self {
            prototypes: HashMap::new(),
        }
    }

    /// Register `prototype` under `kind`, returning the one it replaces.
    pub fn register(
        &mut self,
        kind: PrototypeKind,
        prototype: Box<dyn Prototype>,
    ) -> Option<Box<dyn Prototype>> {
        tracing::debug!(%kind, name = prototype.name(), "registering prototype");
        self.prototypes.insert(kind, prototype)
    }

    /// Remove and return the prototype registered under `kind`.
    pub fn unregister(&mut self, kind: PrototypeKind) -> Option<Box<dyn Prototype>> {
        self.prototypes.remove(&kind)
    }

    /// `true` if something is registered under `kind`.
    pub fn contains(&self, kind: PrototypeKind) -> bool {
        self.prototypes.contains_key(&kind)
    }

    /// A fresh clone of the prototype registered under `kind`.
    ///
    /// # Errors
    /// [`Error::UnknownPrototype`] if nothing is registered under `kind`.
    pub fn create(&self, kind: PrototypeKind) -> Result<Box<dyn Prototype>> {
        self.prototypes
            .get(&kind)
            .map(|prototype| prototype.clone_box())
            .ok_or_else(|| Error::UnknownPrototype(kind.to_string()))
    }
}
