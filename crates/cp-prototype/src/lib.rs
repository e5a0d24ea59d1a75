//! # cp-prototype
//!
//! The Prototype creational pattern: new objects are cloned from
//! registered exemplars instead of being built from their concrete types.
//!
//! ```
//! use cp_prototype::{PrototypeFactory, PrototypeKind};
//!
//! let factory = PrototypeFactory::new();
//! let mut p = factory.create(PrototypeKind::Prototype1).unwrap();
//! assert_eq!(p.method(90.0), "Call Method from PROTOTYPE_1 with field : 90");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Prototype registry.
pub mod factory;

/// The `Prototype` trait and concrete prototypes.
pub mod prototype;

pub use factory::{PrototypeFactory, PrototypeKind};
pub use prototype::{ConcretePrototype1, ConcretePrototype2, Prototype};
