//! # creational
//!
//! Creational design patterns in Rust.
//!
//! This crate is a **façade** that re-exports the pattern crates and hosts
//! the demonstration programs. It also owns the pieces the demos share:
//! logging setup and the demo walkthroughs themselves.
//!
//! ```rust
//! use creational::singleton::Singleton;
//!
//! let s1 = Singleton::get_instance();
//! let s2 = Singleton::get_instance();
//! assert!(std::ptr::eq(s1, s2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error type.
pub use cp_core as core;

/// Singleton holders and the example `Singleton` type.
pub use cp_singleton as singleton;

/// Builder pattern.
pub use cp_builder as builder;

/// Prototype pattern.
pub use cp_prototype as prototype;

/// Demonstration walkthroughs printed by the binaries.
pub mod demo;

/// `tracing` subscriber setup for the binaries.
pub mod logging;
