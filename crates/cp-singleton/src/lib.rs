//! # cp-singleton
//!
//! The Singleton creational pattern: a value restricted to one instance per
//! process, reached through a no-argument accessor.
//!
//! Three race-free holder strategies are provided:
//!
//! * [`InstanceHolder`] – lazy, atomic initialise-once (`OnceLock`);
//! * [`LockedHolder`] – lazy, mutex held across check-and-create;
//! * [`EagerHolder`] – built at static initialisation.
//!
//! [`RacyHolder`] reproduces the naive unsynchronised check-then-act form
//! and exists only to demonstrate why it is wrong.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Holder built at static initialisation.
pub mod eager;

/// Atomic initialise-once holder, the `Accessor` trait and `define_singleton!`.
pub mod holder;

/// Mutex-guarded lazy holder.
pub mod locked;

/// Concurrent identity probe.
pub mod probe;

/// Defective check-then-act holder.
pub mod racy;

/// The example `Singleton` type.
pub mod singleton;

pub use eager::EagerHolder;
pub use holder::{Accessor, HolderState, InstanceHolder};
pub use locked::LockedHolder;
pub use probe::ProbeReport;
pub use racy::RacyHolder;
pub use singleton::Singleton;
