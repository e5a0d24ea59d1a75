//! Holder whose instance is built at static initialisation.
//!
//! No lazy check exists, so there is nothing to race on. The price is that
//! the instance must be constructible in a `const` context.

use crate::holder::{Accessor, HolderState};

/// Holder constructed eagerly in a `static` item.
///
/// # Example
/// ```
/// use cp_singleton::EagerHolder;
///
/// struct Limits { max: u32 }
/// static LIMITS: EagerHolder<Limits> = EagerHolder::new(Limits { max: 8 });
///
/// assert_eq!(LIMITS.get_instance().max, 8);
/// assert!(std::ptr::eq(LIMITS.get_instance(), LIMITS.get_instance()));
/// ```
#[derive(Debug)]
pub struct EagerHolder<T> {
    instance: T,
}

impl<T> EagerHolder<T> {
    /// Wrap an already-built instance.
    pub const fn new(instance: T) -> Self {
        Self { instance }
    }

    /// Return the instance.
    pub const fn get_instance(&self) -> &T {
        &self.instance
    }

    /// Always [`HolderState::Initialized`].
    pub const fn state(&self) -> HolderState {
        HolderState::Initialized
    }
}

impl<T> Accessor<T> for EagerHolder<T> {
    fn get_instance(&self) -> &T {
        EagerHolder::get_instance(self)
    }
}
