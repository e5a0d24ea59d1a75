//! Mutex-guarded lazy holder.
//!
//! [`LockedHolder`] keeps its instance reference behind a `std::sync::Mutex`
//! and holds the lock across the whole read-check-write sequence, so only
//! one caller can ever find the slot empty.
//!
//! The instance is leaked on construction and lives for the rest of the
//! process. Use it in `static` items.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::holder::{Accessor, HolderState};

/// Lazy holder that serialises initialisation with a mutex.
pub struct LockedHolder<T: 'static> {
    slot: Mutex<Option<&'static T>>,
    init: fn() -> T,
}

impl<T: 'static> LockedHolder<T> {
    /// Create an empty holder that will build its instance with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            slot: Mutex::new(None),
            init,
        }
    }

    // The slot is only written after `init` returns, so a poisoned lock
    // still holds a consistent value.
    fn lock(&self) -> MutexGuard<'_, Option<&'static T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the sole instance, constructing it under the lock if needed.
    pub fn get_instance(&self) -> &'static T {
        let mut slot = self.lock();
        if let Some(instance) = *slot {
            return instance;
        }
        tracing::debug!(
            type_name = std::any::type_name::<T>(),
            "constructing instance under lock"
        );
        let instance: &'static T = Box::leak(Box::new((self.init)()));
        *slot = Some(instance);
        instance
    }

    /// Return the instance if it exists, without constructing it.
    pub fn get(&self) -> Option<&'static T> {
        *self.lock()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HolderState {
        match self.get() {
            Some(_) => HolderState::Initialized,
            None => HolderState::Uninitialized,
        }
    }
}

impl<T: 'static> Accessor<T> for LockedHolder<T> {
    fn get_instance(&self) -> &T {
        LockedHolder::get_instance(self)
    }
}

impl<T: 'static> fmt::Debug for LockedHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockedHolder")
            .field("type", &std::any::type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}
