//! Unsynchronised check-then-act holder.
//!
//! **Defective on purpose.** [`RacyHolder`] checks whether its slot is
//! empty, releases the lock, constructs, then takes the lock again to store
//! the result. Two callers that both pass the check both construct, and
//! each walks away with its own instance; the second store silently
//! replaces the first.
//!
//! It is kept as a contrast case next to the race-free holders so the
//! defect can be demonstrated. Never use it to guard real state.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::holder::{Accessor, HolderState};

/// Lazy holder reproducing the naive check-then-act race.
pub struct RacyHolder<T: 'static> {
    slot: Mutex<Option<&'static T>>,
    init: fn() -> T,
}

impl<T: 'static> RacyHolder<T> {
    /// Create an empty holder that will build its instance with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            slot: Mutex::new(None),
            init,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<&'static T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return an instance. Concurrent first callers may each get a
    /// different one.
    pub fn get_instance(&self) -> &'static T {
        // check
        let current = *self.lock();
        if let Some(instance) = current {
            return instance;
        }

        // act, with nothing held in between
        let instance: &'static T = Box::leak(Box::new((self.init)()));
        let mut slot = self.lock();
        if slot.is_some() {
            tracing::warn!(
                type_name = std::any::type_name::<T>(),
                "check-then-act race: replacing an instance another caller already stored"
            );
        }
        *slot = Some(instance);
        instance
    }

    /// Return the most recently stored instance, if any.
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

impl<T: 'static> Accessor<T> for RacyHolder<T> {
    fn get_instance(&self) -> &T {
        RacyHolder::get_instance(self)
    }
}

impl<T: 'static> fmt::Debug for RacyHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RacyHolder")
            .field("type", &std::any::type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_use_looks_correct() {
        let holder = RacyHolder::new(|| String::from("only"));
        let first = holder.get_instance();
        let second = holder.get_instance();
        assert!(std::ptr::eq(first, second));
        assert_eq!(holder.state(), HolderState::Initialized);
    }
}
