//! Lazily-initialised single-instance holder.
//!
//! [`InstanceHolder<T>`] owns at most one `T`, built on the first call to
//! [`get_instance`](InstanceHolder::get_instance) and shared by every later
//! call. Initialisation goes through `std::sync::OnceLock`, so concurrent
//! first callers block until the single construction finishes and all of
//! them observe the same instance.
//!
//! The [`define_singleton!`](crate::define_singleton) macro declares a
//! `static` holder in one line.

use std::fmt;
use std::sync::OnceLock;

use cp_core::{Error, Result};

/// Anything that hands out a shared reference to one guarded instance.
///
/// Implemented by every holder strategy in this crate so that probes and
/// benchmarks can be written once for all of them.
pub trait Accessor<T> {
    /// Return the guarded instance, constructing it if necessary.
    fn get_instance(&self) -> &T;
}

/// Lifecycle of a holder. `Initialized` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolderState {
    /// No instance has been constructed yet.
    Uninitialized,
    /// The instance exists and will be returned by every access.
    Initialized,
}

/// Holds zero-or-one instance of `T`, created on first access.
///
/// # Example
/// ```
/// use cp_singleton::{HolderState, InstanceHolder};
///
/// static NAMES: InstanceHolder<Vec<&'static str>> = InstanceHolder::new(|| vec!["a", "b"]);
///
/// assert_eq!(NAMES.state(), HolderState::Uninitialized);
/// let first = NAMES.get_instance();
/// let second = NAMES.get_instance();
/// assert!(std::ptr::eq(first, second));
/// assert_eq!(NAMES.state(), HolderState::Initialized);
/// ```
pub struct InstanceHolder<T> {
    cell: OnceLock<T>,
    init: fn() -> T,
}

impl<T> InstanceHolder<T> {
    /// Create an empty holder that will build its instance with `init`.
    pub const fn new(init: fn() -> T) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Return the sole instance, running the constructor on the first call.
    ///
    /// The constructor runs exactly once no matter how many threads race on
    /// the first call.
    pub fn get_instance(&self) -> &T {
        self.cell.get_or_init(|| {
            tracing::debug!(
                type_name = std::any::type_name::<T>(),
                "constructing instance"
            );
            (self.init)()
        })
    }

    /// Return the instance if it exists, without constructing it.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HolderState {
        if self.cell.get().is_some() {
            HolderState::Initialized
        } else {
            HolderState::Uninitialized
        }
    }

    /// `true` once the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.state() == HolderState::Initialized
    }

    /// Install `value` as the instance ahead of the first access.
    ///
    /// Fails with [`Error::AlreadyInitialized`] if the holder already owns an
    /// instance; the existing instance is kept and `value` is dropped.
    pub fn try_init_with(&self, value: T) -> Result<&T> {
        let mut installed = false;
        let instance = self.cell.get_or_init(|| {
            installed = true;
            value
        });
        if installed {
            tracing::debug!(
                type_name = std::any::type_name::<T>(),
                "installed instance eagerly"
            );
            Ok(instance)
        } else {
            Err(Error::already_initialized::<T>())
        }
    }
}

impl<T> Accessor<T> for InstanceHolder<T> {
    fn get_instance(&self) -> &T {
        InstanceHolder::get_instance(self)
    }
}

impl<T> fmt::Debug for InstanceHolder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHolder")
            .field("type", &std::any::type_name::<T>())
            .field("state", &self.state())
            .finish()
    }
}

/// Declare a `static` [`InstanceHolder`] named `$name` holding a `$ty`.
///
/// The instance is built from `$init` on first access.
///
/// # Example
/// ```
/// use cp_singleton::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(REGISTRY: Registry = Registry { data: Vec::new() });
///
/// assert!(REGISTRY.get_instance().data.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis $name:ident : $ty:ty = $init:expr) => {
        $(#[$meta])*
        $vis static $name: $crate::InstanceHolder<$ty> = $crate::InstanceHolder::new(|| $init);
    };
}
