//! Error types shared by the creational pattern crates.
//!
//! A single `thiserror`-derived enum covers every fallible operation in the
//! workspace. The [`ensure!`](crate::ensure) and [`fail!`](crate::fail)
//! macros return early with the matching variant.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (see [`fail!`](crate::fail)).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (see [`ensure!`](crate::ensure)).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// An explicit initialization was requested on a holder that already
    /// owns its instance.
    #[error("instance of `{type_name}` is already initialized")]
    AlreadyInitialized {
        /// Name of the guarded type.
        type_name: &'static str,
    },

    /// A prototype factory has nothing registered under the requested kind.
    #[error("no prototype registered for {0}")]
    UnknownPrototype(String),
}

impl Error {
    /// Build an [`Error::AlreadyInitialized`] for `T`.
    pub fn already_initialized<T: ?Sized>() -> Self {
        Error::AlreadyInitialized {
            type_name: std::any::type_name::<T>(),
        }
    }
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cp_core::ensure;
/// fn positive(x: usize) -> cp_core::Result<usize> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cp_core::fail;
/// fn always_err() -> cp_core::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
