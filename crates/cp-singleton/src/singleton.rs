//! The textbook `Singleton` type.
//!
//! `Singleton` cannot be constructed outside this module; the only way to
//! reach one is [`Singleton::get_instance`], which always returns the same
//! instance.

use std::time::Instant;

use crate::holder::InstanceHolder;

static INSTANCE: InstanceHolder<Singleton> = InstanceHolder::new(Singleton::new);

/// A type restricted to exactly one instance per process.
#[derive(Debug)]
pub struct Singleton {
    created_at: Instant,
}

impl Singleton {
    fn new() -> Self {
        Self {
            created_at: Instant::now(),
        }
    }

    /// Return the process-wide instance, creating it on first use.
    pub fn get_instance() -> &'static Singleton {
        INSTANCE.get_instance()
    }

    /// Placeholder for behaviour that would live on the shared instance.
    pub fn some_business_logic(&self) {}

    /// When the instance was constructed.
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}
