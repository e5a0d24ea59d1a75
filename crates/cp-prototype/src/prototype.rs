//! The `Prototype` trait and two concrete prototypes.
//!
//! A prototype knows how to clone itself behind a trait object, so callers
//! can copy it without naming its concrete type.

use std::fmt;

/// An object that can produce an independent copy of itself.
pub trait Prototype: fmt::Debug + Send + Sync {
    /// Clone into a new boxed trait object.
    fn clone_box(&self) -> Box<dyn Prototype>;

    /// Name given at registration.
    fn name(&self) -> &str;

    /// Last value passed to [`method`](Prototype::method), if any.
    fn field(&self) -> Option<f32>;

    /// Store `field` and describe the call.
    fn method(&mut self, field: f32) -> String;
}

impl Clone for Box<dyn Prototype> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

fn describe(name: &str, field: f32) -> String {
    format!("Call Method from {name} with field : {field}")
}

macro_rules! concrete_prototype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            name: String,
            field: Option<f32>,
            concrete_field: f32,
        }

        impl $name {
            /// Create a prototype named `name` carrying `concrete_field`.
            pub fn new(name: impl Into<String>, concrete_field: f32) -> Self {
                Self {
                    name: name.into(),
                    field: None,
                    concrete_field,
                }
            }

            /// Value fixed at construction.
            pub fn concrete_field(&self) -> f32 {
                self.concrete_field
            }
        }

        impl Prototype for $name {
            fn clone_box(&self) -> Box<dyn Prototype> {
                Box::new(self.clone())
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn field(&self) -> Option<f32> {
                self.field
            }

            fn method(&mut self, field: f32) -> String {
                self.field = Some(field);
                describe(&self.name, field)
            }
        }
    };
}

concrete_prototype!(
    /// First concrete prototype.
    ConcretePrototype1
);

concrete_prototype!(
    /// Second concrete prototype.
    ConcretePrototype2
);
