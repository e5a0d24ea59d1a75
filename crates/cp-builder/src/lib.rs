//! # cp-builder
//!
//! The Builder creational pattern: a complex product is assembled step by
//! step, and a [`Director`] can replay fixed step sequences against any
//! [`Builder`].
//!
//! ```
//! use cp_builder::{ConcreteBuilder, Director};
//!
//! let mut builder = ConcreteBuilder::new();
//! Director::new().build_full_featured_product(&mut builder);
//! assert_eq!(builder.product().list_parts(), "Product parts: PartA1, PartB1, PartC1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// The `Builder` trait and `ConcreteBuilder`.
pub mod builder;

/// Step sequences.
pub mod director;

/// The assembled product.
pub mod product;

pub use builder::{Builder, ConcreteBuilder};
pub use director::Director;
pub use product::Product;
