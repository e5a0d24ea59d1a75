//! Fixed construction sequences.
//!
//! The director only decides the order of steps; it works with any
//! [`Builder`] the client passes in. Using it is optional.

use crate::builder::Builder;

/// Runs predefined step sequences against a builder.
#[derive(Debug, Default, Clone, Copy)]
pub struct Director;

impl Director {
    /// Create a director.
    pub fn new() -> Self {
        Self
    }

    /// Part A only.
    pub fn build_minimal_viable_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
    }

    /// Parts A, B and C.
    pub fn build_full_featured_product(&self, builder: &mut dyn Builder) {
        builder.produce_part_a();
        builder.produce_part_b();
        builder.produce_part_c();
    }
}
