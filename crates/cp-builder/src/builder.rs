//! The `Builder` interface and a concrete builder.

use crate::product::Product;

/// Construction steps shared by every builder.
pub trait Builder {
    /// Add the first kind of part.
    fn produce_part_a(&mut self);
    /// Add the second kind of part.
    fn produce_part_b(&mut self);
    /// Add the third kind of part.
    fn produce_part_c(&mut self);
}

/// Builder that assembles a [`Product`] from `PartA1`, `PartB1`, `PartC1`.
///
/// All steps work on the same in-progress product until
/// [`product`](ConcreteBuilder::product) hands it out.
#[derive(Debug, Default)]
pub struct ConcreteBuilder {
    product: Product,
}

impl ConcreteBuilder {
    /// A builder holding a blank product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the in-progress product and start a blank one.
    pub fn reset(&mut self) {
        self.product = Product::new();
    }

    /// Take the assembled product, leaving the builder reset.
    pub fn product(&mut self) -> Product {
        let product = std::mem::take(&mut self.product);
        tracing::debug!(parts = product.parts().len(), "product handed out");
        product
    }
}

impl Builder for ConcreteBuilder {
    fn produce_part_a(&mut self) {
        self.product.add_part("PartA1");
    }

    fn produce_part_b(&mut self) {
        self.product.add_part("PartB1");
    }

    fn produce_part_c(&mut self) {
        self.product.add_part("PartC1");
    }
}
