//! The product assembled by builders.

use std::fmt;

/// A product made of named parts, in assembly order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Product {
    parts: Vec<String>,
}

impl Product {
    /// An empty product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part.
    pub fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Parts in assembly order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// `true` if no part has been added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Render as `"Product parts: A, B, C"`.
    pub fn list_parts(&self) -> String {
        format!("Product parts: {}", self.parts.join(", "))
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.list_parts())
    }
}
