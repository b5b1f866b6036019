//! Domain types for the Shelf product catalog.

mod id;
mod product;

pub use id::ProductId;
pub use product::{Product, ProductDraft, ValidationError};
