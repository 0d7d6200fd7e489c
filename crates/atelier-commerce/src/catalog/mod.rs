//! Product catalog types.

mod product;

pub use product::{demo_catalog, Product, ProductRef};
